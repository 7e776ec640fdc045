//! Lazy-loaded image repair.
//!
//! Article pages defer image loading by keeping the real address in a
//! `data-*` attribute and leaving `src` empty or pointing at a placeholder.
//! Normalization promotes the real address into `src` and drops
//! presentation-only attributes so the Markdown renderer sees plain images.

use std::sync::LazyLock;

use ego_tree::NodeId;
use html5ever::{LocalName, QualName, namespace_url, ns};
use scraper::node::Element;
use scraper::{ElementRef, Html, Node, Selector, StrTendril};

use crate::config::patterns;

static IMG: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").expect("img selector should parse"));

/// Normalizes every `img` below `content` in place and hands the document back.
///
/// Nodes outside the `content` subtree are left untouched.
pub fn normalize_images(mut doc: Html, content: NodeId) -> Html {
	let images: Vec<NodeId> = doc
		.tree
		.get(content)
		.and_then(ElementRef::wrap)
		.map(|root| root.select(&IMG).map(|img| img.id()).collect())
		.unwrap_or_default();

	for id in images {
		let Some(mut node) = doc.tree.get_mut(id) else {
			continue;
		};

		let Node::Element(img) = node.value() else {
			continue;
		};

		normalize_image(img);
	}

	doc
}

fn normalize_image(img: &mut Element) {
	let images = &patterns().images;

	let lazy_source = images.lazy_source_attributes.iter().find_map(|attr| img.attr(attr).map(StrTendril::from));
	if let Some(source) = lazy_source {
		match img.attrs.iter_mut().find(|(name, _)| &*name.local == "src") {
			Some((_, value)) => *value = source,
			None => img.attrs.push((QualName::new(None, ns!(), LocalName::from("src")), source)),
		}
	}

	img.attrs.retain(|(name, _)| !images.presentation_attributes.iter().any(|attr| *attr == *name.local));
}
