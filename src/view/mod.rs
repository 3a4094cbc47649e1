pub mod card;
pub mod maps;
pub mod mvp;
pub mod player;
pub mod scores;

use crate::model::{Element, Node};

/// Text shown wherever a match has no maps to summarize.
pub(crate) const NO_MAPS: &str = "No maps played";

/// The last item of `items`, or `None` when there are none.
pub fn last_element<T>(items: &[T]) -> Option<&T> {
    items.last()
}

/// A light pill badge, the building block of the score summary.
pub(crate) fn light_pill(text: impl Into<String>) -> Element {
    Element::new("span")
        .class("badge badge-pill badge-light")
        .text(text)
}

/// Explicit empty state for a match without maps.
pub(crate) fn no_maps_pill() -> Node {
    light_pill(NO_MAPS).class("no-maps").into_node()
}
