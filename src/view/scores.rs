use itertools::Itertools;

use super::{last_element, light_pill, no_maps_pill};
use crate::model::{Element, Map, Node};

pub(crate) const SEPARATOR: &str = " / ";

/// Captures per side on one map, e.g. `2-1`.
pub fn map_score(map: &Map) -> String {
    format!("{}-{}", map.team1_caps.len(), map.team2_caps.len())
}

/// Score of every map, each paired with the separator that follows it.
///
/// Only the last map has no separator.
fn score_entries(maps: &[Map]) -> Vec<(String, Option<&'static str>)> {
    let Some(last) = last_element(maps) else {
        return Vec::new();
    };
    maps.iter()
        .map(|map| {
            let separator = (!std::ptr::eq(map, last)).then_some(SEPARATOR);
            (map_score(map), separator)
        })
        .collect_vec()
}

/// All map scores as one line, e.g. `2-1 / 0-3`. `None` without maps.
pub fn score_line(maps: &[Map]) -> Option<String> {
    let entries = score_entries(maps);
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .into_iter()
            .map(|(score, separator)| score + separator.unwrap_or_default())
            .join(""),
    )
}

/// Inline score summary: one pill per map, separated but not trailed by ` / `.
pub fn scores(maps: &[Map]) -> Node {
    let summary = Element::new("span").class("scores");
    let entries = score_entries(maps);
    if entries.is_empty() {
        return summary.child(no_maps_pill()).into_node();
    }

    summary
        .children(entries.into_iter().map(|(score, separator)| {
            Element::new("span")
                .child(light_pill(score))
                .maybe_child(separator.map(Node::from))
        }))
        .into_node()
}
