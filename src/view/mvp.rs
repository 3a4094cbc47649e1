use super::player::player_badge;
use crate::config::RenderConfig;
use crate::model::{Element, Match, Node};

/// MVP names in display order: team1's, then team2's.
pub fn mvp_names(m: &Match) -> [&str; 2] {
    [m.team1.mvp.as_str(), m.team2.mvp.as_str()]
}

/// One MVP entry: a bold label (wide viewports only) and a dark player pill.
pub fn mvp_entry(config: &RenderConfig, name: &str) -> Node {
    Element::new("span")
        .class("mvp")
        .child(
            Element::new("b")
                .class("d-none d-lg-inline")
                .text("MVP:\u{a0}"),
        )
        .child(
            Element::new("span")
                .class("badge badge-pill bg-dark")
                .child(player_badge(config, name, None, false)),
        )
        .text("\u{a0}")
        .into_node()
}

pub fn mvps(config: &RenderConfig, names: [&str; 2]) -> Node {
    Element::new("span")
        .class("mvps")
        .children(names.map(|name| mvp_entry(config, name)))
        .into_node()
}
