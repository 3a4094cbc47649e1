use super::player::player_badge;
use super::NO_MAPS;
use crate::config::RenderConfig;
use crate::model::{Cap, Element, Map, Node, Team};

/// Link to a map's game on the lookup site.
pub fn lookup_url(config: &RenderConfig, map_id: &str) -> String {
    format!("{}{}", config.lookup_base, urlencoding::encode(map_id))
}

fn list_item(columns: impl IntoIterator<Item = Element>) -> Element {
    Element::new("li")
        .class("list-group-item")
        .child(Element::new("div").class("row").children(columns))
}

fn column() -> Element {
    Element::new("div").class("col")
}

fn header_cell(label: String) -> Element {
    column().child(Element::new("b").text(label))
}

/// Column labels of the map breakdown.
pub fn map_header(team1: &Team, team2: &Team) -> Node {
    list_item([
        header_cell("Map".to_string()),
        header_cell(format!("{} Caps", team1.sym)),
        header_cell(format!("{} Caps", team2.sym)),
    ])
    .into_node()
}

/// Vertical stack of capture badges, in capture order. Empty caps give an empty stack.
pub fn cap_stack(config: &RenderConfig, caps: &[Cap]) -> Node {
    Element::new("div")
        .class("d-flex flex-column")
        .children(
            caps.iter()
                .map(|cap| player_badge(config, &cap.name, cap.time.as_deref(), true)),
        )
        .into_node()
}

pub fn map_row(config: &RenderConfig, map: &Map) -> Node {
    let link = Element::new("a")
        .class("game-link")
        .attr("target", "_blank")
        .attr("href", lookup_url(config, &map.id))
        .text(&map.name);

    list_item([
        column().child(link),
        column().child(cap_stack(config, &map.team1_caps)),
        column().child(cap_stack(config, &map.team2_caps)),
    ])
    .into_node()
}

/// Header row followed by one row per map, or by a "no maps" row.
pub fn map_details(config: &RenderConfig, team1: &Team, team2: &Team, maps: &[Map]) -> Vec<Node> {
    let mut rows = Vec::with_capacity(maps.len() + 1);
    rows.push(map_header(team1, team2));
    if maps.is_empty() {
        rows.push(
            Element::new("li")
                .class("list-group-item no-maps")
                .text(NO_MAPS)
                .into_node(),
        );
    } else {
        rows.extend(maps.iter().map(|map| map_row(config, map)));
    }
    rows
}
