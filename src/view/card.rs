use tracing::{debug, instrument, warn};

use super::maps::map_details;
use super::mvp::{mvp_names, mvps};
use super::scores::scores;
use crate::config::RenderConfig;
use crate::error::{Result, TourneyError};
use crate::feed::FeedEntry;
use crate::model::{Element, Match, Node};

const PANEL_PREFIX: &str = "card-content-";

/// Id of the collapsible detail panel of a match.
pub fn panel_id(uuid: &str) -> String {
    format!("{PANEL_PREFIX}{uuid}")
}

/// Selector the summary's collapse toggle points at; addresses [`panel_id`].
pub fn toggle_target(uuid: &str) -> String {
    format!("#{}", panel_id(uuid))
}

fn symbol_pill(sym: &str) -> Element {
    Element::new("span")
        .class("d-none d-lg-inline badge badge-pill badge-light align-middle")
        .text(sym)
}

fn card_title(m: &Match) -> Node {
    Element::new("h4")
        .class("card-title")
        .child(symbol_pill(&m.team1.sym))
        .text(format!(" {} vs. {} ", m.team1.name, m.team2.name))
        .child(symbol_pill(&m.team2.sym))
        .into_node()
}

/// Clickable summary: title, scores and MVPs. Toggles the detail panel.
pub fn card_summary(config: &RenderConfig, m: &Match) -> Node {
    Element::new("div")
        .class("card-body")
        .attr("data-toggle", "collapse")
        .attr("data-target", toggle_target(&m.uuid))
        .attr("aria-controls", panel_id(&m.uuid))
        .child(card_title(m))
        .child(
            Element::new("div")
                .class("row d-flex justify-content-between px-3")
                .child(scores(&m.maps))
                .child(mvps(config, mvp_names(m))),
        )
        .into_node()
}

/// Collapsed detail panel holding the per-map breakdown.
pub fn card_content(config: &RenderConfig, m: &Match) -> Node {
    Element::new("div")
        .class("collapse bg-white")
        .attr("id", panel_id(&m.uuid))
        .child(
            Element::new("ul")
                .class("list-group list-group-flush")
                .children(map_details(config, &m.team1, &m.team2, &m.maps)),
        )
        .into_node()
}

/// Full card for one match. Fails when a required field is missing.
#[instrument(skip_all, fields(uuid = %m.uuid))]
pub fn match_card(config: &RenderConfig, m: &Match) -> Result<Node> {
    m.validate()?;

    let card = Element::new("div")
        .class("card")
        .class(m.conference.highlight().map(<&str>::from).unwrap_or_default())
        .child(card_summary(config, m))
        .child(card_content(config, m));

    debug!(maps = m.maps.len(), "rendered match card");
    Ok(card.into_node())
}

fn layout_row(content: Node) -> Node {
    Element::new("div")
        .class("row py-2")
        .child(Element::new("div").class("col-sm-3"))
        .child(Element::new("div").class("col-sm").child(content))
        .child(Element::new("div").class("col-sm-3"))
        .into_node()
}

/// A match card centered between two empty flanking columns.
pub fn card_row(config: &RenderConfig, m: &Match) -> Result<Node> {
    match_card(config, m).map(layout_row)
}

/// Visible stand-in for a match that could not be rendered.
pub fn error_card(err: &TourneyError) -> Node {
    Element::new("div")
        .class("card card-error bg-warning")
        .child(
            Element::new("div")
                .class("card-body")
                .text(format!("Match could not be displayed: {err}")),
        )
        .into_node()
}

fn row_or_placeholder(config: &RenderConfig, m: &Match) -> Node {
    card_row(config, m).unwrap_or_else(|err| {
        warn!(uuid = %m.uuid, error = %err, "substituting placeholder for match");
        layout_row(error_card(&err))
    })
}

/// One row per match. Invalid matches become placeholders, their siblings still render.
pub fn card_rows(config: &RenderConfig, matches: &[Match]) -> Vec<Node> {
    matches
        .iter()
        .map(|m| row_or_placeholder(config, m))
        .collect()
}

/// One row per feed entry; entries that failed to parse become placeholders as well.
pub fn feed_rows(config: &RenderConfig, entries: &[FeedEntry]) -> Vec<Node> {
    entries
        .iter()
        .map(|entry| match entry {
            Ok(m) => row_or_placeholder(config, m),
            Err(err) => layout_row(error_card(err)),
        })
        .collect()
}
