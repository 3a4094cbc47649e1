use maud::{html, Markup};
use tracing::{debug, instrument};

use crate::config::RenderConfig;
use crate::error::Result;
use crate::feed::{parse_matches, FeedEntry};
use crate::model::{Match, Node};
use crate::view;

/// The main entry point for turning matches into card view trees.
///
/// `TourneyRenderer` holds a [`RenderConfig`] and exposes methods to render
/// a single card, a laid-out row, a list of matches, or a raw JSON feed.
///
/// # Examples
///
/// ```
/// # fn example() -> tourney_cards::Result<()> {
/// use tourney_cards::TourneyRenderer;
///
/// let renderer = TourneyRenderer::new();
/// let html = renderer.render_feed(r#"[{
///     "uuid": "m1",
///     "team1": {"sym": "A", "name": "Alpha", "mvp": "pj"},
///     "team2": {"sym": "B", "name": "Bravo", "mvp": "qx"},
///     "conference": "red",
///     "maps": []
/// }]"#)?;
/// assert!(html.contains(r#"id="card-content-m1""#));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourneyRenderer {
    config: RenderConfig,
}

impl TourneyRenderer {
    /// Create a renderer pointing at the default lookup and avatar hosts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer using the provided [`RenderConfig`].
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the card of a single match.
    #[instrument(skip_all, fields(uuid = %m.uuid))]
    pub fn render_match(&self, m: &Match) -> Result<Node> {
        view::card::match_card(&self.config, m)
    }

    /// Render a match card wrapped in its layout row.
    #[instrument(skip_all, fields(uuid = %m.uuid))]
    pub fn render_row(&self, m: &Match) -> Result<Node> {
        view::card::card_row(&self.config, m)
    }

    /// Render one row per match; invalid matches become placeholder rows.
    #[instrument(skip_all, fields(matches = matches.len()))]
    pub fn render_rows(&self, matches: &[Match]) -> Vec<Node> {
        view::card::card_rows(&self.config, matches)
    }

    /// Render one row per parsed feed entry, including placeholders for malformed ones.
    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn render_entries(&self, entries: &[FeedEntry]) -> Vec<Node> {
        view::card::feed_rows(&self.config, entries)
    }

    /// Render every match and serialize the rows to an HTML fragment.
    pub fn render_html(&self, matches: &[Match]) -> String {
        rows_to_html(&self.render_rows(matches))
    }

    /// Parse a JSON match feed and serialize its rows to an HTML fragment.
    ///
    /// Fails only when the feed is not a JSON array.
    pub fn render_feed(&self, json: &str) -> Result<String> {
        let entries = parse_matches(json)?;
        Ok(rows_to_html(&self.render_entries(&entries)))
    }
}

fn rows_to_html(rows: &[Node]) -> String {
    let markup: Markup = html! {
        @for row in rows {
            (row)
        }
    };
    let html = markup.into_string();
    debug!(rows = rows.len(), bytes = html.len(), "serialized match rows");
    html
}
