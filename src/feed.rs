use itertools::Itertools;
use tracing::{debug, warn};

use crate::error::{Result, TourneyError};
use crate::model::Match;

/// A parsed feed entry, or the reason that entry could not be read.
pub type FeedEntry = Result<Match>;

/// Parse a JSON array of matches as produced by the match data source.
///
/// Only a feed that is not a JSON array fails as a whole. Each entry is
/// parsed on its own, so a malformed entry comes back as an `Err` next to
/// its siblings, and required fields are checked later when the match is
/// rendered.
pub fn parse_matches(json: &str) -> Result<Vec<FeedEntry>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let entries = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<Match>(entry).map_err(|source| {
                warn!(index, error = %source, "malformed feed entry");
                TourneyError::MalformedEntry { index, source }
            })
        })
        .collect_vec();
    debug!(
        count = entries.len(),
        malformed = entries.iter().filter(|e| e.is_err()).count(),
        "parsed match feed"
    );
    Ok(entries)
}
