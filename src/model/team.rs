use serde::{Deserialize, Serialize};
use tracing::warn;

use super::match_detail::null_as_default;

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Short display symbol, shown as a pill next to the name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sym: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Name of the player voted most valuable for this team.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mvp: String,
}

/// Bracket affiliation of a match. Only drives the card highlight.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Conference {
    Red,
    Blue,
    #[default]
    #[serde(rename = "none")]
    #[strum(serialize = "none")]
    Unaffiliated,
}

impl Conference {
    pub fn highlight(self) -> Option<Highlight> {
        match self {
            Conference::Red => Some(Highlight::ASide),
            Conference::Blue => Some(Highlight::BSide),
            Conference::Unaffiliated => None,
        }
    }
}

impl From<Option<String>> for Conference {
    fn from(s: Option<String>) -> Self {
        match s.as_deref().map(str::trim) {
            None | Some("") => Self::Unaffiliated,
            Some(s) => s.parse().unwrap_or_else(|_| {
                warn!("Unknown conference: {s}");
                Self::Unaffiliated
            }),
        }
    }
}

/// Card background applied for a conference; the string form is the class.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::IntoStaticStr,
)]
pub enum Highlight {
    #[strum(serialize = "bg-danger")]
    ASide,
    #[strum(serialize = "bg-info")]
    BSide,
}
