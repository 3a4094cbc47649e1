use serde::{Deserialize, Serialize};

const LOOKUP_BASE: &str = "https://www.brawl.com/games/ctf/lookup/";
const AVATAR_BASE: &str = "http://cravatar.eu/avatar/";
const AVATAR_SIZE: u16 = 15;

/// Hosts and sizes baked into the links a rendered card emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix of map lookup links; the map id is appended.
    pub lookup_base: String,
    /// Prefix of avatar images; `<player>/<size>.png` is appended.
    pub avatar_base: String,
    pub avatar_size: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lookup_base: LOOKUP_BASE.to_string(),
            avatar_base: AVATAR_BASE.to_string(),
            avatar_size: AVATAR_SIZE,
        }
    }
}
