use serde::{Deserialize, Deserializer, Serialize};

use super::team::{Conference, Team};
use crate::error::{Result, TourneyError};

/// A head-to-head contest between two teams, played over one or more maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Opaque identifier, binds the card summary to its detail panel.
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    pub team1: Team,
    pub team2: Team,
    /// Maps in the order they were played.
    #[serde(default, deserialize_with = "null_as_default")]
    pub maps: Vec<Map>,
    #[serde(default)]
    pub conference: Conference,
}

/// A single map played within a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    /// Game id on the lookup site.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team1_caps: Vec<Cap>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team2_caps: Vec<Cap>,
}

/// A flag capture, attributed to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cap {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl Match {
    /// Check that every field a card needs is present.
    ///
    /// An empty map list is valid; a card renders a "no maps" state for it.
    pub fn validate(&self) -> Result<()> {
        require("match uuid", &self.uuid, || "match".to_string())?;
        for (side, team) in [("team1", &self.team1), ("team2", &self.team2)] {
            require("team symbol", &team.sym, || format!("{side} of match {}", self.uuid))?;
            require("team name", &team.name, || format!("{side} of match {}", self.uuid))?;
        }
        for (index, map) in self.maps.iter().enumerate() {
            require("map id", &map.id, || {
                format!("map #{} of match {}", index + 1, self.uuid)
            })?;
        }
        Ok(())
    }
}

/// Treat an explicit `null` in the feed like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn require(field: &'static str, value: &str, context: impl FnOnce() -> String) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TourneyError::InvalidData {
            field,
            context: context(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(sym: &str, name: &str) -> Team {
        Team {
            sym: sym.to_string(),
            name: name.to_string(),
            mvp: "pj".to_string(),
        }
    }

    fn valid_match() -> Match {
        Match {
            uuid: "m1".to_string(),
            team1: team("A", "Alpha"),
            team2: team("B", "Bravo"),
            maps: vec![Map {
                id: "map1".to_string(),
                name: "Foo".to_string(),
                team1_caps: vec![],
                team2_caps: vec![],
            }],
            conference: Conference::Unaffiliated,
        }
    }

    #[test]
    fn test_validate_accepts_complete_match() {
        assert!(valid_match().validate().is_ok());

        let mut no_maps = valid_match();
        no_maps.maps.clear();
        assert!(no_maps.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let mut m = valid_match();
        m.uuid = String::new();
        assert!(matches!(
            m.validate(),
            Err(TourneyError::InvalidData { field: "match uuid", .. })
        ));

        let mut m = valid_match();
        m.team2.sym = "  ".to_string();
        match m.validate() {
            Err(TourneyError::InvalidData { field, context }) => {
                assert_eq!(field, "team symbol");
                assert_eq!(context, "team2 of match m1");
            }
            other => panic!("expected invalid data, got {other:?}"),
        }

        let mut m = valid_match();
        m.team1.name = String::new();
        assert!(matches!(
            m.validate(),
            Err(TourneyError::InvalidData { field: "team name", .. })
        ));

        let mut m = valid_match();
        m.maps[0].id = String::new();
        assert!(matches!(
            m.validate(),
            Err(TourneyError::InvalidData { field: "map id", .. })
        ));
    }

    #[test]
    fn test_deserialize_feed_match() {
        let json = r#"{
            "uuid": "m1",
            "team1": {"sym": "A", "name": "Alpha", "mvp": "pj"},
            "team2": {"sym": "B", "name": "Bravo", "mvp": "qx"},
            "conference": "blue",
            "maps": [{
                "id": "map1",
                "name": "Foo",
                "team1Caps": [{"name": "pj", "time": "01:20"}],
                "team2Caps": []
            }]
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.conference, Conference::Blue);
        assert_eq!(m.maps[0].team1_caps[0].time.as_deref(), Some("01:20"));
        assert!(m.maps[0].team2_caps.is_empty());
    }

    #[test]
    fn test_deserialize_nulls_as_empty() {
        let json = r#"{
            "uuid": "m1",
            "team1": {"sym": "A", "name": "Alpha", "mvp": null},
            "team2": {"sym": "B", "name": "Bravo", "mvp": "qx"},
            "maps": [
                {"id": "map1", "name": null, "team1Caps": null, "team2Caps": [{"time": "01:00"}]},
                {"id": "map2"}
            ]
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert!(m.team1.mvp.is_empty());
        assert!(m.maps[0].name.is_empty());
        assert!(m.maps[0].team1_caps.is_empty());
        assert!(m.maps[0].team2_caps[0].name.is_empty());
        assert_eq!(m.maps[0].team2_caps[0].time.as_deref(), Some("01:00"));
        assert!(m.maps[1].team2_caps.is_empty());
        assert!(m.validate().is_ok());

        let m: Match = serde_json::from_str(
            r#"{"uuid": null, "maps": null, "team1": {"sym": "A", "name": "Alpha"}, "team2": {"sym": null, "name": "Bravo"}}"#,
        )
        .unwrap();
        assert!(m.maps.is_empty());
        assert!(matches!(
            m.validate(),
            Err(TourneyError::InvalidData { field: "match uuid", .. })
        ));
    }

    #[test]
    fn test_deserialize_missing_fields_fail_validation() {
        let json = r#"{
            "team1": {"name": "Alpha", "mvp": "pj"},
            "team2": {"sym": "B", "name": "Bravo", "mvp": "qx"},
            "conference": null
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.conference, Conference::Unaffiliated);
        assert!(m.maps.is_empty());
        assert!(matches!(
            m.validate(),
            Err(TourneyError::InvalidData { field: "match uuid", .. })
        ));
    }
}
