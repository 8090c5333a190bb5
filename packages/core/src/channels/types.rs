//! Channel record as returned by the Slack Web API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Slack channel.
///
/// Only the fields the step acts on are typed. Everything else Slack sends
/// (`created`, `creator`, `members`, `topic`, ...) is kept in `extra`, so the
/// record serialises back out the way it came in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(rename = "is_archived", default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_archived: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            archived: Some(is_archived),
            extra: Map::new(),
        }
    }

    /// Whether the channel is archived; a record without the flag is not.
    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "id": "C024BE91L",
            "name": "fun",
            "created": 1360782804,
            "creator": "U024BE7LH",
            "is_archived": false,
            "is_general": false,
            "members": ["U024BE7LH"],
            "topic": { "value": "Fun times", "creator": "U024BE7LV", "last_set": 1369677212 }
        });

        let channel: Channel = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(channel.id, "C024BE91L");
        assert_eq!(channel.extra["creator"], "U024BE7LH");

        assert_eq!(serde_json::to_value(&channel).unwrap(), raw);
    }

    #[test]
    fn missing_is_archived_defaults_to_false() {
        let channel: Channel =
            serde_json::from_value(json!({ "id": "C1", "name": "ops" })).unwrap();
        assert!(!channel.is_archived());
    }

    #[test]
    fn missing_is_archived_is_not_added_on_output() {
        let raw = json!({ "created": 1, "id": "C1", "name": "ops" });

        let channel: Channel = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(channel.archived, None);
        assert_eq!(serde_json::to_value(&channel).unwrap(), raw);
    }
}
