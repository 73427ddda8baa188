use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub channel: String,
    pub views: String,
    pub published_at: String,
    pub duration: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub videos: Vec<Video>,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Search,
    Channel,
    Trending,
}

impl RuleType {
    pub fn display_name(&self) -> &'static str {
        match self {
            RuleType::Search => "Search",
            RuleType::Channel => "Channel",
            RuleType::Trending => "Trending",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleAction {
    AddToPlaylist,
    Download,
    Notify,
}

impl RuleAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            RuleAction::AddToPlaylist => "add to playlist",
            RuleAction::Download => "download",
            RuleAction::Notify => "notify",
        }
    }
}

/// A stored description of a recurring search-and-collect action.
///
/// Nothing runs these; `last_run` is only ever carried through storage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: String,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    pub query: String,
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_playlist: Option<String>,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Search,
    Playlists,
    Automations,
}

impl Tab {
    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Search => "Search",
            Tab::Playlists => "Playlists",
            Tab::Automations => "Automations",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![Tab::Search, Tab::Playlists, Tab::Automations]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_uses_stored_field_names() {
        let rule = AutomationRule {
            id: "automation-1".to_string(),
            rule_type: RuleType::Search,
            query: "news".to_string(),
            action: RuleAction::AddToPlaylist,
            target_playlist: Some("playlist-1".to_string()),
            frequency: "daily".to_string(),
            last_run: None,
            enabled: true,
        };

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["type"], "search");
        assert_eq!(value["action"], "add_to_playlist");
        assert_eq!(value["targetPlaylist"], "playlist-1");
        assert!(value.get("lastRun").is_none());
    }

    #[test]
    fn test_rule_reads_stored_blob() {
        let stored = r#"{"id":"automation-9","type":"trending","query":"","action":"notify",
            "frequency":"weekly","lastRun":"2024-03-01T00:00:00.000Z","enabled":false}"#;

        let rule: AutomationRule = serde_json::from_str(stored).unwrap();
        assert_eq!(rule.rule_type, RuleType::Trending);
        assert_eq!(rule.action, RuleAction::Notify);
        assert_eq!(rule.target_playlist, None);
        assert_eq!(rule.last_run.as_deref(), Some("2024-03-01T00:00:00.000Z"));
        assert!(!rule.enabled);
    }

    #[test]
    fn test_video_uses_camel_case() {
        let video = Video {
            id: "v".to_string(),
            title: "t".to_string(),
            thumbnail: "th".to_string(),
            channel: "c".to_string(),
            views: "N/A".to_string(),
            published_at: "1/5/2024".to_string(),
            duration: "N/A".to_string(),
        };
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["publishedAt"], "1/5/2024");
    }
}
