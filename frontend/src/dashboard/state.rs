use crate::models::{AutomationRule, Playlist, RuleAction, RuleType, Tab, Video};
use crate::search::mock::generate_mock_videos;
use crate::search::SearchError;
use crate::storage::{KeyValueStorage, LocalStateStore, StoreError};
use chrono::{DateTime, SecondsFormat, Utc};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const PLAYLIST_ID_PREFIX: &str = "playlist";
const AUTOMATION_ID_PREFIX: &str = "automation";
const DEFAULT_AUTOMATION_QUERY: &str = "trending";
const DEFAULT_DEMO_QUERY: &str = "demo";
const DEFAULT_FREQUENCY: &str = "daily";

/// What submitting the current query leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    /// Blank query.
    Ignore,
    /// No API key and demo mode not chosen yet.
    OpenGate,
    /// Demo mode: results are generated locally.
    Demo,
    /// Live search through the backend proxy.
    Fetch { query: String, api_key: String },
}

/// Where an automation rule would put what it collects. Deleting a playlist
/// never rewrites rules, so a target can go missing.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleTarget {
    Unset,
    Playlist(String),
    Missing(String),
}

/// All dashboard state. Every mutation of playlists, rules or the API key is
/// written straight back to the store.
#[derive(Debug, Clone)]
pub struct Dashboard<S> {
    store: LocalStateStore<S>,
    rng: StdRng,
    last_minted_millis: i64,

    pub active_tab: Tab,
    pub credential: Option<String>,
    pub show_gate: bool,
    pub demo_mode: bool,
    pub query: String,
    pub videos: Vec<Video>,
    pub loading: bool,
    pub selection: HashSet<String>,
    pub playlists: Vec<Playlist>,
    pub automations: Vec<AutomationRule>,
    pub storage_error: Option<String>,
}

// Suffixes at i64::MAX leave no room to mint above them, so they are ignored.
fn id_millis(id: &str) -> Option<i64> {
    id.rsplit_once('-')?
        .1
        .parse()
        .ok()
        .filter(|millis| *millis < i64::MAX)
}

impl<S: KeyValueStorage> Dashboard<S> {
    pub fn load(store: LocalStateStore<S>, seed: u64) -> Self {
        let credential = store.load_credential();
        let mut problems = Vec::new();

        let playlists = store.load_playlists().unwrap_or_else(|e| {
            error!("Resetting playlists: {e}");
            problems.push(e.to_string());
            Vec::new()
        });
        let automations = store.load_automations().unwrap_or_else(|e| {
            error!("Resetting automation rules: {e}");
            problems.push(e.to_string());
            Vec::new()
        });

        // Keep freshly minted ids above anything already stored.
        let last_minted_millis = playlists
            .iter()
            .map(|p| p.id.as_str())
            .chain(automations.iter().map(|a| a.id.as_str()))
            .filter_map(id_millis)
            .max()
            .unwrap_or(0);

        info!(
            "Loaded {} playlists and {} automation rules",
            playlists.len(),
            automations.len()
        );

        Dashboard {
            store,
            rng: StdRng::seed_from_u64(seed),
            last_minted_millis,
            active_tab: Tab::default(),
            show_gate: credential.is_none(),
            credential,
            demo_mode: false,
            query: String::new(),
            videos: Vec::new(),
            loading: false,
            selection: HashSet::new(),
            playlists,
            automations,
            storage_error: (!problems.is_empty()).then(|| problems.join("; ")),
        }
    }

    // Credential gate

    pub fn save_credential(&mut self, api_key: &str) {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return;
        }

        let result = self.store.save_credential(api_key);
        self.record(result);
        self.credential = Some(api_key.to_string());
        self.demo_mode = false;
        self.show_gate = false;
    }

    pub fn forget_credential(&mut self) {
        let result = self.store.clear_credential();
        self.record(result);
        self.credential = None;
        self.demo_mode = false;
        self.show_gate = true;
    }

    /// Closes the gate without a key and shows demo results for the current
    /// query.
    pub fn enter_demo_mode(&mut self) {
        self.show_gate = false;
        self.demo_mode = true;

        let query = if self.query.trim().is_empty() {
            DEFAULT_DEMO_QUERY.to_string()
        } else {
            self.query.clone()
        };
        let videos = generate_mock_videos(&query, &mut self.rng);
        self.replace_results(videos);
    }

    pub fn open_settings(&mut self) {
        self.show_gate = true;
    }

    // Search

    pub fn search_plan(&self) -> SearchPlan {
        if self.query.trim().is_empty() {
            return SearchPlan::Ignore;
        }

        match &self.credential {
            Some(api_key) => SearchPlan::Fetch {
                query: self.query.clone(),
                api_key: api_key.clone(),
            },
            None if self.demo_mode => SearchPlan::Demo,
            None => SearchPlan::OpenGate,
        }
    }

    pub fn submit_search(&mut self) -> SearchPlan {
        let plan = self.search_plan();
        match &plan {
            SearchPlan::Ignore => {}
            SearchPlan::OpenGate => self.show_gate = true,
            SearchPlan::Demo => {
                let videos = generate_mock_videos(&self.query, &mut self.rng);
                self.replace_results(videos);
            }
            SearchPlan::Fetch { .. } => {
                self.loading = true;
                self.selection.clear();
            }
        }
        plan
    }

    /// Applies the outcome of a live search. Failures fall back to demo data
    /// for the query that was searched.
    pub fn finish_search(&mut self, query: &str, outcome: Result<Vec<Video>, SearchError>) {
        let videos = match outcome {
            Ok(videos) => videos,
            Err(e) => {
                warn!("Search for \"{query}\" failed, showing demo results: {e}");
                generate_mock_videos(query, &mut self.rng)
            }
        };
        self.replace_results(videos);
        self.loading = false;
    }

    fn replace_results(&mut self, videos: Vec<Video>) {
        self.videos = videos;
        self.selection.clear();
    }

    pub fn toggle_selection(&mut self, video_id: &str) {
        if !self.selection.remove(video_id) {
            self.selection.insert(video_id.to_string());
        }
    }

    /// Appends the selected results to a playlist and clears the selection.
    /// Returns `false` when the playlist does not exist.
    pub fn add_selection_to_playlist(&mut self, playlist_id: &str) -> bool {
        let Some(playlist) = self.playlists.iter_mut().find(|p| p.id == playlist_id) else {
            return false;
        };

        let selected = self
            .videos
            .iter()
            .filter(|v| self.selection.contains(&v.id))
            .cloned();
        playlist.videos.extend(selected);

        self.persist_playlists();
        self.selection.clear();
        true
    }

    // Playlists

    pub fn create_playlist(&mut self, name: &str, now: DateTime<Utc>) -> Option<String> {
        if name.trim().is_empty() {
            return None;
        }

        let id = self.mint_id(PLAYLIST_ID_PREFIX, now);
        self.playlists.push(Playlist {
            id: id.clone(),
            name: name.to_string(),
            videos: Vec::new(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        self.persist_playlists();
        Some(id)
    }

    pub fn delete_playlist(&mut self, playlist_id: &str) {
        self.playlists.retain(|p| p.id != playlist_id);
        self.persist_playlists();
    }

    pub fn playlist_name(&self, playlist_id: &str) -> Option<&str> {
        self.playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .map(|p| p.name.as_str())
    }

    // Automation rules

    pub fn create_automation(&mut self, now: DateTime<Utc>) -> String {
        let query = if self.query.trim().is_empty() {
            DEFAULT_AUTOMATION_QUERY.to_string()
        } else {
            self.query.clone()
        };

        let id = self.mint_id(AUTOMATION_ID_PREFIX, now);
        self.automations.push(AutomationRule {
            id: id.clone(),
            rule_type: RuleType::Search,
            query,
            action: RuleAction::AddToPlaylist,
            target_playlist: None,
            frequency: DEFAULT_FREQUENCY.to_string(),
            last_run: None,
            enabled: true,
        });
        self.persist_automations();
        id
    }

    pub fn toggle_automation(&mut self, automation_id: &str) {
        if let Some(rule) = self.automations.iter_mut().find(|a| a.id == automation_id) {
            rule.enabled = !rule.enabled;
        }
        self.persist_automations();
    }

    pub fn delete_automation(&mut self, automation_id: &str) {
        self.automations.retain(|a| a.id != automation_id);
        self.persist_automations();
    }

    pub fn rule_target(&self, rule: &AutomationRule) -> RuleTarget {
        match rule.target_playlist.as_deref() {
            None => RuleTarget::Unset,
            Some(target) => match self.playlist_name(target) {
                Some(name) => RuleTarget::Playlist(name.to_string()),
                None => RuleTarget::Missing(target.to_string()),
            },
        }
    }

    /// True when the rule points at a playlist that no longer exists.
    pub fn has_dangling_target(&self, rule: &AutomationRule) -> bool {
        matches!(self.rule_target(rule), RuleTarget::Missing(_))
    }

    // Persistence

    pub fn dismiss_storage_error(&mut self) {
        self.storage_error = None;
    }

    fn persist_playlists(&mut self) {
        let result = self.store.save_playlists(&self.playlists);
        self.record(result);
    }

    fn persist_automations(&mut self) {
        let result = self.store.save_automations(&self.automations);
        self.record(result);
    }

    fn record(&mut self, result: Result<(), StoreError>) {
        if let Err(e) = result {
            error!("{e}");
            self.storage_error = Some(e.to_string());
        }
    }

    /// Time-based ids that strictly increase within a session.
    fn mint_id(&mut self, prefix: &str, now: DateTime<Utc>) -> String {
        let millis = now
            .timestamp_millis()
            .max(self.last_minted_millis.saturating_add(1));
        self.last_minted_millis = millis;
        format!("{prefix}-{millis}")
    }
}
