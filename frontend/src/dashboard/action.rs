//! Discrete user events the dashboard reacts to.
//!
//! Components dispatch actions; the reducer applies them to a clone of the
//! current state.

use crate::dashboard::state::Dashboard;
use crate::models::{Tab, Video};
use crate::search::SearchError;
use crate::storage::KeyValueStorage;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug)]
pub enum DashboardAction {
    SelectTab(Tab),
    SetQuery(String),

    // Credential gate
    SaveCredential(String),
    ForgetCredential,
    EnterDemoMode,
    OpenSettings,

    // Search
    SubmitSearch,
    SearchFinished {
        query: String,
        outcome: Result<Vec<Video>, SearchError>,
    },
    ToggleSelection(String),
    AddSelectionToPlaylist(String),

    // Playlists
    CreatePlaylist { name: String, now: DateTime<Utc> },
    DeletePlaylist(String),

    // Automation rules
    CreateAutomation { now: DateTime<Utc> },
    ToggleAutomation(String),
    DeleteAutomation(String),

    DismissStorageError,
}

impl<S: KeyValueStorage> Dashboard<S> {
    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SelectTab(tab) => self.active_tab = tab,
            DashboardAction::SetQuery(query) => self.query = query,
            DashboardAction::SaveCredential(api_key) => self.save_credential(&api_key),
            DashboardAction::ForgetCredential => self.forget_credential(),
            DashboardAction::EnterDemoMode => self.enter_demo_mode(),
            DashboardAction::OpenSettings => self.open_settings(),
            DashboardAction::SubmitSearch => {
                self.submit_search();
            }
            DashboardAction::SearchFinished { query, outcome } => {
                self.finish_search(&query, outcome)
            }
            DashboardAction::ToggleSelection(video_id) => self.toggle_selection(&video_id),
            DashboardAction::AddSelectionToPlaylist(playlist_id) => {
                self.add_selection_to_playlist(&playlist_id);
            }
            DashboardAction::CreatePlaylist { name, now } => {
                self.create_playlist(&name, now);
            }
            DashboardAction::DeletePlaylist(playlist_id) => self.delete_playlist(&playlist_id),
            DashboardAction::CreateAutomation { now } => {
                self.create_automation(now);
            }
            DashboardAction::ToggleAutomation(id) => self.toggle_automation(&id),
            DashboardAction::DeleteAutomation(id) => self.delete_automation(&id),
            DashboardAction::DismissStorageError => self.dismiss_storage_error(),
        }
    }
}

impl<S: KeyValueStorage + Clone> Reducible for Dashboard<S> {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
