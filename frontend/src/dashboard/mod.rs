pub mod action;
pub mod automations;
pub mod gate;
pub mod playlists;
pub mod state;
pub mod view;
