// src/state.rs
use std::sync::Arc;

use crate::services::chatbot::ReplyMode;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: ReplyMode,
}

impl AppState {
    pub fn new(mode: ReplyMode) -> Self {
        Self { mode }
    }
}
