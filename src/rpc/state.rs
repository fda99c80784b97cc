//! Server state management for the teardrop server

use crate::board::Board;
use crate::draw::teardrop::TeardropConfig;

/// In-memory state: the open board and the teardrop settings to apply
#[derive(Default)]
pub struct ServerState {
    pub board: Option<Board>,
    pub config: TeardropConfig,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a board is loaded
    pub fn is_file_loaded(&self) -> bool {
        self.board.is_some()
    }
}
