//! Window identity and lifecycle shared by the form and admin windows.

use std::fmt::Display;

/// Identifies one window opened from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window_{}", self.0)
    }
}

/// `Closed` is terminal: a closed window is never reopened, a new one is
/// created instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Open,
    Closed,
}

impl WindowState {
    pub fn is_open(self) -> bool {
        matches!(self, WindowState::Open)
    }
}
