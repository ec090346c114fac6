use std::path::{Path, PathBuf};

use halpha_core::state::DashboardState;
use tokio::sync::watch;

/// Browsers reload the page this often so the countdown visibly ticks.
pub const PAGE_RELOAD_SECS: u32 = 1;

pub struct AppState {
    dashboard: watch::Receiver<DashboardState>,
    icons_dir: PathBuf,
}

impl AppState {
    pub fn new(dashboard: watch::Receiver<DashboardState>, icons_dir: PathBuf) -> Self {
        Self {
            dashboard,
            icons_dir,
        }
    }

    /// Latest published state; cloning keeps the channel unlocked while rendering.
    pub fn current(&self) -> DashboardState {
        self.dashboard.borrow().clone()
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }
}
