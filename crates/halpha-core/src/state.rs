use std::sync::Arc;

use serde::Serialize;

use crate::view::StatusSnapshot;

pub const LOADING_HEADING: &str = "Loading...";
pub const UPDATING_LINE: &str = "Updating...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DashboardPhase {
    Loading,
    Rendering,
    CountingDown { remaining_secs: u32 },
}

/// What the dashboard shows right now. Replaced wholesale on every phase change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    #[serde(flatten)]
    pub phase: DashboardPhase,
    pub snapshot: Option<Arc<StatusSnapshot>>,
}

impl DashboardState {
    pub fn loading() -> Self {
        Self {
            phase: DashboardPhase::Loading,
            snapshot: None,
        }
    }

    pub fn rendering(previous: Option<Arc<StatusSnapshot>>) -> Self {
        Self {
            phase: DashboardPhase::Rendering,
            snapshot: previous,
        }
    }

    pub fn counting_down(snapshot: Arc<StatusSnapshot>, remaining_secs: u32) -> Self {
        Self {
            phase: DashboardPhase::CountingDown { remaining_secs },
            snapshot: Some(snapshot),
        }
    }

    pub fn heading(&self) -> &'static str {
        match &self.snapshot {
            Some(snapshot) => snapshot.title,
            None => LOADING_HEADING,
        }
    }

    /// Line shown under the footer; `None` until the first snapshot exists.
    pub fn status_line(&self) -> Option<String> {
        let snapshot = self.snapshot.as_ref()?;
        match self.phase {
            DashboardPhase::CountingDown { remaining_secs } => Some(format!(
                "Last updated {}, next update in {} seconds",
                snapshot.last_updated(),
                remaining_secs
            )),
            DashboardPhase::Rendering => Some(UPDATING_LINE.to_string()),
            DashboardPhase::Loading => None,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::loading()
    }
}
