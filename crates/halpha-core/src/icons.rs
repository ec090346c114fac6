use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::age::DAY;
use crate::error::{DashboardError, Result};

const NIGHT_AFTER: u64 = 3600;
const QUESTION_MARK_FROM: u64 = 3 * DAY;
const CROSS_FROM: u64 = 10 * DAY;

/// Status glyph shown in the first column of each site row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    Day,
    Night,
    QuestionMark,
    Cross,
}

impl StatusIcon {
    pub const ALL: [StatusIcon; 4] = [
        StatusIcon::Day,
        StatusIcon::Night,
        StatusIcon::QuestionMark,
        StatusIcon::Cross,
    ];

    /// Thresholds are checked in ascending order and the last match wins.
    pub fn for_age(age_seconds: u64) -> Self {
        let mut icon = StatusIcon::Day;
        if age_seconds > NIGHT_AFTER {
            icon = StatusIcon::Night;
        }
        if age_seconds >= QUESTION_MARK_FROM {
            icon = StatusIcon::QuestionMark;
        }
        if age_seconds >= CROSS_FROM {
            icon = StatusIcon::Cross;
        }
        icon
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusIcon::Day => "day",
            StatusIcon::Night => "night",
            StatusIcon::QuestionMark => "question-mark",
            StatusIcon::Cross => "cross",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            StatusIcon::Day => "day.svg",
            StatusIcon::Night => "night.svg",
            StatusIcon::QuestionMark => "questionMark.svg",
            StatusIcon::Cross => "cross.svg",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.file_name() == name)
    }
}

/// Fails with the first icon file not present under `dir`.
pub fn verify_icons(dir: &Path) -> Result<()> {
    for icon in StatusIcon::ALL {
        let path = dir.join(icon.file_name());
        if !path.is_file() {
            return Err(DashboardError::MissingIcon(path));
        }
        debug!(icon = icon.label(), path = %path.display(), "status icon present");
    }
    Ok(())
}
