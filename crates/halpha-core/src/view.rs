//! Table-shaped view of one feed snapshot, independent of how it is drawn.

use chrono::{DateTime, Utc};
use halpha_feed::{FeedEnvelope, SiteReport};
use serde::Serialize;

use crate::age::format_age;
use crate::icons::StatusIcon;
use crate::sites::resolve_site_name;

pub const DASHBOARD_TITLE: &str = "GONG H-Alpha Dashboard";

pub const COLUMN_HEADERS: [&str; 5] = ["Status", "Site", "Data age", "Latest Image", "Movie Page"];

/// Relative column widths, in the same order as `COLUMN_HEADERS`.
pub const COLUMN_WEIGHTS: [u32; 5] = [2, 5, 5, 3, 3];

pub const IMAGE_LINK_LABEL: &str = "Image link";
pub const MOVIE_LINK_LABEL: &str = "Movie link";

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S %Z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteRow {
    pub icon: StatusIcon,
    pub site_code: String,
    pub site_name: String,
    pub age_seconds: u64,
    pub age_text: String,
    pub image_link: Option<String>,
    pub movie_link: Option<String>,
}

impl SiteRow {
    pub fn from_report(report: &SiteReport) -> Self {
        Self {
            icon: StatusIcon::for_age(report.age_seconds),
            site_code: report.site_code.clone(),
            site_name: resolve_site_name(&report.site_code).to_string(),
            age_seconds: report.age_seconds,
            age_text: format_age(report.age_seconds),
            image_link: report.image_href().map(str::to_string),
            movie_link: report.movie_href().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    Header { columns: [&'static str; 5] },
    Site(SiteRow),
}

/// Header row followed by one row per site, in feed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTable {
    rows: Vec<TableRow>,
}

impl StatusTable {
    pub fn from_reports(reports: &[SiteReport]) -> Self {
        let mut rows = Vec::with_capacity(reports.len() + 1);
        rows.push(TableRow::Header {
            columns: COLUMN_HEADERS,
        });
        rows.extend(reports.iter().map(SiteRow::from_report).map(TableRow::Site));
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn site_rows(&self) -> impl Iterator<Item = &SiteRow> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Site(site) => Some(site),
            TableRow::Header { .. } => None,
        })
    }
}

/// Everything drawn for one successful poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub title: &'static str,
    pub table: StatusTable,
    /// Raw HTML from the feed, rendered unescaped.
    pub footer_html: String,
    pub fetched_at: DateTime<Utc>,
}

impl StatusSnapshot {
    pub fn from_envelope(envelope: &FeedEnvelope, fetched_at: DateTime<Utc>) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            table: StatusTable::from_reports(&envelope.site_info),
            footer_html: envelope.message.clone(),
            fetched_at,
        }
    }

    pub fn last_updated(&self) -> String {
        format_timestamp(self.fetched_at)
    }
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
