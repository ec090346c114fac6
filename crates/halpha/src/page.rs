use askama::Template;
use halpha_core::state::DashboardState;
use halpha_core::view::{
    SiteRow, StatusSnapshot, COLUMN_HEADERS, COLUMN_WEIGHTS, IMAGE_LINK_LABEL, MOVIE_LINK_LABEL,
};

pub struct Column {
    pub label: &'static str,
    /// Share of the table width, e.g. `"11.1"`.
    pub percent: String,
}

pub struct PageRow {
    pub icon_file: &'static str,
    pub icon_label: &'static str,
    pub site_name: String,
    pub age_text: String,
    pub image_link: Option<String>,
    pub movie_link: Option<String>,
}

impl From<&SiteRow> for PageRow {
    fn from(row: &SiteRow) -> Self {
        Self {
            icon_file: row.icon.file_name(),
            icon_label: row.icon.label(),
            site_name: row.site_name.clone(),
            age_text: row.age_text.clone(),
            image_link: row.image_link.clone(),
            movie_link: row.movie_link.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub heading: &'static str,
    pub reload_secs: u32,
    pub has_snapshot: bool,
    pub columns: Vec<Column>,
    pub rows: Vec<PageRow>,
    pub image_label: &'static str,
    pub movie_label: &'static str,
    pub footer_html: String,
    pub status_line: String,
}

impl DashboardPage {
    pub fn from_state(state: &DashboardState, reload_secs: u32) -> Self {
        let snapshot: Option<&StatusSnapshot> = state.snapshot.as_deref();
        Self {
            heading: state.heading(),
            reload_secs,
            has_snapshot: snapshot.is_some(),
            columns: columns(),
            rows: snapshot
                .map(|snapshot| snapshot.table.site_rows().map(PageRow::from).collect())
                .unwrap_or_default(),
            image_label: IMAGE_LINK_LABEL,
            movie_label: MOVIE_LINK_LABEL,
            footer_html: snapshot
                .map(|snapshot| snapshot.footer_html.clone())
                .unwrap_or_default(),
            status_line: state.status_line().unwrap_or_default(),
        }
    }
}

fn columns() -> Vec<Column> {
    let total: u32 = COLUMN_WEIGHTS.iter().sum();
    COLUMN_HEADERS
        .into_iter()
        .zip(COLUMN_WEIGHTS)
        .map(|(label, weight)| Column {
            label,
            percent: format!("{:.1}", f64::from(weight) * 100.0 / f64::from(total)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_widths_keep_weight_ratios() {
        let columns = columns();
        let widths: Vec<&str> = columns.iter().map(|c| c.percent.as_str()).collect();
        assert_eq!(widths, ["11.1", "27.8", "27.8", "16.7", "16.7"]);

        let sum: f64 = columns
            .iter()
            .map(|c| c.percent.parse::<f64>().unwrap())
            .sum();
        assert!((sum - 100.0).abs() < 0.2, "widths sum to {sum}");
    }
}
