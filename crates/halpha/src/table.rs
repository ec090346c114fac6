use comfy_table::Table;
use halpha_core::view::{StatusSnapshot, COLUMN_HEADERS};

/// Terminal rendition of the dashboard table; blank cells stand in for missing links.
pub fn render_table(snapshot: &StatusSnapshot) -> Table {
    let mut table = Table::new();
    table.set_header(COLUMN_HEADERS.to_vec());

    for row in snapshot.table.site_rows() {
        table.add_row(vec![
            row.icon.label().to_string(),
            row.site_name.clone(),
            row.age_text.clone(),
            row.image_link.clone().unwrap_or_default(),
            row.movie_link.clone().unwrap_or_default(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use halpha_feed::{FeedEnvelope, SiteReport};

    use super::*;

    #[test]
    fn table_lists_sites_in_feed_order() {
        let envelope = FeedEnvelope {
            message: String::new(),
            site_info: vec![
                SiteReport {
                    site_code: "U".into(),
                    age_seconds: 59,
                    image_link: "NONE".into(),
                    movie_url: "NONE".into(),
                },
                SiteReport {
                    site_code: "Z".into(),
                    age_seconds: 300_000,
                    image_link: "NONE".into(),
                    movie_url: "NONE".into(),
                },
            ],
        };
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rendered = render_table(&StatusSnapshot::from_envelope(&envelope, at)).to_string();

        assert!(rendered.contains("Data age"));
        let udaipur = rendered.find("Udaipur, India").expect("udaipur row");
        let boulder = rendered.find("Boulder, CO, United States").expect("boulder row");
        assert!(udaipur < boulder);
        assert!(rendered.contains("59 Seconds"));
        assert!(rendered.contains("question-mark"));
        assert!(!rendered.contains("NONE"));
    }
}
