/// Observatories of the GONG network keyed by their one-letter site code.
pub const SITE_NAMES: [(&str, &str); 7] = [
    ("M", "Mauna Loa, HI, United States"),
    ("B", "Big Bear, CA, United States"),
    ("C", "Cerro Tololo, Chile"),
    ("Z", "Boulder, CO, United States"),
    ("L", "Learmonth, Australia"),
    ("U", "Udaipur, India"),
    ("T", "El Tiede, Spain"),
];

/// Returns the display name for a site code, or the code itself when it is not a known site.
pub fn resolve_site_name(code: &str) -> &str {
    SITE_NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}
