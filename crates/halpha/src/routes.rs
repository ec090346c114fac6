use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use halpha_core::icons::StatusIcon;
use halpha_core::state::DashboardState;

use crate::page::DashboardPage;
use crate::state::{AppState, PAGE_RELOAD_SECS};

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/status", get(status))
        .route("/icons/{file}", get(icon))
        .with_state(app_state)
}

pub async fn dashboard(
    State(app_state): State<Arc<AppState>>,
) -> Result<Html<String>, StatusCode> {
    let current = app_state.current();
    DashboardPage::from_state(&current, PAGE_RELOAD_SECS)
        .render()
        .map(Html)
        .map_err(|err| {
            tracing::error!("dashboard rendering failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub async fn status(State(app_state): State<Arc<AppState>>) -> Json<DashboardState> {
    Json(app_state.current())
}

pub async fn icon(
    State(app_state): State<Arc<AppState>>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, StatusCode> {
    let icon = StatusIcon::from_file_name(&file).ok_or(StatusCode::NOT_FOUND)?;
    let path = app_state.icons_dir().join(icon.file_name());

    let bytes = tokio::fs::read(&path).await.map_err(|err| {
        tracing::error!("status icon {} unreadable: {err}", path.display());
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], bytes))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use axum::body::Body;
    use axum::http::Request;
    use chrono::{TimeZone, Utc};
    use halpha_core::view::StatusSnapshot;
    use halpha_feed::{FeedEnvelope, SiteReport};
    use http_body_util::BodyExt;
    use tokio::sync::watch;
    use tower::ServiceExt;

    use super::*;

    fn bundled_icons() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../icons")
    }

    fn envelope() -> FeedEnvelope {
        let report = |code: &str, age: u64, image: &str, movie: &str| SiteReport {
            site_code: code.to_string(),
            age_seconds: age,
            image_link: image.to_string(),
            movie_url: movie.to_string(),
        };
        FeedEnvelope {
            message: " GONG <A HREF=\"https://monitor.nso.edu\">status</a> monitor".to_string(),
            site_info: vec![
                report("C", 242, "https://gong2.nso.edu/HA/c.jpg", "https://gong2.nso.edu/m?c=1"),
                report("L", 30_500, "NONE", "https://gong2.nso.edu/m?l=1"),
                report("X", 1_209_600, "NONE", "NONE"),
            ],
        }
    }

    fn counting_down(remaining_secs: u32) -> DashboardState {
        let at = Utc.with_ymd_and_hms(2024, 7, 15, 18, 30, 0).unwrap();
        let snapshot = StatusSnapshot::from_envelope(&envelope(), at);
        DashboardState::counting_down(Arc::new(snapshot), remaining_secs)
    }

    fn app(state: DashboardState) -> (Router, watch::Sender<DashboardState>) {
        let (sender, receiver) = watch::channel(state);
        let app_state = Arc::new(AppState::new(receiver, bundled_icons()));
        (router(app_state), sender)
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn loading_page_shows_placeholder_only() {
        let (router, _sender) = app(DashboardState::loading());
        let (status, body) = get_body(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Loading...</h1>"));
        assert!(!body.contains("<table>"));
    }

    #[tokio::test]
    async fn dashboard_renders_header_plus_one_row_per_site() {
        let (router, _sender) = app(counting_down(37));
        let (status, body) = get_body(router, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>GONG H-Alpha Dashboard</h1>"));
        assert_eq!(body.matches("<tr>").count(), 3 + 1);
        for header in ["Status", "Site", "Data age", "Latest Image", "Movie Page"] {
            assert!(body.contains(&format!("<th>{header}</th>")), "missing {header}");
        }
        assert!(body.contains("Cerro Tololo, Chile"));
        assert!(body.contains("4 Minutes 2 Seconds"));
        assert!(body.contains("No recent data"));
        assert!(body.contains("alt=\"cross\""));
        assert!(body.contains("/icons/night.svg"));
    }

    #[tokio::test]
    async fn sentinel_links_render_blank_cells() {
        let (router, _sender) = app(counting_down(5));
        let (_, body) = get_body(router, "/").await;

        assert_eq!(body.matches(">Image link</a>").count(), 1);
        assert_eq!(body.matches(">Movie link</a>").count(), 2);
        assert_eq!(body.matches("<td>&nbsp;</td>").count(), 3);
    }

    #[tokio::test]
    async fn footer_is_raw_html_and_countdown_is_shown() {
        let (router, _sender) = app(counting_down(12));
        let (_, body) = get_body(router, "/").await;

        assert!(body.contains("<p> GONG <A HREF=\"https://monitor.nso.edu\">status</a> monitor</p>"));
        assert!(body.contains("next update in 12 seconds"));
        assert!(body.contains("Last updated 2024"));
        assert!(body.contains("http-equiv=\"refresh\" content=\"1\""));
    }

    #[tokio::test]
    async fn page_follows_latest_published_state() {
        let (router, sender) = app(counting_down(60));
        sender.send_replace(counting_down(59));
        let (_, body) = get_body(router, "/").await;

        assert!(body.contains("next update in 59 seconds"));
    }

    #[tokio::test]
    async fn status_endpoint_returns_state_json() {
        let (router, _sender) = app(counting_down(9));
        let (status, body) = get_body(router, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["phase"], "counting_down");
        assert_eq!(json["remaining_secs"], 9);
        let rows = json["snapshot"]["table"]["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1]["site_name"], "Cerro Tololo, Chile");
        assert_eq!(rows[1]["icon"], "day");
    }

    #[tokio::test]
    async fn known_icons_are_served() {
        let (router, _sender) = app(DashboardState::loading());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/icons/questionMark.svg")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&bytes).contains("<svg"));
    }

    #[tokio::test]
    async fn unknown_icon_names_are_not_found() {
        let (router, _sender) = app(DashboardState::loading());
        let (status, _) = get_body(router.clone(), "/icons/secret.txt").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_body(router, "/icons/..%2FCargo.toml").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_icon_file_is_a_server_error() {
        let empty = tempfile::tempdir().unwrap();
        let (_sender, receiver) = watch::channel(DashboardState::loading());
        let app_router = router(Arc::new(AppState::new(receiver, empty.path().to_path_buf())));

        let (status, _) = get_body(app_router, "/icons/day.svg").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
