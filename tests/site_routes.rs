use std::net::SocketAddr;
use std::path::PathBuf;

use portfolio_site_lib::{build_router, AppError, AppState, Settings};
use reqwest::StatusCode;
use tempfile::TempDir;
use tokio::net::TcpListener;

struct TestSite {
    addr: SocketAddr,
    dir: TempDir,
    client: reqwest::Client,
}

impl TestSite {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("projects.db")
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("send GET");
        let status = response.status();
        (status, response.text().await.expect("read body"))
    }

    async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("send POST")
    }
}

fn test_settings(dir: &TempDir) -> Settings {
    let mut settings = Settings::default();
    settings.storage.db_path = dir.path().join("projects.db");
    settings.assets.static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static");
    settings
}

async fn start_site() -> TestSite {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = AppState::from_settings(test_settings(&dir))
        .await
        .expect("initialize state");
    let app = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("build client");

    TestSite { addr, dir, client }
}

#[tokio::test]
async fn static_pages_render() {
    let site = start_site().await;

    let (status, body) = site.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Andrew Meek"));

    for path in ["/about", "/resume", "/thankyou"] {
        let (status, body) = site.get(path).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        assert!(body.contains("<!DOCTYPE html>"), "GET {path}");
    }
}

#[tokio::test]
async fn projects_page_lists_seed_projects() {
    let site = start_site().await;

    let (status, body) = site.get("/projects").await;
    assert_eq!(status, StatusCode::OK);

    let fantasy = body.find("Fantasy Football Predictions").expect("fantasy seed listed");
    let campus = body.find("Campus Cravings").expect("campus seed listed");
    assert!(fantasy < campus, "newest seed should be listed first");
    assert!(body.contains("/static/images/Fantasy-football.png"));
}

#[tokio::test]
async fn forms_render_on_get() {
    let site = start_site().await;

    let (status, body) = site.get("/projects/new").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("<form"));

    let (status, body) = site.get("/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.to_lowercase().contains("contact"));
    assert!(body.contains("name=\"confirm_password\""));
}

#[tokio::test]
async fn new_project_redirects_and_lists_first() {
    let site = start_site().await;

    let response = site
        .post_form(
            "/projects/new",
            &[("title", "Demo"), ("description", "A demo project"), ("image_file_name", "")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/projects")
    );

    let (status, body) = site.get("/projects").await;
    assert_eq!(status, StatusCode::OK);
    let demo = body.find("Demo").expect("demo listed");
    let fantasy = body.find("Fantasy Football Predictions").expect("seed listed");
    assert!(demo < fantasy, "new project should be listed first");
}

#[tokio::test]
async fn new_project_with_blank_title_is_rejected() {
    let site = start_site().await;

    let response = site
        .post_form("/projects/new", &[("title", "   "), ("description", "ignored")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.expect("read body");
    assert!(body.contains("Title is required."));
    assert!(body.contains("<form"));

    let (_, listing) = site.get("/projects").await;
    assert!(!listing.contains("ignored"));
}

#[tokio::test]
async fn new_project_fields_are_escaped_in_listing() {
    let site = start_site().await;

    site.post_form("/projects/new", &[("title", "<script>x</script>")])
        .await;

    let (_, body) = site.get("/projects").await;
    assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!body.contains("<script>x</script>"));
}

#[tokio::test]
async fn new_project_with_repeated_title_keeps_first_value() {
    let site = start_site().await;

    let response = site
        .post_form(
            "/projects/new",
            &[("title", "First Title"), ("title", "Second Title")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let (_, body) = site.get("/projects").await;
    assert!(body.contains("First Title"));
    assert!(!body.contains("Second Title"));
}

#[tokio::test]
async fn unreadable_submissions_rerender_the_form() {
    let site = start_site().await;

    for (path, action) in [("/projects/new", "/projects/new"), ("/contact", "/contact")] {
        let response = site
            .client
            .post(site.url(path))
            .header("content-type", "text/plain")
            .body("title=Sneaky")
            .send()
            .await
            .expect("send POST");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        let body = response.text().await.expect("read body");
        assert!(body.contains("could not be read"), "{path}");
        assert!(body.contains(&format!("action=\"{action}\"")), "{path}");
    }

    let (_, listing) = site.get("/projects").await;
    assert!(!listing.contains("Sneaky"));
}

#[tokio::test]
async fn contact_with_mismatched_passwords_is_rejected() {
    let site = start_site().await;

    let response = site
        .post_form(
            "/contact",
            &[
                ("first_name", "Ada"),
                ("last_name", "Lovelace"),
                ("email", "ada@example.com"),
                ("password", "password123"),
                ("confirm_password", "password124"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get("location").is_none());
    let body = response.text().await.expect("read body");
    assert!(body.contains("Passwords do not match."));
    assert!(body.contains("action=\"/contact\""));
    assert!(!body.contains("Thank you!"));
}

#[tokio::test]
async fn contact_with_missing_fields_reports_each_rule() {
    let site = start_site().await;

    let response = site.post_form("/contact", &[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.text().await.expect("read body");
    for msg in [
        "First name is required.",
        "Last name is required.",
        "Email is required.",
        "Password must be at least 8 characters.",
    ] {
        assert!(body.contains(msg), "missing {msg}");
    }
    assert!(!body.contains("Passwords do not match."));
}

#[tokio::test]
async fn valid_contact_redirects_to_thank_you() {
    let site = start_site().await;

    let response = site
        .post_form(
            "/contact",
            &[
                ("first_name", "Ada"),
                ("last_name", "Lovelace"),
                ("email", "ada@example.com"),
                ("password", "password123"),
                ("confirm_password", "password123"),
            ],
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/thankyou")
    );
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let site = start_site().await;

    let (status, body) = site.get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let site = start_site().await;

    let (status, body) = site.get("/static/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".projects"));
}

#[tokio::test]
async fn missing_static_asset_gets_not_found_page() {
    let site = start_site().await;

    let (status, body) = site.get("/static/images/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn corrupted_database_yields_server_error() {
    let site = start_site().await;

    std::fs::write(site.db_path(), "garbage, not sqlite\n".repeat(300)).expect("corrupt db");

    let (status, body) = site.get("/projects").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("garbage"));
}

#[tokio::test]
async fn serve_fails_when_port_is_taken() {
    let dir = tempfile::tempdir().expect("tempdir");
    let taken = TcpListener::bind("127.0.0.1:0").await.expect("bind blocker");

    let mut settings = test_settings(&dir);
    settings.server.port = taken.local_addr().expect("local addr").port();

    let result = portfolio_site_lib::serve(settings, std::future::pending()).await;
    assert!(matches!(result, Err(AppError::ServerError(_))), "got {:?}", result);
}

#[tokio::test]
async fn serve_fails_when_store_is_unreachable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file").expect("write blocker");

    let mut settings = test_settings(&dir);
    settings.storage.db_path = blocker.join("projects.db");

    let result = portfolio_site_lib::serve(settings, std::future::pending()).await;
    assert!(matches!(result, Err(AppError::StorageError(_))), "got {:?}", result);
}

#[tokio::test]
async fn serve_stops_on_shutdown_signal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let probe = TcpListener::bind("127.0.0.1:0").await.expect("probe");
    let port = probe.local_addr().expect("local addr").port();
    drop(probe);

    let mut settings = test_settings(&dir);
    settings.server.port = port;

    let result = portfolio_site_lib::serve(settings, async {}).await;
    assert!(result.is_ok(), "got {:?}", result);
}
