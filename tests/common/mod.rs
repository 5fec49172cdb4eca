use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let router = visitor_log::build_app(pool.clone());

        Self { router, db: pool }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    /// Register a visitor through the API with valid defaults.
    pub async fn register(&self, first: &str, last: &str) {
        let resp = self
            .post_json(
                "/api/register",
                serde_json::json!({
                    "firstName": first,
                    "lastName": last,
                    "address": "123 Main St",
                    "purpose": "Meeting",
                }),
            )
            .await;
        assert_eq!(resp.status(), axum::http::StatusCode::OK);
    }

    /// Insert a student row the way the registrar import does: no position.
    pub async fn provision_student(&self, name: &str, college: &str) {
        sqlx::query(
            "INSERT INTO visitors (name, position, student_id, program, college, year_level, address, purpose)
             VALUES (?, NULL, ?, ?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind("2021-00123")
        .bind("BSIT")
        .bind(college)
        .bind("3")
        .bind("Campus Dorm A")
        .bind("")
        .execute(&self.db)
        .await
        .expect("Failed to provision test student");
    }

    pub async fn visitor_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM visitors")
            .fetch_one(&self.db)
            .await
            .unwrap();
        count
    }

    pub async fn log_count(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM logs")
            .fetch_one(&self.db)
            .await
            .unwrap();
        count
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read the full response body as parsed JSON.
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}
