//! Router-level tests
//!
//! Drive the full HTTP surface with `oneshot` over in-memory repositories.

use std::sync::Arc;

use auth::application::{EnsureAdminInput, EnsureAdminUseCase, SignedTokenIssuer};
use auth::{AuthConfig, InMemoryAuthRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use catalog::InMemoryProductRepository;
use catalog::store::ProductRepository;
use http_body_util::BodyExt;
use kernel::error::app_error::VALIDATION_MESSAGE;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::app::{AppParts, build_router};

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "adminpass123";

struct TestApp {
    router: Router,
    users: Arc<InMemoryAuthRepository>,
    products: Arc<InMemoryProductRepository>,
    config: Arc<AuthConfig>,
}

impl TestApp {
    fn new() -> Self {
        let users = Arc::new(InMemoryAuthRepository::new());
        let products = Arc::new(InMemoryProductRepository::new());
        let config = Arc::new(AuthConfig::development());
        let issuer = Arc::new(SignedTokenIssuer::new(
            users.clone(),
            users.clone(),
            config.clone(),
        ));

        let router = build_router(AppParts {
            users: users.clone(),
            issuer,
            products: products.clone(),
            auth_config: config.clone(),
        });

        Self {
            router,
            users,
            products,
            config,
        }
    }

    /// Send a raw body; `None` sends no body and no content type
    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(body)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send(method, uri, token, body.map(|b| b.to_string()))
            .await
    }

    async fn register(&self, email: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Test User",
                "email": email,
                "password": "password123",
                "password_confirmation": "password123",
            })),
        )
        .await
    }

    async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(
            "POST",
            "/login",
            None,
            Some(json!({ "email": email, "password": password })),
        )
        .await
    }

    /// Token of a freshly registered plain user
    async fn user_token(&self, email: &str) -> String {
        let (status, body) = self.register(email).await;
        assert_eq!(status, StatusCode::CREATED);
        body["access_token"].as_str().unwrap().to_string()
    }

    async fn admin_token(&self) -> String {
        EnsureAdminUseCase::new(self.users.clone(), self.config.clone())
            .execute(EnsureAdminInput {
                name: "Admin".into(),
                email: ADMIN_EMAIL.into(),
                password: ADMIN_PASSWORD.into(),
            })
            .await
            .unwrap();

        let (status, body) = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["role"], "admin");
        body["access_token"].as_str().unwrap().to_string()
    }

    async fn create_product(&self, token: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", "/products", Some(token), Some(body)).await
    }

    async fn product_count(&self) -> u64 {
        self.products.count().await.unwrap()
    }
}

fn widget() -> Value {
    json!({
        "name": "Widget",
        "description": "A very useful widget",
        "price": "19.90",
        "stock": 7,
    })
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn register_returns_user_and_token() {
    let app = TestApp::new();
    let (status, body) = app.register("Alice@Example.com").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["name"], "Test User");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_duplicate_email_is_422_and_creates_nothing() {
    let app = TestApp::new();
    assert_eq!(app.register("dup@example.com").await.0, StatusCode::CREATED);

    let (status, body) = app.register("DUP@example.com").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], VALIDATION_MESSAGE);
    assert_eq!(
        body["errors"]["email"],
        json!(["The email has already been taken."])
    );
    assert_eq!(app.users.user_count().await, 1);
}

#[tokio::test]
async fn register_ignores_requested_role() {
    let app = TestApp::new();
    let (status, body) = app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "Mallory",
                "email": "mallory@example.com",
                "password": "password123",
                "password_confirmation": "password123",
                "role": "admin",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "user");

    let token = body["access_token"].as_str().unwrap();
    let (status, _) = app.request("GET", "/products", Some(token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn register_reports_every_invalid_field() {
    let app = TestApp::new();
    let (status, body) = app
        .request(
            "POST",
            "/register",
            None,
            Some(json!({
                "name": "",
                "email": "not-an-email",
                "password": "short",
                "password_confirmation": "short",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], VALIDATION_MESSAGE);
    assert_eq!(body["errors"]["name"], json!(["The name field is required."]));
    assert_eq!(
        body["errors"]["email"],
        json!(["The email must be a valid email address."])
    );
    assert_eq!(
        body["errors"]["password"],
        json!(["The password must be at least 8 characters."])
    );
    assert_eq!(app.users.user_count().await, 0);
}

#[tokio::test]
async fn register_with_unparseable_body_is_422() {
    let app = TestApp::new();
    let (status, body) = app
        .send("POST", "/register", None, Some("{not json".into()))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    for field in ["name", "email", "password"] {
        assert!(body["errors"].get(field).is_some(), "no error for {field}");
    }
}

// ============================================================================
// Login / userInfo / logout
// ============================================================================

#[tokio::test]
async fn login_token_resolves_to_same_user() {
    let app = TestApp::new();
    let (_, registered) = app.register("bob@example.com").await;

    let (status, body) = app.login("bob@example.com", "password123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["role"], "user");

    let token = body["access_token"].as_str().unwrap();
    let (status, info) = app.request("GET", "/userInfo", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["user"]["id"], registered["user"]["id"]);
    assert_eq!(info["user"]["email"], "bob@example.com");
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("carol@example.com").await;

    let wrong_password = app.login("carol@example.com", "wrongpass1").await;
    let unknown_email = app.login("nobody@example.com", "password123").await;
    let missing_fields = app.request("POST", "/login", None, Some(json!({}))).await;
    let garbage = app.send("POST", "/login", None, Some("][".into())).await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.1, json!({ "message": "Unauthorized" }));
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password, missing_fields);
    assert_eq!(wrong_password, garbage);
}

#[tokio::test]
async fn user_info_requires_live_token() {
    let app = TestApp::new();
    let unauthenticated = json!({ "message": "Unauthenticated." });

    let (status, body) = app.request("GET", "/userInfo", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, unauthenticated);

    let (status, body) = app
        .request("GET", "/userInfo", Some("forged.token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, unauthenticated);
}

#[tokio::test]
async fn logout_revokes_only_presenting_token() {
    let app = TestApp::new();
    let first = app.user_token("dave@example.com").await;
    let (_, second) = app.login("dave@example.com", "password123").await;
    let second = second["access_token"].as_str().unwrap();

    let (status, body) = app.request("POST", "/logout", Some(first.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User logged out successfully");

    assert_eq!(
        app.request("GET", "/userInfo", Some(first.as_str()), None).await.0,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        app.request("GET", "/userInfo", Some(second), None).await.0,
        StatusCode::OK
    );

    let (status, body) = app.request("POST", "/logout", Some(first.as_str()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "User not logged in" }));
}

#[tokio::test]
async fn logout_without_token() {
    let app = TestApp::new();
    let (status, body) = app.request("POST", "/logout", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not logged in");
}

// ============================================================================
// Product access control
// ============================================================================

#[tokio::test]
async fn products_reject_anonymous_with_401() {
    let app = TestApp::new();
    let (status, body) = app.request("GET", "/products", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Unauthenticated.");
}

#[tokio::test]
async fn non_admin_gets_403_on_every_product_route() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (_, created) = app.create_product(&admin, widget()).await;
    let item = format!("/products/{}", created["id"].as_str().unwrap());

    let user = app.user_token("eve@example.com").await;
    let attempts = [
        ("GET", "/products".to_string(), None),
        ("POST", "/products".to_string(), Some(widget())),
        ("GET", item.clone(), None),
        ("PUT", item.clone(), Some(json!({ "stock": 1 }))),
        ("PATCH", item.clone(), Some(json!({ "stock": 1 }))),
        ("DELETE", item.clone(), None),
    ];

    for (method, uri, body) in attempts {
        let (status, body) = app.request(method, &uri, Some(user.as_str()), body).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(body, json!({ "message": "Forbidden" }));
    }

    assert_eq!(app.product_count().await, 1);
    let (_, unchanged) = app.request("GET", &item, Some(admin.as_str()), None).await;
    assert_eq!(unchanged["stock"], 7);
}

#[tokio::test]
async fn revoked_admin_token_is_unauthenticated() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    app.request("POST", "/logout", Some(admin.as_str()), None).await;

    let (status, _) = app.request("GET", "/products", Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Product CRUD
// ============================================================================

#[tokio::test]
async fn create_echoes_price_and_stock_exactly() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    let (status, body) = app.create_product(&admin, widget()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["description"], "A very useful widget");
    assert_eq!(body["price"], "19.90");
    assert_eq!(body["stock"], 7);

    // numeric JSON keeps its written scale
    let raw = r#"{"name":"Gadget","description":"Shiny","price":1234.500,"stock":"12"}"#;
    let (status, body) = app
        .send("POST", "/products", Some(admin.as_str()), Some(raw.into()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"], "1234.500");
    assert_eq!(body["stock"], 12);
}

#[tokio::test]
async fn create_validation_errors() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    let (status, body) = app
        .create_product(
            &admin,
            json!({
                "name": "x".repeat(256),
                "price": "abc",
                "stock": 1.5,
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], VALIDATION_MESSAGE);
    assert_eq!(
        body["errors"]["name"],
        json!(["The name must not be greater than 255 characters."])
    );
    assert_eq!(
        body["errors"]["description"],
        json!(["The description field is required."])
    );
    assert_eq!(body["errors"]["price"], json!(["The price must be a number."]));
    assert_eq!(body["errors"]["stock"], json!(["The stock must be an integer."]));
    assert_eq!(app.product_count().await, 0);
}

#[tokio::test]
async fn create_rejects_prices_that_would_round() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    for price in [
        "0.12345678901234567890123456789",
        "\"0.12345678901234567890123456789\"",
        "79228162514264337593543950336",
        "1e-30",
    ] {
        let raw = format!(r#"{{"name":"Gadget","description":"Shiny","price":{price},"stock":1}}"#);
        let (status, body) = app
            .send("POST", "/products", Some(admin.as_str()), Some(raw))
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{price}");
        assert_eq!(
            body["errors"]["price"],
            json!(["The price is out of the supported range."])
        );
    }
    assert_eq!(app.product_count().await, 0);
}

#[tokio::test]
async fn list_and_show() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    let (status, body) = app.request("GET", "/products", Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, created) = app.create_product(&admin, widget()).await;
    let (status, body) = app.request("GET", "/products", Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([created.clone()]));

    let uri = format!("/products/{}", created["id"].as_str().unwrap());
    let (status, body) = app.request("GET", &uri, Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn show_unknown_or_malformed_id_is_404() {
    let app = TestApp::new();
    let admin = app.admin_token().await;

    for uri in [
        "/products/00000000-0000-4000-8000-000000000000",
        "/products/42",
        "/products/not-a-uuid",
    ] {
        let (status, body) = app.request("GET", uri, Some(admin.as_str()), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({ "message": "Product not found" }));
    }
}

#[tokio::test]
async fn update_stock_only_preserves_other_fields() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (_, created) = app.create_product(&admin, widget()).await;
    let uri = format!("/products/{}", created["id"].as_str().unwrap());

    for (method, stock) in [("PATCH", 3), ("PUT", 4)] {
        let (status, body) = app
            .request(method, &uri, Some(admin.as_str()), Some(json!({ "stock": stock })))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["stock"], stock);
        assert_eq!(body["name"], created["name"]);
        assert_eq!(body["description"], created["description"]);
        assert_eq!(body["price"], created["price"]);
        assert_eq!(body["created_at"], created["created_at"]);
    }
}

#[tokio::test]
async fn update_is_all_or_nothing() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (_, created) = app.create_product(&admin, widget()).await;
    let uri = format!("/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .request(
            "PATCH",
            &uri,
            Some(admin.as_str()),
            Some(json!({ "name": "Renamed", "price": -5 })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["price"], json!(["The price must be at least 0."]));

    let (_, current) = app.request("GET", &uri, Some(admin.as_str()), None).await;
    assert_eq!(current, created);
}

#[tokio::test]
async fn update_explicit_null_is_rejected() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (_, created) = app.create_product(&admin, widget()).await;
    let uri = format!("/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .request("PATCH", &uri, Some(admin.as_str()), Some(json!({ "name": null })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"]["name"], json!(["The name field is required."]));
}

#[tokio::test]
async fn update_validates_before_lookup() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let missing = "/products/00000000-0000-4000-8000-000000000000";

    let (status, _) = app
        .request("PATCH", missing, Some(admin.as_str()), Some(json!({ "stock": "many" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .request("PATCH", missing, Some(admin.as_str()), Some(json!({ "stock": 1 })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

#[tokio::test]
async fn delete_returns_204_then_404() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    let (_, created) = app.create_product(&admin, widget()).await;
    let uri = format!("/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app.request("DELETE", &uri, Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
    assert_eq!(app.product_count().await, 0);

    let (status, _) = app.request("DELETE", &uri, Some(admin.as_str()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_nonexistent_leaves_count_unchanged() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    app.create_product(&admin, widget()).await;

    let (status, body) = app
        .request(
            "DELETE",
            "/products/00000000-0000-4000-8000-000000000000",
            Some(admin.as_str()),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
    assert_eq!(app.product_count().await, 1);
}
