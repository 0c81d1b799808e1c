//! End-to-end scenario against a real MySQL server configured through the `DB_*` variables.
//! Run with `cargo test -- --ignored`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use servicios_api::{app, ensure_tables, AppState, Config, Database};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let config = Config::from_env().expect("config");
    let db = Database::connect(&config.database).await.expect("connect to MySQL");
    ensure_tables(&db).await.expect("create tables");
    ensure_tables(&db).await.expect("bootstrap is idempotent");
    app(AppState::new(db))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

#[tokio::test]
#[ignore = "requires a MySQL server (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME)"]
async fn test_role_user_lifecycle() {
    let app = spawn_app().await;

    let role_name = unique("Admin");
    let (status, json) = call(&app, "POST", "/api/roles", Some(json!({ "name": role_name }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["name"], role_name.as_str());
    let role_id = json["data"]["id"].as_i64().unwrap();

    let (_, json) = call(&app, "GET", "/api/roles", None).await;
    assert!(json["data"].as_array().unwrap().iter().any(|r| r["id"] == role_id));

    let email = format!("{}@x.com", unique("ana"));
    let (status, json) = call(
        &app,
        "POST",
        "/api/users",
        Some(json!({
            "identificacion": "123",
            "nombres": "Ana",
            "apellidos": "Lopez",
            "email": email,
            "password": "pw",
            "sexo": "F",
            "role_id": role_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["data"].get("password").is_none());
    let user_id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = call(&app, "DELETE", &format!("/api/roles/{role_id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("1 usuario(s) asociado(s)"));

    let (status, json) = call(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": email, "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["id"], user_id);
    assert!(json["user"].get("password").is_none());

    let (status, _) = call(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": email, "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) = call(&app, "DELETE", &format!("/api/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Usuario Ana Lopez eliminado exitosamente.");

    let (status, _) = call(&app, "DELETE", &format!("/api/users/{user_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", &format!("/api/roles/{role_id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = call(&app, "GET", "/api/roles", None).await;
    assert!(!json["data"].as_array().unwrap().iter().any(|r| r["id"] == role_id));
}

#[tokio::test]
#[ignore = "requires a MySQL server (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME)"]
async fn test_product_lifecycle() {
    let app = spawn_app().await;

    let name = unique("Teclado");
    let (status, json) = call(
        &app,
        "POST",
        "/api/productos",
        Some(json!({ "name": name, "precio_compra": 10.5, "precio_venta": "15", "iva": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["precio_venta"], "15");
    let id = json["data"]["id"].as_i64().unwrap();

    let (_, json) = call(&app, "GET", "/api/productos", None).await;
    let stored = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"] == id)
        .cloned()
        .unwrap();
    assert_eq!(stored["precio_compra"], "10.50");
    assert_eq!(stored["iva"], "0.00");

    let (status, json) = call(&app, "DELETE", &format!("/api/productos/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], format!("Producto \"{name}\" eliminado exitosamente."));

    let (status, _) = call(&app, "DELETE", "/api/productos/999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a MySQL server (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME)"]
async fn test_missing_records_and_credentials() {
    let app = spawn_app().await;

    let (status, json) = call(
        &app,
        "POST",
        "/api/login",
        Some(json!({ "email": format!("{}@x.com", unique("nadie")), "password": "pw" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Credenciales incorrectas.");

    let (status, json) = call(&app, "DELETE", "/api/roles/2147483000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "El rol no existe.");

    let (status, json) = call(&app, "DELETE", "/api/users/2147483000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "El usuario no existe.");
}

#[tokio::test]
#[ignore = "requires a MySQL server (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME)"]
async fn test_rejected_creates_insert_nothing() {
    let app = spawn_app().await;

    let unnamed_roles = |json: &Value| {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|r| r["name"] == "")
            .count()
    };
    let (_, before) = call(&app, "GET", "/api/roles", None).await;
    let (status, _) = call(&app, "POST", "/api/roles", Some(json!({ "name": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, after) = call(&app, "GET", "/api/roles", None).await;
    assert_eq!(unnamed_roles(&before), unnamed_roles(&after));

    let email = format!("{}@x.com", unique("sin-clave"));
    let (status, _) = call(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "identificacion": "9", "nombres": "Ana", "apellidos": "Lopez", "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, users) = call(&app, "GET", "/api/users", None).await;
    assert!(!users["data"].as_array().unwrap().iter().any(|u| u["email"] == email.as_str()));

    let name = unique("SinPrecio");
    let (status, _) = call(
        &app,
        "POST",
        "/api/productos",
        Some(json!({ "name": name, "precio_compra": 1, "iva": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, products) = call(&app, "GET", "/api/productos", None).await;
    assert!(!products["data"].as_array().unwrap().iter().any(|p| p["name"] == name.as_str()));
}

#[tokio::test]
#[ignore = "requires a MySQL server (DB_HOST, DB_USER, DB_PASSWORD, DB_NAME)"]
async fn test_numeric_strings_are_stored_as_numbers() {
    let app = spawn_app().await;

    let email = format!("{}@x.com", unique("edad"));
    let (status, json) = call(
        &app,
        "POST",
        "/api/users",
        Some(json!({
            "identificacion": 456,
            "nombres": "Luis",
            "apellidos": "Diaz",
            "email": email,
            "password": "pw",
            "edad": "30"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["identificacion"], 456);
    let id = json["data"]["id"].as_i64().unwrap();

    let (_, users) = call(&app, "GET", "/api/users", None).await;
    let stored = users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["id"] == id)
        .cloned()
        .unwrap();
    assert_eq!(stored["edad"], 30);
    assert_eq!(stored["identificacion"], "456");

    let (status, _) = call(&app, "DELETE", &format!("/api/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
}
