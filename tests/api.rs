//! Black-box tests of the HTTP surface over the in-memory store.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use businesshub_api::{build_app, state::AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    build_app(AppState::in_memory())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn export(app: &Router, body: Value) -> String {
    let (status, json) = send(app, "POST", "/exports", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    json["insertedId"].as_str().unwrap().to_string()
}

fn rice() -> Value {
    json!({
        "name": "Rice",
        "image": "rice.png",
        "price": 12.5,
        "rating": 4.5,
        "originCountry": "Thailand",
        "category": "Grain",
        "availableQuantity": 100,
        "userEmail": "seller@example.com"
    })
}

#[tokio::test]
async fn health_and_banner() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn export_then_import_scenario() {
    let app = app();
    let id = export(&app, rice()).await;

    let (status, json) = send(
        &app,
        "POST",
        &format!("/imports/{id}"),
        Some(json!({ "quantity": 10, "userEmail": "a@b.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Imported successfully");

    let (status, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["availableQuantity"], 90);

    let (status, imports) = send(&app, "GET", "/imports?email=a@b.com", None).await;
    assert_eq!(status, StatusCode::OK);
    let imports = imports.as_array().unwrap();
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0]["importedQuantity"], 10);
    assert_eq!(imports[0]["productId"], id);
    assert_eq!(imports[0]["name"], "Rice");
}

#[tokio::test]
async fn export_requires_name_and_image() {
    let app = app();
    let (status, json) = send(&app, "POST", "/exports", Some(json!({ "name": "Rice" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing fields");
}

#[tokio::test]
async fn list_products_is_newest_first_and_limited() {
    let app = app();
    for (name, created) in [
        ("a", "2024-01-01T00:00:00Z"),
        ("c", "2024-03-01T00:00:00Z"),
        ("b", "2024-02-01T00:00:00Z"),
    ] {
        export(&app, json!({ "name": name, "image": "x.png", "createdAt": created })).await;
    }

    let (status, all) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = all.as_array().unwrap().iter().map(|p| p["name"].clone()).collect();
    assert_eq!(names, [json!("c"), json!("b"), json!("a")]);

    let (_, limited) = send(&app, "GET", "/products?limit=2", None).await;
    let limited = limited.as_array().unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[..], all.as_array().unwrap()[..2]);

    let (_, zero) = send(&app, "GET", "/products?limit=0", None).await;
    assert_eq!(zero, all);
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let (status, json) = send(&app(), "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn unknown_and_malformed_product_ids() {
    let app = app();

    let (status, json) = send(&app, "GET", "/products/64b7f0c2a1b2c3d4e5f60718", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product not found");

    let (status, _) = send(&app, "GET", "/products/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_import_quantities_change_nothing() {
    let app = app();
    let id = export(&app, json!({ "name": "Tea", "image": "tea.png", "availableQuantity": 5 })).await;

    for quantity in [0, 6] {
        let (status, json) = send(
            &app,
            "POST",
            &format!("/imports/{id}"),
            Some(json!({ "quantity": quantity, "userEmail": "a@b.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid quantity");
    }

    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["availableQuantity"], 5);
    let (_, imports) = send(&app, "GET", "/imports?email=a@b.com", None).await;
    assert_eq!(imports, json!([]));
}

#[tokio::test]
async fn importing_everything_stops_at_zero() {
    let app = app();
    let id = export(&app, json!({ "name": "Tea", "image": "tea.png", "availableQuantity": 3 })).await;
    let uri = format!("/imports/{id}");

    let (first, _) = send(&app, "POST", &uri, Some(json!({ "quantity": 3, "userEmail": "a@b.com" }))).await;
    let (second, _) = send(&app, "POST", &uri, Some(json!({ "quantity": 1, "userEmail": "a@b.com" }))).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["availableQuantity"], 0);
}

#[tokio::test]
async fn import_of_missing_product_is_not_found() {
    let (status, _) = send(
        &app(),
        "POST",
        "/imports/64b7f0c2a1b2c3d4e5f60718",
        Some(json!({ "quantity": 1, "userEmail": "a@b.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_export_mirrors_onto_product() {
    let app = app();
    let id = export(&app, rice()).await;

    let (status, json) = send(&app, "PUT", &format!("/exports/{id}"), Some(json!({ "price": 999 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["price"], 999.0);

    let (_, exports) = send(&app, "GET", "/exports?email=seller@example.com", None).await;
    let exports = exports.as_array().unwrap();
    assert_eq!(exports.len(), 1);
    assert_eq!(exports[0]["_id"], id);
    assert_eq!(exports[0]["price"], 999.0);

    // Same value again modifies nothing.
    let (status, _) = send(&app, "PUT", &format!("/exports/{id}"), Some(json!({ "price": 999 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_export_removes_product() {
    let app = app();
    let id = export(&app, rice()).await;

    let (status, _) = send(&app, "DELETE", &format!("/exports/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/exports/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_import_keeps_stock_taken() {
    let app = app();
    let id = export(&app, rice()).await;
    send(&app, "POST", &format!("/imports/{id}"), Some(json!({ "quantity": 10, "userEmail": "a@b.com" }))).await;

    let (_, imports) = send(&app, "GET", "/imports?email=a@b.com", None).await;
    let import_id = imports[0]["_id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "DELETE", &format!("/imports/{import_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &format!("/imports/{import_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["availableQuantity"], 90);
}

#[tokio::test]
async fn ledgers_without_email_are_empty() {
    let app = app();
    export(&app, rice()).await;

    let (status, exports) = send(&app, "GET", "/exports", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exports, json!([]));

    let (status, imports) = send(&app, "GET", "/imports", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(imports, json!([]));
}

#[tokio::test]
async fn wrongly_typed_bodies_get_json_400() {
    let app = app();
    let id = export(&app, rice()).await;

    for body in [
        json!({ "quantity": 2.5, "userEmail": "a@b.com" }),
        json!({ "quantity": "3", "userEmail": "a@b.com" }),
    ] {
        let (status, json) = send(&app, "POST", &format!("/imports/{id}"), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("quantity"));
    }

    let (status, json) = send(&app, "PUT", &format!("/exports/{id}"), Some(json!({ "price": "999" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["availableQuantity"], 100);
    assert_eq!(product["price"], 12.5);
}

#[tokio::test]
async fn non_json_export_body_gets_json_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/exports")
        .header("content-type", "text/plain")
        .body(Body::from("name=Rice"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["success"], false);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_imports_never_oversell() {
    let app = app();
    let id = export(&app, json!({ "name": "Tea", "image": "tea.png", "availableQuantity": 5 })).await;
    let uri = format!("/imports/{id}");
    let body = json!({ "quantity": 3, "userEmail": "a@b.com" });

    let ((first, _), (second, _)) = tokio::join!(
        send(&app, "POST", &uri, Some(body.clone())),
        send(&app, "POST", &uri, Some(body.clone())),
    );

    let statuses = [first, second];
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count(), 1);

    let (_, product) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(product["availableQuantity"], 2);
    let (_, imports) = send(&app, "GET", "/imports?email=a@b.com", None).await;
    assert_eq!(imports.as_array().unwrap().len(), 1);
}
