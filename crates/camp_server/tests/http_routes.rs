use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use camp_core::db::open_db_in_memory;
use camp_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_app() -> Router {
    build_router(AppState::new(open_db_in_memory().unwrap()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_camper(app: &Router, name: &str, age: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/campers",
        Some(json!({"name": name, "age": age})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_activity(app: &Router, name: &str, difficulty: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/activities",
        Some(json!({"name": name, "difficulty": difficulty})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

async fn create_signup(app: &Router, time: i64, camper_id: i64, activity_id: i64) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/signups",
        Some(json!({"time": time, "camper_id": camper_id, "activity_id": activity_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn home_returns_empty_ok() {
    let app = build_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn camper_create_follows_age_and_name_rules() {
    let app = build_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/campers",
        Some(json!({"name": "Al", "age": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Al");
    assert_eq!(body["age"], 10);
    assert_eq!(body["signups"], json!([]));

    for payload in [
        json!({"name": "", "age": 10}),
        json!({"name": "Al", "age": 19}),
        json!({"name": "Al", "age": 7}),
        json!({"name": "Al"}),
        json!({"age": 10}),
    ] {
        let (status, body) = send(&app, Method::POST, "/campers", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"errors": "invalid form data"}));
    }

    let (_, campers) = send(&app, Method::GET, "/campers", None).await;
    assert_eq!(campers.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_json_is_a_validation_failure() {
    let app = build_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/campers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn activity_create_requires_string_name_and_integer_difficulty() {
    let app = build_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities",
        Some(json!({"name": "Archery", "difficulty": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["difficulty"], 99);
    assert_eq!(body["signups"], json!([]));

    let (status, body) = send(
        &app,
        Method::POST,
        "/activities",
        Some(json!({"name": "Archery", "difficulty": "hard"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": "invalid form data"}));
}

#[tokio::test]
async fn signup_create_returns_nested_parents() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;
    let activity_id = create_activity(&app, "Archery", 2).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/signups",
        Some(json!({"time": 9, "camper_id": camper_id, "activity_id": activity_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["time"], 9);
    assert_eq!(body["camper"], json!({"id": camper_id, "name": "Al", "age": 10}));
    assert_eq!(
        body["activity"],
        json!({"id": activity_id, "name": "Archery", "difficulty": 2})
    );
}

#[tokio::test]
async fn signup_create_rejects_bad_time_and_dangling_ids() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;
    let activity_id = create_activity(&app, "Archery", 2).await;

    for payload in [
        json!({"time": 24, "camper_id": camper_id, "activity_id": activity_id}),
        json!({"time": -1, "camper_id": camper_id, "activity_id": activity_id}),
        json!({"time": 9, "camper_id": camper_id + 100, "activity_id": activity_id}),
        json!({"time": 9, "camper_id": camper_id, "activity_id": activity_id + 100}),
        json!({"camper_id": camper_id, "activity_id": activity_id}),
    ] {
        let (status, body) = send(&app, Method::POST, "/signups", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }

    let (_, camper) = send(&app, Method::GET, &format!("/campers/{camper_id}"), None).await;
    assert_eq!(camper["signups"], json!([]));
}

#[tokio::test]
async fn listing_omits_signups_but_item_fetch_includes_them() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;
    let activity_id = create_activity(&app, "Archery", 2).await;
    let signup_id = create_signup(&app, 9, camper_id, activity_id).await;

    let (status, campers) = send(&app, Method::GET, "/campers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(campers, json!([{"id": camper_id, "name": "Al", "age": 10}]));

    let (status, activities) = send(&app, Method::GET, "/activities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(activities[0].get("signups").is_none());

    let (status, camper) = send(&app, Method::GET, &format!("/campers/{camper_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(camper["signups"][0]["id"], signup_id);
    assert_eq!(camper["signups"][0]["activity"]["name"], "Archery");
    assert!(camper["signups"][0].get("camper").is_none());

    let (status, activity) = send(
        &app,
        Method::GET,
        &format!("/activities/{activity_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(activity["signups"][0]["camper"]["name"], "Al");
    assert!(activity["signups"][0].get("activity").is_none());
}

#[tokio::test]
async fn patch_applies_partial_update() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/campers/{camper_id}"),
        Some(json!({"age": 12})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["name"], "Al");
    assert_eq!(body["age"], 12);
    assert!(body["signups"].is_array());
}

#[tokio::test]
async fn invalid_patch_changes_nothing() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;
    let uri = format!("/campers/{camper_id}");

    for payload in [
        json!({"name": "", "age": 12}),
        json!({"name": "Bea", "age": 30}),
        json!({"name": "Bea", "cabin": "north"}),
    ] {
        let (status, body) = send(&app, Method::PATCH, &uri, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }

    let (_, camper) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(camper["name"], "Al");
    assert_eq!(camper["age"], 10);
}

#[tokio::test]
async fn delete_activity_cascades_to_signups() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;
    let activity_id = create_activity(&app, "Archery", 2).await;
    create_signup(&app, 9, camper_id, activity_id).await;
    create_signup(&app, 15, camper_id, activity_id).await;

    let uri = format!("/activities/{activity_id}");
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Activity not found"}));

    let (_, camper) = send(&app, Method::GET, &format!("/campers/{camper_id}"), None).await;
    assert_eq!(camper["signups"], json!([]));

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_ids_return_documented_404_bodies() {
    let app = build_app();

    let (status, body) = send(&app, Method::GET, "/campers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/campers/999",
        Some(json!({"age": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));

    let (status, body) = send(&app, Method::GET, "/activities/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Activity not found"}));

    let (status, body) = send(&app, Method::GET, "/campers/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));
}

#[tokio::test]
async fn unsupported_methods_are_not_routed() {
    let app = build_app();
    let camper_id = create_camper(&app, "Al", 10).await;

    let (status, _) = send(&app, Method::DELETE, &format!("/campers/{camper_id}"), None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, Method::GET, "/signups", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
