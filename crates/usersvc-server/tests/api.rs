//! HTTP API tests against the in-memory backend

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use usersvc_core::{NewUser, NoopEventSink, StoreFactory, User, UserStore, MOCKDB};
use usersvc_server::{router, AppState};

fn mock_store() -> Arc<dyn UserStore> {
    StoreFactory::with_defaults(Arc::new(NoopEventSink))
        .construct(MOCKDB, "")
        .unwrap()
}

fn new_user(first: &str, last: &str, nickname: &str, password: &str, email: &str, country: &str) -> NewUser {
    NewUser {
        first_name: first.to_string(),
        last_name: last.to_string(),
        nickname: nickname.to_string(),
        password: password.to_string(),
        email: email.to_string(),
        country: country.to_string(),
    }
}

async fn add_test_user(store: &Arc<dyn UserStore>) {
    store
        .add_user(new_user(
            "Klay",
            "Thompson",
            "Splash Brother",
            "password",
            "klay_thompson@mail.com",
            "usa",
        ))
        .await
        .unwrap();
}

async fn add_search_users(store: &Arc<dyn UserStore>) {
    add_test_user(store).await;
    store
        .add_user(new_user(
            "Serge",
            "Ibaka",
            "Iblocka",
            "dorwssap",
            "serge_ibaka@mail.com",
            "cameroon",
        ))
        .await
        .unwrap();
    store
        .add_user(new_user(
            "Steph",
            "Curry",
            "Chef Curry",
            "pdarsosw",
            "steph_curry@mail.com",
            "usa",
        ))
        .await
        .unwrap();
}

fn app(store: &Arc<dyn UserStore>) -> Router {
    router(AppState::new(store.clone()))
}

fn form_request(method: &str, uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_get_user() {
    let store = mock_store();
    add_test_user(&store).await;

    let (status, body) = send(app(&store), empty_request("GET", "/user/1")).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.first_name, "Klay");
    assert_eq!(user.nickname, "Splash Brother");
}

#[tokio::test]
async fn test_get_user_missing() {
    let store = mock_store();

    let (status, body) = send(app(&store), empty_request("GET", "/user/001")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "no user found with ID 001");
}

#[tokio::test]
async fn test_add_user() {
    let store = mock_store();
    add_test_user(&store).await;

    let form = "first_name=Otis&last_name=Simon&nickname=omgitsotis&password=p4ssw0rd\
                &email=otis_simon%40mail.com&country=UK";
    let (status, body) = send(app(&store), form_request("POST", "/user", form)).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.id, "2");
    assert_eq!(user.first_name, "Otis");
    assert_eq!(user.last_name, "Simon");
    assert_eq!(user.nickname, "omgitsotis");
    assert_eq!(user.password, "p4ssw0rd");
    assert_eq!(user.email, "otis_simon@mail.com");
    assert_eq!(user.country, "UK");
    assert_eq!(store.count().await, 2);
}

#[tokio::test]
async fn test_add_user_without_fields() {
    let store = mock_store();

    let (status, body) = send(app(&store), form_request("POST", "/user", "")).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.first_name, "");
}

#[tokio::test]
async fn test_add_user_without_content_type() {
    let store = mock_store();

    let (status, body) = send(app(&store), empty_request("POST", "/user")).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.first_name, "");
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_update_user_without_content_type_changes_nothing() {
    let store = mock_store();
    add_test_user(&store).await;

    let req = Request::builder()
        .method("PUT")
        .uri("/user/1")
        .body(Body::from("first_name=Otis"))
        .unwrap();
    let (status, body) = send(app(&store), req).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.first_name, "Klay");
    assert_eq!(user.country, "usa");
}

#[tokio::test]
async fn test_malformed_form_returns_json_error() {
    let store = mock_store();

    let form = "first_name=Otis&first_name=Simon";
    let (status, body) = send(app(&store), form_request("POST", "/user", form)).await;
    assert!(status.is_client_error());

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].is_string());
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_bad_path_encoding_returns_json_error() {
    let store = mock_store();
    add_test_user(&store).await;

    let (status, body) = send(app(&store), empty_request("GET", "/user/%FF")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn test_update_user() {
    let store = mock_store();
    add_test_user(&store).await;

    let form = "email=otis_simon%40mail.com&country=UK";
    let (status, body) = send(app(&store), form_request("PUT", "/user/1", form)).await;
    assert_eq!(status, StatusCode::OK);

    let user: User = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.first_name, "Klay");
    assert_eq!(user.last_name, "Thompson");
    assert_eq!(user.nickname, "Splash Brother");
    assert_eq!(user.password, "password");
    assert_eq!(user.email, "otis_simon@mail.com");
    assert_eq!(user.country, "UK");
}

#[tokio::test]
async fn test_update_user_missing() {
    let store = mock_store();
    add_test_user(&store).await;

    let form = "email=otis_simon%40mail.com&country=UK";
    let (status, _) = send(app(&store), form_request("PUT", "/user/2", form)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let store = mock_store();
    add_test_user(&store).await;

    let (status, _) = send(app(&store), empty_request("DELETE", "/user/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.count().await, 0);

    let (status, _) = send(app(&store), empty_request("GET", "/user/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_missing() {
    let store = mock_store();
    add_test_user(&store).await;

    let (status, _) = send(app(&store), empty_request("DELETE", "/user/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_search_users() {
    let store = mock_store();
    add_search_users(&store).await;

    let (status, body) = send(app(&store), empty_request("GET", "/search/country/usa")).await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);

    let (status, body) = send(app(&store), empty_request("GET", "/search/nickname/Iblocka")).await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].first_name, "Serge");

    let (status, body) = send(app(&store), empty_request("GET", "/search/country/uk")).await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_search_invalid_criteria() {
    let store = mock_store();
    add_search_users(&store).await;

    let (status, body) = send(app(&store), empty_request("GET", "/search/password/x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "invalid search criteria: password");
}

#[tokio::test]
async fn test_search_value_is_percent_decoded() {
    let store = mock_store();
    add_search_users(&store).await;

    let (status, body) = send(
        app(&store),
        empty_request("GET", "/search/nickname/Splash%20Brother"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let users: Vec<User> = serde_json::from_slice(&body).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "1");
}

#[tokio::test]
async fn test_health() {
    let store = mock_store();
    add_search_users(&store).await;

    let (status, body) = send(app(&store), empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);

    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["users"], 3);
}
