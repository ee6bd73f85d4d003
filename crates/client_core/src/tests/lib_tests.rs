use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use shared::domain::UserId;
use shared::protocol::{Company, GeoPoint, PostalAddress, UserRecord};
use tokio::net::TcpListener;

fn sample_user(id: i64, name: &str, username: &str, website: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{username}@april.biz"),
        address: PostalAddress {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: GeoPoint {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031 x56442".to_string(),
        website: website.to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

fn sample_directory() -> Vec<UserRecord> {
    vec![
        sample_user(1, "Leanne Graham", "Bret", "hildegard.org"),
        sample_user(2, "Ervin Howell", "Antonette", "anastasia.net"),
    ]
}

async fn spawn_directory_endpoint(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve test directory");
    });
    Url::parse(&format!("http://{addr}/users")).expect("endpoint url")
}

fn client_for(endpoint: Url) -> DirectoryClient {
    DirectoryClient::new(Client::new(), endpoint)
}

#[tokio::test]
async fn fetches_and_parses_user_collection_in_order() {
    let users = sample_directory();
    let served = users.clone();
    let router = Router::new().route(
        "/users",
        get(move || {
            let served = served.clone();
            async move { Json(served) }
        }),
    );
    let endpoint = spawn_directory_endpoint(router).await;

    let fetched = client_for(endpoint)
        .fetch_users()
        .await
        .expect("fetch succeeds");

    assert_eq!(fetched, users);
    assert_eq!(fetched[0].name, "Leanne Graham");
    assert_eq!(fetched[1].name, "Ervin Howell");
}

#[tokio::test]
async fn empty_collection_yields_empty_view() {
    let router = Router::new().route(
        "/users",
        get(|| async { Json(Vec::<UserRecord>::new()) }),
    );
    let endpoint = spawn_directory_endpoint(router).await;

    let fetched = client_for(endpoint)
        .fetch_users()
        .await
        .expect("fetch succeeds");

    assert!(fetched.is_empty());
    assert!(DirectoryView::from_users(&fetched).is_empty());
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let router = Router::new().route(
        "/users",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let endpoint = spawn_directory_endpoint(router).await;

    let err = client_for(endpoint)
        .fetch_users()
        .await
        .expect_err("fetch must fail");

    match &err {
        FetchError::Http { status } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected http error, got {other:?}"),
    }
    let message = err.user_message();
    assert!(message.contains("Server error"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn connection_refused_maps_to_network_error() {
    // Bind to grab a free port, then drop the listener so nothing answers.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    let endpoint = Url::parse(&format!("http://{addr}/users")).expect("endpoint url");

    let err = client_for(endpoint)
        .fetch_users()
        .await
        .expect_err("fetch must fail");

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert!(err.user_message().contains("Network error"));
}

#[tokio::test]
async fn malformed_body_maps_to_unexpected_error() {
    let router = Router::new().route("/users", get(|| async { "definitely not json" }));
    let endpoint = spawn_directory_endpoint(router).await;

    let err = client_for(endpoint)
        .fetch_users()
        .await
        .expect_err("fetch must fail");

    match &err {
        FetchError::Unexpected { message } => {
            assert!(!message.trim().is_empty());
            assert_eq!(err.user_message(), *message);
        }
        other => panic!("expected unexpected error, got {other:?}"),
    }
}
