use std::time::Duration;

use kitchen_finder::{
    build_request, ApiClient, Cuisine, FinderError, OnionGarlic, PrepTier, RecipeFinder,
    SearchSession, SearchState,
};
use mockito::Matcher;

fn search_body() -> &'static str {
    r#"{
        "low": {
            "with_onion_garlic": [{
                "id": 101,
                "title": "Garlic Fried Rice",
                "image": "https://img.example.com/101.jpg",
                "readyInMinutes": 15,
                "servings": 2,
                "nutrition": {"calories": 420.0, "protein": 9.0, "carbs": 70.0, "fat": 11.0, "fiber": 2.0},
                "ingredients": ["rice", "garlic", "egg"],
                "instructions": ["Fry garlic", "Add rice"],
                "hasOnionGarlic": true
            }],
            "without_onion_garlic": []
        },
        "medium": {
            "with_onion_garlic": [],
            "without_onion_garlic": [{
                "id": 102,
                "title": "Chicken Rice Bowl",
                "image": "",
                "readyInMinutes": 35,
                "servings": 4,
                "nutrition": {"calories": 610.0, "protein": 42.0, "carbs": 65.0, "fat": 18.0, "fiber": 3.0},
                "ingredients": ["chicken", "rice"],
                "instructions": [],
                "hasOnionGarlic": false
            }]
        },
        "high": {"with_onion_garlic": [], "without_onion_garlic": []}
    }"#
}

fn client_for(server: &mockito::Server) -> ApiClient {
    ApiClient::with_base_url(&server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_search_sends_request_and_parses_buckets() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/recipes/search")
        .match_body(Matcher::Json(serde_json::json!({
            "ingredients": "chicken, rice",
            "cuisine": "italian",
            "number": 100
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create_async()
        .await;

    let client = client_for(&server);
    let request = build_request("chicken, rice", Cuisine::Italian).unwrap();
    let response = client.search(&request).await.unwrap();

    assert_eq!(response.total(), 2);
    let low = response.bucket(PrepTier::Low, OnionGarlic::With);
    assert_eq!(low[0].title, "Garlic Fried Rice");
    assert_eq!(low[0].instructions.len(), 2);
    let medium = response.bucket(PrepTier::Medium, OnionGarlic::Without);
    assert_eq!(medium[0].id.to_string(), "102");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_status_codes_map_to_error_kinds() {
    let cases: [(usize, fn(&FinderError) -> bool); 5] = [
        (502, |e| matches!(e, FinderError::UpstreamUnavailable)),
        (504, |e| matches!(e, FinderError::GatewayTimeout)),
        (500, |e| matches!(e, FinderError::Server(500))),
        (422, |e| matches!(e, FinderError::InvalidIngredients(d) if d == "ingredients must be text")),
        (404, |e| matches!(e, FinderError::Api { status: 404, .. })),
    ];

    for (status, check) in cases {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/api/recipes/search")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "ingredients must be text"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = build_request("egg, rice", Cuisine::Any).unwrap();
        let err = client.search(&request).await.unwrap_err();
        assert!(check(&err), "status {} gave {:?}", status, err);
    }
}

#[tokio::test]
async fn test_malformed_success_body_fails_whole() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/recipes/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"low": {"with_onion_garlic": [{"title": "no id"}]}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let request = build_request("egg, rice", Cuisine::Any).unwrap();
    let err = client.search(&request).await.unwrap_err();
    assert!(matches!(err, FinderError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Nothing listens on the discard port
    let client = ApiClient::with_base_url("http://127.0.0.1:9", Duration::from_secs(5)).unwrap();
    let request = build_request("egg, rice", Cuisine::Any).unwrap();
    let err = client.search(&request).await.unwrap_err();
    assert!(
        matches!(err, FinderError::Network(_)),
        "unexpected {:?}",
        err
    );
    assert!(err.user_message().contains("internet connection"));
}

#[tokio::test]
async fn test_session_lifecycle_against_server() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("POST", "/api/recipes/search")
        .match_body(Matcher::PartialJson(serde_json::json!({"ingredients": "chicken, rice"})))
        .with_status(200)
        .with_body(search_body())
        .create_async()
        .await;
    let failing = server
        .mock("POST", "/api/recipes/search")
        .match_body(Matcher::PartialJson(serde_json::json!({"ingredients": "stone, soup"})))
        .with_status(502)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut session = SearchSession::new();

    session.run(&client, "chicken, rice", Cuisine::Any).await.unwrap();
    assert_eq!(session.results().map(|r| r.total()), Some(2));

    let pending = session.begin("stone, soup", Cuisine::Any).unwrap().unwrap();
    assert!(session.results().is_none());
    let outcome = client.search(&pending.request).await;
    session.complete(&pending, outcome);
    assert!(matches!(
        session.state(),
        SearchState::Failed(FinderError::UpstreamUnavailable)
    ));

    ok.assert_async().await;
    failing.assert_async().await;
}

#[tokio::test]
async fn test_builder_searches_configured_backend() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/recipes/search")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "ingredients": "paneer, spinach, tomatoes",
            "cuisine": "indian"
        })))
        .with_status(200)
        .with_body(r#"{"low": {}, "medium": {}, "high": {}}"#)
        .create_async()
        .await;

    let response = RecipeFinder::builder()
        .ingredients("paneer")
        .transcript("spinach with tomatoes")
        .cuisine(Cuisine::Indian)
        .base_url(server.url())
        .timeout(Duration::from_secs(5))
        .build()
        .await
        .unwrap();

    assert!(response.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_keeps_sub_second_timeout() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/recipes/search")
        .with_status(200)
        .with_body(r#"{"low": {}, "medium": {}, "high": {}}"#)
        .create_async()
        .await;

    let response = RecipeFinder::builder()
        .ingredients("egg, rice")
        .base_url(server.url())
        .timeout(Duration::from_millis(800))
        .build()
        .await;

    assert!(response.is_ok(), "unexpected {:?}", response.err());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stalled_backend_times_out() {
    // Accepts connections but never writes a response
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let stall = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let client =
        ApiClient::with_base_url(&format!("http://{}", addr), Duration::from_millis(500)).unwrap();
    let request = build_request("egg, rice", Cuisine::Any).unwrap();
    let err = client.search(&request).await.unwrap_err();

    assert!(matches!(err, FinderError::Timeout), "unexpected {:?}", err);
    assert!(err.user_message().contains("took too long"));
    stall.abort();
}
