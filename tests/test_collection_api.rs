use std::time::Duration;

use kitchen_finder::model::{AuthResponse, User};
use kitchen_finder::{
    share_link, ApiClient, CustomRecipeDraft, FavoriteSaved, FinderError, RecipeId, RecipeResult,
    Session, ShareKind,
};
use mockito::Matcher;

fn client_for(server: &mockito::Server) -> ApiClient {
    ApiClient::with_base_url(&server.url(), Duration::from_secs(5)).unwrap()
}

fn logged_in() -> Session {
    let mut session = Session::anonymous();
    session.login(AuthResponse {
        access_token: "secret-token".to_string(),
        token_type: "bearer".to_string(),
        user: User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
        },
    });
    session
}

fn sample_recipe() -> RecipeResult {
    serde_json::from_value(serde_json::json!({
        "id": 555,
        "title": "Tomato Rice",
        "readyInMinutes": 25,
        "servings": 2,
        "nutrition": {"calories": 300, "protein": 6, "carbs": 60, "fat": 4, "fiber": 3},
        "ingredients": ["rice", "tomato"],
        "hasOnionGarlic": false
    }))
    .unwrap()
}

#[tokio::test]
async fn test_save_favorite_sends_bearer_and_recipe() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/recipes/save-favorite")
        .match_header("authorization", "Bearer secret-token")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "recipe_data": {"id": 555, "title": "Tomato Rice", "readyInMinutes": 25}
        })))
        .with_status(200)
        .with_body(r#"{"message": "Recipe saved to favorites"}"#)
        .create_async()
        .await;

    let saved = client_for(&server)
        .save_favorite(&logged_in(), &sample_recipe())
        .await
        .unwrap();
    assert_eq!(saved, FavoriteSaved::Added);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repeat_save_is_success() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/recipes/save-favorite")
        .with_status(400)
        .with_body(r#"{"detail": "Recipe already in favorites"}"#)
        .create_async()
        .await;

    let saved = client_for(&server)
        .save_favorite(&logged_in(), &sample_recipe())
        .await
        .unwrap();
    assert_eq!(saved, FavoriteSaved::AlreadySaved);
}

#[tokio::test]
async fn test_anonymous_session_never_hits_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/recipes/favorites")
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server)
        .list_favorites(&Session::anonymous())
        .await
        .unwrap_err();
    assert!(matches!(err, FinderError::NotAuthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_favorites_and_share_links() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes/favorites")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body(
            r#"{"recipes": [
                {"id": 555, "title": "Tomato Rice", "readyInMinutes": 25, "share_token": "fav-tok"},
                {"id": 556, "title": "Plain Rice"}
            ]}"#,
        )
        .create_async()
        .await;

    let favorites = client_for(&server)
        .list_favorites(&logged_in())
        .await
        .unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(
        share_link("https://kitchen.example.com", ShareKind::Favorite, &favorites[0]).as_deref(),
        Some("https://kitchen.example.com/recipe/favorite/fav-tok")
    );
    assert_eq!(
        share_link("https://kitchen.example.com", ShareKind::Favorite, &favorites[1]),
        None
    );
}

#[tokio::test]
async fn test_remove_favorite_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/recipes/remove-favorite/555")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .create_async()
        .await;

    client_for(&server)
        .remove_favorite(&logged_in(), &RecipeId::Number(555))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_recipe_create_list_delete() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/recipes/custom")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Lemon Rice",
            "ingredients": ["rice", "lemon", "peanuts"],
            "instructions": ["Cook rice", "Mix with lemon"],
            "servings": 3
        })))
        .with_status(200)
        .with_body(
            r#"{"id": "c-1", "title": "Lemon Rice", "ingredients": ["rice", "lemon", "peanuts"],
                "instructions": ["Cook rice", "Mix with lemon"], "servings": 3, "share_token": "cus-tok"}"#,
        )
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/recipes/custom")
        .with_status(200)
        .with_body(r#"{"recipes": [{"id": "c-1", "title": "Lemon Rice", "servings": 3}]}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/recipes/custom/c-1")
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let session = logged_in();

    let mut draft = CustomRecipeDraft::new("Lemon Rice").servings(3);
    for ingredient in ["rice", "lemon", "peanuts"] {
        draft.add_ingredient(ingredient);
    }
    draft.add_instruction("Cook rice");
    draft.add_instruction("Mix with lemon");

    let created = client
        .create_custom(&session, &draft.validate().unwrap())
        .await
        .unwrap();
    assert_eq!(created.recipe.id, RecipeId::Text("c-1".into()));
    assert_eq!(created.share_token.as_deref(), Some("cus-tok"));

    let recipes = client.list_custom(&session).await.unwrap();
    assert_eq!(recipes[0].recipe.servings, 3);

    client.delete_custom(&session, &recipes[0].recipe.id).await.unwrap();

    create.assert_async().await;
    list.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_login_then_delete_account_logs_out() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "asha@example.com",
            "password": "hunter22"
        })))
        .with_status(200)
        .with_body(
            r#"{"access_token": "tok-9", "token_type": "bearer",
                "user": {"id": "u1", "name": "Asha", "email": "asha@example.com"}}"#,
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/auth/delete-account")
        .match_header("authorization", "Bearer tok-9")
        .match_body(Matcher::Json(serde_json::json!({"password": "hunter22"})))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut session = Session::anonymous();
    session.login(client.login("asha@example.com", "hunter22").await.unwrap());
    assert_eq!(session.user().unwrap().name, "Asha");

    client.delete_account(&mut session, "hunter22").await.unwrap();
    assert!(!session.is_authenticated());

    login.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_auth_errors_carry_backend_detail() {
    let mut server = mockito::Server::new_async().await;
    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"detail": "Invalid email or password"}"#)
        .create_async()
        .await;
    let _register = server
        .mock("POST", "/api/auth/register")
        .with_status(400)
        .with_body(r#"{"detail": "Email already registered"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.login("a@example.com", "nope").await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password");

    let err = client
        .register("A", "a@example.com", "pw")
        .await
        .unwrap_err();
    assert!(matches!(err, FinderError::Api { status: 400, .. }));
    assert_eq!(err.user_message(), "Email already registered");
}

#[tokio::test]
async fn test_forgot_password_message() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/forgot-password")
        .match_body(Matcher::Json(serde_json::json!({"email": "asha@example.com"})))
        .with_status(200)
        .with_body(r#"{"message": "Password reset email sent"}"#)
        .create_async()
        .await;

    let message = client_for(&server)
        .forgot_password("asha@example.com")
        .await
        .unwrap();
    assert_eq!(message, "Password reset email sent");
    mock.assert_async().await;
}
