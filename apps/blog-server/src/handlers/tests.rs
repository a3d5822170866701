use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{TimeDelta, Utc};
use serde_json::json;

use blogicum_core::domain::{Category, Comment, Post, PostDraft, User};
use blogicum_core::ports::{
    BaseRepository, CommentRepository, PasswordService, TokenService,
};
use blogicum_infra::{Argon2PasswordService, JwtConfig, JwtTokenService};
use blogicum_shared::dto::{
    AuthResponse, CategoryPostsResponse, CommentForm, PostDetailResponse, PostFormContext,
    PostResponse, ProfilePostsResponse, UserResponse,
};
use blogicum_shared::{ErrorResponse, Paginated};

use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

struct Fixture {
    state: AppState,
    tokens: Arc<dyn TokenService>,
    alice: User,
    bob: User,
    travel: Category,
}

impl Fixture {
    async fn new() -> Self {
        let state = AppState::in_memory();
        let repos = state.blog.repositories();

        let alice = User::new("alice".into(), "alice@example.com".into(), "x".into());
        let bob = User::new("bob".into(), "bob@example.com".into(), "x".into());
        repos.users.create(alice.clone()).await.unwrap();
        repos.users.create(bob.clone()).await.unwrap();

        let travel = Category::new("Travel".into(), "travel".into(), "Trips".into());
        repos.categories.create(travel.clone()).await.unwrap();

        Self {
            state,
            tokens: Arc::new(JwtTokenService::new(JwtConfig::default())),
            alice,
            bob,
            travel,
        }
    }

    fn bearer(&self, user: &User) -> (header::HeaderName, String) {
        let token = self
            .tokens
            .generate_token(user.id, &user.username)
            .unwrap();
        (header::AUTHORIZATION, format!("Bearer {token}"))
    }

    async fn post(&self, author: &User, title: &str, is_published: bool) -> Post {
        let draft = PostDraft {
            title: title.into(),
            text: "Lorem ipsum".into(),
            pub_date: Some(Utc::now() - TimeDelta::minutes(1)),
            category_id: Some(self.travel.id),
            is_published,
        };
        self.state.blog.create_post(author.id, draft).await.unwrap()
    }

    async fn comment(&self, author: &User, post: &Post, text: &str) -> Comment {
        self.state
            .blog
            .add_comment(post.id, author.id, text.into())
            .await
            .unwrap()
    }

    async fn stored_post(&self, post: &Post) -> Option<Post> {
        let repos = self.state.blog.repositories();
        repos.posts.find_by_id(post.id).await.unwrap()
    }
}

macro_rules! test_app {
    ($fx:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new($fx.state.clone()))
                .app_data(web::Data::new($fx.tokens.clone()))
                .app_data(web::Data::new(
                    Arc::new(Argon2PasswordService::new()) as Arc<dyn PasswordService>
                ))
                .configure(super::configure_routes),
        )
        .await
    };
}

fn location<B>(res: &ServiceResponse<B>) -> &str {
    res.headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
}

fn titles(page: &Paginated<PostResponse>) -> Vec<&str> {
    page.items.iter().map(|p| p.title.as_str()).collect()
}

fn edit_body(title: &str) -> serde_json::Value {
    json!({ "title": title, "text": "Rewritten", "is_published": true })
}

#[actix_rt::test]
async fn test_index_hides_unpublished_posts_from_others() {
    let fx = Fixture::new().await;
    fx.post(&fx.alice, "draft", false).await;
    fx.post(&fx.alice, "public", true).await;
    let app = test_app!(fx);

    let anonymous: Paginated<PostResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(titles(&anonymous), vec!["public"]);
    assert_eq!(anonymous.items[0].author, "alice");
    assert_eq!(anonymous.items[0].category.as_ref().unwrap().slug, "travel");

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let bob: Paginated<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&bob), vec!["public"]);

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    let alice: Paginated<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(alice.total_items, 2);
    assert!(titles(&alice).contains(&"draft"));
}

#[actix_rt::test]
async fn test_future_posts_stay_hidden() {
    let fx = Fixture::new().await;
    let draft = PostDraft {
        title: "tomorrow".into(),
        text: "Soon".into(),
        pub_date: Some(Utc::now() + TimeDelta::days(1)),
        category_id: Some(fx.travel.id),
        is_published: true,
    };
    let post = fx.state.blog.create_post(fx.alice.id, draft).await.unwrap();
    let app = test_app!(fx);

    let index: Paginated<PostResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(index.items.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/", post.id))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_category_listing() {
    let fx = Fixture::new().await;
    fx.post(&fx.alice, "Lisbon", true).await;
    let app = test_app!(fx);

    let body: CategoryPostsResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/category/travel/").to_request(),
    )
    .await;
    assert_eq!(body.category.title, "Travel");
    assert_eq!(titles(&body.posts), vec!["Lisbon"]);
    assert_eq!(body.posts.total_pages, 1);
}

#[actix_rt::test]
async fn test_unpublished_category_is_not_found() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "hidden", true).await;
    let mut travel = fx.travel.clone();
    travel.is_published = false;
    fx.state
        .blog
        .repositories()
        .categories
        .update(travel)
        .await
        .unwrap();
    let app = test_app!(fx);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/category/travel/").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/", post.id))
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    // Still visible to its author
    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/", post.id))
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_unknown_slug_and_username_are_not_found() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    for uri in ["/category/nope/", "/profile/nobody/"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");

        let body: ErrorResponse = test::read_body_json(res).await;
        assert_eq!(body.status, 404);
        assert!(body.detail.is_none());
    }
}

#[actix_rt::test]
async fn test_malformed_ids_and_pages_are_not_found() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let uris = [
        "/posts/not-a-uuid/",
        "/?page=0",
        "/?page=abc",
        "/?page=2",
        "/?page=18446744073709551615",
        "/category/travel/?page=1099511627776",
    ];
    for uri in uris {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[actix_rt::test]
async fn test_pages_hold_ten_posts() {
    let fx = Fixture::new().await;
    for i in 0..11 {
        fx.post(&fx.alice, &format!("post {i}"), true).await;
    }
    let app = test_app!(fx);

    let first: Paginated<PostResponse> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next);

    let second: Paginated<PostResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/?page=2").to_request(),
    )
    .await;
    assert_eq!(second.items.len(), 1);
    assert!(second.has_previous);
}

#[actix_rt::test]
async fn test_anonymous_comment_redirects_to_login() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "open", true).await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/comment/", post.id))
        .set_json(json!({ "text": "hi" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        location(&res),
        format!("/auth/login/?next=%2Fposts%2F{}%2Fcomment%2F", post.id)
    );
    let comments = fx
        .state
        .blog
        .repositories()
        .comments
        .list_for_post(post.id)
        .await
        .unwrap();
    assert!(comments.is_empty());
}

#[actix_rt::test]
async fn test_comment_is_appended_to_post() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "open", true).await;
    fx.comment(&fx.bob, &post, "first").await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/comment/", post.id))
        .insert_header(fx.bearer(&fx.alice))
        .set_json(json!({ "text": "second" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/posts/{}/", post.id));

    let detail: PostDetailResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{}/", post.id))
            .to_request(),
    )
    .await;
    let texts: Vec<_> = detail.comments.iter().map(|c| c.text.as_str()).collect();
    let authors: Vec<_> = detail.comments.iter().map(|c| c.author.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(authors, vec!["bob", "alice"]);
    assert_eq!(detail.post.comment_count, 2);
}

#[actix_rt::test]
async fn test_empty_comment_is_rejected() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "open", true).await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/comment/", post.id))
        .insert_header(fx.bearer(&fx.bob))
        .set_json(json!({ "text": "   " }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_rt::test]
async fn test_stranger_cannot_edit_or_delete_post() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "mine", true).await;
    let app = test_app!(fx);
    let detail = format!("/posts/{}/", post.id);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/edit/", post.id))
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), detail);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/edit/", post.id))
        .insert_header(fx.bearer(&fx.bob))
        .set_json(edit_body("stolen"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), detail);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/delete/", post.id))
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), detail);

    let stored = fx.stored_post(&post).await.unwrap();
    assert_eq!(stored.title, "mine");
    assert_eq!(stored.text, "Lorem ipsum");
}

#[actix_rt::test]
async fn test_author_edits_post() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "mine", true).await;
    let app = test_app!(fx);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/edit/", post.id))
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    let context: PostFormContext = test::call_and_read_body_json(&app, req).await;
    assert_eq!(context.form.unwrap().title, "mine");
    assert_eq!(context.categories.len(), 1);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/edit/", post.id))
        .insert_header(fx.bearer(&fx.alice))
        .set_json(edit_body("still mine"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/posts/{}/", post.id));

    let stored = fx.stored_post(&post).await.unwrap();
    assert_eq!(stored.title, "still mine");
    assert_eq!(stored.pub_date, post.pub_date);
}

#[actix_rt::test]
async fn test_create_post_redirects_to_profile() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/posts/create/").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/auth/login/?next=%2Fposts%2Fcreate%2F");

    let req = test::TestRequest::post()
        .uri("/posts/create/")
        .insert_header(fx.bearer(&fx.alice))
        .set_json(json!({
            "title": "Hello",
            "text": "First post",
            "category_id": fx.travel.id,
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/profile/alice/");

    let profile: ProfilePostsResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/profile/alice/").to_request(),
    )
    .await;
    assert_eq!(titles(&profile.posts), vec!["Hello"]);
}

#[actix_rt::test]
async fn test_invalid_post_form_is_rejected() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri("/posts/create/")
        .insert_header(fx.bearer(&fx.alice))
        .set_json(json!({ "title": "", "text": "" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/posts/create/")
        .insert_header(fx.bearer(&fx.alice))
        .set_payload("not json")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_deleting_post_removes_comments() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "doomed", true).await;
    fx.comment(&fx.bob, &post, "nice").await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/delete/", post.id))
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/profile/alice/");

    assert!(fx.stored_post(&post).await.is_none());
    let comments = fx
        .state
        .blog
        .repositories()
        .comments
        .list_for_post(post.id)
        .await
        .unwrap();
    assert!(comments.is_empty());

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{}/", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_comment_edit_is_owner_only() {
    let fx = Fixture::new().await;
    let post = fx.post(&fx.alice, "open", true).await;
    let comment = fx.comment(&fx.alice, &post, "original").await;
    let app = test_app!(fx);
    let uri = format!("/posts/{}/edit_comment/{}/", post.id, comment.id);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(fx.bearer(&fx.bob))
        .set_json(json!({ "text": "vandalized" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/posts/{}/", post.id));

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    let form: CommentForm = test::call_and_read_body_json(&app, req).await;
    assert_eq!(form.text, "original");

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(fx.bearer(&fx.alice))
        .set_json(json!({ "text": "edited" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FOUND);

    let comments = fx
        .state
        .blog
        .repositories()
        .comments
        .list_for_post(post.id)
        .await
        .unwrap();
    assert_eq!(comments[0].text, "edited");
}

#[actix_rt::test]
async fn test_comment_under_wrong_post_is_not_found() {
    let fx = Fixture::new().await;
    let first = fx.post(&fx.alice, "first", true).await;
    let second = fx.post(&fx.alice, "second", true).await;
    let comment = fx.comment(&fx.bob, &first, "on first").await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri(&format!(
            "/posts/{}/delete_comment/{}/",
            second.id, comment.id
        ))
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/delete_comment/{}/", first.id, comment.id))
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), format!("/posts/{}/", first.id));
}

#[actix_rt::test]
async fn test_profile_owner_sees_unpublished_posts() {
    let fx = Fixture::new().await;
    fx.post(&fx.alice, "draft", false).await;
    let app = test_app!(fx);

    let req = test::TestRequest::get()
        .uri("/profile/alice/")
        .insert_header(fx.bearer(&fx.bob))
        .to_request();
    let seen_by_bob: ProfilePostsResponse = test::call_and_read_body_json(&app, req).await;
    assert!(seen_by_bob.posts.items.is_empty());
    assert_eq!(seen_by_bob.profile.username, "alice");

    let req = test::TestRequest::get()
        .uri("/profile/alice/")
        .insert_header(fx.bearer(&fx.alice))
        .to_request();
    let seen_by_alice: ProfilePostsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(titles(&seen_by_alice.posts), vec!["draft"]);
}

#[actix_rt::test]
async fn test_profile_edit_renames_and_keeps_usernames_unique() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri("/profile/edit/")
        .insert_header(fx.bearer(&fx.alice))
        .set_json(json!({
            "username": "alice2",
            "email": "alice@example.com",
            "bio": "Writes about trains",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/profile/alice2/");

    let req = test::TestRequest::post()
        .uri("/profile/edit/")
        .insert_header(fx.bearer(&fx.bob))
        .set_json(json!({ "username": "alice2", "email": "bob@example.com" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    let profile: ProfilePostsResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/profile/alice2/").to_request(),
    )
    .await;
    assert_eq!(profile.profile.bio, "Writes about trains");
}

#[actix_rt::test]
async fn test_register_login_and_me() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let req = test::TestRequest::post()
        .uri("/auth/registration/")
        .set_json(json!({
            "username": "leo",
            "email": "leo@example.com",
            "password": "war-and-peace",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let auth: AuthResponse = test::read_body_json(res).await;
    assert_eq!(auth.token_type, "Bearer");

    let req = test::TestRequest::get()
        .uri("/auth/me/")
        .insert_header((
            header::AUTHORIZATION,
            format!("Bearer {}", auth.access_token),
        ))
        .to_request();
    let me: UserResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me.username, "leo");
    assert_eq!(me.email, "leo@example.com");

    let req = test::TestRequest::post()
        .uri("/auth/login/")
        .set_json(json!({ "username": "leo", "password": "anna-karenina" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri("/auth/login/")
        .set_json(json!({ "username": "leo", "password": "war-and-peace" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_registration_rejects_bad_input() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let cases = [
        (
            json!({ "username": "alice", "email": "new@example.com", "password": "long-enough" }),
            StatusCode::CONFLICT,
        ),
        (
            json!({ "username": "carol", "email": "carol@example.com", "password": "short" }),
            StatusCode::BAD_REQUEST,
        ),
        (
            json!({ "username": "bad name", "email": "x@example.com", "password": "long-enough" }),
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
    ];

    for (body, status) in cases {
        let req = test::TestRequest::post()
            .uri("/auth/registration/")
            .set_json(body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), status);
    }
}

#[actix_rt::test]
async fn test_me_requires_bearer_token() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let res = test::call_service(&app, test::TestRequest::get().uri("/auth/me/").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_health_echoes_request_id() {
    let fx = Fixture::new().await;
    let app = test_app!(fx);

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "abc-123"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers().get("x-request-id").unwrap(), "abc-123");

    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(res.headers().contains_key("x-request-id"));
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["storage"], "memory");
}
