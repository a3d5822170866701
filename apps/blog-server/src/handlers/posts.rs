//! Listing, detail and authoring handlers for posts.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::guard::Mutation;
use blogicum_shared::dto::{CategoryPostsResponse, PostForm, PostFormContext};

use super::{PageQuery, redirect_to_post, redirect_to_profile, render};
use crate::middleware::auth::{LoginRequired, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn index(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.blog.index(viewer.user_id(), query.request()?).await?;
    Ok(HttpResponse::Ok().json(render::page(posts)))
}

/// GET /category/{slug}/
pub async fn category_posts(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let (category, posts) = state
        .blog
        .category_posts(&slug, viewer.user_id(), query.request()?)
        .await?;

    Ok(HttpResponse::Ok().json(CategoryPostsResponse {
        category: render::category(&category),
        posts: render::page(posts),
    }))
}

/// GET /posts/{id}/
pub async fn post_detail(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let detail = state.blog.post_detail(*id, viewer.user_id()).await?;
    Ok(HttpResponse::Ok().json(render::post_detail(detail)))
}

async fn form_context(state: &AppState, form: Option<PostForm>) -> AppResult<PostFormContext> {
    let categories = state.blog.post_form_categories().await?;
    Ok(PostFormContext {
        form,
        categories: categories.iter().map(render::category).collect(),
    })
}

/// GET /posts/create/
pub async fn create_form(
    state: web::Data<AppState>,
    _login: LoginRequired,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(form_context(&state, None).await?))
}

/// POST /posts/create/
pub async fn create(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let draft = render::draft(body.into_inner());
    state.blog.create_post(identity.user_id, draft).await?;
    redirect_to_profile(&state, identity.user_id).await
}

/// GET /posts/{id}/edit/ and GET /posts/{id}/delete/ share the same initial
/// data: the post as it stands.
async fn post_form(state: &AppState, requester: Uuid, id: Uuid) -> AppResult<HttpResponse> {
    match state.blog.post_for_edit(id, requester).await? {
        Mutation::Applied(post) => {
            let context = form_context(state, Some(render::post_form(&post))).await?;
            Ok(HttpResponse::Ok().json(context))
        }
        denied => Ok(redirect_to_post(&denied)),
    }
}

/// GET /posts/{id}/edit/
pub async fn edit_form(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    post_form(&state, identity.user_id, *id).await
}

/// POST /posts/{id}/edit/
pub async fn update(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    id: web::Path<Uuid>,
    body: web::Json<PostForm>,
) -> AppResult<HttpResponse> {
    let draft = render::draft(body.into_inner());
    let outcome = state.blog.update_post(*id, identity.user_id, draft).await?;
    Ok(redirect_to_post(&outcome))
}

/// GET /posts/{id}/delete/
pub async fn delete_form(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    post_form(&state, identity.user_id, *id).await
}

/// POST /posts/{id}/delete/
pub async fn delete(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    id: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    match state.blog.delete_post(*id, identity.user_id).await? {
        Mutation::Applied(_) => redirect_to_profile(&state, identity.user_id).await,
        denied => Ok(redirect_to_post(&denied)),
    }
}
