//! Comment handlers. Every route addresses the comment under its post.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogicum_core::guard::Mutation;
use blogicum_shared::dto::CommentForm;

use super::{post_url, redirect, redirect_to_post, render};
use crate::middleware::auth::LoginRequired;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts/{id}/comment/
pub async fn add_comment(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    post_id: web::Path<Uuid>,
    body: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    let comment = state
        .blog
        .add_comment(*post_id, identity.user_id, body.into_inner().text)
        .await?;
    Ok(redirect(post_url(comment.post_id)))
}

async fn comment_form(
    state: &AppState,
    requester: Uuid,
    (post_id, comment_id): (Uuid, Uuid),
) -> AppResult<HttpResponse> {
    match state
        .blog
        .comment_for_edit(post_id, comment_id, requester)
        .await?
    {
        Mutation::Applied(comment) => Ok(HttpResponse::Ok().json(render::comment_form(&comment))),
        denied => Ok(redirect_to_post(&denied)),
    }
}

/// GET /posts/{id}/edit_comment/{comment_id}/
pub async fn edit_form(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    comment_form(&state, identity.user_id, path.into_inner()).await
}

/// POST /posts/{id}/edit_comment/{comment_id}/
pub async fn update(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let outcome = state
        .blog
        .update_comment(post_id, comment_id, identity.user_id, body.into_inner().text)
        .await?;
    Ok(redirect_to_post(&outcome))
}

/// GET /posts/{id}/delete_comment/{comment_id}/
pub async fn delete_form(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    comment_form(&state, identity.user_id, path.into_inner()).await
}

/// POST /posts/{id}/delete_comment/{comment_id}/
pub async fn delete(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let outcome = state
        .blog
        .delete_comment(post_id, comment_id, identity.user_id)
        .await?;
    Ok(redirect_to_post(&outcome))
}
