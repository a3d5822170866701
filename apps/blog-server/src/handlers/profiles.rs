//! Profile pages and profile editing.

use actix_web::{HttpResponse, web};

use blogicum_shared::dto::{ProfileForm, ProfilePostsResponse};

use super::{PageQuery, profile_url, redirect, render};
use crate::middleware::auth::{LoginRequired, OptionalIdentity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /profile/{username}/
pub async fn profile_posts(
    state: web::Data<AppState>,
    viewer: OptionalIdentity,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let (owner, posts) = state
        .blog
        .profile_posts(&username, viewer.user_id(), query.request()?)
        .await?;

    Ok(HttpResponse::Ok().json(ProfilePostsResponse {
        profile: render::profile(&owner),
        posts: render::page(posts),
    }))
}

/// GET /profile/edit/
pub async fn edit_form(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
) -> AppResult<HttpResponse> {
    let user = state.blog.profile(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(render::profile_form(&user)))
}

/// POST /profile/edit/
pub async fn update(
    state: web::Data<AppState>,
    LoginRequired(identity): LoginRequired,
    body: web::Json<ProfileForm>,
) -> AppResult<HttpResponse> {
    let changes = render::profile_changes(body.into_inner());
    let user = state.blog.update_profile(identity.user_id, changes).await?;
    tracing::info!(user_id = %user.id, "Profile updated");
    Ok(redirect(profile_url(&user.username)))
}
