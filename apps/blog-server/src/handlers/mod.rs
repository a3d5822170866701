//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod health;
mod posts;
mod profiles;
mod render;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;
use uuid::Uuid;

use blogicum_core::guard::{Authored, Mutation};
use blogicum_core::pagination::PageRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(path = req.path(), error = %err, "Unroutable path parameter");
        AppError::NotFound.into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, req| {
        tracing::debug!(path = req.path(), error = %err, "Malformed query string");
        AppError::NotFound.into()
    }))
    .app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    // Public routes
    .route("/health", web::get().to(health::health_check))
    .route("/", web::get().to(posts::index))
    .route("/category/{slug}/", web::get().to(posts::category_posts))
    // Profiles; the fixed edit path wins over the username pattern
    .service(
        web::resource("/profile/edit/")
            .route(web::get().to(profiles::edit_form))
            .route(web::post().to(profiles::update)),
    )
    .route("/profile/{username}/", web::get().to(profiles::profile_posts))
    // Posts and their comments
    .service(
        web::scope("/posts")
            .service(
                web::resource("/create/")
                    .route(web::get().to(posts::create_form))
                    .route(web::post().to(posts::create)),
            )
            .route("/{id}/", web::get().to(posts::post_detail))
            .service(
                web::resource("/{id}/edit/")
                    .route(web::get().to(posts::edit_form))
                    .route(web::post().to(posts::update)),
            )
            .service(
                web::resource("/{id}/delete/")
                    .route(web::get().to(posts::delete_form))
                    .route(web::post().to(posts::delete)),
            )
            .route("/{id}/comment/", web::post().to(comments::add_comment))
            .service(
                web::resource("/{id}/edit_comment/{comment_id}/")
                    .route(web::get().to(comments::edit_form))
                    .route(web::post().to(comments::update)),
            )
            .service(
                web::resource("/{id}/delete_comment/{comment_id}/")
                    .route(web::get().to(comments::delete_form))
                    .route(web::post().to(comments::delete)),
            ),
    )
    // Auth routes
    .service(
        web::scope("/auth")
            .route("/registration/", web::post().to(auth::register))
            .route("/login/", web::post().to(auth::login))
            .route("/me/", web::get().to(auth::me)),
    );
}

/// `?page=N` on listings, 1-based.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u64>,
}

impl PageQuery {
    fn request(&self) -> AppResult<PageRequest> {
        Ok(PageRequest::new(self.page.unwrap_or(1))?)
    }
}

pub(crate) fn post_url(id: Uuid) -> String {
    format!("/posts/{id}/")
}

pub(crate) fn profile_url(username: &str) -> String {
    format!("/profile/{username}/")
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Soft denials land on the post detail page.
fn redirect_to_post<T: Authored>(outcome: &Mutation<T>) -> HttpResponse {
    let post_id = match outcome {
        Mutation::Applied(record) => record.post_id(),
        Mutation::Redirect { post_id } => *post_id,
    };
    redirect(post_url(post_id))
}

/// The requester's profile, under their current username.
async fn redirect_to_profile(state: &AppState, user_id: Uuid) -> AppResult<HttpResponse> {
    let user = state.blog.profile(user_id).await?;
    Ok(redirect(profile_url(&user.username)))
}
