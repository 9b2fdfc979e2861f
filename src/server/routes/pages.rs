//! Page Routes
//!
//! - GET / - Home page
//! - GET /{resource} - One resource view, rendered after its fetch settles
//! - anything else - Not found page (404)
//!
//! A failing fetch still renders the page, with the error panel in place of
//! the records.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use std::sync::Arc;

use crate::fetch::CancellationToken;
use crate::router::Route;
use crate::server::error::ServerResult;
use crate::server::state::AppState;
use crate::view::{self, html, RenderTarget, ViewStatus};

/// Resolve the request path and render the matching page
pub async fn page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> ServerResult<(StatusCode, Html<String>)> {
    match Route::resolve(uri.path()) {
        Route::Home => Ok((StatusCode::OK, Html(html::home_page()))),
        Route::NotFound(path) => {
            tracing::debug!(path = %path, "No route for path");
            Ok((StatusCode::NOT_FOUND, Html(html::not_found_page(&path))))
        }
        Route::Resource(resource) => {
            // Dropping the handler (client gone) cancels the outbound fetch.
            let token = CancellationToken::new();
            let guard = token.drop_guard();

            let rendered =
                view::load_and_render(&state.client, resource, token, RenderTarget::Html).await?;
            guard.disarm();

            if rendered.status == ViewStatus::Error {
                tracing::warn!(resource = %resource, "Rendering view with error state");
            }

            Ok((StatusCode::OK, Html(rendered.body)))
        }
    }
}
