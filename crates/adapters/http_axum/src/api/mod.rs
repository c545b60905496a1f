//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pessoas;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{MethodRouter, get};

use pessoas_app::ports::PersonRepository;

use crate::error::RouteNotFound;
use crate::state::AppState;

/// Build the `/pessoas` routes.
///
/// `GET` and `POST` list and create whatever follows `/pessoas/`; only `PUT`
/// and `DELETE` need a numeric id. Methods a path does not serve fall back to
/// a JSON `404` instead of axum's default `405`. Request bodies are not size
/// limited.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/pessoas", collection::<R>())
        .route("/pessoas/", collection::<R>())
        .route(
            "/pessoas/{id}",
            collection::<R>()
                .put(pessoas::update::<R>)
                .delete(pessoas::delete::<R>),
        )
        .layer(DefaultBodyLimit::disable())
}

fn collection<R>() -> MethodRouter<AppState<R>>
where
    R: PersonRepository + Send + Sync + 'static,
{
    get(pessoas::list::<R>)
        .post(pessoas::create::<R>)
        .fallback(invalid_method_or_route)
}

async fn invalid_method_or_route() -> RouteNotFound {
    RouteNotFound::InvalidMethodOrRoute
}
