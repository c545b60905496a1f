//! Handlers for the `/pessoas` resource.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use pessoas_app::ports::PersonRepository;
use pessoas_domain::id::PersonId;
use pessoas_domain::person::Person;

use crate::error::{ApiError, RouteNotFound};
use crate::state::AppState;

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer does not address a record at all, so it
/// is rejected like an unknown route.
pub struct PersonIdPath(pub PersonId);

impl<S> FromRequestParts<S> for PersonIdPath
where
    S: Send + Sync,
{
    type Rejection = RouteNotFound;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RouteNotFound::InvalidMethodOrRoute)?;
        raw.parse()
            .map(Self)
            .map_err(|_| RouteNotFound::InvalidMethodOrRoute)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// Store contents, forwarded without re-validation.
    Ok(Vec<u8>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(raw) => ([(header::CONTENT_TYPE, "application/json")], raw).into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Person>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Person>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => (StatusCode::OK, "pessoa deletado com sucesso").into_response(),
        }
    }
}

/// `GET /pessoas`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let raw = state.person_service.list_raw().await?;
    Ok(ListResponse::Ok(raw))
}

/// `POST /pessoas`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let created = state.person_service.create_person(&body).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /pessoas/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    PersonIdPath(id): PersonIdPath,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    let updated = state.person_service.update_person(id, &body).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /pessoas/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    PersonIdPath(id): PersonIdPath,
) -> Result<DeleteResponse, ApiError>
where
    R: PersonRepository + Send + Sync + 'static,
{
    state.person_service.delete_person(id).await?;
    Ok(DeleteResponse::Deleted)
}
