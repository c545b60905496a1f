//! HTTP error response mapping.

use std::error::Error as _;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pessoas_domain::error::{PessoasError, StorageOperation, ValidationError};

/// JSON error body returned for unknown routes.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`PessoasError`] to a plain-text HTTP response with the matching status.
#[derive(Debug)]
pub struct ApiError(PessoasError);

impl From<PessoasError> for ApiError {
    fn from(err: PessoasError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = &self.0;
        let (status, message) = match err {
            PessoasError::Validation(ValidationError::InvalidId(_)) => {
                tracing::warn!(error = %describe(err), "rejected request");
                (StatusCode::BAD_REQUEST, "Erro: ID inválido")
            }
            PessoasError::Validation(_) => {
                tracing::warn!(error = %describe(err), "rejected request body");
                (StatusCode::BAD_REQUEST, "Erro: JSON inválido")
            }
            PessoasError::NotFound(inner) => {
                tracing::debug!(id = %inner.id, "record not found");
                (StatusCode::NOT_FOUND, "pessoa não encontrado")
            }
            PessoasError::Storage { operation, .. } => {
                tracing::error!(error = %describe(err), "storage error");
                let message = match operation {
                    StorageOperation::Read => "Erro ao ler os dados",
                    StorageOperation::Write => "Erro ao salvar os dados",
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            PessoasError::Processing(_) => {
                tracing::error!(error = %describe(err), "processing error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao processar os dados")
            }
        };

        (status, message).into_response()
    }
}

/// Render an error with its whole source chain, `outer: inner: root`.
fn describe(err: &PessoasError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// `404` answered with a JSON body when no handler matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteNotFound {
    /// The path names the resource but the method or id segment is not served.
    InvalidMethodOrRoute,
    /// The path does not name any resource.
    UnknownRoute,
}

impl IntoResponse for RouteNotFound {
    fn into_response(self) -> Response {
        let error = match self {
            Self::InvalidMethodOrRoute => "Método ou rota inválida",
            Self::UnknownRoute => "Rota não encontrada",
        };
        (StatusCode::NOT_FOUND, Json(ErrorBody { error })).into_response()
    }
}
