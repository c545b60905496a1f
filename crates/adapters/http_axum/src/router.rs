//! Axum router assembly.

use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use pessoas_app::ports::PersonRepository;

use crate::error::RouteNotFound;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the `/pessoas` routes and answers anything else with a JSON `404`.
/// Includes a [`TraceLayer`] that logs each request's method and path at
/// `INFO` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: PersonRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

async fn route_not_found() -> RouteNotFound {
    RouteNotFound::UnknownRoute
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use pessoas_app::services::person_service::PersonService;
    use pessoas_domain::error::PessoasError;
    use pessoas_domain::id::PersonId;
    use pessoas_domain::person::Person;
    use tower::ServiceExt;

    /// Answers every call from fixed data. `broken` fails every read,
    /// `read_only` fails every rewrite.
    #[derive(Default)]
    struct StubPersonRepo {
        broken: bool,
        read_only: bool,
    }

    impl StubPersonRepo {
        fn check(&self) -> Result<(), PessoasError> {
            if self.broken {
                return Err(PessoasError::storage_read(std::io::Error::other(
                    "disk gone",
                )));
            }
            Ok(())
        }

        fn check_write(&self) -> Result<(), PessoasError> {
            self.check()?;
            if self.read_only {
                return Err(PessoasError::storage_write(std::io::Error::other(
                    "read-only file system",
                )));
            }
            Ok(())
        }
    }

    impl PersonRepository for StubPersonRepo {
        async fn read_raw(&self) -> Result<Vec<u8>, PessoasError> {
            self.check()?;
            Ok(br#"[{"id":1,"nome":"Natan"}]"#.to_vec())
        }

        async fn create(&self, person: Person) -> Result<Person, PessoasError> {
            self.check_write()?;
            let mut people = pessoas_domain::collection::Collection::default();
            Ok(people.insert(person))
        }

        async fn update(
            &self,
            id: PersonId,
            patch: Person,
        ) -> Result<Option<Person>, PessoasError> {
            self.check_write()?;
            if id != PersonId::new(1) {
                return Ok(None);
            }
            let mut people =
                pessoas_domain::collection::Collection::parse(r#"[{"id":1,"nome":"Natan"}]"#)
                    .map_err(PessoasError::processing)?;
            Ok(people.update(id, patch))
        }

        async fn delete(&self, _id: PersonId) -> Result<usize, PessoasError> {
            self.check_write()?;
            Ok(0)
        }
    }

    fn app(repo: StubPersonRepo) -> Router {
        build(AppState::new(PersonService::new(repo)))
    }

    async fn send(
        repo: StubPersonRepo,
        method: Method,
        uri: &str,
        body: &str,
    ) -> (StatusCode, String, String) {
        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_forward_store_contents_on_list() {
        let (status, content_type, body) =
            send(StubPersonRepo::default(), Method::GET, "/pessoas", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, r#"[{"id":1,"nome":"Natan"}]"#);
    }

    #[tokio::test]
    async fn should_return_500_when_store_unreadable() {
        let (status, content_type, body) = send(
            StubPersonRepo {
                broken: true,
                ..Default::default()
            },
            Method::GET,
            "/pessoas",
            "",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "Erro ao ler os dados");
    }

    #[tokio::test]
    async fn should_return_201_with_assigned_id_on_create() {
        let (status, _, body) = send(
            StubPersonRepo::default(),
            Method::POST,
            "/pessoas",
            r#"{"nome":"Ana"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, r#"{"nome":"Ana","id":1}"#);
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_body() {
        let (status, _, body) = send(
            StubPersonRepo::default(),
            Method::POST,
            "/pessoas",
            "{not json",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Erro: JSON inválido");
    }

    #[tokio::test]
    async fn should_prefer_400_over_500_when_body_and_store_are_bad() {
        let (status, _, _) = send(
            StubPersonRepo {
                broken: true,
                ..Default::default()
            },
            Method::PUT,
            "/pessoas/1",
            "{not json",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_merged_record_on_update() {
        let (status, _, body) = send(
            StubPersonRepo::default(),
            Method::PUT,
            "/pessoas/1",
            r#"{"nome":"Natan Jr"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":1,"nome":"Natan Jr"}"#);
    }

    #[tokio::test]
    async fn should_return_404_text_when_updating_missing_record() {
        let (status, content_type, body) = send(
            StubPersonRepo::default(),
            Method::PUT,
            "/pessoas/9",
            r#"{"nome":"X"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "pessoa não encontrado");
    }

    #[tokio::test]
    async fn should_confirm_delete_in_plain_text() {
        let (status, content_type, body) =
            send(StubPersonRepo::default(), Method::DELETE, "/pessoas/5", "").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "pessoa deletado com sucesso");
    }

    #[tokio::test]
    async fn should_return_400_when_deleting_id_zero() {
        let (status, _, body) =
            send(StubPersonRepo::default(), Method::DELETE, "/pessoas/0", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Erro: ID inválido");
    }

    #[tokio::test]
    async fn should_return_json_404_for_non_numeric_id() {
        for method in [Method::PUT, Method::DELETE] {
            let (status, content_type, body) = send(
                StubPersonRepo::default(),
                method,
                "/pessoas/abc",
                r#"{"nome":"X"}"#,
            )
            .await;

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(content_type, "application/json");
            assert_eq!(body, r#"{"error":"Método ou rota inválida"}"#);
        }
    }

    #[tokio::test]
    async fn should_return_json_404_for_unserved_method() {
        let (status, _, body) =
            send(StubPersonRepo::default(), Method::PATCH, "/pessoas", "").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"Método ou rota inválida"}"#);

        let (status, _, body) =
            send(StubPersonRepo::default(), Method::PUT, "/pessoas/", "{}").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"Método ou rota inválida"}"#);
    }

    #[tokio::test]
    async fn should_list_whatever_follows_the_collection_path() {
        for uri in ["/pessoas/", "/pessoas/1", "/pessoas/abc"] {
            let (status, content_type, body) =
                send(StubPersonRepo::default(), Method::GET, uri, "").await;

            assert_eq!(status, StatusCode::OK, "GET {uri}");
            assert_eq!(content_type, "application/json");
            assert_eq!(body, r#"[{"id":1,"nome":"Natan"}]"#);
        }
    }

    #[tokio::test]
    async fn should_create_whatever_follows_the_collection_path() {
        for uri in ["/pessoas/", "/pessoas/9"] {
            let (status, _, body) = send(
                StubPersonRepo::default(),
                Method::POST,
                uri,
                r#"{"nome":"Ana"}"#,
            )
            .await;

            assert_eq!(status, StatusCode::CREATED, "POST {uri}");
            assert_eq!(body, r#"{"nome":"Ana","id":1}"#);
        }
    }

    #[tokio::test]
    async fn should_accept_bodies_larger_than_two_mebibytes() {
        let body = format!(r#"{{"nome":"{}"}}"#, "a".repeat(3 * 1024 * 1024));

        let (status, _, _) =
            send(StubPersonRepo::default(), Method::POST, "/pessoas", &body).await;

        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_return_500_text_when_store_rewrite_fails() {
        for (method, uri, body) in [
            (Method::POST, "/pessoas", r#"{"nome":"Ana"}"#),
            (Method::PUT, "/pessoas/1", r#"{"nome":"X"}"#),
            (Method::DELETE, "/pessoas/1", ""),
        ] {
            let repo = StubPersonRepo {
                read_only: true,
                ..Default::default()
            };
            let (status, content_type, text) = send(repo, method, uri, body).await;

            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(content_type.starts_with("text/plain"));
            assert_eq!(text, "Erro ao salvar os dados");
        }
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_negative_id() {
        let (status, _, body) =
            send(StubPersonRepo::default(), Method::DELETE, "/pessoas/-3", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pessoa deletado com sucesso");
    }

    #[tokio::test]
    async fn should_return_json_404_for_unknown_path() {
        let (status, content_type, body) =
            send(StubPersonRepo::default(), Method::GET, "/usuarios", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        assert_eq!(body, r#"{"error":"Rota não encontrada"}"#);
    }
}
