use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::catalog::get_director;
use super::handlers::catalog::get_genre;
use super::handlers::catalog::get_movie;
use super::handlers::catalog::list_directors;
use super::handlers::catalog::list_genres;
use super::handlers::catalog::list_movies;
use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::favorites::add_favorite_movie;
use super::handlers::favorites::remove_favorite_movie;
use super::handlers::get_user::get_user;
use super::handlers::get_user::list_users;
use super::handlers::login::login;
use super::handlers::update_user::update_user;
use super::handlers::welcome;
use super::middleware::authenticate as auth_middleware;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub catalog_service: Arc<dyn CatalogServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    catalog_service: Arc<dyn CatalogServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        catalog_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/login", post(login))
        .route("/users/create", post(create_user));

    let protected_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/:name", get(get_movie))
        .route("/genres", get(list_genres))
        .route("/genres/:name", get(get_genre))
        .route("/directors", get(list_directors))
        .route("/directors/:name", get(get_director))
        .route("/users", get(list_users))
        .route("/users/:username", get(get_user).delete(delete_user))
        .route("/users/update/:username", put(update_user))
        .route(
            "/users/:username/movies/:movie_name",
            post(add_favorite_movie).delete(remove_favorite_movie),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use auth::Authenticator;
    use auth::AuthenticatorSettings;
    use auth::HashingCost;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::authentication::service::AuthService;
    use crate::domain::catalog::service::CatalogService;
    use crate::domain::user::service::UserService;
    use crate::outbound::repositories::InMemoryCatalogRepository;
    use crate::outbound::repositories::InMemoryUserRepository;

    fn router() -> Router {
        let authenticator = Arc::new(
            Authenticator::new(AuthenticatorSettings {
                jwt_secret: b"router-test-secret-at-least-32-bytes-long".to_vec(),
                token_lifetime: chrono::Duration::hours(1),
                hashing_cost: HashingCost {
                    memory_cost: 1024,
                    time_cost: 1,
                    parallelism: 1,
                },
            })
            .unwrap(),
        );
        let users = Arc::new(InMemoryUserRepository::new());
        let catalog = Arc::new(InMemoryCatalogRepository::default());

        create_router(
            Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&catalog),
                Arc::clone(&authenticator),
            )),
            Arc::new(CatalogService::new(catalog)),
            Arc::new(AuthService::new(users, authenticator)),
        )
    }

    #[tokio::test]
    async fn test_welcome_is_public() {
        let response = router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer() {
        for uri in ["/movies", "/genres", "/directors", "/users", "/users/alice123"] {
            let response = router()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthorized() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/movies")
                    .header("Authorization", "Bearer not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
