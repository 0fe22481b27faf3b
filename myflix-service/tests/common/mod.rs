use std::sync::Arc;

use auth::Authenticator;
use auth::AuthenticatorSettings;
use auth::Claims;
use auth::HashingCost;
use auth::JwtHandler;
use chrono::NaiveDate;
use myflix_service::domain::authentication::service::AuthService;
use myflix_service::domain::catalog::models::Director;
use myflix_service::domain::catalog::models::DirectorId;
use myflix_service::domain::catalog::models::Genre;
use myflix_service::domain::catalog::models::GenreId;
use myflix_service::domain::catalog::models::Movie;
use myflix_service::domain::catalog::models::MovieId;
use myflix_service::domain::catalog::service::CatalogService;
use myflix_service::domain::user::service::UserService;
use myflix_service::inbound::http::router::create_router;
use myflix_service::outbound::repositories::InMemoryCatalogRepository;
use myflix_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;
use uuid::Uuid;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const PASSWORD: &str = "Str0ng!Pass";

/// Test application that spawns a real server over in-memory repositories
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap hashing keeps the suite fast.
        let authenticator = Arc::new(
            Authenticator::new(AuthenticatorSettings {
                jwt_secret: JWT_SECRET.to_vec(),
                token_lifetime: chrono::Duration::hours(24),
                hashing_cost: HashingCost {
                    memory_cost: 1024,
                    time_cost: 1,
                    parallelism: 1,
                },
            })
            .expect("Failed to create authenticator"),
        );

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let catalog_repository = Arc::new(sample_catalog());

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&catalog_repository),
            Arc::clone(&authenticator),
        ));
        let catalog_service = Arc::new(CatalogService::new(catalog_repository));
        let auth_service = Arc::new(AuthService::new(user_repository, authenticator));

        let router = create_router(user_service, catalog_service, auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user with the shared test password and return the response body.
    pub async fn create_user(&self, username: &str) -> serde_json::Value {
        let response = self
            .post("/users/create")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": PASSWORD,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in with the shared test password and return the token.
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "username": username, "password": PASSWORD }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }

    /// Register then log in.
    pub async fn create_and_login(&self, username: &str) -> (String, String) {
        let body = self.create_user(username).await;
        let user_id = body["data"]["id"].as_str().unwrap().to_string();
        (user_id, self.login(username).await)
    }

    /// Sign a token with the server secret whose expiry is already in the past.
    pub fn expired_token(&self, user_id: &str, username: &str) -> String {
        let claims = Claims::for_user(user_id, username, chrono::Duration::minutes(-5));
        self.jwt_handler.encode(&claims).unwrap()
    }
}

fn sample_catalog() -> InMemoryCatalogRepository {
    let science_fiction = Genre {
        id: GenreId(Uuid::new_v4()),
        name: "Science Fiction".to_string(),
        description: "Speculative stories built on imagined science.".to_string(),
        audience: Some("Teens and adults".to_string()),
    };
    let thriller = Genre {
        id: GenreId(Uuid::new_v4()),
        name: "Thriller".to_string(),
        description: "Suspense-driven stories.".to_string(),
        audience: None,
    };
    let scott = Director {
        id: DirectorId(Uuid::new_v4()),
        name: "Ridley Scott".to_string(),
        bio: Some("English director.".to_string()),
        birth_year: NaiveDate::from_ymd_opt(1937, 11, 30),
        death_year: None,
    };
    let mann = Director {
        id: DirectorId(Uuid::new_v4()),
        name: "Michael Mann".to_string(),
        bio: None,
        birth_year: NaiveDate::from_ymd_opt(1943, 2, 5),
        death_year: None,
    };

    let movies = vec![
        Movie {
            id: MovieId::new(),
            name: "Alien".to_string(),
            description: "A deadly lifeform stalks a towing ship.".to_string(),
            genre: science_fiction.id,
            director: scott.id,
            year_released: NaiveDate::from_ymd_opt(1979, 5, 25),
            image_path: Some("images/alien.jpg".to_string()),
        },
        Movie {
            id: MovieId::new(),
            name: "Heat".to_string(),
            description: "A detective hunts a crew of thieves.".to_string(),
            genre: thriller.id,
            director: mann.id,
            year_released: NaiveDate::from_ymd_opt(1995, 12, 15),
            image_path: None,
        },
    ];

    InMemoryCatalogRepository::new(movies, vec![science_fiction, thriller], vec![scott, mann])
}
