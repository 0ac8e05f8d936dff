//! Test harness: the real router over an in-memory gateway.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderValue, Method, Request, Response},
    Router,
};
use axum_extra::headers::{Authorization, Header};
use serde_json::Value;
use tower::ServiceExt;

use api_lib::{routes::create_router, security::TokenService, state::AppState};
use common::JwtConfig;
use domain::{Email, EncodingError, Identifier, PasswordEncoder, StoreError, User, UserGateway};
use user_service_lib::application::UseCases;

/// Reversible encoder so tests don't pay for Argon2.
pub struct PlainEncoder;

impl PasswordEncoder for PlainEncoder {
    fn encode(&self, raw: &str) -> Result<String, EncodingError> {
        Ok(format!("plain:{}", raw))
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        encoded == format!("plain:{}", raw)
    }

    fn is_encoded(&self, value: &str) -> bool {
        value.starts_with("plain:")
    }
}

#[derive(Default)]
pub struct InMemoryUserGateway {
    users: Mutex<HashMap<Identifier, User>>,
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|other| other.email() == user.email() && other.id() != user.id())
        {
            return Err(StoreError::new("duplicate key value violates unique constraint"));
        }
        users.insert(*user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &Identifier) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn delete_by_id(&self, id: &Identifier) -> Result<(), StoreError> {
        self.users.lock().unwrap().remove(id);
        Ok(())
    }
}

/// Gateway whose every call fails.
pub struct BrokenUserGateway;

#[async_trait]
impl UserGateway for BrokenUserGateway {
    async fn save(&self, _user: User) -> Result<User, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn find_by_id(&self, _id: &Identifier) -> Result<Option<User>, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn delete_by_id(&self, _id: &Identifier) -> Result<(), StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_gateway(Arc::new(InMemoryUserGateway::default()))
    }

    pub fn with_gateway(gateway: Arc<dyn UserGateway>) -> Self {
        let tokens = Arc::new(TokenService::new(&JwtConfig::default()));
        let use_cases = UseCases::new(gateway, Arc::new(PlainEncoder));
        let router = create_router(AppState::new(use_cases, tokens.clone()));
        Self { router, tokens }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Register a user and return its id.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .send(json_request(
                Method::POST,
                "/users/new",
                None,
                serde_json::json!({ "email": email, "password": password }),
            ))
            .await;
        assert_eq!(response.status(), 201);
        body_json(response).await["id"].as_str().unwrap().to_string()
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self.send(login_request(email, password)).await;
        assert_eq!(response.status(), 200);
        body_json(response).await["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

pub fn basic_auth(email: &str, password: &str) -> HeaderValue {
    let mut values = Vec::new();
    Authorization::basic(email, password).encode(&mut values);
    values.remove(0)
}

pub fn login_request(email: &str, password: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/users/login")
        .header(header::AUTHORIZATION, basic_auth(email, password))
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
