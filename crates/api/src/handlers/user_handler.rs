//! User handlers.
//!
//! `/users/new` and `/users/login` are public; every other route acts on the
//! token subject set by the auth middleware.

use axum::{
    extract::{Extension, State},
    http::{
        header::{AUTHORIZATION, LOCATION},
        StatusCode,
    },
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use common::{AppError, AppResult};
use domain::BEARER_TOKEN_PREFIX;
use user_service_lib::application::{
    AuthenticateUserInput, CreateUserInput, DeleteUserInput, FindUserInput, UpdateUserInput,
};

use crate::extractors::JsonBody;
use crate::middleware::Subject;
use crate::security::TokenResponse;
use crate::state::AppState;

/// Registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    #[schema(example = "secret123")]
    pub password: Option<String>,
}

/// Replacement email and password
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "new@example.com")]
    pub email: Option<String>,
    #[schema(example = "newsecret123")]
    pub password: Option<String>,
}

/// Id of a freshly registered user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

/// Public view of a user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Routes reachable without a token
pub fn public_user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/new", post(create_user))
        .route("/users/login", post(login))
}

/// Routes acting on the authenticated user
pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(get_current_user).put(update_user).delete(delete_user),
    )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/new",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = CreatedResponse,
            headers(("Location" = String, description = "URI of the new user"))),
        (status = 400, description = "Body is not a JSON object of the expected shape"),
        (status = 422, description = "Invalid payload or email already used")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let output = state
        .use_cases
        .create
        .execute(CreateUserInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let location = format!("/users/{}", output.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CreatedResponse { id: output.id }),
    ))
}

/// Exchange HTTP Basic credentials for a bearer token
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Authentication",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse,
            headers(("Authorization" = String, description = "Bearer token"))),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    credentials: Option<TypedHeader<Authorization<Basic>>>,
) -> AppResult<impl IntoResponse> {
    let TypedHeader(Authorization(basic)) = credentials.ok_or(AppError::Unauthorized)?;

    let output = state
        .use_cases
        .authenticate
        .execute(AuthenticateUserInput::new(basic.username(), basic.password()))
        .await?;

    let token = state.tokens.issue(&output.id).map_err(|e| {
        error!(error = %e, "token could not be issued");
        AppError::internal("token could not be issued")
    })?;
    info!(user_id = %output.id, "user logged in");

    let header = format!("{}{}", BEARER_TOKEN_PREFIX, token.access_token);
    Ok((StatusCode::OK, [(AUTHORIZATION, header)], Json(token)))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing, invalid or stale token")
    )
)]
pub async fn get_current_user(
    Extension(Subject(id)): Extension<Subject>,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let output = state
        .use_cases
        .find
        .execute(FindUserInput::new(id))
        .await
        .map_err(|e| AppError::from(e).stale_subject())?;

    Ok(Json(UserResponse {
        id: output.id,
        email: output.email,
    }))
}

/// Replace the authenticated user's email and password
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UpdateUserRequest,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Malformed token subject or JSON body"),
        (status = 401, description = "Missing, invalid or stale token"),
        (status = 422, description = "Invalid payload or email already used")
    )
)]
pub async fn update_user(
    Extension(Subject(id)): Extension<Subject>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> AppResult<StatusCode> {
    state
        .use_cases
        .update
        .execute(UpdateUserInput {
            id: Some(id),
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(|e| AppError::from(e).stale_subject())?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete the authenticated user
#[utoipa::path(
    delete,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing, invalid or stale token")
    )
)]
pub async fn delete_user(
    Extension(Subject(id)): Extension<Subject>,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state
        .use_cases
        .delete
        .execute(DeleteUserInput::new(id))
        .await
        .map_err(|e| AppError::from(e).stale_subject())?;

    Ok(StatusCode::NO_CONTENT)
}
