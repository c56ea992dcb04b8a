/*
 * Responsibility
 * - POST /auth/login, POST /auth/sign-up
 * - On success: set the `token` cookie and return the session summary
 * - Wrong username and wrong password are indistinguishable (401, no cookie)
 */
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};

use crate::{
    api::v1::{
        dto::auth::{LoginRequest, SessionResponse, SignUpRequest},
        extractors::JsonBody,
    },
    error::AppError,
    middleware::auth::cookie,
    repos::user_repo::UserFields,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Response, AppError> {
    let mut conn = state.store.acquire().await?;
    let Some(user) = conn.get_user_by_name(&req.username).await? else {
        tracing::info!(username = %req.username, "login for unknown user");
        return Err(AppError::Unauthorized);
    };

    if !state
        .passwords
        .check_blocking(req.password, user.password)
        .await
    {
        tracing::info!(username = %req.username, "login with wrong password");
        return Err(AppError::Unauthorized);
    }

    session(&state, StatusCode::OK, user.name)
}

pub async fn sign_up(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SignUpRequest>,
) -> Result<Response, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let password_hash = state.passwords.hash_blocking(req.password).await?;

    let mut conn = state.store.acquire().await?;
    let user = conn
        .create_user(&UserFields {
            name: req.username,
            password_hash,
            email: req.email,
            is_admin: false,
        })
        .await?;

    tracing::info!(user_id = user.id, "user signed up");
    session(&state, StatusCode::CREATED, user.name)
}

fn session(state: &AppState, status: StatusCode, username: String) -> Result<Response, AppError> {
    let issued = state.tokens.issue_now(&username)?;
    let set_cookie = cookie::session(&issued.token, issued.expires_at, state.cookie_secure)
        .map_err(|e| {
            tracing::error!(error = %e, "token is not a valid cookie value");
            AppError::Internal
        })?;

    Ok((
        status,
        [(SET_COOKIE, set_cookie)],
        Json(SessionResponse {
            username,
            expires_at: issued.expires_at,
        }),
    )
        .into_response())
}
