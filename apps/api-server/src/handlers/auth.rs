//! Registration, login, and account lookup.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use lokal_core::domain::User;
use lokal_core::ports::{PasswordService, TokenService};
use lokal_shared::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn issue_token(tokens: &dyn TokenService, account: &User) -> AppResult<AuthResponse> {
    let access_token = tokens
        .generate_token(account.id, &account.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_owned(),
        expires_in: tokens.expiration_seconds() as u64,
    })
}

/// POST /api/auth/register - create an account and sign it in.
pub async fn register(
    state: web::Data<AppState>,
    tokens: web::Data<Arc<dyn TokenService>>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("invalid email address".to_owned()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "password must be at least 8 characters".to_owned(),
        ));
    }
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("email already registered".to_owned()));
    }

    let password_hash = passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let account = state
        .users
        .insert(User::new(req.email, password_hash))
        .await?;

    let response = issue_token(tokens.get_ref().as_ref(), &account)?;
    Ok(HttpResponse::Created().json(response))
}

/// POST /api/auth/login - exchange credentials for a bearer token.
pub async fn login(
    state: web::Data<AppState>,
    tokens: web::Data<Arc<dyn TokenService>>,
    passwords: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // A missing account and a wrong password answer identically.
    let account = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let matches = passwords
        .verify(&req.password, &account.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !matches {
        return Err(AppError::Unauthorized);
    }

    let response = issue_token(tokens.get_ref().as_ref(), &account)?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/auth/me - the account behind the presented token.
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let account = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("account not found".to_owned()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}
