//! Bearer-token identity extraction.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError, dev::Payload, web};

use lokal_core::ports::{AuthError, Caller, IdentityProvider, TokenService};
use lokal_shared::ErrorResponse;

/// The authenticated account behind a request.
///
/// Extraction fails with 401 unless a valid bearer token is presented; use
/// [`OptionalIdentity`] on routes that serve anonymous callers too.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
}

fn authenticate(req: &HttpRequest) -> Result<Identity, AuthError> {
    let tokens = req
        .app_data::<web::Data<Arc<dyn TokenService>>>()
        .ok_or_else(|| {
            tracing::error!("TokenService missing from app data");
            AuthError::InvalidToken("server configuration error".to_owned())
        })?;

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;
    let token = header
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::InvalidToken("expected a Bearer token".to_owned()))?;

    let claims = tokens.validate_token(token)?;

    Ok(Identity {
        user_id: claims.user_id,
    })
}

/// Authentication failure surfaced as an RFC 7807 response.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AuthenticationError(#[from] AuthError);

impl ResponseError for AuthenticationError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AuthError::HashingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            AuthError::TokenExpired => ErrorResponse::new(401, "Token Expired")
                .with_detail("The token has expired; log in again for a fresh one."),
            AuthError::MissingAuth => ErrorResponse::new(401, "Authentication Required")
                .with_detail("Send a Bearer token in the Authorization header."),
            AuthError::InvalidToken(detail) => {
                ErrorResponse::new(401, "Invalid Token").with_detail(detail.clone())
            }
            AuthError::InvalidCredentials => ErrorResponse::unauthorized(),
            AuthError::HashingError(_) => ErrorResponse::internal_error(),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map_err(AuthenticationError::from))
    }
}

/// Identity extractor that never fails.
///
/// This is the bridge into the core's identity port: an absent or invalid
/// token resolves to an anonymous caller, and the services decide what
/// anonymity means for the operation at hand.
pub struct OptionalIdentity(pub Option<Identity>);

impl IdentityProvider for OptionalIdentity {
    fn resolve_caller(&self) -> Caller {
        match &self.0 {
            Some(identity) => Caller::User(identity.user_id),
            None => Caller::Anonymous,
        }
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(OptionalIdentity(authenticate(req).ok())))
    }
}
