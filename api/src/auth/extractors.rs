use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{DecodingKey, Validation, decode};
use util::config::AppConfig;

use crate::auth::claims::{AuthUser, Claims};
use crate::auth::guards::Empty;
use crate::response::ApiResponse;

/// Extracts and validates the bearer token on a request, yielding the decoded
/// claims as an `AuthUser`.
///
/// Rejections are `401` envelopes: a missing/malformed `Authorization` header
/// and an invalid or expired token are reported separately.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<Empty>>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| unauthorized("Missing or invalid Authorization header"))?;

        let jwt_secret = AppConfig::global().jwt_secret.clone();
        let token_data = decode::<Claims>(
            bearer.token(),
            &DecodingKey::from_secret(jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser(token_data.claims))
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<ApiResponse<Empty>>) {
    (StatusCode::UNAUTHORIZED, Json(ApiResponse::error(message)))
}
