use serde::{Deserialize, Serialize};

/// JWT claims embedded in every issued token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the authenticated user's ID.
    pub sub: i64,
    /// Expiry as a unix timestamp (seconds).
    pub exp: usize,
    /// Platform-wide admin flag.
    pub admin: bool,
}

/// Authenticated user wrapper, extracted from the `Authorization` header and
/// inserted into request extensions by the guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
