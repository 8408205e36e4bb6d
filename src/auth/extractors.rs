use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The authenticated identity resolved by `AuthMiddleware`.
///
/// The middleware verifies the bearer token, confirms the subject still exists
/// in the user table, and inserts this value into request extensions. Handlers
/// receive it through the extractors below.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    /// Role claims carried by the verified token.
    pub roles: Vec<String>,
}

impl CurrentUser {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl FromRequest for CurrentUser {
    type Error = ActixError; // AppError will be converted into ActixError via ResponseError
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>().cloned() {
            Some(user) => ready(Ok(user)),
            None => {
                // Only reachable when a handler is mounted outside AuthMiddleware.
                let err = AppError::Unauthenticated(
                    "Authenticated user not found in request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}

/// Extractor that additionally requires the `admin` role claim.
///
/// A valid identity without the claim is rejected with `Forbidden` (403),
/// distinct from the 401 issued for missing or invalid tokens.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<CurrentUser>().cloned() {
            Some(user) if user.has_role("admin") => ready(Ok(AdminUser(user))),
            Some(_) => {
                let err = AppError::Forbidden("Admin role required".to_string());
                ready(Err(err.into()))
            }
            None => {
                let err = AppError::Unauthenticated(
                    "Authenticated user not found in request. Ensure AuthMiddleware is active."
                        .to_string(),
                );
                ready(Err(err.into()))
            }
        }
    }
}
