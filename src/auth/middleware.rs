use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use sqlx::PgPool;
use std::rc::Rc;

use crate::auth::extractors::CurrentUser;
use crate::auth::token::verify_token;
use crate::config::Config;
use crate::error::AppError;
use crate::store;

/// Per-request access control guard.
///
/// Resolves the bearer token into an authenticated identity: the token is
/// verified against the server secret, then the subject is looked up in the
/// user table so that a valid token for a since-deleted account is rejected.
/// On success the identity is attached to request extensions for the
/// `CurrentUser`/`AdminUser` extractors.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Skip authentication for the public auth endpoints
        let path = req.path();
        if path.starts_with("/api/auth/login") || path.starts_with("/api/auth/register") {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let config = req
                .app_data::<web::Data<Config>>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalServerError("Server configuration missing".into())
                })?;
            let pool = req.app_data::<web::Data<PgPool>>().cloned().ok_or_else(|| {
                AppError::InternalServerError("Database pool missing".into())
            })?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| AppError::Unauthenticated("Missing token".into()))?;

            let claims = verify_token(token, config.jwt_secret.as_bytes())?;

            // A valid token whose subject no longer exists must not authenticate.
            let user = store::users::find_by_username(pool.get_ref(), &claims.sub)
                .await?
                .ok_or_else(|| {
                    AppError::Unauthenticated("Could not validate credentials".into())
                })?;

            req.extensions_mut().insert(CurrentUser {
                id: user.id,
                username: user.username,
                roles: claims.roles,
            });

            service.call(req).await
        })
    }
}
