// catalog_server/src/web/middleware/auth.rs

//! Bearer-token gate for write requests.
//!
//! GET requests pass through untouched. Everything else needs
//! `Authorization: Bearer <token>` matching the configured secret.

use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, Method};
use actix_web::{Error, ResponseError};
use constant_time_eq::constant_time_eq;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

use crate::errors::{AppError, MSG_AUTH_REQUIRED, MSG_INVALID_TOKEN};

/// Middleware factory. With no token configured every guarded request is refused.
#[derive(Clone)]
pub struct BearerAuth {
  token: Option<Arc<SecretString>>,
}

impl BearerAuth {
  pub fn new(token: Option<Arc<SecretString>>) -> Self {
    Self { token }
  }

  /// Decides whether `req` may reach the handlers.
  fn check(&self, req: &ServiceRequest) -> Result<(), AppError> {
    if req.method() == Method::GET {
      return Ok(());
    }

    let presented = req
      .headers()
      .get(header::AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.strip_prefix("Bearer "))
      .map(|rest| rest.split(' ').next().unwrap_or_default())
      .ok_or_else(|| AppError::Unauthorized(MSG_AUTH_REQUIRED.to_string()))?;

    match &self.token {
      Some(expected) if constant_time_eq(expected.expose_secret().as_bytes(), presented.as_bytes()) => Ok(()),
      _ => Err(AppError::Forbidden(MSG_INVALID_TOKEN.to_string())),
    }
  }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type InitError = ();
  type Transform = BearerAuthMiddleware<S>;
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(BearerAuthMiddleware {
      service,
      auth: self.clone(),
    }))
  }
}

/// Service wrapper produced by [`BearerAuth`].
pub struct BearerAuthMiddleware<S> {
  service: S,
  auth: BearerAuth,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
    self.service.poll_ready(cx)
  }

  fn call(&self, req: ServiceRequest) -> Self::Future {
    if let Err(rejection) = self.auth.check(&req) {
      warn!(method = %req.method(), path = %req.path(), reason = %rejection, "Request rejected by auth.");
      let response = rejection.error_response();
      let res = req.into_response(response).map_into_right_body();
      return Box::pin(async move { Ok(res) });
    }

    let fut = self.service.call(req);
    Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
  }
}
