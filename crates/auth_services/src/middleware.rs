use actix_web::{
    Error, HttpMessage, HttpResponse, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use futures_util::future::LocalBoxFuture;
use sqlx::PgPool;
use std::{
    future::{Ready, ready},
    rc::Rc,
};

use super::jwt::JwtService;
use super::service::AuthService;
use super::types::{Claims, ORGANIZER_ROLE};

/// Pulls the session token out of the Authorization header, falling back to
/// the http-only cookie set by the token endpoint. The header wins when both
/// are present.
fn extract_token(req: &ServiceRequest) -> Option<String> {
    let header_token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(|t| t.to_string());

    header_token.or_else(|| req.cookie("token").map(|c| c.value().to_string()))
}

fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

fn missing_token_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "missing_token",
        "message": "Authorization token is required"
    }))
}

fn invalid_token_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "invalid_token",
        "message": "Invalid or expired token"
    }))
}

/// Middleware for handling authentication by verifying session tokens
/// and extracting the caller's identity from the request.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            jwt_service: JwtService::new(),
        }))
    }
}

/// Service that implements the authentication middleware logic
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    jwt_service: JwtService,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let jwt_service = self.jwt_service.clone();

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    let response = missing_token_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let claims = match jwt_service.verify_token(&token) {
                Ok(claims) => claims,
                Err(_) => {
                    let response = invalid_token_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            // Make the verified identity available to handlers
            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Middleware for organizer-only routes. Verifies the session token, then
/// loads the caller's account and requires the organizer role. Self-contained
/// so that route scopes wrap a single guard.
pub struct OrganizerGuard;

impl<S, B> Transform<S, ServiceRequest> for OrganizerGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = OrganizerGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OrganizerGuardService {
            service: Rc::new(service),
            jwt_service: JwtService::new(),
        }))
    }
}

/// Service that implements the organizer guard logic
pub struct OrganizerGuardService<S> {
    service: Rc<S>,
    jwt_service: JwtService,
}

impl<S, B> Service<ServiceRequest> for OrganizerGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let jwt_service = self.jwt_service.clone();

        Box::pin(async move {
            let token = match extract_token(&req) {
                Some(token) => token,
                None => {
                    let response = missing_token_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let claims = match jwt_service.verify_token(&token) {
                Ok(claims) => claims,
                Err(_) => {
                    let response = invalid_token_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let pool = match req.app_data::<web::Data<PgPool>>() {
                Some(pool) => pool.get_ref().clone(),
                None => {
                    log::error!("OrganizerGuard mounted without a database pool");
                    let response = HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": "internal_error",
                        "message": "An internal error occurred"
                    }));
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let auth_service = AuthService::new(pool);
            let is_organizer = match auth_service.get_user_by_email(&claims.email).await {
                Ok(Some(user)) => user.role == ORGANIZER_ROLE,
                Ok(None) => false,
                Err(e) => {
                    log::error!("Failed to load user for organizer check: {}", e);
                    false
                }
            };

            if !is_organizer {
                let response = HttpResponse::Forbidden().json(serde_json::json!({
                    "error": "forbidden",
                    "message": "Organizer access required"
                }));
                return Ok(req.into_response(response).map_into_right_body());
            }

            req.extensions_mut().insert(claims);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Custom extractor for the authenticated caller's verified claims
pub struct AuthenticatedUser(pub Claims);

impl actix_web::FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let claims = req.extensions().get::<Claims>().cloned();

        ready(match claims {
            Some(claims) => Ok(AuthenticatedUser(claims)),
            None => Err(actix_web::error::ErrorUnauthorized(
                "User not authenticated",
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer abc.def.ghi"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token(""), None);
    }
}
