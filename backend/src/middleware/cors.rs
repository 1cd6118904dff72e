//! Permissive CORS middleware.
//!
//! Answers `OPTIONS` pre-flight requests with an empty 200 before routing and
//! stamps `Access-Control-Allow-*` headers on every response, including error
//! responses. Headers already present are left alone, so a narrower policy
//! wrapped around a single resource wins over the application-wide one.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderMap, HeaderName, HeaderValue,
};
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

/// Request headers browsers may send cross-origin.
pub const ALLOWED_HEADERS: &str =
    "Content-Type, Access-Control-Allow-Headers, Authorization, X-Requested-With";

#[derive(Debug)]
struct CorsPolicy {
    allow_methods: String,
}

impl CorsPolicy {
    fn stamp(&self, headers: &mut HeaderMap) {
        insert_if_absent(headers, ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        insert_if_absent(headers, ACCESS_CONTROL_ALLOW_METHODS, &self.allow_methods);
        insert_if_absent(headers, ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS);
    }
}

fn insert_if_absent(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if headers.contains_key(&name) {
        return;
    }
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(err) => error!(error = %err, header = %name, "failed to encode CORS header"),
    }
}

/// CORS middleware allowing any origin.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use actix_web::http::Method;
/// use service_intake::Cors;
///
/// let _app = App::new().wrap(Cors::permissive());
/// let _narrow = Cors::with_methods([Method::POST, Method::OPTIONS]);
/// ```
#[derive(Debug, Clone)]
pub struct Cors {
    policy: Rc<CorsPolicy>,
}

impl Cors {
    /// Allow the methods a browser form typically needs.
    pub fn permissive() -> Self {
        Self::with_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
    }

    /// Advertise exactly the given methods.
    pub fn with_methods(methods: impl IntoIterator<Item = Method>) -> Self {
        let allow_methods = methods
            .into_iter()
            .map(|method| method.as_str().to_owned())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            policy: Rc::new(CorsPolicy { allow_methods }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsMiddleware {
            service,
            policy: Rc::clone(&self.policy),
        }))
    }
}

/// Service wrapper produced by [`Cors`].
///
/// Applications should not use this type directly.
pub struct CorsMiddleware<S> {
    service: S,
    policy: Rc<CorsPolicy>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddleware<S>
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
        let policy = Rc::clone(&self.policy);

        if req.method() == Method::OPTIONS {
            let mut response = HttpResponse::Ok().finish();
            policy.stamp(response.headers_mut());
            let res = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            policy.stamp(res.headers_mut());
            Ok(res.map_into_left_body())
        })
    }
}
