use rocket::{
    http::{Method, Status},
    response::{self, Responder},
    route::{self, Handler},
    Data, Request, Response, Route,
};

use crate::database::RequestError;
use crate::request_id::RequestId;

/// Wraps any responder and marks the response as readable from every origin.
/// Every response the service shapes itself goes through here.
pub struct Cors<R>(pub R);

impl<'r, 'o: 'r, R: Responder<'r, 'o>> Responder<'r, 'o> for Cors<R> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'o> {
        Response::build_from(self.0.respond_to(request)?)
            .raw_header("Access-Control-Allow-Origin", "*")
            .ok()
    }
}

/// Answer to a cross-origin preflight check: empty body, permitted methods and headers,
/// cached by the browser for a day.
pub struct Preflight;

impl<'r> Responder<'r, 'static> for Preflight {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(Cors(Status::Ok).respond_to(request)?)
            .raw_header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .raw_header("Access-Control-Allow-Headers", "Content-Type")
            .raw_header("Access-Control-Max-Age", "86400")
            .ok()
    }
}

/// Answers every method the endpoint does not serve with a 405.
#[derive(Clone)]
pub struct MethodNotAllowed;

/// Methods routed to [`MethodNotAllowed`]. `HEAD` is listed so it is not served by the
/// `GET` route.
const REJECTED_METHODS: [Method; 6] = [
    Method::Put,
    Method::Delete,
    Method::Patch,
    Method::Head,
    Method::Trace,
    Method::Connect,
];

#[rocket::async_trait]
impl Handler for MethodNotAllowed {
    async fn handle<'r>(&self, request: &'r Request<'_>, _data: Data<'r>) -> route::Outcome<'r> {
        tracing::debug!(
            request_id = %RequestId::of(request),
            method = %request.method(),
            "unsupported method"
        );
        route::Outcome::from(request, RequestError::MethodNotAllowed)
    }
}

impl From<MethodNotAllowed> for Vec<Route> {
    fn from(handler: MethodNotAllowed) -> Self {
        REJECTED_METHODS
            .into_iter()
            .map(|method| Route::new(method, "/", handler.clone()))
            .collect()
    }
}
