use std::convert::Infallible;

use rocket::{
    request::{FromRequest, Outcome},
    Request,
};

use super::*;

impl RequestId {
    /// Returns the id of `request`, resolving it on first use and caching it for the
    /// rest of the request so every log line and responder agrees on it.
    pub fn of<'r>(request: &'r Request<'_>) -> &'r RequestId {
        request.local_cache(|| {
            request
                .headers()
                .get_one(REQUEST_ID_HEADER)
                .and_then(RequestId::from_header)
                .unwrap_or_else(RequestId::generate)
        })
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestId {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(RequestId::of(request).clone())
    }
}
