use rocket::{
    http::Status,
    response::{self, Responder},
    serde::{json::Json, Serialize},
    Request,
};

use crate::request_id::RequestId;
use crate::response::Cors;

#[derive(Debug)]
pub enum RequestError {
    DatabaseNotConfigured,
    MethodNotAllowed,
    PayloadTooLarge,
    Database(sqlx::Error),
}

impl RequestError {
    pub fn status(&self) -> Status {
        match self {
            Self::DatabaseNotConfigured | Self::Database(_) => Status::InternalServerError,
            Self::MethodNotAllowed => Status::MethodNotAllowed,
            Self::PayloadTooLarge => Status::PayloadTooLarge,
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(error) => Some(error),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseNotConfigured => write!(f, "Database not configured"),
            Self::MethodNotAllowed => write!(f, "Method not allowed"),
            Self::PayloadTooLarge => write!(f, "Payload too large"),
            Self::Database(error) => write!(f, "database request failed: {}", error),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(error: sqlx::Error) -> Self {
        Self::Database(error)
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorBody {
    error: String,
}

/// Configuration, method and body size errors become structured JSON bodies. Store failures are only
/// logged and handed to rocket's default 500 catcher.
impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let request_id = RequestId::of(request);
        match self {
            Self::Database(error) => {
                tracing::error!(%request_id, %error, "database request failed");
                Err(Status::InternalServerError)
            }
            error => {
                tracing::warn!(%request_id, %error, "request rejected");
                let body = ErrorBody {
                    error: error.to_string(),
                };
                Cors((error.status(), Json(body))).respond_to(request)
            }
        }
    }
}

pub type RequestResult<T, E = RequestError> = std::result::Result<T, E>;
