use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub const MISSING_PARAMS_ERROR: &str = "Missing query or API key";
pub const UPSTREAM_FAILED_ERROR: &str = "Failed to fetch videos";

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// JSON error payload paired with the status it is sent with.
#[derive(Debug)]
pub struct ErrorResponse {
    pub status: Status,
    pub body: ErrorBody,
}

impl ErrorResponse {
    pub fn missing_params() -> Self {
        Self::new(Status::BadRequest, MISSING_PARAMS_ERROR)
    }

    pub fn upstream_failed() -> Self {
        Self::new(Status::InternalServerError, UPSTREAM_FAILED_ERROR)
    }

    fn new(status: Status, error: &str) -> Self {
        ErrorResponse {
            status,
            body: ErrorBody {
                error: error.to_string(),
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}
