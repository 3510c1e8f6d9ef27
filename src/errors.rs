// errors.rs
use std::fmt;

/// Errors originating from the server logic (routing, validation, auth)
/// or downstream collaborators (session DB, listings backend).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Unauthorized(String),
    /// A required listing field was blank; carries the field name.
    Validation(String),
    /// The listings backend could not be reached or answered non-OK.
    Fetch(String),
    DbError(String),
    Internal,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            ServerError::Validation(field) => write!(f, "Missing required field: {field}"),
            ServerError::Fetch(msg) => write!(f, "Backend request failed: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::Internal => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
