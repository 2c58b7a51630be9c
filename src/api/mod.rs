//! Attendee Endpoint Bindings
//!
//! Async wrappers around the `/api/users` collection endpoint.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Attendee;

pub use http::HttpUsersApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures reported by the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
    /// Response body could not be parsed
    #[error("malformed response: {0}")]
    Decode(String),
    /// Response arrived with a non-ok status
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// The remote attendee collection.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait UsersApi {
    /// Fetch the whole collection in server order.
    ///
    /// The status is not checked: any body that decodes as a list is accepted,
    /// anything else is a `Decode` error.
    async fn list(&self) -> ApiResult<Vec<Attendee>>;

    async fn create(&self, name: &str) -> ApiResult<()>;

    async fn update(&self, id: &str, name: &str) -> ApiResult<()>;

    /// Non-ok statuses come back as `Rejected` with an empty message; the body is not read
    async fn delete(&self, id: &str) -> ApiResult<()>;
}
