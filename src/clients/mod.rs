//! HTTP and REST clients for the Shopify Admin API.
//!
//! - [`HttpClient`]: authenticated transport with retry handling
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: request description
//! - [`HttpResponse`]: parsed body plus rate limit and pagination headers
//! - [`RestClient`]: versioned REST paths on top of [`HttpClient`]

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
