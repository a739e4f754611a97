//! REST client for the Shopify Admin API.
//!
//! [`RestClient`] wraps [`HttpClient`](crate::clients::HttpClient) with
//! versioned base paths and path normalization. Typed resource operations
//! are built on top of it in [`crate::rest`].

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
