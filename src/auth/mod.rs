//! Authentication state for Admin API requests.
//!
//! Only the [`Session`] lives here: the shop domain and access token a
//! client sends with every request.

pub mod session;

pub use session::Session;
