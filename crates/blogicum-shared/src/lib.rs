//! # Blogicum Shared
//!
//! Wire types shared by the server and its clients: form payloads, response
//! bodies and RFC 7807 errors.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, Paginated};
