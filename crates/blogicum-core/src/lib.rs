//! # Blogicum Core
//!
//! The domain layer of Blogicum.
//! Records, the visibility and ownership rules, repository ports and the blog
//! services built on top of them. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod guard;
pub mod pagination;
pub mod ports;
pub mod services;
pub mod visibility;

pub use error::DomainError;
pub use services::{BlogService, Repositories};
