//! HTTP entry points for the permutation service.
//!
//! ## Structure
//!
//! - [`handler`] - router construction and request handlers ([`handler::PermService`]).

pub mod handler;
