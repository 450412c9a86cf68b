#![doc = include_str!("../README.md")]

mod error;
mod permuter;
mod set;
mod status;

pub use crate::error::*;
pub use crate::permuter::*;
pub use crate::set::*;
pub use crate::status::*;
