//! Anagram search: an in-memory index of words grouped by anagram class.
//!
//! Two words belong to the same class when their lowercased characters,
//! sorted, are identical. The [`AnagramIndex`] holds the groups, the
//! [`SharedIndex`] makes one index safe to share between concurrent
//! request handlers, and the [`server`] module serves it over HTTP.

pub mod types;
pub mod anakey;
pub mod group;
pub mod index;
pub mod shared;
pub mod loader;
pub mod error;
pub mod config;
pub mod server;


pub use crate::types::*;
pub use crate::anakey::*;
pub use crate::group::*;
pub use crate::index::*;
pub use crate::shared::*;
pub use crate::loader::*;
pub use crate::error::{Error, Result};
pub use crate::config::Config;
