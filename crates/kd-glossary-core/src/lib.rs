//! DOM-free behaviour of the glossary frontend.
//!
//! Every module here is a small state machine or renderer that the wasm
//! crate drives from browser events. Keeping them free of `web-sys` lets the
//! rules be unit tested natively.

pub mod accordion;
pub mod config;
pub mod error;
pub mod keys;
pub mod modal;
pub mod pager;
pub mod render;
pub mod search;
pub mod session;

pub use error::{ConfigError, SearchError};
