// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! # cpstat Fetch
//!
//! HTTP plumbing shared by the platform adapters.
//!
//! - [`client::HttpClient`] - Bounded requests with a single deadline
//!   covering connect, send, and body read
//! - [`context::FetchContext`] - Shared client plus per-request settings
//! - [`adapter::PlatformAdapter`] - Trait every platform implements
//!
//! ## Example
//!
//! ```ignore
//! use cpstat_fetch::{FetchContext, PlatformAdapter};
//!
//! let ctx = FetchContext::from_options(&FetchOptions::default())?;
//! let result = adapter.fetch(&ctx, "tourist").await;
//! ```

pub mod adapter;
pub mod client;
pub mod context;
pub mod error;

// Re-export key types at crate root

pub use adapter::{PlatformAdapter, TransportKind};
pub use client::{FetchRequest, FetchResponse, HttpClient, USER_AGENT, status_error};
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use error::FetchError;
