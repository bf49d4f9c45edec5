// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # cpstat Core
//!
//! Core types and the error taxonomy shared by every cpstat crate.
//!
//! ## Key Types
//!
//! ### Requests
//! - [`Platform`] - The four supported judges
//! - [`UserHandles`] - Username per requested platform
//! - [`FetchOptions`] - Per-request timeout
//!
//! ### Results
//! - [`CodeforcesStats`], [`LeetCodeStats`], [`CodeChefStats`], [`GfgStats`]
//! - [`PlatformResult`] - Success record or platform-prefixed error message
//! - [`AllStats`] - Aggregated report
//! - [`RawPayload`] - Unnormalized upstream data
//!
//! ### Errors
//! - [`StatsError`] - Closed failure taxonomy
//! - [`PlatformError`] - A [`StatsError`] tagged with its platform

pub mod error;
pub mod models;

// Re-export error types
pub use error::{PlatformError, StatsError};

// Re-export all model types
pub use models::{
    // Requests
    DEFAULT_TIMEOUT_MS,
    FetchOptions,
    Platform,
    UserHandles,
    // Records
    CodeChefStats,
    CodeforcesStats,
    GfgStats,
    LeetCodeStats,
    SolvedBreakdown,
    UNRATED,
    // Results
    AllStats,
    PlatformResult,
    RawPayload,
};
