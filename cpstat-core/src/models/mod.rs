//! Domain models for cpstat.
//!
//! ## Submodules
//!
//! - [`platform`] - Platform enum and requested handles
//! - [`options`] - Fetch options (timeout)
//! - [`stats`] - Normalized statistics records
//! - [`result`] - Per-platform outcomes and the aggregated report

mod options;
mod platform;
mod result;
mod stats;

// Re-export everything at the models level
pub use options::{DEFAULT_TIMEOUT_MS, FetchOptions};
pub use platform::{Platform, UserHandles};
pub use result::{AllStats, PlatformResult, RawPayload};
pub use stats::{
    CodeChefStats, CodeforcesStats, GfgStats, LeetCodeStats, SolvedBreakdown, UNRATED,
};
#[cfg(test)]
mod serde_tests;
