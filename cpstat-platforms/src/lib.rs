// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # cpstat Platforms
//!
//! Platform adapters and the multi-platform aggregator.
//!
//! Each platform module includes:
//!
//! - **Descriptor**: Static configuration (aliases, URLs, transport)
//! - **Fetcher**: The [`PlatformAdapter`](cpstat_fetch::PlatformAdapter) implementation
//! - **Parser**: Normalization of the upstream payload
//!
//! ## Supported Platforms
//!
//! | Platform | Transport | Endpoint |
//! |----------|-----------|----------|
//! | Codeforces | JSON API | `codeforces.com/api` |
//! | LeetCode | GraphQL | `leetcode.com/graphql/` |
//! | CodeChef | HTML | `codechef.com/users/<name>` |
//! | GeeksforGeeks | HTML | `geeksforgeeks.org/profile/<name>` |
//!
//! ## Usage
//!
//! ```ignore
//! use cpstat_core::{FetchOptions, Platform, UserHandles};
//! use cpstat_platforms::get_all_stats;
//!
//! let handles = UserHandles::new()
//!     .with(Platform::Codeforces, "tourist")
//!     .with(Platform::LeetCode, "neal_wu");
//! let stats = get_all_stats(&handles, &FetchOptions::default()).await?;
//! ```

pub mod aggregator;
pub mod avatar;
pub mod descriptor;
pub mod page;
pub mod registry;

// Platform modules
pub mod codechef;
pub mod codeforces;
pub mod gfg;
pub mod leetcode;

// Parser edge case tests
mod parser_edge_tests;

// Re-export key types
pub use aggregator::{StatsAggregator, get_all_stats};
pub use descriptor::{PlatformDescriptor, RawFetchFn, RawFuture};
pub use registry::PlatformRegistry;

pub use codechef::{CodeChefAdapter, CodeChefError, codechef_descriptor};
pub use codeforces::{CodeforcesAdapter, CodeforcesError, codeforces_descriptor};
pub use gfg::{GfgAdapter, GfgError, gfg_descriptor};
pub use leetcode::{LeetCodeAdapter, LeetCodeError, leetcode_descriptor};
