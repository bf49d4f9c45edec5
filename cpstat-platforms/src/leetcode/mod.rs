//! LeetCode platform implementation.
//!
//! Two GraphQL queries: the public profile (existence, ranking, solved
//! counts) followed by the contest ranking.

mod descriptor;
mod error;
mod fetcher;
pub mod graphql;
pub(crate) mod parser;

pub use descriptor::leetcode_descriptor;
pub use error::LeetCodeError;
pub use fetcher::LeetCodeAdapter;
