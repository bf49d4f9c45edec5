//! GeeksforGeeks platform implementation.
//!
//! Stats are pulled with regexes from the user data blob embedded in the
//! `/profile/<name>` page. Per-difficulty counts are not rendered server
//! side and are reported as zero.

mod descriptor;
mod error;
mod fetcher;
pub(crate) mod parser;

pub use descriptor::gfg_descriptor;
pub use error::GfgError;
pub use fetcher::{GFG_BASE, GfgAdapter};
