//! CodeChef platform implementation.
//!
//! CodeChef has no public stats API; everything is scraped from the
//! server-rendered `/users/<name>` page.

mod descriptor;
mod error;
mod fetcher;
pub(crate) mod parser;

pub use descriptor::codechef_descriptor;
pub use error::CodeChefError;
pub use fetcher::{CODECHEF_BASE, CodeChefAdapter};
