//! Codeforces platform implementation.
//!
//! Codeforces exposes a public JSON API. Stats come from three calls:
//! `user.info` first, then `user.status` and `user.rating` concurrently.

pub mod api;
mod descriptor;
mod error;
mod fetcher;
pub(crate) mod parser;

pub use descriptor::codeforces_descriptor;
pub use error::CodeforcesError;
pub use fetcher::CodeforcesAdapter;
