#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
//! Test support for fieldview.
//!
//! - [`ResponseFixture`]: raw records in the upstream wire shape
//! - [`TreeHarness`]: selector queries and assertions over render trees

pub mod fixture;
mod harness;
mod selector;

pub use fixture::{registration, ResponseFixture};
pub use harness::TreeHarness;
pub use selector::{Selector, SelectorError};
