//! Search for ordered triples of distinct positions whose first value is even
//! and whose values add up to a target sum.

pub mod combinations;
pub mod error;
pub mod instance;
pub mod report;

pub use combinations::{combinations, matches, Combination, Match};
pub use error::{Error, Result};
pub use instance::Instance;
pub use report::{write_json, write_text, Solution};
