pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod report;
pub mod snippet;
pub mod store;

pub use error::{Error, Result};
pub use snippet::{PutOutcome, Snippet, Stored};
pub use store::Store;
