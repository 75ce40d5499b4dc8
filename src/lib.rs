//! passgen - memorable password suggestions
//!
//! Passwords are built from randomly chosen three letter English words, with
//! optional space removal and random upper-casing.

pub mod cli;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod pool;
pub mod random;
pub mod types;

// Re-export commonly used types
pub use error::{PassgenError, Result};
pub use types::{GenerationRequest, OutputMode, Suggestion};

// Re-export main functionality
pub use generator::{build_password, mix_case, strip_separators, PasswordGenerator};
pub use pool::WordPool;
pub use random::{RandomSource, SeededSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
