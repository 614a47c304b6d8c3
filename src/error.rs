//! # Error Types
//!
//! The parse/render pipeline itself never fails: malformed tokens degrade
//! to literal plain beats and missing metadata fields are simply omitted
//! from the output. Errors only arise at the persistence boundary, when
//! decoding a saved chart record or talking to the chart store.
//!
//! ## Usage
//! ```rust
//! use nashville::{ChartError, ChartRecord};
//!
//! match ChartRecord::decode("not a record") {
//!     Ok(record) => println!("loaded {}", record.id),
//!     Err(ChartError::RecordError(msg)) => eprintln!("bad record: {}", msg),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A persisted chart record could not be decoded.
    ///
    /// Occurs when the `---` metadata fence is missing or the `key: value`
    /// block inside it does not deserialize.
    #[error("Invalid chart record: {0}")]
    RecordError(String),

    /// The store has no chart with the requested id.
    #[error("No chart with id '{0}'")]
    NotFound(String),

    /// Underlying filesystem failure in the chart store.
    #[error("Chart store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
