//! Error types for the blockcipher library.

use thiserror::Error;

/// Errors produced by the blockcipher library.
///
/// Only construction can fail: `encrypt` and `decrypt` are total over any
/// string input, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockCipherError {
    /// Grid dimensions are non-positive. Both rows and columns must be at
    /// least 1.
    #[error("Invalid grid dimensions {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimension {
        /// The requested number of rows.
        rows: i32,
        /// The requested number of columns.
        cols: i32,
    },
}
