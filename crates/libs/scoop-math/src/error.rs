//! Error taxonomy for the fixed-dimension containers.

/// Errors raised by checked construction, indexing and shape conversion.
///
/// Every error is raised at the point of violation and signals a contract
/// violation on the caller's side; the library never recovers, retries or
/// substitutes a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A supplied flat sequence does not have the expected fixed length.
    #[error("sequence length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// The fixed number of elements of the target container.
        expected: usize,
        /// The length of the supplied sequence.
        actual: usize,
    },

    /// A checked index accessor was called with an index at or beyond the
    /// fixed bound.
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The number of elements of the container.
        len: usize,
    },

    /// A shape-dependent conversion was invoked on an incompatible shape.
    #[error("invalid shape {rows}x{cols}: expected {expected}")]
    InvalidShape {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
        /// Description of the shape the operation requires.
        expected: &'static str,
    },
}
