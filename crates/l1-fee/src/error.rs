//! Errors of the L1 fee oracle.

/// Error returned when L1 fee parameters cannot be extracted from L1 attributes calldata.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum L1FeeError {
    /// The calldata is too short to carry a function selector.
    #[error("L1 attributes calldata too short for a selector: {0} bytes")]
    MissingSelector(usize),
    /// The function selector is not a known L1 attributes selector.
    #[error("unknown L1 attributes selector: 0x{:02x}{:02x}{:02x}{:02x}", .0[0], .0[1], .0[2], .0[3])]
    UnknownSelector([u8; 4]),
    /// The calldata length does not match the layout of its selector.
    #[error("invalid {kind} L1 attributes length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The layout that was being decoded.
        kind: &'static str,
        /// The required length.
        expected: usize,
        /// The length of the calldata.
        actual: usize,
    },
}
