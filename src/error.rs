//! Error Taxonomy for the Block Cipher Core
//!
//! Every public entry point in this crate validates its inputs before doing
//! any cryptographic work. All such validation failures are reported through
//! `CipherError`, a small, closed set of caller-detectable faults. There are
//! no panics on well-formed input and no partial output on a failing call:
//! a fallible function either returns `Ok` with the complete result or
//! `Err` with an unchanged caller state.
//!
//! # Note
//!
//! This replaces the "return a `Box<dyn Error>` built from a formatted
//! string" approach used elsewhere in ad hoc reference implementations with
//! a matchable enum, so a caller can distinguish "wrong key length" from
//! "misaligned input" from "bad CFB segment size" without parsing text.

use thiserror::Error;

/// Errors returned by the AES, DES and Triple-DES entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The supplied key does not match the length required by the cipher
    /// or, for AES, the selected [`AesVariant`](crate::aes::AesVariant).
    #[error("invalid key length: expected {expected}, got {got} bytes")]
    InvalidKeyLength { expected: &'static str, got: usize },

    /// The plaintext/ciphertext length is not a positive multiple of the
    /// block size, as required by ECB, CBC, OFB and CTR.
    #[error("input length {got} is not a positive multiple of the block size ({block_size})")]
    InvalidBlockAlignment { block_size: usize, got: usize },

    /// The CFB segment size is zero, exceeds the block size, is not a
    /// divisor of the block size for the sub-byte case, or the input
    /// bit-length is not a multiple of the segment size.
    #[error("invalid CFB segment: {reason}")]
    InvalidSegment { reason: &'static str },

    /// The IV or initial counter value is missing or is not exactly one
    /// block in length.
    #[error("invalid IV/counter length: expected {block_size} bytes, got {got}")]
    InvalidIv { block_size: usize, got: usize },
}
