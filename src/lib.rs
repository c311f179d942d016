//! # soft-block
//!
//! A software implementation of the AES and DES block ciphers together
//! with the classical confidentiality modes of operation: ECB, CBC, CFB
//! (byte-aligned and sub-byte segment sizes), OFB and CTR. Three-key
//! Triple-DES (TDEA) is built on top of the DES primitive as an
//! Encrypt-Decrypt-Encrypt composition.
//!
//! This crate does not implement padding schemes, authenticated modes
//! (GCM, CCM), key agreement, or random IV/counter generation; callers are
//! expected to supply aligned input and their own IVs/counters and to
//! layer any padding scheme on top.
//!
//! # Organization
//!
//! - [`aes`]: AES-128/192/256 block primitive and mode-driven
//!   encrypt/decrypt entry points.
//! - [`des`]: single-key DES block primitive and mode-driven entry points.
//! - [`tdea`]: three-key Triple-DES (EDE) built from [`des`].
//! - [`modes`]: the shared, block-size-generic mode engine used by all
//!   three ciphers above.
//! - [`error`]: the [`error::CipherError`] taxonomy returned by every
//!   fallible entry point in this crate.

pub mod aes;
pub mod des;
pub mod error;
pub mod modes;
pub mod tdea;

pub use error::CipherError;
pub use modes::Mode;
