//! Triple-DES (TDEA) Core Implementation
//!
//! Three-key Encrypt-Decrypt-Encrypt (EDE) composition of single-key DES,
//! as specified in SP-800-67. Encryption is `E_k3(D_k2(E_k1(block)))`;
//! decryption is `D_k1(E_k2(D_k3(block)))`. When `k1 == k2 == k3` this
//! degenerates to single-key DES, and when only `k1 == k3` (two-key TDEA)
//! it still composes correctly, but this crate always takes three
//! independent key arguments rather than accepting a single 16- or 24-byte
//! buffer and inferring the keying option from its length.

use crate::des::{DesKeySchedule, DES_KEY_SIZE};
use crate::error::CipherError;

pub const TDEA_BLOCK_SIZE: usize = 8;

/// The three independent DES key schedules behind a three-key TDEA
/// instance.
#[derive(Clone)]
pub struct TdeaKeySchedule {
    k1: DesKeySchedule,
    k2: DesKeySchedule,
    k3: DesKeySchedule,
}

impl TdeaKeySchedule {
    /// Build a TDEA schedule from three independent 8-byte DES keys.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] if any key is not exactly
    /// 8 bytes.
    pub fn new(key1: &[u8], key2: &[u8], key3: &[u8]) -> Result<Self, CipherError> {
        for key in [key1, key2, key3] {
            if key.len() != DES_KEY_SIZE {
                return Err(CipherError::InvalidKeyLength {
                    expected: "8",
                    got: key.len(),
                });
            }
        }
        Ok(TdeaKeySchedule {
            k1: DesKeySchedule::new(key1)?,
            k2: DesKeySchedule::new(key2)?,
            k3: DesKeySchedule::new(key3)?,
        })
    }

    /// Encrypt a single 8-byte block: `E_k3(D_k2(E_k1(block)))`.
    pub fn encrypt_block(&self, block: &[u8; TDEA_BLOCK_SIZE]) -> [u8; TDEA_BLOCK_SIZE] {
        let stage1 = self.k1.encrypt_block(block);
        let stage2 = self.k2.decrypt_block(&stage1);
        self.k3.encrypt_block(&stage2)
    }

    /// Decrypt a single 8-byte block: `D_k1(E_k2(D_k3(block)))`.
    pub fn decrypt_block(&self, block: &[u8; TDEA_BLOCK_SIZE]) -> [u8; TDEA_BLOCK_SIZE] {
        let stage1 = self.k3.decrypt_block(block);
        let stage2 = self.k2.encrypt_block(&stage1);
        self.k1.decrypt_block(&stage2)
    }
}

/// Encrypt a single block using three-key TDEA.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if any key is not 8 bytes.
pub fn tdea_enc_block(
    block: &[u8; TDEA_BLOCK_SIZE],
    key1: &[u8],
    key2: &[u8],
    key3: &[u8],
) -> Result<[u8; TDEA_BLOCK_SIZE], CipherError> {
    Ok(TdeaKeySchedule::new(key1, key2, key3)?.encrypt_block(block))
}

/// Decrypt a single block using three-key TDEA.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyLength`] if any key is not 8 bytes.
pub fn tdea_dec_block(
    block: &[u8; TDEA_BLOCK_SIZE],
    key1: &[u8],
    key2: &[u8],
    key3: &[u8],
) -> Result<[u8; TDEA_BLOCK_SIZE], CipherError> {
    Ok(TdeaKeySchedule::new(key1, key2, key3)?.decrypt_block(block))
}
