//! Triple-DES Modes of Operation
//!
//! Binds a [`TdeaKeySchedule`] into the generic mode engine in
//! [`crate::modes`], the same way [`crate::des::des_encrypt`] binds a
//! single DES schedule. As with DES, CFB always uses the full 64-bit
//! block as its segment.

use crate::des::DES_BLOCK_SIZE;
use crate::error::CipherError;
use crate::modes::{self, Mode};
use crate::tdea::core::TdeaKeySchedule;

fn iv_block(iv: &[u8]) -> Result<[u8; DES_BLOCK_SIZE], CipherError> {
    if iv.len() != DES_BLOCK_SIZE {
        return Err(CipherError::InvalidIv {
            block_size: DES_BLOCK_SIZE,
            got: iv.len(),
        });
    }
    let mut block = [0u8; DES_BLOCK_SIZE];
    block.copy_from_slice(iv);
    Ok(block)
}

fn require_full_segment(mode: Mode) -> Result<(), CipherError> {
    if let Mode::Cfb { segment_bits: Some(bits) } = mode {
        if bits != 8 * DES_BLOCK_SIZE {
            return Err(CipherError::InvalidSegment {
                reason: "TDEA CFB only supports the full 64-bit block segment",
            });
        }
    }
    Ok(())
}

/// Encrypt `plaintext` with three-key TDEA under `mode`.
///
/// # Errors
///
/// See [`crate::des::des_encrypt`] for the shared error conditions, applied
/// per-key to `key1`, `key2` and `key3`.
pub fn tdea_encrypt(
    key1: &[u8],
    key2: &[u8],
    key3: &[u8],
    plaintext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    require_full_segment(mode)?;
    let schedule = TdeaKeySchedule::new(key1, key2, key3)?;
    let encrypt_block = |block: &[u8; DES_BLOCK_SIZE]| schedule.encrypt_block(block);

    match mode {
        Mode::Ecb => modes::ecb_encrypt(plaintext, encrypt_block),
        Mode::Cbc => modes::cbc_encrypt(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Ofb => modes::ofb_apply(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Ctr => modes::ctr_apply(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Cfb { .. } => {
            modes::cfb_encrypt(plaintext, &iv_block(iv)?, 8 * DES_BLOCK_SIZE, encrypt_block)
        }
    }
}

/// Decrypt `ciphertext` with three-key TDEA under `mode`.
pub fn tdea_decrypt(
    key1: &[u8],
    key2: &[u8],
    key3: &[u8],
    ciphertext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    require_full_segment(mode)?;
    let schedule = TdeaKeySchedule::new(key1, key2, key3)?;
    let encrypt_block = |block: &[u8; DES_BLOCK_SIZE]| schedule.encrypt_block(block);
    let decrypt_block = |block: &[u8; DES_BLOCK_SIZE]| schedule.decrypt_block(block);

    match mode {
        Mode::Ecb => modes::ecb_decrypt(ciphertext, decrypt_block),
        Mode::Cbc => modes::cbc_decrypt(ciphertext, &iv_block(iv)?, decrypt_block),
        Mode::Ofb => modes::ofb_apply(ciphertext, &iv_block(iv)?, encrypt_block),
        Mode::Ctr => modes::ctr_apply(ciphertext, &iv_block(iv)?, encrypt_block),
        Mode::Cfb { .. } => {
            modes::cfb_decrypt(ciphertext, &iv_block(iv)?, 8 * DES_BLOCK_SIZE, encrypt_block)
        }
    }
}
