//! DES Modes of Operation
//!
//! Binds a [`DesKeySchedule`] into the generic mode engine in
//! [`crate::modes`]. DES always drives CFB with the full 64-bit block as
//! the segment: the sub-byte CFB path (1/2/4-bit segments) is only
//! meaningful where it originates, AES's bit-oriented feedback register,
//! and has no DES counterpart in the reference this crate follows.

use crate::des::core::{DesKeySchedule, DES_BLOCK_SIZE};
use crate::error::CipherError;
use crate::modes::{self, Mode};

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
                reason: "DES CFB only supports the full 64-bit block segment",
            });
        }
    }
    Ok(())
}

/// Encrypt `plaintext` with single-key DES under `mode`.
///
/// # Errors
///
/// See [`crate::aes::aes_encrypt`] for the shared error conditions; DES
/// additionally rejects a [`Mode::Cfb`] segment size other than the full
/// 64-bit block with [`CipherError::InvalidSegment`].
pub fn des_encrypt(
    key: &[u8],
    plaintext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    require_full_segment(mode)?;
    let schedule = DesKeySchedule::new(key)?;
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

/// Decrypt `ciphertext` with single-key DES under `mode`.
pub fn des_decrypt(
    key: &[u8],
    ciphertext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    require_full_segment(mode)?;
    let schedule = DesKeySchedule::new(key)?;
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
