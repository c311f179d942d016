//! AES Modes of Operation
//!
//! Thin wrappers that bind an [`AesKeySchedule`] into the generic mode
//! engine in [`crate::modes`]. The chaining, XOR and counter arithmetic
//! live in one place for every cipher in this crate; this module only
//! supplies the AES block primitive and the AES-specific parameter
//! validation (key length via [`AesVariant`], IV/counter length fixed at
//! [`AES_BLOCK_SIZE`]).

use crate::aes::core::{AesKeySchedule, AesVariant, AES_BLOCK_SIZE};
use crate::error::CipherError;
use crate::modes::{self, Mode};

fn iv_block(iv: &[u8]) -> Result<[u8; AES_BLOCK_SIZE], CipherError> {
    if iv.len() != AES_BLOCK_SIZE {
        return Err(CipherError::InvalidIv {
            block_size: AES_BLOCK_SIZE,
            got: iv.len(),
        });
    }
    let mut block = [0u8; AES_BLOCK_SIZE];
    block.copy_from_slice(iv);
    Ok(block)
}

/// Encrypt `plaintext` with AES under `mode`.
///
/// `iv` is the initialization vector (ECB ignores it and may be empty) or
/// the initial counter value for CTR. For `Mode::Cfb { segment_bits: None }`
/// the full 128-bit block is used as the segment.
///
/// # Errors
///
/// - [`CipherError::InvalidKeyLength`] if `key.len() != variant.key_len()`.
/// - [`CipherError::InvalidIv`] if a mode that needs an IV/counter is given
///   one that is not exactly 16 bytes.
/// - [`CipherError::InvalidBlockAlignment`] if a byte-aligned mode receives
///   an input that is not a positive multiple of 16 bytes.
/// - [`CipherError::InvalidSegment`] if `Mode::Cfb`'s segment size is invalid
///   for the block size, or does not divide the input's bit-length.
pub fn aes_encrypt(
    variant: AesVariant,
    key: &[u8],
    plaintext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let schedule = AesKeySchedule::new(key, variant)?;
    let encrypt_block = |block: &[u8; AES_BLOCK_SIZE]| schedule.encrypt_block(block);

    match mode {
        Mode::Ecb => modes::ecb_encrypt(plaintext, encrypt_block),
        Mode::Cbc => modes::cbc_encrypt(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Ofb => modes::ofb_apply(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Ctr => modes::ctr_apply(plaintext, &iv_block(iv)?, encrypt_block),
        Mode::Cfb { segment_bits } => modes::cfb_encrypt(
            plaintext,
            &iv_block(iv)?,
            segment_bits.unwrap_or(8 * AES_BLOCK_SIZE),
            encrypt_block,
        ),
    }
}

/// Decrypt `ciphertext` with AES under `mode`. See [`aes_encrypt`] for the
/// meaning of `iv` and the error conditions; note that CFB, OFB and CTR
/// decrypt by re-running the forward block cipher on the feedback/counter
/// value, never the inverse cipher.
pub fn aes_decrypt(
    variant: AesVariant,
    key: &[u8],
    ciphertext: &[u8],
    mode: Mode,
    iv: &[u8],
) -> Result<Vec<u8>, CipherError> {
    let schedule = AesKeySchedule::new(key, variant)?;
    let encrypt_block = |block: &[u8; AES_BLOCK_SIZE]| schedule.encrypt_block(block);
    let decrypt_block = |block: &[u8; AES_BLOCK_SIZE]| schedule.decrypt_block(block);

    match mode {
        Mode::Ecb => modes::ecb_decrypt(ciphertext, decrypt_block),
        Mode::Cbc => modes::cbc_decrypt(ciphertext, &iv_block(iv)?, decrypt_block),
        Mode::Ofb => modes::ofb_apply(ciphertext, &iv_block(iv)?, encrypt_block),
        Mode::Ctr => modes::ctr_apply(ciphertext, &iv_block(iv)?, encrypt_block),
        Mode::Cfb { segment_bits } => modes::cfb_decrypt(
            ciphertext,
            &iv_block(iv)?,
            segment_bits.unwrap_or(8 * AES_BLOCK_SIZE),
            encrypt_block,
        ),
    }
}
