//! Generic Modes of Operation
//!
//! This module provides the ECB, CBC, CFB, OFB and CTR drivers described in
//! SP-800-38A, implemented once over any block primitive rather than once
//! per cipher. A block primitive is any `FnMut(&[u8; N]) -> [u8; N]`; the
//! AES and DES/TDEA wrapper modules each pass in a closure bound to their
//! own (already-expanded) round-key schedule.
//!
//! `N` is the block size in bytes: 16 for AES, 8 for DES and Triple-DES.
//! Keeping it a const generic rather than a runtime field means a block
//! mismatch is caught by the type system at the call site, not by a runtime
//! length check deep inside the driver.
//!
//! # Note
//!
//! This core does not pad. Byte-aligned modes (ECB, CBC, OFB, CTR) require
//! the input to be a positive multiple of the block size; callers who need
//! padding (e.g. PKCS#7) must apply it themselves before calling in, and
//! strip it themselves after calling out.

use crate::error::CipherError;

/// One mode of operation and its mode-specific parameter.
///
/// `Cfb`'s `segment_bits` must divide `8 * N` for AES's sub-byte case, or be
/// a multiple of 8 not exceeding `8 * N` for the byte-aligned case. `None`
/// defaults to the full block size (the common, byte-aligned CFB-N case).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
    Cfb { segment_bits: Option<usize> },
    Ofb,
    Ctr,
}

fn validate_block_aligned(block_size: usize, got: usize) -> Result<(), CipherError> {
    if got == 0 || got % block_size != 0 {
        return Err(CipherError::InvalidBlockAlignment {
            block_size,
            got,
        });
    }
    Ok(())
}

fn xor_into<const N: usize>(dst: &mut [u8; N], src: &[u8; N]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}

fn block_from_slice<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut block = [0u8; N];
    block.copy_from_slice(chunk);
    block
}

/// ECB encrypt: `C_i = E_K(P_i)`.
pub(crate) fn ecb_encrypt<const N: usize>(
    plaintext: &[u8],
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, plaintext.len())?;
    let mut out = Vec::with_capacity(plaintext.len());
    for chunk in plaintext.chunks(N) {
        out.extend_from_slice(&encrypt_block(&block_from_slice(chunk)));
    }
    Ok(out)
}

/// ECB decrypt: `P_i = D_K(C_i)`.
pub(crate) fn ecb_decrypt<const N: usize>(
    ciphertext: &[u8],
    mut decrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, ciphertext.len())?;
    let mut out = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks(N) {
        out.extend_from_slice(&decrypt_block(&block_from_slice(chunk)));
    }
    Ok(out)
}

/// CBC encrypt: `C_i = E_K(P_i xor C_{i-1})`, `C_{-1} := IV`.
pub(crate) fn cbc_encrypt<const N: usize>(
    plaintext: &[u8],
    iv: &[u8; N],
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, plaintext.len())?;
    let mut out = Vec::with_capacity(plaintext.len());
    let mut previous = *iv;
    for chunk in plaintext.chunks(N) {
        let mut block = block_from_slice::<N>(chunk);
        xor_into(&mut block, &previous);
        previous = encrypt_block(&block);
        out.extend_from_slice(&previous);
    }
    Ok(out)
}

/// CBC decrypt: `P_i = D_K(C_i) xor C_{i-1}`, `C_{-1} := IV`.
///
/// The previous ciphertext block is copied out of the input before the
/// corresponding output block is written, so this is safe even if a caller
/// later wants to decrypt in place (unlike a naive port of the reference
/// that reads `in[i - block_size]` after that slot may already have been
/// overwritten with plaintext).
pub(crate) fn cbc_decrypt<const N: usize>(
    ciphertext: &[u8],
    iv: &[u8; N],
    mut decrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, ciphertext.len())?;
    let mut out = Vec::with_capacity(ciphertext.len());
    let mut previous = *iv;
    for chunk in ciphertext.chunks(N) {
        let current = block_from_slice::<N>(chunk);
        let mut block = decrypt_block(&current);
        xor_into(&mut block, &previous);
        out.extend_from_slice(&block);
        previous = current;
    }
    Ok(out)
}

/// OFB keystream application: `O_i = E_K(O_{i-1})`, `O_{-1} := IV`;
/// `C_i = P_i xor O_i`. Identical for encryption and decryption.
pub(crate) fn ofb_apply<const N: usize>(
    input: &[u8],
    iv: &[u8; N],
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut feedback = *iv;
    for chunk in input.chunks(N) {
        feedback = encrypt_block(&feedback);
        let mut block = block_from_slice::<N>(chunk);
        xor_into(&mut block, &feedback);
        out.extend_from_slice(&block);
    }
    Ok(out)
}

/// Increment a block-sized counter as one big-endian unsigned integer,
/// wrapping modulo 2^(8N). Carry propagates through the full block instead
/// of stopping after the low byte, so counters that roll over past
/// `0xFF` (and the all-`0xFF` counter, which wraps to all-zero) still
/// advance correctly without a separate overflow case to get wrong.
pub(crate) fn increment_counter<const N: usize>(counter: &mut [u8; N]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// CTR keystream application: `C_i = P_i xor E_K(CTR_i)`, `CTR_i = ICV + i`.
/// Identical for encryption and decryption.
pub(crate) fn ctr_apply<const N: usize>(
    input: &[u8],
    icv: &[u8; N],
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_block_aligned(N, input.len())?;
    let mut out = Vec::with_capacity(input.len());
    let mut counter = *icv;
    for (i, chunk) in input.chunks(N).enumerate() {
        if i != 0 {
            increment_counter(&mut counter);
        }
        let mut block = block_from_slice::<N>(chunk);
        xor_into(&mut block, &encrypt_block(&counter));
        out.extend_from_slice(&block);
    }
    Ok(out)
}

fn validate_segment(segment_bits: usize, block_bits: usize) -> Result<(), CipherError> {
    if segment_bits == 0 || segment_bits > block_bits {
        return Err(CipherError::InvalidSegment {
            reason: "segment size must be within 1..=block_bits",
        });
    }
    if segment_bits % 8 == 0 {
        return Ok(());
    }
    if block_bits % 8 == 0 && [1usize, 2, 4].contains(&segment_bits) {
        return Ok(());
    }
    Err(CipherError::InvalidSegment {
        reason: "sub-byte segment size must be 1, 2 or 4 bits",
    })
}

/// Shift a block left by `bits` (`bits` < 8) and OR the low `bits` bits of
/// the last byte in with `feedback_bits` (itself already right-aligned).
fn shl_bits_with_feedback<const N: usize>(block: &mut [u8; N], bits: usize, feedback_bits: u8) {
    let mut shifted = [0u8; N];
    for i in 0..N {
        shifted[i] = block[i] << bits;
        if i + 1 < N {
            shifted[i] |= block[i + 1] >> (8 - bits);
        }
    }
    let mask = (1u8 << bits) - 1;
    shifted[N - 1] = (shifted[N - 1] & !mask) | (feedback_bits & mask);
    *block = shifted;
}

/// CFB, byte-aligned segment (`segment_bits % 8 == 0`): `b = segment_bits / 8`.
fn cfb_byte_aligned<const N: usize>(
    data: &[u8],
    iv: &[u8; N],
    b: usize,
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
    decrypting: bool,
) -> Vec<u8> {
    let mut x = *iv;
    let mut out = Vec::with_capacity(data.len());
    for chunk in data.chunks(b) {
        let t = encrypt_block(&x);
        let mut segment = vec![0u8; b];
        for i in 0..b {
            segment[i] = chunk[i] ^ t[i];
        }
        // The register is always fed with the ciphertext segment: that is
        // `segment` on encrypt (just produced) and `chunk` on decrypt (the
        // ciphertext the caller gave us).
        let feedback: &[u8] = if decrypting { chunk } else { &segment };
        if b == N {
            x.copy_from_slice(feedback);
        } else {
            x.copy_within(b.., 0);
            x[N - b..].copy_from_slice(feedback);
        }
        out.extend_from_slice(&segment);
    }
    out
}

/// CFB, sub-byte segment (`segment_bits` in `{1, 2, 4}`). Output and input
/// are packed MSB-first in groups of `segment_bits`; a byte is emitted once
/// `8 / segment_bits` segments have been accumulated. Every segment XORs
/// against the block-cipher output, including the first, regardless of
/// encrypt/decrypt direction.
fn cfb_sub_byte<const N: usize>(
    data: &[u8],
    iv: &[u8; N],
    s: usize,
    mut encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
    decrypting: bool,
) -> Vec<u8> {
    let mask = (1u8 << s) - 1;
    let mut x = *iv;
    let mut out = Vec::with_capacity(data.len());
    for &input_byte in data {
        let mut out_byte = 0u8;
        let mut bits_filled = 0usize;
        while bits_filled < 8 {
            let keystream = encrypt_block(&x)[0] >> (8 - s);
            let input_bits = (input_byte >> (8 - s - bits_filled)) & mask;
            let output_bits = (input_bits ^ keystream) & mask;
            out_byte = (out_byte << s) | output_bits;
            bits_filled += s;

            let feedback_bits = if decrypting { input_bits } else { output_bits };
            shl_bits_with_feedback(&mut x, s, feedback_bits);
        }
        out.push(out_byte);
    }
    out
}

/// CFB encrypt, dispatching on byte-aligned vs. sub-byte segment size.
pub(crate) fn cfb_encrypt<const N: usize>(
    plaintext: &[u8],
    iv: &[u8; N],
    segment_bits: usize,
    encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_segment(segment_bits, 8 * N)?;
    if (plaintext.len() * 8) % segment_bits != 0 {
        return Err(CipherError::InvalidSegment {
            reason: "input bit-length is not a multiple of the segment size",
        });
    }
    Ok(if segment_bits % 8 == 0 {
        cfb_byte_aligned(plaintext, iv, segment_bits / 8, encrypt_block, false)
    } else {
        cfb_sub_byte(plaintext, iv, segment_bits, encrypt_block, false)
    })
}

/// CFB decrypt, dispatching on byte-aligned vs. sub-byte segment size.
pub(crate) fn cfb_decrypt<const N: usize>(
    ciphertext: &[u8],
    iv: &[u8; N],
    segment_bits: usize,
    encrypt_block: impl FnMut(&[u8; N]) -> [u8; N],
) -> Result<Vec<u8>, CipherError> {
    validate_segment(segment_bits, 8 * N)?;
    if (ciphertext.len() * 8) % segment_bits != 0 {
        return Err(CipherError::InvalidSegment {
            reason: "input bit-length is not a multiple of the segment size",
        });
    }
    Ok(if segment_bits % 8 == 0 {
        cfb_byte_aligned(ciphertext, iv, segment_bits / 8, encrypt_block, true)
    } else {
        cfb_sub_byte(ciphertext, iv, segment_bits, encrypt_block, true)
    })
}
