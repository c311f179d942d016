//! Test Suite for the AES Core Primitives
//!
//! Covers the GF(2^8) multiplication helper and the single-block
//! encrypt/decrypt entry points directly, against the FIPS-197 worked
//! examples.

use super::super::core::*;
use crate::error::CipherError;

#[test]
fn gf_multiplication_vectors() {
    assert_eq!(mul(0x57, 0x02), 0xAE);
    assert_eq!(mul(0x57, 0x04), 0x47);
    assert_eq!(mul(0x57, 0x08), 0x8E);
    assert_eq!(mul(0x57, 0x10), 0x07);
}

#[test]
fn fips197_aes128_single_block() {
    let plaintext: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let key: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let expected: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    let ciphertext = aes_enc_block(&plaintext, &key, AesVariant::Aes128).unwrap();
    assert_eq!(ciphertext, expected);
    let decrypted = aes_dec_block(&ciphertext, &key, AesVariant::Aes128).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn rejects_bad_key_length() {
    let block = [0u8; 16];
    let key = [0u8; 20];
    let err = aes_enc_block(&block, &key, AesVariant::Aes128).unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidKeyLength {
            expected: "16, 24 or 32",
            got: 20,
        }
    );
}

#[test]
fn schedule_reused_across_blocks_matches_one_shot() {
    let key: [u8; 32] = [0u8; 32];
    let schedule = AesKeySchedule::new(&key, AesVariant::Aes256).unwrap();
    let block_a = [0x11u8; 16];
    let block_b = [0x22u8; 16];
    let enc_a = schedule.encrypt_block(&block_a);
    let enc_b = schedule.encrypt_block(&block_b);
    assert_eq!(enc_a, aes_enc_block(&block_a, &key, AesVariant::Aes256).unwrap());
    assert_eq!(enc_b, aes_enc_block(&block_b, &key, AesVariant::Aes256).unwrap());
}
