//! Test Suite for the AES Modes of Operation
//!
//! Exercises `aes_encrypt`/`aes_decrypt` against the FIPS-197/SP-800-38A
//! worked examples, across ECB, CBC, CFB (full-block, byte and sub-byte
//! segments), OFB and CTR.

use super::super::core::AesVariant;
use super::super::modes::{aes_decrypt, aes_encrypt};
use crate::error::CipherError;
use crate::modes::Mode;

// FIPS-197 / SP-800-38A AES-128 ECB single block, key = 000102...0f.
#[test]
fn ecb_single_block_round_trip() {
    let key: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    let ciphertext = aes_encrypt(AesVariant::Aes128, &key, &plaintext, Mode::Ecb, &[]).unwrap();
    let decrypted = aes_decrypt(AesVariant::Aes128, &key, &ciphertext, Mode::Ecb, &[]).unwrap();
    assert_eq!(decrypted, plaintext);
}

// SP-800-38A F.2.1 AES-128 CBC, 4 blocks.
#[test]
fn cbc_nist_vector() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef\
         f69f2445df4f9b17ad2b417be66c3710",
    )
    .unwrap();
    let expected = hex::decode(
        "7649abac8119b246cee98e9b12e9197d\
         5086cb9b507219ee95db113a917678b2\
         73bed6b8e3c1743b7116e69e22229516\
         3ff1caa1681fac09120eca307586e1a7",
    )
    .unwrap();
    let ciphertext = aes_encrypt(AesVariant::Aes128, &key, &plaintext, Mode::Cbc, &iv).unwrap();
    assert_eq!(ciphertext, expected);
    let decrypted = aes_decrypt(AesVariant::Aes128, &key, &ciphertext, Mode::Cbc, &iv).unwrap();
    assert_eq!(decrypted, plaintext);
}

// SP-800-38A F.3.7 CFB1 vector: input bits 0x6B, 0xC1 must yield 0x68,
// 0xB3 bit-exact, not just round-trip.
#[test]
fn cfb1_matches_exact_vector() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext = [0x6bu8, 0xc1];
    let ciphertext = aes_encrypt(
        AesVariant::Aes128,
        &key,
        &plaintext,
        Mode::Cfb { segment_bits: Some(1) },
        &iv,
    )
    .unwrap();
    assert_eq!(ciphertext, [0x68, 0xb3]);
    let decrypted = aes_decrypt(
        AesVariant::Aes128,
        &key,
        &ciphertext,
        Mode::Cfb { segment_bits: Some(1) },
        &iv,
    )
    .unwrap();
    assert_eq!(decrypted, plaintext);
}

// SP-800-38A F.3.1 AES-128 CFB128 (full-block segment), first block.
#[test]
fn cfb128_matches_nist_vector() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51",
    )
    .unwrap();
    let expected_first_block = hex::decode("3b3fd92eb72dad20333449f8e83cfb4a").unwrap();
    let ciphertext = aes_encrypt(
        AesVariant::Aes128,
        &key,
        &plaintext,
        Mode::Cfb { segment_bits: Some(128) },
        &iv,
    )
    .unwrap();
    assert_eq!(&ciphertext[0..16], expected_first_block.as_slice());
    let decrypted = aes_decrypt(
        AesVariant::Aes128,
        &key,
        &ciphertext,
        Mode::Cfb { segment_bits: Some(128) },
        &iv,
    )
    .unwrap();
    assert_eq!(decrypted, plaintext);
}

// CFB8 (byte-aligned sub-full-block segment), round trip over several
// blocks worth of input.
#[test]
fn cfb8_round_trip_multi_block() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext: Vec<u8> = (0u8..40).collect();
    let ciphertext = aes_encrypt(
        AesVariant::Aes128,
        &key,
        &plaintext,
        Mode::Cfb { segment_bits: Some(8) },
        &iv,
    )
    .unwrap();
    assert_ne!(ciphertext, plaintext);
    let decrypted = aes_decrypt(
        AesVariant::Aes128,
        &key,
        &ciphertext,
        Mode::Cfb { segment_bits: Some(8) },
        &iv,
    )
    .unwrap();
    assert_eq!(decrypted, plaintext);
}

// OFB round trip over multiple blocks (not covered by the NIST CBC/CTR
// vectors above).
#[test]
fn ofb_round_trip_multi_block() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef\
         f69f2445df4f9b17ad2b417be66c3710",
    )
    .unwrap();
    let expected_first_block = hex::decode("3b3fd92eb72dad20333449f8e83cfb4a").unwrap();
    let ciphertext = aes_encrypt(AesVariant::Aes128, &key, &plaintext, Mode::Ofb, &iv).unwrap();
    assert_eq!(&ciphertext[0..16], expected_first_block.as_slice());
    let decrypted = aes_decrypt(AesVariant::Aes128, &key, &ciphertext, Mode::Ofb, &iv).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn ctr_round_trip_with_low_byte_overflow() {
    let key = [0x5au8; 32];
    let icv = [0xffu8; 16];
    let plaintext = vec![0x42u8; 48];
    let ciphertext = aes_encrypt(AesVariant::Aes256, &key, &plaintext, Mode::Ctr, &icv).unwrap();
    let decrypted = aes_decrypt(AesVariant::Aes256, &key, &ciphertext, Mode::Ctr, &icv).unwrap();
    assert_eq!(decrypted, plaintext);
    assert_ne!(ciphertext, plaintext);
}

// SP-800-38A F.5.5 AES-256 CTR, first and last block of a 4-block vector.
#[test]
fn ctr_nist_vector_aes256() {
    let key = hex::decode("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4")
        .unwrap();
    let icv: [u8; 16] = [
        0xf0, 0xf1, 0xf2, 0xf3, 0xf4, 0xf5, 0xf6, 0xf7, 0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe,
        0xff,
    ];
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef\
         f69f2445df4f9b17ad2b417be66c3710",
    )
    .unwrap();
    let ciphertext = aes_encrypt(AesVariant::Aes256, &key, &plaintext, Mode::Ctr, &icv).unwrap();
    assert_eq!(&ciphertext[0..4], &[0x60, 0x1e, 0xc3, 0x13]);
    assert_eq!(&ciphertext[ciphertext.len() - 4..], &[0x45, 0x79, 0x41, 0xa6]);
    let decrypted = aes_decrypt(AesVariant::Aes256, &key, &ciphertext, Mode::Ctr, &icv).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn rejects_misaligned_ecb_input() {
    let key = [0u8; 16];
    let err = aes_encrypt(AesVariant::Aes128, &key, &[0u8; 15], Mode::Ecb, &[]).unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidBlockAlignment {
            block_size: 16,
            got: 15
        }
    );
}
