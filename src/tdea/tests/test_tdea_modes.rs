//! Test Suite for the Triple-DES (TDEA) Modes of Operation

use super::super::modes::{tdea_decrypt, tdea_encrypt};
use crate::modes::Mode;

// SP-800-67 style three-key TDEA ECB round trip, 4 blocks (32 bytes).
#[test]
fn ecb_round_trip_multi_block() {
    let key1: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let key2: [u8; 8] = [0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x01];
    let key3: [u8; 8] = [0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x01, 0x23];
    let plaintext = b"Quick brown fox jumped over!!!!".to_vec();
    assert_eq!(plaintext.len(), 32);

    let ciphertext = tdea_encrypt(&key1, &key2, &key3, &plaintext, Mode::Ecb, &[]).unwrap();
    let decrypted = tdea_decrypt(&key1, &key2, &key3, &ciphertext, Mode::Ecb, &[]).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn cbc_round_trip() {
    let key1: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let key2: [u8; 8] = [0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10];
    let key3: [u8; 8] = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
    let iv = [0u8; 8];
    let plaintext = vec![0xA5u8; 24];

    let ciphertext = tdea_encrypt(&key1, &key2, &key3, &plaintext, Mode::Cbc, &iv).unwrap();
    let decrypted = tdea_decrypt(&key1, &key2, &key3, &ciphertext, Mode::Cbc, &iv).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn ecb_known_answer_vector() {
    let key1: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let key2: [u8; 8] = [0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x01];
    let key3: [u8; 8] = [0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x01, 0x23];
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51",
    )
    .unwrap();
    let expected = hex::decode(
        "714772f339841d34267fcc4bd2949cc3\
         ee11c22a576a303876183f99c0b6de87",
    )
    .unwrap();
    let ciphertext = tdea_encrypt(&key1, &key2, &key3, &plaintext, Mode::Ecb, &[]).unwrap();
    assert_eq!(ciphertext, expected);
    let decrypted = tdea_decrypt(&key1, &key2, &key3, &ciphertext, Mode::Ecb, &[]).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn ctr_round_trip() {
    let key1 = [0x11u8; 8];
    let key2 = [0x22u8; 8];
    let key3 = [0x33u8; 8];
    let icv = [0u8; 8];
    let plaintext = vec![0x99u8; 40];

    let ciphertext = tdea_encrypt(&key1, &key2, &key3, &plaintext, Mode::Ctr, &icv).unwrap();
    let decrypted = tdea_decrypt(&key1, &key2, &key3, &ciphertext, Mode::Ctr, &icv).unwrap();
    assert_eq!(decrypted, plaintext);
}
