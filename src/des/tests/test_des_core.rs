//! Test Suite for the DES Core Primitives

use super::super::core::{des_dec_block, des_enc_block, DesKeySchedule};
use crate::error::CipherError;

// FIPS-81 / classic DES test vector.
#[test]
fn known_answer_vector() {
    let key: [u8; 8] = [0x13, 0x34, 0x57, 0x79, 0x9B, 0xBC, 0xDF, 0xF1];
    let plaintext: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
    let expected: [u8; 8] = [0x85, 0xE8, 0x13, 0x54, 0x0F, 0x0A, 0xB4, 0x05];

    let ciphertext = des_enc_block(&plaintext, &key).unwrap();
    assert_eq!(ciphertext, expected);
    let decrypted = des_dec_block(&ciphertext, &key).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn rejects_bad_key_length() {
    let err = DesKeySchedule::new(&[0u8; 7]).unwrap_err();
    assert_eq!(
        err,
        CipherError::InvalidKeyLength {
            expected: "8",
            got: 7,
        }
    );
}
