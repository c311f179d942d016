mod core;
mod modes;

pub use core::{
    aes_dec_block, aes_enc_block, AesKeySchedule, AesVariant, AES_128_KEY_SIZE, AES_192_KEY_SIZE,
    AES_256_KEY_SIZE, AES_BLOCK_SIZE,
};
pub use modes::{aes_decrypt, aes_encrypt};

#[cfg(test)]
mod tests;
