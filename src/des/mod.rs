mod core;
mod modes;
mod tables;

pub use core::{des_dec_block, des_enc_block, DesKeySchedule, DES_BLOCK_SIZE, DES_KEY_SIZE};
pub use modes::{des_decrypt, des_encrypt};

#[cfg(test)]
mod tests;
