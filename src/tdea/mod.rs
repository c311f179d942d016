mod core;
mod modes;

pub use core::{tdea_dec_block, tdea_enc_block, TdeaKeySchedule, TDEA_BLOCK_SIZE};
pub use modes::{tdea_decrypt, tdea_encrypt};

#[cfg(test)]
mod tests;
