mod test_aes_core;
mod test_aes_modes;
