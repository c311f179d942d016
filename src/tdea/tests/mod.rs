mod test_tdea_modes;
