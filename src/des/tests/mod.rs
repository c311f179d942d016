mod test_des_core;
