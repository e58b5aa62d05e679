pub(crate) mod test_data;
pub(crate) mod testing;
