//! Command-level tests (argument handling and console output)

mod test_create;
mod test_list;
mod test_update;
