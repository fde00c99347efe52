pub mod delete_test;
pub mod get_test;
