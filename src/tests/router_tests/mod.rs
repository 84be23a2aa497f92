pub mod admin_tests;
pub mod pages_tests;
