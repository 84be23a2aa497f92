pub mod admin;
pub mod home;
pub mod properties;
pub mod property_detail;
