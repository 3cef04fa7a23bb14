//! The two command sets: home page and blog index.

pub mod blog;
pub mod home;
pub mod shared;
