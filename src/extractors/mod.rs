//! Request extractors.

mod admin;

pub use admin::{AdminRole, USER_ROLE_HEADER};
