//! Domain types and rules for users

pub mod entities;
pub mod gravatar;
pub mod password;
