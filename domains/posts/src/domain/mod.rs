//! Domain types and rules for posts

pub mod entities;
