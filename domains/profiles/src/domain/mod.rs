//! Domain types and rules for profiles

pub mod entities;
