//! Pure domain models. No I/O, no CLI. Only data types and their rules.

pub mod account;

pub use account::*;
