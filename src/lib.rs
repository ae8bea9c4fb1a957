#![cfg_attr(not(test), no_std)]

pub mod mt19937;
pub mod mt19937_64;
pub mod prime;
pub mod twister;
pub mod well512;
pub mod word;
#[cfg(feature = "serde")] mod words;

pub use mt19937::*;
pub use mt19937_64::*;
pub use twister::*;
pub use well512::*;
pub use word::*;
pub use rand_core::*;
