// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use charset::CharacterClass;
pub use password::{GeneratorError, PasswordGenerator, DEFAULT_MAX_LENGTH, MAX_LENGTH_CEILING};
