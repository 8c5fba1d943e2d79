// src/api/handlers/mod.rs
pub mod passwords;
pub mod system;
