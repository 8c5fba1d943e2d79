// src/client/mod.rs
pub mod clipboard;
pub mod error;
pub mod form;
pub mod http;

pub use clipboard::{Clipboard, SystemClipboard};
pub use form::FormController;
pub use http::{GeneratorClient, HttpGeneratorClient};
