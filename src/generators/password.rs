// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;

use super::charset::CharacterClass;
use crate::models::PasswordOptions;

pub const DEFAULT_MAX_LENGTH: usize = 256;
/// Hard upper bound on any configured maximum.
pub const MAX_LENGTH_CEILING: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Please choose at least one option.")]
    NoOptionsSelected,

    #[error("Password length must be between 1 and {max} characters (got {length})")]
    InvalidLength { length: i64, max: usize },
}

/// Stateless generator shared by every request handler.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    max_length: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl PasswordGenerator {
    pub fn new(max_length: usize) -> Self {
        PasswordGenerator {
            max_length: max_length.min(MAX_LENGTH_CEILING),
        }
    }

    /// Check the request without touching the random source.
    pub fn validate(&self, length: i64, options: &PasswordOptions) -> Result<usize, GeneratorError> {
        if !options.any_enabled() {
            return Err(GeneratorError::NoOptionsSelected);
        }

        match usize::try_from(length) {
            Ok(len) if (1..=self.max_length).contains(&len) => Ok(len),
            _ => Err(GeneratorError::InvalidLength {
                length,
                max: self.max_length,
            }),
        }
    }

    /// Generate a password from the operating system CSPRNG.
    pub fn generate(&self, length: i64, options: &PasswordOptions) -> Result<String, GeneratorError> {
        self.generate_with_rng(length, options, &mut OsRng)
    }

    /// Every enabled class is represented once the length allows it; the
    /// remaining positions are drawn uniformly from the union and the whole
    /// sequence is shuffled so the guaranteed characters have no fixed slot.
    pub fn generate_with_rng<R>(
        &self,
        length: i64,
        options: &PasswordOptions,
        rng: &mut R,
    ) -> Result<String, GeneratorError>
    where
        R: Rng + CryptoRng + ?Sized,
    {
        let length = self.validate(length, options)?;
        let classes = CharacterClass::enabled(options);

        let pool: Vec<u8> = classes
            .iter()
            .flat_map(|class| class.charset().iter().copied())
            .collect();

        let mut password: Vec<u8> = Vec::with_capacity(length);

        if length >= classes.len() {
            for class in &classes {
                let set = class.charset();
                password.push(set[rng.gen_range(0..set.len())]);
            }
        }

        while password.len() < length {
            password.push(pool[rng.gen_range(0..pool.len())]);
        }

        password.shuffle(rng);

        Ok(password.into_iter().map(char::from).collect())
    }
}
