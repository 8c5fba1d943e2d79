// src/generators/charset.rs
use std::fmt;

use crate::models::PasswordOptions;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

/// A named set of characters that can be toggled on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    pub fn charset(&self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Field name used in the JSON option set.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase Letters",
            CharacterClass::Lowercase => "Lowercase Letters",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Special => "Special Characters",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.charset().contains(&(c as u8))
    }

    pub fn enabled_in(&self, options: &PasswordOptions) -> bool {
        match self {
            CharacterClass::Uppercase => options.uppercase,
            CharacterClass::Lowercase => options.lowercase,
            CharacterClass::Numbers => options.numbers,
            CharacterClass::Special => options.special,
        }
    }

    pub fn set_in(&self, options: &mut PasswordOptions, enabled: bool) {
        match self {
            CharacterClass::Uppercase => options.uppercase = enabled,
            CharacterClass::Lowercase => options.lowercase = enabled,
            CharacterClass::Numbers => options.numbers = enabled,
            CharacterClass::Special => options.special = enabled,
        }
    }

    /// Enabled classes in a fixed order.
    pub fn enabled(options: &PasswordOptions) -> Vec<CharacterClass> {
        Self::ALL
            .iter()
            .copied()
            .filter(|class| class.enabled_in(options))
            .collect()
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(a.charset().iter().all(|c| !b.contains(*c as char)), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn set_and_read_back_options() {
        let mut options = PasswordOptions::none();
        CharacterClass::Numbers.set_in(&mut options, true);
        assert_eq!(CharacterClass::enabled(&options), vec![CharacterClass::Numbers]);

        CharacterClass::Numbers.set_in(&mut options, false);
        assert!(CharacterClass::enabled(&options).is_empty());
    }

    #[test]
    fn contains_rejects_non_ascii() {
        assert!(!CharacterClass::Lowercase.contains('é'));
        assert!(CharacterClass::Special.contains('?'));
        assert!(!CharacterClass::Special.contains(' '));
    }
}
