//! Character classes and their alphabets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// A named category of characters with a fixed, ordered alphabet.
///
/// The declaration order is the concatenation order of the combined
/// alphabet, so `Ord` and iteration over a [`ClassSet`] follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }

    /// Returns `true` if `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Digit => c.is_ascii_digit(),
            CharacterClass::Symbol => SYMBOLS.contains(c),
        }
    }

    /// Returns `true` if any character of `text` belongs to this class.
    pub fn present_in(self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown character class: {0}")]
pub struct UnknownClass(pub String);

impl FromStr for CharacterClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => Ok(CharacterClass::Uppercase),
            "lowercase" | "lower" => Ok(CharacterClass::Lowercase),
            "numbers" | "digits" | "digit" => Ok(CharacterClass::Digit),
            "symbols" | "symbol" => Ok(CharacterClass::Symbol),
            _ => Err(UnknownClass(s.trim().to_string())),
        }
    }
}

/// Set of enabled classes. Iterates in the fixed class order.
pub type ClassSet = BTreeSet<CharacterClass>;

/// Concatenates the alphabets of `classes` in the fixed class order.
pub fn combined_alphabet(classes: &ClassSet) -> Vec<char> {
    classes
        .iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

/// Classes that have at least one character in `text`.
pub fn classes_present(text: &str) -> ClassSet {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| class.present_in(text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digit.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbol.alphabet().len(), 27);
    }

    #[test]
    fn test_combined_alphabet_follows_class_order() {
        let classes: ClassSet = [CharacterClass::Symbol, CharacterClass::Uppercase]
            .into_iter()
            .collect();
        let combined: String = combined_alphabet(&classes).into_iter().collect();
        assert_eq!(combined, format!("{}{}", UPPERCASE, SYMBOLS));
    }

    #[test]
    fn test_combined_alphabet_all_classes() {
        let classes: ClassSet = CharacterClass::ALL.into_iter().collect();
        assert_eq!(combined_alphabet(&classes).len(), 26 + 26 + 10 + 27);
    }

    #[test]
    fn test_contains_matches_alphabet() {
        for class in CharacterClass::ALL {
            for c in class.alphabet().chars() {
                assert!(class.contains(c), "{} should contain {:?}", class, c);
            }
        }
        assert!(!CharacterClass::Symbol.contains('A'));
        assert!(!CharacterClass::Symbol.contains('5'));
        assert!(!CharacterClass::Symbol.contains(' '));
        assert!(!CharacterClass::Uppercase.contains('É'));
    }

    #[test]
    fn test_classes_present() {
        let present = classes_present("Abc12345!");
        assert_eq!(present.len(), 4);

        let present = classes_present("abcdefg");
        assert_eq!(present.into_iter().collect::<Vec<_>>(), vec![CharacterClass::Lowercase]);

        assert!(classes_present("").is_empty());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Uppercase".parse::<CharacterClass>(), Ok(CharacterClass::Uppercase));
        assert_eq!(" lower ".parse::<CharacterClass>(), Ok(CharacterClass::Lowercase));
        assert_eq!("digits".parse::<CharacterClass>(), Ok(CharacterClass::Digit));
        assert_eq!("numbers".parse::<CharacterClass>(), Ok(CharacterClass::Digit));
        assert_eq!("SYMBOLS".parse::<CharacterClass>(), Ok(CharacterClass::Symbol));
        assert_eq!(
            "emoji".parse::<CharacterClass>(),
            Err(UnknownClass("emoji".to_string()))
        );
    }
}
