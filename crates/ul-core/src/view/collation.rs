//! Locale-aware string ordering for table columns.
//!
//! Names and countries come from many locales ("Émile", "Ørsted", "Türkiye"),
//! so a plain byte comparison would push every accented name after "Z".
//! Strings are compared on three levels, in order:
//!
//! 1. Primary: base letters only, case and accents removed
//! 2. Secondary: accents, case removed
//! 3. Tertiary: case, lowercase before uppercase

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Precomputed sort key for one string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: String,
}

impl CollationKey {
    pub fn new(s: &str) -> Self {
        let lowered = s.to_lowercase();

        let primary = lowered
            .replace('ß', "ss")
            .replace('æ', "ae")
            .replace('œ', "oe")
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .map(fold_stroke)
            .collect::<String>();

        let secondary = lowered.nfd().collect::<String>();

        // Swapping case makes lowercase letters compare lower than their
        // uppercase forms.
        let tertiary = s.nfd().map(swap_case).collect::<String>();

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Letters with a stroke or bar have no canonical decomposition, so NFD
/// leaves them intact. Collators still treat them as their base letter.
fn fold_stroke(c: char) -> char {
    match c {
        'ø' => 'o',
        'ł' => 'l',
        'đ' => 'd',
        'ħ' => 'h',
        'ŧ' => 't',
        'ƀ' => 'b',
        'ɨ' => 'i',
        'ƶ' => 'z',
        _ => c,
    }
}

fn swap_case(c: char) -> char {
    if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else {
        c
    }
}

/// Compare two strings the way a root-locale collator would, approximately.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
