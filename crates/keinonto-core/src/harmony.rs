// Vowel harmony: back/front suffix variant selection

use crate::character::simple_lower;

/// Harmony class of a stem.
///
/// Suffix templates are written with the archiphonemes `A`, `O` and `U`,
/// which resolve to `a`/`ä`, `o`/`ö` and `u`/`y` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Harmony {
    /// a, o, u
    Back,
    /// ä, ö, y (and words with only the neutral vowels e, i)
    Front,
}

impl Harmony {
    /// Determine harmony from the last harmonic vowel of a word.
    ///
    /// Scans from the end so that the part nearest to the suffix decides.
    /// A word with only neutral vowels (`e`, `i`) is front-harmonic.
    pub fn of(word: &str) -> Self {
        for c in word.chars().rev() {
            match simple_lower(c) {
                'a' | 'o' | 'u' | '\u{00E1}' => return Harmony::Back,
                '\u{00E4}' | '\u{00F6}' | 'y' | '\u{00FC}' => return Harmony::Front,
                _ => {}
            }
        }
        Harmony::Front
    }

    /// Resolve archiphonemes in a template to concrete vowels.
    pub fn resolve(self, template: &str) -> String {
        template.chars().map(|c| self.resolve_char(c)).collect()
    }

    fn resolve_char(self, c: char) -> char {
        match (self, c) {
            (Harmony::Back, 'A') => 'a',
            (Harmony::Back, 'O') => 'o',
            (Harmony::Back, 'U') => 'u',
            (Harmony::Front, 'A') => '\u{00E4}',
            (Harmony::Front, 'O') => '\u{00F6}',
            (Harmony::Front, 'U') => 'y',
            (_, other) => other,
        }
    }
}

/// Whether a template string contains any harmony archiphoneme.
pub fn has_archiphoneme(template: &str) -> bool {
    template.chars().any(|c| matches!(c, 'A' | 'O' | 'U'))
}
