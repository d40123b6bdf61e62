// Character classification and Finnish phonological helpers

// ---------------------------------------------------------------------------
// Finnish phonological constants
// ---------------------------------------------------------------------------

/// Finnish vowels (lowercase): a e i o u y ä ö
const FINNISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', '\u{00E4}', '\u{00F6}'];

/// Accented vowels found in loanwords (rosé, café). Phonologically neutral.
const LOAN_VOWELS: &[char] = &['\u{00E9}', '\u{00E8}', '\u{00E1}', '\u{00FC}'];

/// Finnish consonants (lowercase): b c d f g h j k l m n p q r s t v w x z š ž
const FINNISH_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'z', '\u{0161}', '\u{017E}',
];

/// Vowel pairs that do NOT form a diphthong and therefore start a new
/// syllable (hiatus), e.g. `ea` in `korkea`.
pub const SPLIT_VOWELS: &[[char; 2]] = &[
    ['a', 'e'],
    ['a', 'o'],
    ['e', 'a'],
    ['e', 'o'],
    ['i', 'a'],
    ['i', 'o'],
    ['o', 'a'],
    ['o', 'e'],
    ['u', 'a'],
    ['u', 'e'],
    ['y', 'e'],
    ['e', '\u{00E4}'], // eä
    ['e', '\u{00F6}'], // eö
    ['i', '\u{00E4}'], // iä
    ['i', '\u{00F6}'], // iö
    ['y', '\u{00E4}'], // yä
    ['\u{00E4}', 'e'], // äe
    ['\u{00F6}', 'e'], // öe
];

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is a vowel (case-insensitive), including the
/// accented loanword vowels.
pub fn is_vowel(c: char) -> bool {
    let lower = simple_lower(c);
    FINNISH_VOWELS.contains(&lower) || LOAN_VOWELS.contains(&lower)
}

/// Check whether a character is a Finnish consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    let lower = simple_lower(c);
    FINNISH_CONSONANTS.contains(&lower)
}

/// Map an accented loan vowel to the plain vowel it is pronounced as.
/// Plain vowels are returned unchanged.
pub fn plain_vowel(c: char) -> char {
    match simple_lower(c) {
        '\u{00E9}' | '\u{00E8}' => 'e',
        '\u{00E1}' => 'a',
        '\u{00FC}' => 'y',
        other => other,
    }
}

/// The last vowel of a word, if any.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|&c| is_vowel(c))
}

/// The first vowel of a word, if any.
pub fn first_vowel(word: &str) -> Option<char> {
    word.chars().find(|&c| is_vowel(c))
}

/// Whether the word ends in a vowel.
pub fn ends_in_vowel(word: &str) -> bool {
    word.chars().next_back().is_some_and(is_vowel)
}

/// Whether the word ends in a consonant letter.
pub fn ends_in_consonant(word: &str) -> bool {
    word.chars().next_back().is_some_and(is_consonant)
}

/// Whether the word ends in two identical vowels (`vapaa`, `hamee`).
pub fn ends_in_long_vowel(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) => is_vowel(a) && a == b,
        _ => false,
    }
}

fn is_split_pair(a: char, b: char) -> bool {
    let pair = [simple_lower(a), simple_lower(b)];
    SPLIT_VOWELS.contains(&pair)
}

/// Count syllables by counting vowel nuclei.
///
/// A run of vowels is one nucleus unless it contains a hiatus pair from
/// [`SPLIT_VOWELS`]; each hiatus starts a new syllable. Long vowels and
/// diphthongs therefore count once (`koira` = 2, `korkea` = 3).
pub fn syllable_count(word: &str) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;
    for c in word.chars() {
        if is_vowel(c) {
            match prev {
                Some(p) if is_vowel(p) => {
                    if is_split_pair(p, c) {
                        count += 1;
                    }
                }
                _ => count += 1,
            }
        }
        prev = Some(c);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finnish_vowels() {
        assert!(is_vowel('a'));
        assert!(is_vowel('A'));
        assert!(is_vowel('\u{00E4}')); // ä
        assert!(is_vowel('\u{00D6}')); // Ö
        assert!(is_vowel('\u{00E9}')); // é
        assert!(!is_vowel('k'));
        assert!(!is_vowel('\''));
    }

    #[test]
    fn finnish_consonants() {
        assert!(is_consonant('k'));
        assert!(is_consonant('K'));
        assert!(is_consonant('\u{0161}')); // š
        assert!(!is_consonant('a'));
        assert!(!is_consonant('\''));
    }

    #[test]
    fn plain_vowel_strips_accent() {
        assert_eq!(plain_vowel('\u{00E9}'), 'e');
        assert_eq!(plain_vowel('o'), 'o');
    }

    #[test]
    fn word_edges() {
        assert_eq!(last_vowel("nainen"), Some('e'));
        assert_eq!(first_vowel("kukka"), Some('u'));
        assert!(ends_in_vowel("talo"));
        assert!(ends_in_consonant("rengas"));
        assert!(!ends_in_consonant("parfait'"));
        assert!(ends_in_long_vowel("vapaa"));
        assert!(!ends_in_long_vowel("suo"));
        assert!(!ends_in_long_vowel(""));
    }

    #[test]
    fn syllables() {
        assert_eq!(syllable_count("maa"), 1);
        assert_eq!(syllable_count("suo"), 1);
        assert_eq!(syllable_count("talo"), 2);
        assert_eq!(syllable_count("koira"), 2);
        assert_eq!(syllable_count("omena"), 3);
        assert_eq!(syllable_count("korkea"), 3);
        assert_eq!(syllable_count("valtio"), 3);
        assert_eq!(syllable_count("laatikko"), 3);
        assert_eq!(syllable_count("golf"), 1);
    }
}
