// Per-class rule records: eligibility shape and stem derivation rules
//
// Every class is described by data alone. The derivation helpers here are
// plain string operations over the lemma and the strong vowel stem; grade
// selection happens in the synthesizer.

use keinonto_core::Harmony;
use keinonto_core::character::{is_consonant, is_vowel, plain_vowel, first_vowel, syllable_count};

use crate::gradation::GradationPattern;

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// Syllable-count constraint on a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syllables {
    Any,
    Exactly(usize),
    AtLeast(usize),
}

impl Syllables {
    fn admits(self, count: usize) -> bool {
        match self {
            Syllables::Any => true,
            Syllables::Exactly(n) => count == n,
            Syllables::AtLeast(n) => count >= n,
        }
    }
}

/// Constraint on the first vowel of a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstVowel {
    Any,
    OneOf(&'static [char]),
}

/// Orthographic shape a lemma must have to be a candidate for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Accepted word endings. The longest matching one counts.
    pub endings: &'static [&'static str],
    pub syllables: Syllables,
    pub first_vowel: FirstVowel,
    /// Also admit any lemma ending in a consonant letter (matched length 0).
    pub consonant_final: bool,
}

impl Shape {
    const fn new(endings: &'static [&'static str]) -> Self {
        Self {
            endings,
            syllables: Syllables::Any,
            first_vowel: FirstVowel::Any,
            consonant_final: false,
        }
    }

    const fn syllables(mut self, syllables: Syllables) -> Self {
        self.syllables = syllables;
        self
    }

    const fn first_vowel(mut self, vowels: &'static [char]) -> Self {
        self.first_vowel = FirstVowel::OneOf(vowels);
        self
    }

    const fn consonant_final(mut self) -> Self {
        self.consonant_final = true;
        self
    }

    /// Length in characters of the longest matching ending, or `None` if
    /// the lemma does not have this shape.
    pub fn matches(&self, lemma: &str) -> Option<usize> {
        let ending = self
            .endings
            .iter()
            .filter(|e| lemma.ends_with(*e))
            .map(|e| e.chars().count())
            .max();
        let ending = match ending {
            Some(len) => Some(len),
            None if self.consonant_final && lemma.chars().next_back().is_some_and(is_consonant) => {
                Some(0)
            }
            None => return None,
        };
        if !self.syllables.admits(syllable_count(lemma)) {
            return None;
        }
        if let FirstVowel::OneOf(vowels) = self.first_vowel {
            let first = first_vowel(lemma)?;
            if !vowels.contains(&first) {
                return None;
            }
        }
        ending
    }
}

// ---------------------------------------------------------------------------
// Stem rules
// ---------------------------------------------------------------------------

/// How a class admits consonant gradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradationKind {
    /// The class never alternates.
    None,
    /// Lemma and vowel stem are strong; the genitive is weak.
    Straight,
    /// Lemma is weak; the vowel stem is strong.
    Inverse,
}

/// Projection of the lemma onto the vowel stem, in the grade of the lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemRule {
    /// Characters removed from the end of the lemma.
    pub strip: usize,
    /// Appended after stripping; may contain archiphonemes.
    pub add: &'static str,
    /// Double the final vowel (`vieras` -> `vieraa`).
    pub lengthen: bool,
}

impl StemRule {
    const fn keep() -> Self {
        Self { strip: 0, add: "", lengthen: false }
    }

    const fn replace(strip: usize, add: &'static str) -> Self {
        Self { strip, add, lengthen: false }
    }

    const fn lengthened(strip: usize) -> Self {
        Self { strip, add: "", lengthen: true }
    }

    /// Project `lemma` to the vowel stem. A stem still ending in a
    /// consonant takes an epenthetic `i` (`golf` -> `golfi`).
    pub fn project(&self, lemma: &str) -> String {
        let harmony = Harmony::of(lemma);
        let mut stem = strip_chars(lemma, self.strip).to_string();
        stem.push_str(&harmony.resolve(self.add));
        if self.lengthen {
            if let Some(last) = stem.chars().next_back() {
                stem.push(last);
            }
        }
        if stem.chars().next_back().is_some_and(is_consonant) {
            stem.push('i');
        }
        stem
    }
}

/// Partitive singular stem (the partitive form minus its final `A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitiveRule {
    /// Vowel stem (`kalaa`).
    Vowel,
    /// Vowel stem + `t` (`maata`).
    VowelT,
    /// Lemma with `strip` characters replaced by `add`, then `t`
    /// (`tiili` -> `tiilt`, `lapsi` -> `last`).
    Consonant { strip: usize, add: &'static str },
}

impl PartitiveRule {
    const LEMMA_T: PartitiveRule = PartitiveRule::Consonant { strip: 0, add: "" };

    pub fn stem(&self, lemma: &str, vowel: &str) -> String {
        match *self {
            PartitiveRule::Vowel => vowel.to_string(),
            PartitiveRule::VowelT => format!("{vowel}t"),
            PartitiveRule::Consonant { strip, add } => {
                format!("{}{add}t", strip_chars(lemma, strip))
            }
        }
    }
}

/// Illative singular stem (the illative form minus its final `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllativeRule {
    /// Repeat the final vowel (`kalaan`).
    Vn,
    /// `h` + final vowel (`maahan`, `roséhen`).
    HVn,
    /// `-seen` (`vapaaseen`).
    Seen,
    /// `h` + a fixed vowel (`parfait'hen`).
    HWith(char),
}

impl IllativeRule {
    pub fn stem(&self, vowel: &str) -> String {
        let last = vowel.chars().rev().find(|&c| is_vowel(c)).map(plain_vowel);
        match (*self, last) {
            (IllativeRule::Vn, Some(v)) => format!("{vowel}{v}"),
            (IllativeRule::HVn, Some(v)) => format!("{vowel}h{v}"),
            (IllativeRule::HWith(v), _) => format!("{vowel}h{v}"),
            (IllativeRule::Seen, _) => format!("{vowel}see"),
            (_, None) => format!("{vowel}he"),
        }
    }
}

/// Derivation of the oblique (i-) plural stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObliqueRule {
    /// Vowel stem + `i` (`valoi`).
    AppendI,
    /// Final `a`/`ä` becomes `o`/`ö`, then `i` (`kaloi`).
    RoundA,
    /// Final vowel replaced by `i` (`koiri`, `vapai`).
    DropVowel,
    /// Final `i` becomes `ei` (`ristei`).
    IToEi,
    /// First element of a final diphthong dropped (`suo` -> `soi`).
    Diphthong,
    /// Built from the lemma (`käsi`, `kalleu` + `ksi`).
    FromLemma { strip: usize, add: &'static str },
}

impl ObliqueRule {
    pub fn stem(&self, lemma: &str, vowel: &str) -> String {
        match *self {
            ObliqueRule::AppendI => format!("{vowel}i"),
            ObliqueRule::RoundA => {
                let mut chars: Vec<char> = vowel.chars().collect();
                if let Some(last) = chars.last_mut() {
                    *last = match *last {
                        'a' => 'o',
                        '\u{00E4}' => '\u{00F6}',
                        other => other,
                    };
                }
                chars.push('i');
                chars.into_iter().collect()
            }
            ObliqueRule::DropVowel => format!("{}i", strip_chars(vowel, 1)),
            ObliqueRule::IToEi => match vowel.strip_suffix('i') {
                Some(root) => format!("{root}ei"),
                None => format!("{vowel}i"),
            },
            ObliqueRule::Diphthong => {
                let chars: Vec<char> = vowel.chars().collect();
                let mut out: String = match chars.len() {
                    0 | 1 => chars.iter().collect(),
                    n => chars[..n - 2].iter().chain(&chars[n - 1..]).collect(),
                };
                out.push('i');
                out
            }
            ObliqueRule::FromLemma { strip, add } => {
                format!("{}{add}", strip_chars(lemma, strip))
            }
        }
    }
}

/// Genitive plural scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenitivePlural {
    /// Oblique + `en` (`kalojen`).
    ObliqueEn,
    /// Oblique + `den` (`maiden`).
    ObliqueDen,
    /// Vowel stem without its final vowel + `ien` (`ristien`).
    RootIen,
    /// Partitive stem + `en` (`lasten`, `naisten`).
    PartitiveEn,
}

/// Partitive plural scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitivePlural {
    /// Oblique + `A` (`kaloja`).
    A,
    /// Oblique + `tA` (`maita`).
    TA,
}

/// Illative plural scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllativePlural {
    /// Oblique + `in` (`koiriin`).
    In,
    /// Oblique + `hin` (`kaloihin`).
    Hin,
    /// Oblique + `siin` (`vapaisiin`).
    Siin,
}

/// Static description of one declension class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRecord {
    pub id: u8,
    /// Kotus model word.
    pub example: &'static str,
    pub shape: Shape,
    /// Higher values are tried first among equal ending lengths.
    pub specificity: u8,
    pub gradation: GradationKind,
    /// Pattern assumed when no witness pins the gradation.
    pub default_gradation: GradationPattern,
    pub stem: StemRule,
    pub partitive: PartitiveRule,
    pub illative: IllativeRule,
    pub oblique: ObliqueRule,
    pub genitive_plural: GenitivePlural,
    pub partitive_plural: PartitivePlural,
    pub illative_plural: IllativePlural,
    /// Genitive, partitive and illative plural take the weak grade
    /// (`laatikoiden`, `solakoita`).
    pub weak_plural: bool,
}

impl ClassRecord {
    /// Vowel stem in the grade of the lemma.
    pub fn project(&self, lemma: &str) -> String {
        self.stem.project(lemma)
    }

    /// Strong-grade vowel stem.
    pub fn vowel_stem(&self, lemma: &str, pattern: GradationPattern) -> String {
        let projected = self.project(lemma);
        match self.gradation {
            GradationKind::Inverse => pattern.apply(&projected, crate::gradation::Grade::Strong),
            _ => projected,
        }
    }
}

/// `s` without its last `n` characters.
pub(crate) fn strip_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

const BACK_ROUND: &[&str] = &["o", "u", "y", "\u{00F6}"];
const LONG_VOWELS: &[&str] = &[
    "aa", "ee", "ii", "oo", "uu", "yy", "\u{00E4}\u{00E4}", "\u{00F6}\u{00F6}",
];
const MONOSYLLABIC: &[&str] = &[
    "aa", "ee", "ii", "oo", "uu", "yy", "\u{00E4}\u{00E4}", "\u{00F6}\u{00F6}", "ai", "ei", "oi",
    "ui", "yi", "\u{00E4}i", "\u{00F6}i", "au", "eu", "ou", "\u{00E4}y",
];

/// Vowel-stem defaults shared by the open classes.
const fn vowel_class(id: u8, example: &'static str, shape: Shape) -> ClassRecord {
    ClassRecord {
        id,
        example,
        shape,
        specificity: 1,
        gradation: GradationKind::None,
        default_gradation: GradationPattern::None,
        stem: StemRule::keep(),
        partitive: PartitiveRule::Vowel,
        illative: IllativeRule::Vn,
        oblique: ObliqueRule::AppendI,
        genitive_plural: GenitivePlural::ObliqueEn,
        partitive_plural: PartitivePlural::A,
        illative_plural: IllativePlural::Hin,
        weak_plural: false,
    }
}

/// Consonant-stem defaults: partitive from the lemma, `-iin` plural.
const fn consonant_class(id: u8, example: &'static str, shape: Shape, stem: StemRule) -> ClassRecord {
    ClassRecord {
        id,
        example,
        shape,
        specificity: 1,
        gradation: GradationKind::None,
        default_gradation: GradationPattern::None,
        stem,
        partitive: PartitiveRule::LEMMA_T,
        illative: IllativeRule::Vn,
        oblique: ObliqueRule::DropVowel,
        genitive_plural: GenitivePlural::ObliqueEn,
        partitive_plural: PartitivePlural::A,
        illative_plural: IllativePlural::In,
        weak_plural: false,
    }
}

/// Long-vowel stem defaults: `-tA` partitive, `-den`/`-tA` plural.
const fn long_class(id: u8, example: &'static str, shape: Shape, stem: StemRule) -> ClassRecord {
    ClassRecord {
        id,
        example,
        shape,
        specificity: 1,
        gradation: GradationKind::None,
        default_gradation: GradationPattern::None,
        stem,
        partitive: PartitiveRule::VowelT,
        illative: IllativeRule::HVn,
        oblique: ObliqueRule::DropVowel,
        genitive_plural: GenitivePlural::ObliqueDen,
        partitive_plural: PartitivePlural::TA,
        illative_plural: IllativePlural::Hin,
        weak_plural: false,
    }
}

const fn with_gradation(mut record: ClassRecord, kind: GradationKind) -> ClassRecord {
    record.gradation = kind;
    record
}

const fn fixed_gradation(mut record: ClassRecord, pattern: GradationPattern) -> ClassRecord {
    record.gradation = GradationKind::Straight;
    record.default_gradation = pattern;
    record
}

const fn specificity(mut record: ClassRecord, value: u8) -> ClassRecord {
    record.specificity = value;
    record
}

const fn den_plural(mut record: ClassRecord) -> ClassRecord {
    record.genitive_plural = GenitivePlural::ObliqueDen;
    record.partitive_plural = PartitivePlural::TA;
    record
}

const fn seen_illative(mut record: ClassRecord) -> ClassRecord {
    record.illative = IllativeRule::Seen;
    record.genitive_plural = GenitivePlural::ObliqueDen;
    record.partitive_plural = PartitivePlural::TA;
    record.illative_plural = IllativePlural::Siin;
    record
}

/// The 51 class records, indexed by `id - 1`.
pub(crate) static RECORDS: [ClassRecord; 51] = [
    // 1 valo
    with_gradation(vowel_class(1, "valo", Shape::new(BACK_ROUND)), GradationKind::Straight),
    // 2 palvelu
    specificity(
        den_plural(vowel_class(2, "palvelu", Shape::new(BACK_ROUND).syllables(Syllables::AtLeast(3)))),
        0,
    ),
    // 3 valtio
    specificity(
        ClassRecord {
            partitive: PartitiveRule::VowelT,
            ..den_plural(vowel_class(3, "valtio", Shape::new(&["io", "i\u{00F6}", "eo"])))
        },
        2,
    ),
    // 4 laatikko
    specificity(
        ClassRecord {
            weak_plural: true,
            ..den_plural(with_gradation(
                vowel_class(
                    4,
                    "laatikko",
                    Shape::new(&["kko", "kk\u{00F6}"]).syllables(Syllables::AtLeast(3)),
                ),
                GradationKind::Straight,
            ))
        },
        2,
    ),
    // 5 risti
    specificity(
        ClassRecord {
            oblique: ObliqueRule::IToEi,
            genitive_plural: GenitivePlural::RootIen,
            ..with_gradation(
                vowel_class(5, "risti", Shape::new(&["i"]).consonant_final()),
                GradationKind::Straight,
            )
        },
        0,
    ),
    // 6 paperi
    ClassRecord {
        oblique: ObliqueRule::IToEi,
        ..den_plural(vowel_class(6, "paperi", Shape::new(&["i"]).syllables(Syllables::AtLeast(3))))
    },
    // 7 ovi
    ClassRecord {
        stem: StemRule::replace(1, "e"),
        oblique: ObliqueRule::DropVowel,
        illative_plural: IllativePlural::In,
        ..with_gradation(
            vowel_class(7, "ovi", Shape::new(&["i"]).syllables(Syllables::Exactly(2))),
            GradationKind::Straight,
        )
    },
    // 8 nalle
    with_gradation(vowel_class(8, "nalle", Shape::new(&["e"])), GradationKind::Straight),
    // 9 kala
    specificity(
        ClassRecord {
            oblique: ObliqueRule::RoundA,
            ..with_gradation(
                vowel_class(
                    9,
                    "kala",
                    Shape::new(&["a"])
                        .syllables(Syllables::Exactly(2))
                        .first_vowel(&['a', 'e', 'i']),
                ),
                GradationKind::Straight,
            )
        },
        2,
    ),
    // 10 koira
    ClassRecord {
        oblique: ObliqueRule::DropVowel,
        illative_plural: IllativePlural::In,
        ..with_gradation(
            vowel_class(
                10,
                "koira",
                Shape::new(&["a", "\u{00E4}"]).syllables(Syllables::Exactly(2)),
            ),
            GradationKind::Straight,
        )
    },
    // 11 omena
    ClassRecord {
        oblique: ObliqueRule::RoundA,
        ..den_plural(vowel_class(
            11,
            "omena",
            Shape::new(&["a", "\u{00E4}"]).syllables(Syllables::AtLeast(3)),
        ))
    },
    // 12 kulkija
    specificity(
        ClassRecord {
            oblique: ObliqueRule::RoundA,
            ..den_plural(vowel_class(12, "kulkija", Shape::new(&["ija", "ij\u{00E4}"])))
        },
        2,
    ),
    // 13 katiska
    ClassRecord {
        oblique: ObliqueRule::RoundA,
        ..vowel_class(13, "katiska", Shape::new(&["ska", "sk\u{00E4}"]))
    },
    // 14 solakka
    ClassRecord {
        oblique: ObliqueRule::RoundA,
        weak_plural: true,
        ..den_plural(with_gradation(
            vowel_class(
                14,
                "solakka",
                Shape::new(&["kka", "kk\u{00E4}", "ppa", "pp\u{00E4}", "tta", "tt\u{00E4}"])
                    .syllables(Syllables::AtLeast(3)),
            ),
            GradationKind::Straight,
        ))
    },
    // 15 korkea
    specificity(
        ClassRecord {
            oblique: ObliqueRule::DropVowel,
            illative_plural: IllativePlural::Siin,
            ..den_plural(vowel_class(
                15,
                "korkea",
                Shape::new(&["ea", "e\u{00E4}", "oa", "\u{00F6}\u{00E4}"]),
            ))
        },
        2,
    ),
    // 16 vanhempi
    specificity(
        ClassRecord {
            stem: StemRule::replace(1, "A"),
            oblique: ObliqueRule::DropVowel,
            illative_plural: IllativePlural::In,
            ..fixed_gradation(
                vowel_class(16, "vanhempi", Shape::new(&["mpi"])),
                GradationPattern::MpMm,
            )
        },
        3,
    ),
    // 17 vapaa
    specificity(
        ClassRecord {
            illative: IllativeRule::Seen,
            illative_plural: IllativePlural::Siin,
            ..long_class(
                17,
                "vapaa",
                Shape::new(LONG_VOWELS).syllables(Syllables::AtLeast(2)),
                StemRule::keep(),
            )
        },
        2,
    ),
    // 18 maa
    long_class(
        18,
        "maa",
        Shape::new(MONOSYLLABIC).syllables(Syllables::Exactly(1)),
        StemRule::keep(),
    ),
    // 19 suo
    specificity(
        ClassRecord {
            oblique: ObliqueRule::Diphthong,
            ..long_class(
                19,
                "suo",
                Shape::new(&["uo", "y\u{00F6}", "ie"]).syllables(Syllables::Exactly(1)),
                StemRule::keep(),
            )
        },
        3,
    ),
    // 20 filee
    long_class(
        20,
        "filee",
        Shape::new(LONG_VOWELS).syllables(Syllables::AtLeast(2)),
        StemRule::keep(),
    ),
    // 21 rosé
    specificity(
        ClassRecord {
            oblique: ObliqueRule::AppendI,
            ..long_class(21, "ros\u{00E9}", Shape::new(&["\u{00E9}"]), StemRule::keep())
        },
        3,
    ),
    // 22 parfait
    ClassRecord {
        illative: IllativeRule::HWith('e'),
        oblique: ObliqueRule::AppendI,
        ..long_class(
            22,
            "parfait",
            Shape::new(&["ait", "eaux", "aux", "ow"]),
            StemRule::replace(0, "'"),
        )
    },
    // 23 tiili
    ClassRecord {
        partitive: PartitiveRule::Consonant { strip: 1, add: "" },
        ..consonant_class(23, "tiili", Shape::new(&["hi", "li"]), StemRule::replace(1, "e"))
    },
    // 24 uni
    ClassRecord {
        partitive: PartitiveRule::Consonant { strip: 1, add: "" },
        ..consonant_class(24, "uni", Shape::new(&["ni", "ri"]), StemRule::replace(1, "e"))
    },
    // 25 toimi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 2, add: "n" },
            ..consonant_class(25, "toimi", Shape::new(&["mi"]), StemRule::replace(1, "e"))
        },
        2,
    ),
    // 26 pieni
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 1, add: "" },
            genitive_plural: GenitivePlural::PartitiveEn,
            ..consonant_class(26, "pieni", Shape::new(&["li", "ni", "ri"]), StemRule::replace(1, "e"))
        },
        0,
    ),
    // 27 käsi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 2, add: "t" },
            oblique: ObliqueRule::FromLemma { strip: 0, add: "" },
            ..fixed_gradation(
                consonant_class(27, "k\u{00E4}si", Shape::new(&["si"]), StemRule::replace(2, "te")),
                GradationPattern::TD,
            )
        },
        2,
    ),
    // 28 kynsi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 2, add: "t" },
            oblique: ObliqueRule::FromLemma { strip: 0, add: "" },
            ..fixed_gradation(
                consonant_class(
                    28,
                    "kynsi",
                    Shape::new(&["nsi", "rsi", "lsi"]),
                    StemRule::replace(2, "te"),
                ),
                GradationPattern::NtNn,
            )
        },
        2,
    ),
    // 29 lapsi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 3, add: "s" },
            genitive_plural: GenitivePlural::PartitiveEn,
            ..consonant_class(29, "lapsi", Shape::new(&["psi"]), StemRule::replace(1, "e"))
        },
        2,
    ),
    // 30 veitsi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 3, add: "s" },
            ..consonant_class(30, "veitsi", Shape::new(&["tsi"]), StemRule::replace(1, "e"))
        },
        2,
    ),
    // 31 kaksi
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 3, add: "h" },
            oblique: ObliqueRule::FromLemma { strip: 0, add: "" },
            ..fixed_gradation(
                consonant_class(31, "kaksi", Shape::new(&["ksi"]), StemRule::replace(3, "hte")),
                GradationPattern::TD,
            )
        },
        2,
    ),
    // 32 sisar
    with_gradation(
        consonant_class(
            32,
            "sisar",
            Shape::new(&["ar", "\u{00E4}r"]).syllables(Syllables::AtLeast(2)),
            StemRule::replace(0, "e"),
        ),
        GradationKind::Inverse,
    ),
    // 33 kytkin
    with_gradation(
        consonant_class(33, "kytkin", Shape::new(&["in"]), StemRule::replace(1, "me")),
        GradationKind::Inverse,
    ),
    // 34 onneton
    specificity(
        with_gradation(
            consonant_class(
                34,
                "onneton",
                Shape::new(&["ton", "t\u{00F6}n"]),
                StemRule::replace(1, "mA"),
            ),
            GradationKind::Inverse,
        ),
        2,
    ),
    // 35 lämmin
    specificity(
        with_gradation(
            consonant_class(35, "l\u{00E4}mmin", Shape::new(&["min"]), StemRule::replace(1, "mA")),
            GradationKind::Inverse,
        ),
        2,
    ),
    // 36 sisin
    specificity(
        fixed_gradation(
            consonant_class(36, "sisin", Shape::new(&["in"]), StemRule::replace(1, "mpA")),
            GradationPattern::MpMm,
        ),
        0,
    ),
    // 37 vasen
    specificity(
        fixed_gradation(
            consonant_class(37, "vasen", Shape::new(&["vasen"]), StemRule::replace(1, "mpA")),
            GradationPattern::MpMm,
        ),
        3,
    ),
    // 38 nainen
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 3, add: "s" },
            genitive_plural: GenitivePlural::PartitiveEn,
            ..consonant_class(38, "nainen", Shape::new(&["nen"]), StemRule::replace(3, "se"))
        },
        2,
    ),
    // 39 vastaus
    ClassRecord {
        genitive_plural: GenitivePlural::PartitiveEn,
        ..consonant_class(39, "vastaus", Shape::new(&["us", "ys"]), StemRule::replace(1, "kse"))
    },
    // 40 kalleus
    ClassRecord {
        partitive: PartitiveRule::Consonant { strip: 1, add: "t" },
        oblique: ObliqueRule::FromLemma { strip: 1, add: "ksi" },
        ..fixed_gradation(
            consonant_class(
                40,
                "kalleus",
                Shape::new(&["eus", "eys", "uus", "yys", "ous", "aus", "\u{00E4}ys"]),
                StemRule::replace(1, "te"),
            ),
            GradationPattern::TD,
        )
    },
    // 41 vieras
    seen_illative(with_gradation(
        consonant_class(
            41,
            "vieras",
            Shape::new(&["as", "\u{00E4}s", "es", "is"]),
            StemRule::lengthened(1),
        ),
        GradationKind::Inverse,
    )),
    // 42 mies
    specificity(
        ClassRecord {
            genitive_plural: GenitivePlural::PartitiveEn,
            ..consonant_class(42, "mies", Shape::new(&["ies"]), StemRule::replace(1, "he"))
        },
        2,
    ),
    // 43 ohut
    ClassRecord {
        illative_plural: IllativePlural::Hin,
        ..den_plural(with_gradation(
            consonant_class(43, "ohut", Shape::new(&["ut", "yt"]), StemRule::replace(1, "e")),
            GradationKind::Inverse,
        ))
    },
    // 44 kevät
    seen_illative(with_gradation(
        consonant_class(44, "kev\u{00E4}t", Shape::new(&["\u{00E4}t", "at"]), StemRule::lengthened(1)),
        GradationKind::Inverse,
    )),
    // 45 kahdeksas
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 1, add: "t" },
            oblique: ObliqueRule::FromLemma { strip: 1, add: "nsi" },
            ..fixed_gradation(
                consonant_class(
                    45,
                    "kahdeksas",
                    Shape::new(&["as", "\u{00E4}s", "es"]),
                    StemRule::replace(1, "nte"),
                ),
                GradationPattern::NtNn,
            )
        },
        0,
    ),
    // 46 tuhat
    specificity(
        ClassRecord {
            oblique: ObliqueRule::FromLemma { strip: 1, add: "nsi" },
            ..fixed_gradation(
                consonant_class(46, "tuhat", Shape::new(&["hat"]), StemRule::replace(1, "nte")),
                GradationPattern::NtNn,
            )
        },
        2,
    ),
    // 47 kuollut
    specificity(
        seen_illative(consonant_class(
            47,
            "kuollut",
            Shape::new(&["nut", "nyt", "lut", "lyt", "rut", "ryt", "sut", "syt"]),
            StemRule::replace(2, "ee"),
        )),
        2,
    ),
    // 48 hame
    specificity(
        ClassRecord {
            partitive: PartitiveRule::Consonant { strip: 0, add: "t" },
            ..seen_illative(with_gradation(
                consonant_class(48, "hame", Shape::new(&["e"]), StemRule::replace(0, "e")),
                GradationKind::Inverse,
            ))
        },
        0,
    ),
    // 49 askel
    with_gradation(
        consonant_class(
            49,
            "askel",
            Shape::new(&["el", "al", "ol", "ul"]),
            StemRule::replace(0, "e"),
        ),
        GradationKind::Inverse,
    ),
    // 50, 51: compounds, never proposed by shape
    vowel_class(50, "isoisä", Shape::new(&[])),
    vowel_class(51, "nuorimies", Shape::new(&[])),
];
