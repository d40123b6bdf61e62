// Consonant gradation: classification and application of stem alternations
//
// Gradation alternates a consonant cluster of the stem between a strong
// grade (kukka, pata) and a weak grade (kukan, padon). The closed set of
// alternations is fixed; classification tries them in table order, which
// lists longer clusters first so that `kk-k` wins over `k-` for `kukka`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use keinonto_core::character::is_vowel;

/// Which grade a stem should be rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Strong,
    Weak,
}

/// Consonant gradation pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradationPattern {
    /// No alternation.
    #[default]
    None,
    /// pp ~ p (kaappi : kaapin)
    PpP,
    /// tt ~ t (katto : katon)
    TtT,
    /// kk ~ k (kukka : kukan)
    KkK,
    /// mp ~ mm (kampa : kamman)
    MpMm,
    /// nt ~ nn (ranta : rannan)
    NtNn,
    /// nk ~ ng (kenkä : kengän)
    NkNg,
    /// lt ~ ll (kulta : kullan)
    LtLl,
    /// rt ~ rr (parta : parran)
    RtRr,
    /// p ~ v (tapa : tavan)
    PV,
    /// t ~ d (pata : padan)
    TD,
    /// k ~ j (särki : särjen)
    KJ,
    /// k ~ v (puku : puvun)
    KV,
    /// k ~ nothing (jalka : jalan)
    KZero,
}

/// All alternating patterns in classification order (longest clusters first).
pub const GRADATION_TABLE: [GradationPattern; 13] = [
    GradationPattern::PpP,
    GradationPattern::TtT,
    GradationPattern::KkK,
    GradationPattern::MpMm,
    GradationPattern::NtNn,
    GradationPattern::NkNg,
    GradationPattern::LtLl,
    GradationPattern::RtRr,
    GradationPattern::PV,
    GradationPattern::TD,
    GradationPattern::KJ,
    GradationPattern::KV,
    GradationPattern::KZero,
];

/// The strong and weak stems differ in a way no known alternation explains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unclassified gradation: no known alternation maps {strong:?} to {weak:?}")]
pub struct Unclassified {
    pub strong: String,
    pub weak: String,
}

impl GradationPattern {
    /// The strong-grade cluster.
    pub fn strong(self) -> &'static str {
        match self {
            GradationPattern::None => "",
            GradationPattern::PpP => "pp",
            GradationPattern::TtT => "tt",
            GradationPattern::KkK => "kk",
            GradationPattern::MpMm => "mp",
            GradationPattern::NtNn => "nt",
            GradationPattern::NkNg => "nk",
            GradationPattern::LtLl => "lt",
            GradationPattern::RtRr => "rt",
            GradationPattern::PV => "p",
            GradationPattern::TD => "t",
            GradationPattern::KJ | GradationPattern::KV | GradationPattern::KZero => "k",
        }
    }

    /// The weak-grade cluster.
    pub fn weak(self) -> &'static str {
        match self {
            GradationPattern::None => "",
            GradationPattern::PpP => "p",
            GradationPattern::TtT => "t",
            GradationPattern::KkK => "k",
            GradationPattern::MpMm => "mm",
            GradationPattern::NtNn => "nn",
            GradationPattern::NkNg => "ng",
            GradationPattern::LtLl => "ll",
            GradationPattern::RtRr => "rr",
            GradationPattern::PV => "v",
            GradationPattern::TD => "d",
            GradationPattern::KJ => "j",
            GradationPattern::KV => "v",
            GradationPattern::KZero => "",
        }
    }

    /// Textual code, e.g. `"kk-k"`, `"k-"` or `"none"`.
    pub fn code(self) -> &'static str {
        match self {
            GradationPattern::None => "none",
            GradationPattern::PpP => "pp-p",
            GradationPattern::TtT => "tt-t",
            GradationPattern::KkK => "kk-k",
            GradationPattern::MpMm => "mp-mm",
            GradationPattern::NtNn => "nt-nn",
            GradationPattern::NkNg => "nk-ng",
            GradationPattern::LtLl => "lt-ll",
            GradationPattern::RtRr => "rt-rr",
            GradationPattern::PV => "p-v",
            GradationPattern::TD => "t-d",
            GradationPattern::KJ => "k-j",
            GradationPattern::KV => "k-v",
            GradationPattern::KZero => "k-",
        }
    }

    pub fn is_none(self) -> bool {
        self == GradationPattern::None
    }

    /// Rewrite `stem` to the requested grade.
    ///
    /// The rightmost occurrence of the source cluster is replaced. A stem
    /// without the source cluster is returned unchanged, as is any stem
    /// under [`GradationPattern::None`].
    pub fn apply(self, stem: &str, grade: Grade) -> String {
        if self.is_none() {
            return stem.to_string();
        }
        match grade {
            Grade::Weak => replace_rightmost(stem, self.strong(), self.weak()),
            Grade::Strong if self.weak().is_empty() => insert_before_final_vowels(stem, self.strong()),
            Grade::Strong => replace_rightmost(stem, self.weak(), self.strong()),
        }
    }

    /// Classify the alternation between a strong and a weak stem.
    ///
    /// Identical stems are [`GradationPattern::None`]. Otherwise the first
    /// pattern in [`GRADATION_TABLE`] whose weakening of `strong` yields
    /// `weak` is returned.
    pub fn classify(strong: &str, weak: &str) -> Result<Self, Unclassified> {
        if strong == weak {
            return Ok(GradationPattern::None);
        }
        GRADATION_TABLE
            .into_iter()
            .find(|p| p.apply(strong, Grade::Weak) == weak)
            .ok_or_else(|| Unclassified {
                strong: strong.to_string(),
                weak: weak.to_string(),
            })
    }
}

fn replace_rightmost(stem: &str, from: &str, to: &str) -> String {
    match stem.rfind(from) {
        Some(pos) => {
            let mut out = String::with_capacity(stem.len() + to.len());
            out.push_str(&stem[..pos]);
            out.push_str(to);
            out.push_str(&stem[pos + from.len()..]);
            out
        }
        None => stem.to_string(),
    }
}

/// Insert `cluster` before the final run of identical vowels
/// (`jala` -> `jalka`, `koee` -> `kokee`).
fn insert_before_final_vowels(stem: &str, cluster: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let Some(&last) = chars.last() else {
        return stem.to_string();
    };
    if !is_vowel(last) {
        return stem.to_string();
    }
    let mut split = chars.len() - 1;
    while split > 0 && chars[split - 1] == last {
        split -= 1;
    }
    let mut out: String = chars[..split].iter().collect();
    out.push_str(cluster);
    out.extend(&chars[split..]);
    out
}

impl fmt::Display for GradationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unknown gradation code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gradation pattern: {0}")]
pub struct UnknownGradation(pub String);

impl FromStr for GradationPattern {
    type Err = UnknownGradation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        if code.is_empty() || code == "none" {
            return Ok(GradationPattern::None);
        }
        GRADATION_TABLE
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| UnknownGradation(s.to_string()))
    }
}

impl Serialize for GradationPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for GradationPattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
