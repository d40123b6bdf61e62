// Declension rule table: the 51 Kotus noun classes
//
// Classes are a closed `#[repr(u8)]` enum; each variant owns a static
// `ClassRecord` describing its shape, stem rules and plural scheme. The
// table is immutable and shared by every caller.

pub mod rules;
pub mod template;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use rules::{ClassRecord, GradationKind};
pub use template::{StemSlot, SuffixTemplate, suffix_for};

/// Version of the rule and gradation tables. Bumped whenever a change to
/// the tables could alter a generated form.
pub const RULE_TABLE_VERSION: u32 = 2;

/// A declension class id outside 1..=51.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid declension class: {0} (expected 1-51)")]
pub struct InvalidClass(pub String);

/// Kotus declension class, named after its model word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DeclensionClass {
    Valo = 1,
    Palvelu,
    Valtio,
    Laatikko,
    Risti,
    Paperi,
    Ovi,
    Nalle,
    Kala,
    Koira,
    Omena,
    Kulkija,
    Katiska,
    Solakka,
    Korkea,
    Vanhempi,
    Vapaa,
    Maa,
    Suo,
    Filee,
    Rose,
    Parfait,
    Tiili,
    Uni,
    Toimi,
    Pieni,
    Kasi,
    Kynsi,
    Lapsi,
    Veitsi,
    Kaksi,
    Sisar,
    Kytkin,
    Onneton,
    Lammin,
    Sisin,
    Vasen,
    Nainen,
    Vastaus,
    Kalleus,
    Vieras,
    Mies,
    Ohut,
    Kevat,
    Kahdeksas,
    Tuhat,
    Kuollut,
    Hame,
    Askel,
    /// Compound inflected in its last part only.
    CompoundLastPart,
    /// Compound inflected in both parts.
    CompoundBothParts,
}

impl DeclensionClass {
    /// All classes in id order.
    pub const ALL: [DeclensionClass; 51] = {
        use DeclensionClass::*;
        [
            Valo, Palvelu, Valtio, Laatikko, Risti, Paperi, Ovi, Nalle, Kala, Koira, Omena,
            Kulkija, Katiska, Solakka, Korkea, Vanhempi, Vapaa, Maa, Suo, Filee, Rose, Parfait,
            Tiili, Uni, Toimi, Pieni, Kasi, Kynsi, Lapsi, Veitsi, Kaksi, Sisar, Kytkin, Onneton,
            Lammin, Sisin, Vasen, Nainen, Vastaus, Kalleus, Vieras, Mies, Ohut, Kevat,
            Kahdeksas, Tuhat, Kuollut, Hame, Askel, CompoundLastPart, CompoundBothParts,
        ]
    };

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        let index = usize::from(id).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// The static rule record of this class.
    pub fn record(self) -> &'static ClassRecord {
        &rules::RECORDS[usize::from(self.id()) - 1]
    }

    /// Kotus model word (`kala`, `vieras`).
    pub fn example(self) -> &'static str {
        self.record().example
    }

    pub fn is_compound(self) -> bool {
        matches!(self, DeclensionClass::CompoundLastPart | DeclensionClass::CompoundBothParts)
    }
}

/// Candidate classes for a lemma, most plausible first.
///
/// Ordered by matched ending length (longer first), then specificity
/// (higher first), then class id. Compound classes are never proposed.
pub fn classes_for(lemma: &str) -> Vec<DeclensionClass> {
    let mut candidates: Vec<(usize, u8, DeclensionClass)> = DeclensionClass::ALL
        .into_iter()
        .filter(|class| !class.is_compound())
        .filter_map(|class| {
            let record = class.record();
            record
                .shape
                .matches(lemma)
                .map(|len| (len, record.specificity, class))
        })
        .collect();
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)).then(a.2.cmp(&b.2)));
    candidates.into_iter().map(|(_, _, class)| class).collect()
}

impl fmt::Display for DeclensionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.example())
    }
}

impl TryFrom<u8> for DeclensionClass {
    type Error = InvalidClass;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or_else(|| InvalidClass(id.to_string()))
    }
}

impl FromStr for DeclensionClass {
    type Err = InvalidClass;

    /// Accepts a class id (`"9"`) or a model word (`"kala"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::try_from(id);
        }
        let lower = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.example() == lower)
            .ok_or_else(|| InvalidClass(s.to_string()))
    }
}

impl Serialize for DeclensionClass {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for DeclensionClass {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u8::deserialize(deserializer)?;
        Self::try_from(id).map_err(serde::de::Error::custom)
    }
}
