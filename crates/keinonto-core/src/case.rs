// Grammatical case and number: the generation request key

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Finnish noun cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// nominatiivi (basic form)
    Nominative,
    /// genetiivi (-n)
    Genitive,
    /// partitiivi (-A, -tA)
    Partitive,
    /// inessiivi (-ssA)
    Inessive,
    /// elatiivi (-stA)
    Elative,
    /// illatiivi (-Vn, -hVn, -seen)
    Illative,
    /// adessiivi (-llA)
    Adessive,
    /// ablatiivi (-ltA)
    Ablative,
    /// allatiivi (-lle)
    Allative,
    /// essiivi (-nA)
    Essive,
    /// translatiivi (-ksi)
    Translative,
    /// instruktiivi (-n, plural only)
    Instructive,
    /// abessiivi (-ttA)
    Abessive,
    /// komitatiivi (-ine-, plural only)
    Comitative,
}

impl Case {
    /// All cases in paradigm order.
    pub const ALL: [Case; 14] = [
        Case::Nominative,
        Case::Genitive,
        Case::Partitive,
        Case::Inessive,
        Case::Elative,
        Case::Illative,
        Case::Adessive,
        Case::Ablative,
        Case::Allative,
        Case::Essive,
        Case::Translative,
        Case::Instructive,
        Case::Abessive,
        Case::Comitative,
    ];

    /// Lowercase English name, as used in form keys ("inessive").
    pub fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Partitive => "partitive",
            Case::Inessive => "inessive",
            Case::Elative => "elative",
            Case::Illative => "illative",
            Case::Adessive => "adessive",
            Case::Ablative => "ablative",
            Case::Allative => "allative",
            Case::Essive => "essive",
            Case::Translative => "translative",
            Case::Instructive => "instructive",
            Case::Abessive => "abessive",
            Case::Comitative => "comitative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = ParseError;

    /// Case-insensitive parse of the English case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Case::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| ParseError::UnknownCase(s.to_string()))
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    /// yksikkö
    Singular,
    /// monikko
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn name(self) -> &'static str {
        match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Number {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "singular" | "sg" => Ok(Number::Singular),
            "plural" | "pl" => Ok(Number::Plural),
            _ => Err(ParseError::UnknownNumber(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// FormKey
// ---------------------------------------------------------------------------

/// A (case, number) pair. Written as `case_number`, e.g. `inessive_plural`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FormKey {
    pub case: Case,
    pub number: Number,
}

impl FormKey {
    pub const fn new(case: Case, number: Number) -> Self {
        Self { case, number }
    }

    /// Every (case, number) combination, singular forms first per case.
    ///
    /// Includes combinations a given paradigm may leave undefined; callers
    /// filter through the rule table.
    pub fn all() -> impl Iterator<Item = FormKey> {
        Case::ALL
            .into_iter()
            .flat_map(|case| Number::ALL.into_iter().map(move |number| FormKey { case, number }))
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.case, self.number)
    }
}

impl FromStr for FormKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let (case_part, number_part) = lower
            .split_once('_')
            .ok_or_else(|| ParseError::InvalidFormKey(s.to_string()))?;
        let case = case_part
            .parse()
            .map_err(|_| ParseError::InvalidFormKey(s.to_string()))?;
        let number = number_part
            .parse()
            .map_err(|_| ParseError::InvalidFormKey(s.to_string()))?;
        Ok(FormKey { case, number })
    }
}

impl Serialize for FormKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FormKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_ignores_ascii_case() {
        assert_eq!("Inessive".parse::<Case>().unwrap(), Case::Inessive);
        assert_eq!("illative".parse::<Case>().unwrap(), Case::Illative);
    }

    #[test]
    fn parse_unknown_case() {
        let err = "vokatiivi".parse::<Case>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownCase(ref s) if s == "vokatiivi"));
    }

    #[test]
    fn parse_number_short_forms() {
        assert_eq!("sg".parse::<Number>().unwrap(), Number::Singular);
        assert_eq!("PLURAL".parse::<Number>().unwrap(), Number::Plural);
        assert!("dual".parse::<Number>().is_err());
    }

    #[test]
    fn form_key_display_and_parse() {
        let key = FormKey::new(Case::Nominative, Number::Singular);
        assert_eq!(key.to_string(), "nominative_singular");
        assert_eq!("nominative_singular".parse::<FormKey>().unwrap(), key);
        assert_eq!(
            "INESSIVE_PLURAL".parse::<FormKey>().unwrap(),
            FormKey::new(Case::Inessive, Number::Plural)
        );
    }

    #[test]
    fn form_key_rejects_bad_shape() {
        assert!(matches!(
            "nominative".parse::<FormKey>(),
            Err(ParseError::InvalidFormKey(_))
        ));
        assert!(matches!(
            "nominative_dual".parse::<FormKey>(),
            Err(ParseError::InvalidFormKey(_))
        ));
    }

    #[test]
    fn all_keys_cover_paradigm_space() {
        let keys: Vec<FormKey> = FormKey::all().collect();
        assert_eq!(keys.len(), 28);
        assert_eq!(keys[0], FormKey::new(Case::Nominative, Number::Singular));
        assert_eq!(keys[1], FormKey::new(Case::Nominative, Number::Plural));
    }

    #[test]
    fn form_key_serializes_as_string() {
        let key = FormKey::new(Case::Genitive, Number::Plural);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"genitive_plural\"");
        let back: FormKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
