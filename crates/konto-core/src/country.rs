//! # Country Tags — Single Source of Truth
//!
//! Defines the `Country` enum used across the entire workspace. This is the
//! ONE definition every rule table and layout table dispatches on, and every
//! `match` over it must be exhaustive — adding a country forces each consumer
//! to either register it or explicitly decline it.
//!
//! Not every tag is IBAN-capable: a handful of non-IBAN countries are part of
//! the enum so that "no codec registered for this country" is a reachable,
//! testable condition rather than a dead error arm.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A country whose account numbers this workspace knows about.
///
/// The tag carries no behavior of its own. Which checksum applies, which
/// fields exist, and how the IBAN is assembled all live in per-country
/// constant tables keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// Albania (IBAN prefix AL).
    Albania,
    /// Andorra (IBAN prefix AD).
    Andorra,
    /// Australia — no IBAN scheme.
    Australia,
    /// Austria (IBAN prefix AT).
    Austria,
    /// Bahrain (IBAN prefix BH).
    Bahrain,
    /// Belgium (IBAN prefix BE).
    Belgium,
    /// Bosnia and Herzegovina (IBAN prefix BA).
    BosniaAndHerzegovina,
    /// Canada — no IBAN scheme.
    Canada,
    /// Croatia (IBAN prefix HR).
    Croatia,
    /// Cyprus (IBAN prefix CY).
    Cyprus,
    /// Czech Republic (IBAN prefix CZ).
    CzechRepublic,
    /// Denmark (IBAN prefix DK).
    Denmark,
    /// Dominican Republic (IBAN prefix DO).
    DominicanRepublic,
    /// Estonia (IBAN prefix EE).
    Estonia,
    /// Faroe Islands (IBAN prefix FO).
    FaroeIslands,
    /// Finland (IBAN prefix FI).
    Finland,
    /// France (IBAN prefix FR).
    France,
    /// Georgia (IBAN prefix GE).
    Georgia,
    /// Germany (IBAN prefix DE).
    Germany,
    /// Greece (IBAN prefix GR).
    Greece,
    /// Greenland (IBAN prefix GL).
    Greenland,
    /// Hungary (IBAN prefix HU).
    Hungary,
    /// Israel (IBAN prefix IL).
    Israel,
    /// Italy (IBAN prefix IT).
    Italy,
    /// Japan — no IBAN scheme.
    Japan,
    /// Kazakhstan (IBAN prefix KZ).
    Kazakhstan,
    /// Kuwait (IBAN prefix KW).
    Kuwait,
    /// Lebanon (IBAN prefix LB).
    Lebanon,
    /// Liechtenstein (IBAN prefix LI).
    Liechtenstein,
    /// Lithuania (IBAN prefix LT).
    Lithuania,
    /// Luxembourg (IBAN prefix LU).
    Luxembourg,
    /// Mauritania (IBAN prefix MR).
    Mauritania,
    /// Mauritius (IBAN prefix MU).
    Mauritius,
    /// Monaco (IBAN prefix MC).
    Monaco,
    /// Montenegro (IBAN prefix ME).
    Montenegro,
    /// New Zealand — no IBAN scheme.
    NewZealand,
    /// Norway (IBAN prefix NO).
    Norway,
    /// Poland (IBAN prefix PL).
    Poland,
    /// Portugal (IBAN prefix PT).
    Portugal,
    /// San Marino (IBAN prefix SM).
    SanMarino,
    /// Saudi Arabia (IBAN prefix SA).
    SaudiArabia,
    /// Serbia (IBAN prefix RS).
    Serbia,
    /// Slovakia (IBAN prefix SK).
    Slovakia,
    /// Slovenia (IBAN prefix SI).
    Slovenia,
    /// Spain (IBAN prefix ES).
    Spain,
    /// Sweden (IBAN prefix SE).
    Sweden,
    /// Switzerland (IBAN prefix CH).
    Switzerland,
    /// United Arab Emirates (IBAN prefix AE).
    UnitedArabEmirates,
    /// United Kingdom (IBAN prefix GB).
    UnitedKingdom,
    /// United States — no IBAN scheme.
    UnitedStates,
}

/// The number of country tags.
pub const COUNTRY_COUNT: usize = 50;

impl Country {
    /// All country tags, in enum declaration order.
    pub const ALL: [Country; COUNTRY_COUNT] = [
        Self::Albania,
        Self::Andorra,
        Self::Australia,
        Self::Austria,
        Self::Bahrain,
        Self::Belgium,
        Self::BosniaAndHerzegovina,
        Self::Canada,
        Self::Croatia,
        Self::Cyprus,
        Self::CzechRepublic,
        Self::Denmark,
        Self::DominicanRepublic,
        Self::Estonia,
        Self::FaroeIslands,
        Self::Finland,
        Self::France,
        Self::Georgia,
        Self::Germany,
        Self::Greece,
        Self::Greenland,
        Self::Hungary,
        Self::Israel,
        Self::Italy,
        Self::Japan,
        Self::Kazakhstan,
        Self::Kuwait,
        Self::Lebanon,
        Self::Liechtenstein,
        Self::Lithuania,
        Self::Luxembourg,
        Self::Mauritania,
        Self::Mauritius,
        Self::Monaco,
        Self::Montenegro,
        Self::NewZealand,
        Self::Norway,
        Self::Poland,
        Self::Portugal,
        Self::SanMarino,
        Self::SaudiArabia,
        Self::Serbia,
        Self::Slovakia,
        Self::Slovenia,
        Self::Spain,
        Self::Sweden,
        Self::Switzerland,
        Self::UnitedArabEmirates,
        Self::UnitedKingdom,
        Self::UnitedStates,
    ];

    /// Returns the snake_case identifier used in serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Albania => "albania",
            Self::Andorra => "andorra",
            Self::Australia => "australia",
            Self::Austria => "austria",
            Self::Bahrain => "bahrain",
            Self::Belgium => "belgium",
            Self::BosniaAndHerzegovina => "bosnia_and_herzegovina",
            Self::Canada => "canada",
            Self::Croatia => "croatia",
            Self::Cyprus => "cyprus",
            Self::CzechRepublic => "czech_republic",
            Self::Denmark => "denmark",
            Self::DominicanRepublic => "dominican_republic",
            Self::Estonia => "estonia",
            Self::FaroeIslands => "faroe_islands",
            Self::Finland => "finland",
            Self::France => "france",
            Self::Georgia => "georgia",
            Self::Germany => "germany",
            Self::Greece => "greece",
            Self::Greenland => "greenland",
            Self::Hungary => "hungary",
            Self::Israel => "israel",
            Self::Italy => "italy",
            Self::Japan => "japan",
            Self::Kazakhstan => "kazakhstan",
            Self::Kuwait => "kuwait",
            Self::Lebanon => "lebanon",
            Self::Liechtenstein => "liechtenstein",
            Self::Lithuania => "lithuania",
            Self::Luxembourg => "luxembourg",
            Self::Mauritania => "mauritania",
            Self::Mauritius => "mauritius",
            Self::Monaco => "monaco",
            Self::Montenegro => "montenegro",
            Self::NewZealand => "new_zealand",
            Self::Norway => "norway",
            Self::Poland => "poland",
            Self::Portugal => "portugal",
            Self::SanMarino => "san_marino",
            Self::SaudiArabia => "saudi_arabia",
            Self::Serbia => "serbia",
            Self::Slovakia => "slovakia",
            Self::Slovenia => "slovenia",
            Self::Spain => "spain",
            Self::Sweden => "sweden",
            Self::Switzerland => "switzerland",
            Self::UnitedArabEmirates => "united_arab_emirates",
            Self::UnitedKingdom => "united_kingdom",
            Self::UnitedStates => "united_states",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| crate::error::ValidationError::UnknownCountryName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_unique() {
        assert_eq!(Country::ALL.len(), COUNTRY_COUNT);
        let mut seen = std::collections::BTreeSet::new();
        for c in Country::ALL {
            assert!(seen.insert(c), "duplicate tag {c}");
        }
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for c in Country::ALL {
            let parsed: Country = c.as_str().parse().expect("parse back");
            assert_eq!(parsed, c);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("atlantis".parse::<Country>().is_err());
        assert!("Germany".parse::<Country>().is_err()); // case-sensitive
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Country::BosniaAndHerzegovina).unwrap();
        assert_eq!(json, r#""bosnia_and_herzegovina""#);
        let back: Country = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Country::BosniaAndHerzegovina);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Country::CzechRepublic.to_string(), "czech_republic");
        assert_eq!(Country::Germany.to_string(), "germany");
    }
}
