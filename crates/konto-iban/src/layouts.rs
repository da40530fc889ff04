//! # The Layout Registry
//!
//! Every supported country's [`IbanLayout`], plus the two lookups the
//! front door dispatches through: country tag → layout, and 2-letter
//! prefix → country tag. Both are total match-based functions over
//! `'static` records — immutable after link time and safe for concurrent
//! use without locking.
//!
//! Widths follow the official ISO 13616 registry. Countries whose BBAN
//! leads with letters (Bahrain, the Dominican Republic, Georgia,
//! Kazakhstan, Mauritius, the United Kingdom) simply carry those letters
//! in the affected field; the checksum layer expands them.

use konto_core::{AccountFamily, Country};

use crate::layout::{IbanLayout, NationalCheck};

macro_rules! layouts {
    ($($name:ident: $country:ident, $prefix:literal, $len:literal,
        $family:ident, $bank:literal / $branch:literal / $account:literal,
        $check:ident, $suffix:literal;)+) => {
        $(
            static $name: IbanLayout = IbanLayout {
                country: Country::$country,
                prefix: $prefix,
                iban_length: $len,
                family: AccountFamily::$family,
                bank_width: $bank,
                branch_width: $branch,
                account_width: $account,
                national_check: NationalCheck::$check,
                checksum_suffix: $suffix,
            };
        )+

        /// Look up the IBAN layout for a country.
        ///
        /// `None` means no IBAN scheme is registered for the country.
        pub fn layout_for(country: Country) -> Option<&'static IbanLayout> {
            match country {
                $(Country::$country => Some(&$name),)+
                _ => None,
            }
        }

        /// Resolve a 2-letter IBAN prefix to its country tag.
        pub fn country_for_prefix(prefix: &str) -> Option<Country> {
            match prefix {
                $($prefix => Some(Country::$country),)+
                _ => None,
            }
        }
    };
}

layouts! {
    ALBANIA: Albania, "AL", 28, BankAndAccount, 8 / 0 / 16, Absent, "102100";
    ANDORRA: Andorra, "AD", 24, BankBranchAndAccount, 4 / 4 / 12, Absent, "101300";
    AUSTRIA: Austria, "AT", 20, BankAndAccount, 5 / 0 / 11, Absent, "102900";
    BAHRAIN: Bahrain, "BH", 22, BankAndAccount, 4 / 0 / 14, Absent, "111700";
    BELGIUM: Belgium, "BE", 16, BankAndAccount, 3 / 0 / 9, Absent, "111400";
    BOSNIA_AND_HERZEGOVINA: BosniaAndHerzegovina, "BA", 20, BankBranchAndAccount, 3 / 3 / 10, Absent, "111000";
    CROATIA: Croatia, "HR", 21, BankAndAccount, 7 / 0 / 10, Absent, "172700";
    CYPRUS: Cyprus, "CY", 28, BankBranchAndAccount, 3 / 5 / 16, Absent, "123400";
    CZECH_REPUBLIC: CzechRepublic, "CZ", 24, BankBranchAndAccount, 4 / 6 / 10, Absent, "123500";
    DENMARK: Denmark, "DK", 18, BankAndAccount, 4 / 0 / 10, Absent, "132000";
    DOMINICAN_REPUBLIC: DominicanRepublic, "DO", 28, BankAndAccount, 4 / 0 / 20, Absent, "132400";
    ESTONIA: Estonia, "EE", 20, BankAndAccount, 2 / 0 / 14, Absent, "141400";
    FAROE_ISLANDS: FaroeIslands, "FO", 18, BankAndAccount, 4 / 0 / 10, Absent, "152400";
    FINLAND: Finland, "FI", 18, BankAndAccount, 6 / 0 / 8, Absent, "151800";
    FRANCE: France, "FR", 27, BankBranchAndAccount, 5 / 5 / 13, Absent, "152700";
    GEORGIA: Georgia, "GE", 22, BankAndAccount, 2 / 0 / 16, Absent, "161400";
    GERMANY: Germany, "DE", 22, BankAndAccount, 8 / 0 / 10, Absent, "131400";
    GREECE: Greece, "GR", 27, BankBranchAndAccount, 3 / 4 / 16, Absent, "162700";
    GREENLAND: Greenland, "GL", 18, BankAndAccount, 4 / 0 / 10, Absent, "162100";
    HUNGARY: Hungary, "HU", 28, BankBranchAndAccount, 3 / 4 / 17, Absent, "173000";
    ISRAEL: Israel, "IL", 23, BankBranchAndAccount, 3 / 3 / 13, Absent, "182100";
    ITALY: Italy, "IT", 27, BankBranchAndAccount, 5 / 5 / 12, LeadingCin, "182900";
    KAZAKHSTAN: Kazakhstan, "KZ", 20, BankAndAccount, 3 / 0 / 13, Absent, "203500";
    KUWAIT: Kuwait, "KW", 30, BankAndAccount, 4 / 0 / 22, Absent, "203200";
    LEBANON: Lebanon, "LB", 28, BankAndAccount, 4 / 0 / 20, Absent, "211100";
    LIECHTENSTEIN: Liechtenstein, "LI", 21, BankAndAccount, 5 / 0 / 12, Absent, "211800";
    LITHUANIA: Lithuania, "LT", 20, BankAndAccount, 5 / 0 / 11, Absent, "212900";
    LUXEMBOURG: Luxembourg, "LU", 20, BankAndAccount, 3 / 0 / 13, Absent, "213000";
    MAURITANIA: Mauritania, "MR", 27, BankBranchAndAccount, 5 / 5 / 13, Absent, "222700";
    MAURITIUS: Mauritius, "MU", 30, BankBranchAndAccount, 6 / 2 / 18, Absent, "223000";
    MONACO: Monaco, "MC", 27, BankBranchAndAccount, 5 / 5 / 13, Absent, "221200";
    MONTENEGRO: Montenegro, "ME", 22, BankAndAccount, 3 / 0 / 15, Absent, "221400";
    NORWAY: Norway, "NO", 15, BankAndAccount, 4 / 0 / 7, Absent, "232400";
    POLAND: Poland, "PL", 28, BankBranchAndAccount, 3 / 5 / 16, Absent, "252100";
    PORTUGAL: Portugal, "PT", 25, BankBranchAndAccount, 4 / 4 / 13, Absent, "252900";
    SAN_MARINO: SanMarino, "SM", 27, BankBranchAndAccount, 5 / 5 / 12, LeadingCin, "282200";
    SAUDI_ARABIA: SaudiArabia, "SA", 24, BankAndAccount, 2 / 0 / 18, Absent, "281000";
    SERBIA: Serbia, "RS", 22, BankAndAccount, 3 / 0 / 15, Absent, "272800";
    SLOVAKIA: Slovakia, "SK", 24, BankBranchAndAccount, 4 / 6 / 10, Absent, "282000";
    SLOVENIA: Slovenia, "SI", 19, BankAndAccount, 5 / 0 / 10, Absent, "281800";
    SPAIN: Spain, "ES", 24, BankBranchAndAccount, 4 / 4 / 12, Absent, "142800";
    SWEDEN: Sweden, "SE", 24, BankAndAccount, 3 / 0 / 17, Absent, "281400";
    SWITZERLAND: Switzerland, "CH", 21, BankAndAccount, 5 / 0 / 12, Absent, "121700";
    UNITED_ARAB_EMIRATES: UnitedArabEmirates, "AE", 23, BankAndAccount, 3 / 0 / 16, Absent, "101400";
    UNITED_KINGDOM: UnitedKingdom, "GB", 22, BicBranchAndAccount, 4 / 6 / 8, Absent, "161100";
}

/// All registered layouts, for table-driven tests and enumeration.
pub fn all_layouts() -> impl Iterator<Item = &'static IbanLayout> {
    Country::ALL.iter().filter_map(|&c| layout_for(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use konto_checksum::iso13616;

    #[test]
    fn test_registry_covers_the_iban_countries() {
        assert_eq!(all_layouts().count(), 45);
        // The deliberately unregistered tags really are unregistered.
        for country in [
            Country::Australia,
            Country::Canada,
            Country::Japan,
            Country::NewZealand,
            Country::UnitedStates,
        ] {
            assert!(layout_for(country).is_none());
        }
    }

    #[test]
    fn test_layouts_are_registered_under_their_own_tag() {
        for layout in all_layouts() {
            assert_eq!(
                layout_for(layout.country).map(|l| l.prefix),
                Some(layout.prefix)
            );
            assert_eq!(country_for_prefix(layout.prefix), Some(layout.country));
        }
    }

    #[test]
    fn test_prefixes_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for layout in all_layouts() {
            assert!(seen.insert(layout.prefix), "duplicate prefix {}", layout.prefix);
        }
    }

    #[test]
    fn test_widths_sum_to_iban_length() {
        for layout in all_layouts() {
            assert_eq!(
                4 + layout.bban_width(),
                layout.iban_length,
                "{}: slot widths disagree with the declared length",
                layout.prefix
            );
        }
    }

    #[test]
    fn test_suffix_literal_matches_prefix() {
        // Each suffix is the prefix letters expanded to digits plus "00".
        for layout in all_layouts() {
            let mut expected = String::new();
            for c in layout.prefix.chars() {
                let value = (c as u8 - b'A') + 10;
                expected.push_str(&value.to_string());
            }
            expected.push_str("00");
            assert_eq!(
                layout.checksum_suffix, expected,
                "{}: suffix literal drifted from the prefix",
                layout.prefix
            );
        }
    }

    #[test]
    fn test_suffix_agrees_with_checksum_expansion() {
        // Expanding the letters through the checksum engine gives the
        // same remainder as the stored literal.
        for layout in all_layouts() {
            let via_letters = iso13616::alnum_remainder(&format!("{}00", layout.prefix));
            let via_literal = iso13616::alnum_remainder(layout.checksum_suffix);
            assert_eq!(via_letters, via_literal, "{}", layout.prefix);
        }
    }

    #[test]
    fn test_iban_lengths_within_standard_bound() {
        for layout in all_layouts() {
            assert!(layout.iban_length >= 15 && layout.iban_length <= 34);
        }
    }
}
