//! Country specific 5GHz channel restrictions
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

use core::ops::RangeInclusive;

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Countries with known 5GHz channel allocations, by ISO 3166 alpha-2 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[strum(serialize = "AU")]
    Australia,
    #[strum(serialize = "CA")]
    Canada,
    #[strum(serialize = "CN")]
    China,
    #[strum(serialize = "DE")]
    Germany,
    #[strum(serialize = "FR")]
    France,
    #[strum(serialize = "GB")]
    UnitedKingdom,
    #[strum(serialize = "IL")]
    Israel,
    #[strum(serialize = "JP")]
    Japan,
    #[strum(serialize = "KR")]
    Korea,
    #[strum(serialize = "US")]
    UnitedStates,
}

/// No channels excluded
const NONE: &[RangeInclusive<u16>] = &[];

impl Country {
    /// 5GHz channel ranges not permitted in this country
    pub fn excluded_ghz5(&self) -> &'static [RangeInclusive<u16>] {
        match self {
            // Only W52 / W53 / W56, up to channel 140
            Country::Japan => &[142..=144, 149..=165],
            // U-NII-2C is not allocated
            Country::China => &[100..=144],
            Country::Israel => &[100..=165],
            // 142 is a 40MHz centre spanning 144
            Country::Korea => &[142..=144],
            _ => NONE,
        }
    }

    /// Check whether a 5GHz channel is permitted in this country
    pub fn permits(&self, channel: u16) -> bool {
        !self.excluded_ghz5().iter().any(|r| r.contains(&channel))
    }

    /// ISO 3166 alpha-2 code
    pub fn code(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parse_country_codes() {
        assert_eq!("JP".parse::<Country>(), Ok(Country::Japan));
        assert_eq!("jp".parse::<Country>(), Ok(Country::Japan));
        assert_eq!("Us".parse::<Country>(), Ok(Country::UnitedStates));

        assert!("".parse::<Country>().is_err());
        assert!("XX".parse::<Country>().is_err());
        assert!("JPN".parse::<Country>().is_err());
    }

    #[test]
    fn codes_round_trip() {
        for c in Country::iter() {
            assert_eq!(c.code().len(), 2);
            assert_eq!(c.code().parse::<Country>(), Ok(c));
        }
    }

    #[test]
    fn japan_restrictions() {
        let jp = Country::Japan;

        assert!(jp.permits(36));
        assert!(jp.permits(64));
        assert!(jp.permits(140));
        assert!(!jp.permits(142));
        assert!(!jp.permits(144));
        assert!(!jp.permits(149));
        assert!(!jp.permits(165));
    }

    #[test]
    fn korea_restrictions() {
        let kr = Country::Korea;

        assert!(kr.permits(140));
        assert!(!kr.permits(142));
        assert!(!kr.permits(144));
        assert!(kr.permits(149));
    }

    #[test]
    fn unrestricted_countries() {
        for c in &[Country::UnitedStates, Country::Germany, Country::Australia] {
            assert!(c.excluded_ghz5().is_empty());
            assert!(c.permits(144));
            assert!(c.permits(165));
        }
    }
}
