use heapless::String;

use crate::country::Country;

/// Configuration for channel resolvers
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    /// ISO 3166 alpha-2 country code used to restrict available channels,
    /// empty for no restriction
    pub country_code: String<2>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            country_code: String::new(),
        }
    }
}

impl Config {
    pub fn country(country: Country) -> Self {
        Self {
            country_code: String::from(country.code()),
        }
    }
}
