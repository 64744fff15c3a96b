//! WiFi channel types and the shared lookup API
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

use heapless::Vec;
use log::{trace, debug};

use crate::country::Country;
use crate::error::ChannelError;

/// Maximum number of channels held by a single band table
pub const MAX_BAND_CHANNELS: usize = 64;

/// A WiFi channel number and its centre frequency in MHz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiFiChannel {
    pub channel: u16,
    pub frequency: u32,
}

impl WiFiChannel {
    /// Sentinel returned when no channel matches
    pub const UNKNOWN: WiFiChannel = WiFiChannel { channel: 0, frequency: 0 };

    pub const fn new(channel: u16, frequency: u32) -> Self {
        Self { channel, frequency }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Default for WiFiChannel {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

/// Boundary channels of one contiguous band, `first` at the lower frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiFiChannelPair {
    pub first: WiFiChannel,
    pub second: WiFiChannel,
}

impl WiFiChannelPair {
    pub const fn new(first: WiFiChannel, second: WiFiChannel) -> Self {
        Self { first, second }
    }

    /// Check whether a frequency lies within the pair (inclusive)
    pub fn contains(&self, frequency: u32) -> bool {
        frequency >= self.first.frequency && frequency <= self.second.frequency
    }
}

impl From<(WiFiChannel, WiFiChannel)> for WiFiChannelPair {
    fn from(p: (WiFiChannel, WiFiChannel)) -> Self {
        Self::new(p.0, p.1)
    }
}

/// Lookup API over a static, frequency ordered channel table.
///
/// Implementors supply the table and band pairs, lookups are provided.
/// The `wifi_channel_*` methods signal a miss with [`WiFiChannel::UNKNOWN`],
/// the `find_*` methods report the reason as a [`ChannelError`].
pub trait WiFiChannels {
    /// Channel table, sorted by ascending frequency
    fn table(&self) -> &'static [WiFiChannel];

    /// Contiguous band boundaries, ascending
    fn wifi_channel_pairs(&self) -> &'static [WiFiChannelPair];

    /// First band pair adjusted for the provided country code
    fn wifi_channel_pair_first(&self, country_code: &str) -> WiFiChannelPair;

    /// Exact frequency lookup
    fn find_by_frequency(&self, frequency: u32) -> Result<WiFiChannel, ChannelError> {
        if !self.in_range(frequency) {
            return Err(ChannelError::OutOfBand(frequency));
        }

        let table = self.table();
        match table.binary_search_by_key(&frequency, |c| c.frequency) {
            Ok(i) => Ok(table[i]),
            Err(_) => Err(ChannelError::NoChannel(frequency)),
        }
    }

    /// Exact frequency lookup bounded by a channel pair
    fn find_by_frequency_in(&self, frequency: u32, pair: &WiFiChannelPair) -> Result<WiFiChannel, ChannelError> {
        if !pair.contains(frequency) {
            return Err(ChannelError::OutOfBand(frequency));
        }

        self.find_by_frequency(frequency)
    }

    /// Fetch the channel at exactly `frequency` MHz, or `UNKNOWN`
    fn wifi_channel_by_frequency(&self, frequency: u32) -> WiFiChannel {
        self.find_by_frequency(frequency).unwrap_or_else(|e| {
            trace!("Lookup miss: {}", e);
            WiFiChannel::UNKNOWN
        })
    }

    /// Fetch the channel at exactly `frequency` MHz within `pair`, or `UNKNOWN`
    fn wifi_channel_by_frequency_in(&self, frequency: u32, pair: &WiFiChannelPair) -> WiFiChannel {
        self.find_by_frequency_in(frequency, pair).unwrap_or_else(|e| {
            trace!("Lookup miss in {}-{}: {}", pair.first.channel, pair.second.channel, e);
            WiFiChannel::UNKNOWN
        })
    }

    /// Fetch a channel by number, or `UNKNOWN`
    fn wifi_channel_by_channel(&self, channel: u16) -> WiFiChannel {
        match self.table().iter().find(|c| c.channel == channel) {
            Some(c) => *c,
            None => {
                trace!("Lookup miss: {}", ChannelError::UnknownChannel(channel));
                WiFiChannel::UNKNOWN
            }
        }
    }

    fn wifi_channel_first(&self) -> WiFiChannel {
        self.table().first().copied().unwrap_or(WiFiChannel::UNKNOWN)
    }

    fn wifi_channel_last(&self) -> WiFiChannel {
        self.table().last().copied().unwrap_or(WiFiChannel::UNKNOWN)
    }

    /// Check whether a frequency falls within the span of the table
    fn in_range(&self, frequency: u32) -> bool {
        frequency >= self.wifi_channel_first().frequency && frequency <= self.wifi_channel_last().frequency
    }

    /// Channels permitted in the provided country, in table order.
    ///
    /// Unrecognised country codes are unrestricted.
    fn available_channels(&self, country_code: &str) -> Vec<WiFiChannel, MAX_BAND_CHANNELS> {
        let country = match country_code.parse::<Country>() {
            Ok(c) => Some(c),
            Err(_) => {
                debug!("Unrecognised country code '{}', using full table", country_code);
                None
            }
        };

        self.table()
            .iter()
            .filter(|c| country.map_or(true, |country| country.permits(c.channel)))
            .take(MAX_BAND_CHANNELS)
            .copied()
            .collect()
    }

    /// Check whether a channel is permitted in the provided country
    fn channel_available(&self, country_code: &str, channel: u16) -> bool {
        self.available_channels(country_code).iter().any(|c| c.channel == channel)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unknown_sentinel() {
        assert!(WiFiChannel::UNKNOWN.is_unknown());
        assert!(WiFiChannel::default().is_unknown());
        assert!(!WiFiChannel::new(36, 5180).is_unknown());
    }

    #[test]
    fn pair_contains_inclusive() {
        let pair = WiFiChannelPair::from((WiFiChannel::new(100, 5500), WiFiChannel::new(144, 5720)));

        assert!(pair.contains(5500));
        assert!(pair.contains(5600));
        assert!(pair.contains(5720));
        assert!(!pair.contains(5499));
        assert!(!pair.contains(5721));
        assert!(!pair.contains(2000));
    }
}
