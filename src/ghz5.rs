//! 5GHz WiFi channel table
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

use core::ops::RangeInclusive;

use log::debug;

use crate::channels::{WiFiChannel, WiFiChannelPair, WiFiChannels, MAX_BAND_CHANNELS};
use crate::config::Config;
use crate::country::Country;

/// 5GHz channels, ascending frequency.
///
/// Three contiguous groups: UNII-1/2 (36-64), UNII-2C (100-144), UNII-3 (149-165)
pub static CHANNELS_GHZ5: &[WiFiChannel] = &[
    // 36 - 64
    WiFiChannel::new(36, 5180),
    WiFiChannel::new(38, 5190),
    WiFiChannel::new(40, 5200),
    WiFiChannel::new(42, 5210),
    WiFiChannel::new(44, 5220),
    WiFiChannel::new(46, 5230),
    WiFiChannel::new(48, 5240),
    WiFiChannel::new(50, 5250),
    WiFiChannel::new(52, 5260),
    WiFiChannel::new(54, 5270),
    WiFiChannel::new(56, 5280),
    WiFiChannel::new(58, 5290),
    WiFiChannel::new(60, 5300),
    WiFiChannel::new(62, 5310),
    WiFiChannel::new(64, 5320),
    // 100 - 144
    WiFiChannel::new(100, 5500),
    WiFiChannel::new(102, 5510),
    WiFiChannel::new(104, 5520),
    WiFiChannel::new(106, 5530),
    WiFiChannel::new(108, 5540),
    WiFiChannel::new(110, 5550),
    WiFiChannel::new(112, 5560),
    WiFiChannel::new(114, 5570),
    WiFiChannel::new(116, 5580),
    WiFiChannel::new(118, 5590),
    WiFiChannel::new(120, 5600),
    WiFiChannel::new(122, 5610),
    WiFiChannel::new(124, 5620),
    WiFiChannel::new(126, 5630),
    WiFiChannel::new(128, 5640),
    WiFiChannel::new(130, 5650),
    WiFiChannel::new(132, 5660),
    WiFiChannel::new(134, 5670),
    WiFiChannel::new(136, 5680),
    WiFiChannel::new(138, 5690),
    WiFiChannel::new(140, 5700),
    WiFiChannel::new(142, 5710),
    WiFiChannel::new(144, 5720),
    // 149 - 165
    WiFiChannel::new(149, 5745),
    WiFiChannel::new(151, 5755),
    WiFiChannel::new(153, 5765),
    WiFiChannel::new(155, 5775),
    WiFiChannel::new(157, 5785),
    WiFiChannel::new(159, 5795),
    WiFiChannel::new(161, 5805),
    WiFiChannel::new(163, 5815),
    WiFiChannel::new(165, 5825),
];

/// Contiguous 5GHz channel groups
pub static PAIRS_GHZ5: &[WiFiChannelPair] = &[
    WiFiChannelPair::new(WiFiChannel::new(36, 5180), WiFiChannel::new(64, 5320)),
    WiFiChannelPair::new(WiFiChannel::new(100, 5500), WiFiChannel::new(144, 5720)),
    WiFiChannelPair::new(WiFiChannel::new(149, 5745), WiFiChannel::new(165, 5825)),
];

/// 5GHz channel resolver
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WiFiChannelsGhz5 {
    cfg: Config,
}

impl WiFiChannelsGhz5 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Channels available under the configured country code
    pub fn available_channels_default(&self) -> heapless::Vec<WiFiChannel, MAX_BAND_CHANNELS> {
        self.available_channels(&self.cfg.country_code)
    }
}

impl WiFiChannels for WiFiChannelsGhz5 {
    fn table(&self) -> &'static [WiFiChannel] {
        CHANNELS_GHZ5
    }

    fn wifi_channel_pairs(&self) -> &'static [WiFiChannelPair] {
        PAIRS_GHZ5
    }

    fn wifi_channel_pair_first(&self, country_code: &str) -> WiFiChannelPair {
        let default = PAIRS_GHZ5[0];

        let country = match country_code.parse::<Country>() {
            Ok(c) => c,
            Err(_) => {
                debug!("Unrecognised country code '{}', using default pair", country_code);
                return default;
            }
        };

        narrow_pair(&default, country.excluded_ghz5())
    }
}

/// Narrow a channel pair to the outermost channels not covered by `excluded`.
///
/// Returns the pair unchanged when every channel in it is excluded.
pub fn narrow_pair(pair: &WiFiChannelPair, excluded: &[RangeInclusive<u16>]) -> WiFiChannelPair {
    let mut permitted = CHANNELS_GHZ5
        .iter()
        .filter(|c| pair.contains(c.frequency) && !excluded.iter().any(|r| r.contains(&c.channel)));

    let first = match permitted.next() {
        Some(c) => *c,
        None => return *pair,
    };
    let second = permitted.last().copied().unwrap_or(first);

    WiFiChannelPair::new(first, second)
}
