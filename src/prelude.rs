//! WiFi channels crate prelude
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

pub use crate::channels::{WiFiChannel, WiFiChannelPair, WiFiChannels};

pub use crate::ghz5::WiFiChannelsGhz5;

pub use crate::country::Country;

pub use crate::config::Config as ChannelConfig;

pub use crate::error::ChannelError;
