//! WiFi channel / frequency tables
//!
//! Resolves centre frequencies (MHz) to WiFi channels using static,
//! frequency ordered tables, with helpers for the contiguous channel groups
//! of a band and country specific restrictions.
//!
//! ```
//! use wifi_channels::prelude::*;
//!
//! let ghz5 = WiFiChannelsGhz5::new();
//!
//! assert_eq!(36, ghz5.wifi_channel_by_frequency(5180).channel);
//! assert_eq!(WiFiChannel::UNKNOWN, ghz5.wifi_channel_by_frequency(5167));
//! ```
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

#![no_std]

#[cfg(any(test, feature="std"))]
extern crate std;

pub mod channels;

pub mod ghz5;

pub mod country;

pub mod config;

pub mod error;

pub mod prelude;
