//! Channel lookup errors
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

/// Reasons a channel lookup can miss
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// Frequency (MHz) is outside the band or channel pair being searched
    OutOfBand(u32),

    /// Frequency (MHz) is in range but falls between table entries
    NoChannel(u32),

    /// Channel number does not exist in the table
    UnknownChannel(u16),

    /// Country code not recognised
    UnknownCountry,
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::OutOfBand(mhz) => write!(f, "frequency {} MHz out of band", mhz),
            ChannelError::NoChannel(mhz) => write!(f, "no channel at {} MHz", mhz),
            ChannelError::UnknownChannel(ch) => write!(f, "unknown channel {}", ch),
            ChannelError::UnknownCountry => write!(f, "unknown country code"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}

impl From<strum::ParseError> for ChannelError {
    fn from(_e: strum::ParseError) -> Self {
        ChannelError::UnknownCountry
    }
}
