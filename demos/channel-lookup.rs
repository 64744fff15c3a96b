//! 5GHz channel lookup example application
//
// https://github.com/rust-iot/wifi-channels
// Copyright 2021 Ryan Kurte

use log::{debug, info};

use structopt::StructOpt;

use wifi_channels::prelude::*;


#[derive(Debug, StructOpt)]
struct Options {
    /// Frequencies to resolve in MHz
    pub frequencies: Vec<u32>,

    #[structopt(long, default_value = "")]
    /// ISO 3166 country code used to filter available channels
    pub country: String,

    #[structopt(long)]
    /// List available channels for the country
    pub list: bool,

    #[structopt(long, default_value = "info")]
    /// Configure log level
    pub log_level: simplelog::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    // Load options
    let opts = Options::from_args();

    // Initialise logging
    let _ = simplelog::SimpleLogger::init(opts.log_level, simplelog::Config::default());

    let mut cfg = ChannelConfig::default();
    if !opts.country.is_empty() {
        let country: Country = opts.country.parse().map_err(ChannelError::from)?;
        cfg = ChannelConfig::country(country);
    }

    debug!("Using config: {:?}", cfg);

    let ghz5 = WiFiChannelsGhz5::with_config(cfg);

    if opts.list {
        for c in ghz5.available_channels_default() {
            info!("Channel {:3} at {} MHz", c.channel, c.frequency);
        }
    }

    for f in &opts.frequencies {
        match ghz5.find_by_frequency(*f) {
            Ok(c) if ghz5.channel_available(&ghz5.config().country_code, c.channel) => {
                info!("{} MHz: channel {}", f, c.channel);
            },
            Ok(c) => {
                info!("{} MHz: channel {} (not permitted in {})", f, c.channel, opts.country);
            },
            Err(e) => {
                info!("{} MHz: {}", f, e);
            },
        }
    }

    Ok(())
}
