//! Antenna Switch Daemon
//!
//! Entry point: claims the select bus, loads the control page, and serves
//! the JSON API. Any initialization failure aborts startup with a
//! non-zero exit; once the server is up, hardware access cannot fail
//! per-request.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use antenna_switch::config::{DEFAULT_HTTP_PORT, DEFAULT_TEMPLATE_PATH};
use antenna_switch::server;
use antenna_switch::switch::SwitchService;

/// Web-controlled 8-channel RF antenna relay switch
#[derive(Debug, Parser)]
#[command(name = "antenna-switchd", version, about)]
struct Args {
    /// HTTP listen port
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,

    /// Path of the HTML control page
    #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
    template: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        "antenna-switchd starting"
    );

    let page = fs::read_to_string(&args.template)
        .with_context(|| format!("loading control page {}", args.template.display()))?;

    let encoder = backend::claim_encoder().context("claiming the select bus")?;
    let service = Arc::new(SwitchService::new(encoder));

    server::run(args.port, service, Arc::new(page))?;
    Ok(())
}

#[cfg(feature = "rpi")]
mod backend {
    //! Real select lines on the Pi's GPIO header.

    use antenna_switch::config::pins;
    use antenna_switch::hal::gpio::rpi::{self, RpiLine};
    use antenna_switch::switch::ChannelEncoder;

    pub fn claim_encoder() -> anyhow::Result<ChannelEncoder<RpiLine>> {
        let gpio = rpi::open()?;
        let lines = [
            RpiLine::claim(&gpio, pins::SELECT_A)?,
            RpiLine::claim(&gpio, pins::SELECT_B)?,
            RpiLine::claim(&gpio, pins::SELECT_C)?,
        ];
        tracing::info!(
            a = pins::SELECT_A,
            b = pins::SELECT_B,
            c = pins::SELECT_C,
            "select bus claimed"
        );
        Ok(ChannelEncoder::new(lines))
    }
}

#[cfg(not(feature = "rpi"))]
mod backend {
    //! Simulated select lines for bench testing off-target.

    use antenna_switch::hal::gpio::SimulatedLine;
    use antenna_switch::switch::ChannelEncoder;

    pub fn claim_encoder() -> anyhow::Result<ChannelEncoder<SimulatedLine>> {
        tracing::warn!("built without the rpi feature; driving simulated select lines");
        Ok(ChannelEncoder::new([
            SimulatedLine::new("A"),
            SimulatedLine::new("B"),
            SimulatedLine::new("C"),
        ]))
    }
}
