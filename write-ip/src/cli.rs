use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::resolve::UdpProbe;
use crate::util;

#[derive(Parser, Debug)]
#[command(name = "write-ip")]
#[command(version, about = "Save this machine's outbound-facing IPv4 address to ip.json", long_about = None)]
struct Cli {}

pub fn cli() -> Result<()> {
    Cli::parse();
    util::logging::init_tracing();

    let config = Config::default();
    let probe = UdpProbe::new(config.target);

    let ip = crate::run(&probe, &config)?;
    println!("{}", crate::confirmation_line(&ip, &config));

    Ok(())
}
