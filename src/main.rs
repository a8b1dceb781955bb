//! glowdeck - A terminal control panel for networked RGB lighting controllers
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::sync::Arc;

use clap::Parser;

use gdeck_client::{ConfigStore, DeviceClient, EndpointResolver, FileStore, MemoryStore};
use gdeck_core::{format_memory, format_uptime, rgb_to_hex};

/// glowdeck - control panel for networked RGB lighting controllers
#[derive(Parser, Debug)]
#[command(name = "gdeck")]
#[command(about = "A terminal control panel for networked RGB lighting controllers", long_about = None)]
#[command(version)]
struct Args {
    /// Device address for this run only (overrides the stored one, not persisted)
    #[arg(value_name = "ADDRESS")]
    address: Option<String>,

    /// Fetch the device state once, print it, and exit
    #[arg(long)]
    status: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // A command-line address runs against an in-memory store seeded from the
    // saved configuration, so the override never touches the config file.
    let file_store = FileStore::default_location();
    let store: Arc<dyn ConfigStore> = match args.address {
        Some(address) => {
            let mut config = file_store.load();
            config.address = Some(address.trim().to_string());
            Arc::new(MemoryStore::with_config(config))
        }
        None => Arc::new(file_store),
    };

    let client = DeviceClient::new(EndpointResolver::new(store));

    if args.status {
        return print_status(&client).await;
    }

    gdeck_core::logging::init()?;
    gdeck_tui::run(client).await?;
    Ok(())
}

/// Print a one-shot summary of the current device state.
async fn print_status(client: &DeviceClient) -> color_eyre::Result<()> {
    let snapshot = match client.fetch_state().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Device unreachable: {}", e);
            std::process::exit(1);
        }
    };

    println!("Device:      {}", snapshot.device_name);
    println!("Power:       {}", if snapshot.power { "on" } else { "off" });
    println!("Color:       {}", rgb_to_hex(snapshot.rgb));
    println!("Brightness:  {}", snapshot.brightness);
    println!(
        "Effect:      {} (#{})",
        snapshot.effect_name, snapshot.effect
    );
    println!(
        "WiFi:        {}",
        if snapshot.wifi_connected {
            "connected"
        } else {
            "disconnected"
        }
    );
    println!("Uptime:      {}", format_uptime(snapshot.uptime));
    println!("Free memory: {}", format_memory(snapshot.free_memory));

    Ok(())
}
