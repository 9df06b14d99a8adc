use anyhow::Context;
use bridge::server::StreamBridge;
use clap::Parser;
use config::SimulatorConfig;
use metrocore::prelude::OPEN_HOUR;
use metrocore::simulation::SimulationClock;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod config;

#[derive(Parser)]
#[command(author, version, about = "Metro line telemetry streaming driver")]
struct Args {
    /// Run one simulated day offline and emit a baseline summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a line configuration from YAML
    #[arg(long)]
    line_config: Option<PathBuf>,
    /// WebSocket listen port
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Real seconds per simulated hour
    #[arg(long, default_value_t = 5)]
    tick_secs: u64,
    /// Seed for the passenger generator (entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Keep the WebSocket bridge alive for incoming viewers
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.line_config {
        SimulatorConfig::load(path, args.port, args.tick_secs, args.seed)?
    } else {
        SimulatorConfig::from_args(args.port, args.tick_secs, args.seed)
    };

    if args.offline {
        let report = run_offline_day(&config);
        print!("{}", report);
        let report_path = PathBuf::from("tools/data/offline_day.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }

    if args.serve {
        let bridge = StreamBridge::new(config);
        bridge.publish_status("WebSocket bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

/// Drive the clock through one full simulated day without a socket and
/// render the per-tick totals as a report.
fn run_offline_day(config: &SimulatorConfig) -> String {
    let mut clock = SimulationClock::new(config.line.clone(), config.seed);
    let mut snapshots = vec![clock.start()];
    for _ in 0..24 {
        if let Some(snapshot) = clock.advance() {
            snapshots.push(snapshot);
        }
    }
    clock.stop();

    let mut report = String::new();
    for snapshot in &snapshots {
        report.push_str(&format!(
            "{} {:02}:00 total={} alerts={}\n",
            snapshot.date, snapshot.hour, snapshot.total_line, snapshot.alerts.len()
        ));
    }
    report.push_str(&format!(
        "Offline day -> {} snapshots, {} stations, last hour {:02}:00\n",
        snapshots.len(),
        config.line.stations.len(),
        snapshots.last().map(|s| s.hour).unwrap_or(OPEN_HOUR)
    ));
    report
}
