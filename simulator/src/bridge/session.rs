use crate::config::SimulatorConfig;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use metrocore::simulation::SimulationClock;
use metrocore::telemetry::MetricsRecorder;
use metrocore::wire::{Command, TickSnapshot};
use std::sync::Arc;
use warp::ws::{Message, WebSocket};

/// Drive one viewer connection: apply start/stop commands and stream one
/// snapshot per simulated hour while the clock runs.
///
/// Every viewer gets its own independent simulated line; nothing here is
/// shared across connections. Closing the socket, a transport error, or a
/// failed send all stop and reset this session's clock.
pub async fn run(socket: WebSocket, config: Arc<SimulatorConfig>) {
    let (mut outbound, mut inbound) = socket.split();
    let mut clock = SimulationClock::new(config.line.clone(), config.seed);
    let metrics = MetricsRecorder::new();
    let mut ticker = tokio::time::interval(config.tick_period());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    debug!("viewer connected");

    loop {
        tokio::select! {
            received = inbound.next() => {
                match received {
                    Some(Ok(message)) => {
                        if message.is_close() {
                            debug!("viewer closed the stream");
                            break;
                        }
                        if let Ok(text) = message.to_str() {
                            match Command::parse(text) {
                                Some(Command::Start) => {
                                    // Full restart: the first snapshot goes out
                                    // now, the next one a whole period later.
                                    ticker.reset();
                                    let snapshot = clock.start();
                                    if !send_snapshot(&mut outbound, &snapshot, &metrics).await {
                                        break;
                                    }
                                }
                                Some(Command::Stop) => clock.stop(),
                                None => debug!("ignoring payload {:?}", text),
                            }
                        }
                    }
                    Some(Err(err)) => {
                        warn!("stream error: {}", err);
                        break;
                    }
                    None => break,
                }
            }
            _ = ticker.tick(), if clock.is_running() => {
                match clock.advance() {
                    Some(snapshot) => {
                        if !send_snapshot(&mut outbound, &snapshot, &metrics).await {
                            break;
                        }
                    }
                    None => metrics.record_skip(),
                }
            }
        }
    }

    clock.stop();
    let (sent, skipped, failures) = metrics.snapshot();
    info!(
        "session closed: {} snapshots, {} skipped ticks, {} failed sends",
        sent, skipped, failures
    );
}

async fn send_snapshot(
    outbound: &mut SplitSink<WebSocket, Message>,
    snapshot: &TickSnapshot,
    metrics: &MetricsRecorder,
) -> bool {
    let payload = match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(err) => {
            warn!("failed to serialize snapshot: {}", err);
            metrics.record_send_failure();
            return false;
        }
    };
    if outbound.send(Message::text(payload)).await.is_err() {
        debug!("viewer disconnected (send failed)");
        metrics.record_send_failure();
        return false;
    }
    metrics.record_snapshot();
    true
}
