use crate::bridge::session;
use crate::config::SimulatorConfig;
use std::{net::SocketAddr, sync::Arc, thread};
use tokio::runtime::Builder;
use warp::Filter;

/// Bridge that hosts the line descriptor endpoint and the streaming
/// WebSocket. Each connected viewer drives its own independent simulation.
pub struct StreamBridge {
    config: Arc<SimulatorConfig>,
}

impl StreamBridge {
    pub fn new(config: SimulatorConfig) -> Self {
        let config = Arc::new(config);
        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let routes = Self::routes(config.clone());
        thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(addr).await;
            });
        });
        Self { config }
    }

    /// Warp filter tree, split out so tests can drive it without a socket.
    fn routes(
        config: Arc<SimulatorConfig>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let config_filter = warp::any().map(move || config.clone());

        let ws_route = warp::path("ws")
            .and(warp::ws())
            .and(config_filter.clone())
            .map(|ws: warp::ws::Ws, config: Arc<SimulatorConfig>| {
                ws.on_upgrade(move |socket| session::run(socket, config))
            });

        let line_route = warp::path("line")
            .and(warp::get())
            .and(config_filter)
            .map(|config: Arc<SimulatorConfig>| warp::reply::json(&config.line));

        ws_route.or(line_route)
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {} ({} stations)", message, self.config.line.stations.len());
    }
}
