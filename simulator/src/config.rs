use anyhow::Context;
use metrocore::line::LineDescriptor;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime settings for the streaming driver. The line table is the only
/// part that comes from a file; the rest arrives on the command line.
#[derive(Clone, Debug)]
pub struct SimulatorConfig {
    pub port: u16,
    /// Real milliseconds per simulated hour; constant while a session runs.
    pub tick_millis: u64,
    /// Generator seed; entropy when absent.
    pub seed: Option<u64>,
    pub line: LineDescriptor,
}

impl SimulatorConfig {
    /// Build from CLI arguments with the built-in Línea 4A profile table.
    pub fn from_args(port: u16, tick_secs: u64, seed: Option<u64>) -> Self {
        Self {
            port,
            tick_millis: tick_secs.max(1) * 1_000,
            seed,
            line: LineDescriptor::default(),
        }
    }

    /// Replace the built-in line table with a YAML file, validated on load.
    pub fn load<P: AsRef<Path>>(
        path: P,
        port: u16,
        tick_secs: u64,
        seed: Option<u64>,
    ) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading line config {}", path_ref.display()))?;
        let line: LineDescriptor = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing line config {}", path_ref.display()))?;
        line.validate()
            .with_context(|| format!("validating line config {}", path_ref.display()))?;
        Ok(Self {
            port,
            tick_millis: tick_secs.max(1) * 1_000,
            seed,
            line,
        })
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}
