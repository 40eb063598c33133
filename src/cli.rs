//! Command-line arguments of the demo binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "lazylayout",
    version,
    about = "Interactive demo of a debounced loading / error / success container"
)]
pub struct Cli {
    /// Layout config file (default: <config_dir>/lazylayout/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Put a pull-to-refresh container in the loading slot.
    #[arg(long)]
    pub refresh: bool,

    /// Swap panes instantly instead of cross-fading.
    #[arg(long = "no-animate")]
    pub no_animate: bool,

    /// Simulated fetch latency.
    #[arg(long = "latency-ms", value_name = "MS", default_value_t = 1200)]
    pub latency_ms: u64,

    /// Make every n-th fetch fail (0 never fails).
    #[arg(long = "fail-every", value_name = "N", default_value_t = 3)]
    pub fail_every: u32,

    /// Write logs here; the terminal belongs to the UI.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("lazylayout.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_demo_flags() {
        let cli = Cli::parse_from([
            "lazylayout",
            "--refresh",
            "--no-animate",
            "--latency-ms",
            "50",
            "--fail-every",
            "2",
            "--log-file",
            "/tmp/demo.log",
        ]);
        assert!(cli.refresh);
        assert!(cli.no_animate);
        assert_eq!(cli.latency_ms, 50);
        assert_eq!(cli.fail_every, 2);
        assert_eq!(cli.log_path(), PathBuf::from("/tmp/demo.log"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn defaults_log_to_temp_dir() {
        let cli = Cli::parse_from(["lazylayout"]);
        assert!(!cli.refresh);
        assert_eq!(cli.log_path(), std::env::temp_dir().join("lazylayout.log"));
    }
}
