use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wbgtwatch", about = "WBGT heat-stress monitor for Japanese stations")]
pub struct Cli {
    /// Config file (defaults to $WBGTWATCH_CONFIG or ./wbgtwatch.json)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve every feed for each location and print the snapshots
    Report {
        /// Only this location (display name or station code)
        #[arg(long)]
        location: Option<String>,
        /// Output language (en, ja)
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Resolve a single feed
    Resolve {
        /// Feed (current, forecast, timeseries, alert)
        feed: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// Poll all locations on the configured interval
    Watch {
        #[arg(long, default_value = "en")]
        lang: String,
        /// Stop after this many cycles
        #[arg(long)]
        cycles: Option<u32>,
    },
    /// Show which alert file is authoritative
    Schedule {
        /// Instant to evaluate (RFC3339, defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Classify a WBGT value in °C
    Classify {
        #[arg(allow_hyphen_values = true)]
        wbgt: f64,
        #[arg(long, default_value = "en")]
        lang: String,
    },
    /// List configured locations
    Locations,
    /// Show age and freshness of the cached feed files
    CacheStatus,
}
