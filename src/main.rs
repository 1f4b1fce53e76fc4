use clap::Parser;
use std::path::Path;
use std::time::Duration;
use wbgtwatch::application::localize::{localize_report, localize_snapshot};
use wbgtwatch::cli::commands::{Cli, Commands};
use wbgtwatch::domain::entities::report::LocationSnapshot;
use wbgtwatch::domain::values::feed_kind::FeedKind;
use wbgtwatch::domain::values::locale::Locale;
use wbgtwatch::infrastructure::config::WatchConfig;
use wbgtwatch::WbgtWatch;

fn init_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match WatchConfig::load_with_env(cli.config.as_deref().map(Path::new)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    let watch = match WbgtWatch::new(config) {
        Ok(watch) => watch,
        Err(e) => {
            eprintln!("Error initializing wbgtwatch: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(watch, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(watch: WbgtWatch, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Report { location, lang } => {
            let locale: Locale = lang.parse()?;
            let mut snapshots = watch.snapshots(location.as_deref()).await?;
            for snapshot in &mut snapshots {
                localize_snapshot(snapshot, locale);
            }
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
        }
        Commands::Resolve { feed, location, lang } => {
            let kind: FeedKind = feed.parse()?;
            let locale: Locale = lang.parse()?;
            for loc in watch.select_locations(location.as_deref())? {
                let mut report = watch.resolve(&loc, kind).await;
                localize_report(&mut report, locale);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Watch { lang, cycles } => {
            let locale: Locale = lang.parse()?;
            let minutes = watch.config().update_interval_minutes;
            let secs = minutes
                .checked_mul(60)
                .filter(|secs| *secs > 0)
                .ok_or_else(|| format!("Invalid update interval: {minutes} minutes"))?;
            let period = Duration::from_secs(secs);
            let mut ticker = tokio::time::interval(period);
            let mut completed = 0u32;
            loop {
                ticker.tick().await;
                for mut snapshot in watch.snapshots(None).await? {
                    localize_snapshot(&mut snapshot, locale);
                    println!("{}", summary_line(&snapshot));
                }
                completed += 1;
                if cycles.is_some_and(|limit| completed >= limit) {
                    break;
                }
            }
        }
        Commands::Schedule { at } => {
            let now = match at {
                Some(at) => chrono::DateTime::parse_from_rfc3339(&at)
                    .map_err(|e| format!("Invalid --at '{at}': {e}"))?
                    .with_timezone(&chrono::Utc),
                None => chrono::Utc::now(),
            };
            let selection = watch.schedule(now);
            let output = serde_json::json!({
                "local_time": watch.local_time(now).format("%Y-%m-%d %H:%M").to_string(),
                "hour_tag": selection.hour_tag,
                "target_date": selection.target_date.format("%Y-%m-%d").to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Classify { wbgt, lang } => {
            let locale: Locale = lang.parse()?;
            let mut classification = watch.classify(wbgt)?;
            classification.level_label = locale.risk_label(classification.level).to_string();
            classification.advisory_text = locale.risk_advisory(classification.level).to_string();
            println!("{}", serde_json::to_string_pretty(&classification)?);
        }
        Commands::Locations => {
            println!("{}", serde_json::to_string_pretty(watch.locations())?);
        }
        Commands::CacheStatus => {
            let status = watch.cache_status(chrono::Utc::now()).await;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}

fn summary_line(snapshot: &LocationSnapshot) -> String {
    let heat = match snapshot.headline() {
        Some(report) => {
            let value = report.sample.as_ref().map(|s| s.value).unwrap_or_default();
            let label = report
                .classification
                .as_ref()
                .map(|c| c.level_label.as_str())
                .unwrap_or("-");
            format!("{value:.1}°C {label} [{} {}]", report.feed_kind, report.provenance)
        }
        None => "no WBGT data".to_string(),
    };
    let alert = match &snapshot.alert.alert {
        Some(status) => format!(
            "alert today: {} / tomorrow: {}",
            status.today.status_text, status.tomorrow.status_text
        ),
        None => format!("alert: {}", snapshot.alert.provenance),
    };
    format!("{}: {heat} | {alert}", snapshot.location.display_name)
}
