use clap::Parser;
use std::path::PathBuf;
use stok::headless::{self, HeadlessOptions, OutputFormat};
use stok_core::config::Config;

#[derive(Parser)]
#[command(name = "stok", about = "Stok — search and filter the product inventory sheet")]
struct Cli {
    /// Config file to use instead of ~/.config/stok/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sheet URL or local JSON file; overrides the configured source.
    #[arg(long)]
    source: Option<String>,

    /// Case-insensitive text matched against the searchable fields.
    #[arg(long, default_value = "")]
    search: String,

    /// Exact-match selection, e.g. `--filter DIVISI=Minuman`. Repeatable.
    #[arg(long = "filter", value_name = "FIELD=VALUE", value_parser = headless::parse_filter)]
    filters: Vec<(String, String)>,

    /// Print the distinct values of a filterable field instead of rows.
    #[arg(long, value_name = "FIELD")]
    options: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write debug logs to /tmp/stok-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/stok-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("stok debug log started — tail -f /tmp/stok-debug.log");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            eprintln!("warning: ignoring unreadable config ({err:#}); using built-in defaults");
            tracing::warn!(error = %err, "falling back to built-in config");
            Config::defaults()
        }),
    };

    let opts = HeadlessOptions {
        source: cli.source,
        search: cli.search,
        filters: cli.filters,
        options: cli.options,
        format: cli.format,
    };

    let stdout = std::io::stdout();
    headless::run(&opts, &config, &mut stdout.lock()).await
}
