use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use spacewatch::{watch, App, ColorChoice, HttpFetcher, Settings};
use spacewatch_feeds::EndpointRegistry;

#[derive(Parser, Debug)]
#[command(name = "spacewatch", version)]
#[command(about = "Show the latest NOAA space-weather readings with threshold alerts")]
struct Args {
    /// Include extended data (GOES X-ray flux)
    #[arg(short, long, visible_alias = "extended")]
    all: bool,

    /// Refresh every SECONDS until interrupted
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    watch: Option<u64>,

    /// When to color alert/normal values
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Settings file (TOML, YAML or JSON, by extension)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Log to stderr so the report on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let settings = Settings::load(args.config.as_deref())?;
    // Color capability is fixed for the life of the process
    let renderer = args.color.renderer();

    let mut fetcher = HttpFetcher::builder();
    if let Some(timeout) = settings.timeout() {
        fetcher = fetcher.timeout(timeout);
    }

    let app = App::new(
        EndpointRegistry::new(&settings.feeds.base_url),
        fetcher.build()?,
        settings.thresholds(),
        renderer,
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let mut stdout = io::stdout();
        watch::run(
            &app,
            &mut stdout,
            args.all,
            args.watch.map(Duration::from_secs),
            watch::ctrl_c,
        )
        .await
    })
}
