use clap::Parser;
use quickdex::opener::SystemOpener;
use quickdex_core::config::Config;
use quickdex_fetch::{FileSource, HttpSource, IndexLoader, IndexSource};
use quickdex_tui::{theme::Theme, App};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "quickdex", about = "quickdex — quick-open search for a site's pages")]
struct Cli {
    /// Search index URL or local file path (overrides the config file).
    #[arg(long)]
    index: Option<String>,

    /// Run a single query without the TUI and print matches to stdout.
    #[arg(long)]
    query: Option<String>,

    /// Write debug logs to /tmp/quickdex-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/quickdex-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("quickdex debug log started — tail -f /tmp/quickdex-debug.log");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());

    let location = cli
        .index
        .or_else(|| {
            let url = config.index.url.trim();
            (!url.is_empty()).then(|| url.to_string())
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no search index configured; pass --index <url-or-path> or set index.url in the config file"
            )
        })?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .build()?;

    if location.starts_with("http://") || location.starts_with("https://") {
        let source = HttpSource::new(&location)?;
        run_with(cli.query, config, location, source, runtime)
    } else {
        let source = FileSource::new(&location);
        run_with(cli.query, config, location, source, runtime)
    }
}

/// Hand off to headless or TUI mode once the source type is settled.
fn run_with<S: IndexSource>(
    query: Option<String>,
    config: Config,
    location: String,
    source: S,
    runtime: tokio::runtime::Runtime,
) -> anyhow::Result<()> {
    let loader = IndexLoader::new(source, runtime.handle().clone());

    if let Some(query) = query {
        return quickdex::headless::run(&runtime, &loader, &location, &query);
    }

    let theme = Theme::by_name(&config.ui.theme);
    let opener = SystemOpener::new(&location);
    App::new(config, theme, Arc::new(loader), Box::new(opener)).run()
}
