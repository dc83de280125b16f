use clap::Parser;
use gpui::*;
use gpui_component::Root;
use photocraft::app::{LaunchOptions, Photocraft};
use photocraft::constants::DEFAULT_WINDOW_SIZE;
use photocraft::content::Locale;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "photocraft", version, about = "Photography showcase window")]
struct Args {
    /// Interface language for this run (en or ru)
    #[arg(long, value_parser = parse_locale)]
    locale: Option<Locale>,

    /// Route to open, e.g. "/" or "/#contact"
    #[arg(long, default_value = "/")]
    route: String,

    /// Skip downloading gallery images into the local cache
    #[arg(long)]
    no_prefetch: bool,

    /// Settings file to load and watch instead of the default location
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    value.parse::<Locale>().map_err(|e| e.to_string())
}

fn init_logger(verbose: bool) {
    let fallback = if verbose {
        "photocraft=debug,info"
    } else {
        "photocraft=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    tracing::info!(route = %args.route, "Starting photocraft");

    let options = LaunchOptions {
        settings_path: args.settings,
        locale: args.locale,
        route: args.route,
        no_prefetch: args.no_prefetch,
    };

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let (width, height) = DEFAULT_WINDOW_SIZE;
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("PhotoCraft".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let view = cx.new(|cx| Photocraft::new(options, window, cx));
            cx.new(|cx| Root::new(view.into(), window, cx))
        });

        if let Err(e) = opened {
            tracing::error!("Failed to open window: {e}");
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
