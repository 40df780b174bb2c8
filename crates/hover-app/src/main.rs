mod app_state;
mod cli;
mod native;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use hover_config::schema::HoverConfig;
use hover_config::toml_loader::{create_default_config, default_config_path};
use hover_platform::single_instance::{self, InstanceMessage, InstanceRole};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- Hover crashed ---");
        eprintln!("{info}");
        eprintln!("Run with --log-level hover=debug for details.");
        eprintln!("---------------------\n");

        default_hook(info);
    }));
}

/// Config file to load and watch: the `--config` override, else the
/// platform default, created with documented defaults on first run.
fn resolve_config_path(args: &cli::Args) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(PathBuf::from(path));
    }
    let path = default_config_path().ok()?;
    if !path.exists() {
        if let Err(e) = create_default_config(&path) {
            eprintln!("hover: could not create default config: {e}");
        }
    }
    Some(path)
}

fn init_logging(args: &cli::Args, config: &HoverConfig) {
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("hover={}", config.logging.level.as_filter()));
    let filter = match directive.parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new("hover=info"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();
    let config_path = resolve_config_path(&args);

    let mut app = app_state::HoverApp::new(config_path, args.url.clone());
    init_logging(&args, app.config());

    tracing::info!("Hover v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = app.config_path() {
        tracing::info!("Using config: {}", path.display());
    }

    let message = InstanceMessage {
        files: args.existing_files(),
    };
    match single_instance::default_port_file()
        .and_then(|port_file| single_instance::acquire(&port_file, &message))
    {
        Ok(InstanceRole::Primary(server)) => app.set_instance_server(server),
        Ok(InstanceRole::Secondary) => {
            tracing::info!("Hover is already running");
            return;
        }
        Err(e) => tracing::warn!("single instance check failed, continuing: {e}"),
    }
    app.open_at_startup(message.files);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
