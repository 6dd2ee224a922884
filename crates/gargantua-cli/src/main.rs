//! gargantua CLI: browse the backend's module listing from the terminal

use clap::{Parser, Subcommand};
use gargantua_engine::{
    component_identifier, view_path, Config, ConfigError, HttpModuleSource, ModuleLister,
    ModuleSource, Route,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Terminal browser for backend modules
#[derive(Parser, Debug)]
#[command(name = "gargantua")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// API version folder (overrides the config file)
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// Log file for the TUI (default: gargantua.log in the temp dir)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui {
        /// Path to open first, e.g. /orders
        path: Option<String>,
    },

    /// Fetch the module listing and print it
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which detail view a path resolves to
    Resolve {
        /// Path such as /user_profile
        path: String,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None => run_tui(&cli, config, None),
        Some(Commands::Tui { ref path }) => run_tui(&cli, config, path.as_deref()),
        Some(Commands::List { json }) => {
            init_stderr_logging(cli.verbose);
            cmd_list(&config, json);
        }
        Some(Commands::Resolve { ref path }) => {
            init_stderr_logging(cli.verbose);
            cmd_resolve(&config, path);
        }
        Some(Commands::Config { json }) => cmd_config(&config, json),
    }
}

/// Load the config file (if any) and apply flag overrides.
fn effective_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(url) = &cli.api_url {
        config.api_base_url.clone_from(url);
    }
    if let Some(version) = &cli.api_version {
        config.api_version.clone_from(version);
    }
    Ok(config)
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_stderr_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .try_init();
}

/// The TUI owns the terminal, so logs go to a file.
fn init_file_logging(path: &Path, verbose: bool) -> std::io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("gargantua.log")
}

fn run_tui(cli: &Cli, config: Config, path: Option<&str>) {
    let log_file = cli.log_file.clone().unwrap_or_else(default_log_file);
    if let Err(e) = init_file_logging(&log_file, cli.verbose) {
        eprintln!("Error: cannot open log file {}: {e}", log_file.display());
        std::process::exit(1);
    }

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(gargantua_tui::run_tui(config, path)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_list(config: &Config, json: bool) {
    let source = HttpModuleSource::new(config);
    let mut lister = ModuleLister::new();
    info!(source = %source.describe(), "fetching module listing");

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(lister.mount(&source));

    if json {
        let links: Vec<_> = lister
            .links()
            .into_iter()
            .map(|(name, href)| serde_json::json!({ "name": name, "href": href }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&links).expect("failed to serialize")
        );
        return;
    }

    println!("Modules from {}\n", source.listing_url());
    for (name, href) in lister.links() {
        println!("  {name:<24} {href}");
    }
    println!();

    let count = lister.modules().len();
    println!("{count} module(s)");
}

fn cmd_resolve(config: &Config, path: &str) {
    let route = Route::parse(path);
    println!("Route:      {route}");

    let Some(module_name) = route.module_name() else {
        match route {
            Route::Home => println!("Home route, no detail view"),
            _ => println!("No route matches {path}"),
        }
        return;
    };

    let registry = gargantua_tui::views::default_registry(config);
    let registered = registry.contains(module_name);

    println!("Module:     {module_name}");
    println!("Identifier: {}", component_identifier(module_name));
    println!("View path:  {}", view_path(module_name, config.view_version()));
    println!("Registered: {}", if registered { "yes" } else { "no" });

    if !registered {
        std::process::exit(1);
    }
}

fn cmd_config(config: &Config, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(config).expect("failed to serialize")
        );
        return;
    }

    println!("api_base_url: {}", config.api_base_url);
    println!("api_version:  {}", config.api_version);
    println!("view_version: {}", config.view_version());
    println!("tick_rate_ms: {}", config.tick_rate_ms);
    println!("listing_url:  {}", config.listing_url());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gargantua").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_command_is_tui() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_tui_initial_path() {
        let cli = parse(&["tui", "/orders"]);
        assert!(matches!(cli.command, Some(Commands::Tui { path: Some(ref p) }) if p == "/orders"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&["list", "--api-url", "http://backend:9000/", "--api-version", "v1"]);
        let config = effective_config(&cli).unwrap();

        assert_eq!(config.listing_url(), "http://backend:9000/v1/modules/");
        assert_eq!(config.view_version(), "v1");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_base_url": "http://file:1", "tick_rate_ms": 100}"#).unwrap();

        let cli = parse(&[
            "config",
            "--config",
            path.to_str().unwrap(),
            "--api-url",
            "http://flag:2",
        ]);
        let config = effective_config(&cli).unwrap();

        assert_eq!(config.api_base_url, "http://flag:2");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.api_version, "v4");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = parse(&["config", "--config", "/nonexistent/gargantua.json"]);
        assert!(matches!(effective_config(&cli), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_resolve_requires_path() {
        let args = ["gargantua", "resolve"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
