//! SolarSense backend entry point — CLI wiring and config-driven startup.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::process;
use std::sync::Arc;

use solarsense_api::api::{self, AppState};
use solarsense_api::config::DashboardConfig;
use tracing_subscriber::EnvFilter;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    port_override: Option<u16>,
}

fn print_help() {
    eprintln!("solarsense-api — demo backend for the SolarSense solar-IoT dashboard");
    eprintln!();
    eprintln!("Usage: solarsense-api [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   Load configuration from TOML file");
    eprintln!("  --port <u16>      Override the configured listen port");
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("Without --config, built-in defaults are used (port 5000).");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        port_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port_override = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("solarsense_api=info,tower_http=info")),
        )
        .init();

    let mut config = if let Some(ref path) = cli.config_path {
        match DashboardConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DashboardConfig::default()
    };

    if let Some(port) = cli.port_override {
        config.server.port = port;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let ip: IpAddr = match config.server.host.parse() {
        Ok(ip) => ip,
        Err(_) => {
            eprintln!(
                "config error: server.host — \"{}\" is not a valid IP address",
                config.server.host
            );
            process::exit(1);
        }
    };
    let addr = SocketAddr::new(ip, config.server.port);

    let state = Arc::new(AppState { config });
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    rt.block_on(api::serve(state, addr));
}
