use env_logger::Builder;
use log::{info, warn};
use std::env;
use std::io::Write;

mod api_server;
mod config;
mod net_info;

use crate::config::Config;

fn init_logger(verbose: bool) {
    let mut builder = Builder::from_default_env();
    if env::var("RUST_LOG").is_err() {
        builder.filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        });
    }
    builder
        .format(|buf, record| {
            let ts = buf.timestamp();
            match record.module_path() {
                Some(module_path) => {
                    writeln!(
                        buf,
                        "{} {:<5} {} {}",
                        ts,
                        record.level(),
                        module_path,
                        record.args()
                    )
                }
                None => {
                    writeln!(buf, "{} {:<5} {}", ts, record.level(), record.args())
                }
            }
        })
        .try_init()
        .expect("Failed to initialize logger.");
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let config_path = env::args().nth(1).unwrap_or_else(|| "config.toml".into());

    // The installer is expected to run with zero configuration, so a
    // missing or invalid config file falls back to the built-in defaults.
    let (config, config_error) = match Config::from_file(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_logger(config.general.verbose_log);

    if let Some(err) = config_error {
        warn!(
            "No usable config at {} ({}), using built-in defaults",
            config_path, err
        );
    }

    info!("Starting installer-daemon {}", env!("CARGO_PKG_VERSION"));

    let ip = net_info::local_ip();
    println!("Installer running!");
    println!(
        "Open in your browser: http://{}:{}",
        ip, config.general.port
    );

    api_server::start(&config).await
}
