//! # Order Management Dashboard
//!
//! Interactive terminal front end for the order services. Type `help` at the
//! prompt for the command list; logs go to stderr (see [`setup_tracing`]).

use oms_dashboard::config::Config;
use oms_dashboard::lifecycle::{setup_tracing, Dashboard};
use oms_dashboard::model::Notice;
use oms_dashboard::refresh::AutoRefresh;
use oms_dashboard::shell::Command;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting order management dashboard");

    let mut refresh = AutoRefresh::new(config.refresh_interval);
    let dashboard = Dashboard::start(config).await?;

    println!("🛒 Order Management System");
    println!("Type `help` for commands.");
    print!("{}", dashboard.handle(&Command::Shop).await);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break;
                };
                let command = match Command::parse(&line, dashboard.catalog()) {
                    Ok(Some(command)) => command,
                    Ok(None) => {
                        prompt()?;
                        continue;
                    }
                    Err(e) => {
                        println!("{}", Notice::error(e.to_string()));
                        prompt()?;
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                if let Command::AutoRefresh(enabled) = command {
                    refresh.set_enabled(enabled);
                }
                print!("{}", dashboard.handle(&command).await);
                prompt()?;
            }
            _ = refresh.tick() => {
                debug!("Auto-refresh tick");
                println!();
                print!("{}", dashboard.handle(&Command::Orders).await);
                prompt()?;
            }
        }
    }

    dashboard.shutdown().await?;
    info!("Dashboard exited");
    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("oms> ");
    std::io::stdout().flush().map_err(|e| e.to_string())
}
