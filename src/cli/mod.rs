//! Command-line interface.
//!
//! `serve` runs the HTTP API (and is the default). The remaining commands run
//! the routing core once and print JSON, which is handy for checking how a
//! query would be routed without starting the server.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::ServerConfig;
use crate::routing::{self, CATALOG};
use crate::web;

#[derive(Parser, Debug)]
#[command(
    name = "synergai",
    version,
    about = "Keyword-driven AI model selection service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides SYNERGAI_HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to listen on (overrides SYNERGAI_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Score every model against a query and print the selection
    Select {
        /// Query text
        query: String,
    },

    /// Print word count, complexity, and task type for a query
    Analyze {
        /// Query text
        query: String,
    },

    /// Analyze a query and select a model in one step
    Orchestrate {
        /// Query text
        query: String,

        /// Caller identifier (logged only)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// List the model catalog
    Models,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Execute a parsed command line.
///
/// Only `serve` reads the listen address from the environment.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });

    match command {
        Command::Serve { host, port } => {
            let server = ServerConfig::resolve(host, port)?;
            web::serve_until(server.addr(), web::shutdown_signal()).await?;
        }
        Command::Select { query } => print_json(&routing::select_model(&query))?,
        Command::Analyze { query } => print_json(&routing::analyze(&query))?,
        Command::Orchestrate { query, user_id } => {
            print_json(&routing::orchestrate(&query, user_id.as_deref()))?
        }
        Command::Models => print_json(&CATALOG)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["synergai"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_overrides_parse() {
        let cli = Cli::try_parse_from(["synergai", "serve", "--host", "127.0.0.1", "-p", "9000"])
            .unwrap();
        match cli.command {
            Some(Command::Serve { host, port }) => {
                assert_eq!(host, Some("127.0.0.1".parse().unwrap()));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_orchestrate_user_id_flag() {
        let cli =
            Cli::try_parse_from(["synergai", "orchestrate", "write code", "--user-id", "u7"])
                .unwrap();
        match cli.command {
            Some(Command::Orchestrate { query, user_id }) => {
                assert_eq!(query, "write code");
                assert_eq!(user_id.as_deref(), Some("u7"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_one_shot_commands_ignore_server_env() {
        let _lock = crate::config::ENV_LOCK.lock();
        unsafe { std::env::set_var("SYNERGAI_PORT", "bad") };

        let mut results = Vec::new();
        for args in [
            vec!["synergai", "select", "write code"],
            vec!["synergai", "analyze", "write code"],
            vec!["synergai", "orchestrate", "write code", "--user-id", "u1"],
            vec!["synergai", "models"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            results.push(run(cli).await);
        }

        unsafe { std::env::remove_var("SYNERGAI_PORT") };
        for result in results {
            assert!(result.is_ok(), "{result:?}");
        }
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Cli::try_parse_from(["synergai", "serve", "--port", "70000"]).is_err());
    }
}
