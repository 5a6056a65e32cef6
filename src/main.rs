use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use clustertalk_moderation::config::Config;
use clustertalk_moderation::models::ModerationRequest;
use clustertalk_moderation::moderation::client::ModerationClient;
use clustertalk_moderation::moderation::traits::ModerationScorer;
use clustertalk_moderation::moderation::wordlist::WordListScorer;
use clustertalk_moderation::output::terminal;

/// ClusterTalk moderation service.
///
/// Flags chat messages containing disallowed words and returns a redacted
/// version for the chat backend to broadcast instead.
#[derive(Parser)]
#[command(name = "clustertalk-moderation", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP moderation service
    Serve {
        /// Port to listen on (default: MODERATION_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Interface to bind (default: MODERATION_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Moderate a single piece of text and print the verdict
    Check {
        /// The text to check
        text: String,

        /// Sender identifier attached to the request
        #[arg(long, default_value = "cli")]
        user_id: String,

        /// Ask a running service instead of checking locally
        #[arg(long)]
        remote: bool,

        /// Service base URL for --remote (default: MODERATION_URL or http://localhost:8000)
        #[arg(long, requires = "remote")]
        url: Option<String>,
    },

    /// Query a running service's health endpoint
    Health {
        /// Service base URL (default: MODERATION_URL or http://localhost:8000)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("clustertalk_moderation=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            info!(addr = %config.listen_addr(), "Starting moderation service");
            let scorer: Arc<dyn ModerationScorer> = Arc::new(WordListScorer);
            clustertalk_moderation::web::run_server(config, scorer).await?;
        }

        Commands::Check {
            text,
            user_id,
            remote,
            url,
        } => {
            let scorer: Box<dyn ModerationScorer> = if remote {
                let url = url.unwrap_or(config.service_url);
                println!("{} {}", "Asking".dimmed(), url);
                Box::new(ModerationClient::new(&url)?)
            } else {
                Box::new(WordListScorer)
            };

            let request = ModerationRequest { text, user_id };
            let result = scorer.moderate(&request).await?;
            terminal::display_result(&result);
        }

        Commands::Health { url } => {
            let url = url.unwrap_or(config.service_url);
            let client = ModerationClient::new(&url)?;
            let report = client.health().await?;
            terminal::display_health(client.base_url(), &report);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_check(args: &[&str]) -> (String, bool, Option<String>) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        match cli.command {
            Commands::Check {
                text, remote, url, ..
            } => (text, remote, url),
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_remote_flag_does_not_swallow_text() {
        let (text, remote, url) =
            parse_check(&["clustertalk-moderation", "check", "--remote", "this is spam"]);
        assert_eq!(text, "this is spam");
        assert!(remote);
        assert_eq!(url, None);
    }

    #[test]
    fn test_remote_with_explicit_url() {
        let (text, remote, url) = parse_check(&[
            "clustertalk-moderation",
            "check",
            "bad",
            "--remote",
            "--url",
            "http://mod.internal:8000",
        ]);
        assert_eq!(text, "bad");
        assert!(remote);
        assert_eq!(url.as_deref(), Some("http://mod.internal:8000"));
    }

    #[test]
    fn test_local_check_by_default() {
        let (text, remote, _) = parse_check(&["clustertalk-moderation", "check", "hello"]);
        assert_eq!(text, "hello");
        assert!(!remote);
    }

    #[test]
    fn test_url_without_remote_rejected() {
        let result = Cli::try_parse_from([
            "clustertalk-moderation",
            "check",
            "hello",
            "--url",
            "http://x",
        ]);
        assert!(result.is_err());
    }
}
