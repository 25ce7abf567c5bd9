//! Folio CLI - Ask the portfolio FAQ responder from a terminal
//!
//! Answers locally with the built-in (or a file) knowledge base, or remotely
//! through a running Folio server.

mod api;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use std::sync::Arc;

use api::FolioClient;
use config::Config;
use folio::{FaqResponder, KnowledgeBase};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio CLI - Ask the portfolio FAQ responder", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a single question
    Ask {
        /// Question text
        text: String,
        /// Ask the configured server instead of answering locally
        #[arg(short, long)]
        remote: bool,
        /// Knowledge base TOML file for local answers
        #[arg(short, long)]
        knowledge: Option<String>,
    },

    /// Interactive chat (empty line or "exit" to quit)
    Chat {
        /// Ask the configured server instead of answering locally
        #[arg(short, long)]
        remote: bool,
        /// Knowledge base TOML file for local answers
        #[arg(short, long)]
        knowledge: Option<String>,
    },

    /// List topics in matching order
    Topics {
        /// Ask the configured server
        #[arg(short, long)]
        remote: bool,
    },

    /// Show or update configuration
    Config {
        /// Server URL used by --remote
        #[arg(long)]
        base_url: Option<String>,
        /// Default knowledge base file for local answers
        #[arg(long)]
        knowledge_path: Option<String>,
    },
}

/// Where answers come from
enum Answerer {
    Local(FaqResponder),
    Remote(FolioClient),
}

impl Answerer {
    fn build(config: &Config, remote: bool, knowledge: Option<String>) -> Result<Self> {
        if remote {
            return Ok(Answerer::Remote(FolioClient::new(&config.base_url)));
        }
        let path = knowledge.or_else(|| config.knowledge_path.clone());
        let kb = load_knowledge(path.as_deref())?;
        Ok(Answerer::Local(FaqResponder::new(Arc::new(kb))))
    }

    async fn answer(&self, text: &str) -> Result<String> {
        match self {
            Answerer::Local(responder) => Ok(responder.respond(text)?),
            Answerer::Remote(client) => client.chat(text).await,
        }
    }
}

/// Read a knowledge base file, or fall back to the built-in profile
fn load_knowledge(path: Option<&str>) -> Result<KnowledgeBase> {
    let source = folio::knowledge_source(path.map(str::to_string));
    source
        .load()
        .with_context(|| format!("Failed to load knowledge base from {}", source.describe()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            text,
            remote,
            knowledge,
        } => cmd_ask(text, remote, knowledge).await,
        Commands::Chat { remote, knowledge } => cmd_chat(remote, knowledge).await,
        Commands::Topics { remote } => cmd_topics(remote).await,
        Commands::Config {
            base_url,
            knowledge_path,
        } => cmd_config(base_url, knowledge_path),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_ask(text: String, remote: bool, knowledge: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let answerer = Answerer::build(&config, remote, knowledge)?;

    println!("{}", answerer.answer(&text).await?);

    Ok(())
}

async fn cmd_chat(remote: bool, knowledge: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let answerer = Answerer::build(&config, remote, knowledge)?;

    let source = if remote {
        config.base_url.as_str()
    } else {
        "local"
    };
    println!("{} ({})", "Folio chat".bold(), source.dimmed());
    println!("{}", "Empty line or 'exit' to quit.".dimmed());

    loop {
        let line: String = Input::new()
            .with_prompt("You")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("exit") {
            break;
        }

        match answerer.answer(line).await {
            Ok(answer) => println!("\n{}\n", answer.cyan()),
            Err(e) => println!("{} {}\n", "✗".red(), e),
        }
    }

    Ok(())
}

async fn cmd_topics(remote: bool) -> Result<()> {
    let topics = if remote {
        let config = Config::load()?;
        FolioClient::new(&config.base_url).topics().await?
    } else {
        folio::domain::services::topics()
            .into_iter()
            .map(|t| t.to_string())
            .collect()
    };

    println!("{}", "Topics (first match wins):".bold());
    for (i, topic) in topics.iter().enumerate() {
        println!("  {}. {}", i + 1, topic.cyan());
    }

    Ok(())
}

fn cmd_config(base_url: Option<String>, knowledge_path: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    if base_url.is_none() && knowledge_path.is_none() {
        println!("{}", "Configuration:".bold());
        println!("  Config file:    {:?}", Config::config_path()?);
        println!("  Server URL:     {}", config.base_url);
        println!(
            "  Knowledge base: {}",
            config
                .knowledge_path
                .as_deref()
                .unwrap_or("built-in profile")
        );
        return Ok(());
    }

    if let Some(url) = base_url {
        config.set_base_url(url);
    }
    if let Some(path) = knowledge_path {
        // Fail early rather than on the next ask
        load_knowledge(Some(&path))?;
        config.knowledge_path = Some(path);
    }
    config.save()?;

    println!("{} Configuration saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}
