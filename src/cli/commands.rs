use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::api::prompt_request_body;
use crate::models::{ChatConfig, MessageRecord, SenderRole};
use crate::options::ChatOptions;
use crate::parsers::{load_config_with_fallback, parse_config_file};
use crate::thread::ChatSession;
use crate::utils::{
    anchors_to_plain, format_path_with_tilde, resolve_config_path, sanitize_for_terminal,
};

#[derive(Parser)]
#[command(name = "smarter-chat")]
#[command(version = "0.1.0")]
#[command(about = "Inspect Smarter chat widget threads built from a chatbot config", long_about = None)]
pub struct Cli {
    /// Enable debug logging regardless of the config's debug_mode
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Config payload file (defaults to $SMARTER_CHAT_CONFIG)
    pub config: Option<PathBuf>,

    /// Config to use when the primary config cannot be loaded
    #[arg(long)]
    pub fallback: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the message thread the widget would show
    Thread {
        #[command(flatten)]
        config: ConfigArgs,

        /// Show system, tool and diagnostic messages
        #[arg(long)]
        show_metadata: bool,

        /// Print every record as JSON instead of the rendered thread
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt request body for a new user prompt
    Request {
        #[command(flatten)]
        config: ConfigArgs,

        /// Text typed by the user
        #[arg(long)]
        prompt: String,

        /// Name of the session cookie, used as the session key field
        #[arg(long, default_value = "session_key")]
        session_cookie_name: String,
    },
    /// Show statistics about the thread
    Stats {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match &cli.command {
        Some(Commands::Thread { config, show_metadata, json }) => {
            show_thread(config, *show_metadata, *json, cli.debug)?;
        }
        Some(Commands::Request { config, prompt, session_cookie_name }) => {
            show_request(config, prompt, session_cookie_name, cli.debug)?;
        }
        Some(Commands::Stats { config }) => {
            show_stats(config, cli.debug)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Logs go to stderr so stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(args: &ConfigArgs) -> Result<(PathBuf, ChatConfig)> {
    let path = resolve_config_path(args.config.as_deref())?;
    let config = match &args.fallback {
        Some(fallback) => load_config_with_fallback(&path, fallback)?,
        None => parse_config_file(&path)?,
    };
    Ok((path, config))
}

fn open_session(
    args: &ConfigArgs,
    show_metadata: bool,
    debug: bool,
) -> Result<(PathBuf, ChatSession)> {
    let (path, config) = load_config(args)?;
    let options = ChatOptions::from_config(&config, debug);
    Ok((path, ChatSession::from_config(config, options, show_metadata)))
}

fn show_thread(args: &ConfigArgs, show_metadata: bool, json: bool, debug: bool) -> Result<()> {
    let (_, session) = open_session(args, show_metadata, debug)?;

    if json {
        let output = serde_json::to_string_pretty(session.messages())
            .context("Failed to serialize thread")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", sanitize_for_terminal(&session.title()));
    println!("{}", sanitize_for_terminal(&session.info()));
    println!();
    for message in session.visible_messages() {
        println!("{}", render_message(message));
    }

    Ok(())
}

fn show_request(
    args: &ConfigArgs,
    prompt: &str,
    session_cookie_name: &str,
    debug: bool,
) -> Result<()> {
    let (_, mut session) = open_session(args, false, debug)?;

    let Some(requests) = session.submit_prompt(prompt) else {
        anyhow::bail!("Prompt is empty after removing HTML tags");
    };
    let body = prompt_request_body(&requests, session_cookie_name, &session.config().session_key);
    let output = serde_json::to_string_pretty(&body).context("Failed to serialize request body")?;
    println!("{}", output);

    Ok(())
}

fn show_stats(args: &ConfigArgs, debug: bool) -> Result<()> {
    let (path, session) = open_session(args, false, debug)?;
    let messages = session.messages();

    println!("Smarter Chat Thread Statistics");
    println!("================================");
    println!("Chatbot: {}", sanitize_for_terminal(&session.title()));
    println!("Model: {}", sanitize_for_terminal(&session.info()));
    println!("Thread state: {}", session.state().label());
    println!("Total messages: {}", messages.len());
    println!("  Visible: {}", session.visible_messages().len());
    for role in [
        SenderRole::System,
        SenderRole::User,
        SenderRole::Assistant,
        SenderRole::Tool,
        SenderRole::Smarter,
    ] {
        println!("  {}: {}", role, count_sender(messages, role));
    }
    println!();
    println!("Config file: {}", format_path_with_tilde(&path));

    Ok(())
}

fn count_sender(messages: &[MessageRecord], sender: SenderRole) -> usize {
    messages.iter().filter(|m| m.sender == sender).count()
}

fn render_message(message: &MessageRecord) -> String {
    let text = message.text().map(anchors_to_plain).unwrap_or_default();
    format!("[{}] {}", message.sender, sanitize_for_terminal(text.trim_end()))
}
