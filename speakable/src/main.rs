//! speakable - chunk text for speech synthesis from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use speakable::config::SpeakableConfig;
use speakable::{contains_markup, prepare, PrepareOptions};

#[derive(Parser, Debug)]
#[command(name = "speakable")]
#[command(about = "Prepare text for speech synthesis: detect markup, flatten, and chunk", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Maximum chunk length in characters (overrides config)
    #[arg(short, long)]
    max_chars: Option<usize>,

    /// Skip markup flattening and chunk the text as-is
    #[arg(long)]
    no_flatten: bool,

    /// Print the markup detection result and exit
    #[arg(long)]
    detect: bool,

    /// Emit chunks as a JSON array instead of blank-line separated text
    #[arg(long)]
    json: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the default maximum chunk length
    SetMaxChars {
        /// Length in characters
        value: usize,
    },
    /// Enable or disable markup flattening by default
    SetFlatten {
        /// true or false
        value: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let config = SpeakableConfig::load().context("Failed to load configuration")?;

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    if args.detect {
        println!("{}", contains_markup(&text));
        return Ok(());
    }

    let options = PrepareOptions {
        max_chunk_chars: args.max_chars.unwrap_or(config.max_chunk_chars),
        flatten_markup: !args.no_flatten && config.flatten_markup,
    };

    log::debug!(
        "preparing {} chars (max_chunk_chars={}, flatten={})",
        text.chars().count(),
        options.max_chunk_chars,
        options.flatten_markup
    );

    let chunks = prepare(&text, &options);
    log::debug!("produced {} chunk(s)", chunks.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{chunk}");
        }
    }

    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = SpeakableConfig::load()?;
            println!("Configuration file: {:?}", SpeakableConfig::config_path()?);
            println!();
            println!("max_chunk_chars = {}", config.max_chunk_chars);
            println!("flatten_markup = {}", config.flatten_markup);
        }
        ConfigAction::SetMaxChars { value } => {
            let mut config = SpeakableConfig::load()?;
            config.max_chunk_chars = (*value).max(1);
            config.save()?;
            println!("Default maximum chunk length set to: {}", config.max_chunk_chars);
        }
        ConfigAction::SetFlatten { value } => {
            let mut config = SpeakableConfig::load()?;
            config.flatten_markup = *value;
            config.save()?;
            println!("Default markup flattening set to: {}", config.flatten_markup);
        }
    }
    Ok(())
}
