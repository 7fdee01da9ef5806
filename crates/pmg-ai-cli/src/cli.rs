use clap::{Parser, Subcommand};
use pmg_ai_core::ProviderSelector;

#[derive(Parser, Debug)]
#[command(name = "pmg-ai")]
#[command(author, version, about = "Gerador de textos comerciais da PMG Atacadista")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pmg-ai.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// OpenAI API key
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Without a subcommand the interactive prompt starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a single answer and exit
    Generate {
        /// Prompt to process
        prompt: String,

        /// Provider: auto, transformers, openai, api or local
        #[arg(short, long, value_parser = parse_selector)]
        provider: Option<ProviderSelector>,

        /// Print a JSON envelope instead of plain text
        #[arg(long)]
        json: bool,

        /// Upper bound on generated tokens
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,
    },

    /// Read prompts from standard input until `sair`
    Interactive {
        /// Provider: auto, transformers, openai, api or local
        #[arg(short, long, value_parser = parse_selector)]
        provider: Option<ProviderSelector>,
    },

    /// Start the REST server
    Serve {
        /// Listen address
        #[arg(short, long)]
        address: Option<String>,

        /// Listen port
        #[arg(short = 'P', long)]
        port: Option<u16>,
    },

    /// Show which providers are available
    Status,
}

fn parse_selector(s: &str) -> Result<ProviderSelector, String> {
    s.parse().map_err(|e: pmg_ai_core::Error| e.to_string())
}
