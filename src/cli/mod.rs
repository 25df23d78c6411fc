mod args;
mod global;
mod handlers;
mod input;

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use sextet::Settings;

#[derive(Parser)]
#[command(name = "sextet")]
#[command(version)]
#[command(about = "Base64 encode or decode data, with optional line wrapping and lenient decoding", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data to base64
    Encode(EncodeArgs),

    /// Decode base64 data
    Decode(DecodeArgs),

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // SAFETY: set before any other thread is spawned
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    // Load settings with user overrides
    let settings = Settings::load_with_overrides()?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &settings),
    }
}
