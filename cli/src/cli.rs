use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sample_core::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(
    name = "sample-a",
    version,
    about = "Sample Package A CLI: query, post to and process data for an HTTP echo service"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the echo service"
    )]
    pub base_url: String,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log more to stderr (repeat for more detail)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get IP information.
    Info {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, help = "Output format")]
        format: OutputFormat,
    },
    /// Process input data.
    Process {
        #[arg(short, long, value_name = "KEY=VALUE", help = "Key-value pairs (key=value)")]
        key: Vec<String>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, help = "Output format")]
        format: OutputFormat,
    },
    /// Send data to external service.
    Send {
        #[arg(short, long, help = "JSON data to send")]
        data: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}
