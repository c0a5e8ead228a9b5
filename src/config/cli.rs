// Command-line arguments

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "probe-server")]
#[command(about = "Diagnostic HTTP server for reachability and latency probing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// HTTP serving port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Optional configuration file (format detected from extension)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Endpoints probed by /ready, in order
    #[arg(value_name = "ENDPOINT")]
    pub endpoints: Vec<String>,
}
