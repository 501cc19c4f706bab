use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-transform")]
#[command(about = "Transforms a raw customer record into a customer profile")]
pub struct CliConfig {
    #[arg(long, help = "Input JSON file with one customer record (stdin when omitted)")]
    pub input: Option<String>,

    #[arg(long, help = "Output file for the profile JSON (stdout when omitted)")]
    pub output: Option<String>,

    #[arg(long, help = "Pretty-print the output JSON")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
