use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Overrides the configured port
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(long)]
        db: Option<String>,
    },
    /// Write a sample configuration file
    Init,
    /// Mint an API bearer token for a user
    Token {
        #[clap(short, long)]
        user: String,
        #[clap(long)]
        db: Option<String>,
    },
    /// Evaluate the quality gate for a repository branch and print the result
    Gate {
        #[clap(short, long)]
        repository: String,
        #[clap(short, long)]
        branch: String,
        #[clap(long)]
        db: Option<String>,
    },
}
