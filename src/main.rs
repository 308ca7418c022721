use clap::Parser;
use qaflow::errors::ErrorHandler;
use qaflow::structs::cli::Cli;
use qaflow::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = CommandRunner::run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
