use clap::Parser;
use herdboard::cli::{
    goats, handle_completions, handle_config_init, Cli, Commands, ConfigCommands,
};
use herdboard::herd::Herd;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => herdboard::cli::serve::run_serve(args).await,
        Commands::Goats(args) => {
            let herd = Herd::starter();
            match goats::handle_goats(&args, &herd) {
                Ok(output) => {
                    println!("{}", output);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
