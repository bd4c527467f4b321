use clap::Parser;
use var_engine::adapter::inbound::cli::{run, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run::execute(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
