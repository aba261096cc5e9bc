// reset; cargo run -- all
// reset; cargo run -- --root ./Assets enums --output ./Enums.cs

use clap::Parser;
use sheet_codegen::{run, Args};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Library events stay quiet unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let arguments = Args::parse();

    match run(&arguments) {
        Ok(_) => {
            println!("Finished");
        }
        Err(e) => {
            eprintln!("❌ Generation failed with error: {e:#}");
            std::process::exit(1);
        }
    }
}
