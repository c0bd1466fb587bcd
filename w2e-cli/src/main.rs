use clap::Parser;

/// what2eat backend entry command.
#[derive(Parser)]
#[command(name = "w2e", version, about = "what2eat backend")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    w2e::init_tracing();

    println!("Hello from what2eat!");
}
