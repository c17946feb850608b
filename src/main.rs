use clap::Parser;

#[derive(Parser)]
#[command(name = "rem", about = concat!("[ ] remind v", env!("CARGO_PKG_VERSION"), " - a task list that taps you on the shoulder"), version)]
struct Cli {}

fn main() {
    // No subcommands: the whole program is the single screen.
    let _cli = Cli::parse();

    if let Err(e) = remind::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
