mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{demo, init, preview, render, DemoArgs, InitArgs, RenderArgs};

/// Pagecraft CLI - editable marketing sites with a draft/publish lifecycle
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagecraft site
    Init(InitArgs),

    /// Compile the Live content copy to a static page
    Render(RenderArgs),

    /// Compile the Draft content copy to a preview page
    Preview(RenderArgs),

    /// Walk the draft/publish lifecycle against the in-memory backend
    Demo(DemoArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
        Command::Demo(args) => demo(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
