use crate::config::{Config, ContentDocument, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config and content
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft site...".bright_blue().bold());

    let config = Config::default();
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let content_path = config.content_path(cwd);
    if !content_path.exists() || args.force {
        let seed = ContentDocument::seed();
        fs::write(&content_path, serde_json::to_string_pretty(&seed)?)?;
        println!("  {} Created {}", "✓".green(), config.content_file);
    }

    println!();
    println!("{}", "✅ Site initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", config.content_file);
    println!("  2. Run: pagecraft render");
    println!("  3. Open {}/index.html", config.out_dir);

    Ok(())
}
