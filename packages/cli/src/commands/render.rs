use crate::config::{Config, ContentDocument};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_page, CompileOptions};
use std::fs;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// Which lifecycle copy a render reads.
enum SourceCopy {
    Live,
    Draft,
}

/// Compile the Live copy to `<outDir>/index.html`.
pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    render_copy(args, cwd, SourceCopy::Live, "index.html")
}

/// Compile the Draft copy to `<outDir>/preview.html`.
pub fn preview(args: RenderArgs, cwd: &str) -> Result<()> {
    render_copy(args, cwd, SourceCopy::Draft, "preview.html")
}

fn render_copy(args: RenderArgs, cwd: &str, copy: SourceCopy, file_name: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }

    let content_path = config.content_path(cwd);
    if !content_path.exists() {
        return Err(anyhow!(
            "Content file does not exist: {:?}. Run `pagecraft init` first.",
            content_path
        ));
    }

    let document = ContentDocument::load(&content_path)?;
    let (label, content) = match copy {
        SourceCopy::Live => ("live", document.live),
        SourceCopy::Draft => ("draft", document.draft),
    };

    println!(
        "{}",
        format!("🔨 Compiling {} copy...", label).bright_blue().bold()
    );

    let html = compile_page(&content, CompileOptions::default());

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = config.out_path(cwd);
    fs::create_dir_all(&out_dir)?;
    let out_file = out_dir.join(file_name);
    fs::write(&out_file, html)?;

    println!(
        "  {} {} → {}",
        "✓".green(),
        config.content_file,
        out_file.display()
    );

    Ok(())
}
