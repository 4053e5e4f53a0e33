//! Scripted walk through the draft/publish lifecycle against the in-memory
//! backend: open editor → edit → save → confirm → publish → re-render Live.

use crate::config::{Config, ContentDocument};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_html::{compile_page, CompileOptions};
use pagecraft_editor::EditorSession;
use pagecraft_service::{InMemoryContentService, ServiceHandle};
use pagecraft_store::{CacheEvent, CacheSlot, ContentStore};
use std::fs;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Site title the demo edit applies to the draft
    #[arg(short, long, default_value = "Pagecraft, freshly published")]
    pub title: String,
}

pub fn demo(args: DemoArgs, cwd: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(args, cwd))
}

async fn run(args: DemoArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    // Seed the backend from the content file when present.
    let seed = match ContentDocument::load(&config.content_path(cwd)) {
        Ok(document) => document.live,
        Err(_) => ContentDocument::seed().live,
    };

    let backend = Arc::new(InMemoryContentService::with_content(seed));
    let store = Arc::new(ContentStore::new(ServiceHandle::from_service(
        backend.clone(),
    )));
    let mut events = store.subscribe();

    println!("{}", "🚀 Draft/publish lifecycle demo".bright_blue().bold());

    let before = store.live().await?;
    println!("  {} live site title: {:?}", "•".cyan(), before.site_title);

    let mut session = EditorSession::new(store.clone());
    session.open().await?;
    println!("  {} editor opened on draft snapshot", "✓".green());

    let title = args.title.clone();
    session.edit(move |form| form.site_title = title)?;
    session.save().await?;
    println!("  {} draft saved (live untouched)", "✓".green());

    let live_after_save = store.live().await?;
    println!(
        "  {} live still reads: {:?}",
        "•".cyan(),
        live_after_save.site_title
    );

    session.request_publish()?;
    let outcome = session.confirm_publish().await?;
    println!(
        "  {} published (live refreshed: {})",
        "✓".green(),
        outcome.live_refreshed
    );

    while let Ok(event) = events.try_recv() {
        if let CacheEvent::Refreshed {
            slot: CacheSlot::Live,
            version,
        } = event
        {
            println!("  {} live observers notified (v{})", "•".cyan(), version);
        }
    }

    let after = store.live().await?;
    println!("  {} live now reads: {:?}", "•".cyan(), after.site_title);

    let out_dir = config.out_path(cwd);
    fs::create_dir_all(&out_dir)?;
    let out_file = out_dir.join("index.html");
    fs::write(&out_file, compile_page(&after, CompileOptions::default()))?;
    println!("  {} re-rendered {}", "✓".green(), out_file.display());

    println!();
    println!("{}", "✅ Demo complete!".green().bold());

    Ok(())
}
