use clap::Parser;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::{Read, Write};
use std::path::PathBuf;
use weaver_draft::{RawDraftContent, draft_to_html};

#[derive(Parser)]
#[command(version, about = "Render rich-text editor JSON content to HTML", long_about = None)]
struct Cli {
    /// Editor content JSON file (`-` or omitted reads stdin)
    #[arg(env = "DRAFT2HTML_INPUT")]
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long, env = "DRAFT2HTML_OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_miette()?;
    init_tracing();

    let cli = Cli::parse();

    let json = read_input(cli.input.as_ref())?;
    let content: RawDraftContent = RawDraftContent::from_json(&json)?;
    tracing::debug!(
        "Loaded {} blocks, {} entities",
        content.blocks.len(),
        content.entity_map.len()
    );

    let html = draft_to_html(&content)?;

    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent).into_diagnostic()?;
                }
            }
            std::fs::write(&path, html)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .into_diagnostic()?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut json = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut json)
                .into_diagnostic()?;
            Ok(json)
        }
    }
}

fn init_miette() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
