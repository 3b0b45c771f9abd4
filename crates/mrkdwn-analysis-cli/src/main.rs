use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mrkdwn_analysis_config::{Config, ParserSettings};
use mrkdwn_analysis_engine::{
    BlockMode, BlockToken, FenceMode, MarkdownDocument, ParseOptions, Summary, io,
};

#[derive(Parser)]
#[command(name = "mrkdwn-analysis")]
#[command(about = "Tokenize Markdown documents and report on their structure")]
struct Cli {
    /// Absorb unterminated code fences instead of failing
    #[arg(long, global = true, conflicts_with = "strict")]
    tolerant: bool,

    /// Fail on unterminated code fences, even if the config enables tolerance
    #[arg(long, global = true)]
    strict: bool,

    /// Only recognise frontmatter and code fences (MDX-style documents)
    #[arg(long, global = true, conflicts_with = "markdown")]
    fences_only: bool,

    /// Recognise every block kind, even if the config enables fences-only mode
    #[arg(long, global = true)]
    markdown: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// One line per block token
    Tokens { file: PathBuf },
    /// Element counts
    Summary { file: PathBuf },
    /// Headers, optionally of a single level
    Headers {
        file: PathBuf,
        #[arg(long)]
        level: Option<u8>,
    },
    /// Table of contents
    Toc {
        file: PathBuf,
        #[arg(long, default_value_t = 3)]
        max_level: u8,
    },
    /// Text and image links
    Links { file: PathBuf },
    /// Code blocks, optionally of a single language
    Code {
        file: PathBuf,
        #[arg(long)]
        language: Option<String>,
    },
    /// Case-insensitive search across all elements
    Search { file: PathBuf, query: String },
    /// Summary line per Markdown file under a directory
    Scan {
        /// Defaults to `notes_path` from the config file
        dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    let config = Config::load()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?
        .unwrap_or_default();

    let options = parse_options(
        &config.parser,
        switch(cli.tolerant, cli.strict),
        switch(cli.fences_only, cli.markdown),
    );
    log::debug!("parse options: {options:?}");

    match cli.command {
        Command::Tokens { file } => {
            let doc = load(&file, &options)?;
            for token in doc.tokens() {
                println!("{}", token_line(token));
            }
        }
        Command::Summary { file } => {
            let doc = load(&file, &options)?;
            print!("{}", summary_report(&doc.summary()));
        }
        Command::Headers { file, level } => {
            let doc = load(&file, &options)?;
            let index = doc.index();
            let headers = match level {
                Some(level) => index.headers_by_level(level),
                None => index.headers(),
            };
            for h in headers {
                println!("{:>5}  {} {}", h.line, "#".repeat(usize::from(h.level)), h.text);
            }
        }
        Command::Toc { file, max_level } => {
            let doc = load(&file, &options)?;
            for entry in doc.index().table_of_contents(max_level) {
                println!("{}- {} (line {})", entry.indent, entry.text, entry.line);
            }
        }
        Command::Links { file } => {
            let doc = load(&file, &options)?;
            let index = doc.index();
            for link in index.text_links() {
                println!("{:>5}  link   [{}]({})", link.line, link.item.text, link.item.url);
            }
            for image in index.image_links() {
                println!(
                    "{:>5}  image  ![{}]({})",
                    image.line, image.item.alt_text, image.item.url
                );
            }
        }
        Command::Code { file, language } => {
            let doc = load(&file, &options)?;
            let index = doc.index();
            let blocks = match language {
                Some(language) => index.code_by_language(&language),
                None => index.code_blocks(),
            };
            for block in blocks {
                println!(
                    "--- line {} ({}) ---",
                    block.line,
                    block.language.as_deref().unwrap_or("no language")
                );
                println!("{}", block.content);
            }
        }
        Command::Search { file, query } => {
            let doc = load(&file, &options)?;
            for hit in doc.search(&query, &[]) {
                println!("{:>5}  {:<12} {}", hit.line, format!("{:?}", hit.kind), preview(&hit.text));
            }
        }
        Command::Scan { dir } => {
            let dir = match dir.or(config.notes_path) {
                Some(dir) => dir,
                None => bail!(
                    "No directory given and no notes_path in {}",
                    config_path.display()
                ),
            };
            scan(&dir, &options)?;
        }
    }
    Ok(())
}

/// An on/off flag pair; `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Config values first, then command-line flags on top.
fn parse_options(
    settings: &ParserSettings,
    tolerant: Option<bool>,
    fences_only: Option<bool>,
) -> ParseOptions {
    ParseOptions {
        fences: if tolerant.unwrap_or(settings.tolerant_fences) {
            FenceMode::Tolerant
        } else {
            FenceMode::Strict
        },
        blocks: if fences_only.unwrap_or(settings.fences_only) {
            BlockMode::FencesOnly
        } else {
            BlockMode::Markdown
        },
    }
}

fn load(file: &Path, options: &ParseOptions) -> Result<MarkdownDocument> {
    MarkdownDocument::from_path(file, options)
        .with_context(|| format!("Failed to analyze {}", file.display()))
}

fn scan(dir: &Path, options: &ParseOptions) -> Result<()> {
    io::validate_dir(dir).with_context(|| format!("Cannot scan {}", dir.display()))?;
    let files = io::scan_markdown_files(dir)?;

    let mut failures = 0;
    for file in &files {
        let shown = file.strip_prefix(dir).unwrap_or(file);
        match MarkdownDocument::from_path(file, options) {
            Ok(doc) => {
                let s = doc.summary();
                println!(
                    "{}: {} headers, {} paragraphs, {} code blocks, {} links",
                    shown.display(),
                    s.headers,
                    s.paragraphs,
                    s.code_blocks,
                    s.text_links
                );
            }
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", shown.display());
            }
        }
    }

    if failures > 0 {
        bail!("{failures} of {} files failed to parse", files.len());
    }
    Ok(())
}

fn token_line(token: &BlockToken) -> String {
    let label = match token.level {
        Some(level) => format!("{}{}", token.kind.as_str(), level),
        None => token.kind.as_str().to_string(),
    };
    let detail = match token.list_items().len() {
        0 => preview(&token.content),
        n => format!("{n} items"),
    };
    format!("{:>5}  {:<15} {}", token.start_line, label, detail)
}

fn summary_report(s: &Summary) -> String {
    let rows = [
        ("headers", s.headers),
        ("paragraphs", s.paragraphs),
        ("blockquotes", s.blockquotes),
        ("code blocks", s.code_blocks),
        ("ordered lists", s.ordered_lists),
        ("unordered lists", s.unordered_lists),
        ("task items", s.task_items),
        ("tables", s.tables),
        ("html blocks", s.html_blocks),
        ("thematic breaks", s.thematic_breaks),
        ("text links", s.text_links),
        ("image links", s.image_links),
        ("footnotes", s.footnotes),
    ];
    rows.iter()
        .map(|(name, count)| format!("{name:<16} {count}\n"))
        .collect()
}

/// First line of `text`, cut to 60 characters.
fn preview(text: &str) -> String {
    const MAX: usize = 60;
    let first = text.lines().next().unwrap_or_default();
    let mut out: String = first.chars().take(MAX).collect();
    if first.chars().count() > MAX || text.lines().nth(1).is_some() {
        out.push('…');
    }
    out
}
