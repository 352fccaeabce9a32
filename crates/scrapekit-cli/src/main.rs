//! ScrapeKit CLI - Command-line interface for scraping web pages

mod mcp;

use clap::{Parser, Subcommand, ValueEnum};
use scrapekit::{FetchOptions, Link, Metadata, Scraper, StructureKind, Tool, TOOL_LLMTXT};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Output format for scrape subcommands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// ScrapeKit - AI-friendly web page scraping tool
#[derive(Parser, Debug)]
#[command(name = "scrapekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print full help with examples (llmtxt)
    #[arg(long)]
    llmtxt: bool,

    /// Fetch timeout in seconds
    #[arg(long, global = true, default_value_t = 30.0)]
    timeout: f64,

    /// Custom User-Agent
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Output format
    #[arg(long, short, global = true, default_value = "text")]
    output: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run as MCP (Model Context Protocol) server over stdio
    Mcp,
    /// Extract visible text, optionally scoped by a CSS selector
    Text {
        /// URL to scrape
        url: String,

        /// CSS selector (e.g. '.article-content', '#main')
        #[arg(long, short)]
        selector: Option<String>,
    },
    /// List all links with absolute URLs
    Links {
        /// URL to scrape
        url: String,
    },
    /// Show title, meta and Open Graph fields
    Metadata {
        /// URL to scrape
        url: String,
    },
    /// Extract tables, headings or lists
    Structured {
        /// URL to scrape
        url: String,

        /// Kind of structure to extract
        #[arg(long = "type", short = 't', value_parser = parse_kind)]
        kind: StructureKind,
    },
}

fn parse_kind(s: &str) -> Result<StructureKind, String> {
    s.parse()
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results and MCP
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Handle --llmtxt flag
    if cli.llmtxt {
        writeln_safe(TOOL_LLMTXT);
        std::process::exit(0);
    }

    let options = match fetch_options(cli.timeout, cli.user_agent) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    let scraper = Scraper::new(options);
    let output = cli.output;

    let result = match cli.command {
        Some(Commands::Mcp) => {
            mcp::run_server(Tool::with_scraper(scraper)).await;
            return;
        }
        Some(Commands::Text { url, selector }) => scraper
            .scrape_text(&url, selector.as_deref())
            .await
            .map(|text| format_text(&text, output)),
        Some(Commands::Links { url }) => scraper
            .scrape_links(&url)
            .await
            .map(|links| format_links(&links, output)),
        Some(Commands::Metadata { url }) => scraper
            .scrape_metadata(&url)
            .await
            .map(|metadata| format_metadata(&metadata, output)),
        Some(Commands::Structured { url, kind }) => scraper
            .scrape_structured(&url, kind)
            .await
            .map(|records| to_json(&records)),
        None => {
            eprintln!("Usage: scrapekit <text|links|metadata|structured> <URL>");
            eprintln!("   or: scrapekit mcp");
            eprintln!("   or: scrapekit --help");
            std::process::exit(1);
        }
    };

    match result {
        Ok(out) => writeln_safe(&out),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build fetch options from CLI flags
fn fetch_options(timeout_secs: f64, user_agent: Option<String>) -> Result<FetchOptions, String> {
    let timeout = Duration::try_from_secs_f64(timeout_secs)
        .ok()
        .filter(|t| !t.is_zero())
        .ok_or_else(|| format!("Invalid timeout: {}", timeout_secs))?;
    Ok(FetchOptions {
        user_agent,
        timeout,
    })
}

fn format_text(text: &str, output: OutputFormat) -> String {
    match output {
        OutputFormat::Text => text.to_string(),
        OutputFormat::Json => to_json(&text),
    }
}

/// One link per line: URL, then text and title when present
fn format_links(links: &[Link], output: OutputFormat) -> String {
    if output == OutputFormat::Json {
        return to_json(&links);
    }

    links
        .iter()
        .map(|link| {
            let mut line = link.url.clone();
            if !link.text.is_empty() {
                line.push_str(&format!("\t{}", link.text));
            }
            if !link.title.is_empty() {
                line.push_str(&format!("\t({})", link.title));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `key: value` lines, all seven keys always shown
fn format_metadata(metadata: &Metadata, output: OutputFormat) -> String {
    if output == OutputFormat::Json {
        return to_json(metadata);
    }

    [
        ("title", &metadata.title),
        ("description", &metadata.description),
        ("keywords", &metadata.keywords),
        ("author", &metadata.author),
        ("og_title", &metadata.og_title),
        ("og_description", &metadata.og_description),
        ("og_image", &metadata.og_image),
    ]
    .iter()
    .map(|(key, value)| format!("{}: {}", key, value))
    .collect::<Vec<_>>()
    .join("\n")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing response: {}", e);
        std::process::exit(1);
    })
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
