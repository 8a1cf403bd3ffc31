//! # modernsite
//!
//! Command-line exporter for the ModernSite page.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html (interactive menu, closed)
//! modernsite build
//!
//! # Static snapshot with the mobile menu open, to stdout
//! modernsite print --menu open --static
//!
//! # Dump the content tables
//! modernsite content
//! ```
//!
//! Logs go to stderr; stdout carries only command output.

mod config;
mod export;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use config::{CONFIG_FILE, RenderOverrides, SiteConfig};
use modernsite::content::SITE_CONTENT;
use modernsite::menu::MenuState;
use modernsite::render_page;

#[derive(Parser, Debug)]
#[command(name = "modernsite")]
#[command(about = "Render the ModernSite marketing page to static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Config file (default: ./modernsite.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write it to the output directory.
    Build(BuildArgs),
    /// Render the page to stdout.
    Print(RenderArgs),
    /// Print the static content tables as JSON.
    Content,
}

#[derive(Args, Debug, Clone, Default)]
struct RenderArgs {
    /// Menu state baked into the page (closed | open)
    #[arg(long)]
    menu: Option<MenuState>,

    /// Omit the inline menu script and panel template
    #[arg(long = "static")]
    static_only: bool,
}

#[derive(Args, Debug, Clone)]
struct BuildArgs {
    /// Output directory (default: dist)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output file name (default: index.html)
    #[arg(long)]
    file_name: Option<String>,

    #[command(flatten)]
    render: RenderArgs,
}

impl RenderArgs {
    fn overrides(&self) -> RenderOverrides {
        RenderOverrides {
            menu: self.menu,
            static_only: self.static_only,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> SiteConfig {
    match path {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::load(&PathBuf::from(".")),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_ref());
    debug!(?config, default_file = CONFIG_FILE, "configuration resolved");

    match cli.command {
        Command::Build(args) => {
            let options = config.render_options(args.render.overrides());
            let out_dir = config.out_dir(args.out_dir);
            let file_name = config.file_name(args.file_name);

            let html = render_page(&options);
            let path = export::write_page(&out_dir, &file_name, &html)
                .context("exporting page")?;
            println!("{}", path.display());
        }
        Command::Print(args) => {
            let options = config.render_options(args.overrides());
            let html = render_page(&options);
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .context("writing page to stdout")?;
        }
        Command::Content => {
            let json = serde_json::to_string_pretty(&SITE_CONTENT)
                .context("serializing content tables")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for page / JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("modernsite v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[modernsite] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
