//! Prospectus - Multi-tenant investor relations site generator
//!
//! Renders themed single-page investor relations sites from per-tenant
//! TOML configs, with managed content pulled from a CMS, a local YAML
//! file, or nothing at all.

mod config;
mod content;
mod generator;
mod layouts;
mod model;
mod render;
mod theme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::generator::{Generator, RenderOptions};

#[derive(Parser)]
#[command(name = "prospectus")]
#[command(author = "Prospectus Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Multi-tenant investor relations site generator", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one site, or a batch of sites with --sites
    Render {
        /// Site config to render
        #[arg(short, long, value_name = "FILE", default_value = "site.toml")]
        site: PathBuf,

        /// Render every site config matching this glob instead
        #[arg(long, value_name = "GLOB")]
        sites: Option<String>,

        /// Output directory (overrides the configured one)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Skip content fetching and render from company data alone
        #[arg(long)]
        no_cms: bool,

        /// Theme preset or file, overriding the site config
        #[arg(short, long, value_name = "THEME")]
        theme: Option<String>,
    },

    /// Initialize a starter site.toml in this directory
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// List built-in theme presets
    Themes,

    /// Show how a site would render without writing output
    Check {
        /// Site config to inspect
        #[arg(short, long, value_name = "FILE", default_value = "site.toml")]
        site: PathBuf,

        /// Theme preset or file, overriding the site config
        #[arg(short, long, value_name = "THEME")]
        theme: Option<String>,
    },
}

fn setup_logging(verbosity: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prospectus")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "prospectus.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the duration of the program
    let _logging_guard = setup_logging(cli.verbose)?;

    let config_path = cli.config.or_else(|| {
        let default_config = config::Config::default_path()?;
        if default_config.exists() {
            Some(default_config)
        } else {
            None
        }
    });

    let config = if let Some(path) = config_path {
        config::Config::load(&path)?
    } else {
        config::Config::default()
    };

    match cli.command {
        Some(Commands::Render {
            site,
            sites,
            out,
            no_cms,
            theme,
        }) => {
            let mut options = RenderOptions::new(&config);
            if let Some(out) = out {
                options.out_dir = out;
            }
            options.no_cms = no_cms;
            options.theme_override = theme;

            let generator = Generator::new(config);
            if let Some(pattern) = sites {
                let report = generator.render_many(&pattern, &options).await?;
                println!(
                    "Rendered {} site(s) to {}",
                    report.pages.len(),
                    options.out_dir.display()
                );
                if !report.all_ok() {
                    for failure in &report.failures {
                        eprintln!("  {}: {:#}", failure.config.display(), failure.error);
                    }
                    anyhow::bail!("{} site(s) failed to render", report.failures.len());
                }
            } else {
                let page = generator.render_path(&site, &options).await?;
                println!("Rendered {} -> {}", page.slug, page.path.display());
            }
        }
        Some(Commands::Init { force }) => {
            let dir = std::env::current_dir()?;
            config::init_site_config(&dir, force)?;
        }
        Some(Commands::Themes) => {
            theme::print_themes();
        }
        Some(Commands::Check { site, theme }) => {
            let generator = Generator::new(config);
            generator.check_site(&site, theme.as_deref())?;
        }
        None => {
            // Bare invocation renders the site config in the working directory
            let options = RenderOptions::new(&config);
            let generator = Generator::new(config);
            let page = generator
                .render_path(Path::new("site.toml"), &options)
                .await?;
            println!("Rendered {} -> {}", page.slug, page.path.display());
        }
    }

    Ok(())
}
