//! Folio CLI
//!
//! Build the portfolio page to static HTML, or mount it on the headless
//! platform and inspect the state at a given scroll offset and time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_app::{FolioConfig, PortfolioApp, RenderMode, SECTIONS};
use folio_platform::{HeadlessPlatform, ViewportSource};
use folio_theme::ThemeMode;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Folio portfolio page CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to an HTML file
    Build {
        /// Directory containing folio.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Output path
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,

        /// Override the configured theme (light, dark, system)
        #[arg(short, long)]
        theme: Option<String>,

        /// Render the state right after mount instead of the settled page
        #[arg(long)]
        initial: bool,
    },

    /// Mount the page headlessly, scroll, advance the clock and print the state
    Simulate {
        /// Directory containing folio.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Scroll offset in px
        #[arg(short, long, default_value = "0")]
        scroll: f64,

        /// Viewport height in px
        #[arg(long, default_value = "800")]
        viewport: f64,

        /// Height of every section in px (defaults to the viewport height)
        #[arg(long)]
        section_height: Option<f64>,

        /// Milliseconds to advance the clock after scrolling
        #[arg(short, long, default_value = "0")]
        elapsed: u64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List sections and anchors
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Build {
            config,
            out,
            theme,
            initial,
        } => cmd_build(&config, &out, theme.as_deref(), initial),

        Commands::Simulate {
            config,
            scroll,
            viewport,
            section_height,
            elapsed,
            json,
        } => cmd_simulate(
            &config,
            scroll,
            viewport,
            section_height.unwrap_or(viewport),
            elapsed,
            json,
        ),

        Commands::Info => cmd_info(),
    }
}

fn parse_theme(theme: &str) -> Result<ThemeMode> {
    match theme {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => anyhow::bail!(
            "Invalid theme '{}'. Valid themes: {:?}",
            other,
            ["light", "dark", "system"]
        ),
    }
}

fn load_config(dir: &Path) -> Result<FolioConfig> {
    FolioConfig::load_from_dir(dir)
        .with_context(|| format!("Failed to load configuration from {}", dir.display()))
}

/// Headless page with every section stacked at the same height
fn headless_page(viewport: f64, section_height: f64) -> HeadlessPlatform {
    HeadlessPlatform::with_stacked_anchors(
        viewport,
        SECTIONS.iter().map(|name| (name.to_lowercase(), section_height)),
    )
}

fn cmd_build(config_dir: &Path, out: &Path, theme: Option<&str>, initial: bool) -> Result<()> {
    let mut config = load_config(config_dir)?;
    if let Some(theme) = theme {
        config.site.theme = parse_theme(theme)?;
    }

    info!("Building portfolio for {}", config.site.title);

    let platform = headless_page(800.0, 800.0);
    let app = PortfolioApp::mount(platform, config)?;
    let mode = if initial {
        RenderMode::Live
    } else {
        RenderMode::Settled
    };
    app.write_html(out, mode)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    info!("Output written to: {}", out.display());
    Ok(())
}

/// Reject zero, negative and non-finite page sizes
fn check_sizes(viewport: f64, section_height: f64) -> Result<()> {
    if !(viewport.is_finite() && section_height.is_finite()) {
        anyhow::bail!("Viewport and section heights must be finite");
    }
    if !(viewport > 0.0 && section_height > 0.0) {
        anyhow::bail!("Viewport and section heights must be positive");
    }
    Ok(())
}

fn cmd_simulate(
    config_dir: &Path,
    scroll: f64,
    viewport: f64,
    section_height: f64,
    elapsed: u64,
    json: bool,
) -> Result<()> {
    check_sizes(viewport, section_height)?;

    let config = load_config(config_dir)?;
    let platform = headless_page(viewport, section_height);
    let app = PortfolioApp::mount(platform.clone(), config)?;

    platform.scroll_to(scroll);
    let fired = platform.advance(elapsed);
    info!("Advanced {}ms, {} timers fired", elapsed, fired);

    let snapshot = app.snapshot();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize state")?
        );
        return Ok(());
    }

    let viewport_state = platform.snapshot();
    println!(
        "Scroll:    {}px of {}px",
        viewport_state.scroll_top,
        viewport_state.max_scroll().max(0.0)
    );
    println!("Progress:  {}", snapshot.scroll.progress_percent());
    println!("Active:    {}", snapshot.scroll.active_section.name());
    println!(
        "Top btn:   {}",
        if snapshot.scroll.show_top_affordance {
            "shown"
        } else {
            "hidden"
        }
    );
    println!("Theme:     {}", snapshot.theme);
    println!(
        "Greeting:  {:?} ({}/{})",
        snapshot.greeting.text, snapshot.greeting.revealed, snapshot.greeting.len
    );
    println!(
        "Headline:  {:?} ({}/{})",
        snapshot.headline.text, snapshot.headline.revealed, snapshot.headline.len
    );
    println!("Animating: {}", app.is_animating());

    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Folio");
    println!("=====");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Sections:");
    for (order, name) in SECTIONS.iter().enumerate() {
        println!("  {}. {:<12} #{}", order + 1, name, name.to_lowercase());
    }
    println!();
    println!("Config file: {} (optional)", folio_app::CONFIG_FILE);
    println!("Themes: light, dark, system");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_sizes() {
        assert!(check_sizes(800.0, 600.0).is_ok());
        assert!(check_sizes(0.0, 600.0).is_err());
        assert!(check_sizes(800.0, -1.0).is_err());
        assert!(check_sizes(f64::NAN, 600.0).is_err());
        assert!(check_sizes(800.0, f64::NAN).is_err());
        assert!(check_sizes(f64::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("dark").unwrap(), ThemeMode::Dark);
        assert!(parse_theme("sepia").is_err());
    }

    #[test]
    fn test_cli_parses_simulate() {
        let cli = Cli::try_parse_from(["folio", "simulate", "--scroll", "1200", "--json"]).unwrap();
        match cli.command {
            Commands::Simulate { scroll, json, viewport, .. } => {
                assert_eq!(scroll, 1200.0);
                assert_eq!(viewport, 800.0);
                assert!(json);
            }
            _ => panic!("expected simulate"),
        }
    }
}
