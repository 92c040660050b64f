use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonal::{
    contrast_ratio, oklch_function, parse_color, parse_oklch, stylesheet, text_on, Background,
    Hex, Oklch, Preset, Scale, ScaleGenerator, ThemeTokens, WcagLevel,
};

#[derive(Parser)]
#[command(name = "tonal-ramp")]
#[command(about = "Perceptual OKLCH color scales that stay in the sRGB gamut")]
struct Cli {
    /// Log scale generation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an 11 step scale from a base color
    Scale {
        /// Base color as #rrggbb or oklch(L C H)
        color: String,

        /// Prefix of the generated custom properties
        #[arg(short, long, default_value = "color")]
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,

        /// JSON file with a custom lightness table: [{"step": 50, "lightness": 0.97}, ...]
        #[arg(short, long)]
        preset: Option<PathBuf>,
    },
    /// Print the WCAG contrast ratio of two colors
    Contrast {
        /// Foreground color
        foreground: String,

        /// Background color
        background: String,
    },
    /// Pick theme tokens from the scale of a base color
    Tokens {
        /// Base color as #rrggbb or oklch(L C H)
        color: String,

        /// Prefix of the generated custom properties
        #[arg(short, long, default_value = "color")]
        name: String,

        /// Page the tokens are rendered on
        #[arg(short, long, value_enum, default_value_t = Page::Light)]
        background: Page,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Light and dark custom property blocks
    Css,
    /// The steps as a JSON array
    Json,
    /// A human readable table
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    /// White page
    Light,
    /// Black page
    Dark,
}

impl From<Page> for Background {
    fn from(page: Page) -> Self {
        match page {
            Page::Light => Background::Light,
            Page::Dark => Background::Dark,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "tonal=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Scale {
            color,
            name,
            format,
            preset,
        } => run_scale_command(&color, &name, format, preset.as_deref()),
        Commands::Contrast {
            foreground,
            background,
        } => run_contrast_command(&foreground, &background),
        Commands::Tokens {
            color,
            name,
            background,
        } => run_tokens_command(&color, &name, background.into()),
    }
}

fn load_preset(path: &Path) -> anyhow::Result<Preset> {
    tracing::debug!(path = %path.display(), "Loading preset");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preset {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid preset {}", path.display()))
}

/// The `oklch()` color given on the command line, if it lies outside of the
/// sRGB gamut and is clipped by rounding it to a hex code.
fn clipped_input(color: &str) -> anyhow::Result<Option<Oklch>> {
    Ok(parse_oklch(color)?.filter(|oklch| !oklch.in_gamut()))
}

fn generate(color: &str, preset: Option<&Path>) -> anyhow::Result<Scale> {
    let base = parse_color(color)?;
    let generator = match preset {
        Some(path) => ScaleGenerator::new(load_preset(path)?),
        None => ScaleGenerator::default(),
    };

    if let Some(requested) = clipped_input(color)? {
        tracing::warn!(
            requested = %oklch_function(&requested),
            %base,
            "Base color is outside of the sRGB gamut"
        );
    }

    Ok(generator.generate(base.to_oklch()))
}

fn run_scale_command(
    color: &str,
    name: &str,
    format: Format,
    preset: Option<&Path>,
) -> anyhow::Result<()> {
    let scale = generate(color, preset)?;

    match format {
        Format::Css => println!("{}", stylesheet(name, &scale)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&scale)?),
        Format::Table => print_table(&scale),
    }

    Ok(())
}

fn print_table(scale: &Scale) {
    println!(
        "{:>5}  {:>6}  {:>6}  {:>6}  {:<8} {:>7}  {}",
        "step", "L", "C", "H", "hex", "vs #fff", "text"
    );
    for step in scale {
        let marker = if step.is_base { " *" } else { "" };
        println!(
            "{:>5}  {:>6.3}  {:>6.3}  {:>6.1}  {:<8} {:>7.2}  {}{}",
            step.step,
            step.oklch.lightness,
            step.oklch.chroma,
            step.oklch.hue,
            step.hex.to_string(),
            contrast_ratio(step.hex, Hex::WHITE),
            text_on(step.hex),
            marker,
        );
    }
}

fn run_contrast_command(foreground: &str, background: &str) -> anyhow::Result<()> {
    let foreground = parse_color(foreground).context("Invalid foreground")?;
    let background = parse_color(background).context("Invalid background")?;

    let ratio = contrast_ratio(foreground, background);
    println!("{foreground} on {background}: {ratio:.2}:1");
    for level in WcagLevel::ALL {
        let verdict = if level.passes(ratio) { "pass" } else { "fail" };
        println!("  {:<10} {:>4.1}  {verdict}", level.to_string(), level.threshold());
    }

    Ok(())
}

fn run_tokens_command(color: &str, name: &str, background: Background) -> anyhow::Result<()> {
    let scale = generate(color, None)?;
    let tokens = ThemeTokens::pick(&scale, background);

    for (role, step) in tokens.roles() {
        println!("--{name}-{role}: {}; /* {} */", step.hex, step.step);
    }

    Ok(())
}
