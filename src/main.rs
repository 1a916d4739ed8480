use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hsl_picker::{color::hsl_to_color, color_at_hue, parse, shade_rows};
use shadepick::assets::AssetLoader;
use shadepick::models::{AppConfig, DEFAULT_LOG_FILTER};
use shadepick::output::{self, OutputFormat};
use shadepick::services::Session;

#[derive(Parser)]
#[command(name = "shadepick")]
#[command(about = "Shadepick - RGB/HSL color picker engine")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show hex, RGB, HSL and grayscale for any color name or literal
    Convert {
        /// Color name, hex literal or rgb() value
        color: String,
    },
    /// Show the color for HSL values
    #[command(allow_negative_numbers = true)]
    Hsl {
        /// Hue in degrees
        hue: f64,
        /// Saturation percentage
        saturation: f64,
        /// Lightness percentage
        lightness: f64,
    },
    /// Sample the hue ramp
    Ramp {
        /// Number of samples (defaults to ramp_steps from config)
        #[arg(short, long)]
        steps: Option<usize>,
    },
    /// Print shade gradient row endpoints for a hue
    Shade {
        /// Hue in degrees (defaults to the hue of the initial color)
        #[arg(long, allow_negative_numbers = true)]
        hue: Option<f64>,

        /// Number of rows (defaults to shade_rows from config)
        #[arg(short, long)]
        rows: Option<usize>,
    },
    /// Drive the picker with commands from a script or stdin
    Session {
        /// Script file (reads stdin when omitted)
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Write one JSON object per refresh
        #[arg(long)]
        json: bool,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loader = AssetLoader::from_env();
    let loaded = AppConfig::try_load(&loader);
    init_tracing(
        loaded
            .as_ref()
            .map_or(DEFAULT_LOG_FILTER, |config| config.log_filter.as_str()),
    );
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(%e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    match cli.command {
        Some(Commands::Convert { color }) => run_convert_command(&config, &color),
        Some(Commands::Hsl {
            hue,
            saturation,
            lightness,
        }) => {
            let color = hsl_to_color(hue, saturation, lightness);
            println!("{}", output::describe(color));
            Ok(())
        }
        Some(Commands::Ramp { steps }) => {
            run_ramp_command(steps.unwrap_or(config.ramp_steps));
            Ok(())
        }
        Some(Commands::Shade { hue, rows }) => {
            run_shade_command(&config, hue, rows.unwrap_or(config.shade_rows));
            Ok(())
        }
        Some(Commands::Session { script, json }) => run_session_command(&config, script, json),
        Some(Commands::Init { force, list }) => run_init_command(&loader, force, list),
        None => {
            run_status_command(&loader, &config);
            Ok(())
        }
    }
}

/// Minimal logging for CLI, on stderr so stdout stays machine-readable
fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}

fn run_convert_command(config: &AppConfig, input: &str) -> anyhow::Result<()> {
    let color = parse(input, &config.resolver())?;
    println!("{}", output::describe(color));
    Ok(())
}

fn run_ramp_command(steps: usize) {
    let samples: Vec<_> = (0..steps)
        .map(|i| {
            let hue = i as f64 * 360.0 / steps as f64;
            (hue, color_at_hue(hue))
        })
        .collect();
    println!("{}", output::ramp_table(&samples));
}

fn run_shade_command(config: &AppConfig, hue: Option<f64>, rows: usize) {
    let hue = hue.unwrap_or_else(|| f64::from(config.build_picker().snapshot().hue));
    let base = color_at_hue(hue.rem_euclid(360.0));
    println!("base {base}");
    println!("{}", output::shade_table(&shade_rows(base, rows)));
}

fn run_session_command(
    config: &AppConfig,
    script: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(config, format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match script {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| anyhow::anyhow!("Cannot open {}: {e}", path.display()))?;
            session.run(BufReader::new(file), &mut out)?
        }
        None => session.run(io::stdin().lock(), &mut out)?,
    };
    out.flush()?;

    if summary.errors > 0 {
        anyhow::bail!(
            "{} of {} commands failed",
            summary.errors,
            summary.commands
        );
    }
    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(loader: &AssetLoader, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader, config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Shadepick v{VERSION}");
    println!("RGB/HSL color picker engine\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_file()
            .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string())
    );

    println!("\nConfiguration:");
    println!("  Source:        {}", loader.config_source());
    println!("  Initial color: {}", config.initial_color);
    println!("  Color names:   {}", config.colors.len());

    let snapshot = config.build_picker().snapshot();
    println!("\nStarting state:");
    println!("  {}", output::fields_line(&snapshot.fields()));

    println!("\nCommands:");
    println!("  shadepick convert   Describe a color");
    println!("  shadepick hsl       Convert HSL to RGB");
    println!("  shadepick ramp      Sample the hue ramp");
    println!("  shadepick shade     Print shade gradient rows");
    println!("  shadepick session   Run picker commands");
    println!("  shadepick init      Extract embedded config");
    println!("\nRun 'shadepick --help' for more details.");
}
