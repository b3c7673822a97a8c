mod config;
mod errors;
mod intake;
mod layout;
mod models;
mod render;
mod styles;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::intake::{
    validate_record, FileSource, FormSnapshotProvider, FormState, SnapshotStore, StaticForm,
    TemplateSource, UrlSource,
};
use crate::layout::FontFamily;
use crate::models::defaults::default_record;
use crate::models::{PartialResumeRecord, ResumeRecord};
use crate::render::{generate_pdf, GeneratedPdf};
use crate::styles::metadata::all_style_metadata;
use crate::styles::get_style_config_by_name;

#[derive(Parser)]
#[command(name = "cvgen", version, about = "Build a styled PDF CV from JSON resume data")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a CV to PDF.
    Generate {
        /// Import/export JSON to load before generating.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// modern, minimalist, professional or tech.
        #[arg(short, long)]
        style: Option<String>,
        /// helvetica, times or courier.
        #[arg(short, long)]
        font: Option<String>,
        /// Accent colour as #rrggbb.
        #[arg(short, long)]
        color: Option<String>,
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Start from the last saved snapshot instead of the demo data.
        #[arg(long)]
        resume: bool,
        /// Render the record as loaded, without trimming or dropping empty rows.
        #[arg(long)]
        raw: bool,
    },
    /// Write the demo record as a JSON template.
    Template {
        #[arg(short, long, default_value = "cv-template.json")]
        output: PathBuf,
    },
    /// Download a remote JSON template and save it normalized.
    FetchTemplate {
        #[arg(short, long)]
        url: String,
        #[arg(short, long, default_value = "cv-template.json")]
        output: PathBuf,
    },
    /// Report validation warnings for a JSON file.
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List available styles.
    Styles,
    /// Delete the saved snapshot.
    Clear,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting cvgen v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Generate {
            input,
            style,
            font,
            color,
            out_dir,
            resume,
            raw,
        } => {
            let overrides = Overrides { style, font, color };
            let out_dir = out_dir.unwrap_or_else(|| config.output_dir.clone());
            let options = GenerateOptions { resume, raw };
            generate(&config, input.as_deref(), overrides, &out_dir, options).await
        }
        Command::Template { output } => write_template(&default_record(), &output).await,
        Command::FetchTemplate { url, output } => fetch_template(&config, url, &output).await,
        Command::Validate { input } => validate(&input).await,
        Command::Styles => {
            list_styles();
            Ok(())
        }
        Command::Clear => {
            SnapshotStore::new(&config.snapshot_path).clear().await;
            println!("✓ Saved data cleared");
            Ok(())
        }
    };

    // Failures end as a status line, never a panic or backtrace.
    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e.status_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Commands
// ────────────────────────────────────────────────────────────────────────────

struct Overrides {
    style: Option<String>,
    font: Option<String>,
    color: Option<String>,
}

impl Overrides {
    fn apply(self, record: &mut ResumeRecord) {
        if let Some(style) = self.style {
            record.style_id = get_style_config_by_name(&style).id;
        }
        if let Some(font) = self.font {
            record.font_family = FontFamily::from_name(&font);
        }
        if let Some(color) = self.color {
            record.theme_color = color;
        }
    }
}

struct GenerateOptions {
    resume: bool,
    raw: bool,
}

async fn generate(
    config: &Config,
    input: Option<&Path>,
    overrides: Overrides,
    out_dir: &Path,
    options: GenerateOptions,
) -> Result<(), AppError> {
    let store = SnapshotStore::new(&config.snapshot_path);

    let snapshot = if options.resume { store.load().await } else { None };
    let mut record = match snapshot {
        Some((mut record, style)) => {
            record.style_id = style;
            record
        }
        None => default_record(),
    };
    if let Some(path) = input {
        record.apply(load_file(path).await?);
        println!("✓ Data loaded from {}", path.display());
    }
    overrides.apply(&mut record);

    // Same cleaning rules as interactive entry unless --raw.
    let form: Box<dyn FormSnapshotProvider> = if options.raw {
        Box::new(StaticForm(record))
    } else {
        Box::new(FormState::populate(&record))
    };
    let record = form.collect();
    for warning in validate_record(&record).errors {
        warn!(%warning, "validation warning");
    }

    let pdf = render_pdf(record.clone()).await?;
    tokio::fs::create_dir_all(out_dir).await?;
    let path = out_dir.join(&pdf.filename);
    tokio::fs::write(&path, &pdf.bytes).await?;
    info!(path = %path.display(), pages = pdf.page_count, "PDF written");

    store.save(&record, record.style_id).await;
    println!("{}", pdf.status_message());
    Ok(())
}

/// Rendering is CPU-bound; keep it off the async workers.
async fn render_pdf(record: ResumeRecord) -> Result<GeneratedPdf, AppError> {
    tokio::task::spawn_blocking(move || generate_pdf(&record))
        .await
        .context("PDF render task failed")?
}

async fn load_file(path: &Path) -> Result<PartialResumeRecord, AppError> {
    FileSource::new(path).load().await
}

async fn write_template(record: &ResumeRecord, output: &Path) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(&record.to_template_json())?;
    tokio::fs::write(output, json).await?;
    println!("✓ Template saved to {}", output.display());
    Ok(())
}

async fn fetch_template(config: &Config, url: String, output: &Path) -> Result<(), AppError> {
    let source = UrlSource::new(url, config.fetch_timeout)?;
    let mut record = ResumeRecord::default();
    record.apply(source.load().await?);
    write_template(&record, output).await
}

async fn validate(input: &Path) -> Result<(), AppError> {
    let mut record = ResumeRecord::default();
    record.apply(load_file(input).await?);
    let report = validate_record(&FormState::populate(&record).collect());

    if report.is_valid {
        println!("✓ No validation warnings");
    } else {
        for warning in &report.errors {
            println!("⚠ {warning}");
        }
    }
    Ok(())
}

fn list_styles() {
    for meta in all_style_metadata() {
        println!("{:<13}{}", meta.id.as_str(), meta.display_name);
        println!("             {}", meta.description);
        println!("             tags: {}", meta.tags.join(", "));
        println!("             for: {}", meta.recommended_for.join(", "));
    }
}
