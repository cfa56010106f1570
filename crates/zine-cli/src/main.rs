mod logger;
mod volume;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::info;
use logger::ConsoleLogger;
use std::path::{Path, PathBuf};
use volume::{DEFAULT_CONTENT_DIR, DEFAULT_OUT_DIR, VolumePaths};
use zine_impose::{
    Booklet, BookletOptions, BookletStatistics, DimensionPolicy, PageSize, PlanRenderer,
    SheetRenderer,
};

#[derive(Parser)]
#[command(name = "zine", about = "Zine print tools", version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a volume's reader PDF into a saddle-stitch booklet
    Booklet {
        /// Volume number (default: highest volume in --content-dir)
        #[arg(long)]
        volume: Option<u32>,

        /// Reader PDF (default: <out-dir>/terminull-vol<N>.pdf)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Booklet PDF (default: <out-dir>/terminull-vol<N>-booklet.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory holding volN source directories
        #[arg(long, default_value = DEFAULT_CONTENT_DIR)]
        content_dir: PathBuf,

        /// Directory for exported PDFs
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Page width in points (default: taken from the first page)
        #[arg(long, requires = "page_height")]
        page_width: Option<f32>,

        /// Page height in points (default: taken from the first page)
        #[arg(long, requires = "page_width")]
        page_height: Option<f32>,

        /// Lay out pages of other sizes as if they matched the first page
        #[arg(long)]
        allow_mixed_sizes: bool,

        /// Load booklet options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,

        /// Print the sheet plan instead of writing a PDF
        #[arg(long, value_enum)]
        plan: Option<PlanFormat>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ConsoleLogger::new(ConsoleLogger::level_for(cli.verbose, cli.quiet))
        .init()
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Booklet {
            volume,
            input,
            output,
            content_dir,
            out_dir,
            page_width,
            page_height,
            allow_mixed_sizes,
            config,
            stats_only,
            plan,
        } => {
            let mut options = match &config {
                Some(path) => BookletOptions::load(path)
                    .await
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => BookletOptions::default(),
            };

            resolve_paths(&mut options, volume, input, output, &content_dir, &out_dir)?;

            if let (Some(width), Some(height)) = (page_width, page_height) {
                options.page_size = Some(PageSize::new(width, height));
            }
            if allow_mixed_sizes {
                options.dimension_policy = DimensionPolicy::UseFirst;
            }
            options.validate()?;

            info!("Loading {}...", options.input_file.display());
            let document = zine_impose::load_pdf(&options.input_file)
                .await
                .with_context(|| format!("Failed to read {}", options.input_file.display()))?;

            let stats = zine_impose::calculate_statistics(document.get_pages().len())?;

            // stdout carries only the plan in plan mode
            if let Some(format) = plan {
                for line in statistics_report(&stats).lines() {
                    info!("{}", line);
                }
                let pages = zine_impose::source_pages(&document)?;
                let booklet = zine_impose::plan_booklet(&pages, &options)?;
                print!("{}", plan_output(&booklet, format)?);
                return Ok(());
            }

            print!("{}", statistics_report(&stats));
            if stats_only {
                return Ok(());
            }

            info!("Imposing booklet spreads...");
            let imposed = zine_impose::impose_document(&document, &options).await?;
            zine_impose::save_pdf(imposed, &options.output_file)
                .await
                .with_context(|| format!("Failed to write {}", options.output_file.display()))?;

            info!("Reader:  {}", options.input_file.display());
            info!("Booklet: {}", options.output_file.display());
            info!("Print booklet duplex, flip on short edge. Fold & staple.");
        }
    }

    Ok(())
}

fn statistics_report(stats: &BookletStatistics) -> String {
    let lines = [
        "Booklet Statistics:".to_string(),
        format!("  Source pages: {}", stats.source_pages),
        format!("  Sheets: {}", stats.sheets),
        format!("  Output pages: {}", stats.output_faces),
        format!("  Blank pages added: {}", stats.blank_pages_added),
    ];
    lines.join("\n") + "\n"
}

/// Everything `--plan` writes to stdout
fn plan_output(booklet: &Booklet, format: PlanFormat) -> Result<String> {
    match format {
        PlanFormat::Text => Ok(PlanRenderer.render(booklet)?),
        PlanFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(booklet)?)),
    }
}

/// Fill in input/output paths: flags win over the config file, and anything
/// still missing comes from the volume naming scheme
fn resolve_paths(
    options: &mut BookletOptions,
    volume: Option<u32>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    content_dir: &Path,
    out_dir: &Path,
) -> Result<()> {
    if let Some(input) = input {
        options.input_file = input;
    }
    if let Some(output) = output {
        options.output_file = output;
    }

    let has_input = !options.input_file.as_os_str().is_empty();
    let has_output = !options.output_file.as_os_str().is_empty();

    if has_input && volume.is_none() {
        if !has_output {
            options.output_file = volume::booklet_path_for(&options.input_file);
        }
        return Ok(());
    }

    let volume = match volume {
        Some(v) => v,
        None => volume::find_highest_volume(content_dir)?,
    };
    info!("Using volume {}", volume);

    let paths = VolumePaths::new(out_dir, volume);
    if !has_input {
        options.input_file = paths.reader;
    }
    if !has_output {
        options.output_file = paths.booklet;
    }
    Ok(())
}
