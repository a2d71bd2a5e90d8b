use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use pdf_grid::{GridPreview, MAX_ITEMS, SheetConfig, SlotOutcome, SourceItem};
use pdf_grid_session::GridSession;
use std::path::{Path, PathBuf};

mod logger;

#[derive(Parser)]
#[command(name = "pdfg", about = "Combine single-page PDFs into a 3x3 grid", version)]
struct Cli {
    /// Log each placed cell
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose up to nine PDFs into one grid sheet
    Compose {
        /// Input PDF files, in slot order (only the first page of each is used)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (defaults to <name>.pdf in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export name when no output path is given
        #[arg(long, default_value = "grid-layout")]
        name: String,

        /// Load sheet options from a JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the effective sheet options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Outer margin in points
        #[arg(long)]
        margin: Option<f32>,

        /// Gap between cells in points
        #[arg(long)]
        gap: Option<f32>,

        /// Do not outline cells
        #[arg(long)]
        no_borders: bool,

        /// Output paper size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Output orientation
        #[arg(long, value_enum)]
        orientation: Option<OrientationArg>,
    },

    /// Show which file lands in which cell
    Preview {
        /// Input PDF files, in slot order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for pdf_grid::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl From<OrientationArg> for pdf_grid::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Compose {
            input,
            output,
            name,
            config,
            save_config,
            margin,
            gap,
            no_borders,
            paper,
            orientation,
        } => {
            let mut options = match config {
                Some(path) => SheetConfig::load(&path)
                    .await
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => SheetConfig::default(),
            };
            if let Some(margin) = margin {
                options.margin_pt = margin;
            }
            if let Some(gap) = gap {
                options.gap_pt = gap;
            }
            if no_borders {
                options.show_borders = false;
            }
            if let Some(paper) = paper {
                options.paper_size = paper.into();
            }
            if let Some(orientation) = orientation {
                options.orientation = orientation.into();
            }
            options.validate()?;

            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved sheet options → {}", path.display());
            }

            if input.len() > MAX_ITEMS {
                log::warn!(
                    "Only the first {} of {} files fit on the sheet",
                    MAX_ITEMS,
                    input.len()
                );
            }
            let items = read_sources(&input[..input.len().min(MAX_ITEMS)]).await?;

            let mut session = GridSession::with_config(options);
            session.set_export_name(name);
            session.add_files(items)?;

            let stats = session.generate().await?;
            let Some(artifact) = session.take_artifact() else {
                bail!("generation finished without a document");
            };

            for report in &artifact.grid.slots {
                if let SlotOutcome::Failed { error, .. } = &report.outcome {
                    println!(
                        "  Cell {}: {} ({})",
                        report.slot.index() + 1,
                        report.source_name.as_deref().unwrap_or("?"),
                        error
                    );
                }
            }

            let (width_pt, height_pt) = options.sheet_dimensions_pt();
            println!("Grid Statistics:");
            println!(
                "  Sheet: {:.0} x {:.0} mm",
                pdf_grid::pt_to_mm(width_pt),
                pdf_grid::pt_to_mm(height_pt)
            );
            println!("  Placed: {}", stats.placed);
            println!("  Failed: {}", stats.failed);
            println!("  Empty: {}", stats.empty);

            let output = output.unwrap_or_else(|| PathBuf::from(&artifact.file_name));
            tokio::fs::write(&output, &artifact.grid.pdf)
                .await
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Grid → {}", output.display());
        }

        Commands::Preview { input } => {
            let items: Vec<SourceItem> = input
                .iter()
                .map(|path| SourceItem::new(display_name(path), Vec::<u8>::new()))
                .collect();
            print!("{}", GridPreview::from_items(&items));
        }
    }

    Ok(())
}

/// Read every input file into memory before generation starts
async fn read_sources(paths: &[PathBuf]) -> Result<Vec<SourceItem>> {
    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());
        items.push(SourceItem::new(display_name(path), bytes));
    }
    Ok(items)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
