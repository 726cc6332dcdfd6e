use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use tubegen::{BoundaryCondition, Chirality, Dimension, Structure, TubeConfig, TubeGen};

#[derive(Parser)]
#[command(name = "tubegen")]
#[command(about = "Generate a carbon nanotube of given chirality and length")]
#[command(
    long_about = "Generate a carbon nanotube of given chirality and length.\n\n\
                  Boundary conditions may be (default: periodic)\n  \
                  - o / open\n  \
                  - p / periodic"
)]
#[command(version)]
struct Cli {
    /// Chirality of the tube, specify as n,m
    chirality: Chirality,

    /// Number of unit cells in the tube
    length: usize,

    /// Boundary condition along the circumference
    #[arg(long = "bc-ch", alias = "bc_ch", default_value = "periodic")]
    bc_ch: BoundaryCondition,

    /// Boundary condition along the tube
    #[arg(long = "bc-t", alias = "bc_t", default_value = "periodic")]
    bc_t: BoundaryCondition,

    /// Embedding, can be 2d or 3d
    #[arg(long, default_value = "3d")]
    emb: Dimension,

    /// Lattice spacing
    #[arg(long, default_value_t = tubegen::config::DEFAULT_SPACING)]
    spacing: f64,

    /// Name for the lattice
    #[arg(long, default_value = "")]
    name: String,

    /// Comment on the lattice
    #[arg(long, default_value = "")]
    comment: String,

    /// Write the structure as JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the tube summary and exit without generating
    #[arg(long)]
    info: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

impl Cli {
    fn to_config(&self) -> TubeConfig {
        TubeConfig {
            chirality: self.chirality,
            length: self.length,
            bc_ch: self.bc_ch,
            bc_t: self.bc_t,
            embedding: self.emb,
            spacing: self.spacing,
            name: self.name.clone(),
            comment: self.comment.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    info!("Starting tubegen v{}", tubegen::VERSION);

    let config = cli.to_config();
    config.validate().context("Invalid configuration")?;

    if cli.info {
        let generator = TubeGen::new(config.chirality, config.spacing)?;
        println!("{}", generator);
        return Ok(());
    }

    let structure = tubegen::generate(&config).context("Tube generation failed")?;
    info!("Generated '{}' with {} sites", structure.name(), structure.len());

    write_structure(&structure, cli.output.as_ref())
}

fn write_structure(structure: &Structure, output: Option<&PathBuf>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, structure)?;
            writer.flush()?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, structure)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
