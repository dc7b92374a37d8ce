use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use crystal_twinning::config::DEFAULT_MAX_OBLIQUITY;
use crystal_twinning::lattice::{niggli_reduce, Centering, UnitCell};
use crystal_twinning::symmetries::{format_centring, Op, SpaceGroup};
use crystal_twinning::twinning::{
    find_lattice_2fold_ops, find_lattice_symmetry, find_potential_twinning,
};

#[derive(Parser)]
#[command(name = "twin-laws")]
#[command(about = "Lattice symmetry and potential twin laws from unit cell metrics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use for batch input (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Args)]
struct CellArgs {
    /// Unit cell: a b c alpha beta gamma (Å and degrees)
    #[arg(long, required = true, num_args = 6, value_names = ["A", "B", "C", "ALPHA", "BETA", "GAMMA"], allow_negative_numbers = true)]
    cell: Vec<f64>,

    /// Maximum obliquity in degrees
    #[arg(short, long, default_value_t = DEFAULT_MAX_OBLIQUITY)]
    max_obliquity: f64,
}

impl CellArgs {
    fn unit_cell(&self) -> Result<UnitCell> {
        let [a, b, c, alpha, beta, gamma]: [f64; 6] = self
            .cell
            .as_slice()
            .try_into()
            .context("--cell takes six values")?;
        UnitCell::new(a, b, c, alpha, beta, gamma).context("Invalid --cell")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List potential twin laws for a cell and space group
    Twins {
        #[command(flatten)]
        cell: CellArgs,

        /// Space group symbol or number (default: P 1)
        #[arg(short, long)]
        space_group: Option<String>,

        /// Report every twin operation instead of one per coset
        #[arg(long)]
        all: bool,

        /// Print operations as h,k,l instead of x,y,z
        #[arg(long)]
        hkl: bool,
    },
    /// List the two-fold axes of the reduced lattice with their obliquity
    TwoFolds {
        #[command(flatten)]
        cell: CellArgs,

        /// Lattice centring (P, A, B, C, I, R, F)
        #[arg(short, long, default_value = "P")]
        centring: Centering,
    },
    /// Print the lattice point group (without inversion)
    Lattice {
        #[command(flatten)]
        cell: CellArgs,

        /// Lattice centring (P, A, B, C, I, R, F)
        #[arg(short, long, default_value = "P")]
        centring: Centering,
    },
    /// Process a file with one "a b c alpha beta gamma SYMBOL" entry per line
    Batch {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum obliquity in degrees
        #[arg(short, long, default_value_t = DEFAULT_MAX_OBLIQUITY)]
        max_obliquity: f64,

        /// Report every twin operation instead of one per coset
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
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

    info!("Starting twin-laws v{}", crystal_twinning::VERSION);

    match cli.command {
        Commands::Twins {
            cell,
            space_group,
            all,
            hkl,
        } => run_twins(&cell, space_group.as_deref(), all, hkl),
        Commands::TwoFolds { cell, centring } => run_two_folds(&cell, centring),
        Commands::Lattice { cell, centring } => run_lattice(&cell, centring),
        Commands::Batch {
            input,
            max_obliquity,
            all,
        } => run_batch(&input, max_obliquity, all),
    }
}

fn format_op(op: &Op, hkl: bool) -> String {
    if hkl {
        op.as_hkl()
    } else {
        op.triplet()
    }
}

fn run_twins(args: &CellArgs, space_group: Option<&str>, all: bool, hkl: bool) -> Result<()> {
    let cell = args.unit_cell()?;
    let sg = space_group
        .map(SpaceGroup::from_symbol)
        .transpose()
        .context("Invalid --space-group")?;
    let sg_name = sg.map_or("P 1", |sg| sg.hm);
    info!(
        "Searching twin laws for {:?} in {} with max obliquity {}°",
        cell.parameters(),
        sg_name,
        args.max_obliquity
    );

    let ops = find_potential_twinning(&cell, sg, args.max_obliquity, all)?;
    if ops.is_empty() {
        println!("No potential twin laws in {}", sg_name);
    }
    for op in &ops {
        println!("{}", format_op(op, hkl));
    }
    Ok(())
}

fn run_two_folds(args: &CellArgs, centring: Centering) -> Result<()> {
    let cell = args.unit_cell()?;
    let reduced = niggli_reduce(&cell, centring).context("Cell reduction failed")?;
    let [a, b, c, alpha, beta, gamma] = reduced.cell.parameters();
    println!(
        "Reduced cell: {:.4} {:.4} {:.4} {:.3} {:.3} {:.3}",
        a, b, c, alpha, beta, gamma
    );
    println!("Change of basis: {}", reduced.change_of_basis);

    for op_obl in find_lattice_2fold_ops(&reduced.cell, args.max_obliquity) {
        println!("{:<16} {:.4}", op_obl.op.triplet(), op_obl.obliquity);
    }
    Ok(())
}

fn run_lattice(args: &CellArgs, centring: Centering) -> Result<()> {
    let cell = args.unit_cell()?;
    let go = find_lattice_symmetry(&cell, centring, args.max_obliquity)?;
    println!(
        "Lattice point group of order {}, centring {}",
        go.sym_ops.len(),
        format_centring(&go.cen_ops)
    );
    for op in &go.sym_ops {
        println!("{}", op);
    }
    Ok(())
}

struct BatchEntry {
    line: usize,
    cell: UnitCell,
    sg: &'static SpaceGroup,
}

fn parse_batch_line(line_number: usize, line: &str) -> Result<Option<BatchEntry>> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() < 7 {
        bail!(
            "line {}: expected a b c alpha beta gamma SYMBOL, got {:?}",
            line_number,
            content
        );
    }
    let mut params = [0.0; 6];
    for (param, field) in params.iter_mut().zip(&fields[..6]) {
        *param = field
            .parse()
            .with_context(|| format!("line {}: bad number {:?}", line_number, field))?;
    }
    let [a, b, c, alpha, beta, gamma] = params;
    let cell = UnitCell::new(a, b, c, alpha, beta, gamma)
        .with_context(|| format!("line {}", line_number))?;
    let sg = SpaceGroup::from_symbol(&fields[6..].join(" "))
        .with_context(|| format!("line {}", line_number))?;
    Ok(Some(BatchEntry {
        line: line_number,
        cell,
        sg,
    }))
}

fn twin_report(entry: &BatchEntry, max_obliquity: f64, all: bool) -> String {
    match find_potential_twinning(&entry.cell, Some(entry.sg), max_obliquity, all) {
        Ok(ops) => {
            let ops: Vec<String> = ops.iter().map(Op::triplet).collect();
            format!("{}\t{}\t{}", entry.line, entry.sg.hm, ops.join(" "))
        }
        Err(e) => format!("{}\t{}\terror: {}", entry.line, entry.sg.hm, e),
    }
}

fn run_batch(input: &Path, max_obliquity: f64, all: bool) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(entry) = parse_batch_line(i + 1, line)? {
            entries.push(entry);
        }
    }
    info!("Processing {} cells from {}", entries.len(), input.display());

    #[cfg(feature = "parallel")]
    let reports: Vec<String> = {
        use rayon::prelude::*;
        entries
            .par_iter()
            .map(|entry| twin_report(entry, max_obliquity, all))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let reports: Vec<String> = entries
        .iter()
        .map(|entry| twin_report(entry, max_obliquity, all))
        .collect();

    for report in reports {
        println!("{}", report);
    }
    Ok(())
}
