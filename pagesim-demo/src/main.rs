mod error;
mod trace_reader;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process,
};

use clap::Parser;
use log::{info, warn, LevelFilter};
use pagesim::{
    FrameTableDump, Mmu, MmuError, PageReplacer, PageTableDump, PolicyKind, SimConfig,
};

use crate::{error::DemoError, trace_reader::TraceReader};

/// Replays a memory reference trace through a simulated MMU and reports
/// page faults and write-backs for the chosen replacement policy.
#[derive(Parser, Debug)]
#[command(name = "pagesim", author, version)]
struct Cli {
    /// Trace file, one `R|W <address>` per line. Reads stdin when absent or `-`.
    trace: Option<PathBuf>,

    /// JSON configuration file. Flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of virtual pages.
    #[arg(short = 'p', long)]
    pages: Option<usize>,

    /// Number of physical frames.
    #[arg(short = 'f', long)]
    frames: Option<usize>,

    /// Page size in bytes.
    #[arg(short = 's', long)]
    page_size: Option<usize>,

    /// Replacement policy: fifo, lru or random.
    #[arg(short = 'P', long)]
    policy: Option<PolicyKind>,

    /// Seed for the random policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Log every translation, fault and eviction.
    #[arg(short, long)]
    verbose: bool,

    /// Print the counters as JSON instead of the tables.
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<SimConfig, DemoError> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => SimConfig::default(),
    };

    if let Some(pages) = cli.pages {
        config.num_pages = pages;
    }
    if let Some(frames) = cli.frames {
        config.num_frames = frames;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.verbose |= cli.verbose;

    Ok(config)
}

fn open_trace(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>, DemoError> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(Box::new(BufReader::new(File::open(path)?))),
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn print_report<R: PageReplacer>(mmu: &Mmu<R>, config: &SimConfig) {
    println!(
        "{} pages, {} frames, page size {}, policy {}",
        config.num_pages, config.num_frames, config.page_size, config.policy
    );
    println!();
    print!("{}", PageTableDump(&mmu.page_table_dump()));
    println!();
    print!("{}", FrameTableDump(&mmu.frame_table_dump()));
    println!();
    println!("{}", mmu.stats());
    println!();
    println!("{}", mmu.policy_description());
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };

    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let config = load_config(&cli)?;
    init_logger(config.verbose);

    let mut mmu = Mmu::from_config(&config)?;

    info!(
        "simulating {} pages over {} frames ({} policy)",
        config.num_pages, config.num_frames, config.policy
    );

    for entry in TraceReader::new(open_trace(cli.trace.as_ref())?) {
        let entry = entry?;

        match mmu.translate(entry.address, entry.access) {
            Ok(_) => {}
            Err(e @ MmuError::IllegalReference { .. }) => warn!("{}", e),
            Err(e) => return Err(DemoError::Simulation(e)),
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(mmu.stats())?);
    } else {
        print_report(&mmu, &config);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("pagesim: {}", e);
        process::exit(1);
    }
}
