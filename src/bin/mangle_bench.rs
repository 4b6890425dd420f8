//! Minimal multi-worker driver for `manglecore`.
//!
//! Loads a seed input (and optional dictionary), then spawns one OS thread
//! per worker, each running its own `MutationContext` seeded from a
//! per-worker RNG stream so a run is reproducible from `--seed` alone. This
//! stands in for the corpus management, coverage feedback, and process
//! supervision a real fuzzer driver would add around the core.

use std::fs;
use std::path::PathBuf;
use std::thread;

use manglecore::{mangle_content, MutationContext, VecBuffer};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "mangle-bench", about = "Drive manglecore over a seed input")]
struct Settings {
    /// Seed input file to mutate.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Hard upper bound on mutated output size.
    #[structopt(long, default_value = "65536")]
    max_file_sz: usize,

    /// Upper bound on stacked operators per session.
    #[structopt(long, default_value = "6")]
    mutations_per_run: u32,

    /// Restrict every write to printable ASCII.
    #[structopt(long)]
    printable: bool,

    /// Optional newline-delimited dictionary file.
    #[structopt(long, parse(from_os_str))]
    dictionary: Option<PathBuf>,

    /// Base RNG seed; worker `i` runs with `seed + i`.
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Number of concurrent worker threads.
    #[structopt(long, default_value = "1")]
    workers: u32,

    /// Mutation sessions to run per worker.
    #[structopt(long, default_value = "1000")]
    iterations: u64,
}

fn load_dictionary(path: &PathBuf) -> std::io::Result<Vec<Vec<u8>>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().filter(|l| !l.is_empty()).map(|l| l.as_bytes().to_vec()).collect())
}

fn run_worker(id: u32, seed: u64, initial: Vec<u8>, settings: &Settings) {
    let dictionary = settings
        .dictionary
        .as_ref()
        .map(|p| load_dictionary(p).unwrap_or_else(|e| {
            log::warn!("worker {id}: failed to load dictionary: {e}");
            Vec::new()
        }))
        .unwrap_or_default();

    let buf = VecBuffer::from_initial(&initial, settings.max_file_sz);
    let mut ctx = match MutationContext::new(
        buf,
        initial.len(),
        dictionary,
        settings.mutations_per_run,
        settings.printable,
        SmallRng::seed_from_u64(seed),
    ) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("worker {id}: failed to build context: {e}");
            return;
        }
    };

    for i in 0..settings.iterations {
        if let Err(e) = mangle_content(&mut ctx) {
            log::error!("worker {id}: session {i} failed: {e}");
            return;
        }
    }
    log::info!("worker {id}: completed {} sessions, final size {}", settings.iterations, ctx.size());
}

fn main() {
    env_logger::init();
    let settings = Settings::from_args();

    let initial = match fs::read(&settings.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("failed to read {:?}: {e}", settings.input);
            std::process::exit(1);
        }
    };
    if initial.is_empty() || initial.len() > settings.max_file_sz {
        log::error!(
            "input size {} is out of range 1..={}",
            initial.len(),
            settings.max_file_sz
        );
        std::process::exit(1);
    }

    log::info!("starting {} worker(s), {} session(s) each", settings.workers, settings.iterations);

    let handles: Vec<_> = (0..settings.workers)
        .map(|id| {
            let initial = initial.clone();
            let seed = settings.seed + id as u64;
            let settings = Settings {
                input: settings.input.clone(),
                max_file_sz: settings.max_file_sz,
                mutations_per_run: settings.mutations_per_run,
                printable: settings.printable,
                dictionary: settings.dictionary.clone(),
                seed: settings.seed,
                workers: settings.workers,
                iterations: settings.iterations,
            };
            thread::spawn(move || run_worker(id, seed, initial, &settings))
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            log::error!("a worker thread panicked");
        }
    }
}
