use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use memsim::{random_address, repl::REPL, DefaultResolver, MEMORY_SIZE};
use rand::{rngs::StdRng, SeedableRng};

/// Walks random virtual addresses through a TLB, a page table and a data cache.
#[derive(Parser, Debug)]
#[command(name = "memsim", version)]
struct Args {
    /// Number of random addresses to resolve
    #[arg(short = 'n', long, default_value_t = 10)]
    accesses: usize,

    /// Seed for the address generator, for repeatable runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read addresses from stdin instead of generating them
    #[arg(short, long)]
    interactive: bool,

    /// Print hit and miss counters at the end
    #[arg(long)]
    stats: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut resolver = DefaultResolver::init();

    if args.interactive {
        info!("Starting interactive session");
        let mut stdout = io::stdout().lock();
        REPL::stdin().run(&mut resolver, &mut stdout)?;
    } else {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "Resolving {} random addresses in 0..{}",
            args.accesses, MEMORY_SIZE
        );
        for _ in 0..args.accesses {
            let result = resolver.resolve(random_address(&mut rng))?;
            println!("\n{}", result);
        }
    }

    if args.stats {
        println!("\n{}", resolver.stats());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("memsim: {}", err);
            ExitCode::FAILURE
        }
    }
}
