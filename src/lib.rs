use rand::Rng;

pub mod error;
pub mod meta_commands;
pub mod repl;
pub mod resolver;
pub mod stats;
pub mod trace;

pub use error::ResolveError;
pub use resolver::Resolver;
pub use stats::Statistics;
pub use trace::{ResolutionResult, TraceEvent};

pub const PAGE_SIZE: usize = 256;
pub const NUM_PAGES: usize = 16;
pub const TLB_SIZE: usize = 4;
pub const CACHE_SIZE: usize = 8;
pub const MEMORY_SIZE: usize = PAGE_SIZE * NUM_PAGES;

pub type DefaultResolver = Resolver<PAGE_SIZE, NUM_PAGES, TLB_SIZE, CACHE_SIZE>;

/// Uniformly random virtual address in `0..MEMORY_SIZE`.
pub fn random_address<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..MEMORY_SIZE as i64)
}
