use memory::MemoryError;
use paging::AddressError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The virtual address lies outside of the address space.
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),
    /// A frame number fell outside of main memory. Frame allocation wraps
    /// modulo the number of frames, so this means the simulator itself is broken.
    #[error("frame allocation invariant violated: {0}")]
    OutOfRangeFrame(#[from] MemoryError),
}
