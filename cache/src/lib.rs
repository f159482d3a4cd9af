mod data_cache;
mod fifo_map;
mod tlb;

pub use data_cache::DataCache;
pub use fifo_map::FifoMap;
pub use tlb::Tlb;
