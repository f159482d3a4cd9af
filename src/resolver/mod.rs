
use cache::{DataCache, Tlb};
use log::{debug, trace};
use memory::MainMemory;
use paging::{decompose, PageTable};

use crate::{
    error::ResolveError,
    stats::Statistics,
    trace::{ResolutionResult, TraceEvent},
};

/// Resolves virtual addresses to data through a TLB, a page table and a
/// data cache in front of main memory.
///
/// The geometry is fixed by the const parameters: `PAGE_SIZE` bytes per page,
/// `NUM_PAGES` pages of address space and frames of main memory, and the
/// capacities of the TLB and data cache.
#[derive(Debug, Clone)]
pub struct Resolver<
    const PAGE_SIZE: usize,
    const NUM_PAGES: usize,
    const TLB_SIZE: usize,
    const CACHE_SIZE: usize,
> {
    memory: MainMemory<NUM_PAGES>,
    tlb: Tlb<TLB_SIZE>,
    page_table: PageTable<NUM_PAGES>,
    cache: DataCache<CACHE_SIZE>,
    stats: Statistics,
}

impl<const PAGE_SIZE: usize, const NUM_PAGES: usize, const TLB_SIZE: usize, const CACHE_SIZE: usize>
    Resolver<PAGE_SIZE, NUM_PAGES, TLB_SIZE, CACHE_SIZE>
{
    pub fn init() -> Self {
        assert!(PAGE_SIZE > 0, "Pages must hold at least one byte");
        Self {
            memory: MainMemory::init(),
            tlb: Tlb::init(),
            page_table: PageTable::init(),
            cache: DataCache::init(),
            stats: Statistics::default(),
        }
    }

    /// Size of the virtual address space in bytes
    pub const fn memory_size() -> usize {
        PAGE_SIZE * NUM_PAGES
    }

    /// Translates `virtual_address` and fetches the data of its frame.
    ///
    /// Addresses outside of `0..memory_size()` are rejected before any
    /// structure is touched.
    pub fn resolve(&mut self, virtual_address: i64) -> Result<ResolutionResult, ResolveError> {
        let (page, offset) = decompose::<PAGE_SIZE, NUM_PAGES>(virtual_address)?;
        trace!(
            "Resolving address {} (page {}, offset {})",
            virtual_address,
            page,
            offset
        );
        let mut events = Vec::with_capacity(4);
        let mut tlb_eviction = None;

        let frame = match self.tlb.lookup(page) {
            Some(frame) => {
                events.push(TraceEvent::TlbHit { page, frame });
                frame
            }
            None => {
                events.push(TraceEvent::TlbMiss { page });
                let frame = match self.page_table.lookup(page) {
                    Some(frame) => {
                        events.push(TraceEvent::PageTableHit { page, frame });
                        frame
                    }
                    None => {
                        let frame = self.page_table.fault(page);
                        events.push(TraceEvent::PageFault { page, frame });
                        frame
                    }
                };
                tlb_eviction = self.tlb.insert(page, frame);
                frame
            }
        };

        let mut cache_eviction = None;
        let data = match self.cache.lookup(frame) {
            Some(data) => {
                events.push(TraceEvent::CacheHit { frame });
                data.to_owned()
            }
            None => {
                events.push(TraceEvent::CacheMiss { frame });
                let data = self.memory.read(frame)?.to_owned();
                cache_eviction = self.cache.fill(frame, data.clone());
                data
            }
        };

        let result = ResolutionResult {
            virtual_address,
            page,
            offset,
            frame,
            data,
            trace: events,
            tlb_eviction,
            cache_eviction,
        };
        self.stats.record(&result);
        debug!(
            "Address {} resolved to frame {} in {} steps",
            virtual_address,
            frame,
            result.trace.len()
        );
        Ok(result)
    }

    /// Drops every translation and cached frame and clears the statistics.
    pub fn reset(&mut self) {
        *self = Self::init();
    }

    pub fn memory(&self) -> &MainMemory<NUM_PAGES> {
        &self.memory
    }

    pub fn tlb(&self) -> &Tlb<TLB_SIZE> {
        &self.tlb
    }

    pub fn page_table(&self) -> &PageTable<NUM_PAGES> {
        &self.page_table
    }

    pub fn cache(&self) -> &DataCache<CACHE_SIZE> {
        &self.cache
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }
}

impl<const PAGE_SIZE: usize, const NUM_PAGES: usize, const TLB_SIZE: usize, const CACHE_SIZE: usize>
    Default for Resolver<PAGE_SIZE, NUM_PAGES, TLB_SIZE, CACHE_SIZE>
{
    fn default() -> Self {
        Self::init()
    }
}
