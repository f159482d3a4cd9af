use log::{debug, trace};
use memory::FrameNumber;
use paging::PageNumber;

use crate::FifoMap;

/// Translation lookaside buffer holding at most `TLB_SIZE` page -> frame
/// translations, replaced first in first out.
#[derive(Debug, Clone)]
pub struct Tlb<const TLB_SIZE: usize> {
    entries: FifoMap<PageNumber, FrameNumber>,
}

impl<const TLB_SIZE: usize> Tlb<TLB_SIZE> {
    pub fn init() -> Self {
        Self {
            entries: FifoMap::new(TLB_SIZE),
        }
    }

    pub fn lookup(&self, page_number: PageNumber) -> Option<FrameNumber> {
        let frame_number = self.entries.get(&page_number).copied();
        trace!("TLB lookup page {} -> {:?}", page_number, frame_number);
        frame_number
    }

    /// Caches a translation. Returns the page whose translation was evicted.
    pub fn insert(
        &mut self,
        page_number: PageNumber,
        frame_number: FrameNumber,
    ) -> Option<PageNumber> {
        let (evicted_page, _) = self.entries.put(page_number, frame_number)?;
        debug!("TLB full, evicted page {}", evicted_page);
        Some(evicted_page)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        TLB_SIZE
    }

    /// Translations from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = (PageNumber, FrameNumber)> + '_ {
        self.entries.iter().map(|(page, frame)| (*page, *frame))
    }
}

impl<const TLB_SIZE: usize> Default for Tlb<TLB_SIZE> {
    fn default() -> Self {
        Self::init()
    }
}
