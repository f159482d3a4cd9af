mod frame_allocator;
mod iter;
mod page_table_entry;

use std::collections::HashMap;

use log::debug;
use memory::FrameNumber;

pub use frame_allocator::FrameAllocator;
pub use iter::PageTableIterator;
pub use page_table_entry::PageTableEntry;

use crate::address::PageNumber;

/// Unbounded page number -> frame number mapping.
///
/// The table only grows: a page that faulted in keeps its frame for the
/// lifetime of the table.
#[derive(Debug, Clone)]
pub struct PageTable<const NUM_PAGES: usize> {
    // Fault order
    entries: Vec<PageTableEntry>,
    index: HashMap<PageNumber, usize>,
    allocator: FrameAllocator<NUM_PAGES>,
}

impl<const NUM_PAGES: usize> PageTable<NUM_PAGES> {
    pub fn init() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            allocator: FrameAllocator::init(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_entry(&self, page_number: PageNumber) -> Option<&PageTableEntry> {
        let position = *self.index.get(&page_number)?;
        self.entries.get(position)
    }

    pub fn lookup(&self, page_number: PageNumber) -> Option<FrameNumber> {
        let entry = self.get_entry(page_number)?;
        Some(entry.get_frame_number())
    }

    /// Maps `page_number` to the next frame, `len() % NUM_PAGES`.
    ///
    /// Meant to be called after `lookup` missed. A page that is already mapped
    /// keeps its frame and nothing is allocated.
    pub fn fault(&mut self, page_number: PageNumber) -> FrameNumber {
        if let Some(frame_number) = self.lookup(page_number) {
            return frame_number;
        }
        let frame_number = self.allocator.allocate_frame();
        debug_assert_eq!(frame_number as usize, self.entries.len() % NUM_PAGES);
        self.index.insert(page_number, self.entries.len());
        self.entries.push(PageTableEntry::new(page_number, frame_number));
        debug!(
            "Page fault: mapped page {} to frame {} ({} pages mapped)",
            page_number,
            frame_number,
            self.entries.len()
        );
        frame_number
    }

    /// Whether two different pages may now share a frame
    pub fn has_aliased_frames(&self) -> bool {
        self.allocator.is_aliasing()
    }

    pub fn iter(&self) -> PageTableIterator<'_> {
        PageTableIterator::new(&self.entries)
    }
}

impl<const NUM_PAGES: usize> Default for PageTable<NUM_PAGES> {
    fn default() -> Self {
        Self::init()
    }
}
