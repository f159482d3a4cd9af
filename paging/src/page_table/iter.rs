use super::PageTableEntry;

/// Walks the page table entries in the order the pages faulted in.
pub struct PageTableIterator<'a> {
    current: usize,
    entries: &'a [PageTableEntry],
}

impl<'a> PageTableIterator<'a> {
    pub fn new(entries: &'a [PageTableEntry]) -> Self {
        Self {
            current: 0,
            entries,
        }
    }
}

impl<'a> Iterator for PageTableIterator<'a> {
    type Item = &'a PageTableEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.current)?;
        self.current += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageTableIterator<'_> {}
