use memory::FrameNumber;

use crate::address::PageNumber;

/// Maps a virtual page to the frame it was loaded into.
/// Entries are never rewritten once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTableEntry {
    page_number: PageNumber,
    frame_number: FrameNumber,
}

impl PageTableEntry {
    pub(super) fn new(page_number: PageNumber, frame_number: FrameNumber) -> Self {
        PageTableEntry {
            page_number,
            frame_number,
        }
    }

    pub fn get_page_number(&self) -> PageNumber {
        self.page_number
    }

    pub fn get_frame_number(&self) -> FrameNumber {
        self.frame_number
    }
}
