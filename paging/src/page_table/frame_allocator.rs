use log::debug;
use memory::FrameNumber;

/// Hands out frame numbers round-robin over the `NUM_PAGES` frames of main
/// memory.
///
/// The n-th allocation (counting from zero) returns `n % NUM_PAGES`. Once more
/// than `NUM_PAGES` frames have been handed out, distinct pages share frames.
#[derive(Debug, Clone)]
pub struct FrameAllocator<const NUM_PAGES: usize> {
    allocated: usize,
}

impl<const NUM_PAGES: usize> FrameAllocator<NUM_PAGES> {
    pub fn init() -> Self {
        assert!(NUM_PAGES > 0, "Main memory must hold at least one frame");
        Self { allocated: 0 }
    }

    /// Number of frames handed out so far
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Whether frame numbers have started to repeat
    pub fn is_aliasing(&self) -> bool {
        self.allocated > NUM_PAGES
    }

    pub fn allocate_frame(&mut self) -> FrameNumber {
        let frame = (self.allocated % NUM_PAGES) as FrameNumber;
        if self.allocated == NUM_PAGES {
            debug!("All {} frames handed out, frame numbers now repeat", NUM_PAGES);
        }
        self.allocated += 1;
        frame
    }
}
