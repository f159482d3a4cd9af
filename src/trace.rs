use std::fmt;

use memory::FrameNumber;
use paging::{Offset, PageNumber};

/// One step taken while resolving a virtual address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    TlbHit { page: PageNumber, frame: FrameNumber },
    TlbMiss { page: PageNumber },
    PageTableHit { page: PageNumber, frame: FrameNumber },
    PageFault { page: PageNumber, frame: FrameNumber },
    CacheHit { frame: FrameNumber },
    CacheMiss { frame: FrameNumber },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::TlbHit { page, frame } => {
                write!(f, "TLB Hit: Page {} -> Frame {}", page, frame)
            }
            TraceEvent::TlbMiss { .. } => write!(f, "TLB Miss"),
            TraceEvent::PageTableHit { page, frame } => {
                write!(f, "Page Table Hit: Page {} -> Frame {}", page, frame)
            }
            TraceEvent::PageFault { page, frame } => {
                write!(f, "Page Fault: Loaded Page {} into Frame {}", page, frame)
            }
            TraceEvent::CacheHit { frame } => write!(f, "Cache Hit: Frame {}", frame),
            TraceEvent::CacheMiss { frame } => {
                write!(f, "Cache Miss: Loading Frame {} into Cache", frame)
            }
        }
    }
}

/// Everything observed while resolving one virtual address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub virtual_address: i64,
    pub page: PageNumber,
    pub offset: Offset,
    pub frame: FrameNumber,
    pub data: String,
    pub trace: Vec<TraceEvent>,
    /// Page whose translation left the TLB during this access
    pub tlb_eviction: Option<PageNumber>,
    /// Frame that left the data cache during this access
    pub cache_eviction: Option<FrameNumber>,
}

impl ResolutionResult {
    pub fn tlb_hit(&self) -> bool {
        self.trace
            .iter()
            .any(|event| matches!(event, TraceEvent::TlbHit { .. }))
    }

    pub fn page_fault(&self) -> bool {
        self.trace
            .iter()
            .any(|event| matches!(event, TraceEvent::PageFault { .. }))
    }

    pub fn cache_hit(&self) -> bool {
        self.trace
            .iter()
            .any(|event| matches!(event, TraceEvent::CacheHit { .. }))
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Accessing Virtual Address: {} (Page {}, Offset {})",
            self.virtual_address, self.page, self.offset
        )?;
        for event in self.trace.iter() {
            writeln!(f, "{}", event)?;
        }
        write!(f, "Data at address {}: {}", self.virtual_address, self.data)
    }
}
