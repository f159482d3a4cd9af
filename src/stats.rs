use std::fmt;

use crate::trace::{ResolutionResult, TraceEvent};

/// Running counters over successful resolutions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub accesses: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
    pub page_table_hits: u64,
    pub page_faults: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub tlb_evictions: u64,
    pub cache_evictions: u64,
}

fn ratio(hits: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64
}

impl Statistics {
    pub fn record(&mut self, result: &ResolutionResult) {
        self.accesses += 1;
        for event in result.trace.iter() {
            match event {
                TraceEvent::TlbHit { .. } => self.tlb_hits += 1,
                TraceEvent::TlbMiss { .. } => self.tlb_misses += 1,
                TraceEvent::PageTableHit { .. } => self.page_table_hits += 1,
                TraceEvent::PageFault { .. } => self.page_faults += 1,
                TraceEvent::CacheHit { .. } => self.cache_hits += 1,
                TraceEvent::CacheMiss { .. } => self.cache_misses += 1,
            }
        }
        if result.tlb_eviction.is_some() {
            self.tlb_evictions += 1;
        }
        if result.cache_eviction.is_some() {
            self.cache_evictions += 1;
        }
    }

    pub fn tlb_hit_ratio(&self) -> f64 {
        ratio(self.tlb_hits, self.tlb_hits + self.tlb_misses)
    }

    pub fn cache_hit_ratio(&self) -> f64 {
        ratio(self.cache_hits, self.cache_hits + self.cache_misses)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accesses: {}", self.accesses)?;
        writeln!(
            f,
            "TLB: {} hits, {} misses ({:.2}% hit ratio), {} evictions",
            self.tlb_hits,
            self.tlb_misses,
            self.tlb_hit_ratio() * 100.0,
            self.tlb_evictions
        )?;
        writeln!(
            f,
            "Page table: {} hits, {} faults",
            self.page_table_hits, self.page_faults
        )?;
        write!(
            f,
            "Cache: {} hits, {} misses ({:.2}% hit ratio), {} evictions",
            self.cache_hits,
            self.cache_misses,
            self.cache_hit_ratio() * 100.0,
            self.cache_evictions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access(trace: Vec<TraceEvent>) -> ResolutionResult {
        ResolutionResult {
            virtual_address: 0,
            page: 0,
            offset: 0,
            frame: 0,
            data: String::from("Data_0"),
            trace,
            tlb_eviction: None,
            cache_eviction: Some(3),
        }
    }

    #[test]
    fn empty_ratios() {
        let stats = Statistics::default();
        assert_eq!(stats.tlb_hit_ratio(), 0.0);
        assert_eq!(stats.cache_hit_ratio(), 0.0);
    }

    #[test]
    fn counts_events() {
        let mut stats = Statistics::default();
        stats.record(&access(vec![
            TraceEvent::TlbMiss { page: 0 },
            TraceEvent::PageFault { page: 0, frame: 0 },
            TraceEvent::CacheMiss { frame: 0 },
        ]));
        stats.record(&access(vec![
            TraceEvent::TlbHit { page: 0, frame: 0 },
            TraceEvent::CacheHit { frame: 0 },
        ]));
        assert_eq!(stats.accesses, 2);
        assert_eq!(stats.tlb_hits, 1);
        assert_eq!(stats.tlb_misses, 1);
        assert_eq!(stats.page_faults, 1);
        assert_eq!(stats.page_table_hits, 0);
        assert_eq!(stats.cache_evictions, 2);
        assert_eq!(stats.tlb_hit_ratio(), 0.5);
        assert_eq!(stats.cache_hit_ratio(), 0.5);
        assert!(stats.to_string().contains("TLB: 1 hits, 1 misses (50.00% hit ratio)"));
    }
}
