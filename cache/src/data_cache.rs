use log::{debug, trace};
use memory::FrameNumber;

use crate::FifoMap;

/// Frame-keyed data cache in front of main memory. Holds at most
/// `CACHE_SIZE` frames and replaces them in insertion order.
#[derive(Debug, Clone)]
pub struct DataCache<const CACHE_SIZE: usize> {
    lines: FifoMap<FrameNumber, String>,
}

impl<const CACHE_SIZE: usize> DataCache<CACHE_SIZE> {
    pub fn init() -> Self {
        Self {
            lines: FifoMap::new(CACHE_SIZE),
        }
    }

    pub fn lookup(&self, frame_number: FrameNumber) -> Option<&str> {
        let data = self.lines.get(&frame_number).map(String::as_str);
        trace!("Cache lookup frame {} -> {:?}", frame_number, data);
        data
    }

    /// Stores the contents of a frame. Returns the frame that was evicted.
    pub fn fill(&mut self, frame_number: FrameNumber, data: String) -> Option<FrameNumber> {
        let (evicted_frame, _) = self.lines.put(frame_number, data)?;
        debug!("Cache full, evicted frame {}", evicted_frame);
        Some(evicted_frame)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        CACHE_SIZE
    }

    /// Cached frames from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = (FrameNumber, &str)> + '_ {
        self.lines.iter().map(|(frame, data)| (*frame, data.as_str()))
    }
}

impl<const CACHE_SIZE: usize> Default for DataCache<CACHE_SIZE> {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use memory::MainMemory;

    use super::DataCache;

    #[test]
    fn fill_from_memory() {
        let memory = MainMemory::<16>::init();
        let mut cache = DataCache::<8>::init();
        assert_eq!(cache.lookup(3), None);
        let data = memory.read(3).unwrap().to_owned();
        assert_eq!(cache.fill(3, data), None);
        assert_eq!(cache.lookup(3), Some("Data_3"));
    }

    #[test]
    fn evicts_oldest_frame() {
        let memory = MainMemory::<16>::init();
        let mut cache = DataCache::<8>::init();
        for frame in 0..8 {
            cache.fill(frame, memory.read(frame).unwrap().to_owned());
        }
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.fill(8, memory.read(8).unwrap().to_owned()), Some(0));
        assert_eq!(cache.fill(9, memory.read(9).unwrap().to_owned()), Some(1));
        assert_eq!(cache.len(), 8);
        assert_eq!(cache.lookup(0), None);
        assert_eq!(cache.lookup(9), Some("Data_9"));
        assert_eq!(cache.iter().next(), Some((2, "Data_2")));
    }
}
