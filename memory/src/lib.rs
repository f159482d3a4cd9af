use log::trace;
use thiserror::Error;

/// Index of a slot in main memory. Also used as the data cache key.
pub type FrameNumber = u32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    #[error("frame {frame} is outside of main memory (0..{frames})")]
    OutOfRangeFrame { frame: FrameNumber, frames: usize },
}

pub fn make_label(index: usize) -> String {
    let mut label = String::from("Data_");
    label.push_str(&index.to_string());
    label
}

/// Simulated main memory holding one data unit per frame.
///
/// The contents are fixed when the memory is created and never change
/// afterwards, so reads only need a shared reference.
#[derive(Debug, Clone)]
pub struct MainMemory<const NUM_PAGES: usize> {
    frames: Vec<String>,
}

impl<const NUM_PAGES: usize> MainMemory<NUM_PAGES> {
    pub fn init() -> Self {
        let frames = (0..NUM_PAGES).map(make_label).collect();
        Self { frames }
    }

    pub fn capacity(&self) -> usize {
        NUM_PAGES
    }

    pub fn check_frame(&self, frame: FrameNumber) -> Result<(), MemoryError> {
        if frame as usize >= NUM_PAGES {
            return Err(MemoryError::OutOfRangeFrame {
                frame,
                frames: NUM_PAGES,
            });
        }
        Ok(())
    }

    pub fn read(&self, frame: FrameNumber) -> Result<&str, MemoryError> {
        self.check_frame(frame)?;
        trace!("Reading frame[{}] from main memory", frame);
        Ok(&self.frames[frame as usize])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(String::as_str)
    }
}

impl<const NUM_PAGES: usize> Default for MainMemory<NUM_PAGES> {
    fn default() -> Self {
        Self::init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let mem = MainMemory::<16>::init();
        assert_eq!(mem.capacity(), 16);
        assert_eq!(mem.iter().count(), 16);
    }

    #[test]
    fn test_labels() {
        let mem = MainMemory::<16>::init();
        assert_eq!(mem.read(0).unwrap(), "Data_0");
        assert_eq!(mem.read(7).unwrap(), "Data_7");
        assert_eq!(mem.read(15).unwrap(), "Data_15");
    }

    #[test]
    fn test_read_every_frame() {
        let mem = MainMemory::<64>::init();
        for i in 0..64 {
            assert_eq!(mem.read(i).unwrap(), format!("Data_{}", i));
        }
    }

    #[test]
    fn test_read_invalid_frame() {
        let mem = MainMemory::<16>::init();
        assert_eq!(
            mem.read(16),
            Err(MemoryError::OutOfRangeFrame {
                frame: 16,
                frames: 16
            })
        );
        assert!(mem.check_frame(u32::MAX).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = MainMemory::<4>::init().read(9).unwrap_err();
        assert_eq!(err.to_string(), "frame 9 is outside of main memory (0..4)");
    }
}
