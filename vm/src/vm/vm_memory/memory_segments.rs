use crate::{
    types::relocatable::{MaybeRelocatable, Relocatable},
    vm::{errors::memory_errors::MemoryError, vm_memory::memory::Memory},
};

#[derive(Default)]
pub struct MemorySegmentManager {
    pub(crate) memory: Memory,
}

impl MemorySegmentManager {
    pub fn new() -> MemorySegmentManager {
        MemorySegmentManager {
            memory: Memory::new(),
        }
    }

    /// Number of segments in the real memory
    pub fn num_segments(&self) -> usize {
        self.memory.data.len()
    }

    ///Adds a new segment and returns its starting location as a Relocatable value. Its segment index will always be positive.
    pub fn add(&mut self) -> Relocatable {
        self.memory.data.push(Vec::new());
        Relocatable {
            segment_index: (self.memory.data.len() - 1) as isize,
            offset: 0,
        }
    }

    ///Writes data into the memory from address ptr and returns the first address after the data.
    pub fn load_data(
        &mut self,
        ptr: Relocatable,
        data: &[MaybeRelocatable],
    ) -> Result<Relocatable, MemoryError> {
        // Starting from the end ensures any necessary resize
        // is performed once with enough room for everything
        for (num, value) in data.iter().enumerate().rev() {
            self.memory.insert((ptr + num)?, value)?;
        }
        (ptr + data.len()).map_err(MemoryError::Math)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{relocatable, Felt252};

    #[test]
    fn add_segment_no_size() {
        let mut segments = MemorySegmentManager::new();
        let base = segments.add();
        assert_eq!(base, relocatable!(0, 0));
        assert_eq!(segments.num_segments(), 1);
    }

    #[test]
    fn add_segment_increases_index() {
        let mut segments = MemorySegmentManager::new();
        segments.add();
        segments.add();
        assert_eq!(segments.add(), relocatable!(2, 0));
        assert_eq!(segments.num_segments(), 3);
    }

    #[test]
    fn load_data_two_elements() {
        let data = vec![
            MaybeRelocatable::from(Felt252::from(4)),
            MaybeRelocatable::from((1, 2)),
        ];
        let mut segments = MemorySegmentManager::new();
        segments.add();
        let current_ptr = segments.load_data(relocatable!(0, 0), &data).unwrap();
        assert_eq!(current_ptr, relocatable!(0, 2));
        assert_eq!(segments.memory.get(&relocatable!(0, 0)), Some(&data[0]));
        assert_eq!(segments.memory.get(&relocatable!(0, 1)), Some(&data[1]));
        assert_eq!(segments.memory.data[0].len(), 2);
    }

    #[test]
    fn load_data_unallocated_segment() {
        let mut segments = MemorySegmentManager::new();
        assert_eq!(
            segments.load_data(relocatable!(0, 0), &[MaybeRelocatable::from(1_usize)]),
            Err(MemoryError::UnallocatedSegment(Box::new((0, 0))))
        );
    }
}
