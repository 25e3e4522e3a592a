use crate::{
    types::relocatable::{MaybeRelocatable, Relocatable},
    vm::errors::memory_errors::MemoryError,
    Felt252,
};

#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct MemoryCell(MaybeRelocatable);

impl MemoryCell {
    pub fn new(value: MaybeRelocatable) -> Self {
        MemoryCell(value)
    }

    pub fn get_value(&self) -> &MaybeRelocatable {
        &self.0
    }
}

/// Segmented, write-once address space.
///
/// Every cell can be written at most once with a given value; rewriting the same value is
/// accepted, rewriting a different one is an [`MemoryError::InconsistentMemory`] error.
#[derive(Default)]
pub struct Memory {
    pub(crate) data: Vec<Vec<Option<MemoryCell>>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            data: Vec::<Vec<Option<MemoryCell>>>::new(),
        }
    }

    /// Inserts a value into a memory address
    /// Will return an Error if the segment index given by the address corresponds to a non-allocated segment,
    /// or if the inserted value is inconsistent with the current value at the memory cell
    /// If the address isnt contiguous with previously inserted data, memory gaps will be represented by None values
    pub fn insert<V>(&mut self, key: Relocatable, val: V) -> Result<(), MemoryError>
    where
        MaybeRelocatable: From<V>,
    {
        let val = MaybeRelocatable::from(val);
        if key.segment_index.is_negative() {
            return Err(MemoryError::AddressInTemporarySegment(key.segment_index));
        }
        let (value_index, value_offset) = (key.segment_index as usize, key.offset);

        let data_len = self.data.len();
        let segment = self
            .data
            .get_mut(value_index)
            .ok_or_else(|| MemoryError::UnallocatedSegment(Box::new((value_index, data_len))))?;

        if segment.len() <= value_offset {
            let new_len = value_offset
                .checked_add(1)
                .ok_or(MemoryError::VecCapacityExceeded)?;
            segment
                .try_reserve(new_len.saturating_sub(segment.capacity()))
                .map_err(|_| MemoryError::VecCapacityExceeded)?;
            segment.resize(new_len, None);
        }

        match segment[value_offset] {
            None => segment[value_offset] = Some(MemoryCell::new(val)),
            Some(ref current_cell) => {
                if current_cell.get_value() != &val {
                    //Existing memory cannot be changed
                    return Err(MemoryError::InconsistentMemory(Box::new((
                        key,
                        current_cell.get_value().clone(),
                        val,
                    ))));
                }
            }
        };
        Ok(())
    }

    /// Inserts a value into memory
    /// Returns an error if the memory cell asignment is invalid
    pub fn insert_value<T: Into<MaybeRelocatable>>(
        &mut self,
        key: Relocatable,
        val: T,
    ) -> Result<(), MemoryError> {
        self.insert(key, val.into())
    }

    /// Retrieves a value from memory, None if the cell was never written
    pub fn get(&self, key: &Relocatable) -> Option<&MaybeRelocatable> {
        if key.segment_index.is_negative() {
            return None;
        }
        self.data
            .get(key.segment_index as usize)?
            .get(key.offset)?
            .as_ref()
            .map(MemoryCell::get_value)
    }

    /// Gets the value from memory address as a Felt252 value.
    /// Returns an Error if the value at the memory address is missing or not a Felt252.
    pub fn get_integer(&self, key: Relocatable) -> Result<Felt252, MemoryError> {
        match self
            .get(&key)
            .ok_or_else(|| MemoryError::UnknownMemoryCell(Box::new(key)))?
        {
            MaybeRelocatable::Int(int) => Ok(*int),
            _ => Err(MemoryError::ExpectedInteger(Box::new(key))),
        }
    }

    /// Gets the value from memory address as a Relocatable value.
    /// Returns an Error if the value at the memory address is missing or not a Relocatable.
    pub fn get_relocatable(&self, key: Relocatable) -> Result<Relocatable, MemoryError> {
        match self
            .get(&key)
            .ok_or_else(|| MemoryError::UnknownMemoryCell(Box::new(key)))?
        {
            MaybeRelocatable::RelocatableValue(rel) => Ok(*rel),
            _ => Err(MemoryError::ExpectedRelocatable(Box::new(key))),
        }
    }

    /// Gets a range of Felt252 memory values from addr to addr + size
    /// Fails if any of the values inside the range is missing (memory gap) or is not a Felt252
    pub fn get_integer_range(
        &self,
        addr: Relocatable,
        size: usize,
    ) -> Result<Vec<Felt252>, MemoryError> {
        let mut values = Vec::with_capacity(size);
        for i in 0..size {
            values.push(self.get_integer((addr + i)?)?);
        }
        Ok(values)
    }
}
