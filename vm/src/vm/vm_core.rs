use crate::{
    types::relocatable::{MaybeRelocatable, Relocatable},
    vm::{
        context::run_context::RunContext, errors::memory_errors::MemoryError,
        vm_memory::memory_segments::MemorySegmentManager,
    },
    Felt252,
};

/// The part of the Cairo virtual machine visible to hints: registers and segmented memory.
///
/// Instruction decoding and stepping live outside this crate; whoever drives the run updates
/// `run_context` between steps and hands the machine to the hint runner at each hinted pc.
#[derive(Default)]
pub struct VirtualMachine {
    pub(crate) run_context: RunContext,
    pub segments: MemorySegmentManager,
}

impl VirtualMachine {
    pub fn new() -> VirtualMachine {
        VirtualMachine {
            run_context: RunContext::default(),
            segments: MemorySegmentManager::new(),
        }
    }

    pub fn set_pc(&mut self, pc: Relocatable) {
        self.run_context.pc = pc;
    }

    pub fn set_ap(&mut self, ap: usize) {
        self.run_context.ap = ap;
    }

    pub fn set_fp(&mut self, fp: usize) {
        self.run_context.fp = fp;
    }

    pub fn add_memory_segment(&mut self) -> Relocatable {
        self.segments.add()
    }

    pub fn get_ap(&self) -> Relocatable {
        self.run_context.get_ap()
    }

    pub fn get_fp(&self) -> Relocatable {
        self.run_context.get_fp()
    }

    pub fn get_pc(&self) -> Relocatable {
        self.run_context.get_pc()
    }

    ///Gets the integer value corresponding to the Relocatable address
    pub fn get_integer(&self, key: Relocatable) -> Result<Felt252, MemoryError> {
        self.segments.memory.get_integer(key)
    }

    ///Gets the relocatable value corresponding to the Relocatable address
    pub fn get_relocatable(&self, key: Relocatable) -> Result<Relocatable, MemoryError> {
        self.segments.memory.get_relocatable(key)
    }

    ///Gets a MaybeRelocatable value from memory indicated by a generic address
    pub fn get_maybe(&self, key: &Relocatable) -> Option<MaybeRelocatable> {
        self.segments.memory.get(key).cloned()
    }

    /// Gets n integer values from memory starting from addr (n being size)
    pub fn get_integer_range(
        &self,
        addr: Relocatable,
        size: usize,
    ) -> Result<Vec<Felt252>, MemoryError> {
        self.segments.memory.get_integer_range(addr, size)
    }

    ///Inserts a value into a memory address given by a Relocatable value
    pub fn insert_value<T: Into<MaybeRelocatable>>(
        &mut self,
        key: Relocatable,
        val: T,
    ) -> Result<(), MemoryError> {
        self.segments.memory.insert_value(key, val)
    }

    ///Writes data into the memory from address ptr and returns the first address after the data.
    pub fn load_data(
        &mut self,
        ptr: Relocatable,
        data: &[MaybeRelocatable],
    ) -> Result<Relocatable, MemoryError> {
        self.segments.load_data(ptr, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{relocatable, utils::test_utils::*};
    use assert_matches::assert_matches;

    #[test]
    fn add_memory_segment_returns_base() {
        let mut vm = vm!();
        assert_eq!(vm.add_memory_segment(), relocatable!(0, 0));
        assert_eq!(vm.add_memory_segment(), relocatable!(1, 0));
    }

    #[test]
    fn insert_value_is_write_once() {
        let mut vm = vm!();
        vm.segments = segments![((1, 0), 3)];
        assert_matches!(vm.insert_value(relocatable!(1, 0), Felt252::from(3)), Ok(()));
        assert_matches!(
            vm.insert_value(relocatable!(1, 0), Felt252::from(4)),
            Err(MemoryError::InconsistentMemory(_))
        );
    }

    #[test]
    fn registers_follow_run_context() {
        let mut vm = vm!();
        vm.set_ap(3);
        vm.set_fp(2);
        vm.set_pc(relocatable!(0, 9));
        assert_eq!(vm.get_ap(), relocatable!(1, 3));
        assert_eq!(vm.get_fp(), relocatable!(1, 2));
        assert_eq!(vm.get_pc(), relocatable!(0, 9));
    }
}
