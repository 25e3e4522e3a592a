use std::collections::HashMap;

use tracing::trace;

use crate::{
    types::relocatable::{MaybeRelocatable, Relocatable},
    vm::{errors::hint_errors::HintError, vm_core::VirtualMachine},
    Felt252,
};

#[derive(PartialEq, Eq, Debug, Clone)]
///Key-value store backing a Cairo dictionary, bound to one memory segment.
pub struct Dictionary {
    data: HashMap<Felt252, MaybeRelocatable>,
    //None means lookups of missing keys fail.
    default_value: Option<MaybeRelocatable>,
    //First unused position in the dict segment.
    free_offset: usize,
}

impl Dictionary {
    pub fn new(data: HashMap<Felt252, MaybeRelocatable>) -> Self {
        Dictionary {
            data,
            default_value: None,
            free_offset: 0,
        }
    }

    pub fn new_default(default_value: MaybeRelocatable) -> Self {
        Dictionary {
            data: HashMap::new(),
            default_value: Some(default_value),
            free_offset: 0,
        }
    }

    /// Returns the value stored under `key`, or the default value if there is one.
    /// A miss never inserts the key.
    pub fn get(&self, key: &Felt252) -> Result<&MaybeRelocatable, HintError> {
        self.data
            .get(key)
            .or(self.default_value.as_ref())
            .ok_or_else(|| HintError::NoValueForKey(Box::new(*key)))
    }

    pub fn insert(&mut self, key: Felt252, value: MaybeRelocatable) {
        self.data.insert(key, value);
    }

    pub fn increment_free_offset(&mut self, delta: usize) {
        self.free_offset += delta;
    }

    pub fn set_free_offset(&mut self, free_offset: usize) {
        self.free_offset = free_offset;
    }

    pub fn free_offset(&self) -> usize {
        self.free_offset
    }

    pub fn default_value(&self) -> Option<&MaybeRelocatable> {
        self.default_value.as_ref()
    }

    pub fn data(&self) -> &HashMap<Felt252, MaybeRelocatable> {
        &self.data
    }

    /// Independent snapshot: later changes to either dictionary are not seen by the other.
    pub fn copy(&self) -> Dictionary {
        self.clone()
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
///Manages dictionaries in a Cairo program.
///Uses the segment index to associate the corresponding dictionary with the Cairo dict.
pub struct DictManager {
    pub dictionaries: HashMap<isize, Dictionary>,
}

impl DictManager {
    pub fn new() -> Self {
        DictManager {
            dictionaries: HashMap::<isize, Dictionary>::new(),
        }
    }

    //Creates a new Cairo dictionary on a fresh segment, returns the segment base as the handle
    pub fn new_dict(
        &mut self,
        vm: &mut VirtualMachine,
        initial_dict: HashMap<Felt252, MaybeRelocatable>,
    ) -> Result<Relocatable, HintError> {
        let base = vm.add_memory_segment();
        self.register(base, Dictionary::new(initial_dict))
    }

    //Creates a new Cairo default dictionary
    pub fn new_default_dict(
        &mut self,
        vm: &mut VirtualMachine,
        default_value: &MaybeRelocatable,
    ) -> Result<Relocatable, HintError> {
        let base = vm.add_memory_segment();
        self.register(base, Dictionary::new_default(default_value.clone()))
    }

    fn register(
        &mut self,
        base: Relocatable,
        dictionary: Dictionary,
    ) -> Result<Relocatable, HintError> {
        if self.dictionaries.contains_key(&base.segment_index) {
            return Err(HintError::CantCreateDictionaryOnTakenSegment(
                base.segment_index,
            ));
        }
        trace!(
            segment_index = base.segment_index,
            entries = dictionary.data.len(),
            default = dictionary.default_value.is_some(),
            "allocated dictionary"
        );
        self.dictionaries.insert(base.segment_index, dictionary);
        Ok(base)
    }

    // Only the segment index of `dict_ptr` identifies the dictionary, its offset is not checked
    // against the free offset, so any address inside the segment resolves to the same dictionary.
    pub fn get_dict(&self, dict_ptr: Relocatable) -> Result<&Dictionary, HintError> {
        self.dictionaries
            .get(&dict_ptr.segment_index)
            .ok_or(HintError::UnknownDictionary(dict_ptr.segment_index))
    }

    pub fn get_dict_mut(&mut self, dict_ptr: Relocatable) -> Result<&mut Dictionary, HintError> {
        self.dictionaries
            .get_mut(&dict_ptr.segment_index)
            .ok_or(HintError::UnknownDictionary(dict_ptr.segment_index))
    }

    pub fn get_value(
        &self,
        dict_ptr: Relocatable,
        key: &Felt252,
    ) -> Result<&MaybeRelocatable, HintError> {
        self.get_dict(dict_ptr)?.get(key)
    }

    pub fn insert_value(
        &mut self,
        dict_ptr: Relocatable,
        key: Felt252,
        value: MaybeRelocatable,
    ) -> Result<(), HintError> {
        self.get_dict_mut(dict_ptr)?.insert(key, value);
        Ok(())
    }

    pub fn increment_free_offset(
        &mut self,
        dict_ptr: Relocatable,
        delta: usize,
    ) -> Result<(), HintError> {
        self.get_dict_mut(dict_ptr)?.increment_free_offset(delta);
        Ok(())
    }

    pub fn set_free_offset(
        &mut self,
        dict_ptr: Relocatable,
        free_offset: usize,
    ) -> Result<(), HintError> {
        self.get_dict_mut(dict_ptr)?.set_free_offset(free_offset);
        Ok(())
    }

    pub fn get_dict_copy(&self, dict_ptr: Relocatable) -> Result<Dictionary, HintError> {
        Ok(self.get_dict(dict_ptr)?.copy())
    }
}
