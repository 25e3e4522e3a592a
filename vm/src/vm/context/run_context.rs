use crate::types::relocatable::Relocatable;

/// Registers of the current step. `ap` and `fp` always point into the execution segment.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    pub(crate) pc: Relocatable,
    pub(crate) ap: usize,
    pub(crate) fp: usize,
}

impl RunContext {
    pub fn new(pc: Relocatable, ap: usize, fp: usize) -> Self {
        RunContext { pc, ap, fp }
    }

    pub fn get_ap(&self) -> Relocatable {
        Relocatable::from((1, self.ap))
    }

    pub fn get_fp(&self) -> Relocatable {
        Relocatable::from((1, self.fp))
    }

    pub fn get_pc(&self) -> Relocatable {
        self.pc
    }
}
