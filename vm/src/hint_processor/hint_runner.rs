use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::{
    hint_processor::{
        builtin_hint_processor::{
            builtin_hint_processor_definition::compile_hint, usort::USORT_MAX_SIZE,
        },
        hint_processor_definition::{Hint, HintRunnerContext},
        operand::OperandResolver,
    },
    vm::{errors::vm_errors::VirtualMachineError, vm_core::VirtualMachine},
    Felt252,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HintRunnerConfig {
    /// Upper bound on the input length accepted by `UsortBody`, exposed to hints as
    /// `__usort_max_size`.
    pub usort_max_size: Option<u64>,
    /// Emit a `debug` event before each hint runs.
    pub trace_hints: bool,
}

impl HintRunnerConfig {
    pub fn from_json(json: &str) -> Result<HintRunnerConfig, VirtualMachineError> {
        serde_json::from_str(json)
            .map_err(|err| VirtualMachineError::InvalidConfig(err.to_string().into_boxed_str()))
    }
}

/// Holds the compiled hints of a program, keyed by the pc offset they are attached to, along
/// with the state they share during a run.
#[derive(Debug)]
pub struct HintRunner {
    pub hints: HashMap<usize, Vec<Hint>>,
    pub context: HintRunnerContext,
    pub config: HintRunnerConfig,
}

impl HintRunner {
    pub fn new(config: HintRunnerConfig) -> HintRunner {
        let mut context = HintRunnerContext::new();
        if let Some(max_size) = config.usort_max_size {
            context
                .exec_scopes
                .insert_value(USORT_MAX_SIZE, Felt252::from(max_size));
        }
        HintRunner {
            hints: HashMap::new(),
            context,
            config,
        }
    }

    /// Compiles `hint_code` against `resolver` and appends it to the hints run at `pc`.
    pub fn add_hint<R: OperandResolver + ?Sized>(
        &mut self,
        pc: usize,
        hint_code: &str,
        resolver: &R,
    ) -> Result<(), VirtualMachineError> {
        let hint = compile_hint(hint_code, resolver).map_err(|err| {
            VirtualMachineError::CompileHintFail(Box::new((hint_code.to_string(), err)))
        })?;
        self.hints.entry(pc).or_default().push(hint);
        Ok(())
    }

    /// Runs every hint attached to the current pc, in the order they were added.
    /// The first failing hint aborts the rest.
    pub fn run_hints(&mut self, vm: &mut VirtualMachine) -> Result<(), VirtualMachineError> {
        // Hints are keyed by program offset only, the pc segment is not checked
        let pc = vm.get_pc().offset;
        let Some(hints) = self.hints.get(&pc) else {
            return Ok(());
        };
        for hint in hints {
            if self.config.trace_hints {
                debug!(hint = hint.name(), pc, "executing hint");
            }
            hint.execute(vm, &mut self.context)
                .map_err(|err| VirtualMachineError::Hint(Box::new((hint.name().to_string(), err))))?;
        }
        Ok(())
    }
}

impl Default for HintRunner {
    fn default() -> Self {
        Self::new(HintRunnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hint_processor::builtin_hint_processor::hint_code,
        relocatable,
        types::relocatable::{MaybeRelocatable, Relocatable},
        utils::test_utils::*,
        vm::errors::hint_errors::HintError,
    };
    use assert_matches::assert_matches;

    #[test]
    fn config_from_json() {
        let config =
            HintRunnerConfig::from_json(r#"{"usort_max_size": 1024, "trace_hints": true}"#)
                .unwrap();
        assert_eq!(
            config,
            HintRunnerConfig {
                usort_max_size: Some(1024),
                trace_hints: true,
            }
        );
    }

    #[test]
    fn config_from_json_defaults_missing_fields() {
        assert_eq!(
            HintRunnerConfig::from_json("{}").unwrap(),
            HintRunnerConfig::default()
        );
    }

    #[test]
    fn config_from_json_rejects_unknown_fields() {
        assert_matches!(
            HintRunnerConfig::from_json(r#"{"usort_max": 3}"#),
            Err(VirtualMachineError::InvalidConfig(_))
        );
    }

    #[test]
    fn new_seeds_usort_max_size() {
        let runner = HintRunner::new(HintRunnerConfig {
            usort_max_size: Some(7),
            trace_hints: false,
        });
        assert_eq!(
            runner.context.exec_scopes.get::<Felt252>(USORT_MAX_SIZE).unwrap(),
            Felt252::from(7)
        );
    }

    #[test]
    fn new_without_bound_leaves_scope_empty() {
        let runner = HintRunner::default();
        assert!(runner
            .context
            .exec_scopes
            .get_local_variables()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn add_hint_unknown_code() {
        let mut runner = HintRunner::default();
        let ids_data = ids_data!["value"];
        assert_matches!(
            runner.add_hint(0, "NotAHint", &ids_data),
            Err(VirtualMachineError::CompileHintFail(bx))
                if bx.0 == "NotAHint" && matches!(bx.1, HintError::UnknownHint(_))
        );
        assert!(runner.hints.is_empty());
    }

    #[test]
    fn run_hints_only_at_current_pc() {
        let mut vm = vm!();
        let mut runner = HintRunner::default();
        let ids_data = ids_data!["value"];
        runner
            .add_hint(3, hint_code::VM_ENTER_SCOPE, &ids_data)
            .unwrap();
        runner
            .add_hint(3, hint_code::VM_ENTER_SCOPE, &ids_data)
            .unwrap();
        runner
            .add_hint(5, hint_code::VM_EXIT_SCOPE, &ids_data)
            .unwrap();

        vm.set_pc(relocatable!(0, 0));
        assert_matches!(runner.run_hints(&mut vm), Ok(()));
        assert_eq!(runner.context.exec_scopes.depth(), 1);

        vm.set_pc(relocatable!(0, 3));
        assert_matches!(runner.run_hints(&mut vm), Ok(()));
        assert_eq!(runner.context.exec_scopes.depth(), 3);

        vm.set_pc(relocatable!(0, 5));
        assert_matches!(runner.run_hints(&mut vm), Ok(()));
        assert_eq!(runner.context.exec_scopes.depth(), 2);
    }

    #[test]
    fn run_hints_matches_offset_in_any_segment() {
        let mut vm = vm!();
        let mut runner = HintRunner::default();
        let ids_data = ids_data!["value"];
        runner
            .add_hint(2, hint_code::VM_ENTER_SCOPE, &ids_data)
            .unwrap();
        vm.set_pc(relocatable!(4, 2));
        assert_matches!(runner.run_hints(&mut vm), Ok(()));
        assert_eq!(runner.context.exec_scopes.depth(), 2);
    }

    #[test]
    fn run_hints_wraps_error_with_hint_name() {
        let mut vm = vm!();
        let mut runner = HintRunner::new(HintRunnerConfig {
            usort_max_size: None,
            trace_hints: true,
        });
        let ids_data = ids_data!["value"];
        runner
            .add_hint(0, hint_code::USORT_ENTER_SCOPE, &ids_data)
            .unwrap();
        vm.set_pc(relocatable!(0, 0));
        assert_matches!(
            runner.run_hints(&mut vm),
            Err(VirtualMachineError::Hint(bx))
                if bx.0 == hint_code::USORT_ENTER_SCOPE
                    && matches!(&bx.1, HintError::VariableNotInScopeError(x) if &**x == USORT_MAX_SIZE)
        );
    }

    #[test]
    fn run_hints_stops_at_first_failure() {
        let mut vm = vm!();
        // value
        vm.segments = segments![((1, 0), 9)];
        vm.set_fp(1);
        let mut runner = HintRunner::default();
        let ids_data = ids_data!["value"];
        runner
            .add_hint(0, hint_code::USORT_VERIFY, &ids_data)
            .unwrap();
        runner
            .add_hint(0, hint_code::VM_ENTER_SCOPE, &ids_data)
            .unwrap();
        vm.set_pc(relocatable!(0, 0));
        assert_matches!(
            runner.run_hints(&mut vm),
            Err(VirtualMachineError::Hint(bx)) if bx.0 == hint_code::USORT_VERIFY
        );
        assert_eq!(runner.context.exec_scopes.depth(), 1);
        assert_eq!(
            vm.get_maybe(&Relocatable::from((1, 0))),
            Some(MaybeRelocatable::from(Felt252::from(9)))
        );
    }
}
