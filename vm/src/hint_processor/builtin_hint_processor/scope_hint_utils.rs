use std::collections::HashMap;

use crate::{types::exec_scope::ExecutionScopes, vm::errors::hint_errors::HintError};

//Implements hint: vm_enter_scope()
pub fn enter_scope(exec_scopes: &mut ExecutionScopes) -> Result<(), HintError> {
    exec_scopes.enter_scope(HashMap::new());
    Ok(())
}

//  Implements hint:
//  %{ vm_exit_scope() %}
pub fn exit_scope(exec_scopes: &mut ExecutionScopes) -> Result<(), HintError> {
    exec_scopes.exit_scope().map_err(HintError::FromScopeError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{utils::test_utils::*, vm::errors::exec_scope_errors::ExecScopeError, Felt252};
    use assert_matches::assert_matches;

    #[test]
    fn enter_scope_hides_outer_variables() {
        let mut exec_scopes = scope![("a", Felt252::ONE)];
        assert_matches!(enter_scope(&mut exec_scopes), Ok(()));
        assert_eq!(exec_scopes.depth(), 2);
        assert!(exec_scopes.get_local_variables().unwrap().is_empty());
    }

    #[test]
    fn exit_scope_valid() {
        let mut exec_scopes = scope![("a", Felt252::ONE)];
        enter_scope(&mut exec_scopes).unwrap();
        assert_matches!(exit_scope(&mut exec_scopes), Ok(()));
        assert_eq!(exec_scopes.get::<Felt252>("a").unwrap(), Felt252::ONE);
    }

    #[test]
    fn exit_scope_invalid() {
        let mut exec_scopes = scope!();
        assert_matches!(
            exit_scope(&mut exec_scopes),
            Err(HintError::FromScopeError(ExecScopeError::ExitMainScopeError))
        );
    }
}
