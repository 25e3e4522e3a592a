use std::collections::HashMap;

use tracing::trace;

use crate::{
    types::relocatable::MaybeRelocatable,
    vm::errors::{exec_scope_errors::ExecScopeError, hint_errors::HintError},
    Felt252,
};

/// Value stored in an execution scope.
///
/// Hints only ever exchange this closed set of payloads, so scope frames hold a tagged
/// variant instead of a type-erased box; reading a variable as the wrong kind is a
/// [`HintError::ScopeTypeMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeValue {
    Felt(Felt252),
    Int(i64),
    UInt(u64),
    U64List(Vec<u64>),
    PositionsDict(HashMap<Felt252, Vec<u64>>),
    MaybeRelocatable(MaybeRelocatable),
    DictData(HashMap<Felt252, MaybeRelocatable>),
}

impl ScopeValue {
    pub fn kind(&self) -> &'static str {
        match self {
            ScopeValue::Felt(_) => Felt252::KIND,
            ScopeValue::Int(_) => i64::KIND,
            ScopeValue::UInt(_) => u64::KIND,
            ScopeValue::U64List(_) => <Vec<u64>>::KIND,
            ScopeValue::PositionsDict(_) => <HashMap<Felt252, Vec<u64>>>::KIND,
            ScopeValue::MaybeRelocatable(_) => MaybeRelocatable::KIND,
            ScopeValue::DictData(_) => <HashMap<Felt252, MaybeRelocatable>>::KIND,
        }
    }
}

/// A Rust type that can live in an execution scope as one [`ScopeValue`] variant.
pub trait ScopeVariable: Into<ScopeValue> {
    const KIND: &'static str;
    fn from_scope_value(value: &ScopeValue) -> Option<&Self>;
    fn from_scope_value_mut(value: &mut ScopeValue) -> Option<&mut Self>;
}

macro_rules! scope_variable {
    ($ty:ty, $variant:ident, $kind:literal) => {
        impl ScopeVariable for $ty {
            const KIND: &'static str = $kind;

            fn from_scope_value(value: &ScopeValue) -> Option<&Self> {
                match value {
                    ScopeValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_scope_value_mut(value: &mut ScopeValue) -> Option<&mut Self> {
                match value {
                    ScopeValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ScopeValue {
            fn from(value: $ty) -> Self {
                ScopeValue::$variant(value)
            }
        }
    };
}

scope_variable!(Felt252, Felt, "felt");
scope_variable!(i64, Int, "int");
scope_variable!(u64, UInt, "uint");
scope_variable!(Vec<u64>, U64List, "list[uint]");
scope_variable!(HashMap<Felt252, Vec<u64>>, PositionsDict, "dict[felt, list[uint]]");
scope_variable!(MaybeRelocatable, MaybeRelocatable, "maybe_relocatable");
scope_variable!(HashMap<Felt252, MaybeRelocatable>, DictData, "dict[felt, maybe_relocatable]");

#[derive(Debug)]
pub struct ExecutionScopes {
    pub data: Vec<HashMap<String, ScopeValue>>,
}

impl ExecutionScopes {
    pub fn new() -> ExecutionScopes {
        ExecutionScopes {
            data: vec![HashMap::new()],
        }
    }

    pub fn enter_scope(&mut self, new_scope_locals: HashMap<String, ScopeValue>) {
        self.data.push(new_scope_locals);
        trace!(depth = self.data.len(), "entered execution scope");
    }

    pub fn exit_scope(&mut self) -> Result<(), ExecScopeError> {
        if self.data.len() == 1 {
            return Err(ExecScopeError::ExitMainScopeError);
        }
        self.data.pop();
        trace!(depth = self.data.len(), "exited execution scope");

        Ok(())
    }

    /// Number of frames, the main scope included
    pub fn depth(&self) -> usize {
        self.data.len()
    }

    ///Returns a mutable reference to the dictionary containing the variables present in the current scope
    pub fn get_local_variables_mut(
        &mut self,
    ) -> Result<&mut HashMap<String, ScopeValue>, HintError> {
        self.data
            .last_mut()
            .ok_or(HintError::FromScopeError(ExecScopeError::NoScopeError))
    }

    ///Returns a dictionary containing the variables present in the current scope
    pub fn get_local_variables(&self) -> Result<&HashMap<String, ScopeValue>, HintError> {
        self.data
            .last()
            .ok_or(HintError::FromScopeError(ExecScopeError::NoScopeError))
    }

    ///Removes a variable from the current scope given its name
    pub fn delete_variable(&mut self, var_name: &str) {
        if let Ok(local_variables) = self.get_local_variables_mut() {
            local_variables.remove(var_name);
        }
    }

    ///Creates or updates an existing variable given its name and value
    pub fn assign_or_update_variable(&mut self, var_name: &str, var_value: ScopeValue) {
        if let Ok(local_variables) = self.get_local_variables_mut() {
            local_variables.insert(var_name.to_string(), var_value);
        }
    }

    ///Creates or updates several variables of the current scope at once
    pub fn assign_variables<I>(&mut self, variables: I)
    where
        I: IntoIterator<Item = (String, ScopeValue)>,
    {
        if let Ok(local_variables) = self.get_local_variables_mut() {
            local_variables.extend(variables);
        }
    }

    ///Inserts the value into the current scope
    pub fn insert_value<T: Into<ScopeValue>>(&mut self, name: &str, value: T) {
        self.assign_or_update_variable(name, value.into());
    }

    ///Returns the raw value in the current execution scope that matches the name
    pub fn get_any_ref(&self, name: &str) -> Result<&ScopeValue, HintError> {
        self.get_local_variables()?
            .get(name)
            .ok_or_else(|| HintError::VariableNotInScopeError(name.to_string().into_boxed_str()))
    }

    fn get_value_mut(&mut self, name: &str) -> Result<&mut ScopeValue, HintError> {
        self.get_local_variables_mut()?
            .get_mut(name)
            .ok_or_else(|| HintError::VariableNotInScopeError(name.to_string().into_boxed_str()))
    }

    ///Returns the value in the current execution scope that matches the name and is of the given generic type
    pub fn get<T: ScopeVariable + Clone>(&self, name: &str) -> Result<T, HintError> {
        self.get_ref::<T>(name).cloned()
    }

    ///Returns a reference to the value in the current execution scope that matches the name and is of the given generic type
    pub fn get_ref<T: ScopeVariable>(&self, name: &str) -> Result<&T, HintError> {
        T::from_scope_value(self.get_any_ref(name)?).ok_or_else(|| type_mismatch::<T>(name))
    }

    ///Returns a mutable reference to the value in the current execution scope that matches the name and is of the given generic type
    pub fn get_mut_ref<T: ScopeVariable>(&mut self, name: &str) -> Result<&mut T, HintError> {
        T::from_scope_value_mut(self.get_value_mut(name)?).ok_or_else(|| type_mismatch::<T>(name))
    }

    ///Returns a reference to the value in the current execution scope that matches the name and is of type List
    pub fn get_list_ref<T>(&self, name: &str) -> Result<&Vec<T>, HintError>
    where
        Vec<T>: ScopeVariable,
    {
        self.get_ref::<Vec<T>>(name)
    }

    ///Returns a mutable reference to the value in the current execution scope that matches the name and is of type List
    pub fn get_mut_list_ref<T>(&mut self, name: &str) -> Result<&mut Vec<T>, HintError>
    where
        Vec<T>: ScopeVariable,
    {
        self.get_mut_ref::<Vec<T>>(name)
    }

    ///Returns a mutable reference to the value in the current execution scope that matches the name and is of the given type
    pub fn get_mut_dict_ref<K, V>(&mut self, name: &str) -> Result<&mut HashMap<K, V>, HintError>
    where
        HashMap<K, V>: ScopeVariable,
    {
        self.get_mut_ref::<HashMap<K, V>>(name)
    }
}

fn type_mismatch<T: ScopeVariable>(name: &str) -> HintError {
    HintError::ScopeTypeMismatch(Box::new((name.to_string(), T::KIND)))
}

impl Default for ExecutionScopes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn initialize_execution_scopes() {
        let scopes = ExecutionScopes::new();
        assert_eq!(scopes.data.len(), 1);
    }

    #[test]
    fn get_local_variables_test() {
        let scope = HashMap::from([(String::from("a"), ScopeValue::Felt(Felt252::from(2)))]);

        let scopes = ExecutionScopes { data: vec![scope] };
        assert_eq!(scopes.get_local_variables().unwrap().len(), 1);
        assert_eq!(scopes.get::<Felt252>("a").unwrap(), Felt252::from(2));
    }

    #[test]
    fn enter_new_scope_test() {
        let new_scope = HashMap::from([(String::from("a"), ScopeValue::Felt(Felt252::from(2)))]);

        let mut scopes = ExecutionScopes {
            data: vec![HashMap::from([(
                String::from("b"),
                ScopeValue::Felt(Felt252::ONE),
            )])],
        };

        assert_eq!(scopes.get::<Felt252>("b").unwrap(), Felt252::ONE);

        scopes.enter_scope(new_scope);

        // check that variable `b` can't be accessed now
        assert_matches!(
            scopes.get::<Felt252>("b"),
            Err(HintError::VariableNotInScopeError(x)) if &*x == "b"
        );

        assert_eq!(scopes.get_local_variables().unwrap().len(), 1);
        assert_eq!(scopes.get::<Felt252>("a").unwrap(), Felt252::from(2));
    }

    #[test]
    fn exit_scope_test() {
        let new_scope = HashMap::from([(String::from("a"), ScopeValue::Felt(Felt252::from(2)))]);

        // this initializes an empty main scope
        let mut scopes = ExecutionScopes::new();

        // enter one extra scope
        scopes.enter_scope(new_scope);
        assert_eq!(scopes.depth(), 2);
        assert_eq!(scopes.get::<Felt252>("a").unwrap(), Felt252::from(2));

        // exit the current scope
        assert!(scopes.exit_scope().is_ok());

        // assert that variable `a` is no longer available
        assert!(scopes.get_local_variables().unwrap().get("a").is_none());

        // assert that we recovered the older scope
        assert!(scopes.get_local_variables().unwrap().is_empty());
    }

    #[test]
    fn assign_local_variable_test() {
        let mut scopes = ExecutionScopes::new();

        scopes.assign_or_update_variable("a", ScopeValue::Felt(Felt252::from(2)));

        assert_eq!(scopes.get_local_variables().unwrap().len(), 1);
        assert_eq!(scopes.get::<Felt252>("a").unwrap(), Felt252::from(2));
    }

    #[test]
    fn re_assign_local_variable_test() {
        let scope = HashMap::from([(String::from("a"), ScopeValue::Felt(Felt252::from(2)))]);

        let mut scopes = ExecutionScopes { data: vec![scope] };

        scopes.insert_value("a", Felt252::from(3));

        assert_eq!(scopes.get_local_variables().unwrap().len(), 1);
        assert_eq!(scopes.get::<Felt252>("a").unwrap(), Felt252::from(3));
    }

    #[test]
    fn assign_variables_only_touches_top_frame() {
        let mut scopes = ExecutionScopes::new();
        scopes.insert_value("kept", 1_u64);
        scopes.enter_scope(HashMap::new());
        scopes.assign_variables([
            ("last_pos".to_string(), ScopeValue::Felt(Felt252::ZERO)),
            ("positions".to_string(), ScopeValue::U64List(vec![3, 2, 1])),
        ]);
        assert_eq!(scopes.get_list_ref::<u64>("positions").unwrap(), &vec![3, 2, 1]);
        assert_eq!(scopes.get::<Felt252>("last_pos").unwrap(), Felt252::ZERO);

        scopes.exit_scope().unwrap();
        assert_matches!(
            scopes.get_ref::<Vec<u64>>("positions"),
            Err(HintError::VariableNotInScopeError(_))
        );
        assert_eq!(scopes.get::<u64>("kept").unwrap(), 1);
    }

    #[test]
    fn delete_local_variable_test() {
        let scope = HashMap::from([(String::from("a"), ScopeValue::Felt(Felt252::from(2)))]);

        let mut scopes = ExecutionScopes { data: vec![scope] };

        assert!(scopes.get_local_variables().unwrap().contains_key("a"));

        scopes.delete_variable("a");

        assert!(!scopes.get_local_variables().unwrap().contains_key("a"));
    }

    #[test]
    fn exit_main_scope_gives_error_test() {
        let mut scopes = ExecutionScopes::new();

        assert_eq!(scopes.exit_scope(), Err(ExecScopeError::ExitMainScopeError));
    }

    #[test]
    fn get_listu64_test() {
        let mut scopes = ExecutionScopes::default();

        scopes.insert_value("list_u64", vec![20_u64, 18_u64]);

        assert_matches!(
            scopes.get::<Vec<u64>>("list_u64"),
            Ok(x) if x == vec![20_u64, 18_u64]
        );

        assert_matches!(
            scopes.get_list_ref::<u64>("no_variable"),
            Err(HintError::VariableNotInScopeError(
                x
            )) if *x == *"no_variable".to_string()
        );
    }

    #[test]
    fn get_u64_test() {
        let mut scopes = ExecutionScopes::new();

        scopes.insert_value("u64", 9_u64);

        assert_matches!(scopes.get_ref::<u64>("u64"), Ok(&9_u64));
        assert_matches!(scopes.get_mut_ref::<u64>("u64"), Ok(&mut 9_u64));

        assert_matches!(
            scopes.get_mut_ref::<u64>("no_variable"),
            Err(HintError::VariableNotInScopeError(
                x
            )) if *x == *"no_variable".to_string()
        );
    }

    #[test]
    fn get_with_wrong_kind_is_a_type_mismatch() {
        let mut scopes = ExecutionScopes::new();
        scopes.insert_value("positions", vec![1_u64]);

        assert_matches!(
            scopes.get::<Felt252>("positions"),
            Err(HintError::ScopeTypeMismatch(bx)) if *bx == ("positions".to_string(), "felt")
        );
        assert_matches!(
            scopes.get_mut_dict_ref::<Felt252, Vec<u64>>("positions"),
            Err(HintError::ScopeTypeMismatch(bx))
                if *bx == ("positions".to_string(), "dict[felt, list[uint]]")
        );
        assert_eq!(scopes.get_any_ref("positions").unwrap().kind(), "list[uint]");
    }

    #[test]
    fn get_mut_list_ref_mutates_in_place() {
        let mut scopes = ExecutionScopes::new();
        scopes.insert_value("positions", vec![8_u64, 6, 4]);

        assert_eq!(scopes.get_mut_list_ref::<u64>("positions").unwrap().pop(), Some(4));
        assert_eq!(scopes.get_list_ref::<u64>("positions").unwrap(), &vec![8, 6]);
    }

    #[test]
    fn get_mut_dict_ref_test() {
        let mut scopes = ExecutionScopes::new();
        scopes.insert_value(
            "positions_dict",
            HashMap::from([(Felt252::ZERO, vec![1_u64, 2, 3])]),
        );

        let positions_dict = scopes
            .get_mut_dict_ref::<Felt252, Vec<u64>>("positions_dict")
            .unwrap();
        positions_dict.insert(Felt252::ONE, vec![4]);

        assert_eq!(
            scopes
                .get_ref::<HashMap<Felt252, Vec<u64>>>("positions_dict")
                .unwrap()
                .len(),
            2
        );
    }
}
