//! Lexical scopes of value and type names

use crate::types::Type;
use rustc_hash::FxHashMap;

/// Names of the built-in types
pub const BUILTIN_TYPE_NAMES: [&str; 5] = ["string", "number", "integer", "boolean", "slot"];

/// One frame of value bindings and type names, chained to its parent.
///
/// Child frames borrow their parent, so a narrowed or nested scope never
/// outlives the scope it refines and never needs to copy it.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    parent: Option<&'p Scope<'p>>,
    values: FxHashMap<String, Type>,
    types: FxHashMap<String, Type>,
}

impl Scope<'static> {
    /// Empty root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Root scope knowing the built-in type names
    pub fn with_builtins() -> Self {
        let mut scope = Self::new();
        for (name, ty) in BUILTIN_TYPE_NAMES.iter().zip([
            Type::String,
            Type::Number,
            Type::Integer,
            Type::Boolean,
            Type::Slot,
        ]) {
            scope.define_type(*name, ty);
        }
        scope
    }
}

impl<'p> Scope<'p> {
    /// Empty child frame
    pub fn push(&self) -> Scope<'_> {
        Scope {
            parent: Some(self),
            values: FxHashMap::default(),
            types: FxHashMap::default(),
        }
    }

    /// Bind a value name in this frame, shadowing outer frames
    pub fn define_value(&mut self, name: impl Into<String>, ty: Type) {
        self.values.insert(name.into(), ty);
    }

    /// Bind a type name in this frame, shadowing outer frames
    pub fn define_type(&mut self, name: impl Into<String>, ty: Type) {
        self.types.insert(name.into(), ty);
    }

    /// Type of the value bound to `name`
    pub fn lookup_type_for(&self, name: &str) -> Option<&Type> {
        match self.values.get(name) {
            Some(ty) => Some(ty),
            None => self.parent.and_then(|parent| parent.lookup_type_for(name)),
        }
    }

    /// Type denoted by the type name `name`
    pub fn lookup_type(&self, name: &str) -> Option<&Type> {
        match self.types.get(name) {
            Some(ty) => Some(ty),
            None => self.parent.and_then(|parent| parent.lookup_type(name)),
        }
    }

    /// Value bindings of this frame only
    pub fn values(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.values.iter().map(|(name, ty)| (name.as_str(), ty))
    }
}
