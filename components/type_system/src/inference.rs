//! Generic argument inference for calls
//!
//! One [`InferenceContext`] lives for exactly one call: arguments are
//! matched against the signature's parameters, every placeholder met on the
//! way is bound, and the bindings are then substituted into the parameter
//! and result types.

use crate::types::{FunctionType, GenericType, Type};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use tracing::trace;

/// Placeholder identity; the address of the shared definition
type GenericKey = *const GenericType;

/// Bindings of generic placeholders collected during one call
#[derive(Debug, Default)]
pub struct InferenceContext {
    bindings: FxHashMap<GenericKey, Type>,
}

impl InferenceContext {
    /// Context without bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Type bound to `placeholder`, if any
    pub fn binding(&self, placeholder: &Rc<GenericType>) -> Option<&Type> {
        self.bindings.get(&Rc::as_ptr(placeholder))
    }

    /// Match `argument` against `parameter`, binding the placeholders of
    /// the parameter. A placeholder met twice widens to the union of both
    /// arguments.
    pub fn infer(&mut self, parameter: &Type, argument: &Type) {
        match (parameter, argument) {
            (Type::Generic(placeholder), _) => self.bind(placeholder, argument),
            (Type::Array(parameter_item), Type::Array(argument_item)) => {
                self.infer(parameter_item, argument_item)
            }
            (Type::Function(parameter), Type::Function(argument)) => {
                for (p, a) in parameter.parameters.iter().zip(&argument.parameters) {
                    self.infer(p, a);
                }
                self.infer(&parameter.return_type, &argument.return_type);
            }
            (Type::Union(union), _) => {
                let (generic, concrete): (Vec<&Type>, Vec<&Type>) = union
                    .members()
                    .iter()
                    .partition(|member| member.contains_generic());
                let rest: Vec<Type> = argument
                    .members()
                    .iter()
                    .filter(|member| !concrete.iter().any(|c| member.is_assignable_to(c)))
                    .cloned()
                    .collect();
                if rest.is_empty() {
                    return;
                }
                let rest = Type::union(rest);
                for member in generic {
                    self.infer(member, &rest);
                }
            }
            _ => {}
        }
    }

    fn bind(&mut self, placeholder: &Rc<GenericType>, argument: &Type) {
        let key = Rc::as_ptr(placeholder);
        let bound = match self.bindings.remove(&key) {
            Some(existing) => Type::union([existing, argument.clone()]),
            None => argument.clone(),
        };
        trace!(placeholder = %placeholder.name, bound = %bound, "inferred generic");
        self.bindings.insert(key, bound);
    }

    /// Replace every bound placeholder in `ty`; unbound ones are left as is
    pub fn substitute(&self, ty: &Type) -> Type {
        match ty {
            Type::Generic(placeholder) => self
                .binding(placeholder)
                .cloned()
                .unwrap_or_else(|| ty.clone()),
            Type::Array(item) => Type::array(self.substitute(item)),
            Type::Union(union) => Type::union(union.members().iter().map(|m| self.substitute(m))),
            Type::Function(function) => Type::Function(Rc::new(FunctionType {
                parameters: function
                    .parameters
                    .iter()
                    .map(|parameter| self.substitute(parameter))
                    .collect(),
                return_type: self.substitute(&function.return_type),
            })),
            other => other.clone(),
        }
    }
}
