//! Component Language Type System
//!
//! Static types of expressions and declarations of the component language.
//!
//! # Overview
//!
//! - [`Type`] - Normalized static types, with named definitions shared by `Rc`
//! - [`Scope`] - Chained frames of value and type bindings
//! - [`TypeResolver`] - Type of any expression in a scope
//! - [`TypeNarrower`] - What a condition implies about nullable names
//! - [`InferenceContext`] - Generic argument inference for one call
//! - [`ModuleChecker`] / [`Loader`] - Whole-module checking across imports
//!
//! # Example
//!
//! ```
//! use core_types::Source;
//! use parser::parse_expression;
//! use type_system::{Scope, Type, TypeResolver};
//!
//! let mut scope = Scope::new();
//! scope.define_value("name", Type::String.nullable());
//!
//! let source = Source::from_string("name ? `Hello {name}` : null");
//! let expression = parse_expression(&source).unwrap();
//! let ty = TypeResolver::new(&scope).resolve_type_of(&expression).unwrap();
//!
//! assert_eq!(ty.to_string(), "string|null");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod inference;
pub mod loader;
pub mod module;
pub mod narrower;
pub mod resolver;
pub mod scope;
pub mod types;

pub use error::{LoaderError, TypeError, TypeResult};
pub use inference::InferenceContext;
pub use loader::{InMemoryLoader, Loader};
pub use module::{resolve_type_reference, ModuleChecker, ModuleTypes};
pub use narrower::{NarrowedTypes, NarrowingContext, TypeNarrower};
pub use resolver::TypeResolver;
pub use scope::{Scope, BUILTIN_TYPE_NAMES};
pub use types::{
    ComponentType, EnumInstanceType, EnumMember, EnumStaticType, FunctionType, GenericType,
    LiteralType, StructType, Type, UnionType,
};
