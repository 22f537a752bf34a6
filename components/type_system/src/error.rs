//! Type checking and module loading errors.
//!
//! Codes continue the front end numbering: type errors 5xxx, loader 6xxx.

use crate::types::Type;
use core_types::{Diagnostic, Range};
use parser::ast::BinaryOperator;
use parser::ParserError;
use thiserror::Error;

/// Result type for type checking operations
pub type TypeResult<T> = Result<T, TypeError>;

fn unknown_identifier(name: &str) -> String {
    format!("Unknown identifier \"{}\"", name)
}

fn unknown_type(name: &str) -> String {
    format!("Unknown type \"{}\"", name)
}

fn illegal_binary_operation(left: &Type, operator: &BinaryOperator, right: &Type) -> String {
    format!(
        "Operator \"{}\" cannot be applied to {} and {}",
        operator.symbol(),
        left,
        right
    )
}

fn access_on_nullable_value(ty: &Type, key: &str) -> String {
    format!(
        "Cannot access \"{}\" on nullable value of type {}, use \"?.\" instead",
        key, ty
    )
}

fn member_not_found(ty: &Type, key: &str) -> String {
    format!("Type {} has no member \"{}\"", ty, key)
}

fn not_callable(ty: &Type) -> String {
    format!("Value of type {} is not callable", ty)
}

fn arity_mismatch(expected: &usize, actual: &usize) -> String {
    format!("Expected {} argument(s), got {}", expected, actual)
}

fn argument_type_mismatch(expected: &Type, actual: &Type) -> String {
    format!("Argument of type {} is not assignable to {}", actual, expected)
}

fn not_indexable(ty: &Type) -> String {
    format!("Value of type {} cannot be indexed", ty)
}

fn invalid_index_type(ty: &Type) -> String {
    format!("Index must be an integer, got {}", ty)
}

fn unknown_attribute(component: &str, attribute: &str) -> String {
    format!("Component \"{}\" has no prop \"{}\"", component, attribute)
}

fn attribute_type_mismatch(attribute: &str, expected: &Type, actual: &Type) -> String {
    format!(
        "Value of type {} is not assignable to prop \"{}\" of type {}",
        actual, attribute, expected
    )
}

fn missing_prop(component: &str, prop: &str) -> String {
    format!("Component \"{}\" requires prop \"{}\"", component, prop)
}

/// Failure to type an expression or a declaration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A value name is not bound in scope
    #[error("{range} {}", unknown_identifier(.name))]
    UnknownIdentifier {
        /// The name
        name: String,
        /// Location of the reference
        range: Range,
    },

    /// A type name is neither built in, declared nor imported
    #[error("{range} {}", unknown_type(.name))]
    UnknownType {
        /// The name
        name: String,
        /// Location of the type name
        range: Range,
    },

    /// Operand types do not support the operator
    #[error("{range} {}", illegal_binary_operation(.left, .operator, .right))]
    IllegalBinaryOperation {
        /// Type of the left operand
        left: Type,
        /// The operator
        operator: BinaryOperator,
        /// Type of the right operand
        right: Type,
        /// Location of the operation
        range: Range,
    },

    /// `.` on a value that may be null
    #[error("{range} {}", access_on_nullable_value(.ty, .key))]
    AccessOnNullableValue {
        /// Type of the accessed value
        ty: Type,
        /// Accessed member
        key: String,
        /// Location of the access
        range: Range,
    },

    /// The accessed member does not exist
    #[error("{range} {}", member_not_found(.ty, .key))]
    MemberNotFound {
        /// Type of the accessed value
        ty: Type,
        /// Accessed member
        key: String,
        /// Location of the access
        range: Range,
    },

    /// Call on something other than a function
    #[error("{range} {}", not_callable(.ty))]
    NotCallable {
        /// Type of the callee
        ty: Type,
        /// Location of the call
        range: Range,
    },

    /// Wrong number of arguments
    #[error("{range} {}", arity_mismatch(.expected, .actual))]
    ArityMismatch {
        /// Parameter count
        expected: usize,
        /// Argument count
        actual: usize,
        /// Location of the call
        range: Range,
    },

    /// An argument does not fit its parameter
    #[error("{range} {}", argument_type_mismatch(.expected, .actual))]
    ArgumentTypeMismatch {
        /// Parameter type after inference
        expected: Type,
        /// Argument type
        actual: Type,
        /// Location of the argument
        range: Range,
    },

    /// Index on something other than an array
    #[error("{range} {}", not_indexable(.ty))]
    NotIndexable {
        /// Type of the target
        ty: Type,
        /// Location of the index expression
        range: Range,
    },

    /// Index expression is not an integer
    #[error("{range} {}", invalid_index_type(.ty))]
    InvalidIndexType {
        /// Type of the index
        ty: Type,
        /// Location of the index
        range: Range,
    },

    /// Tag attribute that the component does not declare
    #[error("{range} {}", unknown_attribute(.component, .attribute))]
    UnknownAttribute {
        /// Component name
        component: String,
        /// Attribute name
        attribute: String,
        /// Location of the attribute
        range: Range,
    },

    /// Tag attribute value does not fit the prop
    #[error("{range} {}", attribute_type_mismatch(.attribute, .expected, .actual))]
    AttributeTypeMismatch {
        /// Attribute name
        attribute: String,
        /// Prop type
        expected: Type,
        /// Attribute value type
        actual: Type,
        /// Location of the attribute
        range: Range,
    },

    /// A non-nullable prop was not given
    #[error("{range} {}", missing_prop(.component, .prop))]
    MissingProp {
        /// Component name
        component: String,
        /// Prop name
        prop: String,
        /// Location of the tag
        range: Range,
    },

    /// An import could not be resolved
    #[error(transparent)]
    Loader(#[from] LoaderError),
}

impl TypeError {
    /// Location of the offending node
    pub fn range(&self) -> Range {
        match self {
            TypeError::UnknownIdentifier { range, .. }
            | TypeError::UnknownType { range, .. }
            | TypeError::IllegalBinaryOperation { range, .. }
            | TypeError::AccessOnNullableValue { range, .. }
            | TypeError::MemberNotFound { range, .. }
            | TypeError::NotCallable { range, .. }
            | TypeError::ArityMismatch { range, .. }
            | TypeError::ArgumentTypeMismatch { range, .. }
            | TypeError::NotIndexable { range, .. }
            | TypeError::InvalidIndexType { range, .. }
            | TypeError::UnknownAttribute { range, .. }
            | TypeError::AttributeTypeMismatch { range, .. }
            | TypeError::MissingProp { range, .. } => *range,
            TypeError::Loader(error) => error.range(),
        }
    }
}

impl Diagnostic for TypeError {
    fn code(&self) -> u32 {
        match self {
            TypeError::UnknownIdentifier { .. } => 5001,
            TypeError::UnknownType { .. } => 5002,
            TypeError::IllegalBinaryOperation { .. } => 5003,
            TypeError::AccessOnNullableValue { .. } => 5004,
            TypeError::MemberNotFound { .. } => 5005,
            TypeError::NotCallable { .. } => 5006,
            TypeError::ArityMismatch { .. } => 5007,
            TypeError::ArgumentTypeMismatch { .. } => 5008,
            TypeError::NotIndexable { .. } => 5009,
            TypeError::InvalidIndexType { .. } => 5010,
            TypeError::UnknownAttribute { .. } => 5011,
            TypeError::AttributeTypeMismatch { .. } => 5012,
            TypeError::MissingProp { .. } => 5013,
            TypeError::Loader(error) => error.code(),
        }
    }

    fn message(&self) -> String {
        match self {
            TypeError::UnknownIdentifier { name, .. } => unknown_identifier(name),
            TypeError::UnknownType { name, .. } => unknown_type(name),
            TypeError::IllegalBinaryOperation {
                left,
                operator,
                right,
                ..
            } => illegal_binary_operation(left, operator, right),
            TypeError::AccessOnNullableValue { ty, key, .. } => access_on_nullable_value(ty, key),
            TypeError::MemberNotFound { ty, key, .. } => member_not_found(ty, key),
            TypeError::NotCallable { ty, .. } => not_callable(ty),
            TypeError::ArityMismatch {
                expected, actual, ..
            } => arity_mismatch(expected, actual),
            TypeError::ArgumentTypeMismatch {
                expected, actual, ..
            } => argument_type_mismatch(expected, actual),
            TypeError::NotIndexable { ty, .. } => not_indexable(ty),
            TypeError::InvalidIndexType { ty, .. } => invalid_index_type(ty),
            TypeError::UnknownAttribute {
                component,
                attribute,
                ..
            } => unknown_attribute(component, attribute),
            TypeError::AttributeTypeMismatch {
                attribute,
                expected,
                actual,
                ..
            } => attribute_type_mismatch(attribute, expected, actual),
            TypeError::MissingProp {
                component, prop, ..
            } => missing_prop(component, prop),
            TypeError::Loader(error) => error.message(),
        }
    }

    fn affected_range(&self) -> Option<Range> {
        Some(self.range())
    }
}

fn unknown_module(path: &str) -> String {
    format!("Module \"{}\" could not be found", path)
}

fn unknown_export(path: &str, name: &str) -> String {
    format!("Module \"{}\" has no export named \"{}\"", path, name)
}

fn circular_import(path: &str) -> String {
    format!("Circular import of module \"{}\"", path)
}

fn parse_failure(path: &str, cause: &ParserError) -> String {
    format!("Module \"{}\" could not be parsed: {}", path, cause)
}

fn check_failure(path: &str, cause: &TypeError) -> String {
    format!("Module \"{}\" could not be checked: {}", path, cause)
}

/// Failure to resolve an imported name.
///
/// Every variant carries the range of the import node that caused it, so the
/// failure is reported in the importing module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// No module is known under the path
    #[error("{range} {}", unknown_module(.path))]
    UnknownModule {
        /// Imported path
        path: String,
        /// Location of the path literal
        range: Range,
    },

    /// The module does not export the name
    #[error("{range} {}", unknown_export(.path, .name))]
    UnknownExport {
        /// Imported path
        path: String,
        /// Imported name
        name: String,
        /// Location of the imported name
        range: Range,
    },

    /// The module is already being loaded further up the import chain
    #[error("{range} {}", circular_import(.path))]
    CircularImport {
        /// Imported path
        path: String,
        /// Location of the path literal
        range: Range,
    },

    /// The imported module has a syntax error
    #[error("{range} {}", parse_failure(.path, .cause))]
    ParseFailure {
        /// Imported path
        path: String,
        /// The syntax error inside the imported module
        cause: ParserError,
        /// Location of the path literal
        range: Range,
    },

    /// The imported module has a type error
    #[error("{range} {}", check_failure(.path, .cause))]
    CheckFailure {
        /// Imported path
        path: String,
        /// The type error inside the imported module
        cause: Box<TypeError>,
        /// Location of the path literal
        range: Range,
    },
}

impl LoaderError {
    /// Location in the importing module
    pub fn range(&self) -> Range {
        match self {
            LoaderError::UnknownModule { range, .. }
            | LoaderError::UnknownExport { range, .. }
            | LoaderError::CircularImport { range, .. }
            | LoaderError::ParseFailure { range, .. }
            | LoaderError::CheckFailure { range, .. } => *range,
        }
    }
}

impl Diagnostic for LoaderError {
    fn code(&self) -> u32 {
        match self {
            LoaderError::UnknownModule { .. } => 6001,
            LoaderError::UnknownExport { .. } => 6002,
            LoaderError::CircularImport { .. } => 6003,
            LoaderError::ParseFailure { .. } => 6004,
            LoaderError::CheckFailure { .. } => 6005,
        }
    }

    fn message(&self) -> String {
        match self {
            LoaderError::UnknownModule { path, .. } => unknown_module(path),
            LoaderError::UnknownExport { path, name, .. } => unknown_export(path, name),
            LoaderError::CircularImport { path, .. } => circular_import(path),
            LoaderError::ParseFailure { path, cause, .. } => parse_failure(path, cause),
            LoaderError::CheckFailure { path, cause, .. } => check_failure(path, cause),
        }
    }

    fn affected_range(&self) -> Option<Range> {
        Some(self.range())
    }
}
