//! Named binary operations over decimals.
//!
//! Every operation is a pure function of its two operands. The
//! [`OperationRegistry`] maps names to operations; adding an operation
//! means implementing [`Operation`] and registering it.
//!
//! # Example
//!
//! ```rust
//! use recalc::operations::{OperationError, OperationRegistry};
//! use rust_decimal::Decimal;
//!
//! let registry = OperationRegistry::standard();
//! let divide = registry.get("divide").unwrap();
//!
//! assert_eq!(divide.execute(Decimal::from(20), Decimal::from(4)), Ok(Decimal::from(5)));
//! assert_eq!(
//!     divide.execute(Decimal::ONE, Decimal::ZERO),
//!     Err(OperationError::DivisionByZero)
//! );
//! assert!(registry.get("frobnicate").is_err());
//! ```

mod arithmetic;
pub mod error;

pub use arithmetic::{
    AbsoluteDifference, Add, Divide, IntegerDivide, Modulus, Multiply, Percentage, Power, Root,
    Subtract,
};
pub use error::OperationError;

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

/// A named binary operation.
///
/// Implementations must be pure: `execute` may only inspect its operands.
pub trait Operation: Send + Sync {
    /// Registry key, as typed at the prompt and stored in history files.
    fn name(&self) -> &'static str;

    /// Apply the operation, or report why the operands are outside its domain.
    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError>;
}

/// Name-keyed table of operations.
pub struct OperationRegistry {
    operations: BTreeMap<&'static str, Box<dyn Operation>>,
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.operations.keys()).finish()
    }
}

impl OperationRegistry {
    /// A registry with no operations.
    pub fn empty() -> Self {
        Self {
            operations: BTreeMap::new(),
        }
    }

    /// A registry holding the ten built-in operations.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Add);
        registry.register(Subtract);
        registry.register(Multiply);
        registry.register(Divide);
        registry.register(Power);
        registry.register(Root);
        registry.register(Modulus);
        registry.register(IntegerDivide);
        registry.register(Percentage);
        registry.register(AbsoluteDifference);
        registry
    }

    /// Register `operation` under its own name, returning any operation it replaced.
    pub fn register<O>(&mut self, operation: O) -> Option<Box<dyn Operation>>
    where
        O: Operation + 'static,
    {
        self.operations.insert(operation.name(), Box::new(operation))
    }

    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Result<&dyn Operation, OperationError> {
        self.operations
            .get(name)
            .map(|operation| operation.as_ref())
            .ok_or_else(|| OperationError::UnknownOperation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;

    impl Operation for Double {
        fn name(&self) -> &'static str {
            "double_sum"
        }

        fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
            Ok((a + b) * Decimal::TWO)
        }
    }

    #[test]
    fn standard_registry_has_all_builtins() {
        let registry = OperationRegistry::standard();
        let names: Vec<_> = registry.names().collect();

        assert_eq!(
            names,
            vec![
                "abs_diff",
                "add",
                "divide",
                "int_divide",
                "modulus",
                "multiply",
                "percent",
                "power",
                "root",
                "subtract",
            ]
        );
    }

    #[test]
    fn lookup_returns_named_operation() {
        let registry = OperationRegistry::standard();
        for name in registry.names() {
            assert_eq!(registry.get(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = OperationRegistry::standard();
        let err = registry.get("unknown").err().unwrap();

        assert_eq!(err, OperationError::UnknownOperation("unknown".to_string()));
        assert_eq!(err.to_string(), "Unknown operation: unknown");
    }

    #[test]
    fn register_adds_custom_operation() {
        let mut registry = OperationRegistry::empty();
        assert!(registry.is_empty());

        assert!(registry.register(Double).is_none());

        assert!(registry.contains("double_sum"));
        assert_eq!(
            registry
                .get("double_sum")
                .unwrap()
                .execute(Decimal::ONE, Decimal::TWO),
            Ok(Decimal::from(6))
        );
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = OperationRegistry::standard();
        let before = registry.len();

        assert!(registry.register(Add).is_some());
        assert_eq!(registry.len(), before);
    }
}
