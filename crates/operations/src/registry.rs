use crate::division::{Division, IntegerDivision, Modulus, Percentage};
use crate::elementary::{AbsoluteDifference, Addition, Multiplication, Subtraction};
use crate::error::OperationError;
use crate::exponent::{Power, Root};
use crate::Operation;
use std::collections::HashMap;

/// A constructor for an operation variant. Any function with this signature
/// satisfies the registry's contract by type: there is no way to register
/// something that does not produce an `Operation`.
pub type Constructor = fn() -> Box<dyn Operation>;

/// A case-insensitive mapping from operation keys to variant constructors.
///
/// The registry is an owned value handed to whoever needs it (dependency
/// injection), not process-global state; tests get a fresh one each and
/// never leak registrations into each other. Entries are only ever added or
/// overwritten, never removed, so sharing `&OperationRegistry` across threads
/// for lookups is safe; concurrent registration needs an external guard.
pub struct OperationRegistry {
    entries: HashMap<String, Constructor>,
}

impl OperationRegistry {
    /// Creates a registry pre-populated with the ten built-in operations.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        registry.register("add", || Box::new(Addition));
        registry.register("subtract", || Box::new(Subtraction));
        registry.register("multiply", || Box::new(Multiplication));
        registry.register("divide", || Box::new(Division));
        registry.register("power", || Box::new(Power));
        registry.register("root", || Box::new(Root));
        registry.register("modulus", || Box::new(Modulus));
        registry.register("integer_division", || Box::new(IntegerDivision));
        registry.register("percentage", || Box::new(Percentage));
        registry.register("absolute_difference", || Box::new(AbsoluteDifference));
        registry
    }

    /// Adds (or overwrites) a mapping from `key` to a variant constructor.
    /// Keys are normalized to lowercase at registration time so lookups are
    /// case-insensitive by construction.
    pub fn register(&mut self, key: &str, constructor: Constructor) {
        let key = key.to_lowercase();
        if self.entries.insert(key.clone(), constructor).is_some() {
            tracing::debug!("operation '{key}' re-registered, previous mapping replaced");
        }
    }

    /// Looks up `key` case-insensitively and constructs a fresh variant
    /// instance. An unregistered key is an expected, recoverable failure.
    pub fn create(&self, key: &str) -> Result<Box<dyn Operation>, OperationError> {
        self.entries
            .get(&key.to_lowercase())
            .map(|constructor| constructor())
            .ok_or_else(|| OperationError::UnknownOperation(key.to_string()))
    }

    /// The registered keys, sorted for stable presentation.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
