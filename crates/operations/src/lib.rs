//! # Tally Operation Library
//!
//! This crate contains the core arithmetic logic for the Tally calculator. It
//! defines a universal `Operation` trait and provides ten concrete variants.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   persistence, configuration, or any front-end. It depends only on the
//!   decimal type it computes with.
//! - **Operation Agnostic Callers:** By using the `Operation` trait, callers
//!   like the REPL and the history layer can evaluate any operation without
//!   knowing its internal details.
//! - **Extensibility:** Adding a new operation involves implementing the
//!   `Operation` trait and registering a constructor with the
//!   `OperationRegistry` under a new key. Nothing in this crate needs to
//!   change for that.
//!
//! ## Public API
//!
//! The primary public components are:
//! - `Operation`: the core trait all arithmetic variants implement.
//! - `OperationRegistry`: the string-keyed factory that constructs variants.
//! - The concrete variant structs themselves (e.g., `Addition`, `Modulus`).

// Declare all the modules that constitute this crate.
pub mod division;
pub mod elementary;
pub mod error;
pub mod exponent;
pub mod registry;

// Re-export the key components to create a clean, public-facing API.
pub use division::{Division, IntegerDivision, Modulus, Percentage};
pub use elementary::{AbsoluteDifference, Addition, Multiplication, Subtraction};
pub use error::OperationError;
pub use exponent::{Power, Root};
pub use registry::OperationRegistry;

use rust_decimal::Decimal;

/// The core trait that all arithmetic operations must implement.
///
/// This trait defines a common interface so the registry, the history layer
/// and any front-end can be operation-agnostic.
///
/// Operations are stateless: `&self` everywhere, and the result is a pure
/// function of the two operands. The `Send + Sync` bounds allow a registry of
/// operations to be shared across threads by callers that want to; `Debug`
/// lets constructed variants appear in assertions and logs.
pub trait Operation: std::fmt::Debug + Send + Sync {
    /// The canonical display name of the operation (e.g., `"Addition"`).
    fn name(&self) -> &'static str;

    /// Checks the operands before any arithmetic happens.
    ///
    /// The default accepts everything; variants with preconditions (a zero
    /// divisor, a negative exponent) override this. The messages carried by
    /// the returned `OperationError::Validation` are a stable contract that
    /// callers match on, not informational logging.
    fn validate(&self, _a: Decimal, _b: Decimal) -> Result<(), OperationError> {
        Ok(())
    }

    /// Performs the raw arithmetic on operands that have already passed
    /// `validate`. Fails only when the mathematically correct result cannot
    /// be represented as a `Decimal` (`OperationError::Overflow`); no value
    /// is ever substituted for one. Callers should go through `execute`;
    /// calling `compute` with operands that `validate` would reject is a
    /// contract violation (division by zero will panic, as it does for
    /// `Decimal` itself).
    fn compute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError>;

    /// Validates the operands, then computes the result.
    ///
    /// This provided method is the only evaluation entry point callers should
    /// use: it guarantees validation runs to completion before any arithmetic,
    /// so no variant can accidentally skip its own precondition check.
    fn execute(&self, a: Decimal, b: Decimal) -> Result<Decimal, OperationError> {
        self.validate(a, b)?;
        self.compute(a, b)
    }
}
