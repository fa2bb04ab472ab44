use crate::error::HistoryError;
use chrono::{DateTime, Utc};
use operations::OperationRegistry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single evaluated calculation, as produced by the core and persisted by
/// the `HistoryStore`.
///
/// Decimals serialize as strings (no binary-float round-trip), and the
/// timestamp is RFC 3339 UTC, so a record survives storage byte-exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The registry key the calculation was performed under, lowercased.
    pub operation: String,
    pub operand1: Decimal,
    pub operand2: Decimal,
    pub result: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Resolves `operation` in the registry, executes it on the operands and
    /// stamps the record with the current time.
    ///
    /// Validation failures and unknown keys propagate untouched; no record is
    /// produced unless the evaluation fully succeeded.
    pub fn perform(
        registry: &OperationRegistry,
        operation: &str,
        operand1: Decimal,
        operand2: Decimal,
    ) -> Result<Self, HistoryError> {
        let op = registry.create(operation)?;
        let result = op.execute(operand1, operand2)?;
        Ok(Self {
            operation: operation.to_lowercase(),
            operand1,
            operand2,
            result,
            timestamp: Utc::now(),
        })
    }

    /// Re-runs this record's operation on its stored operands.
    pub fn recompute(&self, registry: &OperationRegistry) -> Result<Decimal, HistoryError> {
        let op = registry.create(&self.operation)?;
        Ok(op.execute(self.operand1, self.operand2)?)
    }

    /// Checks a loaded record against a fresh computation.
    ///
    /// A result mismatch is worth surfacing but not worth refusing the load
    /// (the stored result may simply predate a precision fix), so it logs a
    /// warning and keeps the stored value. An operation that no longer
    /// resolves, or that now rejects the stored operands, is an error.
    pub fn check_consistency(&self, registry: &OperationRegistry) -> Result<(), HistoryError> {
        let fresh = self.recompute(registry)?;
        if fresh != self.result {
            tracing::warn!(
                "Loaded calculation result {} differs from computed result {}",
                self.result,
                fresh
            );
        }
        Ok(())
    }

    /// Renders the result with exactly `precision` fractional digits.
    pub fn format_result(&self, precision: u32) -> String {
        let rounded = self.result.round_dp(precision);
        format!("{rounded:.prec$}", prec = precision as usize)
    }
}
