//! Natural-language transaction parsing boundary
//!
//! A free-text description like "spent 25 on dinner" is turned into a typed
//! transaction by an external classifier reached through a thin proxy. The
//! classifier is opaque to this crate: only its input/output contract lives
//! here, and implementations are injected by the caller.

use crate::error::PocketbookResult;
use crate::models::Money;

/// Whether parsed text described spending or income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

/// The classifier's verdict on a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTransaction {
    /// Expense or income
    pub kind: TransactionKind,

    /// Extracted amount; zero when none could be determined
    pub amount: Money,

    /// Concise extracted description; "Uncategorized" when none could be
    /// determined
    pub description: String,
}

/// An opaque text-to-transaction classifier
///
/// Contract: parsing is total over well-formed text — undeterminable fields
/// fall back to `Expense`, a zero amount, and "Uncategorized" rather than
/// failing. Errors are reserved for transport-level failures reaching the
/// classifier.
pub trait TransactionParser {
    /// Classify a piece of free text
    fn parse(&self, text: &str) -> PocketbookResult<ParsedTransaction>;
}
