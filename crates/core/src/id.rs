//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Opaque string on the wire; lookups compare it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Monotonic issuer of decimal product identifiers.
///
/// Every call to [`IdSequence::next_id`] returns a value never handed out
/// before by this sequence, including ids whose records were later deleted.
/// Once `u64::MAX` has been issued the sequence is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    /// `None` once exhausted.
    next: Option<u64>,
}

impl IdSequence {
    /// Start issuing at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Issue the next id, or `None` when the sequence is exhausted.
    pub fn next_id(&mut self) -> Option<ProductId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(ProductId(current.to_string()))
    }

    /// Ensure ids at or below `issued` are never produced.
    ///
    /// Used when records with externally chosen numeric ids (seed data) are
    /// loaded into a store. Returns `false`, leaving the sequence unchanged,
    /// when `issued` is `u64::MAX`: reserving it would leave nothing to issue.
    pub fn reserve_through(&mut self, issued: u64) -> bool {
        let Some(after) = issued.checked_add(1) else {
            return false;
        };
        if let Some(next) = self.next {
            if after > next {
                self.next = Some(after);
            }
        }
        true
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id().unwrap().as_str(), "1");
        assert_eq!(seq.next_id().unwrap().as_str(), "2");
    }

    #[test]
    fn reserve_through_skips_taken_ids() {
        let mut seq = IdSequence::default();
        assert!(seq.reserve_through(5));
        assert_eq!(seq.next_id(), Some(ProductId::from("6")));

        // Reserving below the cursor never moves it backwards.
        assert!(seq.reserve_through(2));
        assert_eq!(seq.next_id(), Some(ProductId::from("7")));
    }

    #[test]
    fn reserving_the_last_id_is_refused() {
        let mut seq = IdSequence::default();
        assert!(!seq.reserve_through(u64::MAX));
        assert_eq!(seq.next_id(), Some(ProductId::from("1")));
    }

    #[test]
    fn sequence_stops_after_the_last_id() {
        let mut seq = IdSequence::starting_at(u64::MAX - 1);
        assert_eq!(seq.next_id(), Some(ProductId::from("18446744073709551614")));
        assert_eq!(seq.next_id(), Some(ProductId::from("18446744073709551615")));
        assert_eq!(seq.next_id(), None);
        assert_eq!(seq.next_id(), None);
    }

    #[test]
    fn product_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ProductId::from("42")).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
