use model::transaction::{Transaction, TransactionKind};

/// Client-side narrowing of a ledger: a case-insensitive substring search over
/// description, reference and category, and/or an exact kind match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    search: Option<String>,
    kind: Option<TransactionKind>,
}

impl TransactionFilter {
    /// Blank search terms are ignored.
    pub fn with_search(mut self, term: impl AsRef<str>) -> Self {
        let term = term.as_ref().trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.kind.is_none()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind() != kind {
                return false;
            }
        }

        match &self.search {
            None => true,
            Some(term) => [
                transaction.description(),
                transaction.reference(),
                transaction.category(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(term.as_str())),
        }
    }

    /// Returns the matching transactions, preserving their order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}
