use model::transaction::{Polarity, Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Sum of amounts per transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub maintenance: Decimal,
    pub vendor: Decimal,
    pub deposit: Decimal,
    pub society_room: Decimal,
}

impl CategoryTotals {
    pub fn get(&self, kind: TransactionKind) -> Decimal {
        match kind {
            TransactionKind::Maintenance => self.maintenance,
            TransactionKind::Vendor => self.vendor,
            TransactionKind::Deposit => self.deposit,
            TransactionKind::SocietyRoom => self.society_room,
        }
    }

    fn add(&mut self, kind: TransactionKind, amount: Decimal) {
        let slot = match kind {
            TransactionKind::Maintenance => &mut self.maintenance,
            TransactionKind::Vendor => &mut self.vendor,
            TransactionKind::Deposit => &mut self.deposit,
            TransactionKind::SocietyRoom => &mut self.society_room,
        };
        *slot = slot.saturating_add(amount);
    }
}

/// Aggregate figures over a set of transactions.
///
/// `balance` is always `total_credits - total_debits`. Sums saturate at the
/// `Decimal` bounds instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerTotals {
    pub total_credits: Decimal,
    pub total_debits: Decimal,
    pub balance: Decimal,
    pub category_totals: CategoryTotals,
}

impl LedgerTotals {
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut totals = Self::default();

        for transaction in transactions {
            match transaction.polarity() {
                Polarity::Credit => {
                    totals.total_credits = totals.total_credits.saturating_add(transaction.amount())
                }
                Polarity::Debit => {
                    totals.total_debits = totals.total_debits.saturating_add(transaction.amount())
                }
            }
            totals
                .category_totals
                .add(transaction.kind(), transaction.amount());
        }

        totals.balance = totals.total_credits.saturating_sub(totals.total_debits);
        totals
    }
}
