use model::transaction::{Polarity, Transaction};
use rust_decimal::Decimal;

use super::{SortOrder, sort_transactions};

/// One passbook line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    /// 1-based position in oldest-first order.
    pub sequence_number: usize,
    pub transaction: Transaction,
    pub debit_amount: Decimal,
    pub credit_amount: Decimal,
    /// Net of all credits and debits up to and including this row.
    pub running_balance: Decimal,
}

/// Sorts the transactions oldest first and annotates each with its running
/// balance.
pub fn passbook_rows(transactions: &[Transaction]) -> Vec<LedgerRow> {
    let mut ordered = transactions.to_vec();
    sort_transactions(&mut ordered, SortOrder::OldestFirst);

    let mut running_balance = Decimal::ZERO;
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, transaction)| {
            let (debit_amount, credit_amount) = match transaction.polarity() {
                Polarity::Credit => (Decimal::ZERO, transaction.amount()),
                Polarity::Debit => (transaction.amount(), Decimal::ZERO),
            };
            running_balance = running_balance
                .saturating_add(credit_amount)
                .saturating_sub(debit_amount);

            LedgerRow {
                sequence_number: index + 1,
                transaction,
                debit_amount,
                credit_amount,
                running_balance,
            }
        })
        .collect()
}
