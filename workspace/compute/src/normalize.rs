//! Turns raw source records into ledger transactions.
//!
//! Each function is pure and returns `None` for records that do not belong in
//! the ledger (wrong status, no amount). Records never fail to normalize:
//! a missing amount counts as zero and a missing date falls back to the
//! record's creation date.

use chrono::Month;
use model::entities::{
    maintenance_payment, renovation_deposit, society_room_finance, vendor_billing_history,
    vendor_invoice,
};
use model::transaction::{SourceKind, Transaction};
use rust_decimal::Decimal;
use tracing::trace;

use crate::sources::database::{INVOICE_SETTLED, MAINTENANCE_PAID};

pub fn maintenance_payment(record: &maintenance_payment::Model) -> Option<Transaction> {
    if record.status != MAINTENANCE_PAID {
        trace!(id = record.id, status = %record.status, "Skipping unpaid maintenance payment");
        return None;
    }

    Some(Transaction::new(
        SourceKind::MaintenancePayments,
        record.id,
        record.paid_date.unwrap_or_else(|| record.created_at.date()),
        record.amount.unwrap_or(Decimal::ZERO),
        format!("Maintenance Payment - {}", record.flat_number),
        record.status.clone(),
        record.flat_number.clone(),
    ))
}

pub fn vendor_invoice(record: &vendor_invoice::Model) -> Option<Transaction> {
    if !INVOICE_SETTLED.contains(&record.status.as_str()) {
        trace!(id = record.id, status = %record.status, "Skipping unsettled vendor invoice");
        return None;
    }

    let description = match record.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => format!("Vendor Invoice - {}", record.invoice_number),
    };

    Some(Transaction::new(
        SourceKind::VendorInvoices,
        record.id,
        record.invoice_date.unwrap_or_else(|| record.created_at.date()),
        record.paid_amount.or(record.amount).unwrap_or(Decimal::ZERO),
        description,
        record.status.clone(),
        record.invoice_number.clone(),
    ))
}

pub fn vendor_billing(record: &vendor_billing_history::Model) -> Option<Transaction> {
    let description = match record
        .payment_mode
        .as_deref()
        .map(humanize_payment_mode)
        .filter(|mode| !mode.is_empty())
    {
        Some(mode) => format!("Vendor Payment - {} ({})", record.vendor_name, mode),
        None => format!("Vendor Payment - {}", record.vendor_name),
    };

    Some(Transaction::new(
        SourceKind::VendorBillingHistory,
        record.id,
        record.payment_date.unwrap_or_else(|| record.created_at.date()),
        record.amount_paid.unwrap_or(Decimal::ZERO),
        description,
        "paid",
        record.vendor_name.clone(),
    ))
}

pub fn renovation_deposit(record: &renovation_deposit::Model) -> Option<Transaction> {
    Some(Transaction::new(
        SourceKind::RenovationDeposits,
        record.id,
        record.deposit_date.unwrap_or_else(|| record.created_at.date()),
        record.amount.unwrap_or(Decimal::ZERO),
        format!("Renovation Deposit - {}", record.flat_number),
        record.status.clone(),
        record.flat_number.clone(),
    ))
}

pub fn society_room(record: &society_room_finance::Model) -> Option<Transaction> {
    let Some(amount) = record.finance_amount else {
        trace!(id = record.id, "Skipping society room entry without finance amount");
        return None;
    };

    let description = match record.month.and_then(month_name) {
        Some(month) => format!("Room Rent - {} ({})", record.room_number, month),
        None => format!("Room Rent - {}", record.room_number),
    };

    Some(Transaction::new(
        SourceKind::SocietyRooms,
        record.id,
        record.created_at.date(),
        amount,
        description,
        record.status.clone(),
        record.room_number.clone(),
    ))
}

/// `bank_transfer` becomes `Bank Transfer`.
pub fn humanize_payment_mode(mode: &str) -> String {
    mode.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// English month name for 1..=12.
pub fn month_name(month: i32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}
