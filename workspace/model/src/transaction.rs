use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Money coming into the society.
    Credit,
    /// Money leaving the society.
    Debit,
}

/// The closed set of transaction kinds shown in the passbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionKind {
    Maintenance,
    Vendor,
    Deposit,
    SocietyRoom,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 4] = [
        TransactionKind::Maintenance,
        TransactionKind::Vendor,
        TransactionKind::Deposit,
        TransactionKind::SocietyRoom,
    ];

    /// Income kinds are credits, everything paid out to vendors is a debit.
    pub fn polarity(self) -> Polarity {
        match self {
            TransactionKind::Maintenance
            | TransactionKind::Deposit
            | TransactionKind::SocietyRoom => Polarity::Credit,
            TransactionKind::Vendor => Polarity::Debit,
        }
    }

    /// Display label used in tables and exports.
    pub fn category(self) -> &'static str {
        match self {
            TransactionKind::Maintenance => "Maintenance",
            TransactionKind::Vendor => "Vendor Payment",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::SocietyRoom => "Room Rent",
        }
    }

    /// Stable machine name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Maintenance => "maintenance",
            TransactionKind::Vendor => "vendor",
            TransactionKind::Deposit => "deposit",
            TransactionKind::SocietyRoom => "societyRoom",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "maintenance" => Ok(TransactionKind::Maintenance),
            "vendor" => Ok(TransactionKind::Vendor),
            "deposit" => Ok(TransactionKind::Deposit),
            "societyroom" | "room" => Ok(TransactionKind::SocietyRoom),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

/// The record collections the ledger is assembled from.
///
/// Two sources feed the `Vendor` kind; every other source maps to its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    MaintenancePayments,
    VendorInvoices,
    VendorBillingHistory,
    RenovationDeposits,
    SocietyRooms,
}

impl SourceKind {
    /// All sources in the order their transactions are concatenated.
    pub const ALL: [SourceKind; 5] = [
        SourceKind::MaintenancePayments,
        SourceKind::VendorInvoices,
        SourceKind::VendorBillingHistory,
        SourceKind::RenovationDeposits,
        SourceKind::SocietyRooms,
    ];

    pub fn transaction_kind(self) -> TransactionKind {
        match self {
            SourceKind::MaintenancePayments => TransactionKind::Maintenance,
            SourceKind::VendorInvoices | SourceKind::VendorBillingHistory => {
                TransactionKind::Vendor
            }
            SourceKind::RenovationDeposits => TransactionKind::Deposit,
            SourceKind::SocietyRooms => TransactionKind::SocietyRoom,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::MaintenancePayments => "maintenance_payments",
            SourceKind::VendorInvoices => "vendor_invoices",
            SourceKind::VendorBillingHistory => "vendor_billing_history",
            SourceKind::RenovationDeposits => "renovation_deposits",
            SourceKind::SocietyRooms => "society_room_finances",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single normalized ledger entry.
///
/// Transactions are derived from source records on every aggregation pass and
/// are never modified afterwards, so there are no setters. Identity is the
/// `(source, id)` pair: ids are only unique within their source collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    source: SourceKind,
    id: i32,
    occurred_on: NaiveDate,
    amount: Decimal,
    description: String,
    status: String,
    reference: String,
}

impl Transaction {
    /// Creates a new Transaction. Negative amounts are stored as their
    /// magnitude; the direction comes from the kind.
    pub fn new(
        source: SourceKind,
        id: i32,
        occurred_on: NaiveDate,
        amount: Decimal,
        description: impl Into<String>,
        status: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            source,
            id,
            occurred_on,
            amount: amount.abs(),
            description: description.into(),
            status: status.into(),
            reference: reference.into(),
        }
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Primary key of the source record.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn kind(&self) -> TransactionKind {
        self.source.transaction_kind()
    }

    pub fn polarity(&self) -> Polarity {
        self.kind().polarity()
    }

    pub fn is_credit(&self) -> bool {
        self.polarity() == Polarity::Credit
    }

    pub fn category(&self) -> &'static str {
        self.kind().category()
    }

    pub fn occurred_on(&self) -> NaiveDate {
        self.occurred_on
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The amount with its ledger sign applied: positive for credits,
    /// negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        match self.polarity() {
            Polarity::Credit => self.amount,
            Polarity::Debit => -self.amount,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Source status, carried through as written.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Secondary identifier (flat, invoice or room number, vendor name).
    pub fn reference(&self) -> &str {
        &self.reference
    }
}
