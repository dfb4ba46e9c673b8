//! SeaORM entities for the record collections the passbook reads from.
//! The pages that own these tables write to them; the ledger only ever reads.

pub mod maintenance_payment;
pub mod renovation_deposit;
pub mod society_room_finance;
pub mod vendor_billing_history;
pub mod vendor_invoice;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::maintenance_payment::Entity as MaintenancePayment;
    pub use super::renovation_deposit::Entity as RenovationDeposit;
    pub use super::society_room_finance::Entity as SocietyRoomFinance;
    pub use super::vendor_billing_history::Entity as VendorBillingHistory;
    pub use super::vendor_invoice::Entity as VendorInvoice;
}
