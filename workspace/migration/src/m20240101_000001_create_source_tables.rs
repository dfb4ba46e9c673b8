use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create maintenance_payments table
        manager
            .create_table(
                Table::create()
                    .table(MaintenancePayments::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenancePayments::Id))
                    .col(string(MaintenancePayments::FlatNumber))
                    .col(decimal_len_null(MaintenancePayments::Amount, 16, 4))
                    .col(string(MaintenancePayments::Status))
                    .col(date_null(MaintenancePayments::PaidDate))
                    .col(date_time(MaintenancePayments::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create vendor_invoices table
        manager
            .create_table(
                Table::create()
                    .table(VendorInvoices::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorInvoices::Id))
                    .col(string(VendorInvoices::VendorName))
                    .col(string(VendorInvoices::InvoiceNumber))
                    .col(string_null(VendorInvoices::Description))
                    .col(decimal_len_null(VendorInvoices::Amount, 16, 4))
                    .col(decimal_len_null(VendorInvoices::PaidAmount, 16, 4))
                    .col(string(VendorInvoices::Status))
                    .col(date_null(VendorInvoices::InvoiceDate))
                    .col(date_time(VendorInvoices::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create vendor_billing_history table
        manager
            .create_table(
                Table::create()
                    .table(VendorBillingHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(VendorBillingHistory::Id))
                    .col(string(VendorBillingHistory::VendorName))
                    .col(decimal_len_null(VendorBillingHistory::AmountPaid, 16, 4))
                    .col(string_null(VendorBillingHistory::PaymentMode))
                    .col(date_null(VendorBillingHistory::PaymentDate))
                    .col(date_time(VendorBillingHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create renovation_deposits table
        manager
            .create_table(
                Table::create()
                    .table(RenovationDeposits::Table)
                    .if_not_exists()
                    .col(pk_auto(RenovationDeposits::Id))
                    .col(string(RenovationDeposits::FlatNumber))
                    .col(decimal_len_null(RenovationDeposits::Amount, 16, 4))
                    .col(string(RenovationDeposits::Status))
                    .col(date_null(RenovationDeposits::DepositDate))
                    .col(date_time(RenovationDeposits::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Create society_room_finances table
        manager
            .create_table(
                Table::create()
                    .table(SocietyRoomFinances::Table)
                    .if_not_exists()
                    .col(pk_auto(SocietyRoomFinances::Id))
                    .col(string(SocietyRoomFinances::RoomNumber))
                    .col(integer_null(SocietyRoomFinances::Month))
                    .col(decimal_len_null(SocietyRoomFinances::FinanceAmount, 16, 4))
                    .col(string(SocietyRoomFinances::Status))
                    .col(date_time(SocietyRoomFinances::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocietyRoomFinances::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RenovationDeposits::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VendorBillingHistory::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VendorInvoices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenancePayments::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum MaintenancePayments {
    Table,
    Id,
    FlatNumber,
    Amount,
    Status,
    PaidDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VendorInvoices {
    Table,
    Id,
    VendorName,
    InvoiceNumber,
    Description,
    Amount,
    PaidAmount,
    Status,
    InvoiceDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum VendorBillingHistory {
    Table,
    Id,
    VendorName,
    AmountPaid,
    PaymentMode,
    PaymentDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RenovationDeposits {
    Table,
    Id,
    FlatNumber,
    Amount,
    Status,
    DepositDate,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SocietyRoomFinances {
    Table,
    Id,
    RoomNumber,
    Month,
    FinanceAmount,
    Status,
    CreatedAt,
}
