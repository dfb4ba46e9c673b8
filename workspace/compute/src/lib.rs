pub mod aggregator;
pub mod converters;
pub mod error;
pub mod ledger;
pub mod normalize;
pub mod sources;

#[cfg(test)]
pub mod testing;

use sea_orm::DatabaseConnection;

use aggregator::LedgerAggregator;
use sources::DatabaseSources;

/// Returns the aggregator used by the application: every source read from the
/// given database.
pub fn default_aggregator(db: DatabaseConnection) -> LedgerAggregator<DatabaseSources> {
    LedgerAggregator::new(DatabaseSources::new(db))
}
