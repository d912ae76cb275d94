pub mod compliance;
pub mod transaction_store;
