pub mod agents;
pub mod settings;
pub mod transactions;
