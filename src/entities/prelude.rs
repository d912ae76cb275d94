pub use super::agents::Entity as Agents;
pub use super::settings::Entity as Settings;
pub use super::transactions::Entity as Transactions;
