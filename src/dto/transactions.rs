use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct ListTransactionsQuery {
    pub currency: Option<String>,
    pub limit: Option<u64>,
}
