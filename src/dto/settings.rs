use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
pub struct UpdateRateBody {
    #[validate(length(min = 3, max = 3, message = "Currency must be a three-letter code"))]
    pub currency: String,

    /// Foreign units received per NZD.
    pub rate: Decimal,

    #[validate(range(min = 0, message = "Fee must not be negative"))]
    pub fee_nzd_cents: i64,
}
