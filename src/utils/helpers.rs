use argonautica::Verifier;
use rust_decimal::Decimal;
use tracing::error;

pub fn validate_password(
    hashed_password: &String,
    compare_password: &String,
    hash_key: &String,
) -> bool {
    let mut verifier = Verifier::default();
    verifier
        .with_hash(hashed_password)
        .with_password(compare_password)
        .with_secret_key(hash_key)
        .verify()
        .unwrap_or_else(|err| {
            error!("Failed to verify agent password hash ===> {}", err);
            false
        })
}

/// Human-readable transaction number printed on receipts, e.g. MT-000124.
/// Callers derive `row_id` from the transaction's auto-increment id so two
/// concurrent creates can never be assigned the same number.
pub fn generate_transaction_number(row_id: u64) -> String {
    format!("MT-{:06}", row_id)
}

/// Renders a minor-unit NZD amount for display, e.g. 151500 -> "NZD 1515.00".
pub fn format_nzd(cents: i64) -> String {
    format!("NZD {}", Decimal::new(cents, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_numbers_are_zero_padded() {
        assert_eq!(generate_transaction_number(1), "MT-000001");
        assert_eq!(generate_transaction_number(124), "MT-000124");
        assert_eq!(generate_transaction_number(1_234_567), "MT-1234567");
    }

    #[test]
    fn numbers_from_distinct_row_ids_never_collide() {
        let numbers: std::collections::HashSet<String> =
            (1..=1_000).map(generate_transaction_number).collect();

        assert_eq!(numbers.len(), 1_000);
    }

    #[test]
    fn formats_minor_units_as_nzd() {
        assert_eq!(format_nzd(151_500), "NZD 1515.00");
        assert_eq!(format_nzd(50), "NZD 0.50");
        assert_eq!(format_nzd(0), "NZD 0.00");
    }
}
