use chrono::{DateTime, Months, NaiveDate, Utc};
use chrono_tz::Pacific::Auckland;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transactions at or above this amount (NZD cents) trigger the enhanced
/// AML field requirements.
pub const ENHANCED_AML_THRESHOLD_CENTS: i64 = 100_000;

pub const MINIMUM_SENDER_AGE_YEARS: u32 = 18;

pub const CURRENCIES: &[&str] = &["WST", "AUD", "USD"];

pub const PROOF_OF_ADDRESS_TYPES: &[&str] = &[
    "POWER_BILL",
    "WATER_BILL",
    "COUNCIL_RATES",
    "BANK_STATEMENT",
    "IRD_LETTER",
    "GOVT_LETTER",
    "BILL",
    "OTHER",
];

pub const SOURCE_OF_FUNDS_CATEGORIES: &[&str] = &[
    "SALARY_WAGES",
    "BUSINESS_INCOME",
    "SAVINGS",
    "LOAN",
    "GIFT",
    "SALE_OF_PROPERTY",
    "INVESTMENT",
    "OTHER",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdDocument {
    pub country_and_type: Option<String>,
    pub number: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

/// A prospective transaction as submitted by an agent. Derived totals are
/// computed client-side and supplied as input; the validator only accepts or
/// rejects, it never mutates or recomputes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionRequest {
    pub customer_id: Option<String>,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_email: Option<String>,
    pub sender_address: Option<String>,

    pub beneficiary_name: Option<String>,
    pub beneficiary_village: Option<String>,
    pub beneficiary_phone: Option<String>,
    pub beneficiary_bank_details: Option<String>,

    pub amount_nzd_cents: i64,
    pub fee_nzd_cents: i64,
    pub rate: Decimal,
    pub currency: String,
    pub total_paid_nzd_cents: i64,
    pub total_foreign_received: Decimal,

    pub dob: Option<NaiveDate>,
    pub verified_with_original_id: bool,

    pub proof_of_address_type: Option<String>,
    pub source_of_funds: Option<String>,
    pub source_of_funds_details: Option<String>,
    pub bank_account_details: Option<String>,
    pub proof_documents_provided: Option<String>,

    pub sender_street_address: Option<String>,
    pub sender_suburb: Option<String>,
    pub sender_city: Option<String>,
    pub sender_postcode: Option<String>,
    pub sender_home_phone: Option<String>,
    pub sender_mobile_phone: Option<String>,

    pub employer_name: Option<String>,
    pub employer_address: Option<String>,
    pub employer_phone: Option<String>,

    pub reason_for_remittance: Option<String>,
    pub relationship_to_beneficiary: Option<String>,

    pub id_document_primary: Option<IdDocument>,
    pub id_document_secondary: Option<IdDocument>,
}

impl TransactionRequest {
    fn phone_fields(&self) -> [(&'static str, &Option<String>); 5] {
        [
            ("senderPhone", &self.sender_phone),
            ("beneficiaryPhone", &self.beneficiary_phone),
            ("senderHomePhone", &self.sender_home_phone),
            ("senderMobilePhone", &self.sender_mobile_phone),
            ("employerPhone", &self.employer_phone),
        ]
    }

    fn enhanced_aml_fields(&self) -> [(&'static str, &Option<String>); 15] {
        [
            ("senderStreetAddress", &self.sender_street_address),
            ("senderSuburb", &self.sender_suburb),
            ("senderCity", &self.sender_city),
            ("senderPostcode", &self.sender_postcode),
            ("senderHomePhone", &self.sender_home_phone),
            ("senderMobilePhone", &self.sender_mobile_phone),
            ("employerName", &self.employer_name),
            ("employerAddress", &self.employer_address),
            ("employerPhone", &self.employer_phone),
            ("reasonForRemittance", &self.reason_for_remittance),
            ("relationshipToBeneficiary", &self.relationship_to_beneficiary),
            ("sourceOfFunds", &self.source_of_funds),
            ("bankAccountDetails", &self.bank_account_details),
            ("proofOfAddressType", &self.proof_of_address_type),
            ("proofDocumentsProvided", &self.proof_documents_provided),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    RequiredField,
    InvalidPhoneFormat,
    InvalidEmailFormat,
    Underage,
    InvalidAmount,
    InvalidCurrency,
    EnhancedAmlRequired,
    InvalidEnumValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
            missing: Vec::new(),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// E.164: optional leading `+`, a leading digit 1-9, then 7 to 14 further
/// digits (8-15 digits total).
pub fn is_e164(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    if !(8..=15).contains(&digits.len()) {
        return false;
    }

    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {}
        _ => return false,
    }

    chars.all(|ch| ch.is_ascii_digit())
}

/// Latest acceptable date of birth: the sender must have turned 18 by the
/// current Pacific/Auckland calendar day, wherever the request came from.
fn dob_cutoff(now: DateTime<Utc>) -> NaiveDate {
    let today = now.with_timezone(&Auckland).date_naive();
    today
        .checked_sub_months(Months::new(12 * MINIMUM_SENDER_AGE_YEARS))
        .unwrap_or(NaiveDate::MIN)
}

fn missing_enhanced_fields(request: &TransactionRequest) -> Vec<&'static str> {
    request
        .enhanced_aml_fields()
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
}

fn required(field: &'static str) -> ValidationError {
    ValidationError::new(field, ErrorKind::RequiredField, "must not be empty")
}

/// Validates a prospective transaction against the AML/KYC rule set.
///
/// Every rule is evaluated and every violation collected, in a fixed order,
/// so the operator sees all failing fields in one round-trip. The validator
/// is pure: `now` is the only clock it ever sees, and the request comes back
/// unchanged on success.
pub fn validate(
    request: TransactionRequest,
    now: DateTime<Utc>,
) -> Result<TransactionRequest, Vec<ValidationError>> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // 1. Required party fields
    if is_blank(&request.beneficiary_name) {
        errors.push(required("beneficiaryName"));
    }
    if is_blank(&request.sender_name) {
        errors.push(required("senderName"));
    }
    if is_blank(&request.sender_phone) {
        errors.push(required("senderPhone"));
    }

    // 2. Phone format, for every phone-shaped field that was supplied
    for (field, value) in request.phone_fields() {
        if let Some(phone) = value.as_deref() {
            let phone = phone.trim();
            if !phone.is_empty() && !is_e164(phone) {
                errors.push(ValidationError::new(
                    field,
                    ErrorKind::InvalidPhoneFormat,
                    "must be an international phone number, e.g. +6421234567",
                ));
            }
        }
    }

    // 3. Email format; an empty string counts as absent
    if let Some(email) = request.sender_email.as_deref() {
        let email = email.trim();
        if !email.is_empty() && !validator::validate_email(email) {
            errors.push(ValidationError::new(
                "senderEmail",
                ErrorKind::InvalidEmailFormat,
                "must be a valid email address",
            ));
        }
    }

    // 4. Age eligibility, pinned to the Pacific/Auckland calendar day
    match request.dob {
        None => errors.push(ValidationError::new(
            "dob",
            ErrorKind::RequiredField,
            "must not be empty",
        )),
        Some(dob) => {
            if dob > dob_cutoff(now) {
                errors.push(ValidationError::new(
                    "dob",
                    ErrorKind::Underage,
                    format!(
                        "sender must be at least {} years old",
                        MINIMUM_SENDER_AGE_YEARS
                    ),
                ));
            }
        }
    }

    // 5. Monetary sanity
    for (field, cents) in [
        ("amountNzdCents", request.amount_nzd_cents),
        ("feeNzdCents", request.fee_nzd_cents),
        ("totalPaidNzdCents", request.total_paid_nzd_cents),
    ] {
        if cents < 0 {
            errors.push(ValidationError::new(
                field,
                ErrorKind::InvalidAmount,
                "must not be negative",
            ));
        }
    }
    if request.rate <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "rate",
            ErrorKind::InvalidAmount,
            "must be greater than zero",
        ));
    }
    if request.total_foreign_received < Decimal::ZERO {
        errors.push(ValidationError::new(
            "totalForeignReceived",
            ErrorKind::InvalidAmount,
            "must not be negative",
        ));
    }

    // 6. Currency enumeration
    if !CURRENCIES.contains(&request.currency.as_str()) {
        errors.push(ValidationError::new(
            "currency",
            ErrorKind::InvalidCurrency,
            format!("must be one of: {}", CURRENCIES.join(", ")),
        ));
    }

    // 7. Enhanced-AML threshold rule
    if request.amount_nzd_cents >= ENHANCED_AML_THRESHOLD_CENTS {
        let missing = missing_enhanced_fields(&request);
        if !missing.is_empty() {
            errors.push(ValidationError {
                field: "amountNzdCents",
                kind: ErrorKind::EnhancedAmlRequired,
                message: format!(
                    "amounts of NZD 1,000.00 and above require enhanced AML details; missing: {}",
                    missing.join(", ")
                ),
                missing,
            });
        }
    }

    // 8. Enumeration membership when supplied
    for (field, value, allowed) in [
        (
            "proofOfAddressType",
            &request.proof_of_address_type,
            PROOF_OF_ADDRESS_TYPES,
        ),
        (
            "sourceOfFunds",
            &request.source_of_funds,
            SOURCE_OF_FUNDS_CATEGORIES,
        ),
    ] {
        if let Some(value) = value.as_deref() {
            let value = value.trim();
            if !value.is_empty() && !allowed.contains(&value) {
                errors.push(ValidationError::new(
                    field,
                    ErrorKind::InvalidEnumValue,
                    format!("must be one of: {}", allowed.join(", ")),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        // Midday in Auckland on 2024-03-15 (NZDT, UTC+13)
        Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap()
    }

    fn base_request() -> TransactionRequest {
        TransactionRequest {
            customer_id: Some(String::from("CUST-0042")),
            sender_name: Some(String::from("Sina Faleolo")),
            sender_phone: Some(String::from("+6421234567")),
            sender_email: Some(String::from("sina.faleolo@example.com")),
            sender_address: Some(String::from("12 Tidal Rd, Mangere")),
            beneficiary_name: Some(String::from("Malia Faleolo")),
            beneficiary_village: Some(String::from("Lotofaga")),
            beneficiary_phone: Some(String::from("+685721234")),
            beneficiary_bank_details: None,
            amount_nzd_cents: 50_000,
            fee_nzd_cents: 1_500,
            rate: Decimal::new(16, 1),
            currency: String::from("WST"),
            total_paid_nzd_cents: 51_500,
            total_foreign_received: Decimal::new(80_000, 2),
            dob: NaiveDate::from_ymd_opt(1985, 7, 14),
            verified_with_original_id: true,
            ..Default::default()
        }
    }

    fn enhanced_request() -> TransactionRequest {
        TransactionRequest {
            amount_nzd_cents: 150_000,
            total_paid_nzd_cents: 151_500,
            total_foreign_received: Decimal::new(240_000, 2),
            proof_of_address_type: Some(String::from("POWER_BILL")),
            source_of_funds: Some(String::from("SALARY_WAGES")),
            bank_account_details: Some(String::from("12-3456-0789012-00")),
            proof_documents_provided: Some(String::from("Power bill + bank statement sighted")),
            sender_street_address: Some(String::from("12 Tidal Rd")),
            sender_suburb: Some(String::from("Mangere")),
            sender_city: Some(String::from("Auckland")),
            sender_postcode: Some(String::from("2022")),
            sender_home_phone: Some(String::from("+6492751234")),
            sender_mobile_phone: Some(String::from("+6421234567")),
            employer_name: Some(String::from("Harbour Freight Ltd")),
            employer_address: Some(String::from("8 Wharf St, Onehunga")),
            employer_phone: Some(String::from("+6496341234")),
            reason_for_remittance: Some(String::from("Family support")),
            relationship_to_beneficiary: Some(String::from("Sister")),
            ..base_request()
        }
    }

    fn kinds(errors: &[ValidationError]) -> Vec<ErrorKind> {
        errors.iter().map(|err| err.kind).collect()
    }

    #[test]
    fn accepts_a_clean_below_threshold_request() {
        let request = base_request();
        let accepted = validate(request.clone(), fixed_now()).expect("should validate");
        assert_eq!(accepted, request);
    }

    #[test]
    fn below_threshold_enhanced_fields_are_optional() {
        let request = TransactionRequest {
            amount_nzd_cents: 99_999,
            ..base_request()
        };
        assert!(validate(request, fixed_now()).is_ok());
    }

    #[test]
    fn at_threshold_enhanced_fields_become_mandatory() {
        let request = TransactionRequest {
            amount_nzd_cents: 100_000,
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::EnhancedAmlRequired);
        assert_eq!(errors[0].field, "amountNzdCents");
        assert_eq!(errors[0].missing.len(), 15);
    }

    #[test]
    fn at_threshold_fully_populated_request_is_accepted() {
        assert!(validate(enhanced_request(), fixed_now()).is_ok());
    }

    #[test]
    fn single_missing_enhanced_field_is_named() {
        let request = TransactionRequest {
            employer_phone: None,
            ..enhanced_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::EnhancedAmlRequired);
        assert_eq!(errors[0].missing, vec!["employerPhone"]);
    }

    #[test]
    fn sender_turning_18_today_in_auckland_passes() {
        let request = TransactionRequest {
            dob: NaiveDate::from_ymd_opt(2006, 3, 15),
            ..base_request()
        };
        assert!(validate(request, fixed_now()).is_ok());
    }

    #[test]
    fn sender_one_day_short_of_18_is_rejected() {
        let request = TransactionRequest {
            dob: NaiveDate::from_ymd_opt(2006, 3, 16),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ErrorKind::Underage]);
    }

    #[test]
    fn age_is_evaluated_on_the_auckland_calendar_day() {
        // 11:30 UTC on the 15th is already the 16th in Auckland, so a sender
        // born on 2006-03-16 is 18 there even though UTC says otherwise.
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 11, 30, 0).unwrap();
        let request = TransactionRequest {
            dob: NaiveDate::from_ymd_opt(2006, 3, 16),
            ..base_request()
        };
        assert!(validate(request, now).is_ok());
    }

    #[test]
    fn missing_dob_is_a_required_field_violation() {
        let request = TransactionRequest {
            dob: None,
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(errors[0].field, "dob");
        assert_eq!(errors[0].kind, ErrorKind::RequiredField);
    }

    #[test]
    fn phone_format_boundaries() {
        assert!(is_e164("+6421234567"));
        assert!(!is_e164("0211234567"));
        assert!(!is_e164("+1234567"));
        assert!(is_e164("+123456789012345"));
        assert!(!is_e164("+1234567890123456"));
        assert!(is_e164("64212345678"));
        assert!(!is_e164("+64 21 234 567"));
    }

    #[test]
    fn bad_phone_is_rejected_with_the_field_named() {
        let request = TransactionRequest {
            sender_phone: Some(String::from("0211234567")),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "senderPhone");
        assert_eq!(errors[0].kind, ErrorKind::InvalidPhoneFormat);
    }

    #[test]
    fn empty_email_is_treated_as_absent() {
        let request = TransactionRequest {
            sender_email: Some(String::new()),
            ..base_request()
        };
        assert!(validate(request, fixed_now()).is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let request = TransactionRequest {
            sender_email: Some(String::from("not-an-email")),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ErrorKind::InvalidEmailFormat]);
    }

    #[test]
    fn negative_amounts_and_zero_rate_are_rejected() {
        let request = TransactionRequest {
            fee_nzd_cents: -1,
            rate: Decimal::ZERO,
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ErrorKind::InvalidAmount, ErrorKind::InvalidAmount]
        );
        assert_eq!(errors[0].field, "feeNzdCents");
        assert_eq!(errors[1].field, "rate");
    }

    #[test]
    fn unknown_currency_is_always_rejected() {
        let request = TransactionRequest {
            currency: String::from("EUR"),
            ..enhanced_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(kinds(&errors), vec![ErrorKind::InvalidCurrency]);
    }

    #[test]
    fn unknown_enum_values_are_rejected_when_supplied() {
        let request = TransactionRequest {
            proof_of_address_type: Some(String::from("PHONE_BILL")),
            source_of_funds: Some(String::from("LOTTERY")),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(
            kinds(&errors),
            vec![ErrorKind::InvalidEnumValue, ErrorKind::InvalidEnumValue]
        );
    }

    #[test]
    fn all_violations_are_collected_in_rule_order() {
        let request = TransactionRequest {
            sender_phone: Some(String::from("0211234567")),
            dob: NaiveDate::from_ymd_opt(2010, 1, 1),
            amount_nzd_cents: 100_000,
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();

        assert_eq!(
            kinds(&errors),
            vec![
                ErrorKind::InvalidPhoneFormat,
                ErrorKind::Underage,
                ErrorKind::EnhancedAmlRequired,
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let now = fixed_now();

        let ok_request = base_request();
        assert_eq!(
            validate(ok_request.clone(), now),
            validate(ok_request, now)
        );

        let bad_request = TransactionRequest {
            currency: String::from("EUR"),
            dob: NaiveDate::from_ymd_opt(2010, 1, 1),
            ..base_request()
        };
        assert_eq!(
            validate(bad_request.clone(), now),
            validate(bad_request, now)
        );
    }

    #[test]
    fn source_of_funds_details_stays_optional_above_threshold() {
        let request = TransactionRequest {
            source_of_funds_details: None,
            ..enhanced_request()
        };
        assert!(validate(request, fixed_now()).is_ok());
    }

    #[test]
    fn supplied_enhanced_fields_below_threshold_are_still_format_checked() {
        let request = TransactionRequest {
            amount_nzd_cents: 50_000,
            employer_phone: Some(String::from("not-a-phone")),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();
        assert_eq!(errors[0].field, "employerPhone");
        assert_eq!(errors[0].kind, ErrorKind::InvalidPhoneFormat);
    }

    #[test]
    fn missing_required_party_fields_are_all_reported() {
        let request = TransactionRequest {
            sender_name: None,
            sender_phone: Some(String::from("   ")),
            beneficiary_name: Some(String::new()),
            ..base_request()
        };
        let errors = validate(request, fixed_now()).unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|err| err.field).collect();
        assert_eq!(fields, vec!["beneficiaryName", "senderName", "senderPhone"]);
        assert!(errors.iter().all(|err| err.kind == ErrorKind::RequiredField));
    }
}
