use super::config::EnvConfig;
use super::helpers::format_nzd;
use crate::entities::transactions;

pub fn verify_account_template(first_name: &String, token: &String, env: &EnvConfig) -> String {
    let verify_account_url = format!(
        "{}/api/agent/verify-account?token={}",
        env.app_base_url, token
    );

    format!(
        r#"
        <html>
            <body>
                <p>Hi, {first_name}</p>
                <p>Welcome to the remit agency back office,</p>
                <p>Please verify your email by clicking on the link below:</p>
                <a href="{verify_account_url}">Click here to verify your account</a>
            </body>
        </html>
        "#
    )
}

pub fn transaction_receipt_template(transaction: &transactions::Model) -> String {
    let amount = format_nzd(transaction.amount_nzd_cents);
    let fee = format_nzd(transaction.fee_nzd_cents);
    let total_paid = format_nzd(transaction.total_paid_nzd_cents);

    format!(
        r#"
        <html>
            <body>
                <p>Hi, {sender}</p>
                <p>Your transfer <b>{number}</b> to {beneficiary} has been received.</p>
                <ul>
                    <li>Amount sent: {amount}</li>
                    <li>Fee: {fee}</li>
                    <li>Total paid: {total_paid}</li>
                    <li>Beneficiary receives: {foreign} {currency} (rate {rate})</li>
                </ul>
                <p>Please keep this receipt for your records.</p>
            </body>
        </html>
        "#,
        sender = transaction.sender_name,
        number = transaction.transaction_number,
        beneficiary = transaction.beneficiary_name,
        foreign = transaction.total_foreign_received,
        currency = transaction.currency,
        rate = transaction.rate,
    )
}
