pub mod config;
pub mod email_template;
pub mod helpers;
pub mod send_email;
