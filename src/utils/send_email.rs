use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

use super::config::EnvConfig;

pub struct SendEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub template: String,
}

#[async_trait]
pub trait SendEmailTrait {
    async fn send_email(&self, env: &EnvConfig) -> Result<(), ()>;
}

#[async_trait]
impl SendEmailTrait for SendEmail {
    #[instrument(skip(self, env), fields(email = %self.to, subject = %self.subject))]
    async fn send_email(&self, env: &EnvConfig) -> Result<(), ()> {
        let email = Message::builder()
            .to(self.to.parse().map_err(|err| {
                error!("Invalid destination address: {}", err);
            })?)
            .from(self.from.parse().map_err(|err| {
                error!("Invalid sender address: {}", err);
            })?)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(self.template.clone())
            .map_err(|err| {
                error!("Failed to build email: {}", err);
            })?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&env.smtp_provider)
            .map_err(|err| {
                error!("Failed to build SMTP transport: {}", err);
            })?
            .credentials(Credentials::new(
                env.smtp_user.clone(),
                env.smtp_key.clone(),
            ))
            .build();

        match mailer.send(email).await {
            Ok(_) => info!("Email successfully sent"),
            Err(err) => error!("Failed to deliver email: {}", err),
        }

        Ok(())
    }
}

/// Fire-and-forget delivery: the send runs on a detached task so request
/// handlers never wait on the SMTP round-trip, and failures stay in the logs.
pub fn spawn_email(email: SendEmail, env: EnvConfig) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let _ = email.send_email(&env).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_env() -> EnvConfig {
        EnvConfig {
            app_name: String::from("remit-backoffice-test"),
            port: String::from("8080"),
            host: String::from("127.0.0.1"),
            database_url: String::new(),
            app_key: String::new(),
            hash_key: String::new(),
            app_base_url: String::from("http://localhost:8080"),
            smtp_provider: String::new(),
            smtp_user: String::new(),
            smtp_key: String::new(),
            from_email: String::from("office@remitagency.nz"),
        }
    }

    #[tokio::test]
    async fn send_fails_cleanly_on_an_invalid_address() {
        let email = SendEmail {
            to: String::from("not-an-address"),
            from: String::from("office@remitagency.nz"),
            subject: String::from("TRANSFER RECEIPT MT-000001"),
            template: String::from("<html></html>"),
        };

        assert!(email.send_email(&test_env()).await.is_err());
    }

    #[tokio::test]
    async fn spawned_send_never_panics_the_caller() {
        let email = SendEmail {
            to: String::from("not-an-address"),
            from: String::from("office@remitagency.nz"),
            subject: String::from("TRANSFER RECEIPT MT-000001"),
            template: String::from("<html></html>"),
        };

        let handle = spawn_email(email, test_env());

        handle.await.expect("email task should not panic");
    }
}
