//! Email delivery.
//!
//! The orchestrator only knows the [`Mailer`] trait; the SMTP implementation
//! lives here so tests can swap in an in-memory sender. Failure reasons are
//! opaque strings to the caller: a network error, an auth error and a
//! rejected recipient all count the same way.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::{SidelineError, SidelineResult};

/// A fully rendered email addressed to one recipient.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

/// Delivery channel abstraction.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Transmit one email. Blocking from the orchestrator's point of view;
    /// it awaits each send before touching the ledger.
    async fn send(&self, email: &OutboundEmail) -> SidelineResult<()>;
}

/// SMTP delivery over STARTTLS with password authentication.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer for the given relay. `from_name` is the display name
    /// on the From header (the coach), `from_email` the authenticated sender.
    pub fn new(
        host: &str,
        port: u16,
        from_name: &str,
        from_email: &str,
        password: &str,
    ) -> SidelineResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| SidelineError::Delivery(format!("SMTP relay setup failed: {e}")))?
            .port(port)
            .credentials(Credentials::new(from_email.to_string(), password.to_string()))
            .build();

        let from = Mailbox::new(
            Some(from_name.to_string()),
            from_email
                .parse()
                .map_err(|e| SidelineError::Delivery(format!("Invalid sender address: {e}")))?,
        );

        Ok(SmtpMailer { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> SidelineResult<()> {
        let to = Mailbox::new(
            Some(email.to_name.clone()),
            email
                .to_email
                .parse()
                .map_err(|e| SidelineError::Delivery(format!("Invalid recipient address: {e}")))?,
        );

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| SidelineError::Delivery(format!("Message build failed: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| SidelineError::Delivery(format!("SMTP send failed: {e}")))?;

        Ok(())
    }
}
