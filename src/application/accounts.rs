use crate::domain::account::{WELCOME_MESSAGE, is_valid_email};
use crate::domain::ports::{MailerBox, SecurityCodesBox};
use crate::error::Result;
use tracing::{debug, info, warn};

/// Account-side workflows: signup and one-time-code login.
pub struct AccountService {
    mailer: MailerBox,
    codes: SecurityCodesBox,
}

impl AccountService {
    pub fn new(mailer: MailerBox, codes: SecurityCodesBox) -> Self {
        Self { mailer, codes }
    }

    /// Signs `email` up and sends it a welcome message.
    ///
    /// Returns `false`, without sending anything, if the address is malformed.
    pub async fn sign_up(&self, email: &str) -> Result<bool> {
        if !is_valid_email(email) {
            warn!(email, "rejected signup with malformed address");
            return Ok(false);
        }

        self.mailer.send(email, WELCOME_MESSAGE).await?;
        info!(email, "signed up");
        Ok(true)
    }

    /// Emails a freshly generated security code to `email`.
    pub async fn login(&self, email: &str) -> Result<()> {
        let code = self.codes.generate();
        self.mailer.send(email, &code.to_string()).await?;
        debug!(email, "security code sent");
        Ok(())
    }
}
