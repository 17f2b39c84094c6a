use async_trait::async_trait;
use tracing::log::info;
use crate::core::library::LibraryResult;
use crate::notify::channels::NotificationChannel;

// EmailChannel writes the message to the console trace in place of a real
// mail transport and always reports success.
#[derive(Debug)]
pub(crate) struct EmailChannel {
    sender: String,
}

impl EmailChannel {
    pub(crate) fn new(sender: &str) -> Self {
        Self {
            sender: sender.to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for EmailChannel {
    async fn send(&self, message: &str, recipient: &str) -> LibraryResult<bool> {
        info!("Email from {} to {}: {}", self.sender, recipient, message);
        Ok(true)
    }
}
