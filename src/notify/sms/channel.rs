use async_trait::async_trait;
use tracing::log::info;
use crate::core::library::LibraryResult;
use crate::notify::channels::NotificationChannel;

// SmsChannel writes the message to the console trace in place of a real
// SMS gateway and always reports success.
#[derive(Debug)]
pub(crate) struct SmsChannel {
    short_code: String,
}

impl SmsChannel {
    pub(crate) fn new(short_code: &str) -> Self {
        Self {
            short_code: short_code.to_string(),
        }
    }
}

#[async_trait]
impl NotificationChannel for SmsChannel {
    async fn send(&self, message: &str, recipient: &str) -> LibraryResult<bool> {
        info!("SMS from {} to {}: {}", self.short_code, recipient, message);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::notify::channels::NotificationChannel;
    use crate::notify::sms::channel::SmsChannel;

    #[tokio::test]
    async fn test_should_send_sms() {
        let channel = SmsChannel::new("22123");
        let sent = channel.send("hello", "Carlos Lopez").await.expect("should send");
        assert!(sent);
    }
}
