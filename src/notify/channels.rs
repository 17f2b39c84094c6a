use async_trait::async_trait;
use crate::core::library::LibraryResult;

// NotificationChannel delivers a text message to a named recipient; the
// boolean reports whether delivery was accepted by the channel.
#[async_trait]
pub(crate) trait NotificationChannel: Sync + Send {
    async fn send(&self, message: &str, recipient: &str) -> LibraryResult<bool>;
}
