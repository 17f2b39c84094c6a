pub mod channels;
pub mod email;
pub mod factory;
pub mod sms;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum NotificationVia {
    Email,
    Sms,
}

#[cfg(test)]
mod tests {
    use crate::notify::NotificationVia;

    #[tokio::test]
    async fn test_should_create_notification_via() {
        let _ = NotificationVia::Email;
        let _ = NotificationVia::Sms;
    }
}
