use crate::notify::channels::NotificationChannel;
use crate::notify::email::channel::EmailChannel;
use crate::notify::NotificationVia;
use crate::notify::sms::channel::SmsChannel;

pub(crate) async fn create_notification_channel(via: NotificationVia) -> Box<dyn NotificationChannel> {
    match via {
        NotificationVia::Email => {
            Box::new(EmailChannel::new("circulation@library.org"))
        }
        NotificationVia::Sms => {
            Box::new(SmsChannel::new("22123"))
        }
    }
}
