//! Inbound transport→UI message protocol.
//!
//! When a delivered platform notification is clicked or dismissed, the
//! transport layer reports it with one of these messages so the app can
//! deep-link to the relevant view.  The wire format is the tagged JSON the
//! transport boundary speaks:
//!
//! ```json
//! {"type":"notification-click","payload":{"route":3,"stop":1,"kind":"arrival"}}
//! ```

use vt_notify::NotificationPayload;

/// A user interaction with a delivered notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum PushInteraction {
    /// The user tapped the notification — route them to the tracking view
    /// identified by the payload.
    #[serde(rename = "notification-click")]
    Click(NotificationPayload),

    /// The user dismissed the notification.
    #[serde(rename = "notification-close")]
    Close(NotificationPayload),
}

impl PushInteraction {
    pub fn payload(&self) -> &NotificationPayload {
        match self {
            PushInteraction::Click(p) | PushInteraction::Close(p) => p,
        }
    }
}
