use super::types::{FetchResult, Notification};
use crate::domain::error::PushError;

impl Notification {
    /// Whether a call to [`Notification::finish`] would still reach the transport.
    pub fn awaits_completion(&self) -> bool {
        self.is_remote && self.notification_id.is_some() && !self.completion_called.get()
    }

    /// Acknowledges background fetch work triggered by this remote notification.
    ///
    /// Only the first call on a remote notification carrying an id reaches the
    /// transport; local notifications and repeated calls are ignored.
    pub fn finish(&self, fetch_result: FetchResult) -> Result<(), PushError> {
        let notification_id = match self.notification_id.as_deref() {
            Some(id) if self.awaits_completion() => id,
            _ => return Ok(()),
        };
        self.completion_called.set(true);

        let transport = self
            .platform
            .as_ref()
            .ok_or(PushError::TransportUnavailable)?
            .transport()?;
        transport.on_finish_remote_notification(notification_id, fetch_result);
        Ok(())
    }
}
