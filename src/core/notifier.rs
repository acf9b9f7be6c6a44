use crate::errors::{AppError, AppResult};
use crate::models::Notification;
use crate::ui::messages;
use std::io::{self, Write};

/// Presents notifications on behalf of the driver.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification) -> AppResult<()>;
}

/// Prints a banner on stdout and rings the terminal bell when sound is on.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: &Notification) -> AppResult<()> {
        messages::notice(notification.title, notification.body);

        if notification.sound {
            let mut out = io::stdout();
            out.write_all(b"\x07")
                .and_then(|_| out.flush())
                .map_err(|e| AppError::Notify(e.to_string()))?;
        }

        Ok(())
    }
}
