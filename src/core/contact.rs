// Contact form submission state: button, banners and their auto-dismiss.
use crate::constants::EMAIL_SUCCESS_STATUS;

pub const GENERIC_SEND_ERROR: &str = "Failed to send message. Please try again later.";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("please fill in all required fields")]
    Invalid,
    #[error("email service is unavailable")]
    Unavailable,
    #[error("email service responded with status {0}")]
    Status(u16),
    #[error("{0}")]
    Rejected(String),
}

impl SendError {
    /// Text shown in the error region; never empty.
    pub fn user_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            GENERIC_SEND_ERROR.to_string()
        } else {
            msg
        }
    }
}

/// Map the delivery service's resolved status code to an outcome.
#[inline]
pub fn status_outcome(status: u16) -> Result<(), SendError> {
    if status == EMAIL_SUCCESS_STATUS {
        Ok(())
    } else {
        Err(SendError::Status(status))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Banner {
    #[default]
    Hidden,
    Success,
    Error(String),
}

/// What the DOM layer has to do after a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub clear_form: bool,
    /// Pass back to [`ContactForm::dismiss`] once the banner delay elapses.
    pub dismiss_token: u32,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    sending: bool,
    banner: Banner,
    epoch: u32,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the sending state. Returns `false` if a send is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.sending {
            return false;
        }
        self.sending = true;
        true
    }

    pub fn finish(&mut self, result: Result<(), SendError>) -> Finished {
        self.sending = false;
        self.epoch = self.epoch.wrapping_add(1);
        let clear_form = match result {
            Ok(()) => {
                self.banner = Banner::Success;
                true
            }
            Err(e) => {
                self.banner = Banner::Error(e.user_message());
                false
            }
        };
        Finished {
            clear_form,
            dismiss_token: self.epoch,
        }
    }

    /// Hide the banner unless a newer outcome has replaced it since `token`.
    pub fn dismiss(&mut self, token: u32) -> bool {
        if token != self.epoch || self.banner == Banner::Hidden {
            return false;
        }
        self.banner = Banner::Hidden;
        true
    }

    pub fn banner(&self) -> &Banner {
        &self.banner
    }

    pub fn submit_enabled(&self) -> bool {
        !self.sending
    }
}
