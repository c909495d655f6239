//! Single-slot transient notification.
//!
//! Any action may overwrite the slot; the newest message wins. Each message
//! gets a [`NoticeToken`] so an auto-dismiss timer started for an older
//! message cannot hide a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

/// How long a notice stays visible before auto-dismissal.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    pub token: NoticeToken,
}

/// Identity of one shown notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoticeToken(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    shown: u64,
}

impl NoticeSlot {
    /// Replace the slot contents and return the new notice's token.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> NoticeToken {
        self.shown += 1;
        let token = NoticeToken(self.shown);
        self.current = Some(Notice {
            text: text.into(),
            severity,
            token,
        });
        token
    }

    pub fn success(&mut self, text: impl Into<String>) -> NoticeToken {
        self.show(text, Severity::Success)
    }

    pub fn error(&mut self, text: impl Into<String>) -> NoticeToken {
        self.show(text, Severity::Error)
    }

    /// Explicit close.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timer-driven close: only hides the notice if it is still `token`.
    pub fn dismiss_if(&mut self, token: NoticeToken) -> bool {
        if self.current.as_ref().is_some_and(|n| n.token == token) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
