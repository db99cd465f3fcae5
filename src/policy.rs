//! Access-policy rules lifted out of the request middleware. Token and
//! session handling stay in the web layer; these functions only answer the
//! domain question and leave any state change to the caller.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::model::StudentProfile;

/// Students may send one message to the admins per 24 hours.
pub const MESSAGE_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum BanVerdict {
    /// Not banned.
    Clear,
    /// A temporary ban whose expiry has passed. The caller is expected to
    /// persist the un-ban.
    Expired,
    /// Still banned; `expires` is `None` for a permanent ban.
    Banned {
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expires: Option<DateTime<Utc>>,
    },
}

pub fn ban_verdict(profile: &StudentProfile, now: DateTime<Utc>) -> BanVerdict {
    if !profile.banned {
        return BanVerdict::Clear;
    }
    match profile.ban_expires {
        Some(expires) if now > expires => BanVerdict::Expired,
        expires => BanVerdict::Banned {
            reason: profile.ban_reason.clone(),
            expires,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageWindow {
    pub allowed: bool,
    /// Hours until the next message is allowed, rounded up. Zero when
    /// sending is allowed; feeds the "try again in N hours" message.
    pub hours_remaining: i64,
}

pub fn message_window(last_message_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> MessageWindow {
    let Some(last) = last_message_at else {
        return MessageWindow {
            allowed: true,
            hours_remaining: 0,
        };
    };
    let elapsed = now - last;
    if elapsed >= Duration::hours(MESSAGE_WINDOW_HOURS) {
        return MessageWindow {
            allowed: true,
            hours_remaining: 0,
        };
    }
    let remaining = Duration::hours(MESSAGE_WINDOW_HOURS) - elapsed;
    let hours = (remaining.num_seconds() + 3599) / 3600;
    MessageWindow {
        allowed: false,
        hours_remaining: hours,
    }
}
