//! Bottom navigation bar and its unread badge.

use std::fmt;

use crate::models::TabId;

/// Largest count a badge shows before switching to `99+`.
pub const BADGE_MAX: u32 = 99;

/// Unread counter on a tab. Renders nothing for zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreadBadge(pub u32);

impl fmt::Display for UnreadBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => Ok(()),
            n if n > BADGE_MAX => write!(f, "{BADGE_MAX}+"),
            n => write!(f, "{n}"),
        }
    }
}

/// The tab bar, with the active tab in bold and the unread badge on chats.
pub struct TabBar {
    pub active: TabId,
    pub unread: u32,
}

impl fmt::Display for TabBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tab in TabId::ALL {
            if !first {
                write!(f, " | ")?;
            }
            first = false;

            let badge = match tab {
                TabId::Chats if self.unread > 0 => format!(" ({})", UnreadBadge(self.unread)),
                _ => String::new(),
            };
            if tab == self.active {
                write!(f, "**{tab}{badge}**")?;
            } else {
                write!(f, "{tab}{badge}")?;
            }
        }
        writeln!(f)
    }
}
