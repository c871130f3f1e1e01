use crate::catalog::SeedError;
use serde::{Deserialize, Serialize};

const SEED_JSON: &str = include_str!("../data/inbox.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub username: String,
    pub avatar: String,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user: Contact,
    pub last_message: String,
    pub timestamp: String,
    pub unread_count: u32,
    pub is_online: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
    Mention,
}

impl NotificationKind {
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Like => "❤️",
            NotificationKind::Comment => "💬",
            NotificationKind::Follow => "➕",
            NotificationKind::Mention => "@",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub user: Contact,
    pub content: String,
    pub timestamp: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InboxTab {
    #[default]
    Messages,
    Notifications,
    /// Always empty in the mock data.
    Archive,
}

impl InboxTab {
    pub const ALL: [InboxTab; 3] = [InboxTab::Messages, InboxTab::Notifications, InboxTab::Archive];

    pub fn label_key(self) -> &'static str {
        match self {
            InboxTab::Messages => "inbox.tab.messages",
            InboxTab::Notifications => "inbox.tab.activity",
            InboxTab::Archive => "inbox.tab.archive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Inbox {
    pub messages: Vec<Conversation>,
    pub notifications: Vec<Notification>,
}

impl Inbox {
    pub fn seed() -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        SeedError::parse("inbox", json)
    }

    /// Conversations whose username or last message contains `query`,
    /// ignoring case. A blank query keeps everything.
    pub fn filter_messages(&self, query: &str) -> Vec<&Conversation> {
        let needle = query.trim().to_lowercase();
        self.messages
            .iter()
            .filter(|m| {
                needle.is_empty()
                    || m.user.username.to_lowercase().contains(&needle)
                    || m.last_message.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn unread_message_total(&self) -> u32 {
        self.messages.iter().map(|m| m.unread_count).sum()
    }

    pub fn unread_notification_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Inbox {
        Inbox::seed().expect("inbox seed parses")
    }

    #[test]
    fn broken_seed_names_the_inbox_section() {
        let err = Inbox::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("inbox seed is not valid JSON"));
    }

    #[test]
    fn seed_counts() {
        let inbox = inbox();
        assert_eq!(inbox.messages.len(), 4);
        assert_eq!(inbox.notifications.len(), 4);
        assert_eq!(inbox.notifications[3].kind, NotificationKind::Mention);
        assert!(!inbox.notifications[0].user.verified);
    }

    #[test]
    fn unread_totals() {
        let inbox = inbox();
        assert_eq!(inbox.unread_message_total(), 3);
        assert_eq!(inbox.unread_notification_count(), 2);
    }

    #[test]
    fn filter_matches_username_or_message() {
        let inbox = inbox();
        let by_name: Vec<_> = inbox.filter_messages("CHEF").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(by_name, vec!["2"]);

        let by_text: Vec<_> = inbox.filter_messages("effect").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(by_text, vec!["3"]);

        assert_eq!(inbox.filter_messages("  ").len(), 4);
        assert!(inbox.filter_messages("zzz").is_empty());
    }
}
