use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(VideoId);
string_id!(UserId);
string_id!(CommentId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub src: String,
    pub user: Author,
    pub description: String,
    pub music: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub is_liked: bool,
    pub is_following: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub username: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user: CommentAuthor,
    pub text: String,
    pub timestamp: String,
}

/// The person using the app. Authors every comment and upload made locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
}

impl Viewer {
    pub fn current() -> Self {
        Self {
            id: UserId::new("current_user"),
            username: "you".to_string(),
            avatar: "👤".to_string(),
        }
    }

    pub fn as_author(&self) -> Author {
        Author {
            id: self.id.clone(),
            username: self.username.clone(),
            avatar: self.avatar.clone(),
            verified: false,
        }
    }

    pub fn as_comment_author(&self) -> CommentAuthor {
        CommentAuthor {
            username: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::current()
    }
}
