//! Discover page catalogs and the search over them.

use crate::catalog::{Catalog, SeedError};
use crate::format::hashtags;
use crate::types::Video;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SEED_JSON: &str = include_str!("../data/discover.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingHashtag {
    pub tag: String,
    /// Pre-formatted video count, e.g. `12.5M`.
    pub count: String,
    pub trending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sound {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub uses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub username: String,
    pub followers: String,
    pub avatar: String,
    pub verified: bool,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    pub participants: String,
    pub hashtag: String,
    pub description: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoverTab {
    #[default]
    Trending,
    Hashtags,
    Sounds,
    Creators,
}

impl DiscoverTab {
    pub const ALL: [DiscoverTab; 4] = [
        DiscoverTab::Trending,
        DiscoverTab::Hashtags,
        DiscoverTab::Sounds,
        DiscoverTab::Creators,
    ];

    /// i18n key of the tab label.
    pub fn label_key(self) -> &'static str {
        match self {
            DiscoverTab::Trending => "discover.tab.trending",
            DiscoverTab::Hashtags => "discover.tab.hashtags",
            DiscoverTab::Sounds => "discover.tab.sounds",
            DiscoverTab::Creators => "discover.tab.creators",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTab {
    #[default]
    All,
    Videos,
    Users,
    Hashtags,
    Sounds,
}

impl SearchTab {
    pub const ALL: [SearchTab; 5] = [
        SearchTab::All,
        SearchTab::Videos,
        SearchTab::Users,
        SearchTab::Hashtags,
        SearchTab::Sounds,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            SearchTab::All => "search.tab.all",
            SearchTab::Videos => "search.tab.videos",
            SearchTab::Users => "search.tab.users",
            SearchTab::Hashtags => "search.tab.hashtags",
            SearchTab::Sounds => "search.tab.sounds",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub videos: Vec<Video>,
    pub users: Vec<Creator>,
    pub hashtags: Vec<TrendingHashtag>,
    pub sounds: Vec<Sound>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
            && self.users.is_empty()
            && self.hashtags.is_empty()
            && self.sounds.is_empty()
    }

    pub fn total(&self) -> usize {
        self.videos.len() + self.users.len() + self.hashtags.len() + self.sounds.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Everything,
    Hashtags,
    Users,
}

/// Mock discovery data: trending tags, sounds, creators, challenges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Discover {
    pub hashtags: Vec<TrendingHashtag>,
    pub sounds: Vec<Sound>,
    pub creators: Vec<Creator>,
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub recent_searches: Vec<String>,
}

impl Discover {
    pub fn seed() -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        SeedError::parse("discover", json)
    }

    pub fn trending_hashtags(&self) -> impl Iterator<Item = &TrendingHashtag> + '_ {
        self.hashtags.iter().filter(|h| h.trending)
    }

    /// Case-insensitive substring search.
    ///
    /// `#tag` only matches hashtags (and videos carrying a matching tag),
    /// `@name` only matches usernames. A blank query, or a bare sigil, finds
    /// nothing.
    pub fn search(&self, query: &str, catalog: &Catalog) -> SearchResults {
        let trimmed = query.trim();
        let (scope, term) = if let Some(rest) = trimmed.strip_prefix('#') {
            (Scope::Hashtags, rest)
        } else if let Some(rest) = trimmed.strip_prefix('@') {
            (Scope::Users, rest)
        } else {
            (Scope::Everything, trimmed)
        };
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return SearchResults::default();
        }
        let hit = |text: &str| text.to_lowercase().contains(&term);

        let videos = catalog
            .videos()
            .iter()
            .filter(|v| match scope {
                Scope::Hashtags => hashtags(&v.description).iter().any(|t| t.contains(&term)),
                Scope::Users => hit(&v.user.username),
                Scope::Everything => {
                    hit(&v.description) || hit(&v.user.username) || hit(&v.music)
                }
            })
            .cloned()
            .collect();

        let users = match scope {
            Scope::Hashtags => Vec::new(),
            Scope::Users => self
                .creators
                .iter()
                .filter(|c| hit(&c.username))
                .cloned()
                .collect(),
            Scope::Everything => self
                .creators
                .iter()
                .filter(|c| hit(&c.username) || hit(&c.bio))
                .cloned()
                .collect(),
        };

        let tags = match scope {
            Scope::Users => Vec::new(),
            _ => self.hashtags.iter().filter(|h| hit(&h.tag)).cloned().collect(),
        };

        let sounds = match scope {
            Scope::Everything => self
                .sounds
                .iter()
                .filter(|s| hit(&s.title) || hit(&s.artist))
                .cloned()
                .collect(),
            _ => Vec::new(),
        };

        let results = SearchResults {
            videos,
            users,
            hashtags: tags,
            sounds,
        };
        debug!(
            "discover.search: query={:?} scope={:?} hits={}",
            trimmed,
            scope,
            results.total()
        );
        results
    }
}

/// Search query for a hashtag click.
pub fn hashtag_query(tag: &str) -> String {
    format!("#{}", tag.trim_start_matches('#'))
}
