use crate::types::{UserId, Viewer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub bio: String,
    pub website: String,
    pub location: String,
    pub join_date: String,
    pub verified: bool,
}

impl Profile {
    /// The viewer's own profile as shipped with the mock data.
    pub fn for_viewer(viewer: &Viewer) -> Self {
        Self {
            id: viewer.id.clone(),
            username: viewer.username.clone(),
            display_name: "Your Name".to_string(),
            avatar: viewer.avatar.clone(),
            bio: "Living my best life 🌟 Creating content daily!".to_string(),
            website: "https://example.com".to_string(),
            location: "New York, NY".to_string(),
            join_date: "January 2023".to_string(),
            verified: false,
        }
    }

    pub fn form(&self) -> ProfileForm {
        ProfileForm {
            display_name: self.display_name.clone(),
            bio: self.bio.clone(),
            website: self.website.clone(),
            location: self.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub followers: u64,
    pub following: u64,
    pub total_likes: u64,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            followers: 1245,
            following: 892,
            total_likes: 15678,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Videos,
    Liked,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileRejection {
    #[error("Display name cannot be empty")]
    EmptyDisplayName,
}

/// Editable subset of [`Profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub display_name: String,
    pub bio: String,
    pub website: String,
    pub location: String,
}

impl ProfileForm {
    /// Write the trimmed fields into `profile`. Nothing is written on error.
    pub fn apply(&self, profile: &mut Profile) -> Result<(), ProfileRejection> {
        let display_name = self.display_name.trim();
        if display_name.is_empty() {
            return Err(ProfileRejection::EmptyDisplayName);
        }
        profile.display_name = display_name.to_string();
        profile.bio = self.bio.trim().to_string();
        profile.website = self.website.trim().to_string();
        profile.location = self.location.trim().to_string();
        info!("profile.apply: user_id={}", profile.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_trims_every_field() {
        let mut profile = Profile::for_viewer(&Viewer::current());
        let form = ProfileForm {
            display_name: "  Sam  ".into(),
            bio: " hi ".into(),
            website: "".into(),
            location: "\tParis ".into(),
        };
        form.apply(&mut profile).unwrap();
        assert_eq!(profile.display_name, "Sam");
        assert_eq!(profile.bio, "hi");
        assert_eq!(profile.website, "");
        assert_eq!(profile.location, "Paris");
        assert_eq!(profile.username, "you");
    }

    #[test]
    fn empty_display_name_is_rejected_without_changes() {
        let mut profile = Profile::for_viewer(&Viewer::current());
        let before = profile.clone();
        let mut form = profile.form();
        form.display_name = "   ".into();
        form.bio = "changed".into();
        assert_eq!(form.apply(&mut profile), Err(ProfileRejection::EmptyDisplayName));
        assert_eq!(profile, before);
    }

    #[test]
    fn form_round_trips_current_values() {
        let profile = Profile::for_viewer(&Viewer::current());
        let mut copy = profile.clone();
        profile.form().apply(&mut copy).unwrap();
        assert_eq!(copy, profile);
    }

    #[test]
    fn stats_defaults() {
        let s = ProfileStats::default();
        assert_eq!((s.followers, s.following, s.total_likes), (1245, 892, 15678));
    }
}
