use dioxus::prelude::*;
use tracing::warn;

const LANG_STORAGE_KEY: &str = "reels_lang";

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Fr,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_ascii_lowercase();
        match lower.split(['-', '_']).next() {
            Some("en") => Some(Lang::En),
            Some("fr") => Some(Lang::Fr),
            _ => None,
        }
    }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::En);
    use_context_provider(|| lang);

    // Best-effort: saved choice first, then the browser language.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"try {{
  const saved = localStorage.getItem("{LANG_STORAGE_KEY}");
  if (saved) return saved;
}} catch (e) {{}}
try {{ return navigator.language || "en"; }} catch (e) {{}}
return "en";"#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    warn!("i18n.use_lang: missing I18nProvider context, using local Lang::En signal");
    use_signal(|| Lang::En)
}

pub fn set_lang(mut lang_signal: Signal<Lang>, lang: Lang) {
    lang_signal.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"try {{ localStorage.setItem("{LANG_STORAGE_KEY}", "{}"); }} catch (e) {{}} return "";"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to English, then to the key.
pub fn t(lang: Lang, key: &str) -> String {
    let text = match (lang, key) {
        (_, "app.name") => "Reels",

        // Bottom navigation
        (Lang::En, "nav.home") => "Home",
        (Lang::Fr, "nav.home") => "Accueil",
        (Lang::En, "nav.discover") => "Discover",
        (Lang::Fr, "nav.discover") => "Découvrir",
        (Lang::En, "nav.create") => "Create",
        (Lang::Fr, "nav.create") => "Créer",
        (Lang::En, "nav.inbox") => "Inbox",
        (Lang::Fr, "nav.inbox") => "Messages",
        (Lang::En, "nav.profile") => "Profile",
        (Lang::Fr, "nav.profile") => "Profil",
        (Lang::En, "lang.label") => "Language",
        (Lang::Fr, "lang.label") => "Langue",

        // Feed and reels
        (Lang::En, "feed.empty") => "No videos yet. Tap + to post the first one.",
        (Lang::Fr, "feed.empty") => "Aucune vidéo. Touchez + pour publier la première.",
        (Lang::En, "reel.follow") => "Follow",
        (Lang::Fr, "reel.follow") => "Suivre",
        (Lang::En, "reel.following") => "Following",
        (Lang::Fr, "reel.following") => "Abonné",

        // Comments
        (Lang::En, "comments.title") => "Comments",
        (Lang::Fr, "comments.title") => "Commentaires",
        (Lang::En, "comments.none") => "No comments yet. Be the first!",
        (Lang::Fr, "comments.none") => "Aucun commentaire. Soyez le premier !",
        (Lang::En, "comments.placeholder") => "Add a comment...",
        (Lang::Fr, "comments.placeholder") => "Ajouter un commentaire…",
        (Lang::En, "comments.post") => "Post",
        (Lang::Fr, "comments.post") => "Publier",

        // Upload
        (Lang::En, "upload.title") => "Upload video",
        (Lang::Fr, "upload.title") => "Publier une vidéo",
        (Lang::En, "upload.pick") => "Select a video to upload",
        (Lang::Fr, "upload.pick") => "Choisissez une vidéo à publier",
        (Lang::En, "upload.limits") => "MP4, WebM or MOV, up to 50MB",
        (Lang::Fr, "upload.limits") => "MP4, WebM ou MOV, 50 Mo maximum",
        (Lang::En, "upload.description") => "Description",
        (Lang::Fr, "upload.description") => "Description",
        (Lang::En, "upload.description_ph") => "Describe your video... #hashtags @mentions",
        (Lang::Fr, "upload.description_ph") => "Décrivez votre vidéo… #hashtags @mentions",
        (Lang::En, "upload.music") => "Music",
        (Lang::Fr, "upload.music") => "Musique",
        (Lang::En, "upload.music_ph") => "Original Sound",
        (Lang::Fr, "upload.music_ph") => "Son original",
        (Lang::En, "upload.post") => "Post",
        (Lang::Fr, "upload.post") => "Publier",
        (Lang::En, "upload.posting") => "Uploading...",
        (Lang::Fr, "upload.posting") => "Envoi…",
        (Lang::En, "upload.success") => "Video uploaded successfully!",
        (Lang::Fr, "upload.success") => "Vidéo publiée !",
        (Lang::En, "upload.failed") => "Upload failed. Please try again.",
        (Lang::Fr, "upload.failed") => "Échec de l'envoi. Réessayez.",

        // Discover
        (Lang::En, "discover.tab.trending") => "Trending",
        (Lang::Fr, "discover.tab.trending") => "Tendances",
        (Lang::En, "discover.tab.hashtags") => "Tags",
        (Lang::Fr, "discover.tab.hashtags") => "Tags",
        (Lang::En, "discover.tab.sounds") => "Sounds",
        (Lang::Fr, "discover.tab.sounds") => "Sons",
        (Lang::En, "discover.tab.creators") => "Creators",
        (Lang::Fr, "discover.tab.creators") => "Créateurs",
        (Lang::En, "discover.challenges") => "Trending Challenges",
        (Lang::Fr, "discover.challenges") => "Défis du moment",
        (Lang::En, "discover.participants") => "participants",
        (Lang::Fr, "discover.participants") => "participants",
        (Lang::En, "discover.difficulty.easy") => "Easy",
        (Lang::Fr, "discover.difficulty.easy") => "Facile",
        (Lang::En, "discover.difficulty.medium") => "Medium",
        (Lang::Fr, "discover.difficulty.medium") => "Moyen",
        (Lang::En, "discover.difficulty.hard") => "Hard",
        (Lang::Fr, "discover.difficulty.hard") => "Difficile",
        (Lang::En, "discover.videos_today") => "Videos Today",
        (Lang::Fr, "discover.videos_today") => "Vidéos aujourd'hui",
        (Lang::En, "discover.new_creators") => "New Creators",
        (Lang::Fr, "discover.new_creators") => "Nouveaux créateurs",
        (Lang::En, "discover.videos") => "videos",
        (Lang::Fr, "discover.videos") => "vidéos",
        (Lang::En, "discover.trending") => "Trending",
        (Lang::Fr, "discover.trending") => "Tendance",
        (Lang::En, "discover.by") => "by",
        (Lang::Fr, "discover.by") => "par",
        (Lang::En, "discover.uses") => "uses",
        (Lang::Fr, "discover.uses") => "utilisations",
        (Lang::En, "discover.followers") => "followers",
        (Lang::Fr, "discover.followers") => "abonnés",

        // Search
        (Lang::En, "search.placeholder") => "Search videos, users, sounds...",
        (Lang::Fr, "search.placeholder") => "Rechercher vidéos, comptes, sons…",
        (Lang::En, "search.button") => "Search",
        (Lang::Fr, "search.button") => "Rechercher",
        (Lang::En, "search.recent") => "Recent searches",
        (Lang::Fr, "search.recent") => "Recherches récentes",
        (Lang::En, "search.trending") => "Trending now",
        (Lang::Fr, "search.trending") => "Tendances",
        (Lang::En, "search.no_results") => "No results for",
        (Lang::Fr, "search.no_results") => "Aucun résultat pour",
        (Lang::En, "search.tab.all") => "All",
        (Lang::Fr, "search.tab.all") => "Tout",
        (Lang::En, "search.tab.videos") => "Videos",
        (Lang::Fr, "search.tab.videos") => "Vidéos",
        (Lang::En, "search.tab.users") => "Users",
        (Lang::Fr, "search.tab.users") => "Comptes",
        (Lang::En, "search.tab.hashtags") => "Hashtags",
        (Lang::Fr, "search.tab.hashtags") => "Hashtags",
        (Lang::En, "search.tab.sounds") => "Sounds",
        (Lang::Fr, "search.tab.sounds") => "Sons",

        // Inbox
        (Lang::En, "inbox.title") => "Inbox",
        (Lang::Fr, "inbox.title") => "Messages",
        (Lang::En, "inbox.search_ph") => "Search messages...",
        (Lang::Fr, "inbox.search_ph") => "Rechercher dans les messages…",
        (Lang::En, "inbox.tab.messages") => "Messages",
        (Lang::Fr, "inbox.tab.messages") => "Messages",
        (Lang::En, "inbox.tab.activity") => "Activity",
        (Lang::Fr, "inbox.tab.activity") => "Activité",
        (Lang::En, "inbox.tab.archive") => "Archive",
        (Lang::Fr, "inbox.tab.archive") => "Archives",
        (Lang::En, "inbox.no_messages") => "No messages found",
        (Lang::Fr, "inbox.no_messages") => "Aucun message trouvé",
        (Lang::En, "inbox.no_archive") => "No archived messages",
        (Lang::Fr, "inbox.no_archive") => "Aucun message archivé",

        // Profile
        (Lang::En, "profile.edit") => "Edit profile",
        (Lang::Fr, "profile.edit") => "Modifier le profil",
        (Lang::En, "profile.display_name") => "Display name",
        (Lang::Fr, "profile.display_name") => "Nom d'affichage",
        (Lang::En, "profile.bio") => "Bio",
        (Lang::Fr, "profile.bio") => "Bio",
        (Lang::En, "profile.website") => "Website",
        (Lang::Fr, "profile.website") => "Site web",
        (Lang::En, "profile.location") => "Location",
        (Lang::Fr, "profile.location") => "Localisation",
        (Lang::En, "profile.following") => "Following",
        (Lang::Fr, "profile.following") => "Abonnements",
        (Lang::En, "profile.followers") => "Followers",
        (Lang::Fr, "profile.followers") => "Abonnés",
        (Lang::En, "profile.likes") => "Likes",
        (Lang::Fr, "profile.likes") => "J'aime",
        (Lang::En, "profile.joined") => "Joined",
        (Lang::Fr, "profile.joined") => "Inscrit en",
        (Lang::En, "profile.tab.videos") => "Videos",
        (Lang::Fr, "profile.tab.videos") => "Vidéos",
        (Lang::En, "profile.tab.liked") => "Liked",
        (Lang::Fr, "profile.tab.liked") => "J'aime",
        (Lang::En, "profile.tab.private") => "Private",
        (Lang::Fr, "profile.tab.private") => "Privé",

        // Common
        (Lang::En, "common.cancel") => "Cancel",
        (Lang::Fr, "common.cancel") => "Annuler",
        (Lang::En, "common.save") => "Save",
        (Lang::Fr, "common.save") => "Enregistrer",
        (Lang::En, "common.no_videos_yet") => "No videos yet.",
        (Lang::Fr, "common.no_videos_yet") => "Aucune vidéo pour le moment.",

        // Toasts
        (Lang::En, "toast.dismiss") => "Dismiss",
        (Lang::Fr, "toast.dismiss") => "Fermer",
        (Lang::En, "toast.liked") => "Liked! ❤️",
        (Lang::Fr, "toast.liked") => "Aimé ! ❤️",
        (Lang::En, "toast.link_copied") => "Link copied to clipboard!",
        (Lang::Fr, "toast.link_copied") => "Lien copié !",
        (Lang::En, "toast.now_following") => "Now following",
        (Lang::Fr, "toast.now_following") => "Vous suivez",
        (Lang::En, "toast.playing_by") => "Playing video by",
        (Lang::Fr, "toast.playing_by") => "Lecture d'une vidéo de",
        (Lang::En, "toast.viewing_profile") => "Viewing profile of",
        (Lang::Fr, "toast.viewing_profile") => "Profil de",
        (Lang::En, "toast.sound_soon") => "Sound details coming soon!",
        (Lang::Fr, "toast.sound_soon") => "Détails du son bientôt disponibles !",
        (Lang::En, "toast.opening_conversation") => "Opening conversation...",
        (Lang::Fr, "toast.opening_conversation") => "Ouverture de la conversation…",
        (Lang::En, "toast.profile_saved") => "Profile updated successfully!",
        (Lang::Fr, "toast.profile_saved") => "Profil mis à jour !",

        // Fallback: English string if present, else the key itself.
        (Lang::Fr, k) => return t(Lang::En, k),
        (Lang::En, _) => return key.to_string(),
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_languages() {
        assert_eq!(t(Lang::En, "nav.discover"), "Discover");
        assert_eq!(t(Lang::Fr, "nav.discover"), "Découvrir");
        assert_eq!(t(Lang::Fr, "app.name"), "Reels");
    }

    #[test]
    fn fallback_to_english_then_key() {
        assert_eq!(t(Lang::Fr, "missing.key"), "missing.key");
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    #[test]
    fn lang_codes_accept_regions() {
        assert_eq!(Lang::from_code("fr-FR"), Some(Lang::Fr));
        assert_eq!(Lang::from_code("en_GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
    }

    #[test]
    fn every_shell_tab_has_a_label() {
        for tab in feed::Tab::ALL {
            assert_ne!(t(Lang::En, tab.label_key()), tab.label_key());
            assert_ne!(t(Lang::Fr, tab.label_key()), tab.label_key());
        }
        for tab in feed::discover::SearchTab::ALL {
            assert_ne!(t(Lang::En, tab.label_key()), tab.label_key());
        }
        for tab in feed::discover::DiscoverTab::ALL {
            assert_ne!(t(Lang::En, tab.label_key()), tab.label_key());
        }
        for tab in feed::inbox::InboxTab::ALL {
            assert_ne!(t(Lang::En, tab.label_key()), tab.label_key());
        }
    }
}
