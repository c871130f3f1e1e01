use feed::engagement::NEW_COMMENT_LABEL;
use feed::navigation::Transition;
use feed::upload::{PreviewSlot, SelectedFile, UploadSubmission, UrlRevoker};
use feed::{
    Catalog, CooldownTicket, FeedConfig, FeedNavigator, NavCommand, NavResponse, UserId, Video,
    VideoId, Viewer,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn armed_ticket(response: &NavResponse) -> Option<CooldownTicket> {
    response.commands.iter().find_map(|c| match c {
        NavCommand::ArmCooldown { ticket, .. } => Some(*ticket),
        _ => None,
    })
}

fn started(len: usize) -> FeedNavigator {
    let mut nav = FeedNavigator::new(len, &FeedConfig::default());
    nav.start();
    nav
}

#[test]
fn wheel_flood_is_debounced_until_cooldown_fires() {
    let mut nav = started(5);
    assert_eq!(nav.current_index(), Some(0));

    let first = nav.wheel(120.0);
    assert_eq!(first.transition, Some(Transition { from: 0, to: 1 }));
    assert!(first.commands.contains(&NavCommand::ScrollTo { index: 1 }));
    assert!(first.commands.contains(&NavCommand::ArmCooldown {
        ticket: armed_ticket(&first).unwrap(),
        after: Duration::from_millis(500),
    }));
    let ticket = armed_ticket(&first).unwrap();

    // 100 ms later, still inside the window.
    let second = nav.wheel(120.0);
    assert_eq!(second.transition, None);
    assert!(second.suppress_default);
    assert_eq!(nav.current_index(), Some(1));

    assert!(nav.cooldown_elapsed(ticket));
    let third = nav.wheel(120.0);
    assert_eq!(third.transition, Some(Transition { from: 1, to: 2 }));
    assert_eq!(nav.current_index(), Some(2));
}

#[test]
fn index_stays_in_bounds_for_any_input_sequence() {
    let mut nav = started(3);
    let inputs = [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0];
    let mut last = nav.current_index().unwrap();
    for delta in inputs {
        let response = nav.wheel(delta);
        if let Some(ticket) = armed_ticket(&response) {
            nav.cooldown_elapsed(ticket);
        }
        let now = nav.current_index().unwrap();
        assert!(now < 3);
        assert!(now.abs_diff(last) <= 1);
        last = now;
    }
    assert_eq!(nav.current_index(), Some(1));
}

#[test]
fn like_is_its_own_inverse() {
    let mut catalog = Catalog::seed().unwrap();
    for video in Catalog::seed().unwrap().videos() {
        catalog.toggle_like(&video.id);
        catalog.toggle_like(&video.id);
        assert_eq!(catalog.video(&video.id).unwrap(), video);
    }
}

#[test]
fn like_from_one_hundred() {
    let mut base = Catalog::seed().unwrap().videos()[0].clone();
    base.likes = 100;
    base.is_liked = false;
    let mut catalog = Catalog::from_parts(vec![base], Default::default()).unwrap();
    let id = VideoId::new("1");

    catalog.toggle_like(&id);
    let v = catalog.video(&id).unwrap();
    assert_eq!((v.likes, v.is_liked), (101, true));

    catalog.toggle_like(&id);
    let v = catalog.video(&id).unwrap();
    assert_eq!((v.likes, v.is_liked), (100, false));
}

#[derive(Clone, Default)]
struct Revoked(Rc<RefCell<Vec<String>>>);

impl UrlRevoker for Revoked {
    fn revoke(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

#[test]
fn publish_from_the_middle_resets_to_the_new_video() {
    let mut catalog = Catalog::seed().unwrap();
    let mut nav = started(catalog.len());
    nav.key(feed::NavKey::ArrowDown);
    nav.key(feed::NavKey::ArrowDown);
    assert_eq!(nav.current_index(), Some(2));

    let revoked = Revoked::default();
    let mut preview = PreviewSlot::new(revoked.clone());
    preview.replace("blob:clip".to_string());

    let file = SelectedFile {
        name: "clip.mp4".into(),
        mime_type: "video/mp4".into(),
        size_bytes: 1024,
    };
    let submission = UploadSubmission::prepare(Some(&file), "my first reel #fyp", "").unwrap();
    let id = catalog.next_video_id();
    let src = preview.commit().unwrap();
    let video: Video = submission.into_video(id.clone(), src, &Viewer::current());

    assert!(catalog.publish(video));
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.videos()[0].id, id);

    let response = nav.reset(catalog.len());
    assert_eq!(nav.current_index(), Some(0));
    assert_eq!(nav.len(), 6);
    assert!(response.commands.contains(&NavCommand::ScrollTo { index: 0 }));

    drop(preview);
    assert!(revoked.0.borrow().is_empty());
}

#[test]
fn blank_comment_changes_nothing() {
    let mut catalog = Catalog::seed().unwrap();
    let id = VideoId::new("2");
    let before = catalog.clone();
    assert!(catalog.add_comment(Some(&id), "   ", &Viewer::current()).is_none());
    assert_eq!(catalog, before);

    catalog.add_comment(Some(&id), "yum", &Viewer::current()).unwrap();
    assert_eq!(catalog.comments_for(&id)[0].timestamp, NEW_COMMENT_LABEL);
}

#[test]
fn follow_covers_every_video_by_the_author() {
    let mut catalog = Catalog::seed().unwrap();
    let mut second = catalog.video(&VideoId::new("4")).unwrap().clone();
    second.id = VideoId::new("4-b");
    catalog.publish(second);

    let author = UserId::new("4");
    assert_eq!(catalog.toggle_follow(&author), Some(true));
    let flags: Vec<bool> = catalog.videos_by(&author).map(|v| v.is_following).collect();
    assert_eq!(flags, vec![true, true]);
}
