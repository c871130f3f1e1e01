//! Vertical paging for the reel feed.
//!
//! `FeedNavigator` owns the active index and turns raw input (touch drags,
//! wheel deltas, arrow keys) into at most one-step transitions. It never talks
//! to the platform directly: every side effect is returned as a
//! [`NavCommand`] for the shell to execute (scrolling the viewport, arming or
//! cancelling the wheel cool-down timer).

use crate::config::FeedConfig;
use std::time::Duration;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Keys the feed reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(NavKey::ArrowUp),
            "ArrowDown" => Some(NavKey::ArrowDown),
            _ => None,
        }
    }

    fn direction(self) -> Direction {
        match self {
            NavKey::ArrowUp => Direction::Previous,
            NavKey::ArrowDown => Direction::Next,
        }
    }
}

/// Identifies one armed cool-down. Only the latest ticket can release the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CooldownTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Align the viewport to `index × viewport height`, smoothly.
    ScrollTo { index: usize },
    /// Start a timer; call [`FeedNavigator::cooldown_elapsed`] when it fires.
    ArmCooldown {
        ticket: CooldownTicket,
        after: Duration,
    },
    /// Drop the timer for `ticket` without firing it.
    CancelCooldown { ticket: CooldownTicket },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavResponse {
    pub transition: Option<Transition>,
    pub commands: Vec<NavCommand>,
    /// The platform's default handling (page scroll) must be prevented.
    pub suppress_default: bool,
}

impl NavResponse {
    fn suppressed() -> Self {
        Self {
            suppress_default: true,
            ..Self::default()
        }
    }

    fn merge(mut self, other: NavResponse) -> Self {
        self.transition = other.transition.or(self.transition);
        self.commands.extend(other.commands);
        self.suppress_default |= other.suppress_default;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchTrack {
    start_y: f64,
    last_y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedNavigator {
    len: usize,
    current: Option<usize>,
    transitioning: bool,
    pending: Option<CooldownTicket>,
    issued: u64,
    touch: Option<TouchTrack>,
    started: bool,
    swipe_threshold: f64,
    wheel_cooldown: Duration,
}

impl FeedNavigator {
    pub fn new(len: usize, config: &FeedConfig) -> Self {
        Self {
            len,
            current: if len == 0 { None } else { Some(0) },
            transitioning: false,
            pending: None,
            issued: 0,
            touch: None,
            started: false,
            swipe_threshold: config.swipe_threshold,
            wheel_cooldown: config.wheel_cooldown,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The activation flag handed to the reel at `position`.
    pub fn is_active(&self, position: usize) -> bool {
        self.current == Some(position)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Begin accepting input.
    pub fn start(&mut self) {
        if !self.started {
            debug!("navigation.start: len={} index={:?}", self.len, self.current);
        }
        self.started = true;
    }

    /// Stop accepting input and drop every transient lock.
    pub fn stop(&mut self) -> NavResponse {
        debug!("navigation.stop: index={:?}", self.current);
        self.started = false;
        self.touch = None;
        self.release_cooldown()
    }

    pub fn touch_start(&mut self, y: f64) -> NavResponse {
        if !self.started {
            return NavResponse::default();
        }
        self.touch = Some(TouchTrack {
            start_y: y,
            last_y: None,
        });
        NavResponse::default()
    }

    /// Drag moves never scroll the surface underneath the feed.
    pub fn touch_move(&mut self, y: f64) -> NavResponse {
        if !self.started {
            return NavResponse::default();
        }
        if let Some(track) = self.touch.as_mut() {
            track.last_y = Some(y);
        }
        NavResponse::suppressed()
    }

    /// Finish a drag. `end_y` falls back to the last move, then to the start.
    pub fn touch_end(&mut self, end_y: Option<f64>) -> NavResponse {
        if !self.started {
            return NavResponse::default();
        }
        let Some(track) = self.touch.take() else {
            return NavResponse::default();
        };

        let end = end_y.or(track.last_y).unwrap_or(track.start_y);
        let delta = track.start_y - end;
        trace!("navigation.touch_end: delta={}", delta);
        if delta.abs() <= self.swipe_threshold {
            return NavResponse::default();
        }

        let direction = if delta > 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        };
        self.step(direction)
    }

    /// Wheel input, debounced by the cool-down window.
    pub fn wheel(&mut self, delta_y: f64) -> NavResponse {
        if !self.started {
            return NavResponse::default();
        }
        if self.transitioning {
            trace!("navigation.wheel: dropped during cool-down delta_y={}", delta_y);
            return NavResponse::suppressed();
        }

        self.transitioning = true;
        self.issued += 1;
        let ticket = CooldownTicket(self.issued);
        self.pending = Some(ticket);

        let mut response = NavResponse {
            transition: None,
            commands: vec![NavCommand::ArmCooldown {
                ticket,
                after: self.wheel_cooldown,
            }],
            suppress_default: true,
        };

        if delta_y > 0.0 {
            response = response.merge(self.step(Direction::Next));
        } else if delta_y < 0.0 {
            response = response.merge(self.step(Direction::Previous));
        }
        response
    }

    pub fn key(&mut self, key: NavKey) -> NavResponse {
        if !self.started {
            return NavResponse::default();
        }
        let response = self.step(key.direction());
        NavResponse {
            suppress_default: true,
            ..response
        }
    }

    /// The timer for `ticket` fired. Returns whether the lock was released.
    pub fn cooldown_elapsed(&mut self, ticket: CooldownTicket) -> bool {
        if self.pending != Some(ticket) {
            trace!("navigation.cooldown_elapsed: stale ticket {:?}", ticket);
            return false;
        }
        self.pending = None;
        self.transitioning = false;
        true
    }

    /// Point at a sequence of `len` items and go back to the first one.
    pub fn reset(&mut self, len: usize) -> NavResponse {
        debug!("navigation.reset: len={} previous_index={:?}", len, self.current);
        let mut response = self.release_cooldown();
        let previous = self.current;
        self.len = len;
        self.touch = None;
        self.current = if len == 0 { None } else { Some(0) };

        if let Some(to) = self.current {
            response.commands.push(NavCommand::ScrollTo { index: to });
            if let Some(from) = previous.filter(|&from| from != to) {
                response.transition = Some(Transition { from, to });
            }
        }
        response
    }

    /// Follow a length change without moving unless the index fell off the end.
    pub fn resize(&mut self, len: usize) -> NavResponse {
        self.len = len;
        let previous = self.current;
        self.current = match (len, previous) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some(i.min(len - 1)),
        };

        let mut response = NavResponse::default();
        if let (Some(from), Some(to)) = (previous, self.current) {
            if from != to {
                response.transition = Some(Transition { from, to });
                response.commands.push(NavCommand::ScrollTo { index: to });
            }
        } else if let Some(to) = self.current {
            response.commands.push(NavCommand::ScrollTo { index: to });
        }
        response
    }

    /// Move straight to `index`, e.g. a video picked from a grid or a share
    /// link. Out-of-range targets are ignored.
    pub fn jump_to(&mut self, index: usize) -> NavResponse {
        if index >= self.len {
            return NavResponse::default();
        }
        let previous = self.current;
        self.current = Some(index);
        debug!("navigation.jump_to: {:?} -> {}", previous, index);
        NavResponse {
            transition: previous
                .filter(|&from| from != index)
                .map(|from| Transition { from, to: index }),
            commands: vec![NavCommand::ScrollTo { index }],
            suppress_default: false,
        }
    }

    fn step(&mut self, direction: Direction) -> NavResponse {
        let Some(from) = self.current else {
            return NavResponse::default();
        };
        let to = match direction {
            Direction::Next if from + 1 < self.len => from + 1,
            Direction::Previous if from > 0 => from - 1,
            _ => return NavResponse::default(),
        };

        self.current = Some(to);
        debug!("navigation.step: {:?} {} -> {}", direction, from, to);
        NavResponse {
            transition: Some(Transition { from, to }),
            commands: vec![NavCommand::ScrollTo { index: to }],
            suppress_default: false,
        }
    }

    fn release_cooldown(&mut self) -> NavResponse {
        self.transitioning = false;
        let mut response = NavResponse::default();
        if let Some(ticket) = self.pending.take() {
            response.commands.push(NavCommand::CancelCooldown { ticket });
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(len: usize) -> FeedNavigator {
        let mut nav = FeedNavigator::new(len, &FeedConfig::default());
        nav.start();
        nav
    }

    fn armed_ticket(response: &NavResponse) -> CooldownTicket {
        response
            .commands
            .iter()
            .find_map(|c| match c {
                NavCommand::ArmCooldown { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .expect("wheel arms a cool-down")
    }

    #[test]
    fn jump_to_moves_in_range_only() {
        let mut nav = started(5);
        let response = nav.jump_to(3);
        assert_eq!(response.transition, Some(Transition { from: 0, to: 3 }));
        assert_eq!(response.commands, vec![NavCommand::ScrollTo { index: 3 }]);
        assert_eq!(nav.jump_to(5), NavResponse::default());
        assert_eq!(nav.current_index(), Some(3));
    }

    #[test]
    fn empty_feed_has_no_active_reel() {
        let mut nav = started(0);
        assert_eq!(nav.current_index(), None);
        assert!(!nav.is_active(0));
        assert_eq!(nav.key(NavKey::ArrowDown).transition, None);
    }

    #[test]
    fn exactly_one_reel_is_active() {
        let mut nav = started(4);
        nav.key(NavKey::ArrowDown);
        let active: Vec<usize> = (0..4).filter(|&i| nav.is_active(i)).collect();
        assert_eq!(active, vec![1]);
    }

    #[test]
    fn input_before_start_is_ignored() {
        let mut nav = FeedNavigator::new(3, &FeedConfig::default());
        assert_eq!(nav.key(NavKey::ArrowDown), NavResponse::default());
        assert_eq!(nav.wheel(120.0), NavResponse::default());
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn swipe_up_past_threshold_advances() {
        let mut nav = started(3);
        nav.touch_start(400.0);
        assert!(nav.touch_move(300.0).suppress_default);
        let response = nav.touch_end(Some(320.0));
        assert_eq!(response.transition, Some(Transition { from: 0, to: 1 }));
        assert_eq!(response.commands, vec![NavCommand::ScrollTo { index: 1 }]);
    }

    #[test]
    fn swipe_down_retreats() {
        let mut nav = started(3);
        nav.key(NavKey::ArrowDown);
        nav.touch_start(100.0);
        nav.touch_move(200.0);
        assert_eq!(nav.touch_end(None).transition, Some(Transition { from: 1, to: 0 }));
    }

    #[test]
    fn short_drag_is_a_no_op() {
        let mut nav = started(3);
        nav.touch_start(400.0);
        nav.touch_move(350.0);
        assert_eq!(nav.touch_end(None), NavResponse::default());
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn tap_without_movement_does_not_page() {
        let mut nav = started(3);
        nav.touch_start(400.0);
        assert_eq!(nav.touch_end(None).transition, None);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut nav = started(3);
        assert_eq!(nav.touch_end(Some(0.0)), NavResponse::default());
    }

    #[test]
    fn keys_clamp_at_both_ends() {
        let mut nav = started(2);
        assert_eq!(nav.key(NavKey::ArrowUp).transition, None);
        assert_eq!(nav.current_index(), Some(0));
        nav.key(NavKey::ArrowDown);
        let response = nav.key(NavKey::ArrowDown);
        assert_eq!(response.transition, None);
        assert!(response.suppress_default);
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn key_names_map_to_arrow_keys_only() {
        assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::ArrowDown));
        assert_eq!(NavKey::from_key_name("ArrowUp"), Some(NavKey::ArrowUp));
        assert_eq!(NavKey::from_key_name("PageDown"), None);
    }

    #[test]
    fn wheel_flood_moves_one_step_per_window() {
        let mut nav = started(5);
        let first = nav.wheel(120.0);
        assert_eq!(first.transition, Some(Transition { from: 0, to: 1 }));
        let ticket = armed_ticket(&first);

        for _ in 0..10 {
            let dropped = nav.wheel(120.0);
            assert_eq!(dropped.transition, None);
            assert!(dropped.commands.is_empty());
            assert!(dropped.suppress_default);
        }
        assert_eq!(nav.current_index(), Some(1));

        assert!(nav.cooldown_elapsed(ticket));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.wheel(120.0).transition, Some(Transition { from: 1, to: 2 }));
    }

    #[test]
    fn wheel_cooldown_uses_configured_window() {
        let config = FeedConfig {
            wheel_cooldown: Duration::from_millis(900),
            ..FeedConfig::default()
        };
        let mut nav = FeedNavigator::new(3, &config);
        nav.start();
        let response = nav.wheel(-1.0);
        assert!(response.commands.iter().any(|c| matches!(
            c,
            NavCommand::ArmCooldown { after, .. } if *after == Duration::from_millis(900)
        )));
        // At the top already: locked, but no movement.
        assert_eq!(response.transition, None);
        assert!(nav.is_transitioning());
    }

    #[test]
    fn stale_ticket_does_not_unlock() {
        let mut nav = started(5);
        let first = armed_ticket(&nav.wheel(1.0));
        nav.stop();
        nav.start();
        let second = armed_ticket(&nav.wheel(1.0));
        assert_ne!(first, second);
        assert!(!nav.cooldown_elapsed(first));
        assert!(nav.is_transitioning());
        assert!(nav.cooldown_elapsed(second));
    }

    #[test]
    fn stop_cancels_pending_cooldown() {
        let mut nav = started(5);
        let ticket = armed_ticket(&nav.wheel(1.0));
        let response = nav.stop();
        assert_eq!(response.commands, vec![NavCommand::CancelCooldown { ticket }]);
        assert!(!nav.is_transitioning());
        assert!(!nav.is_started());
        assert_eq!(nav.stop().commands, Vec::new());
    }

    #[test]
    fn reset_returns_to_top_and_unlocks() {
        let mut nav = started(5);
        nav.key(NavKey::ArrowDown);
        nav.key(NavKey::ArrowDown);
        let ticket = armed_ticket(&nav.wheel(1.0));

        let response = nav.reset(6);
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.len(), 6);
        assert!(!nav.is_transitioning());
        assert_eq!(response.transition, Some(Transition { from: 3, to: 0 }));
        assert_eq!(
            response.commands,
            vec![
                NavCommand::CancelCooldown { ticket },
                NavCommand::ScrollTo { index: 0 },
            ]
        );
    }

    #[test]
    fn resize_clamps_only_when_needed() {
        let mut nav = started(5);
        nav.key(NavKey::ArrowDown);
        nav.key(NavKey::ArrowDown);
        assert_eq!(nav.resize(6), NavResponse::default());
        assert_eq!(nav.current_index(), Some(2));

        let response = nav.resize(2);
        assert_eq!(nav.current_index(), Some(1));
        assert_eq!(response.commands, vec![NavCommand::ScrollTo { index: 1 }]);

        nav.resize(0);
        assert_eq!(nav.current_index(), None);
        nav.resize(3);
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn index_stays_in_bounds_under_mixed_input() {
        let mut nav = started(4);
        let mut last = nav.current_index().unwrap();
        let inputs = [1, 1, 1, 1, 1, -1, 1, -1, -1, -1, -1, -1, 1, 1];
        for (i, step) in inputs.iter().enumerate() {
            let response = if i % 2 == 0 {
                nav.key(if *step > 0 { NavKey::ArrowDown } else { NavKey::ArrowUp })
            } else {
                nav.touch_start(500.0);
                nav.touch_end(Some(500.0 - 120.0 * *step as f64))
            };
            let now = nav.current_index().unwrap();
            assert!(now < 4);
            assert!(now.abs_diff(last) <= 1);
            if let Some(t) = response.transition {
                assert_eq!(t.from, last);
                assert_eq!(t.to, now);
            }
            last = now;
        }
    }
}
