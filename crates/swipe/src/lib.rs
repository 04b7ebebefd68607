//! Swipe-to-dismiss gesture recognition for schedule cards.
//!
//! A [`SwipeSession`] tracks one touch interaction on one card, from
//! touch-start to touch-end. It classifies the interaction as a horizontal
//! swipe or a vertical scroll, follows the finger while horizontal, and
//! decides on release whether the swipe commits a dismissal. The session is
//! a plain value owned by the card for the duration of the touch; dropping
//! it returns the card to idle.

use std::cell::Cell;
use std::rc::Rc;

/// Horizontal offset at which a released swipe commits a dismissal.
pub const DISMISS_THRESHOLD: f64 = -150.0;

/// One touch sample in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Classification of a session. Locked at most once; a locked axis never
/// changes until the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Undetermined,
    Horizontal,
    Vertical,
}

/// What the card should do with the current touch-move sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackResponse {
    /// Axis still undetermined; leave the card where it is.
    Pending,
    /// Horizontal swipe in progress: apply the offset and suppress the
    /// default scroll behavior.
    Dragged(f64),
    /// Vertical session: the card stays put and page scrolling proceeds.
    Scrolling,
}

/// Outcome of releasing the touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The swipe passed the threshold; dispatch the dismissal exactly once.
    Commit,
    /// Animate the card back to rest; nothing is dispatched.
    SnapBack,
}

/// State of one touch interaction on one card.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeSession {
    start: TouchPoint,
    axis: Axis,
    offset: f64,
    dispatched: bool,
}

impl SwipeSession {
    /// Start a session at the first touch point.
    pub fn begin(start: TouchPoint) -> Self {
        Self {
            start,
            axis: Axis::Undetermined,
            offset: 0.0,
            dispatched: false,
        }
    }

    /// Feed a touch-move sample.
    ///
    /// The axis locks at the first sample where one direction strictly
    /// dominates: leftward-dominant motion locks horizontal, vertically
    /// dominant motion locks vertical. Ambiguous samples (equal magnitudes)
    /// and rightward-dominant motion lock nothing and leave the offset
    /// untouched. While horizontal, the offset follows the finger clamped
    /// to zero on the right.
    pub fn track(&mut self, point: TouchPoint) -> TrackResponse {
        let dx = point.x - self.start.x;
        let dy = point.y - self.start.y;

        if self.axis == Axis::Undetermined {
            if dx.abs() > dy.abs() && dx < 0.0 {
                self.axis = Axis::Horizontal;
            } else if dy.abs() > dx.abs() {
                self.axis = Axis::Vertical;
            } else {
                return TrackResponse::Pending;
            }
        }

        if self.axis == Axis::Horizontal {
            self.offset = dx.min(0.0);
            TrackResponse::Dragged(self.offset)
        } else {
            self.offset = 0.0;
            TrackResponse::Scrolling
        }
    }

    /// Evaluate the release. Commits at most once per session: the first
    /// call past the threshold sets the dispatch latch, so a repeated
    /// touch-end can never issue a second dismissal.
    pub fn finish(&mut self) -> ReleaseOutcome {
        if self.axis == Axis::Horizontal && self.offset <= DISMISS_THRESHOLD && !self.dispatched {
            self.dispatched = true;
            ReleaseOutcome::Commit
        } else {
            ReleaseOutcome::SnapBack
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Current horizontal offset, always `<= 0`.
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Shared flag raised by the card currently tracking a horizontal swipe.
///
/// The page that owns the card list creates one token and hands a clone to
/// every card; it reads the token before acting on its own pull-to-refresh
/// gesture so a card swipe never doubles as a pull.
#[derive(Debug, Clone, Default)]
pub struct DragToken(Rc<Cell<bool>>);

impl DragToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a card swipe as active.
    pub fn raise(&self) {
        self.0.set(true);
    }

    /// Clear the flag at touch-end.
    pub fn lower(&self) {
        self.0.set(false);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for DragToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_session(x: f64) -> SwipeSession {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));
        assert_eq!(session.track(TouchPoint::new(x, 2.0)), TrackResponse::Dragged(x));
        session
    }

    #[test]
    fn test_leftward_dominant_sample_locks_horizontal() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(
            session.track(TouchPoint::new(-40.0, 2.0)),
            TrackResponse::Dragged(-40.0)
        );
        assert_eq!(session.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_rightward_dominant_sample_locks_nothing() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(session.track(TouchPoint::new(40.0, 2.0)), TrackResponse::Pending);
        assert_eq!(session.axis(), Axis::Undetermined);
        assert_eq!(session.offset(), 0.0);
    }

    #[test]
    fn test_ambiguous_sample_waits() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(
            session.track(TouchPoint::new(-30.0, 30.0)),
            TrackResponse::Pending
        );
        assert_eq!(session.axis(), Axis::Undetermined);

        // A later clear sample still gets to lock the axis.
        assert_eq!(
            session.track(TouchPoint::new(-60.0, 30.0)),
            TrackResponse::Dragged(-60.0)
        );
    }

    #[test]
    fn test_vertical_lock_is_permanent() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(session.track(TouchPoint::new(3.0, 40.0)), TrackResponse::Scrolling);
        assert_eq!(session.axis(), Axis::Vertical);

        // Horizontally dominant samples cannot re-classify the session.
        assert_eq!(
            session.track(TouchPoint::new(-120.0, 41.0)),
            TrackResponse::Scrolling
        );
        assert_eq!(session.offset(), 0.0);
        assert_eq!(session.finish(), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_horizontal_lock_is_permanent() {
        let mut session = horizontal_session(-40.0);

        // Vertically dominant samples keep tracking the horizontal offset.
        assert_eq!(
            session.track(TouchPoint::new(-10.0, 200.0)),
            TrackResponse::Dragged(-10.0)
        );
        assert_eq!(session.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_offset_clamps_at_zero_on_the_right() {
        let mut session = horizontal_session(-40.0);

        assert_eq!(session.track(TouchPoint::new(25.0, 2.0)), TrackResponse::Dragged(0.0));
        assert_eq!(session.offset(), 0.0);
    }

    #[test]
    fn test_release_short_of_threshold_snaps_back() {
        let mut session = horizontal_session(-80.0);

        assert_eq!(session.finish(), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_release_past_threshold_commits_once() {
        let mut session = horizontal_session(-160.0);

        assert_eq!(session.finish(), ReleaseOutcome::Commit);
        // A duplicate touch-end never commits a second time.
        assert_eq!(session.finish(), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_release_exactly_at_threshold_commits() {
        let mut session = horizontal_session(DISMISS_THRESHOLD);

        assert_eq!(session.finish(), ReleaseOutcome::Commit);
    }

    #[test]
    fn test_release_without_samples_snaps_back() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(session.finish(), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_full_leftward_swipe_sequence() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(
            session.track(TouchPoint::new(-40.0, 2.0)),
            TrackResponse::Dragged(-40.0)
        );
        assert_eq!(session.axis(), Axis::Horizontal);
        assert_eq!(
            session.track(TouchPoint::new(-160.0, 3.0)),
            TrackResponse::Dragged(-160.0)
        );
        assert_eq!(session.offset(), -160.0);
        assert_eq!(session.finish(), ReleaseOutcome::Commit);
    }

    #[test]
    fn test_vertical_scroll_sequence_commits_nothing() {
        let mut session = SwipeSession::begin(TouchPoint::new(0.0, 0.0));

        assert_eq!(session.track(TouchPoint::new(3.0, 40.0)), TrackResponse::Scrolling);
        assert_eq!(session.track(TouchPoint::new(3.0, 90.0)), TrackResponse::Scrolling);
        assert_eq!(session.offset(), 0.0);
        assert_eq!(session.finish(), ReleaseOutcome::SnapBack);
    }

    #[test]
    fn test_drag_token_shares_state_across_clones() {
        let token = DragToken::new();
        let held_by_card = token.clone();

        assert!(!token.is_raised());
        held_by_card.raise();
        assert!(token.is_raised());
        token.lower();
        assert!(!held_by_card.is_raised());
    }

    #[test]
    fn test_drag_token_equality_is_identity() {
        let token = DragToken::new();

        assert_eq!(token, token.clone());
        assert_ne!(token, DragToken::new());
    }
}
