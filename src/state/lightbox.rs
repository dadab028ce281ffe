/// Lightbox navigation state
///
/// The lightbox is a cursor over the gallery. Navigation wraps around
/// at both ends. Input comes from buttons, arrow keys and horizontal
/// swipes; all three resolve to the same `Navigation` actions.

/// Result of a key press or gesture while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    Close,
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowRight,
    ArrowLeft,
    Escape,
}

impl From<LightboxKey> for Navigation {
    fn from(key: LightboxKey) -> Self {
        match key {
            LightboxKey::ArrowRight => Navigation::Next,
            LightboxKey::ArrowLeft => Navigation::Previous,
            LightboxKey::Escape => Navigation::Close,
        }
    }
}

/// Index of the item currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
}

impl Lightbox {
    /// Open on `index`. Nothing to show for an empty or shorter collection.
    pub fn open(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Position text, e.g. "3 von 12"
    pub fn position_label(&self, len: usize) -> String {
        format!("{} von {}", self.index + 1, len)
    }
}

/// Tracks one horizontal touch gesture.
///
/// Only the x coordinate matters. A gesture without movement never
/// navigates, however far it started from the edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<f32>,
    end: Option<f32>,
}

impl SwipeTracker {
    /// Finger down: a new gesture begins
    pub fn start(&mut self, x: f32) {
        self.end = None;
        self.start = Some(x);
    }

    /// Finger moved
    pub fn update(&mut self, x: f32) {
        self.end = Some(x);
    }

    /// Finger lifted: a left swipe goes forward, a right swipe goes back.
    ///
    /// The travel must exceed `threshold` in either direction.
    pub fn finish(&mut self, threshold: f32) -> Option<Navigation> {
        let (start, end) = (self.start.take()?, self.end.take()?);
        let distance = start - end;

        if distance > threshold {
            Some(Navigation::Next)
        } else if distance < -threshold {
            Some(Navigation::Previous)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 50.0;

    #[test]
    fn test_open_requires_valid_index() {
        assert!(Lightbox::open(0, 0).is_none());
        assert!(Lightbox::open(3, 3).is_none());
        assert_eq!(Lightbox::open(2, 3).map(|l| l.index()), Some(2));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut lightbox = Lightbox::open(2, 3).unwrap();
        lightbox.next(3);
        assert_eq!(lightbox.index(), 0);
        lightbox.next(3);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut lightbox = Lightbox::open(0, 3).unwrap();
        lightbox.previous(3);
        assert_eq!(lightbox.index(), 2);
        lightbox.previous(3);
        assert_eq!(lightbox.index(), 1);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut lightbox = Lightbox::open(0, 1).unwrap();
        lightbox.next(1);
        assert_eq!(lightbox.index(), 0);
        lightbox.previous(1);
        assert_eq!(lightbox.index(), 0);
    }

    #[test]
    fn test_position_label() {
        let lightbox = Lightbox::open(2, 12).unwrap();
        assert_eq!(lightbox.position_label(12), "3 von 12");
    }

    #[test]
    fn test_keys_map_to_navigation() {
        assert_eq!(Navigation::from(LightboxKey::ArrowRight), Navigation::Next);
        assert_eq!(Navigation::from(LightboxKey::ArrowLeft), Navigation::Previous);
        assert_eq!(Navigation::from(LightboxKey::Escape), Navigation::Close);
    }

    #[test]
    fn test_left_swipe_goes_forward() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        swipe.update(200.0);
        assert_eq!(swipe.finish(THRESHOLD), Some(Navigation::Next));
    }

    #[test]
    fn test_right_swipe_goes_back() {
        let mut swipe = SwipeTracker::default();
        swipe.start(100.0);
        swipe.update(180.0);
        assert_eq!(swipe.finish(THRESHOLD), Some(Navigation::Previous));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.start(100.0);
        swipe.update(140.0);
        assert_eq!(swipe.finish(THRESHOLD), None);

        // Exactly on the threshold is not enough
        swipe.start(100.0);
        swipe.update(50.0);
        assert_eq!(swipe.finish(THRESHOLD), None);
    }

    #[test]
    fn test_tap_without_move_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        assert_eq!(swipe.finish(THRESHOLD), None);
    }

    #[test]
    fn test_new_gesture_forgets_previous_end() {
        let mut swipe = SwipeTracker::default();
        swipe.start(300.0);
        swipe.update(100.0);
        swipe.start(50.0);
        assert_eq!(swipe.finish(THRESHOLD), None);
    }

    #[test]
    fn test_gesture_starting_at_left_edge_counts() {
        let mut swipe = SwipeTracker::default();
        swipe.start(0.0);
        swipe.update(80.0);
        assert_eq!(swipe.finish(THRESHOLD), Some(Navigation::Previous));
    }
}
