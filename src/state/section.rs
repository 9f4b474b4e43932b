//! Tracks which page section the viewport is currently over.
//!
//! The page is one continuous scroll of named sections in a fixed order.
//! Scroll events feed [`on_scroll`], a pure reducer from the scroll offset
//! and the live anchor measurements to the derived [`ScrollState`]. Header
//! visibility is a lookup on the active section, never stored separately.

/// Comparisons use the scroll offset plus this look-ahead, so a section
/// activates slightly before its anchor reaches the viewport top.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// The scroll-to-top button appears once the effective position passes this.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Gap left between the viewport top and a section's anchor when jumping to it.
pub const SECTION_SCROLL_MARGIN: f64 = 20.0;

/// The page's named scroll regions, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    ThingsToDo,
    Map,
    Itinerary,
    Chat,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::ThingsToDo,
        Section::Map,
        Section::Itinerary,
        Section::Chat,
    ];

    /// DOM id of the section's anchor element.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::ThingsToDo => "thingstodo",
            Section::Map => "map",
            Section::Itinerary => "itinerary",
            Section::Chat => "chat",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "Overview",
            Section::ThingsToDo => "Things to do",
            Section::Map => "Map",
            Section::Itinerary => "Itinerary",
            Section::Chat => "Q&A",
        }
    }

    /// The full brand header shows over these sections; the rest get the
    /// condensed call-to-action header.
    pub fn header_visible(self) -> bool {
        matches!(self, Section::Home | Section::Map)
    }
}

/// Live pixel offsets of the non-home section anchors, measured from the
/// document top. `None` means the anchor has not been mounted/measured yet;
/// range tests needing it are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionAnchors {
    pub things_to_do: Option<f64>,
    pub map: Option<f64>,
    pub itinerary: Option<f64>,
    pub chat: Option<f64>,
}

/// Everything the page derives from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub active_section: Section,
    pub scroll_to_top_visible: bool,
}

impl ScrollState {
    pub fn header_visible(&self) -> bool {
        self.active_section.header_visible()
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            active_section: Section::Home,
            scroll_to_top_visible: false,
        }
    }
}

/// Reduce a scroll offset and the current anchor measurements to the derived
/// state. Idempotent; never panics. With monotonically increasing anchors the
/// range tests are contiguous and non-overlapping, so exactly one section
/// matches.
pub fn on_scroll(scroll_y: f64, anchors: &SectionAnchors) -> ScrollState {
    let position = scroll_y + SCROLL_LOOKAHEAD;
    ScrollState {
        active_section: section_at(position, anchors),
        scroll_to_top_visible: position > SCROLL_TOP_THRESHOLD,
    }
}

/// First-match range tests in document order; a test whose anchors are not
/// all measured falls through to the next. Below every measured range the
/// page is still on the hero, so the default is [`Section::Home`].
fn section_at(position: f64, anchors: &SectionAnchors) -> Section {
    if let (Some(start), Some(end)) = (anchors.things_to_do, anchors.map) {
        if position >= start && position < end {
            return Section::ThingsToDo;
        }
    }
    if let (Some(start), Some(end)) = (anchors.map, anchors.itinerary) {
        if position >= start && position < end {
            return Section::Map;
        }
    }
    if let (Some(start), Some(end)) = (anchors.itinerary, anchors.chat) {
        if position >= start && position < end {
            return Section::Itinerary;
        }
    }
    if let Some(start) = anchors.chat {
        if position >= start {
            return Section::Chat;
        }
    }
    Section::Home
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> SectionAnchors {
        SectionAnchors {
            things_to_do: Some(800.0),
            map: Some(1600.0),
            itinerary: Some(2400.0),
            chat: Some(3200.0),
        }
    }

    #[test]
    fn hero_is_active_before_first_anchor() {
        let state = on_scroll(0.0, &anchors());
        assert_eq!(state.active_section, Section::Home);
        assert!(state.header_visible());
    }

    #[test]
    fn lookahead_shifts_the_boundary() {
        // 1499 + 100 lands just inside [800, 1600); 1500 + 100 crosses it.
        assert_eq!(on_scroll(1499.0, &anchors()).active_section, Section::ThingsToDo);
        assert_eq!(on_scroll(1500.0, &anchors()).active_section, Section::Map);
    }

    #[test]
    fn every_offset_maps_to_exactly_one_section() {
        let anchors = anchors();
        for s in 0..5000 {
            let state = on_scroll(s as f64, &anchors);
            assert!(Section::ALL.contains(&state.active_section));
        }
    }

    #[test]
    fn active_section_is_monotone_in_scroll_offset() {
        let anchors = anchors();
        let index = |section: Section| {
            Section::ALL.iter().position(|s| *s == section).unwrap()
        };
        let mut last = 0;
        for s in 0..5000 {
            let current = index(on_scroll(s as f64, &anchors).active_section);
            assert!(current >= last, "regressed at offset {s}");
            last = current;
        }
    }

    #[test]
    fn last_section_extends_to_the_bottom() {
        assert_eq!(on_scroll(3100.0, &anchors()).active_section, Section::Chat);
        assert_eq!(on_scroll(100_000.0, &anchors()).active_section, Section::Chat);
    }

    #[test]
    fn header_hides_outside_home_and_map() {
        assert!(on_scroll(1800.0, &anchors()).header_visible()); // map
        assert!(!on_scroll(1000.0, &anchors()).header_visible()); // things to do
        assert!(!on_scroll(2500.0, &anchors()).header_visible()); // itinerary
        assert!(!on_scroll(4000.0, &anchors()).header_visible()); // chat
    }

    #[test]
    fn unmeasured_anchor_skips_its_range() {
        // Without the map anchor neither range that needs it can match, so a
        // position inside the things-to-do section falls back to home while a
        // position past the itinerary anchor still resolves.
        let partial = SectionAnchors {
            map: None,
            ..anchors()
        };
        assert_eq!(on_scroll(1000.0, &partial).active_section, Section::Home);
        assert_eq!(on_scroll(2500.0, &partial).active_section, Section::Itinerary);
    }

    #[test]
    fn no_anchors_defaults_to_home() {
        let unmounted = SectionAnchors::default();
        for s in [0.0, 1000.0, 10_000.0] {
            assert_eq!(on_scroll(s, &unmounted).active_section, Section::Home);
        }
    }

    #[test]
    fn scroll_to_top_threshold_is_exclusive() {
        assert!(!on_scroll(399.0, &anchors()).scroll_to_top_visible);
        // 400 + 100 == 500 sits exactly on the threshold and stays hidden.
        assert!(!on_scroll(400.0, &anchors()).scroll_to_top_visible);
        assert!(on_scroll(401.0, &anchors()).scroll_to_top_visible);
    }

    #[test]
    fn reducer_is_idempotent() {
        let anchors = anchors();
        let first = on_scroll(1234.0, &anchors);
        let second = on_scroll(1234.0, &anchors);
        assert_eq!(first, second);
    }
}
