//! Scroll math shared by the results animation and the fixed header.
//!
//! Everything here is pure so the pieces that matter (clamping, the
//! edge-triggered visibility band, the active-section rule) can be tested
//! without a browser.

/// Progress band inside which the fixed header stays hidden.
pub const HIDE_BAND_LOW: f64 = 0.01;
pub const HIDE_BAND_HIGH: f64 = 0.99;

/// Scroll offset past which the header switches to its "scrolled" styling.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

/// Viewport line (px from the top) used to pick the active nav section.
pub const NAV_REFERENCE_LINE: f64 = 150.0;

/// Extra offset applied when scrolling to a section, so the fixed header
/// does not cover its heading.
pub const SCROLL_TO_OFFSET: f64 = 100.0;

/// The scrollable span of a page section, in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Normalized position of `scroll_y` inside the range, clamped to [0, 1].
    /// A degenerate range (end at or before start) reports 0 rather than NaN.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 0.0;
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Frame to seek to for a given progress value. Plain linear scale of the
/// clamped progress, so it is monotonic by construction.
pub fn frame_at(progress: f64, total_frames: f64) -> f64 {
    progress.clamp(0.0, 1.0) * total_frames
}

/// Edge-triggered header visibility: hidden while progress sits strictly
/// inside the band, visible otherwise. `update` reports a value only when
/// the desired state differs from the last reported one, so consumers never
/// see two identical notifications in a row.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityGate {
    low: f64,
    high: f64,
    visible: bool,
}

impl VisibilityGate {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            visible: true,
        }
    }

    pub fn update(&mut self, progress: f64) -> Option<bool> {
        let should_hide = progress > self.low && progress < self.high;
        let desired = !should_hide;
        if desired == self.visible {
            return None;
        }
        self.visible = desired;
        Some(desired)
    }

    /// Called when the publishing section goes away mid-band; reports
    /// `true` if the header was left hidden so it can be restored.
    pub fn release(&mut self) -> Option<bool> {
        if self.visible {
            return None;
        }
        self.visible = true;
        Some(true)
    }
}

/// Picks the section whose box straddles the reference line. `rects` holds
/// (id, top, bottom) in viewport coordinates, in document order.
pub fn section_at_line<'a>(rects: &[(&'a str, f64, f64)], line: f64) -> Option<&'a str> {
    rects
        .iter()
        .find(|(_, top, bottom)| *top <= line && *bottom > line)
        .map(|(id, _, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_for_any_offset() {
        let range = ScrollRange::new(1000.0, 5000.0);
        for scroll_y in [-10_000.0, -1.0, 0.0, 999.9, 1000.0, 3000.0, 5000.0, 99_999.0] {
            let p = range.progress(scroll_y);
            assert!((0.0..=1.0).contains(&p), "progress {} for scroll {}", p, scroll_y);
        }
    }

    #[test]
    fn degenerate_range_reports_zero_not_nan() {
        let collapsed = ScrollRange::new(500.0, 500.0);
        let inverted = ScrollRange::new(500.0, 100.0);
        assert_eq!(collapsed.progress(700.0), 0.0);
        assert_eq!(inverted.progress(700.0), 0.0);
    }

    #[test]
    fn midpoint_of_section_maps_to_middle_frame() {
        // Section spanning 1000..5000, viewport at 3000 => progress 0.5,
        // which lands on frame 60 of a 120-frame asset.
        let range = ScrollRange::new(1000.0, 5000.0);
        let p = range.progress(3000.0);
        assert_eq!(p, 0.5);
        assert_eq!(frame_at(p, 120.0), 60.0);
    }

    #[test]
    fn frame_mapping_is_monotonic() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for pair in samples.windows(2) {
            assert!(frame_at(pair[0], 120.0) <= frame_at(pair[1], 120.0));
        }
    }

    #[test]
    fn gate_emits_only_on_edges() {
        let mut gate = VisibilityGate::new(HIDE_BAND_LOW, HIDE_BAND_HIGH);
        // A hundred ticks oscillating inside the hidden band produce exactly
        // one notification, not a hundred.
        let mut emitted = Vec::new();
        for i in 0..100 {
            let progress = 0.3 + 0.001 * f64::from(i);
            if let Some(v) = gate.update(progress) {
                emitted.push(v);
            }
        }
        assert_eq!(emitted, vec![false]);
    }

    #[test]
    fn gate_threshold_band_scenario() {
        let mut gate = VisibilityGate::new(0.01, 0.99);
        let mut emitted = Vec::new();
        for progress in [0.0, 0.02, 0.5, 0.98, 1.0] {
            if let Some(v) = gate.update(progress) {
                emitted.push((progress, v));
            }
        }
        // Hidden entering the band at 0.02, visible again once progress
        // reaches the 0.99 boundary.
        assert_eq!(emitted, vec![(0.02, false), (1.0, true)]);
    }

    #[test]
    fn boundary_values_count_as_outside_the_band() {
        let mut gate = VisibilityGate::new(0.01, 0.99);
        assert_eq!(gate.update(0.01), None);
        assert_eq!(gate.update(0.5), Some(false));
        assert_eq!(gate.update(0.99), Some(true));
    }

    #[test]
    fn release_restores_visibility_when_hidden() {
        let mut gate = VisibilityGate::new(HIDE_BAND_LOW, HIDE_BAND_HIGH);
        assert_eq!(gate.update(0.5), Some(false));
        assert_eq!(gate.release(), Some(true));
        // Back to visible: re-entering the band reports hidden again.
        assert_eq!(gate.update(0.5), Some(false));
        assert_eq!(gate.release(), Some(true));
        // Releasing while already visible stays silent.
        assert_eq!(gate.release(), None);
    }

    #[test]
    fn section_selection_uses_the_reference_line() {
        let rects = [
            ("inicio", -800.0, 100.0),
            ("servicos", 100.0, 700.0),
            ("contato", 700.0, 1400.0),
        ];
        assert_eq!(section_at_line(&rects, 150.0), Some("servicos"));
        assert_eq!(section_at_line(&rects, 50.0), Some("inicio"));
        assert_eq!(section_at_line(&[], 150.0), None);
        // A gap between sections selects nothing.
        let gapped = [("inicio", -800.0, 100.0), ("contato", 700.0, 1400.0)];
        assert_eq!(section_at_line(&gapped, 150.0), None);
    }
}
