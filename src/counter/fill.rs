//! Fill algorithm: which segments are active for a target value.
//!
//! Touching segment `k` fills segments `1..=k` and clears the rest. The one
//! exception is touching segment 1 while it is the only filled segment,
//! which clears the whole control.

use ratatui::style::Color;

use super::segment::Segment;

/// Whether touching `touched` toggles the lone first segment off.
pub fn is_toggle_clear(active: &[bool], touched: usize) -> bool {
    touched == 1 && active.first() == Some(&true) && active.get(1) != Some(&true)
}

/// Value a touch on segment `touched` resolves to.
pub fn resolve_touch(active: &[bool], touched: usize) -> usize {
    if is_toggle_clear(active, touched) {
        0
    } else {
        touched
    }
}

/// Active flags for `segment_count` segments filled up to `value`.
pub fn fill_states(segment_count: usize, value: usize) -> Vec<bool> {
    (1..=segment_count).map(|id| id <= value).collect()
}

/// Fill segments with id `<= value`, clear the others.
pub(crate) fn fill_segments_to(segments: &mut [Segment], value: usize, fill_color: Color) {
    for segment in segments.iter_mut() {
        if segment.id() <= value {
            segment.activate(fill_color);
        } else {
            segment.deactivate();
        }
    }
}
