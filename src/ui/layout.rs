//! Screen layout for the demo: counters stacked top to bottom.
//!
//! Each counter gets a one-row label above it. Counters that don't fit the
//! terminal are skipped rather than squeezed.

use ratatui::layout::Rect;

/// Cells kept clear around the edge of the screen.
pub const SCREEN_MARGIN: u16 = 2;

/// Rows taken by a counter: border, body, border.
pub const COUNTER_HEIGHT: u16 = 3;

/// Blank rows between one counter and the next label.
pub const COUNTER_SPACING: u16 = 1;

/// Rows reserved at the bottom for the footer.
pub const FOOTER_HEIGHT: u16 = 1;

const LABEL_HEIGHT: u16 = 1;
const SLOT_HEIGHT: u16 = LABEL_HEIGHT + COUNTER_HEIGHT + COUNTER_SPACING;

/// Where one counter and its label are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSlot {
    pub label: Rect,
    pub counter: Rect,
}

/// Place up to `count` counters inside `area`.
pub fn counter_slots(area: Rect, count: usize) -> Vec<CounterSlot> {
    let width = area.width.saturating_sub(SCREEN_MARGIN * 2);
    if width == 0 {
        return Vec::new();
    }

    let x = area.x + SCREEN_MARGIN;
    let bottom = area.bottom().saturating_sub(FOOTER_HEIGHT);
    let mut y = area.y + SCREEN_MARGIN;
    let mut slots = Vec::with_capacity(count);

    for _ in 0..count {
        if y + LABEL_HEIGHT + COUNTER_HEIGHT > bottom {
            break;
        }
        slots.push(CounterSlot {
            label: Rect::new(x, y, width, LABEL_HEIGHT),
            counter: Rect::new(x, y + LABEL_HEIGHT, width, COUNTER_HEIGHT),
        });
        y += SLOT_HEIGHT;
    }

    slots
}

/// The footer row at the bottom of `area`.
pub fn footer_area(area: Rect) -> Rect {
    let height = FOOTER_HEIGHT.min(area.height);
    Rect::new(
        area.x,
        area.bottom().saturating_sub(height),
        area.width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_counters_stack() {
        let slots = counter_slots(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].label, Rect::new(2, 2, 76, 1));
        assert_eq!(slots[0].counter, Rect::new(2, 3, 76, 3));
        assert_eq!(slots[1].label, Rect::new(2, 7, 76, 1));
        assert_eq!(slots[1].counter, Rect::new(2, 8, 76, 3));
    }

    #[test]
    fn test_short_terminal_drops_counters() {
        // Room for one slot: rows 2..6 plus footer at row 9
        let slots = counter_slots(Rect::new(0, 0, 40, 10), 3);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_narrow_terminal_has_no_slots() {
        assert!(counter_slots(Rect::new(0, 0, 4, 24), 2).is_empty());
    }

    #[test]
    fn test_footer_area() {
        assert_eq!(footer_area(Rect::new(0, 0, 80, 24)), Rect::new(0, 23, 80, 1));
        assert_eq!(footer_area(Rect::new(0, 0, 80, 0)), Rect::new(0, 0, 80, 0));
    }
}
