//! Rendering for the demo screen.
//!
//! Lays out the configured counters, sizes each one to its area, draws it
//! with `SegmentedCounterWidget` and registers the area for hit testing.

pub mod interaction;
mod layout;
mod theme;

pub use layout::{counter_slots, footer_area, CounterSlot, COUNTER_HEIGHT, SCREEN_MARGIN};
pub use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CounterEntry};
use crate::geometry::Size;
use crate::widgets::SegmentedCounterWidget;

const HELP_TEXT: &str = "click a segment · 0-9 set value · tab next · q quit";

/// Render the whole screen and refresh the hit registry.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit_registry.clear();

    let slots = counter_slots(area, app.counters.len());
    app.set_visible_counters(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let focused = index == app.focus;
        let entry = &mut app.counters[index];

        let bounds = Size::new(f64::from(slot.counter.width), f64::from(slot.counter.height));
        if let Err(err) = entry.counter.set_bounds(bounds) {
            tracing::warn!(counter = %entry.label, error = %err, "skipping counter");
            continue;
        }

        frame.render_widget(Paragraph::new(label_line(entry, focused)), slot.label);
        frame.render_widget(SegmentedCounterWidget::new(&entry.counter), slot.counter);
        app.hit_registry.register(slot.counter, index);
    }

    frame.render_widget(Paragraph::new(footer_line(app)), footer_area(area));
}

/// Label row: focus marker, label and `value/count`.
pub fn label_line(entry: &CounterEntry, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        (
            "▶ ",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(COLOR_DIM))
    };

    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(entry.label.clone(), style),
        Span::styled(
            format!(
                "  {}/{}",
                entry.counter.current_value(),
                entry.counter.segment_count()
            ),
            Style::default().fg(COLOR_DIM),
        ),
    ])
}

fn footer_line(app: &App) -> Line<'static> {
    match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            format!(" {}", HELP_TEXT),
            Style::default().fg(COLOR_DIM),
        )),
    }
}
