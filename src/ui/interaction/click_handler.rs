//! Applies a pointer-down from the hit area registry to the app's counters.

use super::hit_area::CounterHit;
use crate::app::App;

/// Handle a click that landed on a registered counter area.
///
/// The clicked counter also takes keyboard focus.
pub fn handle_counter_click(app: &mut App, hit: CounterHit) {
    app.mark_dirty();

    let Some(entry) = app.counters.get_mut(hit.slot) else {
        tracing::warn!("Click: stale hit area for counter slot {}", hit.slot);
        return;
    };

    match entry.counter.handle_pointer_down(hit.point) {
        Some(segment) => {
            tracing::debug!(
                "Click: counter={} segment={} value={}",
                entry.label,
                segment,
                entry.counter.current_value()
            );
        }
        None => {
            tracing::debug!("Click: counter={} missed every segment", entry.label);
        }
    }

    app.focus = hit.slot;
    app.status = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::geometry::{Point, Size};

    fn create_test_app() -> App {
        let mut app = App::new(&AppConfig::default()).expect("Failed to create test app");
        for entry in &mut app.counters {
            entry.counter.set_segment_padding(0.0).unwrap();
            entry.counter.set_bounds(Size::new(70.0, 3.0)).unwrap();
        }
        app
    }

    #[test]
    fn test_click_marks_dirty_and_focuses() {
        let mut app = create_test_app();
        app.needs_redraw = false;

        handle_counter_click(
            &mut app,
            CounterHit {
                slot: 1,
                point: Point::new(45.5, 1.5),
            },
        );

        assert!(app.needs_redraw);
        assert_eq!(app.focus, 1);
        // 7 segments of 10 cells, x=45.5 is segment 5
        assert_eq!(app.counters[1].counter.current_value(), 5);
    }

    #[test]
    fn test_click_first_segment_twice_clears() {
        let mut app = create_test_app();
        let hit = CounterHit {
            slot: 0,
            point: Point::new(0.5, 0.5),
        };

        handle_counter_click(&mut app, hit);
        assert_eq!(app.counters[0].counter.current_value(), 1);

        handle_counter_click(&mut app, hit);
        assert_eq!(app.counters[0].counter.current_value(), 0);
    }

    #[test]
    fn test_stale_slot_is_ignored() {
        let mut app = create_test_app();
        handle_counter_click(
            &mut app,
            CounterHit {
                slot: 9,
                point: Point::new(1.0, 1.0),
            },
        );
        assert_eq!(app.focus, 0);
    }
}
