//! Pointer interaction for hosts that show several counters.
//!
//! Counters register their screen areas during rendering; the event loop
//! hit-tests mouse-down events against the registry and dispatches the
//! resulting local point to the counter underneath.

mod click_handler;
mod hit_area;

pub use click_handler::handle_counter_click;
pub use hit_area::{CounterHit, HitArea, HitAreaRegistry};
