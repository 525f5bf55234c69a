//! Demo host state: the counters on screen and the event handling that
//! drives them.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::AppConfig;
use crate::counter::SegmentedCounter;
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::ui::interaction::{handle_counter_click, HitAreaRegistry};

/// A counter plus the label shown above it.
#[derive(Debug)]
pub struct CounterEntry {
    pub label: String,
    pub counter: SegmentedCounter,
}

/// Application state for the demo binary.
#[derive(Debug)]
pub struct App {
    pub counters: Vec<CounterEntry>,
    /// Counter receiving keyboard input
    pub focus: usize,
    /// Leading counters that fit on screen during the last render
    pub visible_counters: usize,
    /// Counter areas registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Message shown in the footer until the next successful change
    pub status: Option<String>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the counters described by `config`.
    ///
    /// Counters start with zero bounds; the first render sizes them.
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let counters = config
            .counters
            .iter()
            .enumerate()
            .map(|(index, counter_config)| {
                let mut counter = counter_config
                    .build(Size::zero())
                    .map_err(|source| ConfigError::Counter { index, source })?;

                let label = counter_config
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("Counter {}", index + 1));
                let log_label = label.clone();
                counter.on_value_changed(move |value| {
                    tracing::info!(counter = %log_label, value, "value changed");
                });

                Ok(CounterEntry { label, counter })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            visible_counters: counters.len(),
            counters,
            focus: 0,
            hit_registry: HitAreaRegistry::new(),
            status: None,
            needs_redraw: true,
            should_quit: false,
        })
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn focused_counter(&self) -> Option<&SegmentedCounter> {
        self.counters.get(self.focus).map(|entry| &entry.counter)
    }

    /// Move keyboard focus to the next visible counter, wrapping around.
    pub fn focus_next(&mut self) {
        let visible = self.visible_count();
        if visible > 0 {
            self.focus = (self.focus + 1) % visible;
            self.mark_dirty();
        }
    }

    /// Record how many counters the last render drew, pulling focus back
    /// onto the screen if its counter was left out.
    pub fn set_visible_counters(&mut self, visible: usize) {
        self.visible_counters = visible.min(self.counters.len());
        if self.focus >= self.visible_counters {
            self.focus = 0;
        }
    }

    fn visible_count(&self) -> usize {
        self.visible_counters.min(self.counters.len())
    }

    /// Programmatically set the focused counter's value.
    ///
    /// Out-of-range values are reported in the status line and not applied.
    /// Nothing changes while no counter is on screen.
    pub fn set_focused_value(&mut self, value: usize) {
        self.mark_dirty();
        if self.focus >= self.visible_count() {
            tracing::debug!(value, "no visible counter for value key");
            return;
        }
        let Some(entry) = self.counters.get_mut(self.focus) else {
            return;
        };
        match entry.counter.set_current_value(value) {
            Ok(()) => self.status = None,
            Err(err) => self.status = Some(err.user_message()),
        }
    }

    /// Dispatch a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    self.set_focused_value(digit as usize);
                }
            }
            _ => {}
        }
    }

    /// Left button down on a counter applies a touch; everything else is
    /// ignored. Drags are not tracked.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(hit) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                handle_counter_click(self, hit);
            }
        }
    }
}
