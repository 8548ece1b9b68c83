// Copyright 2025 the Huddle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use huddle_lens::Reducer;

use crate::view::View;

/// Button of the height control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeightEvent {
    /// One step up.
    Increment,
    /// One step down.
    Decrement,
}

/// Step buttons for the 3D camera elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightControl {
    step: f64,
    min: f64,
}

impl HeightControl {
    /// A control moving by `step`, never below `min`.
    #[must_use]
    pub fn new(step: f64, min: f64) -> Self {
        Self { step, min }
    }

    /// Reducer for one button press.
    #[must_use]
    pub fn handle(&self, event: HeightEvent) -> Reducer<f64> {
        let delta = match event {
            HeightEvent::Increment => self.step,
            HeightEvent::Decrement => -self.step,
        };
        let min = self.min;
        Reducer::update("height", move |h: &mut f64| *h = (*h + delta).max(min))
    }

    /// Current value and both buttons.
    #[must_use]
    pub fn view(&self, height: f64) -> View {
        View::div([
            View::el("span").child(View::text(format!("Height: {height}"))),
            View::el("button")
                .class("increment")
                .child(View::text("Increment")),
            View::el("button")
                .class("decrement")
                .child(View::text("Decrement")),
        ])
        .class("height")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_and_stops_at_the_floor() {
        let control = HeightControl::new(0.25, 0.0);
        let up = control.handle(HeightEvent::Increment).apply(&2.0).unwrap();
        assert_eq!(up, 2.25);
        let down = control.handle(HeightEvent::Decrement).apply(&0.1).unwrap();
        assert_eq!(down, 0.0);
    }

    #[test]
    fn view_shows_the_value() {
        let view = HeightControl::new(0.25, 0.0).view(3.5);
        assert!(view.contains_text("Height: 3.5"));
    }
}
