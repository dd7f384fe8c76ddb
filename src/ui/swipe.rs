/// Transparent gesture-capture layer for the lightbox
///
/// A canvas stacked over the displayed image that feeds touch
/// sequences (and left-button mouse drags, so the gesture works on
/// desktops without touch hardware) into the swipe classifier. It
/// draws nothing.

use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Program};
use iced::{Point, Rectangle, Renderer, Theme};
use std::time::Instant;

use crate::state::gesture::{GestureSample, SwipeThresholds};
use crate::Message;

/// Gesture capture surface with the configured thresholds
pub struct SwipeArea {
    thresholds: SwipeThresholds,
}

impl SwipeArea {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        SwipeArea { thresholds }
    }

    fn begin(&self, state: &mut SwipeState, position: Point) {
        // Replace any previous sample wholesale
        state.sample = Some(GestureSample::begin(position.x, position.y, Instant::now()));
    }

    fn track(&self, state: &mut SwipeState, position: Point) {
        if let Some(sample) = &mut state.sample {
            sample.track(position.x, position.y);
        }
    }

    fn finish(&self, state: &mut SwipeState) -> Option<Message> {
        let sample = state.sample.take()?;
        let direction = sample.classify(&self.thresholds, Instant::now())?;
        Some(Message::Swiped(direction))
    }
}

/// State for one in-progress gesture
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    sample: Option<GestureSample>,
}

impl Program<Message> for SwipeArea {
    type State = SwipeState;

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        // Pure hit-testing layer; the image underneath does the rendering
        vec![]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Touch input: the reference gesture
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.begin(state, position);
                (canvas::event::Status::Captured, None)
            }
            canvas::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.track(state, position);
                (canvas::event::Status::Captured, None)
            }
            canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                self.track(state, position);
                let message = self.finish(state);
                (canvas::event::Status::Captured, message)
            }
            canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                // Abandoned gesture, never classified
                state.sample = None;
                (canvas::event::Status::Captured, None)
            }

            // Mouse input: left-button drags classify identically
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    self.begin(state, position);
                    return (canvas::event::Status::Captured, None);
                }
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.sample.is_some() {
                    if let Some(position) = cursor.position() {
                        self.track(state, position);
                    }
                    return (canvas::event::Status::Captured, None);
                }
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.sample.is_none() {
                    return (canvas::event::Status::Ignored, None);
                }
                let message = self.finish(state);
                (canvas::event::Status::Captured, message)
            }

            _ => (canvas::event::Status::Ignored, None),
        }
    }
}
