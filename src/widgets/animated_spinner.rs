// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a Canvas, rotated from outside via ticks.

use crate::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Sweep of the animated arc, two thirds of a turn.
const ARC_SWEEP: f32 = TAU * 2.0 / 3.0;

/// Stroke width of track and arc.
const STROKE_WIDTH: f32 = 3.0;

/// Spinner shown while the host reports a loading state.
///
/// The rotation angle is owned by the overlay component and advanced on
/// its tick subscription; the widget itself is stateless between frames.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle in radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Faint full-circle track under the moving arc
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                let start_angle = self.rotation - PI / 2.0;

                // Polyline approximation of the arc keeps rendering uniform
                // across backends
                let mut arc_path = canvas::path::Builder::new();
                let start = Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                );
                arc_path.move_to(start);

                let segments = 24;
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + ARC_SWEEP * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
