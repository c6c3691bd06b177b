//! Turntable canvas for the player screen
//!
//! Draws the vinyl disc (cover gradient sleeve, grooved platter, spindle)
//! rotated to the transport's current angle, plus the tonearm swung to its
//! derived angle. Clicking the disc emits the supplied message (the player
//! uses it to toggle playback).

use std::f32::consts::PI;

use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme, Vector};

use crate::theme;

/// Tonearm pivot position, relative to the disc bounding square
const PIVOT_X: f32 = 0.86;
const PIVOT_Y: f32 = 0.06;

/// Everything the canvas needs from the player screen
#[derive(Debug, Clone, Copy)]
pub struct TurntableState {
    /// Sleeve/cover gradient colors
    pub colors: [[u8; 3]; 3],
    /// Platter angle (degrees)
    pub rotation_deg: f64,
    /// Tonearm angle around its pivot (degrees)
    pub tonearm_deg: f64,
    pub is_playing: bool,
}

/// Create the turntable element.
pub fn turntable<'a, Message>(state: TurntableState, on_press: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(TurntableCanvas { state, on_press })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct TurntableCanvas<Message> {
    state: TurntableState,
    on_press: Message,
}

impl<Message> Program<Message> for TurntableCanvas<Message>
where
    Message: Clone,
{
    type State = ();

    fn update(
        &self,
        _interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let position = cursor.position_in(bounds)?;
            let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
            let radius = disc_radius(bounds);
            let distance = position.distance(center);
            if distance <= radius {
                return Some(canvas::Action::publish(self.on_press.clone()));
            }
        }
        None
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let hovering = cursor
            .position_in(bounds)
            .map(|position| {
                position.distance(Point::new(bounds.width / 2.0, bounds.height / 2.0))
                    <= disc_radius(bounds)
            })
            .unwrap_or(false);
        if hovering {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = disc_radius(bounds);
        let [c0, c1, c2] = self.state.colors;

        // Soft glow behind the sleeve
        frame.fill(
            &Path::circle(center, radius * 1.15),
            theme::rgba(c1, 0.25),
        );

        // Sleeve: cover gradient ring with a glass edge
        let sleeve = Path::circle(center, radius);
        let mut gradient = iced::gradient::Linear::new(iced::Radians(3.0 * PI / 4.0));
        gradient = gradient.add_stop(0.0, theme::rgb(c0));
        gradient = gradient.add_stop(0.55, theme::rgb(c1));
        gradient = gradient.add_stop(1.0, theme::rgb(c2));
        frame.fill(&sleeve, iced::Gradient::from(gradient));
        frame.stroke(
            &sleeve,
            Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.08)),
        );

        // Rotating platter
        let platter_radius = radius * 0.78;
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.rotate(iced::Radians(
                self.state.rotation_deg.to_radians() as f32,
            ));

            frame.fill(
                &Path::circle(Point::ORIGIN, platter_radius),
                Color::from_rgb(0.08, 0.08, 0.09),
            );

            // Grooves
            let groove_stroke = Stroke::default()
                .with_width(1.0)
                .with_color(Color::from_rgba(1.0, 1.0, 1.0, 0.06));
            let mut groove = platter_radius * 0.35;
            while groove < platter_radius * 0.96 {
                frame.stroke(&Path::circle(Point::ORIGIN, groove), groove_stroke);
                groove += 5.0;
            }

            // Off-center label sheen makes the rotation visible; dimmed
            // while the platter is frozen
            let sheen_alpha = if self.state.is_playing { 0.35 } else { 0.18 };
            frame.fill(
                &Path::circle(Point::new(0.0, -platter_radius * 0.55), 6.0),
                Color::from_rgba(1.0, 1.0, 1.0, sheen_alpha),
            );
            frame.fill(
                &Path::circle(Point::ORIGIN, platter_radius * 0.3),
                theme::rgba(c1, 0.8),
            );
        });

        // Spindle
        frame.fill(
            &Path::circle(center, 10.0),
            Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        );
        frame.fill(&Path::circle(center, 4.0), Color::from_rgba(0.0, 0.0, 0.0, 0.8));

        // Highlight overlay on the upper sleeve
        frame.fill(
            &Path::circle(Point::new(center.x, center.y - radius * 0.5), radius * 0.6),
            Color::from_rgba(1.0, 1.0, 1.0, 0.06),
        );

        draw_tonearm(&mut frame, bounds, radius, self.state.tonearm_deg);

        vec![frame.into_geometry()]
    }
}

/// Disc radius leaving room for the tonearm overhang
fn disc_radius(bounds: Rectangle) -> f32 {
    (bounds.width.min(bounds.height) / 2.0) * 0.82
}

fn draw_tonearm(frame: &mut Frame, bounds: Rectangle, radius: f32, angle_deg: f64) {
    let side = bounds.width.min(bounds.height);
    let pivot = Point::new(
        bounds.width / 2.0 + (PIVOT_X - 0.5) * side,
        bounds.height / 2.0 + (PIVOT_Y - 0.5) * side,
    );
    let arm_length = radius * 1.05;

    // Base pivot
    frame.fill(&Path::circle(pivot, 10.0), Color::from_rgba(0.0, 0.0, 0.0, 0.6));
    frame.fill(&Path::circle(pivot, 6.0), Color::from_rgba(1.0, 1.0, 1.0, 0.8));

    frame.with_save(|frame| {
        frame.translate(Vector::new(pivot.x, pivot.y));
        // Angle 0 hangs the arm straight down; positive swings inward
        frame.rotate(iced::Radians(angle_deg.to_radians() as f32));

        let arm = Path::line(Point::ORIGIN, Point::new(0.0, arm_length));
        frame.stroke(
            &arm,
            Stroke::default()
                .with_width(3.0)
                .with_color(Color::from_rgba(0.82, 0.82, 0.86, 0.95)),
        );

        // Counterweight joint partway down the arm
        frame.fill(
            &Path::circle(Point::new(0.0, arm_length * 0.4), 3.0),
            Color::from_rgba(1.0, 1.0, 1.0, 0.7),
        );

        // Cartridge head
        let head = Path::new(|builder| {
            builder.rounded_rectangle(
                Point::new(-9.0, arm_length - 4.0),
                iced::Size::new(18.0, 9.0),
                2.0.into(),
            );
        });
        frame.fill(&head, Color::from_rgba(0.08, 0.08, 0.09, 0.9));
        frame.fill(
            &Path::circle(Point::new(0.0, arm_length + 4.0), 1.6),
            Color::from_rgba(1.0, 1.0, 1.0, 0.85),
        );
    });
}
