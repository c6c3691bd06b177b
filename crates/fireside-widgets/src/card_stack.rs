//! Card stack canvas for the home screen
//!
//! Renders the carousel ring as a vertical 3-D stack and translates raw
//! mouse input into [`StackEvent`] callbacks. All navigation state lives in
//! the core [`CarouselEngine`]; this canvas only draws placements and
//! forwards gestures.
//!
//! Depth is simulated with a fixed-distance perspective projection and the
//! defocus of far cards is approximated by fading them (canvas geometry has
//! no blur pass).

use fireside_core::carousel::{CarouselEngine, CarouselItem};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

use crate::theme;

/// Card width (px, before scaling)
const CARD_WIDTH: f32 = 320.0;

/// Card height (px, before scaling)
const CARD_HEIGHT: f32 = 300.0;

/// Corner radius of the card face
const CARD_RADIUS: f32 = 28.0;

/// Cards sit slightly above the geometric center of the stack area
const CARD_LIFT: f32 = 90.0;

/// Perspective distance used to project depth into scale
const PERSPECTIVE: f32 = 1200.0;

/// Pointer movement below this is a click, not a drag (px)
const CLICK_SLOP: f32 = 4.0;

/// One wheel line is worth this many pixels of scroll
const WHEEL_LINE_PX: f32 = 100.0;

/// Gesture callbacks emitted by the stack canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StackEvent {
    /// Pointer pressed at vertical position `y`
    DragStart(f32),
    /// Pointer moved to `y` during a gesture
    DragMove(f32),
    /// Pointer released at `y`; the engine decides commit vs revert
    DragEnd(f32),
    /// Gesture left the stack area; always reverts
    DragCancel,
    /// Wheel scrolled; positive delta advances the ring
    Wheel(f32),
    /// A card was clicked without dragging
    Activate(usize),
}

/// Create the card stack element over the engine's current state.
pub fn card_stack<'a, Message>(
    engine: &'a CarouselEngine,
    on_event: impl Fn(StackEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: 'a,
{
    Canvas::new(CardStackCanvas { engine, on_event })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Canvas interaction state: tracks the live pointer gesture
#[derive(Debug, Clone, Copy, Default)]
pub struct StackInteraction {
    pressed: bool,
    start_y: f32,
    moved: f32,
}

struct CardStackCanvas<'a, Message, OnEvent>
where
    OnEvent: Fn(StackEvent) -> Message,
{
    engine: &'a CarouselEngine,
    on_event: OnEvent,
}

impl<'a, Message, OnEvent> CardStackCanvas<'a, Message, OnEvent>
where
    OnEvent: Fn(StackEvent) -> Message,
{
    /// Projected rectangle of the card at `index`, or None when hidden
    fn card_rect(&self, index: usize, bounds: Rectangle) -> Option<Rectangle> {
        let placement = self.engine.placement(index);
        if !placement.interactive {
            return None;
        }
        let scale = placement.scale * PERSPECTIVE / (PERSPECTIVE - placement.depth);
        let width = CARD_WIDTH.min(bounds.width * 0.9) * scale;
        let height = CARD_HEIGHT * scale;
        let center_x = bounds.width / 2.0;
        let center_y = bounds.height / 2.0 + placement.offset - CARD_LIFT;
        Some(Rectangle {
            x: center_x - width / 2.0,
            y: center_y - height / 2.0,
            width,
            height,
        })
    }

    /// Topmost interactive card under `point`, if any
    fn card_at(&self, bounds: Rectangle, point: Point) -> Option<usize> {
        let mut hit: Option<(i32, usize)> = None;
        for index in 0..self.engine.len() {
            let Some(rect) = self.card_rect(index, bounds) else {
                continue;
            };
            if rect.contains(point) {
                let stacking = self.engine.placement(index).stacking;
                if hit.map(|(top, _)| stacking > top).unwrap_or(true) {
                    hit = Some((stacking, index));
                }
            }
        }
        hit.map(|(_, index)| index)
    }
}

impl<'a, Message, OnEvent> Program<Message> for CardStackCanvas<'a, Message, OnEvent>
where
    OnEvent: Fn(StackEvent) -> Message,
{
    type State = StackInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                interaction.pressed = true;
                interaction.start_y = position.y;
                interaction.moved = 0.0;
                Some(canvas::Action::publish((self.on_event)(
                    StackEvent::DragStart(position.y),
                )))
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if !interaction.pressed {
                    return None;
                }
                match cursor.position_in(bounds) {
                    Some(position) => {
                        interaction.moved = interaction
                            .moved
                            .max((position.y - interaction.start_y).abs());
                        Some(canvas::Action::publish((self.on_event)(
                            StackEvent::DragMove(position.y),
                        )))
                    }
                    // Leaving the stack area mid-gesture always reverts
                    None => {
                        interaction.pressed = false;
                        Some(canvas::Action::publish((self.on_event)(
                            StackEvent::DragCancel,
                        )))
                    }
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !interaction.pressed {
                    return None;
                }
                interaction.pressed = false;
                match cursor.position_in(bounds) {
                    Some(position) if interaction.moved < CLICK_SLOP => {
                        // A stationary press-release is a card activation
                        let index = self.card_at(bounds, position)?;
                        Some(canvas::Action::publish((self.on_event)(
                            StackEvent::Activate(index),
                        )))
                    }
                    Some(position) => Some(canvas::Action::publish((self.on_event)(
                        StackEvent::DragEnd(position.y),
                    ))),
                    // Released outside the stack: revert without committing
                    None => Some(canvas::Action::publish((self.on_event)(
                        StackEvent::DragCancel,
                    ))),
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if !interaction.pressed {
                    return None;
                }
                interaction.pressed = false;
                Some(canvas::Action::publish((self.on_event)(
                    StackEvent::DragCancel,
                )))
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_in(bounds)?;
                // winit reports scroll-up as positive; the engine wants the
                // browser convention where scroll-down advances.
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
                    mouse::ScrollDelta::Pixels { y, .. } => -y,
                };
                Some(canvas::Action::publish((self.on_event)(StackEvent::Wheel(
                    delta_y,
                ))))
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if interaction.pressed {
            mouse::Interaction::Grabbing
        } else if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Grab
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

        // Paint back-to-front so nearer cards cover farther ones
        let mut order: Vec<usize> = (0..self.engine.len()).collect();
        order.sort_by_key(|&index| self.engine.placement(index).stacking);

        for index in order {
            let placement = self.engine.placement(index);
            if placement.opacity <= 0.0 {
                continue;
            }
            let Some(rect) = self.card_rect(index, bounds) else {
                continue;
            };
            let item = &self.engine.items()[index];
            // Far cards render faded in place of a blur pass
            let fade = if placement.blurred { 0.45 } else { 1.0 };

            draw_card(&mut frame, item, index, rect, &placement, fade);
        }

        vec![frame.into_geometry()]
    }
}

fn draw_card(
    frame: &mut Frame,
    item: &CarouselItem,
    index: usize,
    rect: Rectangle,
    placement: &fireside_core::carousel::CardPlacement,
    fade: f32,
) {
    let top_left = Point::new(rect.x, rect.y);
    let size = Size::new(rect.width, rect.height);
    let is_create = matches!(item, CarouselItem::CreateEntry { .. });

    // Drop shadow, lifted with distance; the create card glows amber instead
    if placement.shadow_alpha > 0.0 || is_create {
        let shadow_offset = 18.0 + placement.shadow_elevate;
        let shadow = Path::new(|builder| {
            builder.rounded_rectangle(
                Point::new(rect.x + 4.0, rect.y + shadow_offset),
                size,
                CARD_RADIUS.into(),
            );
        });
        let shadow_color = if is_create {
            Color::from_rgba8(0xff, 0x95, 0x40, 0.45 * fade)
        } else {
            Color::from_rgba8(0x0c, 0x07, 0x03, placement.shadow_alpha * fade)
        };
        frame.fill(&shadow, shadow_color);
    }

    // Card face
    let face = Path::new(|builder| {
        builder.rounded_rectangle(top_left, size, CARD_RADIUS.into());
    });
    frame.fill(
        &face,
        theme::linear_gradient_with_alpha(item.gradient(), fade),
    );

    // Screen-blend style highlight along the top edge
    let highlight = Path::new(|builder| {
        builder.rounded_rectangle(
            top_left,
            Size::new(rect.width, rect.height * 0.45),
            CARD_RADIUS.into(),
        );
    });
    frame.fill(&highlight, Color::from_rgba(1.0, 1.0, 1.0, 0.16 * fade));

    let ink = Color {
        a: theme::CARD_INK.a * fade,
        ..theme::CARD_INK
    };
    let ink_soft = Color { a: 0.6 * fade, ..ink };
    let padding = 26.0;

    // Header row: position number and kind pill
    frame.fill_text(Text {
        content: format!("{index:02}"),
        position: Point::new(rect.x + padding, rect.y + padding),
        size: 12.0.into(),
        color: ink_soft,
        align_x: Horizontal::Left.into(),
        align_y: Vertical::Top.into(),
        ..Text::default()
    });

    let pill_label = if is_create { "New" } else { "Album" };
    let pill_width = 58.0;
    let pill = Path::new(|builder| {
        builder.rounded_rectangle(
            Point::new(rect.x + rect.width - padding - pill_width, rect.y + padding - 6.0),
            Size::new(pill_width, 22.0),
            11.0.into(),
        );
    });
    frame.stroke(
        &pill,
        Stroke::default().with_width(1.0).with_color(ink_soft),
    );
    frame.fill_text(Text {
        content: pill_label.to_string(),
        position: Point::new(
            rect.x + rect.width - padding - pill_width / 2.0,
            rect.y + padding + 5.0,
        ),
        size: 10.0.into(),
        color: ink_soft,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });

    match item {
        CarouselItem::CreateEntry { .. } => {
            // Plus badge and invitation copy
            let badge = Path::new(|builder| {
                builder.rounded_rectangle(
                    Point::new(rect.x + padding, rect.y + rect.height / 2.0 - 24.0),
                    Size::new(48.0, 48.0),
                    12.0.into(),
                );
            });
            frame.fill(&badge, Color::from_rgba(1.0, 1.0, 1.0, 0.4 * fade));
            frame.fill_text(Text {
                content: "+".to_string(),
                position: Point::new(rect.x + padding + 24.0, rect.y + rect.height / 2.0),
                size: 28.0.into(),
                color: ink,
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: "Start a new album".to_string(),
                position: Point::new(rect.x + padding + 64.0, rect.y + rect.height / 2.0 - 12.0),
                size: 22.0.into(),
                color: ink,
                align_x: Horizontal::Left.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: "Begin today's new track.".to_string(),
                position: Point::new(rect.x + padding + 64.0, rect.y + rect.height / 2.0 + 14.0),
                size: 12.0.into(),
                color: ink_soft,
                align_x: Horizontal::Left.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }
        CarouselItem::AlbumCard { title, subtitle, .. } => {
            frame.fill_text(Text {
                content: title.clone(),
                position: Point::new(rect.x + padding, rect.y + rect.height * 0.42),
                size: 26.0.into(),
                color: ink,
                align_x: Horizontal::Left.into(),
                align_y: Vertical::Top.into(),
                ..Text::default()
            });
            frame.fill_text(Text {
                content: subtitle.clone(),
                position: Point::new(rect.x + padding, rect.y + rect.height * 0.42 + 36.0),
                size: 12.0.into(),
                color: ink_soft,
                align_x: Horizontal::Left.into(),
                align_y: Vertical::Top.into(),
                ..Text::default()
            });

            // Preview affordance
            let button_width = 120.0;
            let button = Path::new(|builder| {
                builder.rounded_rectangle(
                    Point::new(rect.x + padding, rect.y + rect.height - padding - 34.0),
                    Size::new(button_width, 34.0),
                    17.0.into(),
                );
            });
            frame.fill(&button, Color::from_rgba(1.0, 1.0, 1.0, 0.4 * fade));
            frame.fill_text(Text {
                content: "Play Preview".to_string(),
                position: Point::new(
                    rect.x + padding + button_width / 2.0,
                    rect.y + rect.height - padding - 17.0,
                ),
                size: 12.0.into(),
                color: ink,
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center.into(),
                ..Text::default()
            });
        }
    }
}
