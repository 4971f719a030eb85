//! Canvas Program for the pixel grid
//!
//! Rendering is split over two cached layers:
//!
//! - **grid**: background, frame cells and white cells. Depends only on the
//!   palette, so it is built once.
//! - **overlay**: indicator lines, claimed region, control point, badges and
//!   the status disc. The owner clears it whenever the model changes.

use crate::theme::{GridPalette, BADGE_MARGIN, BADGE_SIZE, STATUS_DISC_SIZE};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Cache, Event, Frame, Geometry, Path, Program, Stroke, Text};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};
use panject_core::{
    PanjectModel, PixelPoint, CELL_PITCH, CELL_SIZE, GRID_COUNT, LINE_WIDTH,
    POINT_SIZE, SURFACE_SIZE,
};

/// Canvas width: surface plus badge margins on both sides
pub const CANVAS_WIDTH: f32 = SURFACE_SIZE + 2.0 * BADGE_MARGIN;

/// Canvas height: the surface itself
pub const CANVAS_HEIGHT: f32 = SURFACE_SIZE;

const BADGE_TEXT_COLOR: Color = Color::BLACK;
const STATUS_TEXT_COLOR: Color = Color::WHITE;

/// Pointer events published by the grid, in surface-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridEvent {
    /// Left button pressed over the surface
    Pressed(PixelPoint),
    /// Any other button pressed over the surface (never grabs)
    SecondaryPressed,
    /// Pointer moved while a drag is active
    Moved(PixelPoint),
    /// Left button released while a drag is active
    Released,
    /// Pointer left the surface while a drag is active
    Left,
}

/// Geometry caches for the two render layers
#[derive(Default)]
pub struct GridCaches {
    pub grid: Cache,
    pub overlay: Cache,
}

impl GridCaches {
    /// Invalidate the layer that depends on model state
    pub fn model_changed(&self) {
        self.overlay.clear();
    }

    /// Invalidate everything (palette change)
    pub fn clear_all(&self) {
        self.grid.clear();
        self.overlay.clear();
    }
}

/// Canvas state for tracking whether the pointer is over the surface
#[derive(Debug, Clone, Copy, Default)]
pub struct GridInteraction {
    pub inside: bool,
}

/// Canvas program for the pixel grid
pub struct PixelGridCanvas<'a, Message, F>
where
    F: Fn(GridEvent) -> Message,
{
    pub model: &'a PanjectModel,
    pub palette: &'a GridPalette,
    pub caches: &'a GridCaches,
    pub on_event: F,
}

/// Surface rectangle relative to the canvas origin
fn surface_rect() -> Rectangle {
    Rectangle {
        x: BADGE_MARGIN,
        y: 0.0,
        width: SURFACE_SIZE,
        height: SURFACE_SIZE,
    }
}

/// Convert an absolute cursor position to surface-local pixels
fn to_surface_local(position: Point, bounds: Rectangle) -> PixelPoint {
    PixelPoint::new(
        position.x - bounds.x - BADGE_MARGIN,
        position.y - bounds.y,
    )
}

/// Only the primary button can start a drag
fn press_event(button: mouse::Button, local: PixelPoint) -> GridEvent {
    match button {
        mouse::Button::Left => GridEvent::Pressed(local),
        _ => GridEvent::SecondaryPressed,
    }
}

/// Cursor for an idle pointer at `position` (relative to the canvas)
fn hover_interaction(model: &PanjectModel, position: Point) -> mouse::Interaction {
    if !surface_rect().contains(position) {
        return mouse::Interaction::default();
    }
    let local = PixelPoint::new(position.x - BADGE_MARGIN, position.y);
    if model.can_grab(local) {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    }
}

impl<'a, Message, F> Program<Message> for PixelGridCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(GridEvent) -> Message,
{
    type State = GridInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let dragging = self.model.drag_state().is_dragging();
        let over_surface = cursor
            .position_in(bounds)
            .is_some_and(|p| surface_rect().contains(p));

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                if over_surface {
                    let position = cursor.position()?;
                    let local = to_surface_local(position, bounds);
                    let event = press_event(*button, local);
                    return Some(canvas::Action::publish((self.on_event)(event)));
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if dragging {
                    return Some(canvas::Action::publish((self.on_event)(GridEvent::Released)));
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                let was_inside = interaction.inside;
                interaction.inside = over_surface;
                if dragging {
                    if over_surface {
                        let local = to_surface_local(*position, bounds);
                        return Some(canvas::Action::publish((self.on_event)(GridEvent::Moved(local))));
                    } else if was_inside {
                        return Some(canvas::Action::publish((self.on_event)(GridEvent::Left)));
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                interaction.inside = false;
                if dragging {
                    return Some(canvas::Action::publish((self.on_event)(GridEvent::Left)));
                }
            }
            _ => {}
        }

        None
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.model.drag_state().is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        cursor
            .position_in(bounds)
            .map_or(mouse::Interaction::default(), |position| hover_interaction(self.model, position))
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let grid = self.caches.grid.draw(renderer, bounds.size(), |frame| {
            draw_grid(frame, self.palette);
        });

        let overlay = self.caches.overlay.draw(renderer, bounds.size(), |frame| {
            draw_indicator(frame, self.model, self.palette);
            draw_badges(frame, self.model, self.palette);
            if self.model.overlay().status_disc_visible() {
                draw_status_disc(frame, self.model.status_disc_label(), self.palette);
            }
        });

        vec![grid, overlay]
    }
}

/// Point in canvas coordinates from surface-local pixels
fn surface_point(x: f32, y: f32) -> Point {
    Point::new(BADGE_MARGIN + x, y)
}

/// Background, frame column/row and the white cells
fn draw_grid(frame: &mut Frame, palette: &GridPalette) {
    let cell = Size::new(CELL_SIZE, CELL_SIZE);

    frame.fill_rectangle(
        surface_point(0.0, 0.0),
        Size::new(SURFACE_SIZE, SURFACE_SIZE),
        palette.background,
    );

    for row in 0..=GRID_COUNT {
        frame.fill_rectangle(surface_point(0.0, row as f32 * CELL_PITCH), cell, palette.frame);
    }
    let frame_row_y = GRID_COUNT as f32 * CELL_PITCH;
    for col in 0..=GRID_COUNT {
        frame.fill_rectangle(surface_point(col as f32 * CELL_PITCH, frame_row_y), cell, palette.frame);
    }

    for row in 0..GRID_COUNT {
        for col in 1..=GRID_COUNT {
            frame.fill_rectangle(
                surface_point(col as f32 * CELL_PITCH, row as f32 * CELL_PITCH),
                cell,
                palette.cell,
            );
        }
    }
}

/// Indicator lines, claimed region and the control point
fn draw_indicator(frame: &mut Frame, model: &PanjectModel, palette: &GridPalette) {
    let position = model.position();
    let center = position.indicator_center();
    let center_point = surface_point(center.x, center.y);

    if position.x() > -1 {
        frame.stroke(
            &Path::line(center_point, surface_point(CELL_PITCH, center.y)),
            Stroke::default().with_color(palette.reparatron).with_width(LINE_WIDTH),
        );
    }

    // A one-cell ezoptron line would only cover the point itself
    if position.y() < GRID_COUNT && position.ezoptron() != 1 {
        frame.stroke(
            &Path::line(center_point, surface_point(center.x, GRID_COUNT as f32 * CELL_PITCH)),
            Stroke::default().with_color(palette.ezoptron).with_width(LINE_WIDTH),
        );
    }

    if model.overlay().prime_labels_visible(position) {
        if let Some(region) = position.claimed_region() {
            frame.fill_rectangle(
                surface_point(region.x, region.y),
                Size::new(region.width, region.height),
                palette.claimed,
            );
        }
    }

    let origin = position.indicator_origin();
    frame.fill_rectangle(
        surface_point(origin.x, origin.y),
        Size::new(POINT_SIZE, POINT_SIZE),
        palette.point,
    );
}

/// ABCD or A'B'C'D' corner badges
fn draw_badges(frame: &mut Frame, model: &PanjectModel, palette: &GridPalette) {
    let left = 0.0;
    let right = BADGE_MARGIN + SURFACE_SIZE + BADGE_MARGIN - BADGE_SIZE;
    let top = 0.0;
    let bottom = SURFACE_SIZE - BADGE_SIZE;
    let overlay = model.overlay();

    if overlay.corner_labels_visible() {
        draw_badge(frame, Point::new(left, bottom), palette.badge, "A");
        draw_badge(frame, Point::new(left, top), palette.badge, "B");
        draw_badge(frame, Point::new(right, top), palette.badge, "C");
        draw_badge(frame, Point::new(right, bottom), palette.badge, "D");
    }

    let position = model.position();
    if overlay.prime_labels_visible(position) {
        if let Some(region) = position.claimed_region() {
            let end_x = BADGE_MARGIN + region.x + region.width;
            let end_y = region.y;
            draw_badge(frame, Point::new(left, bottom), palette.claimed, "A'");
            draw_badge(frame, Point::new(left, end_y), palette.claimed, "B'");
            draw_badge(frame, Point::new(end_x, end_y), palette.claimed, "C'");
            draw_badge(frame, Point::new(end_x, bottom), palette.claimed, "D'");
        }
    }
}

/// Round badge with its top-left corner at `top_left`
fn draw_badge(frame: &mut Frame, top_left: Point, fill: Color, label: &str) {
    let radius = BADGE_SIZE / 2.0;
    let center = Point::new(top_left.x + radius, top_left.y + radius);
    frame.fill(&Path::circle(center, radius), fill);
    frame.fill_text(Text {
        content: label.to_string(),
        position: center,
        size: 14.0.into(),
        color: BADGE_TEXT_COLOR,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });
}

/// Status disc centered on the surface
fn draw_status_disc(frame: &mut Frame, label: &str, palette: &GridPalette) {
    let center = surface_point(SURFACE_SIZE / 2.0, SURFACE_SIZE / 2.0);
    frame.fill(&Path::circle(center, STATUS_DISC_SIZE / 2.0), palette.status_disc);
    frame.fill_text(Text {
        content: label.to_string(),
        position: center,
        size: 16.0.into(),
        color: STATUS_TEXT_COLOR,
        align_x: Horizontal::Center.into(),
        align_y: Vertical::Center.into(),
        ..Text::default()
    });
}
