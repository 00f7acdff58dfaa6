use macroquad::color::hsl_to_rgb;
use macroquad::prelude::*;

use crate::config::{BG_RGB, DISC_OFFSET, DISC_RADIUS, HEIGHT, MAX_HEAT, RESOLUTION, WIDTH};
use crate::domain::Cell;

/// Hue of a live cell (orange)
pub const ALIVE_HUE: f32 = 30.0;

/// Hue span covered by the cooling afterglow
const COOLING_SPAN: f32 = 240.0;

/// Colour a cell is painted with, independent of the graphics backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Background,
    /// Hue in degrees, saturation and lightness in 0..=1
    Hsl { hue: f32, saturation: f32, lightness: f32 },
}

impl Paint {
    const fn vivid(hue: f32) -> Self {
        Paint::Hsl { hue, saturation: 1.0, lightness: 0.5 }
    }

    pub fn to_color(self) -> Color {
        match self {
            Paint::Background => background_color(),
            Paint::Hsl { hue, saturation, lightness } => hsl_to_rgb(hue / 360.0, saturation, lightness),
        }
    }
}

pub fn background_color() -> Color {
    let (r, g, b) = BG_RGB;
    Color::from_rgba(r, g, b, 255)
}

/// Map a cell to its paint.
/// Cold dead cells vanish into the background, live cells are orange, and
/// cooling dead cells sweep the hue by how much heat they have lost.
pub fn paint_for(cell: Cell) -> Paint {
    if cell.is_cold() {
        Paint::Background
    } else if cell.is_alive() {
        Paint::vivid(ALIVE_HUE)
    } else {
        let lost = 1.0 - cell.heat() as f32 / MAX_HEAT as f32;
        Paint::vivid(COOLING_SPAN * lost + ALIVE_HUE)
    }
}

/// A drawing surface with fill primitives
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint);
}

/// Pixel centre of the disc for grid position (x, y)
pub fn cell_center(x: usize, y: usize) -> (f32, f32) {
    (
        (x * RESOLUTION) as f32 + DISC_OFFSET,
        (y * RESOLUTION) as f32 + DISC_OFFSET,
    )
}

/// Paint the whole canvas with the background colour
pub fn fill_background(canvas: &mut impl Canvas) {
    canvas.fill_rect(0.0, 0.0, WIDTH as f32, HEIGHT as f32, Paint::Background);
}

/// Draw one cell as a small disc
pub fn draw_cell(canvas: &mut impl Canvas, x: usize, y: usize, cell: Cell) {
    let (cx, cy) = cell_center(x, y);
    canvas.fill_circle(cx, cy, DISC_RADIUS, paint_for(cell));
}

/// A recorded draw call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f32, y: f32, w: f32, h: f32, paint: Paint },
    Circle { x: f32, y: f32, radius: f32, paint: Paint },
}

/// Canvas that records draw calls made during a generation so the window
/// can replay them every frame until the next generation runs.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    shapes: Vec<Shape>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Replay onto the window
    pub fn present(&self) {
        clear_background(background_color());

        for shape in &self.shapes {
            match *shape {
                Shape::Rect { x, y, w, h, paint } => draw_rectangle(x, y, w, h, paint.to_color()),
                Shape::Circle { x, y, radius, paint } => draw_circle(x, y, radius, paint.to_color()),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: Paint) {
        self.shapes.push(Shape::Rect { x, y, w, h, paint });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, paint: Paint) {
        self.shapes.push(Shape::Circle { x, y, radius, paint });
    }
}

/// Status line in the top-left corner
pub fn draw_status(generation: u64, population: usize, is_running: bool) {
    let status = if is_running { "Running" } else { "Paused" };
    draw_text(
        &format!("Gen {generation} | Alive {population} | {status}"),
        8.0,
        16.0,
        16.0,
        Color::from_rgba(180, 180, 180, 255),
    );
}
