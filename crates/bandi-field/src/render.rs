//! Rasterizes the particle field into terminal cells.
//!
//! Links are plotted first so particles draw over them, then each row
//! of the cell grid becomes a [`Line`] of styled [`Span`]s, matching
//! how the rest of the terminal is painted.

use bandi_core::Rgb;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::particle::Particle;
use crate::{LINK_DIM, LINK_DISTANCE};

/// Field units spanned by one cell horizontally.
pub const UNITS_PER_CELL_X: f32 = 8.0;

/// Field units spanned by one cell vertically.
pub const UNITS_PER_CELL_Y: f32 = 16.0;

/// Glyphs for particles, from smallest radius to largest.
const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Glyph for link segments.
const LINK_CHAR: char = '·';

/// Canvas extent in field units for a terminal of the given cells.
pub fn canvas_size(cols: u16, rows: u16) -> (f32, f32) {
    (
        cols as f32 * UNITS_PER_CELL_X,
        rows as f32 * UNITS_PER_CELL_Y,
    )
}

/// Field-unit position at the center of a cell.
pub fn cell_center(col: u16, row: u16) -> (f32, f32) {
    (
        (col as f32 + 0.5) * UNITS_PER_CELL_X,
        (row as f32 + 0.5) * UNITS_PER_CELL_Y,
    )
}

/// Opacity of the link between two particles `distance` apart, or
/// `None` when they are too far apart to link. Fades linearly with
/// distance and is dampened so links stay fainter than particles.
pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance >= LINK_DISTANCE {
        return None;
    }
    Some((1.0 - distance / LINK_DISTANCE) * LINK_DIM)
}

/// Paint particles and links into a grid of `area`'s size and convert
/// it to renderable lines.
pub(crate) fn draw(particles: &[Particle], color: Rgb, area: Rect) -> Vec<Line<'static>> {
    let cols = area.width as usize;
    let rows = area.height as usize;
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let mut grid: Vec<Option<(char, Rgb)>> = vec![None; cols * rows];

    // Links first, pairwise over the whole field
    for (a, pa) in particles.iter().enumerate() {
        for pb in &particles[a + 1..] {
            let dx = pa.x - pb.x;
            let dy = pa.y - pb.y;
            let distance = (dx * dx + dy * dy).sqrt();
            let Some(alpha) = link_alpha(distance) else {
                continue;
            };
            plot_line(
                &mut grid,
                cols,
                rows,
                cell_of(pa),
                cell_of(pb),
                color.dim(alpha),
            );
        }
    }

    // Particles draw over links
    for p in particles {
        let (x, y) = cell_of(p);
        if let Some(idx) = cell_index(x, y, cols, rows) {
            grid[idx] = Some((particle_char(p.radius), color.dim(p.opacity)));
        }
    }

    (0..rows)
        .map(|y| {
            let spans: Vec<Span> = (0..cols)
                .map(|x| match grid[y * cols + x] {
                    Some((ch, c)) => Span::styled(ch.to_string(), Style::new().fg(c.color())),
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Cell coordinates under a particle. May lie outside the grid when
/// the particle is stranded beyond the canvas.
fn cell_of(p: &Particle) -> (i32, i32) {
    (
        (p.x / UNITS_PER_CELL_X).floor() as i32,
        (p.y / UNITS_PER_CELL_Y).floor() as i32,
    )
}

fn cell_index(x: i32, y: i32, cols: usize, rows: usize) -> Option<usize> {
    if x < 0 || y < 0 || x as usize >= cols || y as usize >= rows {
        return None;
    }
    Some(y as usize * cols + x as usize)
}

fn particle_char(radius: f32) -> char {
    if radius < 1.7 {
        PARTICLE_CHARS[0]
    } else if radius < 2.4 {
        PARTICLE_CHARS[1]
    } else {
        PARTICLE_CHARS[2]
    }
}

/// Bresenham between two cells, clipped to the grid.
fn plot_line(
    grid: &mut [Option<(char, Rgb)>],
    cols: usize,
    rows: usize,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    color: Rgb,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        if let Some(idx) = cell_index(x, y, cols, rows) {
            grid[idx] = Some((LINK_CHAR, color));
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
