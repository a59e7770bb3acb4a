use crate::coords::{rotate_point, Canvas, Vec2};
use crate::render::{RenderError, Renderer};

/// Lines spinning about their own midpoints.
///
/// Each line keeps its own accumulated angle, advanced by `step` radians per
/// tick. Positions are derived from the initial geometry, so clamping to the
/// canvas never drifts the rotation center.
#[derive(Debug, Clone)]
pub struct RotatingLines {
    initial: Vec<[Vec2; 2]>,
    angles: Vec<f32>,
    step: f32,
    canvas: Canvas,
}

impl RotatingLines {
    pub fn new(lines: Vec<[Vec2; 2]>, step: f32, canvas: Canvas) -> Self {
        let angles = vec![0.0; lines.len()];
        Self { initial: lines, angles, step, canvas }
    }

    /// Two diagonals, a vertical and a horizontal line, 1° per tick.
    pub fn demo(canvas: Canvas) -> Self {
        let v = Vec2::new;
        Self::new(
            vec![
                [v(500.0, 500.0), v(1500.0, 1500.0)],
                [v(500.0, 1500.0), v(1500.0, 500.0)],
                [v(1000.0, 100.0), v(1000.0, 1000.0)],
                [v(100.0, 1000.0), v(1900.0, 1000.0)],
            ],
            1f32.to_radians(),
            canvas,
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }

    /// Accumulated angle of line `index`, in radians.
    #[inline]
    pub fn angle(&self, index: usize) -> Option<f32> {
        self.angles.get(index).copied()
    }

    /// Advances every line by one step.
    pub fn tick(&mut self) {
        for angle in &mut self.angles {
            *angle += self.step;
        }
    }

    /// Current endpoints, rotated and clamped to the canvas.
    pub fn lines(&self) -> Vec<[Vec2; 2]> {
        self.initial
            .iter()
            .zip(&self.angles)
            .map(|(&[p0, p1], &angle)| {
                let center = p0.midpoint(p1);
                [
                    self.canvas.clamp(rotate_point(p0, center, angle)),
                    self.canvas.clamp(rotate_point(p1, center, angle)),
                ]
            })
            .collect()
    }

    /// Draws the current state as one complete frame.
    pub fn draw(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        renderer.frame_start();
        for [p0, p1] in self.lines() {
            renderer.draw_line(p0, p1)?;
        }
        renderer.frame_end();
        Ok(())
    }
}
