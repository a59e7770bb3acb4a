use crate::config::DisplayConfig;
use crate::coords::{Canvas, Rect};
use crate::dispatch::{Capabilities, Command, Display, DisplayError};
use crate::paint::{Color, Style};
use crate::scene::{self, DisplayList, Geometry, Shape, ZIndex};

/// In-process canvas display.
///
/// Turns commands into a layered [`DisplayList`]: primitives on
/// [`ZIndex::PRIMITIVES`], hotspot markers on [`ZIndex::OVERLAY`], and the
/// fringing glow for both on the configured fringe layer beneath them.
pub struct SceneDisplay {
    name: String,
    canvas: Canvas,
    background: Color,
    point_size: f32,
    hotspot_size: f32,
    fringe_z: ZIndex,
    style: Style,
    list: DisplayList,
    frames_completed: u64,
}

impl SceneDisplay {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            name: "scene".to_string(),
            canvas: config.canvas(),
            background: config.bkgd_color,
            point_size: config.point_size,
            hotspot_size: config.hotspot_size,
            fringe_z: ZIndex::new(config.fringe_z_value),
            style: Style::from_config(config),
            list: DisplayList::new(config.bkgd_color),
            frames_completed: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Current frame as an SVG document.
    pub fn to_svg(&mut self) -> String {
        scene::to_svg(&mut self.list, self.canvas)
    }

    /// Number of `frameEnd` commands seen.
    #[inline]
    pub fn frames_completed(&self) -> u64 {
        self.frames_completed
    }

    fn stroke(&self, geometry: Geometry) -> Shape {
        Shape::stroked(geometry, self.style.stroke, self.style.stroke_width)
    }

    /// Pushes `shape` on layer `z`, preceded by its glow when fringing is on.
    ///
    /// Glow layer `i` (from `width` down to 1) is stroked `2·i` wide with
    /// opacity `(width - i + 1) / width`, so the halo fades outwards.
    fn push_with_fringe(&mut self, z: ZIndex, shape: Shape) {
        let fringe = self.style.fringe;
        if fringe.enabled && fringe.width > 0 {
            let width = fringe.width as f32;
            for i in (1..=fringe.width).rev() {
                let opacity = (width - i as f32 + 1.0) / width;
                let glow = Shape {
                    geometry: shape.geometry.clone(),
                    stroke: fringe.color,
                    stroke_width: 2.0 * i as f32,
                    fill: None,
                    opacity,
                };
                self.list.push(self.fringe_z, glow);
            }
        }
        self.list.push(z, shape);
    }
}

impl Display for SceneDisplay {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError> {
        match command {
            Command::FrameStart => self.list.clear(self.background),
            Command::FrameEnd => {
                self.frames_completed += 1;
                log::trace!(
                    "{}: frame {} complete with {} items",
                    self.name,
                    self.frames_completed,
                    self.list.len()
                );
            }
            Command::DrawPoint { point, hotspot: false } => {
                let dot = Geometry::Dot { center: *point, diameter: self.point_size };
                let shape = self.stroke(dot).with_fill(self.style.fill);
                self.push_with_fringe(ZIndex::PRIMITIVES, shape);
            }
            Command::DrawPoint { point, hotspot: true } => {
                let dot = Geometry::Dot { center: *point, diameter: self.hotspot_size };
                let shape = Shape::stroked(dot, self.style.stroke, 1.0).with_fill(self.style.stroke);
                self.push_with_fringe(ZIndex::OVERLAY, shape);
            }
            Command::DrawLine(points) => {
                let shape = self.stroke(Geometry::Line(*points));
                self.push_with_fringe(ZIndex::PRIMITIVES, shape);
            }
            Command::DrawCubicBezier(points) => {
                let shape = self.stroke(Geometry::CubicBezier(*points));
                self.push_with_fringe(ZIndex::PRIMITIVES, shape);
            }
            Command::DrawSquare { origin, size } => {
                let shape = self.stroke(Geometry::Rect(Rect::square(*origin, *size)));
                self.push_with_fringe(ZIndex::PRIMITIVES, shape);
            }
            Command::DrawSpline(points) => {
                let shape = self.stroke(Geometry::Spline(points.clone()));
                self.push_with_fringe(ZIndex::PRIMITIVES, shape);
            }
            Command::SetStrokeColor(color) => self.style.stroke = *color,
            Command::SetFillColor(color) => self.style.fill = *color,
        }
        Ok(())
    }
}
