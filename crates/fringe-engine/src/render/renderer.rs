use crate::config::{DisplayConfig, RendererConfig};
use crate::coords::Vec2;
use crate::dispatch::{Command, DispatchReport, Dispatcher, Display, DisplayId};
use crate::frame::{FrameStore, Primitive};
use crate::hotspot::HotspotEngine;
use crate::paint::Style;

use super::RenderError;

/// Frame producer: records primitives, fans them out to displays and emits
/// the hotspot overlay at frame end.
///
/// Call sequence per frame:
///
/// ```
/// # use fringe_engine::render::Renderer;
/// # use fringe_engine::coords::Vec2;
/// let mut renderer = Renderer::default();
/// renderer.frame_start();
/// renderer.draw_line(Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0))?;
/// renderer.frame_end();
/// # Ok::<(), fringe_engine::render::RenderError>(())
/// ```
///
/// There is exactly one frame store and one hotspot engine; displays only
/// render what they are sent.
pub struct Renderer {
    config: RendererConfig,
    dispatcher: Dispatcher,
    store: FrameStore,
    hotspots: HotspotEngine,
    style: Style,
    in_frame: bool,
}

impl Renderer {
    pub fn new(config: RendererConfig, style: Style) -> Self {
        Self {
            dispatcher: Dispatcher::new(config.slow_call_threshold),
            hotspots: HotspotEngine::new(config.intersection_mode),
            store: FrameStore::new(),
            style,
            in_frame: false,
            config,
        }
    }

    pub fn from_display_config(config: &DisplayConfig) -> Self {
        Self::new(RendererConfig::from_display(config), Style::from_config(config))
    }

    /// Registers a display. Dispatch order is registration order.
    pub fn add_display(&mut self, display: impl Display + 'static) -> DisplayId {
        self.dispatcher.register(display)
    }

    #[inline]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Primitives recorded since the last [`frame_start`](Self::frame_start).
    #[inline]
    pub fn frame(&self) -> &[Primitive] {
        self.store.snapshot()
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.store.frame_index()
    }

    #[inline]
    pub fn set_hotspots(&mut self, on: bool) {
        self.config.hotspots_on = on;
    }

    // ── frame boundaries ──────────────────────────────────────────────────

    pub fn frame_start(&mut self) -> DispatchReport {
        if self.in_frame {
            log::warn!(
                "frame_start for frame {} before frame_end of the previous frame",
                self.store.frame_index() + 1
            );
        }
        self.store.reset();
        self.in_frame = true;
        log::trace!("frame {} started", self.store.frame_index());
        self.dispatcher.dispatch(&Command::FrameStart)
    }

    /// Emits the hotspot overlay (when enabled), then `frameEnd`.
    ///
    /// The frame store is only read here, so a repeated call emits the same
    /// overlay again without feeding markers back into the frame.
    pub fn frame_end(&mut self) -> DispatchReport {
        if !self.in_frame {
            log::warn!("frame_end without a matching frame_start");
        }

        let overlay = if self.config.hotspots_on {
            self.hotspots.compute(self.store.snapshot())
        } else {
            Vec::new()
        };

        let commands: Vec<Command> = overlay
            .into_iter()
            .map(Command::hotspot)
            .chain(std::iter::once(Command::FrameEnd))
            .collect();
        let report = self.dispatcher.dispatch_all(&commands);

        log::trace!(
            "frame {} ended: {} records, {} hotspots",
            self.store.frame_index(),
            self.store.len(),
            commands.len() - 1
        );
        self.in_frame = false;
        report
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Validates, dispatches and records `primitive`.
    ///
    /// A malformed primitive is rejected before anything is dispatched.
    pub fn draw(&mut self, primitive: Primitive) -> Result<DispatchReport, RenderError> {
        primitive.validate()?;
        if !self.in_frame {
            log::warn!("{} drawn outside of a frame", primitive.kind_name());
        }

        let report = self.dispatcher.dispatch(&command_for(&primitive));
        self.store.append(primitive);
        Ok(report)
    }

    pub fn draw_point(&mut self, p: Vec2) -> Result<DispatchReport, RenderError> {
        self.draw(Primitive::Point(p))
    }

    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2) -> Result<DispatchReport, RenderError> {
        self.draw(Primitive::line(p0, p1))
    }

    pub fn draw_cubic_bezier(
        &mut self,
        p0: Vec2,
        p1: Vec2,
        p2: Vec2,
        p3: Vec2,
    ) -> Result<DispatchReport, RenderError> {
        self.draw(Primitive::cubic_bezier(p0, p1, p2, p3))
    }

    /// Unfilled square with its top-left corner at `(x, y)`.
    pub fn draw_square(&mut self, x: f32, y: f32, size: f32) -> Result<DispatchReport, RenderError> {
        self.draw(Primitive::square(Vec2::new(x, y), size))
    }

    /// Smooth curve through at least two points.
    pub fn draw_spline(&mut self, points: impl Into<Vec<Vec2>>) -> Result<DispatchReport, RenderError> {
        self.draw(Primitive::Spline(points.into()))
    }

    // ── style ─────────────────────────────────────────────────────────────

    /// Sets the stroke color for subsequent draws. `alpha = None` uses the
    /// configured default alpha.
    pub fn set_stroke_color(&mut self, r: u8, g: u8, b: u8, alpha: Option<u8>) -> DispatchReport {
        self.style.set_stroke(r, g, b, alpha);
        self.dispatcher.dispatch(&Command::SetStrokeColor(self.style.stroke))
    }

    /// Sets the fill color for subsequent draws. `alpha = None` uses the
    /// configured default alpha.
    pub fn set_fill_color(&mut self, r: u8, g: u8, b: u8, alpha: Option<u8>) -> DispatchReport {
        self.style.set_fill(r, g, b, alpha);
        self.dispatcher.dispatch(&Command::SetFillColor(self.style.fill))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_display_config(&DisplayConfig::default())
    }
}

fn command_for(primitive: &Primitive) -> Command {
    match primitive {
        Primitive::Point(p) => Command::point(*p),
        Primitive::Line(points) => Command::DrawLine(*points),
        Primitive::Square { origin, size } => Command::DrawSquare { origin: *origin, size: *size },
        Primitive::CubicBezier(points) => Command::DrawCubicBezier(*points),
        Primitive::Spline(points) => Command::DrawSpline(points.clone()),
    }
}
