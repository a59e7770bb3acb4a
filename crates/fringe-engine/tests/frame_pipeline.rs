//! End-to-end behavior of the renderer with heterogeneous displays.

use fringe_engine::coords::{clamp_to_canvas, segment_intersection, Vec2};
use fringe_engine::dispatch::{Capabilities, Command, CommandKind, Display, DisplayError, Shared};
use fringe_engine::display::SceneDisplay;
use fringe_engine::frame::Primitive;
use fringe_engine::scene::ZIndex;
use fringe_engine::{DisplayConfig, Renderer};

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Records everything it is sent, limited to the given capabilities.
struct Probe {
    caps: Capabilities,
    seen: Vec<Command>,
}

impl Probe {
    fn new(caps: Capabilities) -> Shared<Self> {
        Shared::new(Self { caps, seen: Vec::new() })
    }
}

impl Display for Probe {
    fn name(&self) -> &str {
        "probe"
    }

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn execute(&mut self, command: &Command) -> Result<(), DisplayError> {
        self.seen.push(command.clone());
        Ok(())
    }
}

struct Broken;

impl Display for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn execute(&mut self, _: &Command) -> Result<(), DisplayError> {
        Err(DisplayError::Disconnected)
    }
}

fn hotspots(commands: &[Command]) -> Vec<Vec2> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::DrawPoint { point, hotspot: true } => Some(*point),
            _ => None,
        })
        .collect()
}

#[test]
fn geometry_examples() {
    assert_eq!(segment_intersection(v(0.0, 0.0), v(10.0, 10.0), v(0.0, 10.0), v(10.0, 0.0)), Some(v(5.0, 5.0)));
    assert_eq!(segment_intersection(v(0.0, 0.0), v(10.0, 0.0), v(0.0, 5.0), v(10.0, 5.0)), None);
    assert_eq!(clamp_to_canvas(v(-5.0, 50.0), 2000.0, 1125.0), v(0.0, 50.0));
    assert_eq!(clamp_to_canvas(v(2500.0, 50.0), 2000.0, 1125.0), v(2000.0, 50.0));
}

#[test]
fn snapshot_matches_calls_then_clears() {
    let mut renderer = Renderer::default();
    renderer.frame_start();
    renderer.draw_cubic_bezier(v(100.0, 700.0), v(300.0, 200.0), v(700.0, 200.0), v(900.0, 700.0)).unwrap();
    renderer.draw_spline(vec![v(0.0, 0.0), v(5.0, 5.0), v(10.0, 0.0)]).unwrap();
    renderer.draw_point(v(300.0, 600.0)).unwrap();

    assert_eq!(renderer.frame().len(), 3);
    assert!(matches!(renderer.frame()[0], Primitive::CubicBezier(_)));
    assert!(matches!(renderer.frame()[1], Primitive::Spline(_)));
    assert_eq!(renderer.frame()[2], Primitive::Point(v(300.0, 600.0)));

    renderer.frame_end();
    renderer.frame_start();
    assert!(renderer.frame().is_empty());
}

#[test]
fn two_crossing_lines_and_a_point_yield_endpoints_intersection_and_point() {
    let probe = Probe::new(Capabilities::all());
    let mut renderer = Renderer::default();
    renderer.add_display(probe.clone());

    renderer.frame_start();
    renderer.draw_line(v(100.0, 100.0), v(300.0, 300.0)).unwrap();
    renderer.draw_point(v(50.0, 400.0)).unwrap();
    renderer.draw_line(v(300.0, 100.0), v(100.0, 300.0)).unwrap();
    renderer.frame_end();

    let seen = probe.lock().unwrap();
    assert_eq!(
        hotspots(&seen.seen),
        vec![
            v(100.0, 100.0),
            v(300.0, 300.0),
            v(300.0, 100.0),
            v(100.0, 300.0),
            v(200.0, 200.0),
            v(50.0, 400.0),
        ]
    );
    assert_eq!(seen.seen.last(), Some(&Command::FrameEnd));
}

#[test]
fn unsupported_commands_skip_only_the_limited_display() {
    let full = Probe::new(Capabilities::all());
    let limited = Probe::new(Capabilities::core());
    let mut renderer = Renderer::default();
    renderer.add_display(full.clone());
    renderer.add_display(limited.clone());

    renderer.frame_start();
    let report = renderer.draw_square(10.0, 10.0, 20.0).unwrap();
    assert_eq!((report.delivered, report.skipped), (1, 1));
    assert!(report.is_clean());

    renderer.frame_end();

    let limited = limited.lock().unwrap();
    assert!(limited.seen.iter().all(|c| c.kind() != CommandKind::DrawSquare));
    // Square corners still reach the limited display as hotspot points.
    assert_eq!(hotspots(&limited.seen).len(), 4);
    assert_eq!(full.lock().unwrap().seen[1], Command::DrawSquare { origin: v(10.0, 10.0), size: 20.0 });
}

#[test]
fn broken_display_is_isolated() {
    let probe = Probe::new(Capabilities::all());
    let mut renderer = Renderer::default();
    renderer.add_display(Broken);
    renderer.add_display(probe.clone());

    let report = renderer.frame_start();
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].error, DisplayError::Disconnected));

    renderer.draw_line(v(0.0, 0.0), v(1.0, 1.0)).unwrap();
    assert_eq!(probe.lock().unwrap().seen.len(), 2);
}

#[test]
fn scene_display_renders_primitives_glow_and_overlay() {
    let scene = Shared::new(SceneDisplay::new(&DisplayConfig::default()));
    let mut renderer = Renderer::default();
    renderer.add_display(scene.clone());

    renderer.frame_start();
    renderer.draw_line(v(100.0, 100.0), v(300.0, 300.0)).unwrap();
    renderer.frame_end();

    let mut scene = scene.lock().unwrap();
    let list = scene.display_list();
    assert_eq!(list.layer(ZIndex::PRIMITIVES).count(), 1);
    assert_eq!(list.layer(ZIndex::OVERLAY).count(), 2);
    // Five glow layers each for the line and both hotspots.
    assert_eq!(list.layer(ZIndex(-10)).count(), 15);

    let svg = scene.to_svg();
    assert_eq!(svg.matches("<line").count(), 6);
    assert_eq!(svg.matches("<circle").count(), 12);
}
