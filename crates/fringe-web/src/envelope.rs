//! JSON command envelope understood by the browser frontend.
//!
//! Wire shape: `{"command": "<camelCase name>", "params": {...}}`, with
//! `params` omitted for `frameStart` and `frameEnd`.

use fringe_engine::coords::Vec2;
use fringe_engine::dispatch::Command;
use fringe_engine::paint::Color;
use serde::{Deserialize, Serialize};

use crate::WebError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorParams {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Omitted alpha means opaque.
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl From<Color> for ColorParams {
    fn from(c: Color) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<ColorParams> for Color {
    fn from(p: ColorParams) -> Self {
        Color::rgba(p.r, p.g, p.b, p.a)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "params", rename_all = "camelCase")]
pub enum Envelope {
    FrameStart,
    FrameEnd,
    DrawPoint { point: Vec2 },
    DrawLine { points: [Vec2; 2] },
    DrawCubicBezier { points: [Vec2; 4] },
    DrawSquare { x: f32, y: f32, size: f32 },
    DrawSpline { points: Vec<Vec2> },
    SetStrokeColor(ColorParams),
    SetFillColor(ColorParams),
}

impl Envelope {
    /// Hotspot markers travel as plain `drawPoint`s.
    pub fn from_command(command: &Command) -> Self {
        match command {
            Command::FrameStart => Envelope::FrameStart,
            Command::FrameEnd => Envelope::FrameEnd,
            Command::DrawPoint { point, .. } => Envelope::DrawPoint { point: *point },
            Command::DrawLine(points) => Envelope::DrawLine { points: *points },
            Command::DrawCubicBezier(points) => Envelope::DrawCubicBezier { points: *points },
            Command::DrawSquare { origin, size } => {
                Envelope::DrawSquare { x: origin.x, y: origin.y, size: *size }
            }
            Command::DrawSpline(points) => Envelope::DrawSpline { points: points.clone() },
            Command::SetStrokeColor(c) => Envelope::SetStrokeColor((*c).into()),
            Command::SetFillColor(c) => Envelope::SetFillColor((*c).into()),
        }
    }

    pub fn into_command(self) -> Command {
        match self {
            Envelope::FrameStart => Command::FrameStart,
            Envelope::FrameEnd => Command::FrameEnd,
            Envelope::DrawPoint { point } => Command::point(point),
            Envelope::DrawLine { points } => Command::DrawLine(points),
            Envelope::DrawCubicBezier { points } => Command::DrawCubicBezier(points),
            Envelope::DrawSquare { x, y, size } => {
                Command::DrawSquare { origin: Vec2::new(x, y), size }
            }
            Envelope::DrawSpline { points } => Command::DrawSpline(points),
            Envelope::SetStrokeColor(c) => Command::SetStrokeColor(c.into()),
            Envelope::SetFillColor(c) => Command::SetFillColor(c.into()),
        }
    }

    pub fn to_json(&self) -> Result<String, WebError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fringe_engine::dispatch::CommandKind;
    use serde_json::{json, Value};

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    fn encode(command: Command) -> Value {
        serde_json::to_value(Envelope::from_command(&command)).unwrap()
    }

    #[test]
    fn frame_markers_have_no_params() {
        assert_eq!(encode(Command::FrameStart), json!({ "command": "frameStart" }));
        assert_eq!(encode(Command::FrameEnd), json!({ "command": "frameEnd" }));
    }

    #[test]
    fn draw_point_wraps_point_object() {
        assert_eq!(
            encode(Command::point(v(300.0, 600.0))),
            json!({ "command": "drawPoint", "params": { "point": { "x": 300.0, "y": 600.0 } } })
        );
    }

    #[test]
    fn hotspot_flag_stays_off_the_wire() {
        assert_eq!(encode(Command::hotspot(v(1.0, 2.0))), encode(Command::point(v(1.0, 2.0))));
    }

    #[test]
    fn curves_carry_point_lists() {
        assert_eq!(
            encode(Command::DrawLine([v(100.0, 100.0), v(900.0, 700.0)])),
            json!({
                "command": "drawLine",
                "params": { "points": [{ "x": 100.0, "y": 100.0 }, { "x": 900.0, "y": 700.0 }] }
            })
        );

        let bezier = encode(Command::DrawCubicBezier([v(0.0, 0.0), v(1.0, 1.0), v(2.0, 1.0), v(3.0, 0.0)]));
        assert_eq!(bezier["command"], "drawCubicBezier");
        assert_eq!(bezier["params"]["points"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn square_is_flattened() {
        assert_eq!(
            encode(Command::DrawSquare { origin: v(10.0, 20.0), size: 5.0 }),
            json!({ "command": "drawSquare", "params": { "x": 10.0, "y": 20.0, "size": 5.0 } })
        );
    }

    #[test]
    fn colors_carry_rgba_bytes() {
        assert_eq!(
            encode(Command::SetStrokeColor(Color::rgba(255, 0, 10, 128))),
            json!({ "command": "setStrokeColor", "params": { "r": 255, "g": 0, "b": 10, "a": 128 } })
        );
    }

    #[test]
    fn command_names_match_engine_vocabulary() {
        let commands = [
            Command::FrameStart,
            Command::FrameEnd,
            Command::point(v(0.0, 0.0)),
            Command::DrawLine([v(0.0, 0.0), v(1.0, 1.0)]),
            Command::DrawCubicBezier([v(0.0, 0.0); 4]),
            Command::DrawSquare { origin: v(0.0, 0.0), size: 1.0 },
            Command::DrawSpline(vec![v(0.0, 0.0), v(1.0, 1.0)]),
            Command::SetStrokeColor(Color::WHITE),
            Command::SetFillColor(Color::BLACK),
        ];
        for command in commands {
            let value = encode(command.clone());
            assert_eq!(
                CommandKind::from_name(value["command"].as_str().unwrap()),
                Some(command.kind())
            );
        }
    }

    #[test]
    fn decodes_frontend_json() {
        let env = Envelope::from_json(
            r#"{"command":"drawSpline","params":{"points":[{"x":0,"y":0},{"x":5,"y":5}]}}"#,
        )
        .unwrap();
        assert_eq!(env.into_command(), Command::DrawSpline(vec![v(0.0, 0.0), v(5.0, 5.0)]));

        let env = Envelope::from_json(r#"{"command":"frameEnd"}"#).unwrap();
        assert_eq!(env.into_command(), Command::FrameEnd);
    }

    #[test]
    fn missing_alpha_is_opaque() {
        let env = Envelope::from_json(r#"{"command":"setFillColor","params":{"r":1,"g":2,"b":3}}"#).unwrap();
        assert_eq!(env.into_command(), Command::SetFillColor(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(Envelope::from_json(r#"{"command":"drawCircle","params":{}}"#).is_err());
    }
}
