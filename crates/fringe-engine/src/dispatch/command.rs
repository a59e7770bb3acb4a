use core::fmt;
use core::ops::BitOr;

use crate::coords::Vec2;
use crate::paint::Color;

/// Renderer-to-display command vocabulary.
///
/// Wire names (see [`CommandKind::name`]) are fixed; frontends match on them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FrameStart,
    FrameEnd,
    /// `hotspot` marks overlay points emitted at frame end. It is an
    /// in-process hint only and never appears on the wire.
    DrawPoint { point: Vec2, hotspot: bool },
    DrawLine([Vec2; 2]),
    /// Start, two control points, end.
    DrawCubicBezier([Vec2; 4]),
    DrawSquare { origin: Vec2, size: f32 },
    DrawSpline(Vec<Vec2>),
    SetStrokeColor(Color),
    SetFillColor(Color),
}

impl Command {
    #[inline]
    pub fn point(point: Vec2) -> Self {
        Command::DrawPoint { point, hotspot: false }
    }

    #[inline]
    pub fn hotspot(point: Vec2) -> Self {
        Command::DrawPoint { point, hotspot: true }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::FrameStart => CommandKind::FrameStart,
            Command::FrameEnd => CommandKind::FrameEnd,
            Command::DrawPoint { .. } => CommandKind::DrawPoint,
            Command::DrawLine(_) => CommandKind::DrawLine,
            Command::DrawCubicBezier(_) => CommandKind::DrawCubicBezier,
            Command::DrawSquare { .. } => CommandKind::DrawSquare,
            Command::DrawSpline(_) => CommandKind::DrawSpline,
            Command::SetStrokeColor(_) => CommandKind::SetStrokeColor,
            Command::SetFillColor(_) => CommandKind::SetFillColor,
        }
    }
}

/// Discriminant of a [`Command`], used for capability checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CommandKind {
    FrameStart = 0,
    FrameEnd = 1,
    DrawPoint = 2,
    DrawLine = 3,
    DrawCubicBezier = 4,
    DrawSquare = 5,
    DrawSpline = 6,
    SetStrokeColor = 7,
    SetFillColor = 8,
}

impl CommandKind {
    pub const ALL: [CommandKind; 9] = [
        CommandKind::FrameStart,
        CommandKind::FrameEnd,
        CommandKind::DrawPoint,
        CommandKind::DrawLine,
        CommandKind::DrawCubicBezier,
        CommandKind::DrawSquare,
        CommandKind::DrawSpline,
        CommandKind::SetStrokeColor,
        CommandKind::SetFillColor,
    ];

    /// Wire name of the command.
    pub const fn name(self) -> &'static str {
        match self {
            CommandKind::FrameStart => "frameStart",
            CommandKind::FrameEnd => "frameEnd",
            CommandKind::DrawPoint => "drawPoint",
            CommandKind::DrawLine => "drawLine",
            CommandKind::DrawCubicBezier => "drawCubicBezier",
            CommandKind::DrawSquare => "drawSquare",
            CommandKind::DrawSpline => "drawSpline",
            CommandKind::SetStrokeColor => "setStrokeColor",
            CommandKind::SetFillColor => "setFillColor",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    #[inline]
    const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of commands a display implements.
///
/// Dispatch checks this before calling a display, so a display never sees a
/// command it did not declare.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Capabilities(u16);

impl Capabilities {
    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < CommandKind::ALL.len() {
            bits |= CommandKind::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Frame boundaries plus points, lines and cubic curves.
    pub const fn core() -> Self {
        Self::none()
            .with(CommandKind::FrameStart)
            .with(CommandKind::FrameEnd)
            .with(CommandKind::DrawPoint)
            .with(CommandKind::DrawLine)
            .with(CommandKind::DrawCubicBezier)
    }

    #[inline]
    pub const fn with(self, kind: CommandKind) -> Self {
        Self(self.0 | kind.bit())
    }

    #[inline]
    pub const fn without(self, kind: CommandKind) -> Self {
        Self(self.0 & !kind.bit())
    }

    #[inline]
    pub const fn contains(self, kind: CommandKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = CommandKind> {
        CommandKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;
    #[inline]
    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

impl FromIterator<CommandKind> for Capabilities {
    fn from_iter<I: IntoIterator<Item = CommandKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}
