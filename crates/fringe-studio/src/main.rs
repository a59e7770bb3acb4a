//! Fringe studio: draws the demo scene to the in-process scene display and
//! streams it as JSON lines on stdout for a browser frontend.
//!
//! Usage: `fringe-studio [CONFIG.json] [--frames N] [--svg OUT.svg]`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use fringe_engine::animation::RotatingLines;
use fringe_engine::coords::Vec2;
use fringe_engine::dispatch::Shared;
use fringe_engine::display::SceneDisplay;
use fringe_engine::logging::{init_logging, LoggingConfig};
use fringe_engine::{DisplayConfig, RenderError, Renderer};
use fringe_web::{transport, WebConfig, WebDisplay};

const READY_TIMEOUT: Duration = Duration::from_secs(5);
const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    frames: u32,
    svg: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args { frames: 360, ..Default::default() };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let n = args.next().context("--frames needs a value")?;
                parsed.frames = n.parse().with_context(|| format!("invalid frame count {n:?}"))?;
            }
            "--svg" => parsed.svg = Some(args.next().context("--svg needs a path")?.into()),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => parsed.config = Some(path.into()),
        }
    }
    Ok(parsed)
}

/// Four crossing lines, then the browser test scene: a lone point, a
/// diagonal, a vertical and a cubic Bézier.
fn draw_demo_frame(renderer: &mut Renderer) -> Result<(), RenderError> {
    let v = Vec2::new;
    renderer.frame_start();

    renderer.draw_line(v(100.0, 100.0), v(300.0, 300.0))?;
    renderer.draw_line(v(300.0, 100.0), v(100.0, 300.0))?;
    renderer.draw_line(v(200.0, 50.0), v(200.0, 350.0))?;
    renderer.draw_line(v(50.0, 200.0), v(350.0, 200.0))?;

    renderer.draw_point(v(300.0, 600.0))?;
    renderer.draw_line(v(100.0, 100.0), v(900.0, 700.0))?;
    renderer.draw_line(v(500.0, 50.0), v(500.0, 750.0))?;
    renderer.draw_cubic_bezier(v(100.0, 700.0), v(300.0, 200.0), v(700.0, 200.0), v(900.0, 700.0))?;

    renderer.frame_end();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => DisplayConfig::load(path)
            .with_context(|| format!("loading display config {}", path.display()))?,
        None => DisplayConfig::default(),
    };
    log::info!(
        "canvas {}x{}, hotspots {}, fringing {}",
        config.canvas_size.0,
        config.canvas_size.1,
        if config.hotspots_on { "on" } else { "off" },
        if config.color_fringing_on { "on" } else { "off" },
    );

    let mut renderer = Renderer::from_display_config(&config);
    let scene = Shared::new(SceneDisplay::new(&config));
    renderer.add_display(scene.clone());

    let (web, link) = WebDisplay::new(&WebConfig::default());
    let mut ready = web.ready_handle();
    renderer.add_display(web);
    let pump = transport::spawn_stdout(link);
    ready.wait(READY_TIMEOUT).await.context("waiting for the web transport")?;

    draw_demo_frame(&mut renderer).context("drawing the demo frame")?;

    let mut animation = RotatingLines::demo(config.canvas());
    let mut interval = tokio::time::interval(TICK);
    for _ in 0..args.frames {
        interval.tick().await;
        animation.draw(&mut renderer).context("drawing an animation frame")?;
        animation.tick();
    }

    if let Some(path) = &args.svg {
        let svg = scene.lock()?.to_svg();
        std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
        log::info!("last frame written to {}", path.display());
    }

    // Dropping the renderer drops the web display and closes the transport.
    drop(renderer);
    let written = pump.await.context("transport task panicked")??;
    log::info!("{written} commands streamed over {} frames", args.frames + 1);
    Ok(())
}
