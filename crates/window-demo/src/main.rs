// File: crates/window-demo/src/main.rs
// Summary: Windowed demo stacking the random-walk and sine charts; renders each to RGBA and blits via winit + softbuffer.
// Controls: Space advances both charts, a left click advances the chart under the cursor,
// 1 / 2 toggle the segment overlay of the top / bottom chart, Escape quits.

use anyhow::{Context, Result};
use log::{debug, error, info};
use pathline_core::{ChartConfig, ChartError, LineChart, RenderOptions, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

type Chart = LineChart<Rc<SystemClock>>;

fn main() -> Result<()> {
    env_logger::init();

    // Arg: optional seed for reproducible targets
    let mut rng = match std::env::args().nth(1) {
        Some(s) => StdRng::seed_from_u64(s.parse().with_context(|| format!("invalid seed '{s}'"))?),
        None => StdRng::from_entropy(),
    };

    let clock = Rc::new(SystemClock::new());
    let walk = LineChart::random_walk(ChartConfig::random_walk(), &mut rng, Rc::clone(&clock))?;
    let sine = LineChart::sine(ChartConfig::sine(), Rc::clone(&clock))?;
    let mut charts = vec![walk, sine];
    // both charts start moving as soon as they load
    for chart in charts.iter_mut() {
        advance(chart, &mut rng);
    }

    let width = charts.iter().map(|c| c.config().layout.width).max().unwrap_or(1) as u32;
    let height = charts.iter().map(|c| c.config().layout.height).sum::<i32>() as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pathline - Window Demo")
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let opts = RenderOptions::default();
    let mut cursor_y: Option<f64> = None;
    let mut dirty = true;

    info!("space: advance both, click: advance one, 1/2: toggle segment");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::CursorMoved { position, .. } => cursor_y = Some(position.y),
                WindowEvent::CursorLeft { .. } => cursor_y = None,
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    if let Some(idx) = cursor_y.and_then(|y| chart_at(&charts, y)) {
                        advance(&mut charts[idx], &mut rng);
                        dirty = true;
                    }
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Space => {
                        for chart in charts.iter_mut() {
                            advance(chart, &mut rng);
                        }
                        dirty = true;
                    }
                    VirtualKeyCode::Key1 | VirtualKeyCode::Key2 => {
                        let idx = if key == VirtualKeyCode::Key1 { 0 } else { 1 };
                        let shown = charts[idx].toggle_segment();
                        debug!("{}: segment {}", charts[idx].name(), if shown { "shown" } else { "hidden" });
                        dirty = true;
                    }
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    _ => {}
                },
                _ => {}
            },
            Event::MainEventsCleared => {
                let animating = charts.iter().any(|c| c.is_animating());
                for chart in charts.iter_mut().filter(|c| c.is_animating()) {
                    chart.tick();
                }
                if animating || dirty {
                    window.request_redraw();
                }
                if *cf != ControlFlow::Exit {
                    *cf = if animating { ControlFlow::Poll } else { ControlFlow::Wait };
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&mut surface, &charts, &opts, width, height) {
                    error!("draw failed: {e:#}");
                }
                dirty = false;
            }
            _ => {}
        }
    });
}

/// Index of the chart whose band contains window row `y`.
fn chart_at(charts: &[Chart], y: f64) -> Option<usize> {
    let mut top = 0.0;
    for (i, chart) in charts.iter().enumerate() {
        let bottom = top + chart.config().layout.height as f64;
        if y >= top && y < bottom {
            return Some(i);
        }
        top = bottom;
    }
    None
}

fn advance(chart: &mut Chart, rng: &mut StdRng) {
    match chart.advance(rng) {
        Ok(target) => debug!("{}: heading to {target}", chart.name()),
        Err(ChartError::AnimationInProgress) => debug!("{}: still animating, advance ignored", chart.name()),
        Err(e) => error!("{}: {e}", chart.name()),
    }
}

/// Render every chart and copy it into its band of the window buffer as 0RGB.
fn draw(
    surface: &mut softbuffer::Surface,
    charts: &[Chart],
    opts: &RenderOptions,
    width: u32,
    height: u32,
) -> Result<()> {
    let (w, h) = match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(()),
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    frame.fill(0);

    let row_len = width as usize;
    let mut top = 0usize;
    for chart in charts {
        let (rgba, cw, ch, stride) = chart.render_to_rgba8(opts)?;
        for y in 0..ch as usize {
            let dst_row = top + y;
            if dst_row >= height as usize {
                break;
            }
            let src = &rgba[y * stride..y * stride + cw as usize * 4];
            let dst = &mut frame[dst_row * row_len..(dst_row + 1) * row_len];
            for (d, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
                *d = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
            }
        }
        top += ch as usize;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}
