// File: crates/demo/src/main.rs
// Summary: Drives the random-walk and sine charts with a manual clock, writing PNG frames and a CSV trajectory.

use anyhow::{Context, Result};
use log::{info, warn};
use pathline_core::{theme, ChartConfig, LineChart, ManualClock, RenderOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Duration;

const FPS: u32 = 60;
const ADVANCES: usize = 3;
const MAX_FRAMES: usize = 10_000;

fn main() -> Result<()> {
    env_logger::init();

    // Args: [seed] [out_dir] [theme]
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("seed must be an unsigned integer, got '{s}'"))?,
        None => 42,
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let opts = RenderOptions { theme: theme::find(&args.next().unwrap_or_default()), ..RenderOptions::default() };
    info!("seed {seed}, theme {}, writing to {}", opts.theme.name, out_dir.display());

    let mut rng = StdRng::seed_from_u64(seed);

    let clock = ManualClock::new();
    let mut walk = LineChart::random_walk(ChartConfig::random_walk(), &mut rng, &clock)?;
    run_chart(&mut walk, &clock, &mut rng, &opts, &out_dir)?;

    let clock = ManualClock::new();
    let mut sine = LineChart::sine(ChartConfig::sine(), &clock)?;
    run_chart(&mut sine, &clock, &mut rng, &opts, &out_dir)?;

    println!("Wrote frames and trajectories to {}", out_dir.display());
    Ok(())
}

/// Run a few advances to completion, stepping the clock one frame at a time.
fn run_chart(
    chart: &mut LineChart<&ManualClock>,
    clock: &ManualClock,
    rng: &mut StdRng,
    opts: &RenderOptions,
    out_dir: &Path,
) -> Result<()> {
    let name = chart.name().to_string();
    let csv_path = out_dir.join(format!("{name}_trajectory.csv"));
    let mut wtr = csv::Writer::from_path(&csv_path).with_context(|| format!("opening {}", csv_path.display()))?;
    wtr.write_record(["advance", "frame", "t", "px", "py", "target"])?;

    chart.set_show_segment(true);
    let frame_step = Duration::from_secs_f64(1.0 / FPS as f64);
    let expected = (chart.config().duration.as_secs_f64() * FPS as f64).ceil() as usize;

    for advance in 0..ADVANCES {
        let target = chart.advance(rng)?;
        info!("{name}: advance {advance} towards {target}");
        write_png(chart, opts, out_dir, &name, advance, "start")?;

        let mut frame_no = 0usize;
        while chart.is_animating() {
            if frame_no >= MAX_FRAMES {
                warn!("{name}: animation did not finish after {MAX_FRAMES} frames");
                break;
            }
            clock.advance(frame_step);
            let frame = chart.tick();
            frame_no += 1;
            wtr.write_record(&[
                advance.to_string(),
                frame_no.to_string(),
                format!("{:.4}", frame.progress),
                format!("{:.3}", frame.point.x),
                format!("{:.3}", frame.point.y),
                target.to_string(),
            ])?;
            if frame_no == expected / 2 {
                write_png(chart, opts, out_dir, &name, advance, "mid")?;
            }
        }
        write_png(chart, opts, out_dir, &name, advance, "end")?;
        println!("{name}: {} after {frame_no} frames", chart.status());
    }
    wtr.flush().with_context(|| format!("flushing {}", csv_path.display()))?;
    println!("Wrote {}", csv_path.display());
    Ok(())
}

fn write_png(
    chart: &LineChart<&ManualClock>,
    opts: &RenderOptions,
    out_dir: &Path,
    name: &str,
    advance: usize,
    stage: &str,
) -> Result<()> {
    let out = out_dir.join(format!("{name}_{advance:02}_{stage}.png"));
    chart.render_to_png(opts, &out)?;
    info!("wrote {}", out.display());
    Ok(())
}
