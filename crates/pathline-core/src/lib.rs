// File: crates/pathline-core/src/lib.rs
// Summary: Core library entry point; exports samples, scales, paths, marker animation and rendering.

pub mod animate;
pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod render;
pub mod samples;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use animate::{Clock, Direction, Easing, Frame, ManualClock, MarkerAnimator, MarkerState, SystemClock, Tween};
pub use axis::{Axis, TickFormat};
pub use chart::LineChart;
pub use config::{ChartConfig, ChartKind};
pub use error::ChartError;
pub use geometry::Point;
pub use path::{build_full_path, build_path, segment_predicate, Curve, SampledPath};
pub use render::RenderOptions;
pub use samples::{Sample, SampleOrder, SampleStore};
pub use scale::LinearScale;
pub use theme::Theme;
pub use types::{Insets, Layout};
