// File: crates/pathline-core/src/axis.rs
// Summary: Axis model: orientation, tick values and label formatting.

use std::f64::consts::PI;

use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Plain,
    /// Labels as multiples of PI ("-2π", "0.5π").
    PiMultiples,
}

impl TickFormat {
    pub fn label(&self, v: f64) -> String {
        match self {
            TickFormat::Plain => format!("{}", v),
            TickFormat::PiMultiples => {
                let k = (v / PI * 100.0).round() / 100.0;
                // avoid "-0π"
                let k = if k == 0.0 { 0.0 } else { k };
                format!("{}π", k)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    pub ticks: Vec<f64>,
    pub format: TickFormat,
}

impl Axis {
    pub fn bottom(scale: LinearScale, ticks: Vec<f64>, format: TickFormat) -> Self {
        Self { orient: AxisOrient::Bottom, scale, ticks, format }
    }

    pub fn left(scale: LinearScale, ticks: Vec<f64>, format: TickFormat) -> Self {
        Self { orient: AxisOrient::Left, scale, ticks, format }
    }

    /// Tick pixel offsets along the axis with their labels.
    pub fn labelled_ticks(&self) -> Vec<(f64, String)> {
        self.ticks.iter().map(|&v| (self.scale.map(v), self.format.label(v))).collect()
    }
}
