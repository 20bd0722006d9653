// src/drivers/mod.rs
pub mod acquisition;
pub mod error;
pub mod figure;
pub mod model;
pub mod parse;
pub mod plot;
pub mod simulator;
pub mod source;
pub use acquisition::run_test;
pub use error::RigError;
pub use figure::{CurveStyle, DrawTrigger, PlotAxes};
pub use parse::parse_lines;
pub use plot::{render_axes_png, PlotStyle};
pub use simulator::SimulatedDevice;
pub use source::{ManualSource, SampleSource, SerialDevice};
