use crate::config::{AxisLabels, ModelGrid, RcModel};
use crate::drivers::figure::{CurveStyle, DrawTrigger, PlotAxes};
use crate::drivers::{parse_lines, RigError, SampleSource};
/// Counts from one Run Test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_received: usize,
    pub samples_parsed: usize,
    pub model_points: usize,
}
/// Resets the board, reads its response and draws it over the RC model.
///
/// Nothing is drawn if the source fails; the error is returned as-is.
pub fn run_test<S: SampleSource + ?Sized, D: DrawTrigger + ?Sized>(
    source: &mut S,
    model: &RcModel,
    grid: &ModelGrid,
    axes: &mut PlotAxes,
    canvas: &D,
    labels: &AxisLabels,
) -> Result<RunSummary, RigError> {
    let theoretical = model.theoretical_curve(grid);
    log::info!("resetting board and waiting for data");
    let lines = source.acquire()?;
    let samples = parse_lines(&lines);
    log::info!("got {} samples", samples.len());
    let summary = RunSummary {
        lines_received: lines.len(),
        samples_parsed: samples.len(),
        model_points: theoretical.len(),
    };
    axes.plot("Theoretical", theoretical, CurveStyle::Solid);
    axes.plot(
        "Experimental",
        samples.iter().map(|s| s.as_point()).collect(),
        CurveStyle::Dotted,
    );
    axes.set_x_label(labels.x.as_str());
    axes.set_y_label(labels.y.as_str());
    axes.set_grid(true);
    canvas.draw();
    Ok(summary)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::figure::DrawCounter;
    use crate::drivers::ManualSource;
    struct Unplugged;
    impl SampleSource for Unplugged {
        fn acquire(&mut self) -> Result<Vec<String>, RigError> {
            Err(RigError::Serial(serialport::Error::new(
                serialport::ErrorKind::NoDevice,
                "could not open port",
            )))
        }
    }
    fn run(
        source: &mut dyn SampleSource,
        axes: &mut PlotAxes,
        canvas: &DrawCounter,
    ) -> Result<RunSummary, RigError> {
        run_test(
            source,
            &RcModel::default(),
            &ModelGrid::default(),
            axes,
            canvas,
            &AxisLabels::default(),
        )
    }
    #[test]
    fn draws_model_and_samples() {
        let mut source = ManualSource::new([
            "MPY: soft reboot",
            "0 ms,V 0.000000",
            "120 ms,V 1.500000",
            "no comma here",
        ]);
        let mut axes = PlotAxes::new();
        let canvas = DrawCounter::default();
        let summary = run(&mut source, &mut axes, &canvas).unwrap();
        assert_eq!(summary.lines_received, 4);
        assert_eq!(summary.samples_parsed, 2);
        assert_eq!(axes.curves().len(), 2);
        assert_eq!(axes.curves()[0].style, CurveStyle::Solid);
        assert_eq!(axes.curves()[1].style, CurveStyle::Dotted);
        assert_eq!(axes.curves()[1].points, vec![[0.0, 0.0], [120.0, 1.5]]);
        assert_eq!(axes.x_label(), Some("Time (ms)"));
        assert_eq!(axes.y_label(), Some("Voltage (V)"));
        assert!(axes.grid());
        assert_eq!(canvas.count(), 1);
    }
    #[test]
    fn empty_response_still_draws_full_model() {
        let mut source = ManualSource::new(Vec::<String>::new());
        let mut axes = PlotAxes::new();
        let canvas = DrawCounter::default();
        run(&mut source, &mut axes, &canvas).unwrap();
        assert_eq!(axes.curves()[0].points.len(), 500);
        assert!(axes.curves()[1].points.is_empty());
        assert_eq!(canvas.count(), 1);
    }
    #[test]
    fn failed_acquisition_draws_nothing() {
        let mut axes = PlotAxes::new();
        let canvas = DrawCounter::default();
        let err = run(&mut Unplugged, &mut axes, &canvas).unwrap_err();
        assert!(matches!(err, RigError::Serial(_)));
        assert!(axes.is_empty());
        assert_eq!(canvas.count(), 0);
    }
    #[test]
    fn repeated_runs_overlay() {
        let mut axes = PlotAxes::new();
        let canvas = DrawCounter::default();
        run(&mut ManualSource::new(["10 ms,V 0.3"]), &mut axes, &canvas).unwrap();
        run(&mut ManualSource::new(["10 ms,V 0.3"]), &mut axes, &canvas).unwrap();
        assert_eq!(axes.curves().len(), 4);
        axes.clear();
        assert!(axes.is_empty());
    }
}
