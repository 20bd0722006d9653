use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::drivers::error::RigError;
use crate::drivers::figure::{CurveStyle, PlotAxes};
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub caption: String,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            background: WHITE,
            caption: String::new(),
        }
    }
}
/// Rasterises the axes as they are shown in the window and encodes a PNG.
pub fn render_axes_png(axes: &PlotAxes, style: &PlotStyle) -> Result<Vec<u8>, RigError> {
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let (lo, hi) = axes.bounds().unwrap_or(([0.0, 0.0], [1.0, 1.0]));
        let x_range = padded(lo[0], hi[0]);
        let y_range = padded(lo[1], hi[1]);
        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, 55)
            .set_label_area_size(LabelAreaPosition::Bottom, 45);
        if !style.caption.is_empty() {
            builder.caption(&style.caption, ("sans-serif", 20).into_font());
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
        let mut mesh = chart.configure_mesh();
        if !axes.grid() {
            mesh.disable_mesh();
        }
        mesh.x_desc(axes.x_label().unwrap_or_default())
            .y_desc(axes.y_label().unwrap_or_default())
            .light_line_style(&BLACK.mix(0.05))
            .draw()?;
        for curve in axes.curves() {
            let [r, g, b] = curve.color;
            let color = RGBColor(r, g, b);
            let points = curve.points.iter().map(|p| (p[0], p[1]));
            match curve.style {
                CurveStyle::Solid => {
                    chart
                        .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                        .label(curve.name.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
                }
                CurveStyle::Dotted => {
                    chart
                        .draw_series(points.map(|p| Circle::new(p, 1, color.filled())))?
                        .label(curve.name.as_str())
                        .legend(move |(x, y)| Circle::new((x + 10, y), 2, color.filled()));
                }
            }
        }
        if !axes.is_empty() {
            chart
                .configure_series_labels()
                .border_style(&BLACK.mix(0.3))
                .background_style(&style.background.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn padded(lo: f64, hi: f64) -> std::ops::Range<f64> {
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RigError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| RigError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ModelGrid, RcModel};
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    fn assert_png(result: Result<Vec<u8>, RigError>) {
        match result {
            Ok(png) => assert_eq!(png[..8], PNG_MAGIC),
            // Headless CI boxes may have no system font for the tick labels.
            Err(RigError::Plot(msg)) if msg.contains("Font") => {}
            Err(e) => panic!("render failed: {e}"),
        }
    }
    #[test]
    fn renders_both_curve_styles() {
        let mut axes = PlotAxes::new();
        axes.plot(
            "Theoretical",
            RcModel::default().theoretical_curve(&ModelGrid::default()),
            CurveStyle::Solid,
        );
        axes.plot("Experimental", vec![[0.0, 0.0], [120.0, 1.5]], CurveStyle::Dotted);
        axes.set_x_label("Time (ms)");
        axes.set_grid(true);
        assert_png(render_axes_png(&axes, &PlotStyle::default()));
    }
    #[test]
    fn renders_empty_axes() {
        assert_png(render_axes_png(&PlotAxes::new(), &PlotStyle::default()));
    }
}
