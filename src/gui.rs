// src/gui.rs
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use anyhow::Context;
use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};
use crate::config::{RigConfig, WINDOW_TITLE};
use crate::drivers::{
    render_axes_png, run_test, CurveStyle, DrawTrigger, PlotAxes, PlotStyle, SampleSource,
    SerialDevice, SimulatedDevice,
};
use crate::types::*;

pub struct RcApp {
    config: RigConfig,
    connection_mode: ConnectionMode,

    // 绘图区
    axes: PlotAxes,
    reset_view: bool,

    // 工具栏状态
    allow_pan: bool,
    allow_zoom: bool,
    cursor: Option<[f64; 2]>,

    // 界面日志
    log_messages: Vec<String>,
}

impl Default for RcApp {
    fn default() -> Self {
        Self::new(RigConfig::default())
    }
}

impl RcApp {
    pub fn new(config: RigConfig) -> Self {
        let ready = format!("Ready. Board on {}.", config.serial.port_name);
        Self {
            config,
            connection_mode: ConnectionMode::Hardware,
            axes: PlotAxes::new(),
            reset_view: false,
            allow_pan: true,
            allow_zoom: true,
            cursor: None,
            log_messages: vec![ready],
        }
    }

    pub fn with_mode(mut self, mode: ConnectionMode) -> Self {
        self.connection_mode = mode;
        self
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 8 { self.log_messages.remove(0); }
    }

    fn open_source(&self) -> Box<dyn SampleSource> {
        match self.connection_mode {
            ConnectionMode::Hardware => Box::new(SerialDevice::new(self.config.serial.clone())),
            ConnectionMode::Simulation => {
                Box::new(SimulatedDevice::new(self.config.model, self.config.grid))
            }
        }
    }

    /// Runs one button / toolbar action. Run Test blocks until the board goes quiet.
    pub fn apply<D: DrawTrigger + ?Sized>(&mut self, action: ShellAction, canvas: &D) -> AfterAction {
        match action {
            ShellAction::RunTest => {
                let mut source = self.open_source();
                let result = run_test(
                    &mut *source,
                    &self.config.model,
                    &self.config.grid,
                    &mut self.axes,
                    canvas,
                    &self.config.labels,
                );
                match result {
                    Ok(summary) => {
                        self.reset_view = true;
                        self.log(&format!(
                            "Run Test: {} samples from {} lines, {} model points",
                            summary.samples_parsed, summary.lines_received, summary.model_points
                        ));
                    }
                    Err(e) => {
                        log::error!("Run Test failed: {e}");
                        self.log(&format!("Run Test failed: {e}"));
                    }
                }
            }
            ShellAction::Clear => {
                self.axes.clear();
                self.reset_view = true;
                canvas.draw();
            }
            ShellAction::Quit => {
                log::info!("quit requested");
                return AfterAction::Close;
            }
            ShellAction::Home => {
                self.reset_view = true;
                canvas.draw();
            }
            ShellAction::Save => match self.save_png() {
                Ok(path) => self.log(&format!("Saved {}", path.display())),
                Err(e) => {
                    log::error!("save failed: {e:#}");
                    self.log(&format!("Save failed: {e:#}"));
                }
            },
        }
        AfterAction::Continue
    }

    fn save_png(&self) -> anyhow::Result<PathBuf> {
        let style = PlotStyle {
            caption: WINDOW_TITLE.to_owned(),
            ..PlotStyle::default()
        };
        let png = render_axes_png(&self.axes, &style).context("rendering plot")?;
        let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let path = PathBuf::from(format!("rc_response_{}.png", secs));
        std::fs::write(&path, png).with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    fn draw_plot(&mut self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("rc_plot")
            .legend(Legend::default())
            .show_grid(self.axes.grid())
            .allow_drag(self.allow_pan)
            .allow_scroll(self.allow_pan)
            .allow_zoom(self.allow_zoom)
            .allow_boxed_zoom(self.allow_zoom);
        if let Some(label) = self.axes.x_label() { plot = plot.x_axis_label(label); }
        if let Some(label) = self.axes.y_label() { plot = plot.y_axis_label(label); }
        if self.reset_view { plot = plot.reset(); self.reset_view = false; }

        let axes = &self.axes;
        let response = plot.show(ui, |plot_ui| {
            for curve in axes.curves() {
                let [r, g, b] = curve.color;
                let mut line = Line::new(PlotPoints::new(curve.points.clone()))
                    .name(&curve.name)
                    .color(Color32::from_rgb(r, g, b))
                    .width(1.5);
                if curve.style == CurveStyle::Dotted {
                    line = line.style(LineStyle::dotted_dense());
                }
                plot_ui.line(line);
            }
            plot_ui.pointer_coordinate()
        });
        self.cursor = response.inner.map(|p| [p.x, p.y]);
    }

    // 导航工具栏：复位 / 平移 / 缩放 / 保存 / 光标坐标
    fn toolbar(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ShellAction>) {
        ui.horizontal(|ui| {
            if ui.button("⟲ Home").on_hover_text("Reset original view").clicked() {
                actions.push(ShellAction::Home);
            }
            ui.toggle_value(&mut self.allow_pan, "Pan");
            ui.toggle_value(&mut self.allow_zoom, "Zoom");
            if ui.button("💾 Save").on_hover_text("Save the figure as PNG").clicked() {
                actions.push(ShellAction::Save);
            }
            ui.separator();
            if let Some([x, y]) = self.cursor {
                ui.monospace(format!("x={:.1}  y={:.4}", x, y));
            }
        });
    }
}

impl eframe::App for RcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());
        let mut actions = Vec::new();

        egui::SidePanel::left("L").min_width(200.0).show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading("RC Response");
            ui.label("Experimental vs. theoretical");
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.connection_mode, ConnectionMode::Hardware, "REAL");
                ui.selectable_value(&mut self.connection_mode, ConnectionMode::Simulation, "SIM");
            });
            match self.connection_mode {
                ConnectionMode::Hardware => ui.label(format!("Port: {}", self.config.serial.port_name)),
                ConnectionMode::Simulation => ui.label(egui::RichText::new("Simulated board").color(Color32::DARK_RED).small()),
            };

            ui.add_space(10.0);
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                for m in &self.log_messages { ui.monospace(m); }
            });
        });

        // 先声明的底部面板在最下面：按钮在工具栏之下
        egui::TopBottomPanel::bottom("buttons").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.columns(3, |cols| {
                cols[0].vertical_centered(|ui| {
                    if ui.button("Run Test").clicked() { actions.push(ShellAction::RunTest); }
                });
                cols[1].vertical_centered(|ui| {
                    if ui.button("Clear").clicked() { actions.push(ShellAction::Clear); }
                });
                cols[2].vertical_centered(|ui| {
                    if ui.button("Quit").clicked() { actions.push(ShellAction::Quit); }
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| self.toolbar(ui, &mut actions));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_plot(ui));

        for action in actions {
            if self.apply(action, ctx) == AfterAction::Close {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SerialSettings;
    use crate::drivers::figure::DrawCounter;
    use std::time::Duration;

    #[test]
    fn run_then_clear_in_simulation() {
        let mut app = RcApp::default().with_mode(ConnectionMode::Simulation);
        let canvas = DrawCounter::default();
        assert_eq!(app.apply(ShellAction::RunTest, &canvas), AfterAction::Continue);
        assert_eq!(app.axes.curves().len(), 2);
        assert_eq!(app.axes.curves()[0].points.len(), 500);
        assert!(app.axes.grid());
        assert!(app.reset_view);
        assert_eq!(canvas.count(), 1);

        app.apply(ShellAction::Clear, &canvas);
        assert!(app.axes.is_empty());
        assert!(!app.axes.grid());
        assert_eq!(app.axes.x_label(), None);
        assert_eq!(canvas.count(), 2);
    }

    #[test]
    fn quit_closes_without_other_input() {
        let mut app = RcApp::default();
        let canvas = DrawCounter::default();
        assert_eq!(app.apply(ShellAction::Quit, &canvas), AfterAction::Close);
        assert_eq!(canvas.count(), 0);
    }

    #[test]
    fn missing_board_is_reported_and_draws_nothing() {
        let config = RigConfig {
            serial: SerialSettings {
                port_name: "/dev/rc-response-no-such-port".to_owned(),
                timeout: Duration::from_millis(10),
                ..SerialSettings::default()
            },
            ..RigConfig::default()
        };
        let mut app = RcApp::new(config);
        let canvas = DrawCounter::default();
        assert_eq!(app.apply(ShellAction::RunTest, &canvas), AfterAction::Continue);
        assert!(app.axes.is_empty());
        assert_eq!(canvas.count(), 0);
        let last = app.log_messages.last().unwrap();
        assert!(last.contains("Run Test failed"));
    }

    #[test]
    fn log_keeps_last_eight() {
        let mut app = RcApp::default();
        for i in 0..20 { app.log(&format!("msg {}", i)); }
        assert_eq!(app.log_messages.len(), 8);
        assert_eq!(app.log_messages.last().unwrap(), "> msg 19");
    }
}
