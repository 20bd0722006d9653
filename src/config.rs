use std::time::Duration;

/// Window title shown in the title bar.
pub const WINDOW_TITLE: &str = "Experimental vs. Theoretical RC Circuit Response";

#[derive(Clone, Debug)]
pub struct SerialSettings {
    pub port_name: String,
    pub baud_rate: u32,
    /// Per-read timeout. A read that yields nothing within it ends the response.
    pub timeout: Duration,
    /// Ctrl-D, makes the board soft-reboot and rerun its measurement script.
    pub reset_byte: u8,
}
impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            port_name: default_port_name().to_owned(),
            baud_rate: 9600,
            timeout: Duration::from_secs(8),
            reset_byte: 0x04,
        }
    }
}
#[cfg(windows)]
fn default_port_name() -> &'static str {
    "COM8"
}
#[cfg(not(windows))]
fn default_port_name() -> &'static str {
    "/dev/ttyACM0"
}
/// Component values of the bench RC circuit.
#[derive(Clone, Copy, Debug)]
pub struct RcModel {
    pub resistance_ohms: f64,
    pub capacitance_farads: f64,
    pub supply_volts: f64,
}
impl Default for RcModel {
    fn default() -> Self {
        Self {
            resistance_ohms: 100_000.0,
            capacitance_farads: 1.0e-6,
            supply_volts: 3.3,
        }
    }
}
/// Time grid the theoretical curve is evaluated on.
#[derive(Clone, Copy, Debug)]
pub struct ModelGrid {
    pub points: usize,
    pub step_ms: u32,
}
impl Default for ModelGrid {
    fn default() -> Self {
        Self {
            points: 500,
            step_ms: 10,
        }
    }
}
#[derive(Clone, Debug)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}
impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x: "Time (ms)".to_owned(),
            y: "Voltage (V)".to_owned(),
        }
    }
}
/// Everything the rig needs, fixed to the lab bench setup.
#[derive(Clone, Debug, Default)]
pub struct RigConfig {
    pub serial: SerialSettings,
    pub model: RcModel,
    pub grid: ModelGrid,
    pub labels: AxisLabels,
}
