// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod config;
mod drivers;
mod gui;
mod types;
use eframe::egui;
use config::{RigConfig, WINDOW_TITLE};
// 入口函数：窗口关闭后 run_native 返回，进程结束
fn main() -> eframe::Result<()> {
    env_logger::init();
    let config = RigConfig::default();
    log::info!(
        "board on {}, tau = {:.1} ms",
        config.serial.port_name,
        config.model.time_constant_ms()
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 720.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title(WINDOW_TITLE);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(gui::RcApp::new(config))),
    )
}
