//! Window configuration for the desktop app.

use std::env;

use app::APP_NAME;
use app::ui_scale::{UI_SCALE_ENV, UiScale};
use macroquad::window::{Conf, screen_dpi_scale};

const DEFAULT_WINDOW_WIDTH: i32 = 1280;
const DEFAULT_WINDOW_HEIGHT: i32 = 800;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Some Linux sessions do not scale low-DPI framebuffers on their own.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale(saved: Option<f32>) -> UiScale {
    let override_value = env::var(UI_SCALE_ENV).ok();
    let scale = UiScale::resolve(screen_dpi_scale(), saved, override_value.as_deref());
    log::info!(
        "ui scale {:.2} (dpi={:.2} saved={saved:?} {UI_SCALE_ENV}={override_value:?})",
        scale.get(),
        screen_dpi_scale()
    );
    scale
}
