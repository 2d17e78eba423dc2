mod app;
mod article;
mod config;
mod draft;
mod events;
mod form;
mod options;
mod panel;
mod params;
mod ui;

use app::ArticleApp;
use config::AppConfig;

const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];
const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 480.0];

fn initial_window_size(config: &AppConfig) -> [f32; 2] {
    let width = config
        .window_width
        .filter(|w| w.is_finite())
        .unwrap_or(DEFAULT_WINDOW_SIZE[0]);
    let height = config
        .window_height
        .filter(|h| h.is_finite())
        .unwrap_or(DEFAULT_WINDOW_SIZE[1]);
    [width.max(MIN_WINDOW_SIZE[0]), height.max(MIN_WINDOW_SIZE[1])]
}

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load();
    let size = initial_window_size(&config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Article Params")
            .with_app_id("article-params")
            .with_inner_size(size)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "article-params",
        native_options,
        Box::new(|cc| Ok(Box::new(ArticleApp::new(cc, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_size_defaults_when_unset() {
        let size = initial_window_size(&AppConfig::default());
        assert_eq!(size, DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let config = AppConfig {
            window_width: Some(200.0),
            window_height: Some(f32::NAN),
            ..Default::default()
        };
        let expected = [MIN_WINDOW_SIZE[0], DEFAULT_WINDOW_SIZE[1]];
        assert_eq!(initial_window_size(&config), expected);
    }
}
