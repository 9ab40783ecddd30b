use std::path::Path;

use eframe::egui;
use fader_core::{settings::SlideshowConfig, slideshow::Slideshow};
use fader_hal_egui::{
    platform::font::{FontHandle, load_font},
    render::slide::SlideRenderer,
};
use log::{LevelFilter, info, warn};

use viewer::Viewer;

#[path = "main/loading.rs"]
mod loading;
#[path = "main/viewer.rs"]
mod viewer;

const TITLE: &str = "Viewer";
const FONT_FAMILY: &str = "Heir of Light OTF";
const TEXT_PATH: &str = match option_env!("FADER_TEXT_PATH") {
    Some(path) => path,
    None => "news.txt",
};
const FONT_PATH: &str = match option_env!("FADER_FONT_PATH") {
    Some(path) => path,
    None => "HeirofLightOTFRegular.otf",
};

fn main() -> eframe::Result {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("boot: fader starting");

    let config = SlideshowConfig::default();
    let text = loading::load_text_or_placeholder(Path::new(TEXT_PATH));
    let slideshow = Slideshow::from_text(&text, config);
    info!(
        "boot: {} chars per line, {} lines queued after first page",
        config.max_chars_per_line(),
        slideshow.remaining_lines()
    );

    let font = match load_font(Path::new(FONT_PATH), FONT_FAMILY) {
        Ok(font) => font,
        Err(err) => {
            warn!("font: {} unavailable ({}); using default face", FONT_PATH, err);
            FontHandle::fallback()
        }
    };
    info!("font: drawing with '{}'", font.name());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([config.screen_width as f32, config.screen_height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| {
            font.install(&cc.egui_ctx);
            let renderer = SlideRenderer::new(*slideshow.config(), font);
            Ok(Box::new(Viewer::new(slideshow, renderer)))
        }),
    )
}
