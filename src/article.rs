use crate::options::{DEFAULT_PARAMS, ParamOption, parse_color, parse_px};
use crate::params::ArticleParams;

const TITLE: &str = "Human-Readable Code";
const PARAGRAPHS: [&str; 3] = [
    "Code is read far more often than it is written. Every name, every line \
     break and every function boundary is a message to the next person who \
     opens the file, and that person is frequently you, six months later.",
    "Readable code does not mean clever code. It means code whose intent is \
     visible at a glance: small functions that do one thing, names that say \
     what a value is rather than how it was computed, and structure that \
     mirrors the problem instead of the history of its fixes.",
    "Typography matters for prose in the same way. The font, its size, the \
     contrast between text and background and the width of the column all \
     decide how long a reader can stay with a page before getting tired.",
];

/// Resolved drawing values for the article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStyle {
    pub family: egui::FontFamily,
    pub size: f32,
    pub text: egui::Color32,
    pub background: egui::Color32,
    pub max_width: f32,
}

impl ArticleStyle {
    pub fn from_params(params: &ArticleParams) -> Self {
        Self {
            family: font_family(params.font_family),
            size: px_or_default(params.font_size, DEFAULT_PARAMS.font_size),
            text: color_or_default(params.font_color, DEFAULT_PARAMS.font_color),
            background: color_or_default(
                params.background_color,
                DEFAULT_PARAMS.background_color,
            ),
            max_width: px_or_default(params.content_width, DEFAULT_PARAMS.content_width),
        }
    }
}

pub fn font_family(option: ParamOption) -> egui::FontFamily {
    egui::FontFamily::Name(option.value.into())
}

fn px_or_default(option: ParamOption, fallback: ParamOption) -> f32 {
    parse_px(option.value).unwrap_or_else(|err| {
        tracing::warn!("{}; using {}", err, fallback.value);
        parse_px(fallback.value).unwrap_or(16.0)
    })
}

fn color_or_default(option: ParamOption, fallback: ParamOption) -> egui::Color32 {
    parse_color(option.value).unwrap_or_else(|err| {
        tracing::warn!("{}; using {}", err, fallback.value);
        parse_color(fallback.value).unwrap_or(egui::Color32::BLACK)
    })
}

/// Registers every font family option so `FontFamily::Name` lookups resolve.
/// They share the built-in proportional fonts.
pub fn install_font_families(ctx: &egui::Context, families: &[ParamOption]) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&egui::FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    for opt in families {
        fonts.families.insert(font_family(*opt), proportional.clone());
    }
    ctx.set_fonts(fonts);
}

/// Left offset that centers a column of `width` inside `available`.
fn column_margin(available: f32, width: f32) -> f32 {
    ((available - width) / 2.0).max(0.0)
}

/// Draws the article in the central panel with the applied params.
pub fn show(ctx: &egui::Context, params: &ArticleParams) {
    let style = ArticleStyle::from_params(params);
    egui::CentralPanel::default()
        .frame(egui::Frame::central_panel(&ctx.style()).fill(style.background))
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("article_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let available = ui.available_width();
                    let width = style.max_width.min(available);
                    ui.horizontal(|ui| {
                        ui.add_space(column_margin(available, width));
                        ui.vertical(|ui| {
                            ui.set_max_width(width);
                            ui.add_space(48.0);
                            ui.label(
                                egui::RichText::new(TITLE)
                                    .family(style.family.clone())
                                    .size(style.size * 2.0)
                                    .color(style.text)
                                    .strong(),
                            );
                            ui.add_space(style.size);
                            for paragraph in PARAGRAPHS {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(paragraph)
                                            .family(style.family.clone())
                                            .size(style.size)
                                            .color(style.text),
                                    )
                                    .wrap(),
                                );
                                ui.add_space(style.size * 0.75);
                            }
                        });
                    });
                });
        });
}
