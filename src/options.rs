use anyhow::anyhow;

use crate::params::{ArticleParams, ParamKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One selectable choice for an article field.
pub struct ParamOption {
    pub value: &'static str,
    pub label: &'static str,
    pub class_name: Option<&'static str>,
}

const fn option(
    value: &'static str,
    label: &'static str,
    class_name: &'static str,
) -> ParamOption {
    ParamOption {
        value,
        label,
        class_name: Some(class_name),
    }
}

pub const FONT_FAMILY_OPTIONS: [ParamOption; 5] = [
    option("Open Sans", "Open Sans", "open-sans"),
    option("Ubuntu", "Ubuntu", "ubuntu"),
    option("Cormorant Garamond", "Cormorant Garamond", "cormorant"),
    option("Days One", "Days One", "days-one"),
    option("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: [ParamOption; 3] = [
    option("18px", "18px", "font-size-18"),
    option("25px", "25px", "font-size-25"),
    option("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: [ParamOption; 9] = [
    option("#000000", "Black", "font-black"),
    option("#FFFFFF", "White", "font-white"),
    option("#C4C4C4", "Gray", "font-gray"),
    option("#FEAFE8", "Pink", "font-pink"),
    option("#FD24AF", "Fuchsia", "font-fuchsia"),
    option("#FFC802", "Yellow", "font-yellow"),
    option("#80D994", "Green", "font-green"),
    option("#6FC1FD", "Blue", "font-blue"),
    option("#5F00FF", "Purple", "font-purple"),
];

pub const BACKGROUND_COLORS: [ParamOption; 9] = [
    option("#FFFFFF", "White", "bg-white"),
    option("#000000", "Black", "bg-black"),
    option("#C4C4C4", "Gray", "bg-gray"),
    option("#FEAFE8", "Pink", "bg-pink"),
    option("#FD24AF", "Fuchsia", "bg-fuchsia"),
    option("#FFC802", "Yellow", "bg-yellow"),
    option("#80D994", "Green", "bg-green"),
    option("#6FC1FD", "Blue", "bg-blue"),
    option("#5F00FF", "Purple", "bg-purple"),
];

pub const CONTENT_WIDTH_OPTIONS: [ParamOption; 2] = [
    option("1394px", "Wide", "width-wide"),
    option("948px", "Narrow", "width-narrow"),
];

/// Configuration used on first start and restored by the form's reset action.
pub const DEFAULT_PARAMS: ArticleParams = ArticleParams {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: FONT_COLORS[0],
    background_color: BACKGROUND_COLORS[0],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

/// Ordered choices offered for `key`.
pub fn options_for(key: ParamKey) -> &'static [ParamOption] {
    match key {
        ParamKey::FontFamily => &FONT_FAMILY_OPTIONS,
        ParamKey::FontSize => &FONT_SIZE_OPTIONS,
        ParamKey::FontColor => &FONT_COLORS,
        ParamKey::BackgroundColor => &BACKGROUND_COLORS,
        ParamKey::ContentWidth => &CONTENT_WIDTH_OPTIONS,
    }
}

/// Looks up an option by its value, case-insensitively.
pub fn find_option(key: ParamKey, value: &str) -> anyhow::Result<ParamOption> {
    let wanted = value.trim();
    options_for(key)
        .iter()
        .find(|opt| opt.value.eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| anyhow!("unknown {} option '{}'", key.name(), value))
}

/// Parses a CSS pixel length such as `"18px"`.
pub fn parse_px(value: &str) -> anyhow::Result<f32> {
    let raw = value.trim();
    let number = raw
        .strip_suffix("px")
        .ok_or_else(|| anyhow!("expected a px length, got '{}'", value))?;
    let px: f32 = number.trim().parse()?;
    if !px.is_finite() || px <= 0.0 {
        return Err(anyhow!("px length must be positive, got '{}'", value));
    }
    Ok(px)
}

/// Parses a `#RRGGBB` colour.
pub fn parse_color(value: &str) -> anyhow::Result<egui::Color32> {
    egui::Color32::from_hex(value.trim())
        .map_err(|err| anyhow!("invalid colour '{}': {:?}", value, err))
}
