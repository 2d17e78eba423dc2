use crate::options::ParamOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Names one of the five article presentation fields.
pub enum ParamKey {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ParamKey {
    pub const ALL: [ParamKey; 5] = [
        ParamKey::FontFamily,
        ParamKey::FontSize,
        ParamKey::FontColor,
        ParamKey::BackgroundColor,
        ParamKey::ContentWidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParamKey::FontFamily => "font_family",
            ParamKey::FontSize => "font_size",
            ParamKey::FontColor => "font_color",
            ParamKey::BackgroundColor => "background_color",
            ParamKey::ContentWidth => "content_width",
        }
    }

    /// Heading shown above the field's input.
    pub fn title(self) -> &'static str {
        match self {
            ParamKey::FontFamily => "Font",
            ParamKey::FontSize => "Font size",
            ParamKey::FontColor => "Font color",
            ParamKey::BackgroundColor => "Background color",
            ParamKey::ContentWidth => "Content width",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Presentation options applied to the article.
pub struct ArticleParams {
    pub font_family: ParamOption,
    pub font_size: ParamOption,
    pub font_color: ParamOption,
    pub background_color: ParamOption,
    pub content_width: ParamOption,
}

impl ArticleParams {
    pub fn get(&self, key: ParamKey) -> ParamOption {
        match key {
            ParamKey::FontFamily => self.font_family,
            ParamKey::FontSize => self.font_size,
            ParamKey::FontColor => self.font_color,
            ParamKey::BackgroundColor => self.background_color,
            ParamKey::ContentWidth => self.content_width,
        }
    }

    /// Returns a copy with only `key` replaced.
    pub fn with_field(&self, key: ParamKey, value: ParamOption) -> Self {
        let mut next = *self;
        match key {
            ParamKey::FontFamily => next.font_family = value,
            ParamKey::FontSize => next.font_size = value,
            ParamKey::FontColor => next.font_color = value,
            ParamKey::BackgroundColor => next.background_color = value,
            ParamKey::ContentWidth => next.content_width = value,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DEFAULT_PARAMS, options_for};

    #[test]
    fn with_field_replaces_only_the_targeted_field() {
        for key in ParamKey::ALL {
            for &value in options_for(key) {
                let next = DEFAULT_PARAMS.with_field(key, value);
                assert_eq!(next.get(key), value);
                for other in ParamKey::ALL.into_iter().filter(|k| *k != key) {
                    assert_eq!(next.get(other), DEFAULT_PARAMS.get(other));
                }
            }
        }
    }

    #[test]
    fn with_field_leaves_the_source_untouched() {
        let before = DEFAULT_PARAMS;
        let largest = options_for(ParamKey::FontSize)[2];
        let _ = before.with_field(ParamKey::FontSize, largest);
        assert_eq!(before, DEFAULT_PARAMS);
    }
}
