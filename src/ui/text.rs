/// Static label with typographic options.
pub struct Text<'a> {
    weight: u16,
    size: f32,
    uppercase: bool,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(weight: u16, size: f32, uppercase: bool, content: &'a str) -> Self {
        Self {
            weight,
            size,
            uppercase,
            content,
        }
    }
}

impl egui::Widget for Text<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let content = if self.uppercase {
            self.content.to_uppercase()
        } else {
            self.content.to_string()
        };
        let mut rich = egui::RichText::new(content).size(self.size);
        // egui has no numeric weights; anything semibold and up renders strong.
        if self.weight >= 600 {
            rich = rich.strong();
        }
        ui.add(egui::Label::new(rich).wrap())
    }
}
