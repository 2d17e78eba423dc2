const APPLY_FILL: egui::Color32 = egui::Color32::from_rgb(0x1C, 0x1C, 0x1C);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Submit,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Apply,
    Clear,
}

pub struct Button<'a> {
    title: &'a str,
    kind: ButtonKind,
    variant: ButtonVariant,
}

impl<'a> Button<'a> {
    pub fn new(title: &'a str, kind: ButtonKind, variant: ButtonVariant) -> Self {
        Self {
            title,
            kind,
            variant,
        }
    }

    /// Returns the button's action kind when it was activated this frame.
    pub fn show(self, ui: &mut egui::Ui) -> Option<ButtonKind> {
        let text = egui::RichText::new(self.title.to_uppercase()).strong();
        let button = match self.variant {
            ButtonVariant::Apply => {
                let text = text.color(egui::Color32::WHITE);
                egui::Button::new(text).fill(APPLY_FILL)
            }
            ButtonVariant::Clear => {
                let outline = egui::Stroke::new(1.0, ui.visuals().text_color());
                egui::Button::new(text)
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(outline)
            }
        };
        ui.add(button.min_size(egui::vec2(120.0, 36.0)))
            .clicked()
            .then_some(self.kind)
    }
}
