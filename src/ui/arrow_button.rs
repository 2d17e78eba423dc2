/// Round toggle that points toward where the panel will move.
pub struct ArrowButton {
    is_open: bool,
}

impl ArrowButton {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }

    pub fn show(self, ui: &mut egui::Ui, on_activate: impl FnOnce()) -> egui::Response {
        let (glyph, hint) = if self.is_open {
            ("◀", "Close article settings")
        } else {
            ("▶", "Open article settings")
        };
        let button = egui::Button::new(egui::RichText::new(glyph).size(18.0))
            .corner_radius(20.0)
            .min_size(egui::vec2(40.0, 40.0));
        let response = ui.add(button).on_hover_text(hint);
        if response.clicked() {
            on_activate();
        }
        response
    }
}
