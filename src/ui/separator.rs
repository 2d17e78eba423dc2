pub struct Separator;

impl egui::Widget for Separator {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        ui.add(egui::Separator::default().horizontal().spacing(24.0))
    }
}
