//! Leaf widgets used by the article params form.

mod arrow_button;
mod button;
mod radio_group;
mod select;
mod separator;
mod text;

pub use arrow_button::ArrowButton;
pub use button::{Button, ButtonKind, ButtonVariant};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;
pub use text::Text;

/// Small caption shown above a field input.
fn field_title(ui: &mut egui::Ui, title: &str) {
    let caption = title.to_uppercase();
    ui.label(egui::RichText::new(caption).strong().size(12.0));
    ui.add_space(4.0);
}
