use crate::options::ParamOption;

/// Dropdown over a fixed list of options.
pub struct Select<'a> {
    options: &'static [ParamOption],
    selected: ParamOption,
    title: &'a str,
}

pub struct SelectResponse {
    pub response: egui::Response,
    /// Whole area of the open dropdown, frame included, if it was painted
    /// this frame.
    pub popup_rect: Option<egui::Rect>,
}

impl<'a> Select<'a> {
    pub fn new(options: &'static [ParamOption], selected: ParamOption, title: &'a str) -> Self {
        Self {
            options,
            selected,
            title,
        }
    }

    pub fn show(
        self,
        ui: &mut egui::Ui,
        mut on_change: impl FnMut(ParamOption),
    ) -> SelectResponse {
        super::field_title(ui, self.title);
        let inner = egui::ComboBox::from_id_salt(self.title)
            .selected_text(self.selected.label)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                let mut picked = None;
                for opt in self.options {
                    let is_selected = opt.value == self.selected.value;
                    if ui.selectable_label(is_selected, opt.label).clicked() && !is_selected {
                        picked = Some(*opt);
                    }
                }
                (picked, ui.layer_id().id, ui.min_rect())
            });

        let popup_rect = inner.inner.map(|(picked, area_id, content)| {
            if let Some(opt) = picked {
                on_change(opt);
            }
            // The list lives in its own area; its rect includes the frame margin.
            ui.ctx()
                .memory(|mem| mem.area_rect(area_id))
                .unwrap_or(content)
        });
        SelectResponse {
            response: inner.response,
            popup_rect,
        }
    }
}
