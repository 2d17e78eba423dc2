use crate::options::ParamOption;

/// Inline group of mutually exclusive radio buttons.
pub struct RadioGroup<'a> {
    options: &'static [ParamOption],
    title: &'a str,
    selected: ParamOption,
    name: &'a str,
}

impl<'a> RadioGroup<'a> {
    pub fn new(
        options: &'static [ParamOption],
        title: &'a str,
        selected: ParamOption,
        name: &'a str,
    ) -> Self {
        Self {
            options,
            title,
            selected,
            name,
        }
    }

    /// Returns the response of the row of buttons, title excluded.
    pub fn show(
        self,
        ui: &mut egui::Ui,
        mut on_change: impl FnMut(ParamOption),
    ) -> egui::Response {
        super::field_title(ui, self.title);
        ui.push_id(self.name, |ui| {
            ui.horizontal(|ui| {
                for opt in self.options {
                    let checked = opt.value == self.selected.value;
                    if ui.radio(checked, opt.label).clicked() && !checked {
                        on_change(*opt);
                    }
                }
            })
            .response
        })
        .inner
    }
}
