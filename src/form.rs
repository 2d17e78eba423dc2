use std::rc::Rc;

use crate::draft::{ApplyParams, DraftState};
use crate::events::{EventHub, NodeRef};
use crate::options::{ParamOption, options_for};
use crate::panel::PanelController;
use crate::params::{ArticleParams, ParamKey};
use crate::ui::{
    ArrowButton, Button, ButtonKind, ButtonVariant, RadioGroup, Select, Separator, Text,
};

const PANEL_WIDTH: f32 = 380.0;
const TOGGLE_MARGIN: f32 = 12.0;
const FORM_TITLE: &str = "Article settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One row of the settings form, top to bottom.
pub enum FormItem {
    Title,
    Select(ParamKey),
    RadioGroup(ParamKey),
    Separator,
    Actions,
}

pub const FORM_LAYOUT: [FormItem; 8] = [
    FormItem::Title,
    FormItem::Select(ParamKey::FontFamily),
    FormItem::RadioGroup(ParamKey::FontSize),
    FormItem::Select(ParamKey::FontColor),
    FormItem::Separator,
    FormItem::Select(ParamKey::BackgroundColor),
    FormItem::Select(ParamKey::ContentWidth),
    FormItem::Actions,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Toggle,
    Changed(ParamKey, ParamOption),
    Submit,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How the panel should be presented; drawing decides what that looks like.
pub struct Presentation {
    pub hidden: bool,
    pub state: PanelState,
}

/// Side panel form that stages article params and applies or resets them.
pub struct ArticleParamsForm {
    panel: PanelController,
    draft: DraftState,
}

impl ArticleParamsForm {
    pub fn new(applied: ArticleParams, apply: ApplyParams, hub: &EventHub) -> Self {
        Self {
            panel: PanelController::new(hub),
            draft: DraftState::new(applied, apply),
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn draft(&self) -> Rc<ArticleParams> {
        self.draft.current()
    }

    pub fn presentation(&self) -> Presentation {
        let state = if self.is_open() {
            PanelState::Open
        } else {
            PanelState::Closed
        };
        Presentation {
            hidden: state == PanelState::Closed,
            state,
        }
    }

    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::Toggle => self.panel.toggle(),
            FormEvent::Changed(key, value) => self.draft.set_field(key, value),
            FormEvent::Submit => self.draft.commit(),
            FormEvent::Reset => self.draft.reset(),
        }
    }

    /// Draws the toggle and, while open, the panel. Must run before the
    /// central panel so the side panel claims its space.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        let presentation = self.presentation();

        let toggle_x = match presentation.state {
            PanelState::Open => PANEL_WIDTH + TOGGLE_MARGIN,
            PanelState::Closed => TOGGLE_MARGIN,
        };
        let toggle = egui::Area::new(egui::Id::new("article_params_toggle"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(toggle_x, TOGGLE_MARGIN))
            .show(ctx, |ui| {
                let arrow = ArrowButton::new(!presentation.hidden);
                arrow.show(ui, || events.push(FormEvent::Toggle))
            });
        self.panel.toggle_ref().set(toggle.inner.rect);

        let panel_ref = self.panel.panel_ref().clone();
        if presentation.hidden {
            panel_ref.detach();
        } else {
            panel_ref.clear();
            let draft = self.draft();
            let panel = egui::SidePanel::left("article_params_panel")
                .resizable(false)
                .exact_width(PANEL_WIDTH)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for item in FORM_LAYOUT {
                            show_item(ui, item, &draft, &panel_ref, &mut events);
                        }
                    });
                });
            panel_ref.include(panel.response.rect);
        }

        for event in events {
            self.handle(event);
        }
    }
}

fn action_event(kind: ButtonKind) -> FormEvent {
    match kind {
        ButtonKind::Submit => FormEvent::Submit,
        ButtonKind::Reset => FormEvent::Reset,
    }
}

fn show_item(
    ui: &mut egui::Ui,
    item: FormItem,
    draft: &ArticleParams,
    panel_ref: &NodeRef,
    events: &mut Vec<FormEvent>,
) -> egui::Response {
    match item {
        FormItem::Title => {
            let response = ui.add(Text::new(800, 31.0, true, FORM_TITLE));
            ui.add_space(24.0);
            response
        }
        FormItem::Select(key) => {
            let select = Select::new(options_for(key), draft.get(key), key.title());
            let shown = select.show(ui, |opt| events.push(FormEvent::Changed(key, opt)));
            if let Some(rect) = shown.popup_rect {
                panel_ref.include(rect);
            }
            ui.add_space(24.0);
            shown.response
        }
        FormItem::RadioGroup(key) => {
            let group = RadioGroup::new(options_for(key), key.title(), draft.get(key), key.name());
            let response = group.show(ui, |opt| events.push(FormEvent::Changed(key, opt)));
            ui.add_space(24.0);
            response
        }
        FormItem::Separator => ui.add(Separator),
        FormItem::Actions => {
            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let reset = Button::new("Reset", ButtonKind::Reset, ButtonVariant::Clear);
                let apply = Button::new("Apply", ButtonKind::Submit, ButtonVariant::Apply);
                let clicked = [reset.show(ui), apply.show(ui)];
                events.extend(clicked.into_iter().flatten().map(action_event));
            })
            .response
        }
    }
}
