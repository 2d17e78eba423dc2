use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    article,
    config::AppConfig,
    events::EventHub,
    form::ArticleParamsForm,
    options::FONT_FAMILY_OPTIONS,
    params::ArticleParams,
};

pub struct ArticleApp {
    hub: EventHub,
    applied: Rc<RefCell<ArticleParams>>,
    form: ArticleParamsForm,
    config: AppConfig,
}

impl ArticleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        article::install_font_families(&cc.egui_ctx, &FONT_FAMILY_OPTIONS);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let initial = config.article.resolve();
        tracing::info!(params = ?initial, "starting article preview");

        let hub = EventHub::new();
        let applied = Rc::new(RefCell::new(initial));
        let sink = Rc::clone(&applied);
        let form = ArticleParamsForm::new(
            initial,
            Box::new(move |params| {
                tracing::debug!(params = ?params, "article params applied");
                *sink.borrow_mut() = params;
            }),
            &hub,
        );

        Self {
            hub,
            applied,
            form,
            config,
        }
    }
}

impl eframe::App for ArticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let viewport_rect = ctx.input(|i| i.viewport().inner_rect);

        // Track window size for saving on exit
        if let Some(rect) = viewport_rect {
            self.config.window_width = Some(rect.width());
            self.config.window_height = Some(rect.height());
        }

        // Hit regions still describe last frame's paint, which is what was clicked.
        self.hub.dispatch_input(ctx);

        self.form.show(ctx);

        let applied = *self.applied.borrow();
        article::show(ctx, &applied);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}
