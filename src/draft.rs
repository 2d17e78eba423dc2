use std::rc::Rc;

use crate::options::{DEFAULT_PARAMS, ParamOption};
use crate::params::{ArticleParams, ParamKey};

/// Host-supplied setter for the applied configuration.
pub type ApplyParams = Box<dyn FnMut(ArticleParams)>;

/// Staged edits that have not been pushed to the host yet.
///
/// The draft lives independently of panel visibility: closing and reopening
/// the panel keeps whatever was staged until it is applied or reset.
pub struct DraftState {
    current: Rc<ArticleParams>,
    apply: ApplyParams,
}

impl DraftState {
    pub fn new(applied: ArticleParams, apply: ApplyParams) -> Self {
        Self {
            current: Rc::new(applied),
            apply,
        }
    }

    /// Current draft. Every edit swaps in a new allocation, so `Rc::ptr_eq`
    /// against an earlier snapshot tells whether anything changed.
    pub fn current(&self) -> Rc<ArticleParams> {
        Rc::clone(&self.current)
    }

    pub fn set_field(&mut self, key: ParamKey, value: ParamOption) {
        tracing::trace!(field = key.name(), value = value.value, "draft edit");
        self.current = Rc::new(self.current.with_field(key, value));
    }

    /// Pushes the draft to the host verbatim. The draft itself is kept.
    pub fn commit(&mut self) {
        tracing::debug!(params = ?self.current, "applying draft");
        (self.apply)(*self.current);
    }

    /// Sets both the host configuration and the draft to the defaults.
    pub fn reset(&mut self) {
        tracing::debug!("resetting article params to defaults");
        (self.apply)(DEFAULT_PARAMS);
        self.current = Rc::new(DEFAULT_PARAMS);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::options::{CONTENT_WIDTH_OPTIONS, FONT_COLORS, FONT_SIZE_OPTIONS};

    fn recording(initial: ArticleParams) -> (DraftState, Rc<RefCell<Vec<ArticleParams>>>) {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&applied);
        let draft = DraftState::new(initial, Box::new(move |p| sink.borrow_mut().push(p)));
        (draft, applied)
    }

    #[test]
    fn set_field_swaps_in_a_new_value() {
        let (mut draft, applied) = recording(DEFAULT_PARAMS);
        let before = draft.current();

        draft.set_field(ParamKey::FontSize, FONT_SIZE_OPTIONS[1]);

        let after = draft.current();
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(*before, DEFAULT_PARAMS);
        let expected = DEFAULT_PARAMS.with_field(ParamKey::FontSize, FONT_SIZE_OPTIONS[1]);
        assert_eq!(*after, expected);
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn commit_pushes_the_draft_and_keeps_it() {
        let (mut draft, applied) = recording(DEFAULT_PARAMS);
        draft.set_field(ParamKey::FontColor, FONT_COLORS[4]);
        draft.set_field(ParamKey::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);
        let staged = *draft.current();

        draft.commit();

        assert_eq!(applied.borrow().as_slice(), &[staged]);
        assert_eq!(*draft.current(), staged);
    }

    #[test]
    fn reset_restores_defaults_on_both_sides() {
        let start = DEFAULT_PARAMS
            .with_field(ParamKey::FontSize, FONT_SIZE_OPTIONS[2])
            .with_field(ParamKey::FontColor, FONT_COLORS[3]);
        let (mut draft, applied) = recording(start);
        draft.set_field(ParamKey::ContentWidth, CONTENT_WIDTH_OPTIONS[1]);

        draft.reset();

        assert_eq!(applied.borrow().as_slice(), &[DEFAULT_PARAMS]);
        assert_eq!(*draft.current(), DEFAULT_PARAMS);
    }

    #[test]
    fn draft_starts_from_the_applied_configuration() {
        let start = DEFAULT_PARAMS.with_field(ParamKey::FontSize, FONT_SIZE_OPTIONS[1]);
        let (draft, _) = recording(start);
        assert_eq!(*draft.current(), start);
    }
}
