use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::events::{EventHub, EventKind, InputEvent, Listener, ListenerId, NodeRef};

/// The three global listeners held while the panel is open. Dropping the
/// guard unregisters all of them.
struct DismissGuard {
    hub: EventHub,
    ids: [ListenerId; 3],
}

impl DismissGuard {
    fn acquire(
        hub: &EventHub,
        state: Weak<RefCell<PanelState>>,
        panel: NodeRef,
        toggle: NodeRef,
    ) -> Self {
        let pointer_state = state.clone();
        let on_pointer: Listener = Rc::new(move |event: &InputEvent| {
            let Some(pos) = event.position() else {
                return;
            };
            if panel.contains(pos) || toggle.contains(pos) {
                return;
            }
            if let Some(state) = pointer_state.upgrade() {
                tracing::debug!(x = pos.x, y = pos.y, "dismissing panel on outside press");
                close(&state);
            }
        });
        let on_key: Listener = Rc::new(move |event: &InputEvent| {
            if *event != InputEvent::KeyDown(egui::Key::Escape) {
                return;
            }
            if let Some(state) = state.upgrade() {
                tracing::debug!("dismissing panel on escape");
                close(&state);
            }
        });

        let ids = [
            hub.add_listener(EventKind::PointerDown, Rc::clone(&on_pointer)),
            hub.add_listener(EventKind::TouchStart, on_pointer),
            hub.add_listener(EventKind::KeyDown, on_key),
        ];
        tracing::trace!(
            listeners = hub.listener_count(),
            "dismiss listeners registered"
        );
        Self {
            hub: hub.clone(),
            ids,
        }
    }
}

impl Drop for DismissGuard {
    fn drop(&mut self) {
        for id in self.ids {
            self.hub.remove_listener(id);
        }
        tracing::trace!(
            listeners = self.hub.listener_count(),
            "dismiss listeners released"
        );
    }
}

#[derive(Default)]
struct PanelState {
    open: bool,
    guard: Option<DismissGuard>,
}

fn close(state: &RefCell<PanelState>) {
    // Release the borrow before the guard's drop touches the hub.
    let guard = {
        let mut s = state.borrow_mut();
        s.open = false;
        s.guard.take()
    };
    drop(guard);
}

/// Open/closed state of the side panel and its dismissal rules.
///
/// While open, a press outside both `panel_ref` and `toggle_ref` or an Escape
/// key closes the panel. The listeners exist exactly while the panel is open
/// and are released when the controller is dropped.
pub struct PanelController {
    state: Rc<RefCell<PanelState>>,
    hub: EventHub,
    panel_ref: NodeRef,
    toggle_ref: NodeRef,
}

impl PanelController {
    pub fn new(hub: &EventHub) -> Self {
        Self {
            state: Rc::new(RefCell::new(PanelState::default())),
            hub: hub.clone(),
            panel_ref: NodeRef::new(),
            toggle_ref: NodeRef::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn panel_ref(&self) -> &NodeRef {
        &self.panel_ref
    }

    pub fn toggle_ref(&self) -> &NodeRef {
        &self.toggle_ref
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn close(&self) {
        if self.is_open() {
            tracing::debug!("closing panel");
        }
        close(&self.state);
    }

    fn open(&self) {
        let mut s = self.state.borrow_mut();
        s.open = true;
        if s.guard.is_none() {
            tracing::debug!("opening panel");
            s.guard = Some(DismissGuard::acquire(
                &self.hub,
                Rc::downgrade(&self.state),
                self.panel_ref.clone(),
                self.toggle_ref.clone(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(w, h))
    }

    fn mounted(hub: &EventHub) -> PanelController {
        let panel = PanelController::new(hub);
        panel.panel_ref().set(rect(0.0, 0.0, 300.0, 600.0));
        panel.toggle_ref().set(rect(310.0, 10.0, 40.0, 40.0));
        panel
    }

    #[test]
    fn starts_closed_without_listeners() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        assert!(!panel.is_open());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn open_registers_each_listener_once() {
        let hub = EventHub::new();
        let panel = mounted(&hub);

        panel.toggle();
        assert!(panel.is_open());
        assert_eq!(hub.count(EventKind::PointerDown), 1);
        assert_eq!(hub.count(EventKind::TouchStart), 1);
        assert_eq!(hub.count(EventKind::KeyDown), 1);

        panel.toggle();
        panel.toggle();
        assert_eq!(hub.listener_count(), 3);

        panel.close();
        assert_eq!(hub.listener_count(), 0);
        panel.close();
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn outside_press_closes() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(800.0, 300.0)));

        assert!(!panel.is_open());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn outside_touch_closes() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();

        hub.dispatch(&InputEvent::TouchStart(egui::pos2(800.0, 300.0)));

        assert!(!panel.is_open());
    }

    #[test]
    fn press_inside_panel_keeps_it_open() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(150.0, 200.0)));

        assert!(panel.is_open());
        assert_eq!(hub.listener_count(), 3);
    }

    #[test]
    fn escape_closes_and_other_keys_do_not() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();

        hub.dispatch(&InputEvent::KeyDown(egui::Key::Enter));
        assert!(panel.is_open());

        hub.dispatch(&InputEvent::KeyDown(egui::Key::Escape));
        assert!(!panel.is_open());
    }

    #[test]
    fn press_on_toggle_then_activation_flips_once() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(330.0, 30.0)));
        assert!(panel.is_open());
        panel.toggle();

        assert!(!panel.is_open());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn popup_regions_count_as_inside() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        panel.panel_ref().include(rect(320.0, 200.0, 200.0, 150.0));

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(400.0, 250.0)));

        assert!(panel.is_open());
    }

    #[test]
    fn containment_follows_regions_changed_after_open() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        panel.panel_ref().set(rect(0.0, 0.0, 100.0, 600.0));

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(150.0, 200.0)));

        assert!(!panel.is_open());
    }

    #[test]
    fn missing_panel_ref_still_honours_toggle_ref() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        panel.panel_ref().detach();

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(330.0, 30.0)));
        assert!(panel.is_open());

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(150.0, 200.0)));
        assert!(!panel.is_open());
    }

    #[test]
    fn missing_toggle_ref_does_not_fault() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        panel.toggle_ref().detach();

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(150.0, 200.0)));
        assert!(panel.is_open());

        hub.dispatch(&InputEvent::PointerDown(egui::pos2(330.0, 30.0)));
        assert!(!panel.is_open());
    }

    #[test]
    fn dropping_while_open_releases_listeners() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        assert_eq!(hub.listener_count(), 3);

        drop(panel);

        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(&InputEvent::KeyDown(egui::Key::Escape)), 0);
        let far_away = InputEvent::PointerDown(egui::pos2(900.0, 900.0));
        assert_eq!(hub.dispatch(&far_away), 0);
    }

    #[test]
    fn reopening_after_dismissal_registers_fresh_listeners() {
        let hub = EventHub::new();
        let panel = mounted(&hub);
        panel.toggle();
        hub.dispatch(&InputEvent::KeyDown(egui::Key::Escape));
        panel.toggle();

        assert!(panel.is_open());
        assert_eq!(hub.listener_count(), 3);
    }
}
