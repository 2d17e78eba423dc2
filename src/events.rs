//! Global input listeners and hit-region references.
//!
//! `EventHub` plays the part of the document-level event target: anything may
//! subscribe to a kind of input event and must unsubscribe with the id it was
//! given. `NodeRef` is a shared pointer to the screen regions one piece of UI
//! occupied on its last paint.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    PointerDown,
    TouchStart,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown(egui::Pos2),
    TouchStart(egui::Pos2),
    KeyDown(egui::Key),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown(_) => EventKind::PointerDown,
            InputEvent::TouchStart(_) => EventKind::TouchStart,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
        }
    }

    pub fn position(&self) -> Option<egui::Pos2> {
        match *self {
            InputEvent::PointerDown(pos) | InputEvent::TouchStart(pos) => Some(pos),
            InputEvent::KeyDown(_) => None,
        }
    }

    /// Maps a raw egui event to the subset the hub dispatches.
    pub fn from_egui(event: &egui::Event) -> Option<Self> {
        match event {
            egui::Event::PointerButton {
                pos,
                pressed: true,
                ..
            } => Some(InputEvent::PointerDown(*pos)),
            egui::Event::Touch {
                phase: egui::TouchPhase::Start,
                pos,
                ..
            } => Some(InputEvent::TouchStart(*pos)),
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => Some(InputEvent::KeyDown(*key)),
            _ => None,
        }
    }
}

pub type Listener = Rc<dyn Fn(&InputEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, EventKind, Listener)>,
}

/// Cloneable handle to one shared listener registry.
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let mut reg = self.registry.borrow_mut();
        let id = ListenerId(reg.next_id);
        reg.next_id += 1;
        reg.listeners.push((id, kind, listener));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut reg = self.registry.borrow_mut();
        let before = reg.listeners.len();
        reg.listeners.retain(|(lid, _, _)| *lid != id);
        reg.listeners.len() != before
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.registry
            .borrow()
            .listeners
            .iter()
            .any(|(lid, _, _)| *lid == id)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    #[cfg(test)]
    pub fn count(&self, kind: EventKind) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }

    /// Invokes every listener registered for the event's kind and returns how
    /// many ran. Listeners may add or remove listeners while running; one
    /// removed earlier in the same dispatch is skipped.
    pub fn dispatch(&self, event: &InputEvent) -> usize {
        let kind = event.kind();
        let matching: Vec<(ListenerId, Listener)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(id, _, listener)| (*id, Rc::clone(listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in matching {
            if !self.is_registered(id) {
                continue;
            }
            listener(event);
            invoked += 1;
        }
        invoked
    }

    /// Dispatches the presses found in the frame's raw input, in order.
    /// Call before painting so hit regions still describe what was clicked.
    pub fn dispatch_input(&self, ctx: &egui::Context) -> usize {
        let events: Vec<InputEvent> =
            ctx.input(|i| i.events.iter().filter_map(InputEvent::from_egui).collect());
        let mut invoked = 0;
        for event in &events {
            let n = self.dispatch(event);
            tracing::trace!(?event, invoked = n, "input dispatched");
            invoked += n;
        }
        invoked
    }
}

/// Shared reference to the regions a subtree covers, or nothing when the
/// subtree is not mounted.
#[derive(Clone, Default)]
pub struct NodeRef {
    regions: Rc<RefCell<Option<Vec<egui::Rect>>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the reference at a single region, dropping any previous ones.
    pub fn set(&self, rect: egui::Rect) {
        *self.regions.borrow_mut() = Some(vec![rect]);
    }

    /// Adds a region to the subtree, e.g. a popup owned by it.
    pub fn include(&self, rect: egui::Rect) {
        self.regions
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(rect);
    }

    /// Keeps the reference mounted but with no regions yet.
    pub fn clear(&self) {
        *self.regions.borrow_mut() = Some(Vec::new());
    }

    pub fn detach(&self) {
        *self.regions.borrow_mut() = None;
    }

    #[cfg(test)]
    pub fn rects(&self) -> Vec<egui::Rect> {
        self.regions.borrow().clone().unwrap_or_default()
    }

    /// Reads the regions as they are right now; an absent subtree contains
    /// nothing.
    pub fn contains(&self, pos: egui::Pos2) -> bool {
        self.regions
            .borrow()
            .as_ref()
            .is_some_and(|rects| rects.iter().any(|r| r.contains(pos)))
    }
}
