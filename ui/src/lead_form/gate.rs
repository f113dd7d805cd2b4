//! One-time widget script loading with a broadcast on completion.
//!
//! The first caller triggers the injection; everyone who asks while the
//! script is still loading is queued and woken when it finishes; later callers
//! run straight away. Nothing is cancelled and there is no timeout: if the
//! script never loads, the queued callbacks simply never run.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use dioxus::logger::tracing::debug;

pub type ReadyCallback = Box<dyn FnOnce()>;

/// Identity of the widget's `<script>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub id: String,
    pub src: String,
    /// Global the script defines once it has finished loading.
    pub global: String,
}

/// Page side of the gate: puts the script on the page and calls `on_load`
/// once it is usable.
pub trait ScriptHost {
    fn inject(&self, tag: &ScriptTag, on_load: ReadyCallback);
}

#[derive(Default)]
enum GateState {
    #[default]
    Idle,
    Loading(Vec<ReadyCallback>),
    Ready,
}

/// Cheap-to-clone handle; clones share the same state.
#[derive(Clone, Default)]
pub struct WidgetGate {
    state: Rc<RefCell<GateState>>,
}

impl WidgetGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once the widget script is loaded, injecting it if this
    /// is the first request.
    pub fn ensure_loaded<H>(&self, host: &H, tag: &ScriptTag, callback: ReadyCallback)
    where
        H: ScriptHost + ?Sized,
    {
        let mut state = self.state.borrow_mut();
        if matches!(*state, GateState::Ready) {
            drop(state);
            callback();
            return;
        }
        if let GateState::Loading(waiters) = &mut *state {
            waiters.push(callback);
            debug!(waiters = waiters.len(), "[lead-form] queued behind pending script load");
            return;
        }

        *state = GateState::Loading(vec![callback]);
        drop(state);

        debug!(id = %tag.id, src = %tag.src, "[lead-form] injecting widget script");
        let gate = self.clone();
        host.inject(tag, Box::new(move || gate.complete()));
    }

    /// Mark the script as loaded and wake every queued callback in order.
    pub fn complete(&self) {
        let previous = mem::replace(&mut *self.state.borrow_mut(), GateState::Ready);
        if let GateState::Loading(waiters) = previous {
            for waiter in waiters {
                waiter();
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), GateState::Ready)
    }

    pub fn pending(&self) -> usize {
        match &*self.state.borrow() {
            GateState::Loading(waiters) => waiters.len(),
            _ => 0,
        }
    }
}

impl std::fmt::Debug for WidgetGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &*self.state.borrow() {
            GateState::Idle => "idle",
            GateState::Loading(_) => "loading",
            GateState::Ready => "ready",
        };
        f.debug_struct("WidgetGate")
            .field("state", &state)
            .field("pending", &self.pending())
            .finish()
    }
}
