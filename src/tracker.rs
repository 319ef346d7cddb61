use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::{
    Bundle, Lifecycle, LifecycleObserver, SavedStateProvider, SavedStateRegistry, Selection,
};

/// Key of the selection in saved state, both as provider key and as the
/// bundle entry holding the identifiers
pub const STATE_SELECTION: &str = "selection";

pub trait Callbacks {
    fn on_selection_changed(&self, restored: bool, from_user: bool);
}

impl<F: Fn(bool, bool)> Callbacks for F {
    fn on_selection_changed(&self, restored: bool, from_user: bool) {
        self(restored, from_user)
    }
}

/// Tracks selected items of a collection view and keeps them across
/// recreation of the owning scope.
///
/// Selection changes are reported through [`Callbacks`]. The restored
/// notification is sent on every create, whether or not anything was restored,
/// so listeners can set up their initial state from it.
pub struct SelectionTracker {
    registry: Option<Rc<SavedStateRegistry>>,
    selection: RefCell<Selection>,
    callbacks: RefCell<Option<Rc<dyn Callbacks>>>,
    ready: Cell<bool>,
}

impl SelectionTracker {
    /// Create a tracker observing `lifecycle` and providing its state to
    /// `registry` under [`STATE_SELECTION`].
    ///
    /// If `lifecycle` is already created, the tracker restores immediately,
    /// before callbacks can be set, so that restored notification is not
    /// delivered.
    pub fn new(
        lifecycle: &Lifecycle,
        registry: &Rc<SavedStateRegistry>,
    ) -> Result<Rc<Self>, String> {
        let tracker = Rc::new(Self {
            registry: Some(registry.clone()),
            ..Self::detached()
        });

        registry.register_provider(
            STATE_SELECTION,
            Rc::downgrade(&tracker) as Weak<dyn SavedStateProvider>,
        )?;
        lifecycle.add_observer(Rc::downgrade(&tracker) as Weak<dyn LifecycleObserver>);

        Ok(tracker)
    }

    /// Create a tracker without a registry. The host persists it with
    /// [`export_state`](Self::export_state) and
    /// [`import_state`](Self::import_state).
    pub fn detached() -> Self {
        Self {
            registry: None,
            selection: RefCell::new(Selection::new()),
            callbacks: RefCell::new(None),
            ready: Cell::new(false),
        }
    }

    pub fn set_callbacks(&self, callbacks: Option<Rc<dyn Callbacks>>) {
        self.callbacks.replace(callbacks);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn toggle(&self, item: i64, from_user: bool) {
        let selected = self.selection.borrow_mut().toggle(item);
        debug!("Item {} {}", item, if selected { "selected" } else { "deselected" });
        self.notify(false, from_user);
    }

    pub fn reset(&self, from_user: bool) {
        self.selection.borrow_mut().clear();
        debug!("Selection reset");
        self.notify(false, from_user);
    }

    pub fn is_selected(&self, item: i64) -> bool {
        self.selection.borrow().contains(&item)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.borrow().len()
    }

    pub fn selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    pub fn selected_items(&self) -> Vec<i64> {
        self.selection.borrow().sorted()
    }

    /// Restore the selection saved by a previous instance, if any, and send
    /// the restored notification
    pub fn on_ready(&self) {
        let snapshot = self
            .registry
            .as_ref()
            .and_then(|registry| registry.consume_restored_state_for_key(STATE_SELECTION));
        self.import_state(snapshot);
    }

    pub fn export_state(&self) -> Bundle {
        let items: Vec<i64> = self.selection.borrow().iter().copied().collect();
        let mut bundle = Bundle::new();
        bundle.put_long_array(STATE_SELECTION, &items);
        debug!("Saving {} selected items", items.len());
        bundle
    }

    /// Replace the selection with `snapshot`. Without a snapshot the current
    /// selection is kept. The restored notification is sent either way.
    pub fn import_state(&self, snapshot: Option<Bundle>) {
        if let Some(bundle) = snapshot {
            let mut selection = self.selection.borrow_mut();
            selection.clear();
            if let Some(items) = bundle.get_long_array(STATE_SELECTION) {
                selection.extend(items);
            }
            info!("Restored {} selected items", selection.len());
        }

        self.ready.set(true);
        self.notify(true, false);
    }

    fn notify(&self, restored: bool, from_user: bool) {
        // Clone out so callbacks may call back into the tracker
        let callbacks = self.callbacks.borrow().clone();
        if let Some(callbacks) = callbacks {
            callbacks.on_selection_changed(restored, from_user);
        }
    }
}

impl LifecycleObserver for SelectionTracker {
    fn on_create(&self) {
        self.on_ready();
    }
}

impl SavedStateProvider for SelectionTracker {
    fn save_state(&self) -> Bundle {
        self.export_state()
    }
}
