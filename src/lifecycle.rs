use std::cell::{Cell, RefCell};
use std::rc::Weak;

pub trait LifecycleObserver {
    /// The owning scope has been created and restored state is available
    fn on_create(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Initialized,
    Created,
}

/// Dispatches lifecycle events to weakly held observers
pub struct Lifecycle {
    state: Cell<LifecycleState>,
    observers: RefCell<Vec<Weak<dyn LifecycleObserver>>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: Cell::new(LifecycleState::Initialized),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    /// Add an observer. If the lifecycle is already created, the observer is
    /// caught up immediately.
    pub fn add_observer(&self, observer: Weak<dyn LifecycleObserver>) {
        if self.state() == LifecycleState::Created {
            if let Some(observer) = observer.upgrade() {
                observer.on_create();
            }
        }
        self.observers.borrow_mut().push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|x| x.strong_count() > 0)
            .count()
    }

    /// Move to `Created` and notify every live observer
    pub fn dispatch_create(&self) {
        self.state.set(LifecycleState::Created);

        // Observers may add observers while being notified
        let observers = {
            let mut observers = self.observers.borrow_mut();
            observers.retain(|x| x.strong_count() > 0);
            observers.clone()
        };
        debug!("Dispatching create to {} observers", observers.len());
        for observer in observers {
            if let Some(observer) = observer.upgrade() {
                observer.on_create();
            }
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
