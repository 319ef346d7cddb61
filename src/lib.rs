//! ```
//! use multi_selection::{Lifecycle, SavedStateRegistry, SelectionTracker};
//! use std::rc::Rc;
//!
//! let lifecycle = Lifecycle::new();
//! let registry = Rc::new(SavedStateRegistry::new());
//! let tracker = SelectionTracker::new(&lifecycle, &registry)?;
//! lifecycle.dispatch_create();
//!
//! tracker.toggle(5, true);
//! assert!(tracker.is_selected(5));
//!
//! // Recreate from saved state
//! let saved = registry.save();
//! drop(tracker);
//! let lifecycle = Lifecycle::new();
//! let registry = Rc::new(SavedStateRegistry::new());
//! registry.restore(saved);
//! let tracker = SelectionTracker::new(&lifecycle, &registry)?;
//! lifecycle.dispatch_create();
//! assert_eq!(tracker.selected_items(), vec![5]);
//! # Ok::<(), String>(())
//! ```

#[macro_use]
extern crate log;

mod bundle;
mod lifecycle;
mod saved_state;
mod selection;
mod state_file;
mod tracker;

pub use crate::{
    bundle::*, lifecycle::*, saved_state::*, selection::*, state_file::*, tracker::*,
};
