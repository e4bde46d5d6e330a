// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification for markers.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::interval_marker::IntervalMarker;

/// Handle returned when a change listener is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Sent to listeners after a marker has been mutated.
#[derive(Clone, Copy, Debug)]
pub struct MarkerChangeEvent<'a> {
    marker: &'a IntervalMarker,
}

impl<'a> MarkerChangeEvent<'a> {
    pub(crate) fn new(marker: &'a IntervalMarker) -> Self {
        Self { marker }
    }

    /// The marker that changed, in its post-change state.
    pub fn marker(&self) -> &'a IntervalMarker {
        self.marker
    }
}

type Listener = Box<dyn Fn(&MarkerChangeEvent<'_>)>;

/// Ordered listener registry.
#[derive(Default)]
pub(crate) struct ChangeListeners {
    next_id: u64,
    entries: SmallVec<[(ListenerId, Listener); 2]>,
}

impl ChangeListeners {
    pub(crate) fn add(&mut self, listener: impl Fn(&MarkerChangeEvent<'_>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let Some(index) = self.entries.iter().position(|(got, _)| *got == id) else {
            return false;
        };
        drop(self.entries.remove(index));
        true
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(got, _)| *got == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Calls every listener in registration order.
    pub(crate) fn notify(&self, event: &MarkerChangeEvent<'_>) {
        for (_, listener) in &self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::*;

    #[test]
    fn listeners_run_in_registration_order() {
        let marker = IntervalMarker::new(1.0, 2.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = ChangeListeners::default();
        for tag in 0..3 {
            let seen = Rc::clone(&seen);
            listeners.add(move |_| seen.borrow_mut().push(tag));
        }
        listeners.notify(&MarkerChangeEvent::new(&marker));
        assert_eq!(*seen.borrow(), [0, 1, 2]);
    }

    #[test]
    fn removed_listeners_are_not_called() {
        let marker = IntervalMarker::new(1.0, 2.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = ChangeListeners::default();
        let a = {
            let seen = Rc::clone(&seen);
            listeners.add(move |_| seen.borrow_mut().push('a'))
        };
        let b = {
            let seen = Rc::clone(&seen);
            listeners.add(move |_| seen.borrow_mut().push('b'))
        };
        assert_ne!(a, b);
        assert!(listeners.remove(a));
        assert!(!listeners.remove(a));
        assert!(!listeners.contains(a));
        assert!(listeners.contains(b));
        assert_eq!(listeners.len(), 1);

        listeners.notify(&MarkerChangeEvent::new(&marker));
        assert_eq!(*seen.borrow(), ['b']);
    }
}
