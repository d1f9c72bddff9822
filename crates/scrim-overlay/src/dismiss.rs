#![forbid(unsafe_code)]

//! Document-scope dismissal key bindings.
//!
//! An open overlay listens for its dismissal key at document scope, because
//! focus may be anywhere inside the overlay or nowhere at all. While the
//! overlay is closed the binding must be *detached*, not merely ignored:
//! a detached binding cannot fire for an unrelated overlay and cannot leak
//! across rapid open/close cycles.
//!
//! [`DismissBindings`] is that binding set. Attach is deduplicating, so no
//! sequence of open/close transitions can accumulate stale entries, and
//! [`active_count`](DismissBindings::active_count) makes leak assertions a
//! one-liner in tests.

use scrim_core::event::{KeyCode, KeyEvent, KeyEventKind};

/// The set of currently attached dismissal key bindings.
#[derive(Debug, Clone, Default)]
pub struct DismissBindings {
    keys: Vec<KeyCode>,
}

impl DismissBindings {
    /// Create an empty binding set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a dismissal key. Attaching an already-attached key is a
    /// no-op, so repeated attach/detach cycles cannot stack bindings.
    pub fn attach(&mut self, key: KeyCode) {
        if !self.keys.contains(&key) {
            self.keys.push(key);
            #[cfg(feature = "tracing")]
            tracing::trace!(?key, "dismissal binding attached");
        }
    }

    /// Detach a dismissal key. Detaching a key that is not attached is a
    /// no-op.
    pub fn detach(&mut self, key: KeyCode) {
        self.keys.retain(|k| *k != key);
        #[cfg(feature = "tracing")]
        tracing::trace!(?key, "dismissal binding detached");
    }

    /// Detach everything.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Number of attached bindings.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.keys.len()
    }

    /// Whether a key event should dismiss.
    ///
    /// Only key presses count; repeats and releases never dismiss (a held
    /// key firing auto-repeat must not re-trigger, and a release delivered
    /// after close must not fire into the next overlay).
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.kind == KeyEventKind::Press && self.keys.contains(&event.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::event::Modifiers;

    #[test]
    fn attach_is_deduplicating() {
        let mut bindings = DismissBindings::new();
        bindings.attach(KeyCode::Escape);
        bindings.attach(KeyCode::Escape);
        bindings.attach(KeyCode::Escape);
        assert_eq!(bindings.active_count(), 1);
    }

    #[test]
    fn detach_removes_the_binding() {
        let mut bindings = DismissBindings::new();
        bindings.attach(KeyCode::Escape);
        bindings.detach(KeyCode::Escape);
        assert_eq!(bindings.active_count(), 0);
        assert!(!bindings.matches(&KeyEvent::new(KeyCode::Escape)));
    }

    #[test]
    fn rapid_cycles_never_accumulate_bindings() {
        let mut bindings = DismissBindings::new();
        for _ in 0..1_000 {
            bindings.attach(KeyCode::Escape);
            bindings.detach(KeyCode::Escape);
        }
        assert_eq!(bindings.active_count(), 0);

        bindings.attach(KeyCode::Escape);
        assert_eq!(bindings.active_count(), 1);
    }

    #[test]
    fn only_presses_match() {
        let mut bindings = DismissBindings::new();
        bindings.attach(KeyCode::Escape);

        assert!(bindings.matches(&KeyEvent::new(KeyCode::Escape)));
        assert!(!bindings.matches(
            &KeyEvent::new(KeyCode::Escape).with_kind(KeyEventKind::Release)
        ));
        assert!(!bindings.matches(
            &KeyEvent::new(KeyCode::Escape).with_kind(KeyEventKind::Repeat)
        ));
    }

    #[test]
    fn modifiers_do_not_block_dismissal() {
        let mut bindings = DismissBindings::new();
        bindings.attach(KeyCode::Escape);
        let event = KeyEvent::new(KeyCode::Escape).with_modifiers(Modifiers::SHIFT);
        assert!(bindings.matches(&event));
    }

    #[test]
    fn unrelated_keys_never_match() {
        let mut bindings = DismissBindings::new();
        bindings.attach(KeyCode::Escape);
        assert!(!bindings.matches(&KeyEvent::new(KeyCode::Enter)));
        assert!(!bindings.matches(&KeyEvent::new(KeyCode::Char('q'))));
    }
}
