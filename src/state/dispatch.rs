//! Key dispatch tables.
//!
//! Every page type has its own [`KeyMap`], and all page types share a base
//! map. A [`Controller`] resolves a key with a fixed four-step precedence:
//!
//! 1. the page's binding for the key
//! 2. the base binding for the key
//! 3. the page's [`Binding::Fallback`]
//! 4. the base [`Binding::Fallback`]
//!
//! If nothing matches, the key is ignored. Lookup is a plain table walk, so a
//! page can override a shared key without the base knowing about it, and a
//! page fallback never shadows a base binding for a specific key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::fmt;

/// What the application should do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nothing beyond a redraw.
    Continue,
    /// The cursor was asked to move; pending key repeats may be discarded.
    Moved,
    /// Exit the application.
    Quit,
    /// Close the current page and return to the previous one.
    Back,
    /// Open the listing item at this index.
    Open(usize),
    /// Reload the current page's content.
    Refresh,
}

/// Lookup key of a dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// A key without the control modifier. Shift is folded into the character.
    Key(KeyCode),
    /// Control plus a character.
    Ctrl(char),
    /// Catch-all consulted after specific bindings.
    Fallback,
}

impl Binding {
    /// Shorthand for `Binding::Key(KeyCode::Char(c))`.
    pub const fn char(c: char) -> Self {
        Self::Key(KeyCode::Char(c))
    }
}

impl From<KeyEvent> for Binding {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::Ctrl(c.to_ascii_lowercase())
            }
            code => Self::Key(code),
        }
    }
}

/// Action bound to a key: runs against the page with the triggering key.
pub type Action<P> = fn(&mut P, KeyEvent) -> Outcome;

/// One page type's bindings.
pub struct KeyMap<P> {
    actions: HashMap<Binding, Action<P>>,
}

impl<P> KeyMap<P> {
    /// Empty map.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Bind every binding in `bindings` to `action`, replacing earlier ones.
    pub fn bind(mut self, bindings: &[Binding], action: Action<P>) -> Self {
        for binding in bindings {
            self.actions.insert(*binding, action);
        }
        self
    }

    /// Action bound to `binding` in this map only.
    pub fn get(&self, binding: Binding) -> Option<Action<P>> {
        self.actions.get(&binding).copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the map has no bindings.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<P> Default for KeyMap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for KeyMap<P> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<P> fmt::Debug for KeyMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.actions.keys()).finish()
    }
}

fn ignore<P>(_page: &mut P, _key: KeyEvent) -> Outcome {
    Outcome::Continue
}

/// Resolves keys for one page type against its own map and the base map.
#[derive(Debug, Clone)]
pub struct Controller<P> {
    page: KeyMap<P>,
    base: KeyMap<P>,
}

impl<P> Controller<P> {
    /// Controller over a page map and the shared base map.
    pub fn new(page: KeyMap<P>, base: KeyMap<P>) -> Self {
        Self { page, base }
    }

    /// The action `binding` resolves to, if any.
    pub fn resolve(&self, binding: Binding) -> Option<Action<P>> {
        self.page
            .get(binding)
            .or_else(|| self.base.get(binding))
            .or_else(|| self.page.get(Binding::Fallback))
            .or_else(|| self.base.get(Binding::Fallback))
    }

    /// Run the action for `key` against `page`; unbound keys are ignored.
    pub fn trigger(&self, page: &mut P, key: KeyEvent) -> Outcome {
        let action = self.resolve(Binding::from(key)).unwrap_or(ignore::<P>);
        action(page, key)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
