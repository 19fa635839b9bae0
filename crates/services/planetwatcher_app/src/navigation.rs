//! Screen stack.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
    ConnectionSettings,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Login => "login",
            Screen::Home => "home",
            Screen::ConnectionSettings => "connection settings",
        };
        f.write_str(name)
    }
}

/// A navigation stack whose root is always the login screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Login],
        }
    }

    pub fn current(&self) -> Screen {
        // The root is never popped.
        self.stack.last().copied().unwrap_or(Screen::Login)
    }

    pub fn push(&mut self, screen: Screen) {
        debug!("navigating from {} to {}", self.current(), screen);
        self.stack.push(screen);
    }

    /// Pops the top screen. Returns `None` when only the root is left.
    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        let screen = self.stack.pop();
        debug!("navigated back to {}", self.current());
        screen
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_login() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Screen::Login);
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn test_push_and_pop() {
        let mut navigator = Navigator::new();
        navigator.push(Screen::Home);
        assert_eq!(navigator.current(), Screen::Home);

        assert_eq!(navigator.pop(), Some(Screen::Home));
        assert_eq!(navigator.current(), Screen::Login);
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut navigator = Navigator::new();
        assert_eq!(navigator.pop(), None);
        assert_eq!(navigator.current(), Screen::Login);
    }
}
