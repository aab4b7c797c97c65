//! Modal overlays drawn above the carousel screen

/// An overlay on top of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard and mouse reference
    Help,
}

/// Overlays in draw order; only the top one receives input
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    /// Close `modal` if it is on top, open it otherwise
    pub fn toggle(&mut self, modal: Modal) {
        if self.top() == Some(modal) {
            self.stack.pop();
        } else {
            self.stack.push(modal);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut stack = ModalStack::new();

        stack.toggle(Modal::Help);
        assert_eq!(stack.top(), Some(Modal::Help));

        stack.toggle(Modal::Help);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toggle_only_closes_top() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        stack.toggle(Modal::Help);

        let order: Vec<Modal> = stack.iter().copied().collect();
        assert_eq!(order, vec![Modal::Help, Modal::QuitConfirm, Modal::Help]);
    }
}
