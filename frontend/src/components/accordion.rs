use std::rc::Rc;
use yew::prelude::*;

/// Which FAQ entry is expanded. At most one is open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl Default for AccordionState {
    // First entry starts expanded.
    fn default() -> Self {
        Self { open: Some(0) }
    }
}

impl AccordionState {
    pub fn collapsed() -> Self {
        Self { open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open entry collapses it, clicking any other one opens it
    /// and closes the previous.
    pub fn toggled(self, index: usize) -> Self {
        if self.is_open(index) {
            Self::collapsed()
        } else {
            Self { open: Some(index) }
        }
    }
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) => {
                let next = self.toggled(index);
                log::debug!("FAQ entry {} clicked, now open: {:?}", index, next.open_index());
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_open_initially() {
        let state = AccordionState::default();
        assert_eq!(state.open_index(), Some(0));
        assert!(state.is_open(0));
        assert!((1..5).all(|i| !state.is_open(i)));
    }

    #[test]
    fn toggling_open_entry_collapses_all() {
        for i in 0..5 {
            let state = AccordionState::collapsed().toggled(i);
            assert_eq!(state.toggled(i).open_index(), None);
        }
    }

    #[test]
    fn toggling_other_entry_moves_selection() {
        let state = AccordionState::default().toggled(2);
        assert_eq!(state.open_index(), Some(2));
        assert!(!state.is_open(0));
    }

    #[test]
    fn triple_toggle_reopens() {
        let state = AccordionState::default().toggled(3).toggled(3).toggled(3);
        assert_eq!(state.open_index(), Some(3));
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [4, 1, 1, 0, 2, 2, 2, 3, 0, 0];
        let mut state = AccordionState::default();
        for i in clicks {
            state = state.toggled(i);
            assert!((0..5).filter(|&j| state.is_open(j)).count() <= 1);
        }
    }

    #[test]
    fn reducer_applies_toggle() {
        let state = Rc::new(AccordionState::default());
        let state = state.reduce(AccordionAction::Toggle(0));
        assert_eq!(state.open_index(), None);
        let state = state.reduce(AccordionAction::Toggle(4));
        assert_eq!(state.open_index(), Some(4));
    }
}
