use std::collections::HashSet;

use deckle_model::{
    element::{ElementId, ElementRef},
    Deck,
};
use emath::{Pos2, Vec2};

/// Pointer-drag repositioning.
///
/// Elements opt in through [`DragController::attach`]. A drag session
/// lives here rather than on the element, so pointer moves keep
/// arriving even after the pointer has outrun the element's bounds.
#[derive(Default, Debug)]
pub struct DragController {
    attached: HashSet<ElementId, ahash::RandomState>,
    session: Option<DragSession>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: ElementRef,
    /// Pointer position minus the element's top left corner at pointer-down
    pub offset: Vec2,
}

impl DragController {
    /// Makes `element` draggable. Returns `false` if it already was, in
    /// which case nothing changes.
    pub fn attach(&mut self, element: ElementId) -> bool {
        let attached = self.attached.insert(element);
        if !attached {
            tracing::trace!(?element, "Element is already draggable");
        }
        attached
    }

    pub fn is_attached(&self, element: ElementId) -> bool {
        self.attached.contains(&element)
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts a session if `target` is draggable and still exists
    pub fn pointer_down(&mut self, deck: &Deck, target: ElementRef, pointer: Pos2) -> bool {
        if !self.is_attached(target.element) {
            return false;
        }
        let Some(element) = deck.element(target) else {
            return false;
        };

        let offset = pointer - element.pos;
        tracing::trace!(?target, ?offset, "Drag started");
        self.session = Some(DragSession { target, offset });
        true
    }

    /// Moves the dragged element under the pointer. Returns whether
    /// anything moved.
    pub fn pointer_move(&mut self, deck: &mut Deck, pointer: Pos2) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        let Some(element) = deck.element_mut(session.target) else {
            // The element went away mid drag
            self.session = None;
            return false;
        };

        element.pos = pointer - session.offset;
        true
    }

    pub fn pointer_up(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use deckle_model::element::ElementInner;
    use pretty_assertions::assert_eq;

    use super::*;

    fn deck_with_element() -> (Deck, ElementRef) {
        let mut deck = Deck::with_blank_slide();
        let target = deck
            .insert_element(0, Pos2::new(50.0, 50.0), ElementInner::default())
            .unwrap();
        (deck, target)
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let (mut deck, target) = deck_with_element();
        let mut drag = DragController::default();
        drag.attach(target.element);

        assert!(drag.pointer_down(&deck, target, Pos2::new(60.0, 55.0)));
        assert_eq!(drag.session().unwrap().offset, Vec2::new(10.0, 5.0));
        assert!(drag.pointer_move(&mut deck, Pos2::new(200.0, 100.0)));
        assert_eq!(deck.element(target).unwrap().pos, Pos2::new(190.0, 95.0));

        assert!(drag.pointer_up().is_some());
        assert!(!drag.pointer_move(&mut deck, Pos2::new(0.0, 0.0)));
        assert_eq!(deck.element(target).unwrap().pos, Pos2::new(190.0, 95.0));
    }

    #[test]
    fn unattached_elements_stay_put() {
        let (mut deck, target) = deck_with_element();
        let mut drag = DragController::default();

        assert!(!drag.pointer_down(&deck, target, Pos2::new(60.0, 60.0)));
        assert!(!drag.pointer_move(&mut deck, Pos2::new(300.0, 300.0)));
        assert_eq!(deck.element(target).unwrap().pos, Pos2::new(50.0, 50.0));
    }

    #[test]
    fn attaching_twice_moves_once() {
        let (mut deck, target) = deck_with_element();
        let mut drag = DragController::default();
        assert!(drag.attach(target.element));
        assert!(!drag.attach(target.element));

        drag.pointer_down(&deck, target, Pos2::new(50.0, 50.0));
        drag.pointer_move(&mut deck, Pos2::new(70.0, 80.0));
        assert_eq!(deck.element(target).unwrap().pos, Pos2::new(70.0, 80.0));
    }

    #[test]
    fn vanished_element_ends_session() {
        let (mut deck, target) = deck_with_element();
        let mut drag = DragController::default();
        drag.attach(target.element);
        drag.pointer_down(&deck, target, Pos2::new(50.0, 50.0));

        deck.slides[0].elements.clear();

        assert!(!drag.pointer_move(&mut deck, Pos2::new(10.0, 10.0)));
        assert_eq!(drag.session(), None);
    }
}
