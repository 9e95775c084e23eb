use deckle_model::{
    element::{ElementInner, ElementRef},
    slide::{Slide, SlideId},
    Deck,
};
use emath::Pos2;

use crate::drag::DragController;

/// The ordered slides of a deck and which one is active.
///
/// The deck is never empty and `active` always indexes into it.
/// Every change of the active slide goes through [`Self::show`], which
/// keeps the visible slide and the indicator text in step with it.
#[derive(Debug)]
pub struct SlideCollection {
    deck: Deck,
    active: usize,
    display: SlideDisplay,
}

/// What the screen shows of the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDisplay {
    pub visible: SlideId,
    /// `Slide i of N`, one based
    pub indicator: String,
}

impl Default for SlideCollection {
    fn default() -> Self {
        Self::new(Deck::with_blank_slide())
    }
}

impl SlideCollection {
    /// Wraps `deck`, adding a blank slide if it has none
    pub fn new(mut deck: Deck) -> Self {
        if deck.is_empty() {
            deck.push_slide(Slide::default());
        }
        let display = SlideDisplay::of(&deck, 0);
        Self {
            deck,
            active: 0,
            display,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.deck.len()
    }

    pub fn display(&self) -> &SlideDisplay {
        &self.display
    }

    pub fn active_slide(&self) -> (SlideId, &Slide) {
        self.deck
            .slide_at(self.active)
            .expect("active index is always in bounds")
    }

    pub fn add_slide(&mut self) -> SlideId {
        let id = self.deck.push_slide(Slide::default());
        self.show(self.count() - 1);
        id
    }

    /// Appends a copy of the active slide and makes it active. The copied
    /// elements are new entities, so dragging is attached to each of them
    /// here; nothing about it carries over from the originals.
    pub fn duplicate_slide(&mut self, drag: &mut DragController) -> SlideId {
        let id = self
            .deck
            .duplicate(self.active)
            .expect("active index is always in bounds");
        if let Some(copy) = self.deck.slides.get(&id) {
            for element in copy.elements.keys() {
                drag.attach(*element);
            }
        }
        self.show(self.count() - 1);
        id
    }

    /// Shows the slide at `index`, wrapping around past either end
    pub fn go_to(&mut self, index: usize) {
        self.show(index % self.count());
    }

    pub fn next(&mut self) {
        let index = if self.active + 1 < self.count() {
            self.active + 1
        } else {
            0
        };
        self.show(index);
    }

    pub fn prev(&mut self) {
        let index = if self.active > 0 {
            self.active - 1
        } else {
            self.count() - 1
        };
        self.show(index);
    }

    /// Places a new element on the active slide
    pub fn insert_element(&mut self, pos: Pos2, inner: ElementInner) -> ElementRef {
        self.deck
            .insert_element(self.active, pos, inner)
            .expect("active index is always in bounds")
    }

    fn show(&mut self, index: usize) {
        self.active = index;
        self.display = SlideDisplay::of(&self.deck, index);
        tracing::debug!(indicator = %self.display.indicator, "Showing slide");
    }
}

impl SlideDisplay {
    fn of(deck: &Deck, index: usize) -> Self {
        Self {
            visible: deck
                .slide_at(index)
                .expect("active index is always in bounds")
                .0,
            indicator: format!("Slide {} of {}", index + 1, deck.len()),
        }
    }
}
