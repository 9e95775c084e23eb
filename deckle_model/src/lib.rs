use std::hash::BuildHasherDefault;

use element::{Element, ElementId, ElementInner, ElementRef};
use emath::Pos2;
use indexmap::IndexMap;
use prehash::Passthru;
use serde::{Deserialize, Serialize};
use slide::{Slide, SlideId};

pub mod color;
pub mod element;
pub mod slide;

/// The root of a presentation.
///
/// Slides are kept in presentation order, and every slide and element
/// receives an id from counters owned by the deck. Ids are never reused,
/// so a stale [`ElementRef`] resolves to nothing instead of to a
/// different element.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct Deck {
    pub slides: IndexMap<SlideId, Slide, BuildHasherDefault<Passthru>>,
    next_slide_id: u64,
    next_element_id: u64,
}

impl Deck {
    /// A deck holding a single empty slide, the state a fresh editor opens with
    pub fn with_blank_slide() -> Self {
        let mut deck = Self::default();
        deck.push_slide(Slide::default());
        deck
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn push_slide(&mut self, slide: Slide) -> SlideId {
        let id = SlideId(self.next_slide_id);
        self.next_slide_id += 1;
        self.slides.insert(id, slide);
        id
    }

    pub fn allocate_element_id(&mut self) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        id
    }

    pub fn slide_at(&self, index: usize) -> Option<(SlideId, &Slide)> {
        self.slides.get_index(index).map(|(id, slide)| (*id, slide))
    }

    pub fn slide_at_mut(&mut self, index: usize) -> Option<(SlideId, &mut Slide)> {
        self.slides
            .get_index_mut(index)
            .map(|(id, slide)| (*id, slide))
    }

    /// Places a new element on the slide at `index`
    pub fn insert_element(
        &mut self,
        index: usize,
        pos: Pos2,
        inner: ElementInner,
    ) -> Option<ElementRef> {
        let id = self.allocate_element_id();
        let (slide_id, slide) = self.slide_at_mut(index)?;
        slide.elements.insert(id, Element::new(id, pos, inner));
        Some(ElementRef {
            slide: slide_id,
            element: id,
        })
    }

    pub fn element(&self, target: ElementRef) -> Option<&Element> {
        self.slides.get(&target.slide)?.elements.get(&target.element)
    }

    pub fn element_mut(&mut self, target: ElementRef) -> Option<&mut Element> {
        self.slides
            .get_mut(&target.slide)?
            .elements
            .get_mut(&target.element)
    }

    /// Finds the slide owning `element`
    pub fn locate(&self, element: ElementId) -> Option<ElementRef> {
        self.slides
            .iter()
            .find(|(_, slide)| slide.elements.contains_key(&element))
            .map(|(slide, _)| ElementRef {
                slide: *slide,
                element,
            })
    }

    /// Appends a deep copy of the slide at `index`.
    ///
    /// Every copied element gets a fresh id and loses its selection
    /// marker. Behavior attached to the originals (dragging, for one)
    /// is not part of the data and has to be attached to the copies
    /// by the caller.
    pub fn duplicate(&mut self, index: usize) -> Option<SlideId> {
        let (_, source) = self.slide_at(index)?;
        let originals: Vec<Element> = source.elements.values().cloned().collect();

        let mut copy = Slide::default();
        for mut element in originals {
            element.id = self.allocate_element_id();
            element.selected = false;
            copy.elements.insert(element.id, element);
        }

        let elements = copy.elements.len();
        let id = self.push_slide(copy);
        tracing::debug!(index, ?id, elements, "Duplicated slide");
        Some(id)
    }
}
