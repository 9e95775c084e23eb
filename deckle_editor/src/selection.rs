use deckle_model::{
    color,
    element::{Element, ElementInner, ElementKind, ElementRef},
    Deck,
};
use ecolor::Color32;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    TextSelected,
    ImageSelected,
    AudioSelected,
}

impl From<ElementKind> for SelectionState {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Self::TextSelected,
            ElementKind::Image => Self::ImageSelected,
            ElementKind::Audio => Self::AudioSelected,
        }
    }
}

/// The property editor shown for the selection, with its fields
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum InspectorPanel {
    #[default]
    Hidden,
    Text {
        /// Font size in whole pixels
        size: u32,
        /// `#RRGGBB`
        color: String,
    },
    Image {
        /// Width in whole pixels
        size: u32,
    },
    Audio,
}

impl InspectorPanel {
    /// The panel for `element`, with its fields filled from the
    /// element's current properties
    pub fn for_element(element: &Element) -> Self {
        match &element.inner {
            ElementInner::Text {
                font_size, color, ..
            } => Self::Text {
                size: font_size.trunc() as u32,
                color: displayed_color(*color),
            },
            ElementInner::Image { width, .. } => Self::Image {
                size: width.round() as u32,
            },
            ElementInner::Audio { .. } => Self::Audio,
        }
    }

    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            Self::Hidden => None,
            Self::Text { .. } => Some(ElementKind::Text),
            Self::Image { .. } => Some(ElementKind::Image),
            Self::Audio => Some(ElementKind::Audio),
        }
    }
}

/// The color as a color input would show it after reading it back from
/// the computed style
fn displayed_color(stored: Color32) -> String {
    match color::parse_css(&color::css_rgb(stored)) {
        Ok(computed) => color::to_hex(computed),
        Err(error) => {
            tracing::warn!(%error, "Computed color did not parse");
            color::to_hex(stored)
        }
    }
}

/// At most one selected element and the panel shown for it.
///
/// The selection is a weak reference: the deck owns the element, and
/// a reference that no longer resolves reads as unselected. A panel is
/// visible exactly when something is selected.
#[derive(Default, Debug)]
pub struct Selection {
    target: Option<ElementRef>,
    panel: InspectorPanel,
}

impl Selection {
    pub fn target(&self) -> Option<ElementRef> {
        self.target
    }

    pub fn panel(&self) -> &InspectorPanel {
        &self.panel
    }

    pub fn state(&self, deck: &Deck) -> SelectionState {
        self.selected(deck)
            .map(|element| element.kind().into())
            .unwrap_or(SelectionState::Unselected)
    }

    pub fn selected<'a>(&self, deck: &'a Deck) -> Option<&'a Element> {
        deck.element(self.target?)
    }

    pub fn selected_mut<'a>(&self, deck: &'a mut Deck) -> Option<&'a mut Element> {
        deck.element_mut(self.target?)
    }

    /// Moves the selection (and its marker) to `target` and shows the
    /// panel for its kind. Returns `false` without touching anything if
    /// `target` doesn't resolve.
    pub fn select(&mut self, deck: &mut Deck, target: ElementRef) -> bool {
        let Some(panel) = deck.element(target).map(InspectorPanel::for_element) else {
            tracing::trace!(?target, "Ignoring selection of a missing element");
            return false;
        };

        self.clear_marker(deck);
        if let Some(element) = deck.element_mut(target) {
            element.selected = true;
        }
        tracing::debug!(?target, ?panel, "Selected element");
        self.target = Some(target);
        self.panel = panel;
        true
    }

    pub fn deselect(&mut self, deck: &mut Deck) {
        if self.target.is_none() {
            return;
        }
        self.clear_marker(deck);
        self.target = None;
        self.panel = InspectorPanel::Hidden;
        tracing::debug!("Cleared selection");
    }

    /// Re-reads the panel fields after the selected element changed
    pub fn refresh_panel(&mut self, deck: &Deck) {
        self.panel = self
            .selected(deck)
            .map(InspectorPanel::for_element)
            .unwrap_or_default();
    }

    fn clear_marker(&self, deck: &mut Deck) {
        if let Some(element) = self.selected_mut(deck) {
            element.selected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use deckle_model::element::{ElementId, Media};
    use emath::Pos2;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    struct Fixture {
        deck: Deck,
        text: ElementRef,
        image: ElementRef,
        audio: ElementRef,
    }

    fn fixture() -> Fixture {
        let mut deck = Deck::with_blank_slide();
        let pos = Pos2::new(50.0, 50.0);
        let text = deck
            .insert_element(
                0,
                pos,
                ElementInner::Text {
                    content: "Hello".into(),
                    font_size: 24.75,
                    color: Color32::from_rgb(0x12, 0xAB, 0xEF),
                },
            )
            .unwrap();
        let image = deck
            .insert_element(
                0,
                pos,
                ElementInner::Image {
                    media: Media::new(vec![0; 8], "image/png"),
                    width: 320.0,
                    mirrored: false,
                },
            )
            .unwrap();
        let audio = deck
            .insert_element(
                0,
                pos,
                ElementInner::Audio {
                    media: Media::new(vec![0; 8], "audio/wav"),
                },
            )
            .unwrap();
        Fixture {
            deck,
            text,
            image,
            audio,
        }
    }

    fn marked(deck: &Deck) -> Vec<ElementRef> {
        deck.slides
            .iter()
            .flat_map(|(slide, s)| {
                s.elements
                    .values()
                    .filter(|e| e.selected)
                    .map(move |e| ElementRef {
                        slide: *slide,
                        element: e.id,
                    })
            })
            .collect()
    }

    #[test]
    fn starts_unselected() {
        let Fixture { deck, .. } = fixture();
        let selection = Selection::default();
        assert_eq!(selection.state(&deck), SelectionState::Unselected);
        assert_eq!(selection.panel(), &InspectorPanel::Hidden);
    }

    #[test]
    fn image_panel_shows_width() {
        let Fixture {
            mut deck, image, ..
        } = fixture();
        let mut selection = Selection::default();

        assert!(selection.select(&mut deck, image));
        assert_eq!(selection.state(&deck), SelectionState::ImageSelected);
        assert_eq!(selection.panel(), &InspectorPanel::Image { size: 320 });
        assert_eq!(marked(&deck), vec![image]);
    }

    #[test]
    fn text_panel_shows_size_and_color() {
        let Fixture { mut deck, text, .. } = fixture();
        let mut selection = Selection::default();

        selection.select(&mut deck, text);
        assert_eq!(selection.state(&deck), SelectionState::TextSelected);
        assert_eq!(
            selection.panel(),
            &InspectorPanel::Text {
                size: 24,
                color: "#12ABEF".to_owned(),
            }
        );
    }

    #[rstest]
    #[case(Color32::from_rgb(0xFF, 0x00, 0xAA), "#FF00AA")]
    #[case(Color32::from_rgb(1, 2, 3), "#010203")]
    #[case(Color32::from_rgb(0x80, 0x7F, 0xFE), "#807FFE")]
    #[case(Color32::WHITE, "#FFFFFF")]
    fn text_panel_color_reads_computed_style(#[case] stored: Color32, #[case] shown: &str) {
        let element = Element::new(
            ElementId(0),
            Pos2::ZERO,
            ElementInner::Text {
                content: "x".into(),
                font_size: 16.0,
                color: stored,
            },
        );
        assert_eq!(displayed_color(stored), shown);
        assert_eq!(
            InspectorPanel::for_element(&element),
            InspectorPanel::Text {
                size: 16,
                color: shown.to_owned(),
            }
        );
    }

    #[test]
    fn audio_panel() {
        let Fixture {
            mut deck, audio, ..
        } = fixture();
        let mut selection = Selection::default();

        selection.select(&mut deck, audio);
        assert_eq!(selection.state(&deck), SelectionState::AudioSelected);
        assert_eq!(selection.panel(), &InspectorPanel::Audio);
    }

    #[test]
    fn reselecting_moves_marker() {
        let Fixture {
            mut deck,
            text,
            image,
            ..
        } = fixture();
        let mut selection = Selection::default();

        selection.select(&mut deck, text);
        selection.select(&mut deck, image);
        assert_eq!(marked(&deck), vec![image]);
        assert_eq!(selection.panel().kind(), Some(ElementKind::Image));
    }

    #[test]
    fn deselect_hides_everything() {
        let Fixture { mut deck, text, .. } = fixture();
        let mut selection = Selection::default();

        selection.select(&mut deck, text);
        selection.deselect(&mut deck);
        assert_eq!(selection.target(), None);
        assert_eq!(selection.state(&deck), SelectionState::Unselected);
        assert_eq!(selection.panel(), &InspectorPanel::Hidden);
        assert!(marked(&deck).is_empty());
    }

    #[test]
    fn missing_target_keeps_selection() {
        let Fixture { mut deck, text, .. } = fixture();
        let mut selection = Selection::default();
        selection.select(&mut deck, text);

        let missing = ElementRef {
            slide: text.slide,
            element: deckle_model::element::ElementId(999),
        };
        assert!(!selection.select(&mut deck, missing));
        assert_eq!(selection.target(), Some(text));
        assert_eq!(marked(&deck), vec![text]);
    }

    #[test]
    fn dangling_reference_reads_unselected() {
        let Fixture { mut deck, text, .. } = fixture();
        let mut selection = Selection::default();
        selection.select(&mut deck, text);

        deck.slides[0].elements.shift_remove(&text.element);
        assert_eq!(selection.state(&deck), SelectionState::Unselected);
        selection.refresh_panel(&deck);
        assert_eq!(selection.panel(), &InspectorPanel::Hidden);
    }
}
