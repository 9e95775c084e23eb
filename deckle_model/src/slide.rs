use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub u64);

/// Elements in insertion order, which is also paint order
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct Slide {
    pub elements: IndexMap<ElementId, Element, ahash::RandomState>,
}
