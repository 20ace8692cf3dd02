//! Bounded list of scene elements.

use heapless::Vec;

/// Holds up to `N` scene elements (targets, shots) in insertion order.
#[derive(Debug, Clone)]
pub struct Starfield<E, const N: usize> {
    elements: Vec<E, N>,
}

impl<E: PartialEq, const N: usize> Starfield<E, N> {
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Appends an element, handing it back if the field is full.
    pub fn add_element(&mut self, element: E) -> Result<(), E> {
        self.elements.push(element)
    }

    /// Removes the first element equal to `element`.
    ///
    /// Returns `false` if no such element exists.
    pub fn remove_element(&mut self, element: &E) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(idx) => {
                self.elements.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E: PartialEq, const N: usize> Default for Starfield<E, N> {
    fn default() -> Self {
        Self::new()
    }
}
