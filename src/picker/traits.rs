//! Slot list trait definition
//!
//! A generic trait for wheel-style list selection where the ends of the list
//! are hard stops.

use super::axis::ScrollDirection;

/// A list of selectable slots with a clamped current index.
///
/// Unlike a menu, a wheel never wraps around: stepping past either end
/// leaves the selection where it is.
///
/// # Example
///
/// ```ignore
/// struct Months {
///     items: Vec<String>,
///     selected: usize,
/// }
///
/// impl SlotList for Months {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn selected_index(&self) -> usize {
///         self.selected
///     }
///
///     fn set_selected_index(&mut self, index: usize) {
///         self.selected = index;
///     }
/// }
/// ```
pub trait SlotList {
    /// The type of items in the list
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Set the selected index. Callers pass an index already clamped to the list.
    fn set_selected_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the list is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Index of the last slot, `0` for an empty list.
    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Clamp any signed index into the valid slot range.
    fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.last_index() as i64) as usize
    }

    /// Move one slot in `direction`, stopping at the ends.
    ///
    /// Returns the resulting index.
    fn step(&mut self, direction: ScrollDirection) -> usize {
        let next = self.clamp_index(self.selected_index() as i64 + direction.delta());
        if !self.is_empty() {
            self.set_selected_index(next);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Letters {
        items: Vec<char>,
        selected: usize,
    }

    impl SlotList for Letters {
        type Item = char;

        fn items(&self) -> &[char] {
            &self.items
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
        }
    }

    fn letters() -> Letters {
        Letters {
            items: vec!['a', 'b', 'c'],
            selected: 0,
        }
    }

    #[test]
    fn test_step_stops_at_ends() {
        let mut list = letters();
        assert_eq!(list.step(ScrollDirection::Previous), 0);
        assert_eq!(list.step(ScrollDirection::Next), 1);
        assert_eq!(list.step(ScrollDirection::Next), 2);
        assert_eq!(list.step(ScrollDirection::Next), 2);
        assert_eq!(list.items()[list.selected_index()], 'c');
    }

    #[test]
    fn test_clamp_index() {
        let list = letters();
        assert_eq!(list.clamp_index(-4), 0);
        assert_eq!(list.clamp_index(1), 1);
        assert_eq!(list.clamp_index(17), 2);
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut list = Letters {
            items: vec![],
            selected: 0,
        };
        assert_eq!(list.step(ScrollDirection::Next), 0);
        assert_eq!(list.last_index(), 0);
    }
}
