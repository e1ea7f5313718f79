use thiserror::Error;

/// Which words of a synonym set an annotation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordSlot {
    AllWords,
    /// 0-based word position.
    Specific(usize),
}

impl WordSlot {
    /// Converts the files' word number: 1-based, `0` meaning every word.
    pub fn from_word_number(number: u8) -> Self {
        match number {
            0 => WordSlot::AllWords,
            n => WordSlot::Specific(usize::from(n) - 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("word index ({index}) has to be less than {len}")]
pub struct OutOfRangeError {
    pub index: usize,
    pub len: usize,
}

/// Fixed number of slots, each accumulating values in insertion order.
/// A value added to [`WordSlot::AllWords`] is copied into every slot.
#[derive(Debug, Clone)]
pub struct PositionalDistributor<T> {
    slots: Vec<Vec<T>>,
}

impl<T: Clone> PositionalDistributor<T> {
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| Vec::new()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fails without touching any slot when a specific index is out of range.
    pub fn add(&mut self, slot: WordSlot, value: T) -> Result<(), OutOfRangeError> {
        match slot {
            WordSlot::AllWords => {
                for values in &mut self.slots {
                    values.push(value.clone());
                }
            }
            WordSlot::Specific(index) => {
                let len = self.slots.len();
                self.slots
                    .get_mut(index)
                    .ok_or(OutOfRangeError { index, len })?
                    .push(value);
            }
        }
        Ok(())
    }

    /// Values accumulated for `index`; empty when nothing was added.
    pub fn get(&self, index: usize) -> &[T] {
        self.slots.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn into_slots(self) -> Vec<Vec<T>> {
        self.slots
    }
}
