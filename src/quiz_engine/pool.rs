use rand::Rng;
use crate::quiz_engine::models::VocabItem;

/// The shuffled, circular working set of a session.
///
/// Items are never reordered after construction; only the read cursor moves.
/// Callers refer to items by their position in the pool, which is a stable
/// identity because the pool is deduplicated before it gets here.
pub struct Pool {
    items: Vec<VocabItem>,
    cursor: usize,
}

impl Pool {
    /// Shuffle `items` with `rng` and start reading from the front.
    pub fn new_shuffled<R: Rng>(mut items: Vec<VocabItem>, rng: &mut R) -> Self {
        // Fisher-Yates shuffle
        for i in (1..items.len()).rev() {
            let j = rng.gen_range(0..=i);
            items.swap(i, j);
        }

        Pool { items, cursor: 0 }
    }

    /// Walk from the cursor (wrapping) to the first position not in `taken`,
    /// leaving the cursor just past it.
    ///
    /// Gives up after one full lap, so this returns `None` instead of spinning
    /// when every position is taken.
    pub fn draw_distinct(&mut self, taken: &[usize]) -> Option<usize> {
        let len = self.items.len();
        for _ in 0..len {
            let pos = self.cursor;
            self.cursor = (self.cursor + 1) % len;
            if !taken.contains(&pos) {
                log::trace!("drew pool[{pos}] ({})", self.items[pos].id);
                return Some(pos);
            }
        }
        None
    }

    pub fn get(&self, pos: usize) -> &VocabItem {
        &self.items[pos]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Items in shuffled order.
    pub fn items(&self) -> &[VocabItem] {
        &self.items
    }
}
