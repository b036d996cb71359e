//! Append-only hash-consing table.
//!
//! Values live in a plain `Vec` and are addressed by their insertion index.
//! A fixed number of buckets chain entries through `next` links; every lookup
//! compares the stored hash first and the full value second, so correctness
//! never depends on hash quality.
//!
//! ```text
//! buckets[h & mask] -> 4 -> 1 -> None
//! data:  [e0, e1, e2, e3, e4]
//! ```

use std::ops::Index;

use crate::utils::MyHash;

/// Largest supported `bits` for [`Table::new`].
pub const MAX_BITS: usize = 31;

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    hash: u64,
    next: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Table<T> {
    data: Vec<Entry<T>>,
    buckets: Vec<Option<u32>>,
    bitmask: u64,
}

impl<T> Table<T> {
    /// Create a new table with `2^bits` buckets.
    pub fn new(bits: usize) -> Self {
        assert!(bits <= MAX_BITS, "Table bits should be in the range 0..={}", MAX_BITS);

        let buckets_size = 1usize << bits;
        Self {
            data: Vec::new(),
            buckets: vec![None; buckets_size],
            bitmask: (buckets_size - 1) as u64,
        }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Get the reference to the value at the given index.
    pub fn value(&self, index: usize) -> &T {
        &self.data[index].value
    }

    /// Get the mutable reference to the value at the given index.
    ///
    /// The caller must not change anything that takes part in hashing or equality.
    pub fn value_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index].value
    }

    /// Get the index of the next entry in the same bucket.
    #[cfg(test)]
    fn next(&self, index: usize) -> Option<usize> {
        self.data[index].next.map(|i| i as usize)
    }

    /// Iterate over all values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().map(|e| &e.value)
    }

    fn add(&mut self, value: T, hash: u64) -> u32 {
        if self.data.len() >= u32::MAX as usize {
            panic!("Table is full");
        }
        let index = self.data.len() as u32;
        self.data.push(Entry {
            value,
            hash,
            next: None,
        });
        index
    }
}

impl<T> Table<T>
where
    T: MyHash + Eq,
{
    fn bucket_index(&self, hash: u64) -> usize {
        (hash & self.bitmask) as usize
    }

    /// Find the index of a value equal to `value`.
    #[cfg(test)]
    fn find(&self, value: &T) -> Option<usize> {
        let hash = value.hash();
        let mut cursor = self.buckets[self.bucket_index(hash)];
        while let Some(index) = cursor {
            let entry = &self.data[index as usize];
            if entry.hash == hash && &entry.value == value {
                return Some(index as usize);
            }
            cursor = entry.next;
        }
        None
    }

    /// Put a value into the table.
    ///
    /// Returns the index of the stored value and whether it was newly added.
    /// If an equal value is already present, `value` is dropped.
    pub fn put(&mut self, value: T) -> (usize, bool) {
        let hash = value.hash();
        let bucket_index = self.bucket_index(hash);

        let mut index = match self.buckets[bucket_index] {
            None => {
                // Create new entry and put it into the bucket.
                let i = self.add(value, hash);
                self.buckets[bucket_index] = Some(i);
                return (i as usize, true);
            }
            Some(i) => i,
        };

        loop {
            let entry = &self.data[index as usize];
            if entry.hash == hash && entry.value == value {
                // The value already exists.
                return (index as usize, false);
            }

            let next = entry.next;
            match next {
                Some(next) => {
                    // Go to the next entry in the bucket.
                    index = next;
                }
                None => {
                    // Create new entry and append it to the bucket.
                    let i = self.add(value, hash);
                    self.data[index as usize].next = Some(i);
                    return (i as usize, true);
                }
            }
        }
    }
}

impl<T> Index<usize> for Table<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.value(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    struct Item(i32);

    impl MyHash for Item {
        fn hash(&self) -> u64 {
            self.0.unsigned_abs() as u64
        }
    }

    #[test]
    #[should_panic(expected = "Table bits should be in the range 0..=31")]
    fn test_too_many_bits() {
        Table::<Item>::new(32);
    }

    #[test]
    fn test_put_dedup() {
        let mut table = Table::new(2);
        assert_eq!(table.put(Item(5)), (0, true));
        assert_eq!(table.put(Item(7)), (1, true));
        assert_eq!(table.put(Item(5)), (0, false));
        assert_eq!(table.len(), 2);
        assert_eq!(table[1], Item(7));
    }

    #[test]
    fn test_put_collision() {
        let mut table = Table::new(2);
        let (index1, _) = table.put(Item(5));
        let (index2, added) = table.put(Item(-5));
        assert!(added);
        assert_ne!(index1, index2);
        assert_eq!(table[index1], Item(5));
        assert_eq!(table[index2], Item(-5));
        assert_eq!(table.next(index1), Some(index2));
        assert_eq!(table.next(index2), None);
        assert_eq!(table.find(&Item(-5)), Some(index2));
        assert_eq!(table.find(&Item(6)), None);
    }

    #[test]
    fn test_bucket_chain() {
        // A single bucket: everything lands in one chain.
        let mut table = Table::new(0);
        for i in 0..10 {
            table.put(Item(i));
        }
        for i in 0..10 {
            assert_eq!(table.find(&Item(i)), Some(i as usize));
        }
        assert_eq!(table.put(Item(9)), (9, false));
        assert_eq!(table.num_buckets(), 1);
    }

    #[test]
    fn test_iter_insertion_order() {
        let mut table = Table::new(3);
        for i in [3, 1, 2, 1, 3] {
            table.put(Item(i));
        }
        let items: Vec<Item> = table.iter().copied().collect();
        assert_eq!(items, vec![Item(3), Item(1), Item(2)]);
    }
}
