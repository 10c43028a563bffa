pub mod category;

pub use category::CategoryIndex;

/// Bucket count used by the inventory when none is configured. Sized well
/// above the expected dataset so chains stay short; the table never rehashes.
pub const DEFAULT_BUCKET_COUNT: usize = 5000;

/// Polynomial rolling hash (`h = h * 31 + byte`) reduced to a bucket number.
pub fn bucket_for(key: &str, bucket_count: usize) -> usize {
    let h = key
        .bytes()
        .fold(0u64, |h, b| h.wrapping_mul(31).wrapping_add(u64::from(b)));
    (h % bucket_count.max(1) as u64) as usize
}

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    // Slot of the next entry in the same bucket chain.
    next: Option<usize>,
}

/// Fixed-size hash table resolving collisions by chaining.
///
/// Chain nodes live in one arena (`entries`) and link to each other by slot
/// number; `heads` holds the first slot of every bucket. New keys are
/// prepended to their bucket, re-inserted keys are overwritten where they sit.
#[derive(Debug)]
pub struct PrimaryIndex<V> {
    heads: Vec<Option<usize>>,
    entries: Vec<Entry<V>>,
}

impl<V> PrimaryIndex<V> {
    pub fn new(bucket_count: usize) -> Self {
        Self {
            heads: vec![None; bucket_count.max(1)],
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let bucket = bucket_for(&key, self.heads.len());

        if let Some(slot) = self.find_slot(bucket, &key) {
            self.entries[slot].value = value;
            return;
        }

        let slot = self.entries.len();
        self.entries.push(Entry {
            key,
            value,
            next: self.heads[bucket],
        });
        self.heads[bucket] = Some(slot);
    }

    pub fn lookup(&self, key: &str) -> Option<&V> {
        let bucket = bucket_for(key, self.heads.len());
        self.find_slot(bucket, key)
            .map(|slot| &self.entries[slot].value)
    }

    /// Number of distinct keys.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }

    /// Walks one bucket from head to tail. Out-of-range buckets are empty.
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.chain_slots(bucket).map(|slot| {
            let entry = &self.entries[slot];
            (entry.key.as_str(), &entry.value)
        })
    }

    /// Length of the longest chain, useful for judging the bucket count.
    pub fn longest_chain(&self) -> usize {
        (0..self.heads.len())
            .map(|bucket| self.chain_slots(bucket).count())
            .max()
            .unwrap_or(0)
    }

    fn chain_slots(&self, bucket: usize) -> impl Iterator<Item = usize> + '_ {
        let head = self.heads.get(bucket).copied().flatten();
        std::iter::successors(head, move |&slot| self.entries[slot].next)
    }

    fn find_slot(&self, bucket: usize, key: &str) -> Option<usize> {
        self.chain_slots(bucket)
            .find(|&slot| self.entries[slot].key == key)
    }
}
