//! StrHashMap: an open-addressed string table with double hashing,
//! tombstone deletion, and prime-sized capacity tiers.

use crate::hashing::ProbeSeq;
use crate::primes::next_prime;
use std::fmt;
use std::mem;

/// Capacity tier a fresh table starts at; shrinking never goes below it.
const INITIAL_BASE_SIZE: usize = 53;

/// Grow (double the tier) once live entries exceed this percentage of the
/// slot count.
const MAX_LOAD_PERCENT: usize = 70;

/// Shrink (halve the tier) once live entries fall below this percentage of
/// the slot count.
const MIN_LOAD_PERCENT: usize = 10;

/// An owned key-value pair. Each entry is held by exactly one occupied
/// slot and dropped when overwritten, removed, or when the map drops.
#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
}

/// One bucket of the table.
///
/// `Tombstone` marks a slot whose entry was deleted: probes continue past
/// it (unlike `Empty`, which ends a probe), and inserts may reclaim it.
/// The three states are plain tags; no sentinel object, no global state.
#[derive(Debug)]
enum Slot {
    Empty,
    Tombstone,
    Occupied(Entry),
}

/// A map from `String` keys to `String` values, backed by a single
/// prime-length slot array probed with double hashing.
///
/// Entry hashes are never cached: probe positions depend on the current
/// slot count, so every rebuild rehashes from the keys themselves.
pub struct StrHashMap {
    slots: Vec<Slot>,
    /// Live entries (occupied slots; tombstones don't count).
    len: usize,
    /// Nominal capacity tier. The slot count is `next_prime(base_size)`;
    /// resizing doubles or halves the tier, never below
    /// `INITIAL_BASE_SIZE`.
    base_size: usize,
}

impl StrHashMap {
    /// Creates an empty map at the initial capacity tier (53 slots).
    pub fn new() -> Self {
        Self::with_base_size(INITIAL_BASE_SIZE)
    }

    fn with_base_size(base_size: usize) -> Self {
        let size = next_prime(base_size);
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || Slot::Empty);
        Self {
            slots,
            len: 0,
            base_size,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the map holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count. Always prime, and never below 53.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live entries as an integer percentage of the slot count.
    fn load_percent(&self) -> usize {
        self.len * 100 / self.slots.len()
    }

    /// Returns the value stored under `key`, if any. Never mutates.
    pub fn get(&self, key: &str) -> Option<&str> {
        let idx = self.find_index(key)?;
        match &self.slots[idx] {
            Slot::Occupied(entry) => Some(entry.value.as_str()),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    /// Parity with `get`: true iff `key` resolves to a live entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Inserts the pair. A duplicate key is overwritten in place and the
    /// previous value returned, so a key never occupies more than one
    /// slot. May grow the table first: when more than 70% of slots hold
    /// live entries, the capacity tier doubles and everything rehashes.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        if self.load_percent() > MAX_LOAD_PERCENT {
            self.resize(self.base_size * 2);
        }
        let previous = self.place(Entry { key, value });
        self.debug_assert_invariants();
        previous
    }

    /// Removes `key`, returning its value if it was present; removing an
    /// absent key changes nothing except the shrink check below. The slot
    /// is tombstoned, not emptied, so probes that pass through it keep
    /// working.
    ///
    /// The shrink check runs before the probe: when live entries sit under
    /// 10% of the slot count the capacity tier halves (floored at the
    /// initial tier), whether or not `key` is then found.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if self.load_percent() < MIN_LOAD_PERCENT {
            self.resize(self.base_size / 2);
        }
        let idx = self.find_index(key)?;
        if let Slot::Occupied(entry) = mem::replace(&mut self.slots[idx], Slot::Tombstone) {
            self.len -= 1;
            self.debug_assert_invariants();
            return Some(entry.value);
        }
        None
    }

    /// Probes for `key`: the index of its occupied slot, or `None`.
    /// Tombstones are passed over and an empty slot ends the probe. A
    /// full cycle ends it too: the table can consist entirely of occupied
    /// and tombstoned slots, and a miss must terminate then as well.
    fn find_index(&self, key: &str) -> Option<usize> {
        for idx in ProbeSeq::new(key, self.slots.len()).take(self.slots.len()) {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(entry) => {
                    if entry.key == key {
                        return Some(idx);
                    }
                }
            }
        }
        None
    }

    /// Writes `entry` at its probe position: the slot already holding an
    /// equal key (overwrite), else the first tombstone seen on the probe
    /// path, else the empty slot that ended the probe. Returns the
    /// replaced value on overwrite.
    fn place(&mut self, entry: Entry) -> Option<String> {
        let mut reusable = None;
        let mut target = None;
        for idx in ProbeSeq::new(&entry.key, self.slots.len()).take(self.slots.len()) {
            match &self.slots[idx] {
                Slot::Empty => {
                    target = Some(reusable.unwrap_or(idx));
                    break;
                }
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(idx);
                    }
                }
                Slot::Occupied(existing) if existing.key == entry.key => {
                    target = Some(idx);
                    break;
                }
                Slot::Occupied(_) => {}
            }
        }
        // A full cycle without an empty slot still passed every tombstone,
        // and the load bound keeps at least one non-live slot around.
        let idx = target
            .or(reusable)
            .expect("probe cycle visits every slot; load stays below 100%");
        match &mut self.slots[idx] {
            Slot::Occupied(existing) => Some(mem::replace(&mut existing.value, entry.value)),
            slot => {
                *slot = Slot::Occupied(entry);
                self.len += 1;
                None
            }
        }
    }

    /// Rebuilds the table with `next_prime(new_base_size)` slots,
    /// reinserting every live entry and discarding all tombstones. A
    /// request below the initial tier is a no-op.
    fn resize(&mut self, new_base_size: usize) {
        if new_base_size < INITIAL_BASE_SIZE {
            return;
        }
        let mut rebuilt = Self::with_base_size(new_base_size);
        for slot in mem::take(&mut self.slots) {
            if let Slot::Occupied(entry) = slot {
                rebuilt.place(entry);
            }
        }
        *self = rebuilt;
        self.debug_assert_invariants();
    }

    /// Structural self-checks after every mutation in debug builds;
    /// release builds compile this to nothing.
    #[cfg(debug_assertions)]
    fn debug_assert_invariants(&self) {
        debug_assert!(crate::primes::is_prime(self.slots.len()));
        debug_assert!(self.base_size >= INITIAL_BASE_SIZE);
        debug_assert_eq!(next_prime(self.base_size), self.slots.len());
        debug_assert!(self.len <= self.slots.len());
        debug_assert_eq!(
            self.len,
            self.slots
                .iter()
                .filter(|slot| matches!(slot, Slot::Occupied(_)))
                .count()
        );
    }

    #[cfg(not(debug_assertions))]
    fn debug_assert_invariants(&self) {}
}

impl Default for StrHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrHashMap")
            .field("len", &self.len)
            .field("capacity", &self.slots.len())
            .finish_non_exhaustive()
    }
}
