//! str-hashmap: A string-keyed map built on open addressing with double
//! hashing and prime-sized tables.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep the whole engine in three small modules so each piece
//!   can be reasoned about independently.
//! - Layers:
//!   - primes: trial-division primality and `next_prime`, which turns a
//!     capacity tier into an actual slot count.
//!   - hashing: the polynomial string hash (integer arithmetic only,
//!     using modular exponentiation) and `ProbeSeq`, the double-hashing
//!     probe sequence over a table of a given length.
//!   - str_hash_map: the slot array, the load-factor policy, and the
//!     public `StrHashMap` API.
//!
//! Constraints
//! - Keys and values are owned `String`s; no generics, no custom
//!   hashers, no per-entry metadata beyond the pair itself.
//! - Slot counts are always prime, so any probe step in `1..size`
//!   cycles through every slot before repeating.
//! - Every probe loop is bounded by the slot count; a table with no
//!   empty slots still terminates lookups and removals.
//! - Single-threaded; `&mut self` is the only mutation path.
//!
//! Load-factor policy
//! - Insert grows the table (the capacity tier doubles) when live
//!   entries exceed 70% of slots; remove shrinks it (the tier halves)
//!   when they fall below 10%. Both checks run before the operation's
//!   probe, so an absent-key remove can still shrink a sparse table.
//!   The tier never drops below the initial 53.
//!
//! Deletion policy
//! - Removal tombstones the slot rather than emptying it, keeping
//!   longer probe chains intact. Inserts reclaim the first tombstone on
//!   their path, and every resize rebuilds the table tombstone-free.
//!
//! Duplicate policy
//! - Inserting an existing key overwrites the value in that key's slot
//!   and returns the previous value, so a key never holds two slots.
//!
//! Notes and non-goals
//! - No iteration API; the map is a lookup structure, not a collection
//!   adapter.
//! - No persistence and no concurrency story.
//! - Hashes are never cached per entry: probe positions depend on the
//!   current slot count, so resizes rehash from the keys.
//! - Public API surface is `StrHashMap`; `hashing` and `primes` are
//!   implementation details.

mod hashing;
mod primes;
mod str_hash_map;
mod str_hash_map_proptest;

// Public surface
pub use str_hash_map::StrHashMap;
