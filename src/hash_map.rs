use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;

use crate::error::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::raw_alloc::Global;
use crate::raw_alloc::RawAlloc;

/// A hash map implemented over the open-addressing [`HashTable`].
///
/// `HashMap<K, V, S, A>` stores key-value pairs where keys implement
/// `Hash + Eq`, hashes them with a configurable builder `S`, and obtains its
/// slot storage through the [`RawAlloc`] capability `A`. Collisions are
/// resolved by double hashing; erased entries leave tombstones that keep
/// probe paths intact until the next rebuild.
///
/// Unlike the standard library map, [`insert`](HashMap::insert) never
/// overwrites: it reports whether a new entry was created, and
/// [`insert_or_assign`](HashMap::insert_or_assign) is the overwriting
/// variant.
///
/// # Examples
///
/// ```rust
/// use open_hash::HashMap;
///
/// let mut map = HashMap::new();
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("a", 2));
/// assert_eq!(map.get(&"a"), Some(&1));
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, S = crate::DefaultHashBuilder, A: RawAlloc = Global> {
    table: HashTable<(K, V), A>,
    hash_builder: S,
}

impl<K, V, S, A> Debug for HashMap<K, V, S, A>
where
    K: Debug + Hash + Eq,
    V: Debug,
    S: BuildHasher,
    A: RawAlloc,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(key, value);
        }
        map.finish()
    }
}

impl<K, V, S, A> HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: RawAlloc,
{
    /// Creates an empty map with the given hasher builder, allocating
    /// through `alloc`.
    pub fn with_hasher_in(hash_builder: S, alloc: A) -> Self {
        Self::with_capacity_and_hasher_in(0, hash_builder, alloc)
    }

    /// Creates a map pre-sized to at least `capacity` buckets with the given
    /// hasher builder, allocating through `alloc`.
    pub fn with_capacity_and_hasher_in(capacity: usize, hash_builder: S, alloc: A) -> Self {
        Self {
            table: HashTable::with_capacity_in(capacity, alloc),
            hash_builder,
        }
    }

    /// Creates an empty map allocating through `alloc`.
    pub fn new_in(alloc: A) -> Self
    where
        S: Default,
    {
        Self::with_capacity_and_hasher_in(0, S::default(), alloc)
    }

    /// Creates a map pre-sized to at least `capacity` buckets, allocating
    /// through `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self
    where
        S: Default,
    {
        Self::with_capacity_and_hasher_in(capacity, S::default(), alloc)
    }

    #[inline(always)]
    fn hash_key(&self, key: &K) -> u64 {
        self.hash_builder.hash_one(key)
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Largest number of entries the map could theoretically address.
    pub fn max_size(&self) -> usize {
        self.table.max_size()
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns the hasher builder the map was constructed with.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the key-equality predicate the map uses.
    ///
    /// Key equality is the `Eq` implementation of `K`; the returned closure
    /// compares two keys exactly the way lookups do.
    pub fn key_eq(&self) -> impl Fn(&K, &K) -> bool {
        |a, b| a == b
    }

    /// Returns the allocation capability the map was constructed with.
    pub fn allocator(&self) -> &A {
        self.table.allocator()
    }

    /// Inserts `key` with `value` if the key is absent.
    ///
    /// Returns `true` if a new entry was created. When the key is already
    /// present, nothing changes and `false` is returned; use
    /// [`insert_or_assign`](HashMap::insert_or_assign) to overwrite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Inserts `key` with `value`, overwriting and returning the previous
    /// value if the key is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert_or_assign(37, "a"), None);
    /// assert_eq!(map.insert_or_assign(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_key(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_key(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the stored key-value pair for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let hash = self.hash_key(key);
        self.table
            .find(hash, |(k, _)| k == key)
            .map(|entry| (&entry.0, &entry.1))
    }

    /// Returns a reference to the value for `key`, or
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// Unlike indexing, absence is reported rather than a panic; unlike
    /// [`entry`](HashMap::entry), nothing is inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::Error;
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn at(&self, key: &K) -> Result<&V, Error> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, or
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, Error> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries stored under `key`: 0 or 1.
    pub fn count(&self, key: &K) -> usize {
        usize::from(self.contains_key(key))
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_key(key);
        self.table.remove(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_key(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Gets the given key's corresponding entry for in-place manipulation.
    ///
    /// The growth check runs before the probe, so a vacant entry can be
    /// filled without relocating anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    ///
    /// map.entry("poneyland").or_insert(3);
    /// assert_eq!(map.get(&"poneyland"), Some(&3));
    ///
    /// *map.entry("poneyland").or_insert(10) *= 2;
    /// assert_eq!(map.get(&"poneyland"), Some(&6));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V, A> {
        let hash = self.hash_key(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Moves every entry of `other` whose key is absent in `self` into
    /// `self`, removing it from `other`.
    ///
    /// Conflicting keys are left untouched in both maps. The two maps may
    /// use different hasher builders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut first = HashMap::new();
    /// first.insert(0, "x");
    /// first.insert(1, "y");
    ///
    /// let mut second = HashMap::new();
    /// second.insert(0, "x");
    /// second.insert(2, "z");
    ///
    /// first.merge(&mut second);
    ///
    /// assert_eq!(first.len(), 3);
    /// assert_eq!(second.len(), 1);
    /// assert!(second.contains_key(&0));
    /// ```
    pub fn merge<S2>(&mut self, other: &mut HashMap<K, V, S2, A>)
    where
        S2: BuildHasher,
    {
        for index in 0..other.table.bucket_count() {
            let absent = match other.table.get_at(index) {
                Some((key, _)) => !self.contains_key(key),
                None => false,
            };
            if !absent {
                continue;
            }
            if let Some((key, value)) = other.table.take_at(index) {
                self.insert(key, value);
            }
        }
    }

    /// Returns the slot index the entry for `key` resolved to, or
    /// [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// #
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::with_capacity(10);
    /// map.insert(4u64, "a");
    ///
    /// let expected = (map.hasher().hash_one(&4u64) as usize) % map.bucket_count();
    /// assert_eq!(map.bucket(&4), Ok(expected));
    /// ```
    pub fn bucket(&self, key: &K) -> Result<usize, Error> {
        let hash = self.hash_key(key);
        self.table
            .bucket_index(hash, |(k, _)| k == key)
            .ok_or(Error::KeyNotFound)
    }

    /// Returns the number of slots in the store: zero or a power of two.
    pub fn bucket_count(&self) -> usize {
        self.table.bucket_count()
    }

    /// Ratio of entries to slots; 0.0 for an unallocated map.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// Returns the load-factor threshold that triggers growth.
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Changes the load-factor threshold.
    ///
    /// `z` must lie strictly between 0 and 1, or the call is rejected with
    /// [`Error::InvalidLoadFactor`] and nothing changes. Lowering the
    /// threshold below the current load factor rebuilds the store
    /// immediately.
    pub fn set_max_load_factor(&mut self, z: f32) -> Result<(), Error> {
        self.table.set_max_load_factor(z)
    }

    /// Rebuilds the store at `count` buckets rounded up to the next power of
    /// two, growing or shrinking regardless of the load factor.
    ///
    /// The target is escalated as needed so the current entries still
    /// respect the maximum load factor; rebuilding discards every tombstone.
    pub fn rehash(&mut self, count: usize) {
        self.table.rehash(count);
    }

    /// Fallible form of [`rehash`](HashMap::rehash); on allocation failure
    /// the map is left untouched.
    pub fn try_rehash(&mut self, count: usize) -> Result<(), Error> {
        self.table.try_rehash(count)
    }

    /// Sizes the store so `count` entries fit without exceeding the maximum
    /// load factor: equivalent to `rehash(ceil(count / max_load_factor))`.
    pub fn reserve(&mut self, count: usize) {
        self.table.reserve(count);
    }

    /// Fallible form of [`reserve`](HashMap::reserve); on allocation failure
    /// the map is left untouched.
    pub fn try_reserve(&mut self, count: usize) -> Result<(), Error> {
        self.table.try_reserve(count)
    }

    /// Keeps only the entries for which `f` returns `true`.
    ///
    /// Erased slots become tombstones, exactly as with
    /// [`remove`](HashMap::remove).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map: HashMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert_eq!(map.len(), 4);
    /// ```
    pub fn retain(&mut self, mut f: impl FnMut(&K, &mut V) -> bool) {
        self.table.retain(|(k, v)| f(k, v));
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the key-value pairs, with mutable references
    /// to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over mutable references to the values of the map.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.table.iter_mut(),
        }
    }

    /// Returns an iterator that removes and yields every key-value pair.
    ///
    /// The map is empty once the iterator is exhausted or dropped; the
    /// capacity is retained.
    pub fn drain(&mut self) -> Drain<'_, K, V, A> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Returns a copy of the map allocating through `alloc`.
    ///
    /// The copy keeps the source's bucket count but holds live entries only;
    /// tombstones are compacted away.
    pub fn clone_in(&self, alloc: A) -> Self
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        Self {
            table: self.table.clone_in(alloc),
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V, S> HashMap<K, V, S, Global>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasherDefault;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use open_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str, _> =
    ///     HashMap::with_hasher(BuildHasherDefault::<SipHasher>::default());
    /// assert!(map.is_empty());
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_hasher_in(hash_builder, Global)
    }

    /// Creates a map pre-sized to at least `capacity` buckets with the given
    /// hasher builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::with_capacity_and_hasher_in(capacity, hash_builder, Global)
    }
}

impl<K, V, S> HashMap<K, V, S, Global>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Creates a map pre-sized to at least `capacity` buckets.
    ///
    /// The bucket count is `capacity` rounded up to the next power of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let map: HashMap<i32, &str> = HashMap::with_capacity(10);
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }
}

impl<K, V, S, A> Default for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    A: RawAlloc + Default,
{
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<K, V, S, A> PartialEq for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
    A: RawAlloc,
{
    /// Two maps are equal iff they hold the same keys with equal values,
    /// independent of capacity, insertion order, or slot layout.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S, A> Eq for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
    A: RawAlloc,
{
}

impl<K, V, S, A> core::ops::Index<&K> for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: RawAlloc,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent. Indexing never inserts; use
    /// [`entry`](HashMap::entry) with `or_default` for insert-if-absent
    /// access.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S, A> Extend<(K, V)> for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: RawAlloc,
{
    /// Inserts each pair whose key is absent; pairs with already-present
    /// keys are dropped, keeping the existing value.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S, A> FromIterator<(K, V)> for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    A: RawAlloc + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::with_capacity_and_hasher_in(0, S::default(), A::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S, A, const N: usize> From<[(K, V); N]> for HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
    A: RawAlloc + Default,
{
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let map = HashMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// ```
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_iter(entries)
    }
}

impl<K, V, S, A: RawAlloc> IntoIterator for HashMap<K, V, S, A> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

impl<'a, K, V, S, A> IntoIterator for &'a HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: RawAlloc,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S, A> IntoIterator for &'a mut HashMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: RawAlloc,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A view into a single entry of a [`HashMap`], which is either occupied or
/// vacant.
///
/// Constructed by [`HashMap::entry`].
pub enum Entry<'a, K, V, A: RawAlloc = Global> {
    /// The key is present.
    Occupied(OccupiedEntry<'a, K, V, A>),
    /// The key is absent.
    Vacant(VacantEntry<'a, K, V, A>),
}

impl<'a, K, V, A: RawAlloc> Entry<'a, K, V, A> {
    /// Inserts `default` if the entry is vacant; returns a mutable reference
    /// to the value either way.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the value produced by `default` if the entry is vacant;
    /// returns a mutable reference to the value either way.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V, A> Entry<'a, K, V, A>
where
    V: Default,
    A: RawAlloc,
{
    /// Inserts the default value if the entry is vacant; returns a mutable
    /// reference to the value either way.
    ///
    /// This is the insert-if-absent indexed access:
    /// `map.entry(k).or_default()` always yields a usable value slot for
    /// `k`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use open_hash::HashMap;
    /// #
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// *map.entry("counter").or_default() += 1;
    /// *map.entry("counter").or_default() += 1;
    /// assert_eq!(map[&"counter"], 2);
    /// ```
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }
}

/// A vacant entry in a [`HashMap`], holding the key that was probed.
pub struct VacantEntry<'a, K, V, A: RawAlloc = Global> {
    entry: crate::hash_table::VacantEntry<'a, (K, V), A>,
    key: K,
}

impl<'a, K, V, A: RawAlloc> VacantEntry<'a, K, V, A> {
    /// Returns a reference to the key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the key without inserting anything.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the key with `value`, returning a mutable reference to the
    /// value.
    pub fn insert(self, value: V) -> &'a mut V {
        let pair = self.entry.insert((self.key, value));
        &mut pair.1
    }
}

/// An occupied entry in a [`HashMap`].
pub struct OccupiedEntry<'a, K, V, A: RawAlloc = Global> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V), A>,
}

impl<'a, K, V, A: RawAlloc> OccupiedEntry<'a, K, V, A> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Returns a reference to the entry's value.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Returns a mutable reference to the entry's value.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference tied to the map borrow.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the entry's value, returning the previous one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry, returning its value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry, returning the stored key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the entries of a [`HashMap`].
///
/// Created by [`HashMap::iter`].
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.0, &entry.1))
    }
}

/// An iterator over the entries of a [`HashMap`], with mutable references to
/// the values.
///
/// Created by [`HashMap::iter_mut`].
pub struct IterMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.0, &mut entry.1))
    }
}

/// An iterator over the keys of a [`HashMap`].
///
/// Created by [`HashMap::keys`].
pub struct Keys<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.0)
    }
}

/// An iterator over the values of a [`HashMap`].
///
/// Created by [`HashMap::values`].
pub struct Values<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &entry.1)
    }
}

/// An iterator over mutable references to the values of a [`HashMap`].
///
/// Created by [`HashMap::values_mut`].
pub struct ValuesMut<'a, K, V> {
    inner: crate::hash_table::IterMut<'a, (K, V)>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| &mut entry.1)
    }
}

/// A draining iterator over the entries of a [`HashMap`].
///
/// Created by [`HashMap::drain`]. Dropping the iterator finishes the drain.
pub struct Drain<'a, K, V, A: RawAlloc = Global> {
    inner: crate::hash_table::Drain<'a, (K, V), A>,
}

impl<K, V, A: RawAlloc> Iterator for Drain<'_, K, V, A> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An owning iterator over the entries of a [`HashMap`].
///
/// Created by the [`IntoIterator`] impl for `HashMap`.
pub struct IntoIter<K, V, A: RawAlloc = Global> {
    inner: crate::hash_table::IntoIter<(K, V), A>,
}

impl<K, V, A: RawAlloc> Iterator for IntoIter<K, V, A> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
