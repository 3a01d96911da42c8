use std::borrow::Cow;

/// Collection that can be fuzzy-sorted in place.
///
/// The sorter only ever reads keywords, compares positions and swaps them;
/// it never copies or stores elements. Implementations must keep the
/// contract: `swap` really exchanges two positions and `less` is a total
/// order. Anything else leaves the resulting order unspecified.
///
/// A collection must not be sorted from several threads at once; callers
/// synchronize externally.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use fuzzy_sort::{sort, Sortable};
///
/// struct Player {
///     first: String,
///     last: String,
/// }
///
/// impl Player {
///     fn name(&self) -> String {
///         format!("{} {}", self.first, self.last).trim().to_string()
///     }
/// }
///
/// struct Team(Vec<Player>);
///
/// impl Sortable for Team {
///     fn len(&self) -> usize { self.0.len() }
///     fn keyword(&self, index: usize) -> Cow<'_, str> { Cow::Owned(self.0[index].name()) }
///     fn swap(&mut self, i: usize, j: usize) { self.0.swap(i, j) }
///     fn less(&self, i: usize, j: usize) -> bool { self.0[i].name() < self.0[j].name() }
/// }
///
/// let mut team = Team(vec![
///     Player { first: "Alan".into(), last: "Turing".into() },
///     Player { first: "Ada".into(), last: "Lovelace".into() },
/// ]);
/// // Initials of "Ada Lovelace" outrank the prefix of "Alan Turing"
/// let matched = sort(&mut team, "al");
/// assert_eq!(matched, 2);
/// assert_eq!(team.0[0].first, "Ada");
/// ```
pub trait Sortable {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text matched against the query for the element at `index`
    fn keyword(&self, index: usize) -> Cow<'_, str>;

    /// Exchange the elements at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Tie-break for equal scores: whether element `i` sorts before `j`
    fn less(&self, i: usize, j: usize) -> bool;
}

impl<T: AsRef<str>> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn keyword(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[index].as_ref())
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].as_ref() < self[j].as_ref()
    }
}

impl<T: AsRef<str>> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn keyword(&self, index: usize) -> Cow<'_, str> {
        Sortable::keyword(self.as_slice(), index)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Sortable::less(self.as_slice(), i, j)
    }
}

/// Adapts a slice of arbitrary items to [`Sortable`] through a key function.
///
/// Ties are broken by comparing keys.
///
/// ```
/// use fuzzy_sort::{sort, KeyedSlice};
///
/// struct Game {
///     title: String,
/// }
///
/// let mut games = vec![
///     Game { title: "Left 4 Dead".into() },
///     Game { title: "Vampire Survivors".into() },
/// ];
/// let mut keyed = KeyedSlice::new(&mut games, |g| g.title.as_str());
/// assert_eq!(sort(&mut keyed, "vs"), 1);
/// assert_eq!(games[0].title, "Vampire Survivors");
/// ```
pub struct KeyedSlice<'a, T> {
    items: &'a mut [T],
    key: fn(&T) -> &str,
}

impl<'a, T> KeyedSlice<'a, T> {
    /// Wrap `items`, extracting each keyword with `key`
    pub fn new(items: &'a mut [T], key: fn(&T) -> &str) -> Self {
        Self { items, key }
    }

    /// Borrow the underlying items in their current order
    pub fn items(&self) -> &[T] {
        self.items
    }
}

impl<T> Sortable for KeyedSlice<'_, T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn keyword(&self, index: usize) -> Cow<'_, str> {
        Cow::Borrowed((self.key)(&self.items[index]))
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.key)(&self.items[i]) < (self.key)(&self.items[j])
    }
}
