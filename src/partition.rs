use crate::merchant::Merchant;

/// The three groups produced by a three-way partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreeWay<T> {
    pub less: Vec<T>,
    pub equal: Vec<T>,
    pub greater: Vec<T>,
}

impl<T> ThreeWay<T> {
    pub fn len(&self) -> usize {
        self.less.len() + self.equal.len() + self.greater.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Three-way partitions `data` around the location of `pivot`.
///
/// `pivot` does not have to be an element of `data`.
pub fn partition(data: Vec<Merchant>, pivot: &Merchant) -> ThreeWay<Merchant> {
    partition_by_key(data, &pivot.location(), Merchant::location)
}

/// Takes the input `data` and distributes all elements into the groups `less`, `equal` and
/// `greater`, depending on how `key(elem)` compares to `pivot_key`.
///
/// This is a single linear pass, the relative order of the elements inside each group is the
/// same as in `data`. All elements of `data` end up in exactly one group.
///
/// If `K` does not implement a total order the grouping is unspecified, but no element is lost
/// or duplicated.
pub fn partition_by_key<T, K, F>(data: Vec<T>, pivot_key: &K, mut key: F) -> ThreeWay<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups = ThreeWay {
        less: Vec::new(),
        equal: Vec::new(),
        greater: Vec::new(),
    };

    for elem in data {
        let group = match key(&elem).cmp(pivot_key) {
            std::cmp::Ordering::Less => &mut groups.less,
            std::cmp::Ordering::Equal => &mut groups.equal,
            std::cmp::Ordering::Greater => &mut groups.greater,
        };
        group.push(elem);
    }

    groups
}
