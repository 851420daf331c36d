use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The identifier of an argument never changes, even when other arguments are removed from the set.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Each argument is given an id equal to the number of arguments created so far by this set.
/// Removing an argument does not change the ids of the others, and the id of a removed
/// argument is never given back, so ids stay stable across framework reductions.
#[derive(Clone, Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Option<Argument<T>>>,
    label_to_id: HashMap<T, usize>,
    n_removed: usize,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_removed: 0,
        };
        labels
            .iter()
            .for_each(|l| argument_set.new_argument(l.clone()));
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, no argument is added.
    pub fn new_argument(&mut self, label: T) {
        self.label_to_id.entry(label.clone()).or_insert_with(|| {
            self.arguments.push(Some(Argument {
                id: self.arguments.len(),
                label,
            }));
            self.arguments.len() - 1
        });
    }

    /// Removes an argument from this set.
    ///
    /// The argument id will not be attributed to new arguments.
    /// An error is returned if no argument has the provided label.
    pub fn remove_argument(&mut self, label: &T) -> Result<Argument<T>> {
        match self.label_to_id.remove(label) {
            Some(id) => {
                self.n_removed += 1;
                Ok(self.arguments[id].take().unwrap())
            }
            None => Err(anyhow!("no such argument: {}", label)),
        }
    }

    /// Returns the number of arguments in the set.
    ///
    /// This number does not take into account the arguments that have been removed.
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_removed
    }

    /// Returns the maximal argument id given so far, or `None` if no argument has been added yet.
    ///
    /// This id may refer to a removed argument.
    pub fn max_id(&self) -> Option<usize> {
        if self.arguments.is_empty() {
            None
        } else {
            Some(self.arguments.len() - 1)
        }
    }

    /// Returns `true` if and only if the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.len() == self.n_removed
    }

    /// Returns the unique id associated to an argument label.
    ///
    /// If no argument has such label, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
    /// assert_eq!(1, arguments.get_argument_index(&"b").unwrap());
    /// assert!(arguments.get_argument_index(&"c").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .ok_or_else(|| anyhow!("no such argument: {}", label))
            .map(|i| *i)
    }

    /// Returns the argument associated to an argument label.
    ///
    /// If no argument has such label, an error is returned.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .and_then(|i| self.arguments[*i].as_ref())
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id, which includes the case of removed arguments.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        self.arguments[id].as_ref().unwrap()
    }

    /// Returns `true` if and only if an argument with the provided id belongs to the set.
    ///
    /// If the argument existed but has been removed, this function returns `false`.
    pub fn has_argument_with_id(&self, id: usize) -> bool {
        id < self.arguments.len() && self.arguments[id].is_some()
    }

    /// Returns an iterator to the arguments.
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter_map(|o| o.as_ref())
    }
}
