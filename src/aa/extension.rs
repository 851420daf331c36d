use super::{AAFramework, Argument, LabelType};
use std::collections::BTreeSet;

/// A set of arguments, given by their ids.
///
/// Extensions are the values manipulated by the reasoners of this crate:
/// candidate sets of jointly acceptable arguments.
/// They store argument ids instead of argument references, taking advantage of the fact
/// ids are preserved by framework reductions; an extension built during a search thus
/// always refers to the arguments of the root framework.
///
/// Extensions are ordered sets, making their equality, hashing and ordering canonical.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension(BTreeSet<usize>);

impl Extension {
    /// Builds an empty extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an extension containing a single argument id.
    pub fn new_singleton(id: usize) -> Self {
        let mut set = BTreeSet::new();
        set.insert(id);
        Extension(set)
    }

    /// Adds an argument id to this extension.
    pub fn insert(&mut self, id: usize) {
        self.0.insert(id);
    }

    /// Returns `true` if and only if the extension contains the provided argument id.
    pub fn contains(&self, id: usize) -> bool {
        self.0.contains(&id)
    }

    /// Returns the number of arguments in the extension.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if and only if the extension contains no argument.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the argument ids of the extension, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Returns the union of this extension and another one.
    pub fn union(&self, other: &Extension) -> Extension {
        Extension(self.0.union(&other.0).copied().collect())
    }

    /// Returns the set of ids of this extension that do not belong to the other one.
    pub fn subtract(&self, other: &Extension) -> Extension {
        Extension(self.0.difference(&other.0).copied().collect())
    }

    /// Returns the restriction of this extension to the ids of the other one.
    pub fn restrict(&self, other: &Extension) -> Extension {
        Extension(self.0.intersection(&other.0).copied().collect())
    }

    /// Returns `true` if and only if this extension is a subset of the other one.
    pub fn is_subset(&self, other: &Extension) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns `true` if and only if this extension is a strict subset of the other one.
    pub fn is_strict_subset(&self, other: &Extension) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    /// Maps the ids of this extension to the arguments of a framework.
    ///
    /// # Panics
    ///
    /// Panics if an id of this extension does not refer to an argument of the framework,
    /// which happens when the framework is not the one the extension was built for.
    pub fn arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.iter()
            .map(|id| af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Renders the extension as the comma-separated list of its argument labels.
    pub fn format<T>(&self, af: &AAFramework<T>) -> String
    where
        T: LabelType,
    {
        let mut s = String::new();
        for (i, arg) in self.arguments(af).iter().enumerate() {
            if i > 0 {
                s.push(',');
            }
            s.push_str(&arg.to_string());
        }
        s
    }
}

impl FromIterator<usize> for Extension {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Extension(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    #[test]
    fn test_set_algebra() {
        let e1 = Extension::from_iter([0, 1, 2]);
        let e2 = Extension::from_iter([1, 3]);
        assert_eq!(Extension::from_iter([0, 1, 2, 3]), e1.union(&e2));
        assert_eq!(Extension::from_iter([0, 2]), e1.subtract(&e2));
        assert_eq!(Extension::from_iter([1]), e1.restrict(&e2));
    }

    #[test]
    fn test_subsets() {
        let e1 = Extension::from_iter([0, 1]);
        let e2 = Extension::from_iter([0, 1, 2]);
        assert!(e1.is_subset(&e2));
        assert!(e1.is_strict_subset(&e2));
        assert!(e1.is_subset(&e1));
        assert!(!e1.is_strict_subset(&e1));
        assert!(!e2.is_subset(&e1));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut e1 = Extension::new();
        e1.insert(1);
        e1.insert(0);
        let e2 = Extension::from_iter([0, 1]);
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_format() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new_with_argument_set(args);
        let ext = Extension::from_iter([0, 2]);
        assert_eq!("a,c", ext.format(&af));
        assert_eq!("", Extension::new().format(&af));
    }
}
