use super::{Argument, ArgumentSet, Extension, LabelType};
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined by Dung.
///
/// A framework is a set of arguments and a set of attacks between them.
/// Frameworks can be reduced (see [`reduct`](Self::reduct)): a reduction produces a new
/// framework and never mutates the original one.
/// Argument ids are preserved by reductions, so an id valid in a reduced framework refers
/// to the same argument in the framework it was derived from.
#[derive(Clone, Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<Option<(usize, usize)>>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
    n_removed_attacks: usize,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework from a set of arguments.
    ///
    /// The new framework has no attack.
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.len()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attacks_from,
            attacks_to,
            n_removed_attacks: 0,
        }
    }

    /// Adds a new argument to this argumentation framework.
    pub fn new_argument(&mut self, label: T) {
        let old_len = self.arguments.len();
        self.arguments.new_argument(label);
        if self.arguments.len() > old_len {
            self.attacks_from.push(Vec::new());
            self.attacks_to.push(Vec::new());
        }
    }

    /// Removes an argument from this argumentation framework.
    ///
    /// All the attacks involving this argument are removed as well.
    /// The argument id will not be attributed to new arguments.
    pub fn remove_argument(&mut self, label: &T) -> Result<()> {
        let removed = self.arguments.remove_argument(label)?;
        let removed_id = removed.id();
        let mut removed_attack_ids = self.attacks_from[removed_id].clone();
        removed_attack_ids.append(&mut self.attacks_to[removed_id].clone());
        for i in removed_attack_ids {
            if self.attacks[i].take().is_some() {
                self.n_removed_attacks += 1;
            }
        }
        self.attacks_from[removed_id].clear();
        self.attacks_to[removed_id].clear();
        Ok(())
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If one of the provided labels is undefined, an error is returned.
    /// If the attack already exists, it is added another time (no check is made for existence).
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b"];
    /// let mut framework =
    ///     AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
    /// framework.new_attack(&labels[0], &labels[1]).unwrap();
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.attacks.push(Some((attacker_id, attacked_id)));
        self.attacks_from[attacker_id].push(self.attacks.len() - 1);
        self.attacks_to[attacked_id].push(self.attacks.len() - 1);
        Ok(())
    }

    /// Adds a new attack given the ids of the source and destination arguments.
    ///
    /// If one of the provided ids does not refer to an argument of the framework, an error
    /// is returned.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        if !self.arguments.has_argument_with_id(from) || !self.arguments.has_argument_with_id(to) {
            return Err(anyhow!(
                "cannot add an attack from id {} to id {}: no such argument(s)",
                from,
                to,
            ));
        }
        self.attacks.push(Some((from, to)));
        self.attacks_from[from].push(self.attacks.len() - 1);
        self.attacks_to[to].push(self.attacks.len() - 1);
        Ok(())
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks
            .iter()
            .filter_map(|o| o.as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[arg.id()]
            .iter()
            .map(|i| &self.attacks[*i])
            .filter_map(|o| o.as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[arg.id()]
            .iter()
            .map(|i| &self.attacks[*i])
            .filter_map(|o| o.as_ref())
            .map(|(a, b)| {
                Attack(
                    self.arguments.get_argument_by_id(*a),
                    self.arguments.get_argument_by_id(*b),
                )
            })
    }

    /// Iterates over the ids of the arguments attacking the argument with the provided id.
    ///
    /// An attacker appears once per attack it is the source of.
    pub fn attacker_ids_of(&self, attacked_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.attacks_to[attacked_id]
            .iter()
            .filter_map(|i| self.attacks[*i])
            .map(|(a, _)| a)
    }

    /// Iterates over the ids of the arguments attacked by the argument with the provided id.
    pub fn attacked_ids_from(&self, attacker_id: usize) -> impl Iterator<Item = usize> + '_ {
        self.attacks_from[attacker_id]
            .iter()
            .filter_map(|i| self.attacks[*i])
            .map(|(_, b)| b)
    }

    /// Returns `true` if and only if an argument of the provided set attacks the argument
    /// with the provided id.
    pub fn is_attacked_by_set(&self, attacked_id: usize, set: &Extension) -> bool {
        self.attacker_ids_of(attacked_id).any(|a| set.contains(a))
    }

    /// Returns the set of ids of the arguments attacking at least one member of the
    /// provided set.
    pub fn attackers_of_set(&self, set: &Extension) -> Extension {
        set.iter().flat_map(|id| self.attacker_ids_of(id)).collect()
    }

    /// Returns the range of a set: the set itself plus the arguments it attacks.
    pub fn set_range(&self, set: &Extension) -> Extension {
        set.iter()
            .chain(set.iter().flat_map(|id| self.attacked_ids_from(id)))
            .collect()
    }

    /// Returns `true` if and only if no argument of the provided set attacks another one
    /// (or itself).
    pub fn is_conflict_free(&self, set: &Extension) -> bool {
        !set.iter()
            .any(|id| self.attacked_ids_from(id).any(|b| set.contains(b)))
    }

    /// Returns the set of arguments defended by the provided set (the characteristic
    /// function): the arguments whose attackers are all attacked by the set.
    pub fn defended_by(&self, set: &Extension) -> Extension {
        self.arguments
            .iter()
            .map(|arg| arg.id())
            .filter(|id| {
                self.attacker_ids_of(*id)
                    .all(|attacker| self.is_attacked_by_set(attacker, set))
            })
            .collect()
    }

    /// Returns the reduct of this framework w.r.t. the provided set: the restriction of
    /// the framework to the arguments that neither belong to the set nor are attacked
    /// by it.
    ///
    /// The original framework is left untouched, and the ids of the remaining arguments
    /// are preserved.
    pub fn reduct(&self, set: &Extension) -> AAFramework<T> {
        let mut reduced = self.clone();
        for id in self.set_range(set).iter() {
            if self.arguments.has_argument_with_id(id) {
                let label = self.arguments.get_argument_by_id(id).label().clone();
                reduced.remove_argument(&label).unwrap();
            }
        }
        reduced
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the maximal argument id given so far, or `None` if the framework never had
    /// an argument.
    ///
    /// This id may refer to a removed argument.
    pub fn max_argument_id(&self) -> Option<usize> {
        self.argument_set().max_id()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len() - self.n_removed_attacks
    }
}
