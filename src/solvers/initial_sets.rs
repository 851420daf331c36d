use crate::aa::{AAFramework, Extension, LabelType};
use std::collections::HashSet;

/// The initial sets of a framework, partitioned by their relation to the attacks of the
/// framework.
///
/// An initial set is a minimal non-empty admissible set.
/// The three categories are mutually exclusive and cover all the initial sets:
/// a set is unattacked, or unchallenged (attacked, but by no other initial set),
/// or challenged (attacked by another initial set).
pub struct InitialSetPartition {
    /// The initial sets no argument of the framework attacks.
    pub unattacked: Vec<Extension>,
    /// The initial sets that are attacked, but by no other initial set.
    pub unchallenged: Vec<Extension>,
    /// The initial sets attacked by another initial set.
    pub challenged: Vec<Extension>,
}

impl InitialSetPartition {
    /// Returns `true` if and only if the framework has no initial set at all.
    pub fn is_empty(&self) -> bool {
        self.unattacked.is_empty() && self.unchallenged.is_empty() && self.challenged.is_empty()
    }

    /// Iterates over the initial sets of all three categories.
    pub fn iter_all(&self) -> impl Iterator<Item = &Extension> + '_ {
        self.unattacked
            .iter()
            .chain(self.unchallenged.iter())
            .chain(self.challenged.iter())
    }
}

/// Computes the initial sets of a framework: its minimal non-empty admissible sets.
///
/// The discovery is a defense-closure search: each candidate starts as a singleton and
/// grows by branching over the possible defenders of its undefended attackers.
/// The candidates obtained this way are admissible; the inclusion-minimal ones are the
/// initial sets.
/// The worst case remains exponential in the number of arguments, but no power-set scan
/// is performed.
pub fn initial_sets<T>(af: &AAFramework<T>) -> Vec<Extension>
where
    T: LabelType,
{
    let mut admissible = HashSet::new();
    let mut seen = HashSet::new();
    for arg in af.argument_set().iter() {
        let singleton = Extension::new_singleton(arg.id());
        if af.is_conflict_free(&singleton) {
            grow_admissible(af, singleton, &mut seen, &mut admissible);
        }
    }
    let mut result = admissible
        .iter()
        .filter(|s| !admissible.iter().any(|t| t.is_strict_subset(s)))
        .cloned()
        .collect::<Vec<Extension>>();
    result.sort_unstable();
    result
}

fn grow_admissible<T>(
    af: &AAFramework<T>,
    current: Extension,
    seen: &mut HashSet<Extension>,
    admissible: &mut HashSet<Extension>,
) where
    T: LabelType,
{
    if !seen.insert(current.clone()) {
        return;
    }
    match first_undefended_attacker(af, &current) {
        None => {
            admissible.insert(current);
        }
        Some(attacker) => {
            let defenders = af.attacker_ids_of(attacker).collect::<HashSet<usize>>();
            for defender in defenders {
                if current.contains(defender) {
                    continue;
                }
                let mut extended = current.clone();
                extended.insert(defender);
                if af.is_conflict_free(&extended) {
                    grow_admissible(af, extended, seen, admissible);
                }
            }
        }
    }
}

fn first_undefended_attacker<T>(af: &AAFramework<T>, set: &Extension) -> Option<usize>
where
    T: LabelType,
{
    set.iter().find_map(|member| {
        af.attacker_ids_of(member)
            .filter(|attacker| !af.is_attacked_by_set(*attacker, set))
            .min()
    })
}

/// Computes the initial sets of a framework and partitions them into the unattacked,
/// unchallenged and challenged categories.
///
/// An empty framework yields three empty categories; this function never fails on a
/// well-formed framework.
pub fn partition_initial_sets<T>(af: &AAFramework<T>) -> InitialSetPartition
where
    T: LabelType,
{
    let all = initial_sets(af);
    let mut partition = InitialSetPartition {
        unattacked: vec![],
        unchallenged: vec![],
        challenged: vec![],
    };
    for set in &all {
        let attackers = af.attackers_of_set(set);
        if attackers.is_empty() {
            partition.unattacked.push(set.clone());
        } else if all
            .iter()
            .any(|other| other != set && !other.restrict(&attackers).is_empty())
        {
            partition.challenged.push(set.clone());
        } else {
            partition.unchallenged.push(set.clone());
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn af_with_attacks(
        labels: &[&'static str],
        attacks: &[(&'static str, &'static str)],
    ) -> AAFramework<&'static str> {
        let mut af =
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels.to_vec()));
        for (from, to) in attacks {
            af.new_attack(from, to).unwrap();
        }
        af
    }

    #[test]
    fn test_initial_sets_of_empty_af() {
        let af = af_with_attacks(&[], &[]);
        assert!(initial_sets(&af).is_empty());
        assert!(partition_initial_sets(&af).is_empty());
    }

    #[test]
    fn test_initial_sets_of_chain() {
        let af = af_with_attacks(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        assert_eq!(vec![Extension::from_iter([0])], initial_sets(&af));
        let partition = partition_initial_sets(&af);
        assert_eq!(vec![Extension::from_iter([0])], partition.unattacked);
        assert!(partition.unchallenged.is_empty());
        assert!(partition.challenged.is_empty());
    }

    #[test]
    fn test_initial_sets_of_mutual_attack() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        assert_eq!(
            vec![Extension::from_iter([0]), Extension::from_iter([1])],
            initial_sets(&af)
        );
        let partition = partition_initial_sets(&af);
        assert!(partition.unattacked.is_empty());
        assert!(partition.unchallenged.is_empty());
        assert_eq!(2, partition.challenged.len());
    }

    #[test]
    fn test_initial_sets_need_a_defender() {
        // c is acceptable only together with a
        let af = af_with_attacks(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(vec![Extension::from_iter([0])], initial_sets(&af));
    }

    #[test]
    fn test_initial_sets_of_four_cycle() {
        // no singleton is admissible; the minimal admissible sets have two members
        let af = af_with_attacks(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
        );
        assert_eq!(
            vec![Extension::from_iter([0, 2]), Extension::from_iter([1, 3])],
            initial_sets(&af)
        );
        let partition = partition_initial_sets(&af);
        assert!(partition.unattacked.is_empty());
        assert!(partition.unchallenged.is_empty());
        assert_eq!(2, partition.challenged.len());
    }

    #[test]
    fn test_non_minimal_admissible_sets_are_discarded() {
        // {a,d} is admissible but contains the initial set {d}
        let af = af_with_attacks(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("c", "a"), ("d", "c"), ("c", "d")],
        );
        assert_eq!(
            vec![
                Extension::from_iter([1]),
                Extension::from_iter([2]),
                Extension::from_iter([3]),
            ],
            initial_sets(&af)
        );
    }

    #[test]
    fn test_unchallenged_category() {
        // b attacks itself, a is attacked by b but no initial set attacks a
        let af = af_with_attacks(&["a", "b"], &[("b", "b"), ("b", "a"), ("a", "b")]);
        let partition = partition_initial_sets(&af);
        assert!(partition.unattacked.is_empty());
        assert_eq!(vec![Extension::from_iter([0])], partition.unchallenged);
        assert!(partition.challenged.is_empty());
    }

    #[test]
    fn test_self_attacker_yields_no_initial_set() {
        let af = af_with_attacks(&["a"], &[("a", "a")]);
        assert!(initial_sets(&af).is_empty());
    }

    #[test]
    fn test_initial_sets_are_minimal() {
        let af = af_with_attacks(&["a", "b"], &[]);
        assert_eq!(
            vec![Extension::from_iter([0]), Extension::from_iter([1])],
            initial_sets(&af)
        );
    }
}
