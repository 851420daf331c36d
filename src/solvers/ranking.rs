use crate::aa::{AAFramework, Extension, LabelType, RankingSemantics};
use permutator::Combination;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// The outcome of the comparison of two extensions.
///
/// `Less` means the first extension is ranked strictly better than the second one.
/// Incomparable pairs are represented by the absence of a sign, never by an arbitrary
/// ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonSign {
    /// The first extension is ranked better
    Less,
    /// The first extension is ranked worse
    Greater,
    /// Both extensions are ranked equally
    Equal,
}

impl ComparisonSign {
    fn inverted(self) -> Self {
        match self {
            ComparisonSign::Less => ComparisonSign::Greater,
            ComparisonSign::Greater => ComparisonSign::Less,
            ComparisonSign::Equal => ComparisonSign::Equal,
        }
    }
}

/// The image of a base function: a set of atoms the images of two extensions are
/// compared with.
///
/// Atoms are packed argument ids or attack pairs; images of distinct base functions are
/// never compared together.
type BaseImage = BTreeSet<u64>;

type BaseFunction<T> = fn(&AAFramework<T>, &Extension) -> BaseImage;

/// Returns the base functions of a ranking semantics, in their lexicographic order.
fn base_functions<T>(semantics: RankingSemantics) -> Vec<BaseFunction<T>>
where
    T: LabelType,
{
    match semantics {
        RankingSemantics::CF => vec![conflicts],
        RankingSemantics::AD | RankingSemantics::PR => vec![conflicts, undefended],
        RankingSemantics::CO | RankingSemantics::GR => {
            vec![conflicts, undefended, defended_not_in]
        }
        RankingSemantics::SST => vec![conflicts, undefended, defended_not_in, unattacked_outside],
    }
}

fn pack_attack(attacker: usize, attacked: usize) -> u64 {
    ((attacker as u64) << 32) | attacked as u64
}

/// Computes the attacks occurring between two members of the extension.
fn conflicts<T>(af: &AAFramework<T>, ext: &Extension) -> BaseImage
where
    T: LabelType,
{
    af.iter_attacks()
        .filter(|att| ext.contains(att.attacker().id()) && ext.contains(att.attacked().id()))
        .map(|att| pack_attack(att.attacker().id(), att.attacked().id()))
        .collect()
}

/// Computes the members of the extension it does not defend against outside attackers.
fn undefended<T>(af: &AAFramework<T>, ext: &Extension) -> BaseImage
where
    T: LabelType,
{
    ext.iter()
        .filter(|member| {
            af.attacker_ids_of(*member)
                .any(|attacker| !ext.contains(attacker) && !af.is_attacked_by_set(attacker, ext))
        })
        .map(|id| id as u64)
        .collect()
}

/// Computes the arguments outside of the extension that it does not attack.
fn unattacked_outside<T>(af: &AAFramework<T>, ext: &Extension) -> BaseImage
where
    T: LabelType,
{
    af.argument_set()
        .iter()
        .map(|arg| arg.id())
        .filter(|id| !ext.contains(*id) && !af.is_attacked_by_set(*id, ext))
        .map(|id| id as u64)
        .collect()
}

/// Computes the arguments outside of the extension that it defends.
///
/// The computation iterates the characteristic function from the extension, pruning the
/// attackers of the extension at each step, until a fixpoint is reached.
fn defended_not_in<T>(af: &AAFramework<T>, ext: &Extension) -> BaseImage
where
    T: LabelType,
{
    let ext_minus = af.attackers_of_set(ext);
    let mut faf_star = ext.clone();
    loop {
        let next = faf_star
            .union(&af.defended_by(&faf_star))
            .subtract(&ext_minus);
        if next == faf_star {
            break;
        }
        faf_star = next;
    }
    faf_star.subtract(ext).iter().map(|id| id as u64).collect()
}

/// A mapping from pairs of candidate indices to their comparison sign.
///
/// Each unordered pair is stored once, under its (lower, higher) index form; queries in
/// the other direction invert the stored sign.
#[derive(Default)]
struct ComparisonMap {
    signs: HashMap<(usize, usize), Option<ComparisonSign>>,
}

impl ComparisonMap {
    fn insert(&mut self, i: usize, j: usize, sign: Option<ComparisonSign>) {
        debug_assert!(i < j);
        self.signs.insert((i, j), sign);
    }

    fn sign(&self, i: usize, j: usize) -> Option<ComparisonSign> {
        if i < j {
            self.signs.get(&(i, j)).copied().flatten()
        } else {
            self.signs
                .get(&(j, i))
                .copied()
                .flatten()
                .map(ComparisonSign::inverted)
        }
    }
}

/// A reasoner computing a total preorder over all the sets of arguments of a framework.
///
/// The comparison of two candidate sets is the lexicographic comparison of the images of
/// the base functions associated with the ranking semantics; exhausted ties fall back to
/// the plain subset comparison of the candidates for [RankingSemantics::GR] (smaller is
/// better) and [RankingSemantics::PR] (larger is better), and to equality for the other
/// semantics.
///
/// The candidates are the full power set of the arguments: this reasoner is explicitly a
/// small-instance tool.
///
/// # Example
///
/// ```
/// # use serab::aa::{AAFramework, ArgumentSet, LabelType, RankingSemantics};
/// # use serab::solvers::ExtensionRankingReasoner;
/// fn show_best_sets<T>(af: &AAFramework<T>) where T: LabelType {
///     let reasoner = ExtensionRankingReasoner::new(af, RankingSemantics::GR);
///     for ext in reasoner.compute_best_rank() {
///         println!("among the best sets: [{}]", ext.format(af));
///     }
/// }
/// # show_best_sets::<usize>(&AAFramework::default());
/// ```
pub struct ExtensionRankingReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: RankingSemantics,
}

impl<'a, T> ExtensionRankingReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new ranking reasoner for a framework and a ranking semantics.
    pub fn new(af: &'a AAFramework<T>, semantics: RankingSemantics) -> Self {
        Self { af, semantics }
    }

    /// Returns the ranking semantics of this reasoner.
    pub fn semantics(&self) -> RankingSemantics {
        self.semantics
    }

    /// Computes the ranking of all the sets of arguments of the framework.
    ///
    /// The result is a list of ranks in ascending order: the first rank contains the best
    /// sets.
    /// Two sets belonging to the same rank are equally ranked or incomparable.
    pub fn compute_ranking(&self) -> Vec<Vec<Extension>> {
        let candidates = self.candidates();
        let map = self.compare_all(&candidates);
        let order = topological_order(candidates.len(), &map);
        let ranks = partition_into_ranks(&order, &map);
        ranks
            .into_iter()
            .rev()
            .map(|rank| {
                let mut extensions = rank
                    .into_iter()
                    .map(|i| candidates[i].clone())
                    .collect::<Vec<Extension>>();
                extensions.sort_unstable();
                extensions
            })
            .collect()
    }

    /// Computes the best rank of the ranking: the first element of
    /// [compute_ranking](Self::compute_ranking).
    pub fn compute_best_rank(&self) -> Vec<Extension> {
        self.compute_ranking().into_iter().next().unwrap_or_default()
    }

    /// Enumerates the power set of the arguments, the all-arguments candidate first.
    fn candidates(&self) -> Vec<Extension> {
        let ids = self
            .af
            .argument_set()
            .iter()
            .map(|a| a.id())
            .collect::<Vec<usize>>();
        let mut result = vec![Extension::new()];
        for k in 1..=ids.len() {
            ids.combination(k)
                .for_each(|c| result.push(c.into_iter().copied().collect()));
        }
        result.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        result
    }

    fn compare_all(&self, candidates: &[Extension]) -> ComparisonMap {
        let base_fns = base_functions::<T>(self.semantics);
        let images = candidates
            .iter()
            .map(|c| {
                base_fns
                    .iter()
                    .map(|f| f(self.af, c))
                    .collect::<Vec<BaseImage>>()
            })
            .collect::<Vec<Vec<BaseImage>>>();
        let mut map = ComparisonMap::default();
        for i in 0..candidates.len() {
            for j in i + 1..candidates.len() {
                map.insert(
                    i,
                    j,
                    self.compare(&images[i], &images[j], &candidates[i], &candidates[j]),
                );
            }
        }
        map
    }

    /// Compares two candidates through the images of their base functions, falling back
    /// to the subset comparison of the candidates themselves when every base function
    /// ties.
    fn compare(
        &self,
        images_1: &[BaseImage],
        images_2: &[BaseImage],
        candidate_1: &Extension,
        candidate_2: &Extension,
    ) -> Option<ComparisonSign> {
        for (img_1, img_2) in images_1.iter().zip(images_2.iter()) {
            if img_1 == img_2 {
                continue;
            }
            if img_1.is_subset(img_2) {
                return Some(ComparisonSign::Less);
            }
            if img_2.is_subset(img_1) {
                return Some(ComparisonSign::Greater);
            }
            return None;
        }
        match self.semantics {
            RankingSemantics::GR => subset_sign(candidate_1, candidate_2),
            RankingSemantics::PR => subset_sign(candidate_1, candidate_2).map(|s| s.inverted()),
            _ => Some(ComparisonSign::Equal),
        }
    }
}

fn subset_sign(candidate_1: &Extension, candidate_2: &Extension) -> Option<ComparisonSign> {
    if candidate_1.is_strict_subset(candidate_2) {
        Some(ComparisonSign::Less)
    } else if candidate_2.is_strict_subset(candidate_1) {
        Some(ComparisonSign::Greater)
    } else {
        None
    }
}

/// Sorts the candidates topologically, from the worst to the best ones.
///
/// This is a Kahn-style pass over the comparison relation, seeded from the all-arguments
/// candidate (at index 0), which is the worst-ranked root.
/// A candidate enters the order when all the candidates ranked worse than it have been
/// ordered; candidates unreachable from the root (incomparable to the whole chain above
/// them) are left out.
fn topological_order(n_candidates: usize, map: &ComparisonMap) -> Vec<usize> {
    let mut queue = VecDeque::with_capacity(n_candidates);
    queue.push_back(0);
    let mut result = Vec::with_capacity(n_candidates);
    let mut ordered = vec![false; n_candidates];
    while let Some(current) = queue.pop_front() {
        result.push(current);
        ordered[current] = true;
        for child in 0..n_candidates {
            if map.sign(current, child) != Some(ComparisonSign::Greater) {
                continue;
            }
            let has_unordered_parent = (0..n_candidates)
                .any(|parent| !ordered[parent] && map.sign(parent, child) == Some(ComparisonSign::Greater));
            if !has_unordered_parent {
                queue.push_back(child);
            }
        }
    }
    result
}

/// Splits a worst-to-best topological order into ranks.
///
/// A new rank opens whenever the current candidate is strictly better than a member of
/// the open rank; equally ranked and incomparable candidates share a rank.
fn partition_into_ranks(order: &[usize], map: &ComparisonMap) -> Vec<Vec<usize>> {
    let mut ranks = vec![];
    let mut rank: Vec<usize> = vec![];
    for &candidate in order {
        let better_than_rank_member = rank
            .iter()
            .any(|member| map.sign(*member, candidate) == Some(ComparisonSign::Greater));
        if better_than_rank_member {
            ranks.push(rank.clone());
            rank.clear();
        }
        rank.push(candidate);
    }
    ranks.push(rank);
    ranks
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
    fn test_grounded_ranking_on_single_attack() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b")]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::GR).compute_ranking();
        assert_eq!(
            vec![
                vec![Extension::from_iter([0])],
                vec![Extension::new()],
                vec![Extension::from_iter([1])],
                vec![Extension::from_iter([0, 1])],
            ],
            ranking
        );
    }

    #[test]
    fn test_grounded_ranking_on_mutual_attack() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::GR).compute_ranking();
        assert_eq!(
            vec![
                vec![Extension::new()],
                vec![Extension::from_iter([0]), Extension::from_iter([1])],
                vec![Extension::from_iter([0, 1])],
            ],
            ranking
        );
    }

    #[test]
    fn test_preferred_ranking_on_mutual_attack() {
        // same framework as the grounded case, but the fallback sign is inverted:
        // the preferred-style ranking favors the larger conflict-free sets
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::PR).compute_ranking();
        assert_eq!(
            vec![
                vec![Extension::from_iter([0]), Extension::from_iter([1])],
                vec![Extension::new()],
                vec![Extension::from_iter([0, 1])],
            ],
            ranking
        );
    }

    #[test]
    fn test_conflict_free_ranking_ties() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::CF).compute_ranking();
        assert_eq!(
            vec![
                vec![
                    Extension::new(),
                    Extension::from_iter([0]),
                    Extension::from_iter([1]),
                ],
                vec![Extension::from_iter([0, 1])],
            ],
            ranking
        );
    }

    #[test]
    fn test_best_rank_of_grounded_ranking_is_the_grounded_extension() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b")]);
        let best = ExtensionRankingReasoner::new(&af, RankingSemantics::GR).compute_best_rank();
        assert_eq!(vec![Extension::from_iter([0])], best);
    }

    #[test]
    fn test_ranking_of_empty_af() {
        let af = af_with_attacks(&[], &[]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::GR).compute_ranking();
        assert_eq!(vec![vec![Extension::new()]], ranking);
    }

    #[test]
    fn test_grounded_ranking_subset_monotonicity() {
        // when every base function ties, a strict subset never ranks worse
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let ranking = ExtensionRankingReasoner::new(&af, RankingSemantics::GR).compute_ranking();
        let rank_of = |ext: &Extension| {
            ranking
                .iter()
                .position(|rank| rank.contains(ext))
                .unwrap()
        };
        assert!(rank_of(&Extension::new()) <= rank_of(&Extension::from_iter([0])));
        assert!(rank_of(&Extension::from_iter([0])) <= rank_of(&Extension::from_iter([0, 1])));
    }

    #[test]
    fn test_comparison_signs_are_inverted_when_queried_backwards() {
        let mut map = ComparisonMap::default();
        map.insert(0, 1, Some(ComparisonSign::Less));
        map.insert(1, 2, None);
        assert_eq!(Some(ComparisonSign::Less), map.sign(0, 1));
        assert_eq!(Some(ComparisonSign::Greater), map.sign(1, 0));
        assert_eq!(None, map.sign(1, 2));
        assert_eq!(None, map.sign(2, 1));
    }

    #[test]
    fn test_base_function_images() {
        let af = af_with_attacks(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let ext = Extension::from_iter([0, 1]);
        assert_eq!(BaseImage::from_iter([pack_attack(0, 1)]), conflicts(&af, &ext));
        let singleton_b = Extension::from_iter([1]);
        assert_eq!(BaseImage::from_iter([1]), undefended(&af, &singleton_b));
        assert_eq!(BaseImage::new(), undefended(&af, &Extension::from_iter([0])));
        assert_eq!(
            BaseImage::from_iter([0]),
            unattacked_outside(&af, &singleton_b)
        );
        assert_eq!(
            BaseImage::from_iter([0, 2]),
            defended_not_in(&af, &Extension::new())
        );
        assert_eq!(
            BaseImage::from_iter([2]),
            defended_not_in(&af, &Extension::from_iter([0]))
        );
    }
}
