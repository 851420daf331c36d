use super::initial_sets::{partition_initial_sets, InitialSetPartition};
use super::transition::TransitionState;
use super::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, Extension, LabelType, Semantics};
use std::collections::HashSet;

/// A reasoner computing extensions through the serialisation of initial sets.
///
/// The reasoner explores the transition system induced by the framework: at each state,
/// the initial sets of the current (reduced) framework are partitioned, a semantics
/// dependent selection function picks the sets to branch on, and a semantics dependent
/// termination function decides whether the accumulated extension is accepted.
///
/// All the semantics of [Semantics] are handled.
/// The worst-case cost is exponential in the number of arguments, which is inherent to
/// the problem.
///
/// A reasoner borrows its framework and holds no other state: each computation builds
/// its own working sets, so distinct computations never contaminate each other.
///
/// # Example
///
/// ```
/// # use serab::aa::{AAFramework, ArgumentSet, LabelType, Semantics};
/// # use serab::solvers::{ExtensionSetComputer, SerialisableExtensionReasoner};
/// fn enumerate_stable<T>(af: &AAFramework<T>) where T: LabelType {
///     let mut reasoner = SerialisableExtensionReasoner::new(af, Semantics::ST);
///     for ext in reasoner.compute_extensions() {
///         println!("got a stable extension: [{}]", ext.format(af));
///     }
/// }
/// # enumerate_stable::<usize>(&AAFramework::default());
/// ```
pub struct SerialisableExtensionReasoner<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: Semantics,
}

impl<'a, T> SerialisableExtensionReasoner<'a, T>
where
    T: LabelType,
{
    /// Builds a new serialisable reasoner for a framework and a semantics.
    pub fn new(af: &'a AAFramework<T>, semantics: Semantics) -> Self {
        Self { af, semantics }
    }

    /// Returns the semantics this reasoner computes the extensions of.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    fn search(&self, state: &TransitionState<T>, result: &mut HashSet<Extension>) {
        let partition = partition_initial_sets(state.theory());
        if is_terminal(self.semantics, state, &partition) {
            result.insert(state.extension().clone());
        }
        for initial_set in selected_sets(self.semantics, &partition) {
            self.search(&state.transit(initial_set), result);
        }
    }
}

/// The selection function: returns the initial sets the search must branch on under the
/// provided semantics.
pub(crate) fn selected_sets(
    semantics: Semantics,
    partition: &InitialSetPartition,
) -> Vec<&Extension> {
    match semantics {
        Semantics::GR => partition.unattacked.iter().collect(),
        Semantics::UC => partition
            .unattacked
            .iter()
            .chain(partition.unchallenged.iter())
            .collect(),
        Semantics::CO | Semantics::PR | Semantics::ST | Semantics::ADM => {
            partition.iter_all().collect()
        }
    }
}

/// The termination function: decides whether the accumulated extension of a state is
/// accepted under the provided semantics.
pub(crate) fn is_terminal<T>(
    semantics: Semantics,
    state: &TransitionState<T>,
    partition: &InitialSetPartition,
) -> bool
where
    T: LabelType,
{
    match semantics {
        Semantics::ADM => true,
        Semantics::ST => state.theory().n_arguments() == 0,
        Semantics::GR | Semantics::CO => partition.unattacked.is_empty(),
        Semantics::PR => partition.is_empty(),
        Semantics::UC => partition.unattacked.is_empty() && partition.unchallenged.is_empty(),
    }
}

impl<T> ExtensionSetComputer<T> for SerialisableExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Vec<Extension> {
        let mut result = HashSet::new();
        self.search(&TransitionState::new_initial(self.af), &mut result);
        let mut extensions = result.into_iter().collect::<Vec<Extension>>();
        extensions.sort_unstable();
        extensions
    }
}

impl<T> SingleExtensionComputer<T> for SerialisableExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Option<Vec<&Argument<T>>> {
        self.compute_extensions()
            .first()
            .map(|ext| ext.arguments(self.af))
    }
}

impl<T> CredulousAcceptanceComputer<T> for SerialisableExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_extensions()
            .iter()
            .any(|ext| ext.contains(arg.id()))
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match self
            .compute_extensions()
            .into_iter()
            .find(|ext| ext.contains(arg.id()))
        {
            Some(ext) => (true, Some(ext.arguments(self.af))),
            None => (false, None),
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for SerialisableExtensionReasoner<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> bool {
        self.compute_extensions()
            .iter()
            .all(|ext| ext.contains(arg.id()))
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> (bool, Option<Vec<&Argument<T>>>) {
        match self
            .compute_extensions()
            .into_iter()
            .find(|ext| !ext.contains(arg.id()))
        {
            Some(ext) => (false, Some(ext.arguments(self.af))),
            None => (true, None),
        }
    }
}
