use crate::aa::{AAFramework, Extension, LabelType};

/// A state of the serialisation process: a (possibly reduced) framework together with the
/// extension accumulated so far.
///
/// The initial state of a search pairs the root framework with the empty extension.
/// Each transition removes a chosen initial set and the arguments it attacks from the
/// framework, and adds the initial set to the accumulated extension.
///
/// States are never mutated: a transition builds a new state.
/// Since reductions preserve argument ids and remove exactly the range of the chosen sets,
/// the accumulated extension uniquely determines the reduced framework; it is thus used as
/// the identity of the state when states must be compared or memoized.
pub struct TransitionState<T>
where
    T: LabelType,
{
    theory: AAFramework<T>,
    extension: Extension,
}

impl<T> TransitionState<T>
where
    T: LabelType,
{
    /// Builds the initial state of a search over the provided framework.
    pub fn new_initial(af: &AAFramework<T>) -> Self {
        TransitionState {
            theory: af.clone(),
            extension: Extension::new(),
        }
    }

    /// Returns the (possibly reduced) framework of this state.
    pub fn theory(&self) -> &AAFramework<T> {
        &self.theory
    }

    /// Returns the extension accumulated so far.
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// Builds the state obtained by selecting an initial set of this state's framework:
    /// the framework is reduced w.r.t. the set, and the set joins the accumulated
    /// extension.
    pub fn transit(&self, initial_set: &Extension) -> TransitionState<T> {
        TransitionState {
            theory: self.theory.reduct(initial_set),
            extension: self.extension.union(initial_set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn chain_af() -> AAFramework<&'static str> {
        let labels = vec!["a", "b", "c", "d", "e"];
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        for w in labels.windows(2) {
            af.new_attack(&w[0], &w[1]).unwrap();
        }
        af
    }

    #[test]
    fn test_initial_state() {
        let af = chain_af();
        let state = TransitionState::new_initial(&af);
        assert_eq!(5, state.theory().n_arguments());
        assert!(state.extension().is_empty());
    }

    #[test]
    fn test_transit() {
        let af = chain_af();
        let state = TransitionState::new_initial(&af);
        let next = state.transit(&Extension::from_iter([0]));
        assert_eq!(Extension::from_iter([0]), *next.extension());
        assert_eq!(3, next.theory().n_arguments());
        let last = next.transit(&Extension::from_iter([2]));
        assert_eq!(Extension::from_iter([0, 2]), *last.extension());
        assert_eq!(1, last.theory().n_arguments());
        // the original state is left untouched
        assert_eq!(5, state.theory().n_arguments());
        assert_eq!(3, next.theory().n_arguments());
    }
}
