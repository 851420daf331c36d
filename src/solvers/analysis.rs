use super::initial_sets::partition_initial_sets;
use super::serialisable::{is_terminal, selected_sets};
use super::transition::TransitionState;
use super::ExtensionSetComputer;
use crate::aa::{AAFramework, Extension, LabelType, Semantics};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// The derivation graph of a serialisation process.
///
/// Nodes are the accumulated extensions of the visited transition states; an edge links a
/// state to one of its successors and is labeled by the initial set that caused the
/// transition.
/// Nodes and edges are deduplicated, so states reached through several paths appear once.
pub struct SerialisationGraph {
    nodes: Vec<Extension>,
    node_ids: HashMap<Extension, usize>,
    edges: Vec<(usize, usize, Extension)>,
    known_edges: HashSet<(usize, usize)>,
    root: usize,
}

impl SerialisationGraph {
    fn new_with_root(root_extension: Extension) -> Self {
        let mut graph = SerialisationGraph {
            nodes: vec![],
            node_ids: HashMap::new(),
            edges: vec![],
            known_edges: HashSet::new(),
            root: 0,
        };
        graph.root = graph.node_id_or_insert(root_extension);
        graph
    }

    /// Returns the id of the root node: the state the serialisation process started with.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the number of nodes of the graph.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges of the graph.
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the extension associated with a node.
    ///
    /// # Panics
    ///
    /// Panics if no node has the provided id.
    pub fn node_extension(&self, id: usize) -> &Extension {
        &self.nodes[id]
    }

    /// Returns the id of the node associated with an extension, if any.
    pub fn node_id(&self, extension: &Extension) -> Option<usize> {
        self.node_ids.get(extension).copied()
    }

    /// Iterates over the edges of the graph as (source, destination, initial set) triples.
    pub fn iter_edges(&self) -> impl Iterator<Item = (usize, usize, &Extension)> + '_ {
        self.edges.iter().map(|(f, t, l)| (*f, *t, l))
    }

    /// Returns the ids of the successor nodes of a node.
    pub fn children_of(&self, id: usize) -> Vec<usize> {
        self.edges
            .iter()
            .filter(|(f, _, _)| *f == id)
            .map(|(_, t, _)| *t)
            .collect()
    }

    /// Returns the ids of the nodes without successors.
    pub fn leaves(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|id| self.children_of(*id).is_empty())
            .collect()
    }

    /// Returns all the serialisation sequences leading from the root to the provided
    /// node: the successive initial sets labeling each path.
    ///
    /// # Panics
    ///
    /// Panics if no node has the provided id.
    pub fn serialisation_sequences(&self, target: usize) -> Vec<Vec<Extension>> {
        assert!(target < self.nodes.len());
        let mut result = vec![];
        self.sequences_to(target, self.root, &mut vec![], &mut result);
        result
    }

    fn sequences_to(
        &self,
        target: usize,
        current: usize,
        prefix: &mut Vec<Extension>,
        result: &mut Vec<Vec<Extension>>,
    ) {
        if current == target {
            result.push(prefix.clone());
            return;
        }
        for (from, to, label) in self.iter_edges() {
            if from == current {
                prefix.push(label.clone());
                self.sequences_to(target, to, prefix, result);
                prefix.pop();
            }
        }
    }

    /// Renders the graph in the DOT format, labeling nodes and edges with argument
    /// labels taken from the provided framework.
    pub fn dot<T>(&self, af: &AAFramework<T>) -> String
    where
        T: LabelType,
    {
        let mut out = String::from("digraph serialisation {\n");
        for (id, ext) in self.nodes.iter().enumerate() {
            out.push_str(&format!("  n{} [label=\"{{{}}}\"];\n", id, ext.format(af)));
        }
        for (from, to, label) in self.iter_edges() {
            out.push_str(&format!(
                "  n{} -> n{} [label=\"{{{}}}\"];\n",
                from,
                to,
                label.format(af)
            ));
        }
        out.push_str("}\n");
        out
    }

    fn node_id_or_insert(&mut self, extension: Extension) -> usize {
        match self.node_ids.get(&extension) {
            Some(id) => *id,
            None => {
                let id = self.nodes.len();
                self.nodes.push(extension.clone());
                self.node_ids.insert(extension, id);
                id
            }
        }
    }

    fn add_edge(&mut self, from: usize, to: usize, label: &Extension) {
        if self.known_edges.insert((from, to)) {
            self.edges.push((from, to, label.clone()));
        }
    }

    /// Merges a sub-graph into this graph, linking the provided parent node to the
    /// sub-graph's root with an edge labeled by the initial set that produced it.
    fn merge(&mut self, parent: usize, sub: &SerialisationGraph, label: &Extension) {
        let mut sub_to_self = Vec::with_capacity(sub.nodes.len());
        for node in &sub.nodes {
            sub_to_self.push(self.node_id_or_insert(node.clone()));
        }
        for (from, to, sub_label) in sub.iter_edges() {
            self.add_edge(sub_to_self[from], sub_to_self[to], sub_label);
        }
        self.add_edge(parent, sub_to_self[sub.root], label);
    }
}

/// The result of a serialisation process examined by a
/// [SerialisableExtensionAnalyser]: the extensions, but also how they were derived.
///
/// An analysis describes one transition state.
/// It bundles the state's (reduced) framework and accumulated extension, the semantics in
/// use, the derivation graph of the whole subtree rooted at the state, the extensions
/// found in this subtree, and one sub-analysis per successor state.
pub struct SerialisationAnalysis<T>
where
    T: LabelType,
{
    theory: AAFramework<T>,
    extension: Extension,
    semantics: Semantics,
    graph: SerialisationGraph,
    extensions: Vec<Extension>,
    sub_analyses: Vec<Rc<SerialisationAnalysis<T>>>,
}

impl<T> SerialisationAnalysis<T>
where
    T: LabelType,
{
    /// Returns the (possibly reduced) framework of the state this analysis describes.
    pub fn theory(&self) -> &AAFramework<T> {
        &self.theory
    }

    /// Returns the extension accumulated at the state this analysis describes.
    pub fn extension(&self) -> &Extension {
        &self.extension
    }

    /// Returns the semantics used during the serialisation process.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the derivation graph of the subtree rooted at this state.
    pub fn graph(&self) -> &SerialisationGraph {
        &self.graph
    }

    /// Returns the extensions found in the subtree rooted at this state.
    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    /// Returns the analyses of the successor states.
    pub fn sub_analyses(&self) -> &[Rc<SerialisationAnalysis<T>>] {
        &self.sub_analyses
    }
}

/// A serialisable extensions reasoner that additionally reports how the extensions were
/// derived.
///
/// This reasoner mirrors [SerialisableExtensionReasoner](super::SerialisableExtensionReasoner)
/// but builds a [SerialisationAnalysis] along the search.
/// The states visited during a computation are memoized: a state reachable through
/// several paths is examined once, and its analysis is shared by all its parents.
/// All the working sets live within a single call, so a reasoner may be used for several
/// computations and distinct computations never contaminate each other.
pub struct SerialisableExtensionAnalyser<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    semantics: Semantics,
}

impl<'a, T> SerialisableExtensionAnalyser<'a, T>
where
    T: LabelType,
{
    /// Builds a new analysing reasoner for a framework and a semantics.
    pub fn new(af: &'a AAFramework<T>, semantics: Semantics) -> Self {
        Self { af, semantics }
    }

    /// Returns the semantics this reasoner computes the extensions of.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Examines the framework and computes its extensions together with their full
    /// derivation.
    pub fn compute_with_analysis(&self) -> Rc<SerialisationAnalysis<T>> {
        let mut visited = HashSet::new();
        let mut computed = HashMap::new();
        self.search(
            &TransitionState::new_initial(self.af),
            &mut visited,
            &mut computed,
        )
        .unwrap()
    }

    /// Examines recursively a state and the states that can be derived from it.
    ///
    /// Returns `None` when the state has been visited but its analysis is not available
    /// yet, in which case the caller must simply ignore the branch.
    fn search(
        &self,
        state: &TransitionState<T>,
        visited: &mut HashSet<Extension>,
        computed: &mut HashMap<Extension, Rc<SerialisationAnalysis<T>>>,
    ) -> Option<Rc<SerialisationAnalysis<T>>> {
        let key = state.extension().clone();
        if visited.contains(&key) {
            return computed.get(&key).cloned();
        }
        visited.insert(key.clone());
        let mut graph = SerialisationGraph::new_with_root(key.clone());
        let root = graph.root();
        let mut found = HashSet::new();
        let mut sub_analyses = vec![];
        let partition = partition_initial_sets(state.theory());
        if is_terminal(self.semantics, state, &partition) {
            found.insert(key.clone());
        }
        for initial_set in selected_sets(self.semantics, &partition) {
            let next = state.transit(initial_set);
            if let Some(sub) = self.search(&next, visited, computed) {
                found.extend(sub.extensions().iter().cloned());
                graph.merge(root, sub.graph(), initial_set);
                sub_analyses.push(sub);
            }
        }
        let mut extensions = found.into_iter().collect::<Vec<Extension>>();
        extensions.sort_unstable();
        let analysis = Rc::new(SerialisationAnalysis {
            theory: state.theory().clone(),
            extension: key.clone(),
            semantics: self.semantics,
            graph,
            extensions,
            sub_analyses,
        });
        computed.insert(key, Rc::clone(&analysis));
        Some(analysis)
    }
}

impl<T> ExtensionSetComputer<T> for SerialisableExtensionAnalyser<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Vec<Extension> {
        self.compute_with_analysis().extensions().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::solvers::SerialisableExtensionReasoner;

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
    fn test_analysis_of_chain_under_grounded() {
        let af = af_with_attacks(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        let analysis = SerialisableExtensionAnalyser::new(&af, Semantics::GR).compute_with_analysis();
        assert_eq!(&[Extension::from_iter([0, 2, 4])], analysis.extensions());
        assert_eq!(Semantics::GR, analysis.semantics());
        assert!(analysis.extension().is_empty());
        let graph = analysis.graph();
        assert_eq!(4, graph.n_nodes());
        assert_eq!(3, graph.n_edges());
        let leaves = graph.leaves();
        assert_eq!(1, leaves.len());
        assert_eq!(
            &Extension::from_iter([0, 2, 4]),
            graph.node_extension(leaves[0])
        );
        assert_eq!(1, analysis.sub_analyses().len());
    }

    #[test]
    fn test_analysis_of_mutual_attack_under_stable() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let analysis = SerialisableExtensionAnalyser::new(&af, Semantics::ST).compute_with_analysis();
        assert_eq!(
            &[Extension::from_iter([0]), Extension::from_iter([1])],
            analysis.extensions()
        );
        let graph = analysis.graph();
        assert_eq!(3, graph.n_nodes());
        assert_eq!(2, graph.n_edges());
        assert_eq!(2, graph.children_of(graph.root()).len());
        assert_eq!(2, analysis.sub_analyses().len());
        for sub in analysis.sub_analyses() {
            assert_eq!(0, sub.theory().n_arguments());
            assert_eq!(1, sub.extensions().len());
        }
    }

    #[test]
    fn test_reconverging_paths_share_their_analysis() {
        // no attack: {a,b} is reachable by serialising {a} then {b}, or the other way
        let af = af_with_attacks(&["a", "b"], &[]);
        let analysis = SerialisableExtensionAnalyser::new(&af, Semantics::ADM).compute_with_analysis();
        let graph = analysis.graph();
        assert_eq!(4, graph.n_nodes());
        assert_eq!(4, graph.n_edges());
        let target = graph.node_id(&Extension::from_iter([0, 1])).unwrap();
        let mut sequences = graph.serialisation_sequences(target);
        sequences.sort_unstable();
        assert_eq!(
            vec![
                vec![Extension::from_iter([0]), Extension::from_iter([1])],
                vec![Extension::from_iter([1]), Extension::from_iter([0])],
            ],
            sequences
        );
    }

    #[test]
    fn test_analysis_extensions_match_the_basic_reasoner() {
        let af = af_with_attacks(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")],
        );
        for semantics in [
            Semantics::GR,
            Semantics::CO,
            Semantics::PR,
            Semantics::ST,
            Semantics::ADM,
            Semantics::UC,
        ] {
            let mut analyser = SerialisableExtensionAnalyser::new(&af, semantics);
            let mut reasoner = SerialisableExtensionReasoner::new(&af, semantics);
            assert_eq!(
                reasoner.compute_extensions(),
                analyser.compute_extensions(),
                "extension sets differ for {:?}",
                semantics
            );
        }
    }

    #[test]
    fn test_dot_rendering() {
        let af = af_with_attacks(&["a", "b"], &[("a", "b")]);
        let analysis = SerialisableExtensionAnalyser::new(&af, Semantics::GR).compute_with_analysis();
        let dot = analysis.graph().dot(&af);
        assert!(dot.starts_with("digraph serialisation {"));
        assert!(dot.contains("n0 [label=\"{}\"]"));
        assert!(dot.contains("n1 [label=\"{a}\"]"));
        assert!(dot.contains("n0 -> n1 [label=\"{a}\"]"));
    }
}
