//! The reasoners computing extensions and rankings of Abstract Argumentation frameworks.

mod analysis;
pub use analysis::SerialisableExtensionAnalyser;
pub use analysis::SerialisationAnalysis;
pub use analysis::SerialisationGraph;

mod initial_sets;
pub use initial_sets::initial_sets;
pub use initial_sets::partition_initial_sets;
pub use initial_sets::InitialSetPartition;

mod ranking;
pub use ranking::ComparisonSign;
pub use ranking::ExtensionRankingReasoner;

mod serialisable;
pub use serialisable::SerialisableExtensionReasoner;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionSetComputer;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod transition;
pub use transition::TransitionState;
