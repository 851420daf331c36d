//! Objects used to read and write Argumentation frameworks and answers to problems.

mod aspartix_reader;
pub use aspartix_reader::AspartixReader;

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod specs;
pub use specs::InstanceReader;
pub use specs::ResponseWriter;
pub use specs::WarningHandler;

mod warning_result;
