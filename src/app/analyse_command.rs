use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use serab::aa::Semantics;
use serab::solvers::SerialisableExtensionAnalyser;

const CMD_NAME: &str = "analyse";

const ARG_SEMANTICS: &str = "SEMANTICS";
const ARG_DOT: &str = "DOT";

pub(crate) struct AnalyseCommand;

impl AnalyseCommand {
    pub(crate) fn new() -> Self {
        AnalyseCommand
    }
}

impl<'a> Command<'a> for AnalyseCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the serialisable extensions of an AF and their derivation graph")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_SEMANTICS)
                    .short("s")
                    .empty_values(false)
                    .multiple(false)
                    .help("the semantics to compute the extensions of")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_DOT)
                    .short("d")
                    .long("dot")
                    .takes_value(false)
                    .help("print the derivation graph using the DOT format")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_aspartix_file_path(file)?;
        let semantics = Semantics::try_from(arg_matches.value_of(ARG_SEMANTICS).unwrap())?;
        let analyser = SerialisableExtensionAnalyser::new(&af, semantics);
        let analysis = analyser.compute_with_analysis();
        info!(
            "found {} extension(s) for the {} semantics",
            analysis.extensions().len(),
            semantics.as_ref()
        );
        for ext in analysis.extensions() {
            info!("extension: [{}]", ext.format(&af));
        }
        let graph = analysis.graph();
        info!(
            "the derivation graph has {} state(s) and {} transition(s)",
            graph.n_nodes(),
            graph.n_edges()
        );
        if arg_matches.is_present(ARG_DOT) {
            print!("{}", graph.dot(&af));
        }
        Ok(())
    }
}
