use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use serab::aa::RankingSemantics;
use serab::solvers::ExtensionRankingReasoner;

const CMD_NAME: &str = "rank";

const ARG_SEMANTICS: &str = "SEMANTICS";

// the ranking enumerates the power set of the arguments
const POWER_SET_WARNING_THRESHOLD: usize = 16;

pub(crate) struct RankCommand;

impl RankCommand {
    pub(crate) fn new() -> Self {
        RankCommand
    }
}

impl<'a> Command<'a> for RankCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Ranks all the sets of arguments of an AF, the best sets first")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_SEMANTICS)
                    .short("s")
                    .empty_values(false)
                    .multiple(false)
                    .help("the ranking semantics to order the sets with")
                    .required(true),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_aspartix_file_path(file)?;
        let semantics = RankingSemantics::try_from(arg_matches.value_of(ARG_SEMANTICS).unwrap())?;
        if af.n_arguments() > POWER_SET_WARNING_THRESHOLD {
            warn!(
                "ranking a framework with {} arguments requires the enumeration of 2^{} sets",
                af.n_arguments(),
                af.n_arguments()
            );
        }
        let reasoner = ExtensionRankingReasoner::new(&af, semantics);
        let ranking = reasoner.compute_ranking();
        info!(
            "computed {} rank(s) for the {} ranking semantics",
            ranking.len(),
            semantics.as_ref()
        );
        for (i, rank) in ranking.iter().enumerate() {
            println!(
                "rank {}: {}",
                i,
                rank.iter()
                    .map(|ext| format!("[{}]", ext.format(&af)))
                    .collect::<Vec<String>>()
                    .join(" ")
            );
        }
        Ok(())
    }
}
