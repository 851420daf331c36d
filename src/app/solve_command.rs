use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use serab::aa::{read_problem_string, AAFramework, Query, Semantics};
use serab::io::{AspartixWriter, ResponseWriter};
use serab::solvers::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SerialisableExtensionReasoner,
    SingleExtensionComputer, SkepticalAcceptanceComputer,
};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_aspartix_file_path(file)?;
        let (query, semantics) = read_problem_string(arg_matches.value_of(ARG_PROBLEM).unwrap())?;
        let arg = arg_matches.value_of(ARG_ARG);
        check_arg_definition(query, arg)?;
        info!(
            "solving {}-{} with the serialisable extensions reasoner",
            query.as_ref(),
            semantics.as_ref()
        );
        match query {
            Query::SE => compute_one_extension(&af, semantics),
            Query::EE => enumerate_extensions(&af, semantics),
            Query::DC => check_credulous_acceptance(&af, semantics, arg.unwrap()),
            Query::DS => check_skeptical_acceptance(&af, semantics, arg.unwrap()),
        }
    }
}

fn check_arg_definition(query: Query, arg: Option<&str>) -> Result<()> {
    match query {
        Query::SE | Query::EE => {
            if arg.is_some() {
                warn!(
                    "unexpected argument on the command line (useless for query {})",
                    query.as_ref()
                );
            }
            Ok(())
        }
        Query::DC | Query::DS => {
            if arg.is_none() {
                Err(anyhow!(
                    "missing argument on the command line (required for query {})",
                    query.as_ref()
                ))
            } else {
                Ok(())
            }
        }
    }
}

fn compute_one_extension(af: &AAFramework<String>, semantics: Semantics) -> Result<()> {
    let mut reasoner = SerialisableExtensionReasoner::new(af, semantics);
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    match reasoner.compute_one_extension() {
        Some(ext) => writer.write_single_extension(&mut out, &ext),
        None => writer.write_no_extension(&mut out),
    }
}

fn enumerate_extensions(af: &AAFramework<String>, semantics: Semantics) -> Result<()> {
    let mut reasoner = SerialisableExtensionReasoner::new(af, semantics);
    let extensions = reasoner.compute_extensions();
    info!("found {} extension(s)", extensions.len());
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_extension_set(&mut out, af, &extensions)
}

fn check_credulous_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg: &str,
) -> Result<()> {
    let arg = af.argument_set().get_argument(&arg.to_string())?;
    let mut reasoner = SerialisableExtensionReasoner::new(af, semantics);
    let (accepted, certificate) = reasoner.is_credulously_accepted_with_certificate(arg);
    if let Some(certificate) = certificate {
        info!(
            "the argument belongs to the extension [{}]",
            certificate
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<String>>()
                .join(",")
        );
    }
    let writer = AspartixWriter::default();
    writer.write_acceptance_status(&mut std::io::stdout(), accepted)
}

fn check_skeptical_acceptance(
    af: &AAFramework<String>,
    semantics: Semantics,
    arg: &str,
) -> Result<()> {
    let arg = af.argument_set().get_argument(&arg.to_string())?;
    let mut reasoner = SerialisableExtensionReasoner::new(af, semantics);
    let (accepted, counterexample) = reasoner.is_skeptically_accepted_with_certificate(arg);
    if let Some(counterexample) = counterexample {
        info!(
            "the argument does not belong to the extension [{}]",
            counterexample
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<String>>()
                .join(",")
        );
    }
    let writer = AspartixWriter::default();
    writer.write_acceptance_status(&mut std::io::stdout(), accepted)
}
