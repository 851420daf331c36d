use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const DEFAULT_ARG_LABELS_CAP: usize = 1 << 10;

fn captured_arg(c: &Captures, i: usize) -> WarningResult<String, String> {
    let str_arg = c.get(i).unwrap().as_str();
    let trimmed_str_arg = str_arg.trim().to_string();
    if trimmed_str_arg.len() == str_arg.len() {
        WarningResult::Ok(trimmed_str_arg)
    } else {
        WarningResult::Warned(
            trimmed_str_arg,
            vec!["argument names beginning or ending by spaces may be ambiguous".to_string()],
        )
    }
}

fn try_read_arg_line(l: &str) -> Result<Option<WarningResult<String, String>>> {
    if !ARG_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1))),
        None => Err(anyhow!("invalid argument name in {}", l.trim())),
    }
}

fn try_read_att_line(l: &str) -> Result<Option<WarningResult<(String, String), String>>> {
    if !ATT_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1).zip(captured_arg(&c, 2)))),
        None => Err(anyhow!("invalid argument names in {}", l.trim())),
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format,
/// as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled
/// `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = Vec::with_capacity(DEFAULT_ARG_LABELS_CAP);
        let mut af = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let warning_consumer = |warnings: Vec<String>| {
                for w in warnings.iter() {
                    self.warning_handlers
                        .iter()
                        .for_each(|h| (h)(1 + i, w.to_string()));
                }
            };
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some(a) = try_read_arg_line(l).with_context(context)? {
                if af.is_some() {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                arg_labels.push(a.consume_warnings(warning_consumer));
                continue;
            }
            if let Some(result) = try_read_att_line(l).with_context(context)? {
                let (a, b) = result.consume_warnings(warning_consumer);
                if af.is_none() {
                    af = Some(AAFramework::new_with_argument_set(
                        ArgumentSet::new_with_labels(&arg_labels),
                    ));
                }
                af.as_mut()
                    .unwrap()
                    .new_attack(&a, &b)
                    .with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        Ok(af.unwrap_or_else(|| {
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&arg_labels))
        }))
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        af.argument_set().get_argument(&arg.to_string())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
