use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, Extension, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as
/// defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and to write the answers to queries on such frameworks.
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// # Example
    ///
    /// ```
    /// # use serab::aa::{AAFramework, ArgumentSet, LabelType};
    /// # use serab::io::AspartixWriter;
    /// # use anyhow::Result;
    /// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
    ///     let writer = AspartixWriter::default();
    ///     writer.write_framework(&af, &mut std::io::stdout())
    /// }
    /// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[] as &[String])));
    /// ```
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let args = framework.argument_set();
        for arg in args.iter() {
            writeln!(writer, "arg({}).", arg)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked())?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn write_extension<T: LabelType>(writer: &mut dyn Write, extension: &[&Argument<T>]) -> Result<()> {
    let context = "while writing an extension";
    write!(writer, "[").context(context)?;
    let mut first = true;
    extension.iter().try_for_each(|arg| {
        if first {
            first = false;
            write!(writer, "{}", arg).context(context)
        } else {
            write!(writer, ",{}", arg).context(context)
        }
    })?;
    writeln!(writer, "]").context(context)
}

impl ResponseWriter<String> for AspartixWriter {
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<String>],
    ) -> Result<()> {
        write_extension(writer, extension)?;
        writer.flush().context("while writing an extension")
    }

    fn write_extension_set(
        &self,
        writer: &mut dyn Write,
        af: &AAFramework<String>,
        extensions: &[Extension],
    ) -> Result<()> {
        for ext in extensions {
            write_extension(writer, &ext.arguments(af))?;
        }
        writer.flush().context("while writing a set of extensions")
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::io::BufWriter;

    #[test]
    fn test_write_af() {
        let arg_names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let mut framework = AAFramework::new_with_argument_set(args);
        framework.new_attack(&arg_names[0], &arg_names[0]).unwrap();
        framework.new_attack(&arg_names[1], &arg_names[2]).unwrap();
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer.write_framework(&framework, &mut buffer).unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        )
    }

    #[test]
    fn test_write_single_extension() {
        let arg_names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_single_extension(
                &mut buffer,
                &args.iter().collect::<Vec<&Argument<String>>>(),
            )
            .unwrap();
        assert_eq!(
            "[a,b,c]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_empty_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_single_extension(&mut buffer, &[] as &[&Argument<String>])
            .unwrap();
        assert_eq!(
            "[]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_extension_set() {
        let arg_names = vec!["a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let af = AAFramework::new_with_argument_set(args);
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_extension_set(
                &mut buffer,
                &af,
                &[Extension::from_iter([0]), Extension::from_iter([1])],
            )
            .unwrap();
        assert_eq!(
            "[a]\n[b]\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_no_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_no_extension(&mut buffer).unwrap();
        assert_eq!(
            "NO\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_acceptance_status() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_acceptance_status(&mut buffer, true).unwrap();
        writer.write_acceptance_status(&mut buffer, false).unwrap();
        assert_eq!(
            "YES\nNO\n",
            String::from_utf8(buffer.into_inner().unwrap()).unwrap()
        );
    }
}
