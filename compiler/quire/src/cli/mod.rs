//! Command-line front end.
//!
//! ```text
//! quire [--tab N] [--width N] [--dump] [FILE] [-- ARG...]
//! ```
//!
//! The document is read from `FILE`, or from stdin when `FILE` is absent or
//! `-`. Every `ARG` after `--` becomes a text layout for the matching `{N}`
//! hole.

use std::io::{Read, Write};
use std::path::PathBuf;

use quire_render::{compile, RenderConfig, WriteEmitter};
use tracing::debug;

use crate::{parse, text, Error, Layout};

/// Usage text printed for `--help` and on bad arguments.
pub const USAGE: &str = "\
Usage: quire [options] [FILE] [-- ARG...]

Render a layout document to fit a line width.

Options:
  --tab N       Columns per indentation level (default: 4)
  --width N     Target line width (default: 80)
  --dump        Print the lowered document instead of rendering it
  -h, --help    Show this message

Reads FILE, or stdin when FILE is absent or `-`. Each ARG fills the
matching {N} hole in the document as a text layout.";

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: RenderConfig,
    pub dump: bool,
    pub help: bool,
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
    pub args: Vec<String>,
}

impl Options {
    /// Parse command-line arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, Error> {
        let mut options = Options::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--" => {
                    options.args = iter.by_ref().cloned().collect();
                }
                "-h" | "--help" => options.help = true,
                "--dump" => options.dump = true,
                "--tab" => {
                    let tab = number("--tab", iter.next())?;
                    options.config = options.config.with_tab(tab);
                }
                "--width" => {
                    let width = number("--width", iter.next())?;
                    options.config = options.config.with_width(width);
                }
                "-" if options.input.is_none() => {}
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(Error::Usage(format!("unknown option `{flag}`")));
                }
                path if options.input.is_none() => {
                    options.input = Some(PathBuf::from(path));
                }
                extra => {
                    return Err(Error::Usage(format!("unexpected argument `{extra}`")));
                }
            }
        }

        Ok(options)
    }
}

fn number(flag: &str, value: Option<&String>) -> Result<usize, Error> {
    let Some(value) = value else {
        return Err(Error::Usage(format!("`{flag}` needs a value")));
    };
    value
        .parse()
        .map_err(|_| Error::Usage(format!("`{flag}` expects a number, got `{value}`")))
}

/// Read the document named by `options`, falling back to `stdin`.
pub fn read_source(options: &Options, mut stdin: impl Read) -> Result<String, Error> {
    match &options.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut source = String::new();
            stdin.read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parse, lower and print `source` to `out`.
#[tracing::instrument(level = "debug", skip_all, fields(dump = options.dump))]
pub fn run(options: &Options, source: &str, mut out: impl Write) -> Result<(), Error> {
    let args: Vec<Layout> = options.args.iter().map(|arg| text(arg.as_str())).collect();
    let layout = parse(source, &args)?;
    let document = compile(&layout)?;
    debug!(empty = document.is_empty(), "compiled document");

    if options.dump {
        writeln!(out, "{document}")?;
        return Ok(());
    }

    let mut emitter = WriteEmitter::new(out);
    document.render_into(&options.config, &mut emitter);
    let mut out = emitter.finish()?;
    writeln!(out)?;
    Ok(())
}
