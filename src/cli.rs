use std::fmt;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{Error, Result};

pub const USAGE: &str = "\
usage: huffpack (--pack | --unpack) [--files] <input>... [-o <output>] [-v]

  --pack, --compress       compress each input
  --unpack, --decompress   decompress each input
  --files <input>...       input paths (bare paths are accepted too)
  -o, --out <output>       output path, only with a single input
  -v, --verbose            debug logging (RUST_LOG overrides)
  -h, --help               show this message

without --out, --pack writes <input>.huff and --unpack strips .huff
(or appends .out when there is none)";

const PACKED_EXTENSION: &str = "huff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pack,
    Unpack,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Pack => f.write_str("pack"),
            Mode::Unpack => f.write_str("unpack"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub mode: Mode,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn run(&self) -> Result<()> {
        match self.mode {
            Mode::Pack => codec::compress_file(&self.input, &self.output).map(drop),
            Mode::Unpack => codec::decompress_file(&self.input, &self.output).map(drop),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Run { jobs: Vec<Job>, verbose: bool },
}

/// Parses the arguments following the program name. Touches no files.
pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut mode = None;
    let mut inputs = Vec::new();
    let mut output = None;
    let mut verbose = false;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--pack" | "--compress" => mode = Some(Mode::Pack),
            "--unpack" | "--decompress" => mode = Some(Mode::Unpack),
            "-v" | "--verbose" => verbose = true,
            "--files" => {}
            "-o" | "--out" => {
                let path = args
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{arg} needs a path")))?;
                output = Some(PathBuf::from(path));
            }
            flag if flag.len() > 1 && flag.starts_with('-') => {
                return Err(Error::Usage(format!("unknown option {flag}")));
            }
            _ => inputs.push(PathBuf::from(&arg)),
        }
    }

    let mode = mode.ok_or(Error::InvalidMode)?;
    if inputs.is_empty() {
        return Err(Error::Usage("no input files".into()));
    }

    let jobs = match output {
        Some(output) => {
            if inputs.len() != 1 {
                return Err(Error::Usage(format!(
                    "--out takes a single input, got {}",
                    inputs.len()
                )));
            }
            let input = inputs.remove(0);
            vec![Job { mode, input, output }]
        }
        None => inputs
            .into_iter()
            .map(|input| Job {
                mode,
                output: derived_output(mode, &input),
                input,
            })
            .collect(),
    };

    Ok(Command::Run { jobs, verbose })
}

fn derived_output(mode: Mode, input: &Path) -> PathBuf {
    match mode {
        Mode::Unpack if input.extension().is_some_and(|ext| ext == PACKED_EXTENSION) => {
            input.with_extension("")
        }
        Mode::Pack => append_extension(input, PACKED_EXTENSION),
        Mode::Unpack => append_extension(input, "out"),
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
