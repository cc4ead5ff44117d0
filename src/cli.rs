//! The `unicode-conv` command line: reports what each file holds, or
//! converts files from one encoding to another.

use std::ffi::OsString;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use itertools::Itertools;
use log::debug;
use parking_lot::Mutex;

use crate::error::CliError;
use crate::legacy::{iso8859_1_to_utf8, remove_special_chars, utf8_to_iso8859_1};
use crate::position::length_in_code_points;
use crate::utf::Endianness;
use crate::utf16::{utf16_from_bytes, utf16_to_bytes, utf16_to_utf8, utf8_to_utf16};

pub const USAGE: &str = "Usage: unicode-conv [--from ENCODING] [--to ENCODING] [files]
Encodings: utf8, ascii, latin1, utf16le, utf16be";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Ascii,
    Latin1,
    Utf16(Endianness),
}

impl FromStr for Encoding {
    type Err = CliError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" | "us-ascii" => Ok(Encoding::Ascii),
            "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Encoding::Latin1),
            "utf16le" | "utf-16le" => Ok(Encoding::Utf16(Endianness::LittleEndian)),
            "utf16be" | "utf-16be" => Ok(Encoding::Utf16(Endianness::BigEndian)),
            _ => Err(CliError::UnknownEncoding(name.to_owned())),
        }
    }
}

impl Encoding {
    /// Decodes `bytes` into UTF-8. A UTF-16 byte order mark is skipped.
    pub fn decode(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Utf8 | Encoding::Ascii => bytes.to_vec(),
            Encoding::Latin1 => iso8859_1_to_utf8(bytes),
            Encoding::Utf16(endianness) => {
                let units = utf16_from_bytes(bytes, endianness);
                let body = match units.first() {
                    Some(0xFEFF) => &units[1..],
                    _ => &units[..],
                };
                utf16_to_utf8(body)
            }
        }
    }

    pub fn encode(self, utf8: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Utf8 => utf8.to_vec(),
            Encoding::Ascii => remove_special_chars(utf8),
            Encoding::Latin1 => utf8_to_iso8859_1(utf8),
            Encoding::Utf16(endianness) => utf16_to_bytes(&utf8_to_utf16(utf8), endianness),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Input encoding; detected per file when unset.
    pub from: Option<Encoding>,
    /// Output encoding; files are reported on instead of converted when unset.
    pub to: Option<Encoding>,
    pub help: bool,
    pub files: Vec<PathBuf>,
}

impl Options {
    pub fn parse<I>(argv: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut options = Options::default();
        let mut argv = argv.into_iter();
        while let Some(argument) = argv.next() {
            match argument.to_str() {
                Some("--from") => options.from = Some(encoding_value(argv.next(), "--from")?),
                Some("--to") => options.to = Some(encoding_value(argv.next(), "--to")?),
                Some("-h" | "--help") => options.help = true,
                Some("--") => {
                    options.files.extend(argv.by_ref().map(PathBuf::from));
                }
                Some(flag) if flag.starts_with("--") => {
                    return Err(CliError::UnknownOption(flag.to_owned()));
                }
                _ => options.files.push(PathBuf::from(&argument)),
            }
        }
        if options.files.is_empty() && !options.help {
            return Err(CliError::MissingFiles);
        }
        Ok(options)
    }
}

fn encoding_value(value: Option<OsString>, option: &'static str) -> Result<Encoding, CliError> {
    let value = value.ok_or(CliError::MissingValue(option))?;
    value.to_string_lossy().parse()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FileClassification {
    Empty,
    Ascii,
    Utf8,
    Utf16(Endianness),
    Latin1,
    Data,
}

impl FileClassification {
    const fn description(self) -> &'static str {
        match self {
            FileClassification::Empty => "empty",
            FileClassification::Ascii => "ASCII text",
            FileClassification::Utf8 => "UTF-8 text",
            FileClassification::Utf16(Endianness::LittleEndian) => "UTF-16 little-endian text",
            FileClassification::Utf16(Endianness::BigEndian) => "UTF-16 big-endian text",
            FileClassification::Latin1 => "ISO 8859-1 text",
            FileClassification::Data => "data",
        }
    }

    const fn encoding(self) -> Option<Encoding> {
        match self {
            FileClassification::Empty | FileClassification::Utf8 => Some(Encoding::Utf8),
            FileClassification::Ascii => Some(Encoding::Ascii),
            FileClassification::Utf16(endianness) => Some(Encoding::Utf16(endianness)),
            FileClassification::Latin1 => Some(Encoding::Latin1),
            FileClassification::Data => None,
        }
    }
}

fn classify_file(file: &[u8]) -> FileClassification {
    if file.is_empty() {
        return FileClassification::Empty;
    }
    if file.is_ascii() {
        return FileClassification::Ascii;
    }
    match file {
        [0xFF, 0xFE, ..] => return FileClassification::Utf16(Endianness::LittleEndian),
        [0xFE, 0xFF, ..] => return FileClassification::Utf16(Endianness::BigEndian),
        _ => {}
    }
    if std::str::from_utf8(file).is_ok() {
        return FileClassification::Utf8;
    }
    if file.iter().all(|c| c.is_ascii() || *c >= 0xA0u8) {
        return FileClassification::Latin1;
    }
    FileClassification::Data
}

fn report(path: &Path, from: Option<Encoding>) -> String {
    let file = match std::fs::read(path) {
        Ok(file) => file,
        Err(error) => return format!("{}: {error}", path.display()),
    };
    let classification = classify_file(&file);
    debug!("{}: classified as {classification:?}", path.display());
    match from.or(classification.encoding()) {
        Some(encoding) => {
            let count = length_in_code_points(&encoding.decode(&file));
            format!(
                "{}: {}, {count} code points",
                path.display(),
                classification.description()
            )
        }
        None => format!("{}: {}", path.display(), classification.description()),
    }
}

fn convert(path: &Path, from: Option<Encoding>, to: Encoding) -> Result<Vec<u8>, CliError> {
    let file = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let from = match from.or(classify_file(&file).encoding()) {
        Some(from) => from,
        None => return Err(CliError::UndetectedEncoding(path.to_owned())),
    };
    debug!("{}: converting {from:?} to {to:?}", path.display());
    Ok(to.encode(&from.decode(&file)))
}

/// Threads used to report on `files` files: one per file, at most one per
/// available core.
fn worker_count(files: usize) -> usize {
    let cores = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    files.clamp(1, cores)
}

/// Runs the command for already parsed `options`, writing to `out`.
///
/// Reports are gathered concurrently, the files split into one contiguous
/// chunk per worker, and written in argument order. Conversions are written
/// one file after another.
pub fn execute<W: Write>(options: &Options, out: &mut W) -> Result<(), CliError> {
    if options.help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    if let Some(to) = options.to {
        for path in &options.files {
            out.write_all(&convert(path, options.from, to)?)?;
        }
        return Ok(out.flush()?);
    }
    let lines = Mutex::new(vec![String::new(); options.files.len()]);
    let chunk_size = options.files.len().div_ceil(worker_count(options.files.len())).max(1);
    std::thread::scope(|scope| {
        for (chunk, paths) in options.files.chunks(chunk_size).enumerate() {
            let lines = &lines;
            scope.spawn(move || {
                for (offset, path) in paths.iter().enumerate() {
                    let line = report(path, options.from);
                    lines.lock()[chunk * chunk_size + offset] = line;
                }
            });
        }
    });
    writeln!(out, "{}", lines.into_inner().iter().join("\n"))?;
    Ok(())
}

pub fn run<I>(argv: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let options = Options::parse(argv)?;
    debug!("{options:?}");
    execute(&options, &mut std::io::stdout().lock())
}
