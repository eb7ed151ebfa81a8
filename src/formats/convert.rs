//! Stream conversion driver
//!
//! Detects the input format from the first non-empty line, writes the target
//! header once, then converts the remaining lines one at a time.

use super::detect::InputFormat;
use super::native::NativeToVcfConverter;
use super::vcf::VcfToNativeConverter;
use crate::core::{
    ConvertOptions, ErrorPolicy, InputReader, LineIterator, RecordResult, Result, VarscanVcfError,
};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// One conversion direction
pub trait RecordConverter {
    /// Header of the output format, one entry per line
    fn header_lines(&self) -> Vec<String>;

    /// Whether an input line is header or metadata and must not be converted
    fn is_header(&self, line: &str) -> bool;

    /// Convert one data line into one output line
    fn convert(&self, line: &str) -> RecordResult<String>;
}

/// Conversion statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    /// Format detected on the first line, None for empty input
    pub input_format: Option<InputFormat>,
    pub total: usize,
    pub success: usize,
    pub failed: usize,
}

/// Convert a file, writing the opposite format to `writer`
///
/// The input is opened here and closed before returning, on success or error.
pub fn convert_file<P: AsRef<Path>, W: Write>(
    input: P,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let reader = InputReader::open(input.as_ref())?;
    convert_reader(reader, writer, options)
}

/// Convert everything readable from `reader`
pub fn convert_reader<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ConvertOptions,
) -> Result<ConversionStats> {
    let mut lines = LineIterator::new(reader);

    // The detection line is kept and replayed through the converter
    let mut first: Option<(usize, String)> = None;
    while let Some(next) = lines.next_line() {
        let (line_number, line) = match next {
            Ok(entry) => entry,
            Err(e) => return Err(read_error(e, lines.lines_read())),
        };
        if line.trim().is_empty() {
            log::debug!("Skipping blank line {}", line_number);
            continue;
        }
        first = Some((line_number, line.to_string()));
        break;
    }

    let format = first
        .as_ref()
        .map(|(_, line)| InputFormat::detect(line))
        .unwrap_or(InputFormat::Native);
    log::debug!("Detected {} input, writing {}", format, format.target());

    let mut stats = ConversionStats {
        input_format: first.as_ref().map(|_| format),
        ..ConversionStats::default()
    };

    let outcome = match format {
        InputFormat::Native => {
            let converter = NativeToVcfConverter::new(options);
            run(&converter, first, &mut lines, writer, options, &mut stats)
        }
        InputFormat::Vcf => {
            let converter = VcfToNativeConverter::new();
            run(&converter, first, &mut lines, writer, options, &mut stats)
        }
    };

    // Lines converted before a failure still reach the output
    writer.flush()?;
    outcome?;
    log::info!(
        "Converted {} of {} records from {} lines ({} failed)",
        stats.success,
        stats.total,
        lines.lines_read(),
        stats.failed
    );
    Ok(stats)
}

fn run<C: RecordConverter, R: BufRead, W: Write>(
    converter: &C,
    first: Option<(usize, String)>,
    lines: &mut LineIterator<R>,
    writer: &mut W,
    options: &ConvertOptions,
    stats: &mut ConversionStats,
) -> Result<()> {
    for header in converter.header_lines() {
        writeln!(writer, "{}", header)?;
    }
    log::info!("Header written");

    if let Some((line_number, line)) = first {
        process_line(converter, line_number, &line, writer, options, stats)?;
    }

    while let Some(next) = lines.next_line() {
        let (line_number, line) = match next {
            Ok(entry) => entry,
            Err(e) => return Err(read_error(e, lines.lines_read())),
        };
        process_line(converter, line_number, line, writer, options, stats)?;
    }
    Ok(())
}

/// Attach the line number to a line that is not valid text
fn read_error(err: io::Error, line: usize) -> VarscanVcfError {
    if err.kind() == io::ErrorKind::InvalidData {
        VarscanVcfError::Decode { line, source: err }
    } else {
        VarscanVcfError::Io(err)
    }
}

fn process_line<C: RecordConverter, W: Write>(
    converter: &C,
    line_number: usize,
    line: &str,
    writer: &mut W,
    options: &ConvertOptions,
    stats: &mut ConversionStats,
) -> Result<()> {
    let line = line.trim();
    if line.is_empty() {
        log::debug!("Skipping blank line {}", line_number);
        return Ok(());
    }
    if converter.is_header(line) {
        return Ok(());
    }

    stats.total += 1;
    match converter.convert(line) {
        Ok(output) => {
            writeln!(writer, "{}", output)?;
            stats.success += 1;
        }
        Err(source) => match options.on_error {
            ErrorPolicy::Abort => {
                stats.failed += 1;
                return Err(VarscanVcfError::Record {
                    line: line_number,
                    source,
                });
            }
            ErrorPolicy::Skip => {
                log::warn!("Skipping line {}: {}", line_number, source);
                stats.failed += 1;
            }
        },
    }
    Ok(())
}
