//! Input abstraction layer
//!
//! Opens plain, gzip or bzip2 input behind one `BufRead`, and iterates lines
//! while tracking their 1-based position.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Uncompressed text
    Plain,
    /// Gzip or BGZF
    Gzip,
    /// Bzip2
    Bzip2,
}

impl CompressionFormat {
    /// Detect from the file extension, then the leading magic bytes
    pub fn detect(path: &Path, magic: &[u8]) -> Self {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        if extension == "gz" || extension == "bgz" || magic.starts_with(&[0x1f, 0x8b]) {
            CompressionFormat::Gzip
        } else if extension == "bz2" || magic.starts_with(b"BZh") {
            CompressionFormat::Bzip2
        } else {
            CompressionFormat::Plain
        }
    }
}

/// Reader over a possibly compressed input file
pub enum InputReader {
    Plain(BufReader<File>),
    Gzip(BufReader<flate2::read::MultiGzDecoder<File>>),
    Bzip2(BufReader<bzip2::read::BzDecoder<File>>),
}

impl InputReader {
    /// Open a file, selecting the decoder from its compression format
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();

        let mut magic = [0u8; 3];
        let bytes_read = {
            let mut probe = File::open(path)?;
            read_prefix(&mut probe, &mut magic)?
        };
        let format = CompressionFormat::detect(path, &magic[..bytes_read]);
        log::debug!("Opening {:?} as {:?}", path, format);

        let file = File::open(path)?;
        Ok(match format {
            CompressionFormat::Plain => {
                InputReader::Plain(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
            }
            CompressionFormat::Gzip => InputReader::Gzip(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                flate2::read::MultiGzDecoder::new(file),
            )),
            CompressionFormat::Bzip2 => InputReader::Bzip2(BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                bzip2::read::BzDecoder::new(file),
            )),
        })
    }

    pub fn compression(&self) -> CompressionFormat {
        match self {
            InputReader::Plain(_) => CompressionFormat::Plain,
            InputReader::Gzip(_) => CompressionFormat::Gzip,
            InputReader::Bzip2(_) => CompressionFormat::Bzip2,
        }
    }
}

/// Fill as much of `buf` as the file allows
fn read_prefix(file: &mut File, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

impl Read for InputReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputReader::Plain(reader) => reader.read(buf),
            InputReader::Gzip(reader) => reader.read(buf),
            InputReader::Bzip2(reader) => reader.read(buf),
        }
    }
}

impl BufRead for InputReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputReader::Plain(reader) => reader.fill_buf(),
            InputReader::Gzip(reader) => reader.fill_buf(),
            InputReader::Bzip2(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputReader::Plain(reader) => reader.consume(amt),
            InputReader::Gzip(reader) => reader.consume(amt),
            InputReader::Bzip2(reader) => reader.consume(amt),
        }
    }
}

/// Line iterator that reuses a buffer and counts lines
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
    line_number: usize,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
            line_number: 0,
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok((line_number, &str))) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<(usize, &str)>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                self.line_number += 1;
                // Remove trailing newline
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok((self.line_number, &self.buffer)))
            }
            Err(e) => {
                // read_line consumed the bad line, so it still counts
                if e.kind() == io::ErrorKind::InvalidData {
                    self.line_number += 1;
                }
                Some(Err(e))
            }
        }
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_by_extension() {
        let detect = |name: &str, magic: &[u8]| CompressionFormat::detect(Path::new(name), magic);

        assert_eq!(detect("a.vcf.gz", b""), CompressionFormat::Gzip);
        assert_eq!(detect("a.txt.bz2", b""), CompressionFormat::Bzip2);
        assert_eq!(detect("a.snp", b"chr"), CompressionFormat::Plain);
    }

    #[test]
    fn test_detect_by_magic() {
        let gzip = CompressionFormat::detect(Path::new("a"), &[0x1f, 0x8b, 0x08]);
        assert_eq!(gzip, CompressionFormat::Gzip);
        let bzip2 = CompressionFormat::detect(Path::new("a"), b"BZh");
        assert_eq!(bzip2, CompressionFormat::Bzip2);
    }

    #[test]
    fn test_line_iterator_counts_lines() -> io::Result<()> {
        let mut iter = LineIterator::new(Cursor::new("line1\r\nline2\n\nline4"));

        assert_eq!(iter.next_line().unwrap()?, (1, "line1"));
        assert_eq!(iter.next_line().unwrap()?, (2, "line2"));
        assert_eq!(iter.next_line().unwrap()?, (3, ""));
        assert_eq!(iter.next_line().unwrap()?, (4, "line4"));
        assert!(iter.next_line().is_none());
        assert_eq!(iter.lines_read(), 4);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_counts_as_line() -> io::Result<()> {
        let mut iter = LineIterator::new(Cursor::new(&b"ok\n\xff\xfe\nafter\n"[..]));

        assert_eq!(iter.next_line().unwrap()?, (1, "ok"));
        let err = iter.next_line().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(iter.lines_read(), 2);
        assert_eq!(iter.next_line().unwrap()?, (3, "after"));
        Ok(())
    }

    #[test]
    fn test_open_plain() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        writeln!(temp, "chrom\tposition")?;
        temp.flush()?;

        let reader = InputReader::open(temp.path())?;
        assert_eq!(reader.compression(), CompressionFormat::Plain);
        let mut iter = LineIterator::new(reader);
        assert_eq!(iter.next_line().unwrap()?.1, "chrom\tposition");
        Ok(())
    }

    #[test]
    fn test_open_gzip_by_magic() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        {
            let mut encoder =
                flate2::write::GzEncoder::new(temp.as_file_mut(), flate2::Compression::default());
            encoder.write_all(b"##fileformat=VCFv4.1\n")?;
            encoder.finish()?;
        }

        let reader = InputReader::open(temp.path())?;
        assert_eq!(reader.compression(), CompressionFormat::Gzip);
        let mut iter = LineIterator::new(reader);
        assert_eq!(iter.next_line().unwrap()?.1, "##fileformat=VCFv4.1");
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        assert!(InputReader::open("/nonexistent/varscan.snp").is_err());
    }
}
