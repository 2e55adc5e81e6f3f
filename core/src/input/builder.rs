//! Reading alignments in any supported format.

use std::{
    fmt,
    io::{self, Read as _},
};

use flate2::bufread::MultiGzDecoder;

use crate::{input, row::FileId, Input};

use super::{Alignment, ParseRowsError};

/// A builder to read an alignment.
#[derive(Debug)]
pub struct Builder {
    file: FileId,
    format: Option<Format>,
    compression_method: Option<Option<CompressionMethod>>,
}

impl Builder {
    /// Read alignment from reader.
    ///
    /// # Errors
    ///
    /// Errors if the reader cannot be read or the alignment cannot be parsed.
    pub fn read<R>(self, reader: &mut R) -> Result<Alignment, BuilderError>
    where
        R: io::Read,
    {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;

        let compression_method = self
            .compression_method
            .unwrap_or_else(|| CompressionMethod::detect(&raw));

        if let Some(CompressionMethod::Gzip) = compression_method {
            let mut decoded = Vec::new();
            MultiGzDecoder::new(&raw[..]).read_to_end(&mut decoded)?;
            raw = decoded;
        }

        let format = self.format.unwrap_or_else(|| Format::detect(&raw));

        match format {
            Format::Fasta => Ok(Alignment::from_fasta(self.file, &raw[..])?),
            Format::Rows => {
                let s = String::from_utf8(raw)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

                Alignment::from_rows(self.file, &s).map_err(BuilderError::from)
            }
        }
    }

    /// Read alignment from an input source.
    ///
    /// # Errors
    ///
    /// Errors if the input cannot be opened or read, or the alignment cannot be parsed.
    pub fn read_from_input(self, input: &Input) -> Result<Alignment, BuilderError> {
        match input.open()? {
            input::Reader::File(mut reader) => self.read(&mut reader),
            input::Reader::Stdin(mut reader) => self.read(&mut reader),
        }
    }

    /// Set compression method to read.
    ///
    /// If unset, the compression method will automatically be detected when reading.
    pub fn set_compression_method(mut self, compression_method: Option<CompressionMethod>) -> Self {
        self.compression_method = Some(compression_method);
        self
    }

    /// Set file identifier to stamp the alignment with.
    pub fn set_file(mut self, file: FileId) -> Self {
        self.file = file;
        self
    }

    /// Set format to read.
    ///
    /// If unset, the format will automatically be detected when reading.
    pub fn set_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            file: FileId(1),
            format: None,
            compression_method: None,
        }
    }
}

/// Supported alignment formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// FASTA records.
    Fasta,
    /// Tab-separated uid and sequence rows.
    Rows,
}

impl Format {
    fn detect(src: &[u8]) -> Format {
        const FASTA_MAGIC_NUMBER: u8 = b'>';

        if let Some(&first) = src.first() {
            if first == FASTA_MAGIC_NUMBER {
                return Format::Fasta;
            }
        }

        Format::Rows
    }
}

/// Supported compression methods.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip compression.
    Gzip,
}

impl CompressionMethod {
    fn detect(src: &[u8]) -> Option<Self> {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Some(CompressionMethod::Gzip);
            }
        }

        None
    }
}

/// An error associated with reading an alignment.
#[derive(Debug)]
pub enum BuilderError {
    /// An I/O error.
    Io(io::Error),
    /// An error parsing tab-separated rows.
    Rows(ParseRowsError),
}

impl From<io::Error> for BuilderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseRowsError> for BuilderError {
    fn from(e: ParseRowsError) -> Self {
        Self::Rows(e)
    }
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::Io(e) => write!(f, "{e}"),
            BuilderError::Rows(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    use flate2::{write::GzEncoder, Compression};

    use crate::row::SeqId;

    fn gzip(src: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(src)?;

        encoder.finish()
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(Format::detect(b">seq\nACGT\n"), Format::Fasta);
        assert_eq!(Format::detect(b"1\tACGT\n"), Format::Rows);
        assert_eq!(Format::detect(b""), Format::Rows);
    }

    #[test]
    fn test_detect_compression_method() {
        assert_eq!(
            CompressionMethod::detect(&[0x1f, 0x8b, 0x08]),
            Some(CompressionMethod::Gzip)
        );
        assert_eq!(CompressionMethod::detect(b">seq\n"), None);
        assert_eq!(CompressionMethod::detect(b""), None);
    }

    #[test]
    fn test_read_rows() -> Result<(), BuilderError> {
        let src = b"1\tAAC\n2\tAAG\n";

        let alignment = Builder::default().read(&mut &src[..])?;

        assert_eq!(alignment.file(), FileId(1));
        assert_eq!(alignment.len(), 2);
        assert_eq!(alignment.rows()[1].seq(), SeqId(2));

        Ok(())
    }

    #[test]
    fn test_read_fasta() -> Result<(), BuilderError> {
        let src = b">s1\nAAC\n>s2\nAAG\n";

        let alignment = Builder::default().set_file(FileId(3)).read(&mut &src[..])?;

        assert_eq!(alignment.file(), FileId(3));
        assert_eq!(alignment.names(), ["s1", "s2"]);

        Ok(())
    }

    #[test]
    fn test_read_gzip_rows() -> Result<(), BuilderError> {
        let src = gzip(b"1\tAAC\n2\tAAG\n")?;

        let alignment = Builder::default().read(&mut &src[..])?;

        assert_eq!(alignment.len(), 2);
        assert_eq!(alignment.rows()[1].seq(), SeqId(2));
        assert_eq!(alignment.rows()[1].data(), b"AAG");

        Ok(())
    }

    #[test]
    fn test_read_gzip_fasta() -> Result<(), BuilderError> {
        let src = gzip(b">s1\nAAC\n>s2\nAAG\n")?;

        let alignment = Builder::default().read(&mut &src[..])?;

        assert_eq!(alignment.names(), ["s1", "s2"]);
        assert_eq!(alignment.rows()[0].data(), b"AAC");

        Ok(())
    }

    #[test]
    fn test_read_respects_format_override() -> Result<(), BuilderError> {
        let src = b"1\t>AC\n";

        let alignment = Builder::default().set_format(Format::Rows).read(&mut &src[..])?;

        assert_eq!(alignment.len(), 1);

        Ok(())
    }

    #[test]
    fn test_read_respects_compression_method_override() -> Result<(), BuilderError> {
        let src = gzip(b"1\tAAC\n")?;

        let alignment = Builder::default()
            .set_compression_method(Some(CompressionMethod::Gzip))
            .read(&mut &src[..])?;

        assert_eq!(alignment.len(), 1);

        Ok(())
    }

    #[test]
    fn test_read_empty() -> Result<(), BuilderError> {
        let alignment = Builder::default().read(&mut &b""[..])?;

        assert!(alignment.is_empty());

        Ok(())
    }
}
