//! Opening inputs and outputs.
//!
//! Inputs named `-` are read from stdin. Inputs ending in `.gz` or `.bgz` are
//! decompressed transparently. Outputs are always written uncompressed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Path that selects stdin instead of a file
pub const STDIN_PATH: &str = "-";

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a file (or stdin) for buffered line reading
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?;

    // bgzip output is multi-member gzip, so read every member
    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create a buffered writer to a file, or to stdout when no path is given
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::NamedTempFile;

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped(Path::new("aln.paf.gz")));
        assert!(is_gzipped(Path::new("genome.fa.bgz")));
        assert!(is_gzipped(Path::new("/data/GENOME.FA.GZ")));
        assert!(!is_gzipped(Path::new("genes.gff3")));
    }

    #[test]
    fn test_open_plain_input() {
        let mut temp = NamedTempFile::with_suffix(".paf").unwrap();
        temp.write_all(b"line one\nline two\n").unwrap();
        temp.flush().unwrap();

        let lines: Vec<String> = open_input(temp.path())
            .unwrap()
            .lines()
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec!["line one", "line two"]);
    }

    #[test]
    fn test_open_gzipped_input() {
        let mut temp = NamedTempFile::with_suffix(".paf.gz").unwrap();
        {
            let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
            encoder.write_all(b"compressed\n").unwrap();
            encoder.finish().unwrap();
        }

        let lines: Vec<String> = open_input(temp.path())
            .unwrap()
            .lines()
            .map(Result::unwrap)
            .collect();
        assert_eq!(lines, vec!["compressed"]);
    }

    #[test]
    fn test_open_missing_input() {
        assert!(open_input(Path::new("/nonexistent/input.paf")).is_err());
    }
}
