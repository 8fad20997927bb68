use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, info};

use crate::error::*;
use crate::shared::*;
use crate::types::*;

///Read words from a newline-delimited source, one word per line.
///Surrounding whitespace is trimmed and blank lines are skipped
pub fn read_words(reader: impl BufRead) -> std::io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

///Seed the index from a word list file. All words go in through a single
///bulk insert; returns the number of distinct words added
pub fn load_wordlist(path: impl AsRef<Path>, index: &SharedIndex) -> Result<usize> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading word list");
    let begintime = SystemTime::now();
    let io_error = |source: std::io::Error| Error::Io { path: path.to_path_buf(), source };
    let f = File::open(path).map_err(io_error)?;
    let words = read_words(BufReader::new(f)).map_err(io_error)?;
    debug!(lines = words.len(), "read word list");
    let added = index.insert_words(&words);
    let stats = index.stats();
    let elapsed = SystemTime::now().duration_since(begintime).map(|d| d.as_millis()).unwrap_or(0);
    info!(added, groups = stats.groups, words = stats.words, elapsed_ms = elapsed as u64, "word list loaded");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn skips_blank_lines() {
        let words = read_words(Cursor::new("read\n\n  dear \r\ndare\n\t\n")).expect("read words");
        assert_eq!(words, vec!["read", "dear", "dare"]);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "listen\nsilent\nenlist\nlisten\ninlets").expect("write");
        let index = SharedIndex::new();
        let added = load_wordlist(file.path(), &index).expect("load");
        assert_eq!(added, 4);
        assert_eq!(index.lookup_anagrams("tinsel", None).len(), 4);
    }

    #[test]
    fn missing_file_is_an_error() {
        let index = SharedIndex::new();
        match load_wordlist("/nonexistent/words.txt", &index) {
            Err(Error::Io { path, .. }) => assert_eq!(path, Path::new("/nonexistent/words.txt")),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
