use std::{collections::HashMap, fs, io, path::Path};

use collections::Count;
use log::debug;

/// The text whose words get counted
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Reads the whole file at `path`.
    /// Bytes that are not valid UTF-8 are replaced, not rejected.
    pub fn read(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        debug!(target: "corpus", "read {} bytes from {}", bytes.len(), path.display());
        Ok(Self {
            text: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }

    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Whitespace separated tokens, in file order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split_whitespace()
    }

    /// Counts every word with the standard library map,
    /// used as the reference to check a table against
    pub fn tally(&self) -> HashMap<&str, Count> {
        let mut tally = HashMap::new();
        for word in self.words() {
            *tally.entry(word).or_insert(0) += 1;
        }
        tally
    }
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::Corpus;

    #[test]
    fn words() {
        let corpus = Corpus::from_text("  the quick\tbrown\n\nthe  fox \r\n");
        let words: Vec<_> = corpus.words().collect();
        assert_eq!(words, ["the", "quick", "brown", "the", "fox"]);

        assert_eq!(Corpus::default().words().count(), 0);
    }

    #[test]
    fn tally() {
        let corpus = Corpus::from_text("a b a c a b");
        let tally = corpus.tally();
        assert_eq!(tally.len(), 3);
        assert_eq!(tally["a"], 3);
        assert_eq!(tally["b"], 2);
        assert_eq!(tally["c"], 1);
    }

    #[test]
    fn read_missing_file() {
        let err = Corpus::read(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn read_lossy() {
        let name = format!("wordstat-corpus-{}.txt", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"ok \xFF\xFEbad ok\n").unwrap();

        let corpus = Corpus::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let tally = corpus.tally();
        assert_eq!(tally["ok"], 2);
        assert_eq!(tally.len(), 2);
    }
}
