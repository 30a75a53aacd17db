//! Word lists: the built-in health-education vocabulary and JSON loading.
use crate::error::WordSearchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// The built-in words and their hints, used when no word list file is given.
pub const DEFAULT_WORDS: &[(&str, &str)] = &[
    ("PUBERTAS", "Masa peralihan dari anak-anak menuju dewasa"),
    ("HORMON", "Zat kimia tubuh yang memicu perubahan saat remaja"),
    ("REMAJA", "Sebutan untuk usia 10 sampai 19 tahun"),
    ("SEHAT", "Kondisi tubuh dan pikiran yang baik"),
    ("MENSTRUASI", "Peluruhan dinding rahim setiap bulan"),
    ("KEBERSIHAN", "Menjaga tubuh tetap bersih setiap hari"),
    ("PRIVASI", "Hak atas tubuh dan ruang pribadi"),
    ("PERSETUJUAN", "Izin yang diberikan dengan sadar dan sukarela"),
    ("EMOSI", "Perasaan yang berubah-ubah saat pubertas"),
    ("GIZI", "Zat makanan yang dibutuhkan tubuh untuk tumbuh"),
];

/// One word the player has to find.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Uppercase `A`-`Z` text of the word.
    pub word: String,
    /// Clue shown next to the word list.
    pub hint: String,
    /// Set once the player finds the word. Reset only by a session restart.
    #[serde(default)]
    pub found: bool,
}

impl WordEntry {
    /// Creates an entry, normalizing the word to uppercase.
    ///
    /// # Errors
    /// Returns `WordSearchError::InvalidWord` if the word is empty or contains
    /// anything other than ASCII letters (spaces included).
    ///
    /// # Examples
    /// ```
    /// use wordsearch_engine::words::WordEntry;
    /// let entry = WordEntry::new("sehat", "Kondisi tubuh yang baik").unwrap();
    /// assert_eq!(entry.word, "SEHAT");
    /// assert!(!entry.found);
    /// assert!(WordEntry::new("TIDUR MALAM", "").is_err());
    /// ```
    pub fn new(word: &str, hint: &str) -> Result<Self, WordSearchError> {
        let normalized = word.trim().to_ascii_uppercase();
        if normalized.is_empty() || !normalized.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(WordSearchError::InvalidWord {
                word: word.to_string(),
            });
        }
        Ok(WordEntry {
            word: normalized,
            hint: hint.to_string(),
            found: false,
        })
    }

    /// Number of letters in the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always `false` for a validated entry.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Raw shape of an entry in a word list file; `found` is never read from disk.
#[derive(Deserialize)]
struct RawEntry {
    word: String,
    #[serde(default)]
    hint: String,
}

/// Returns the built-in word list.
pub fn default_word_list() -> Vec<WordEntry> {
    DEFAULT_WORDS
        .iter()
        .map(|&(word, hint)| WordEntry {
            word: word.to_string(),
            hint: hint.to_string(),
            found: false,
        })
        .collect()
}

/// Parses a JSON array of `{ "word": ..., "hint": ... }` objects.
///
/// `origin` only names the source in error messages.
pub fn parse_word_list(json: &str, origin: &str) -> Result<Vec<WordEntry>, WordSearchError> {
    let raw: Vec<RawEntry> =
        serde_json::from_str(json).map_err(|source| WordSearchError::WordListFormat {
            path: origin.to_string(),
            source,
        })?;
    let words = raw
        .iter()
        .map(|entry| WordEntry::new(&entry.word, &entry.hint))
        .collect::<Result<Vec<_>, _>>()?;
    validate_words(&words)?;
    Ok(words)
}

/// Loads and validates a word list file.
#[instrument]
pub fn load_word_list(path: &Path) -> Result<Vec<WordEntry>, WordSearchError> {
    let origin = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| WordSearchError::WordListIo {
        path: origin.clone(),
        source,
    })?;
    let words = parse_word_list(&content, &origin)?;
    debug!(count = words.len(), "Loaded word list");
    Ok(words)
}

/// Checks that a list is non-empty and every word is uppercase `A`-`Z`.
pub fn validate_words(words: &[WordEntry]) -> Result<(), WordSearchError> {
    if words.is_empty() {
        return Err(WordSearchError::EmptyWordList);
    }
    match words
        .iter()
        .find(|e| e.word.is_empty() || !e.word.chars().all(|ch| ch.is_ascii_uppercase()))
    {
        Some(bad) => Err(WordSearchError::InvalidWord {
            word: bad.word.clone(),
        }),
        None => Ok(()),
    }
}

/// Checks that every word fits inside a `size` x `size` grid.
pub fn validate_fit(words: &[WordEntry], size: usize) -> Result<(), WordSearchError> {
    if size == 0 {
        return Err(WordSearchError::GridTooSmall { size });
    }
    match words.iter().find(|e| e.len() > size) {
        Some(long) => Err(WordSearchError::WordTooLong {
            word: long.word.clone(),
            len: long.len(),
            size,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DEFAULT_GRID_SIZE;
    use std::io::Write;

    #[test]
    fn test_default_word_list_is_valid_for_default_grid() {
        let words = default_word_list();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        assert!(validate_words(&words).is_ok());
        assert!(validate_fit(&words, DEFAULT_GRID_SIZE).is_ok());
        assert!(words.iter().all(|w| !w.found && !w.hint.is_empty()));
    }

    #[test]
    fn test_word_entry_rejects_non_letters() {
        assert!(matches!(
            WordEntry::new("", "x"),
            Err(WordSearchError::InvalidWord { .. })
        ));
        assert!(WordEntry::new("GIZI2", "x").is_err());
        assert!(WordEntry::new("ÄPFEL", "x").is_err());
    }

    #[test]
    fn test_validate_fit_reports_long_word() {
        let words = vec![WordEntry::new("PERSETUJUAN", "").unwrap()];
        let err = validate_fit(&words, 5).unwrap_err();
        assert!(matches!(
            err,
            WordSearchError::WordTooLong { len: 11, size: 5, .. }
        ));
        assert!(matches!(
            validate_fit(&words, 0),
            Err(WordSearchError::GridTooSmall { size: 0 })
        ));
    }

    #[test]
    fn test_validate_words_empty() {
        assert!(matches!(
            validate_words(&[]),
            Err(WordSearchError::EmptyWordList)
        ));
    }

    #[test]
    fn test_parse_word_list_normalizes() {
        let json = r#"[{"word": "gizi", "hint": "Zat makanan"}, {"word": "Sehat"}]"#;
        let words = parse_word_list(json, "inline").unwrap();
        assert_eq!(words[0].word, "GIZI");
        assert_eq!(words[1].word, "SEHAT");
        assert_eq!(words[1].hint, "");
    }

    #[test]
    fn test_parse_word_list_errors() {
        assert!(matches!(
            parse_word_list("not json", "inline"),
            Err(WordSearchError::WordListFormat { .. })
        ));
        assert!(matches!(
            parse_word_list("[]", "inline"),
            Err(WordSearchError::EmptyWordList)
        ));
        assert!(matches!(
            parse_word_list(r#"[{"word": "DUA KATA"}]"#, "inline"),
            Err(WordSearchError::InvalidWord { .. })
        ));
    }

    #[test]
    fn test_load_word_list_from_file() {
        let path = std::env::temp_dir().join(format!(
            "wordsearch_engine_words_{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"[{{"word": "REMAJA", "hint": "Usia 10-19"}}]"#).unwrap();
        drop(file);

        let words = load_word_list(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "REMAJA");
    }

    #[test]
    fn test_load_word_list_missing_file() {
        let result = load_word_list(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(WordSearchError::WordListIo { .. })));
    }
}
