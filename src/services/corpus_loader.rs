//! Builds a [`Corpus`] from a directory of question/answer CSV files.
//!
//! Each file is decoded with an ordered list of candidate encodings; files that
//! cannot be decoded or lack a `question`/`answer` header are skipped with a log
//! line, never aborting the whole load.

use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::models::{Corpus, QaEntry};
use crate::services::embedding::FailOpenEmbedder;

const UTF8_BOM: char = '\u{feff}';

/// Text encodings tried, in order, for every data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Iso8859_1,
    Latin1,
}

impl TextEncoding {
    pub const CANDIDATES: [TextEncoding; 3] = [
        TextEncoding::Utf8,
        TextEncoding::Iso8859_1,
        TextEncoding::Latin1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Iso8859_1 => "ISO-8859-1",
            TextEncoding::Latin1 => "latin1",
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> std::result::Result<String, std::str::Utf8Error> {
        match self {
            TextEncoding::Utf8 => {
                let text = std::str::from_utf8(bytes)?;
                Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
            }
            // Every byte maps to the code point of the same value
            TextEncoding::Iso8859_1 | TextEncoding::Latin1 => {
                Ok(bytes.iter().map(|&b| char::from(b)).collect())
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one decode-and-parse attempt with a single encoding
#[derive(Debug)]
pub enum DecodeAttempt {
    Decoded(Vec<StringRecord>),
    InvalidEncoding(String),
    ParseFailed(String),
}

/// Why a data file contributed nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSkip {
    Unreadable(String),
    Undecodable,
    MissingColumns,
}

impl std::fmt::Display for FileSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSkip::Unreadable(e) => write!(f, "unreadable: {e}"),
            FileSkip::Undecodable => write!(f, "failed to decode"),
            FileSkip::MissingColumns => write!(f, "missing 'question' or 'answer' columns"),
        }
    }
}

/// Rows extracted from one file, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub encoding: TextEncoding,
    pub entries: Vec<QaEntry>,
    pub rejected_rows: usize,
}

/// Counters gathered while building a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files_seen: usize,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub rows_accepted: usize,
    pub rows_rejected: usize,
    pub duplicates: usize,
    pub embeddings_failed: usize,
}

#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub corpus: Corpus,
    pub report: LoadReport,
}

pub fn attempt_decode(bytes: &[u8], encoding: TextEncoding) -> DecodeAttempt {
    let text = match encoding.decode(bytes) {
        Ok(text) => text,
        Err(e) => return DecodeAttempt::InvalidEncoding(e.to_string()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    match reader.records().collect::<std::result::Result<Vec<_>, _>>() {
        Ok(records) => DecodeAttempt::Decoded(records),
        Err(e) => DecodeAttempt::ParseFailed(e.to_string()),
    }
}

/// Decode with the first encoding that yields at least one record.
pub fn decode_records(bytes: &[u8], file_name: &str) -> Option<(TextEncoding, Vec<StringRecord>)> {
    for encoding in TextEncoding::CANDIDATES {
        match attempt_decode(bytes, encoding) {
            DecodeAttempt::Decoded(records) if !records.is_empty() => {
                info!(file = file_name, encoding = %encoding, "Loaded data file");
                return Some((encoding, records));
            }
            DecodeAttempt::Decoded(_) => {
                warn!(file = file_name, encoding = %encoding, "No rows decoded");
            }
            DecodeAttempt::InvalidEncoding(e) => {
                warn!(file = file_name, encoding = %encoding, error = %e, "Decoding failed, trying next encoding");
            }
            DecodeAttempt::ParseFailed(e) => {
                error!(file = file_name, encoding = %encoding, error = %e, "Error reading file");
            }
        }
    }
    None
}

/// Locate the question and answer columns in a header record.
pub fn find_columns(header: &StringRecord) -> Option<(usize, usize)> {
    let names: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
    let question = names.iter().position(|h| h == "question")?;
    let answer = names.iter().position(|h| h == "answer")?;
    Some((question, answer))
}

pub fn parse_file_bytes(bytes: &[u8], file_name: &str) -> std::result::Result<ParsedFile, FileSkip> {
    let (encoding, records) = decode_records(bytes, file_name).ok_or(FileSkip::Undecodable)?;

    let (q_idx, a_idx) = find_columns(&records[0]).ok_or(FileSkip::MissingColumns)?;
    let width = q_idx.max(a_idx) + 1;

    let mut entries = Vec::new();
    let mut rejected_rows = 0;

    for record in &records[1..] {
        let entry = if record.len() >= width {
            QaEntry::new(&record[q_idx], &record[a_idx])
        } else {
            None
        };

        match entry {
            Some(entry) => entries.push(entry),
            None => rejected_rows += 1,
        }
    }

    Ok(ParsedFile {
        encoding,
        entries,
        rejected_rows,
    })
}

pub fn parse_file(path: &Path) -> std::result::Result<ParsedFile, FileSkip> {
    let bytes = fs::read(path).map_err(|e| FileSkip::Unreadable(e.to_string()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_file_bytes(&bytes, &file_name)
}

/// `*.csv` regular files in `dir`, sorted by file name
pub fn list_data_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(".csv"))
            .unwrap_or(false);

        if is_csv && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse every data file into one corpus, without embeddings.
pub fn load_entries(dir: &Path) -> Result<LoadedCorpus> {
    let mut corpus = Corpus::new();
    let mut report = LoadReport::default();

    if !dir.is_dir() {
        error!(dir = %dir.display(), "Data folder not found");
        return Ok(LoadedCorpus { corpus, report });
    }

    for path in list_data_files(dir)? {
        report.files_seen += 1;

        let parsed = match parse_file(&path) {
            Ok(parsed) => parsed,
            Err(reason) => {
                warn!(file = %path.display(), reason = %reason, "Skipping data file");
                report.files_skipped += 1;
                continue;
            }
        };

        report.files_loaded += 1;
        report.rows_rejected += parsed.rejected_rows;

        for entry in parsed.entries {
            report.rows_accepted += 1;
            let question = entry.question.clone();
            if corpus.insert(entry) {
                debug!(question = %question, file = %path.display(), "Duplicate question overwritten");
                report.duplicates += 1;
            }
        }
    }

    Ok(LoadedCorpus { corpus, report })
}

/// Loads the corpus from disk and, when configured, embeds every question.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    data_dir: PathBuf,
    embedder: Option<FailOpenEmbedder>,
}

impl CorpusLoader {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            embedder: None,
        }
    }

    pub fn with_embedder(mut self, embedder: FailOpenEmbedder) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub async fn load(&self) -> Result<LoadedCorpus> {
        let dir = self.data_dir.clone();
        let mut loaded = tokio::task::spawn_blocking(move || load_entries(&dir)).await??;

        if let Some(embedder) = &self.embedder {
            let dimension = embedder.dimension();
            let mut embeddings = Vec::with_capacity(loaded.corpus.len());

            for question in loaded.corpus.questions() {
                let vector = embedder.embed_or_zero(question).await;
                if vector.iter().all(|&x| x == 0.0) {
                    loaded.report.embeddings_failed += 1;
                }
                embeddings.push(vector);
            }

            loaded.corpus.enable_semantic(dimension, embeddings)?;
        }

        info!(
            entries = loaded.corpus.len(),
            files_loaded = loaded.report.files_loaded,
            files_skipped = loaded.report.files_skipped,
            semantic = loaded.corpus.is_semantic(),
            "Corpus loaded"
        );

        Ok(loaded)
    }
}
