//! Labeled corpus loading.
//!
//! The corpus is one tabular file with `text` and `label` columns, label one
//! of `spam`/`ham`. Rows with any other label are filtered out and counted;
//! a missing or unreadable file is fatal to the training run.

use serde::Deserialize;
use std::path::Path;

use crate::pipeline::Label;
use crate::Error;

/// One labeled training example.
#[derive(Debug, Clone)]
pub struct LabeledExample {
    pub text: String,
    pub label: Label,
}

/// A loaded corpus plus bookkeeping about rejected rows.
#[derive(Debug)]
pub struct Corpus {
    pub examples: Vec<LabeledExample>,
    /// Rows dropped because their label was neither `spam` nor `ham`.
    pub skipped_rows: usize,
}

impl Corpus {
    /// Split into (spam, ham) texts.
    pub fn partition(self) -> (Vec<String>, Vec<String>) {
        let mut spam = Vec::new();
        let mut ham = Vec::new();
        for example in self.examples {
            match example.label {
                Label::Spam => spam.push(example.text),
                Label::Ham => ham.push(example.text),
            }
        }
        (spam, ham)
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    text: String,
    label: String,
}

/// Load a CSV corpus from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Corpus, Error> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| Error::TrainingData(format!("{}: {}", path.display(), e)))?;

    let mut examples = Vec::new();
    let mut skipped_rows = 0;
    for record in reader.deserialize() {
        let record: RawRecord =
            record.map_err(|e| Error::TrainingData(format!("{}: {}", path.display(), e)))?;
        match Label::parse(&record.label) {
            Some(label) => examples.push(LabeledExample {
                text: record.text,
                label,
            }),
            None => skipped_rows += 1,
        }
    }

    if examples.is_empty() {
        return Err(Error::TrainingData(format!(
            "{}: no usable rows",
            path.display()
        )));
    }

    Ok(Corpus {
        examples,
        skipped_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_corpus() {
        let file = write_corpus("text,label\nwin big,spam\nsee you at lunch,ham\n");
        let corpus = load(file.path()).unwrap();
        assert_eq!(corpus.examples.len(), 2);
        assert_eq!(corpus.skipped_rows, 0);
        assert_eq!(corpus.examples[0].label, Label::Spam);
        assert_eq!(corpus.examples[1].label, Label::Ham);
    }

    #[test]
    fn test_unknown_labels_are_filtered_and_counted() {
        let file = write_corpus("text,label\nwin big,spam\nweird row,maybe\nhello,ham\n");
        let corpus = load(file.path()).unwrap();
        assert_eq!(corpus.examples.len(), 2);
        assert_eq!(corpus.skipped_rows, 1);
    }

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        let file = write_corpus("text,label\nwin big,SPAM\nhello,Ham\n");
        let corpus = load(file.path()).unwrap();
        assert_eq!(corpus.examples.len(), 2);
    }

    #[test]
    fn test_missing_file_is_training_data_error() {
        assert!(matches!(
            load("no/such/corpus.csv"),
            Err(Error::TrainingData(_))
        ));
    }

    #[test]
    fn test_corpus_with_no_usable_rows_is_rejected() {
        let file = write_corpus("text,label\nweird row,maybe\n");
        assert!(matches!(load(file.path()), Err(Error::TrainingData(_))));
    }

    #[test]
    fn test_partition() {
        let corpus = Corpus {
            examples: vec![
                LabeledExample {
                    text: "s1".into(),
                    label: Label::Spam,
                },
                LabeledExample {
                    text: "h1".into(),
                    label: Label::Ham,
                },
                LabeledExample {
                    text: "s2".into(),
                    label: Label::Spam,
                },
            ],
            skipped_rows: 0,
        };
        let (spam, ham) = corpus.partition();
        assert_eq!(spam, vec!["s1", "s2"]);
        assert_eq!(ham, vec!["h1"]);
    }
}
