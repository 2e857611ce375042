//! Record input sources.
//!
//! Records come from a file or from piped stdin, are decoded once, and are
//! delivered to the event loop from a background thread so the table can
//! show its loading state meanwhile.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

pub mod parse;

pub use parse::{parse_records, LoadedRecords};

/// Where records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file given on the command line.
    File(PathBuf),
    /// Piped standard input.
    Stdin,
}

impl InputSource {
    /// Human-readable name for the title bar and logs.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    /// Read the whole source and decode it.
    ///
    /// # Errors
    ///
    /// I/O failures and every decoding error of [`parse_records`].
    pub fn load(&self) -> Result<LoadedRecords, InputError> {
        let text = match self {
            InputSource::File(path) => std::fs::read_to_string(path)?,
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin().lock().read_to_string(&mut text)?;
                text
            }
        };
        let loaded = parse_records(&text)?;
        tracing::info!(
            source = %self.display_name(),
            records = loaded.rows.len(),
            columns = loaded.fields.len(),
            "Loaded records"
        );
        Ok(loaded)
    }
}

/// Pick the input source.
///
/// # Logic:
/// 1. If a file path is provided it must exist
/// 2. Else stdin, when it is piped
/// 3. Else `InputError::NoInput`
///
/// # Errors
///
/// `FileNotFound` for a missing file, `NoInput` for an interactive stdin.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) if path.is_file() => Ok(InputSource::File(path)),
        Some(path) => Err(InputError::FileNotFound { path }),
        None if std::io::stdin().is_terminal() => Err(InputError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

/// Load `source` on a background thread.
///
/// The receiver yields exactly one message. A dropped sender without a
/// message means the thread panicked.
pub fn spawn_loader(source: InputSource) -> Receiver<Result<LoadedRecords, InputError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = source.load();
        if let Err(e) = &result {
            tracing::warn!(source = %source.display_name(), error = %e, "Loading failed");
        }
        // The receiver is gone when the viewer quit before loading finished.
        let _ = tx.send(result);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("tabview_source_{}_{}", name, std::process::id()));
        fs::write(&path, contents).expect("write temp file");
        path
    }

    #[test]
    fn missing_file_is_reported() {
        let path = PathBuf::from("/nonexistent/records.json");
        match detect_input_source(Some(path.clone())) {
            Err(InputError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn directory_is_not_a_record_file() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            detect_input_source(Some(dir)),
            Err(InputError::FileNotFound { .. })
        ));
    }

    #[test]
    fn existing_file_loads_records() {
        let path = temp_file("load.jsonl", "{\"id\":1}\n{\"id\":2}\n");
        let source = detect_input_source(Some(path.clone())).unwrap();
        let loaded = source.load();
        fs::remove_file(&path).ok();

        assert_eq!(source, InputSource::File(path));
        assert_eq!(loaded.unwrap().rows.len(), 2);
    }

    #[test]
    fn loader_thread_delivers_result() {
        let path = temp_file("thread.json", r#"[{"name":"Apple"}]"#);
        let rx = spawn_loader(InputSource::File(path.clone()));

        let loaded = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("loader should answer")
            .expect("records should parse");
        fs::remove_file(&path).ok();

        assert_eq!(loaded.fields, vec!["name"]);
    }

    #[test]
    fn loader_thread_delivers_errors() {
        let path = temp_file("thread_bad.json", "[1]");
        let rx = spawn_loader(InputSource::File(path.clone()));

        let result = rx.recv_timeout(Duration::from_secs(5)).expect("loader should answer");
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(InputError::NotAnObject { index: 0 })));
    }

    #[test]
    fn display_names() {
        assert_eq!(InputSource::Stdin.display_name(), "stdin");
        assert_eq!(
            InputSource::File(PathBuf::from("/tmp/a.json")).display_name(),
            "/tmp/a.json"
        );
    }
}
