/// Serialization of configuration records into flat KEY=VALUE env files.
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// How values are rendered on the right hand side of `KEY=VALUE` lines.
///
/// The two policies are mutually exclusive and selected by the caller;
/// they are never mixed within one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Wrap the value in double quotes, escaping embedded `"` as `\"`.
    /// Whitespace is preserved verbatim.
    QuotedEscaped,
    /// Emit the value unquoted with leading/trailing whitespace stripped.
    /// An embedded `"` is emitted as-is with a logged warning, so the
    /// resulting line may not parse under a strict env-file reader.
    UnquotedTrimmed,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::QuotedEscaped
    }
}

/// Writes configuration records to a fixed path, overwriting wholesale.
///
/// Forced entries are merged in after the record and override any
/// record entry with the same key. There is no staging or rename: a
/// failing write surfaces the io error and the file is left in its
/// last written state.
#[derive(Clone, Debug)]
pub struct EnvWriter {
    path: PathBuf,
    strategy: Strategy,
    forced: Vec<(String, String)>,
}

impl EnvWriter {
    pub fn new<P: Into<PathBuf>>(path: P, strategy: Strategy) -> Self {
        Self {
            path: path.into(),
            strategy,
            forced: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Registers a key that is always written with the given value,
    /// overriding any same-named key from the record.
    pub fn force_set(&mut self, key: &str, value: &str) {
        self.forced.retain(|(existing, _)| existing != key);
        self.forced.push((key.into(), value.into()));
    }

    fn format_entry(&self, key: &str, value: &str) -> String {
        match self.strategy {
            Strategy::QuotedEscaped => format!("{}=\"{}\"", key, value.replace('"', "\\\"")),
            Strategy::UnquotedTrimmed => {
                let trimmed = value.trim();
                if trimmed.contains('"') {
                    warn!(
                        "Value for `{}` contains a double quote; the written line may not parse",
                        key
                    );
                }
                format!("{}={}", key, trimmed)
            }
        }
    }

    /// Renders the record as env-file text, one entry per line, with a
    /// single trailing newline. Forced entries come last.
    pub fn serialize(&self, record: &[(String, String)]) -> String {
        let mut lines = Vec::with_capacity(record.len() + self.forced.len());
        for (key, value) in record {
            if self.forced.iter().any(|(forced, _)| forced == key) {
                continue;
            }
            lines.push(self.format_entry(key, value));
        }
        for (key, value) in &self.forced {
            lines.push(self.format_entry(key, value));
        }

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    /// Serializes and overwrites the target file in one shot.
    pub fn save(&self, record: &[(String, String)]) -> Result<()> {
        fs::write(&self.path, self.serialize(record))?;
        Ok(())
    }
}
