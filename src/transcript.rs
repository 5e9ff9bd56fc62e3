//! Append-only conversation transcript.
//!
//! Each exchange is written as a stable three-line block followed by a blank
//! separator:
//!
//! ```text
//! User: {text}
//! Chatbot: {text}
//! Intent: {text}
//!
//! ```
//!
//! The sink is an external collaborator of the chat loop: write failures are
//! reported as [`ChatError::TranscriptWrite`] and the loop carries on.

use std::io::Write;
use std::path::PathBuf;

use crate::error::ChatError;

/// One completed exchange, ready to be logged.
#[derive(Debug)]
pub struct Exchange<'a> {
    pub user: &'a str,
    pub reply: &'a str,
    pub intent: &'a str,
}

/// Destination for transcript blocks.
pub trait TranscriptSink {
    fn append(&mut self, exchange: &Exchange<'_>) -> Result<(), ChatError>;
}

/// File-backed transcript, appending to a plain-text log.
///
/// Parent directories are created on first write; the file is opened in
/// append mode per exchange so the log survives the process and interleaves
/// cleanly across sessions.
pub struct FileTranscript {
    path: PathBuf,
}

impl FileTranscript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TranscriptSink for FileTranscript {
    fn append(&mut self, exchange: &Exchange<'_>) -> Result<(), ChatError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(ChatError::TranscriptWrite)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ChatError::TranscriptWrite)?;

        write!(
            file,
            "User: {}\nChatbot: {}\nIntent: {}\n\n",
            exchange.user, exchange.reply, exchange.intent
        )
        .map_err(ChatError::TranscriptWrite)?;

        Ok(())
    }
}

/// Sink that discards every exchange, for `transcript.enabled = false`.
pub struct NullTranscript;

impl TranscriptSink for NullTranscript {
    fn append(&mut self, _exchange: &Exchange<'_>) -> Result<(), ChatError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_stable_block_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        let mut sink = FileTranscript::new(&path);

        sink.append(&Exchange {
            user: "hello",
            reply: "Hi there! What's on your mind?",
            intent: "greetings",
        })
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "User: hello\nChatbot: Hi there! What's on your mind?\nIntent: greetings\n\n"
        );
    }

    #[test]
    fn successive_appends_accumulate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chat.txt");
        let mut sink = FileTranscript::new(&path);

        for _ in 0..2 {
            sink.append(&Exchange {
                user: "thanks",
                reply: "No problem!",
                intent: "thanks",
            })
            .unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Intent: thanks").count(), 2);
        assert!(contents.ends_with("\n\n"));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("chat.txt");
        let mut sink = FileTranscript::new(&path);

        sink.append(&Exchange {
            user: "hi",
            reply: "Hey! How can I help?",
            intent: "greetings",
        })
        .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_reports_transcript_error() {
        // A path under a regular file cannot be created
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let mut sink = FileTranscript::new(blocker.join("chat.txt"));

        let err = sink
            .append(&Exchange {
                user: "hi",
                reply: "Hey!",
                intent: "greetings",
            })
            .unwrap_err();
        assert!(matches!(err, ChatError::TranscriptWrite(_)));
    }
}
