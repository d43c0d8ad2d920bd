use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read conversation set: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse conversation set: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("conversation id '{0}' has no numeric tail")]
    BadId(String),
}

/// One recorded conversation: an id like `ATC_7` plus its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub id: String,
    pub conversation: Vec<String>,
}

/// The example-conversation corpus: customer-service (`ATC`) and customer
/// experience (`EXP`) transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSet {
    #[serde(rename = "ATC")]
    pub service: Vec<ConversationEntry>,

    #[serde(rename = "EXP")]
    pub experience: Vec<ConversationEntry>,
}

impl ConversationSet {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<ConversationSet, CorpusError> {
        let contents = fs::read_to_string(path)?;
        let set = serde_json::from_str(&contents)?;
        Ok(set)
    }
}

fn transcript_file_name(category: &str, id: &str) -> Result<String, CorpusError> {
    let numeric_id: u32 = id
        .rsplit('_')
        .next()
        .and_then(|tail| tail.parse().ok())
        .ok_or_else(|| CorpusError::BadId(id.to_string()))?;
    Ok(format!("{}_{:03}.txt", category, numeric_id))
}

/// Materialize every conversation as a `.txt` transcript in `output_dir`,
/// one conversation line per text line. The directory is created if missing.
/// File names derive from the numeric tail of each id, zero-padded to three
/// digits (`ATC_7` becomes `ATC_007.txt`).
pub fn generate_transcript_files<P: AsRef<Path>>(
    set: &ConversationSet,
    output_dir: P,
) -> Result<Vec<PathBuf>, CorpusError> {
    let output_dir = output_dir.as_ref();
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }

    let mut written = Vec::new();
    let groups = [("ATC", &set.service), ("EXP", &set.experience)];

    for (category, entries) in groups {
        for entry in entries {
            let file_name = transcript_file_name(category, &entry.id)?;
            let path = output_dir.join(file_name);

            let mut contents = String::new();
            for line in &entry.conversation {
                contents.push_str(line);
                contents.push('\n');
            }
            fs::write(&path, contents)?;
            debug!(file = %path.display(), "transcript written");
            written.push(path);
        }
    }

    Ok(written)
}
