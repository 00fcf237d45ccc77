use crate::error::FormatError;
use crate::grouper::BLOCK_LINES;

/// One sequencing read, parsed from a 4-line FASTQ block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
    pub quality: String,
}

/// Column header for the CSV output, unquoted. Written exactly once,
/// before any record row.
pub fn csv_header() -> &'static str {
    "id,description,sequence,quality\n"
}

impl FastqRecord {
    /// Parse one block: header, sequence, separator, quality.
    ///
    /// Each real line is trimmed of line terminators and surrounding
    /// whitespace first. The header splits at its first whitespace
    /// character into `id` and `description`; a header with no
    /// whitespace is malformed. The separator line is discarded without
    /// inspection. `None` in any other slot means the input ended
    /// mid-block.
    pub fn from_block(block: [Option<String>; BLOCK_LINES]) -> Result<Self, FormatError> {
        let [header, sequence, _separator, quality] = block;
        let header = header.ok_or(FormatError::TruncatedBlock)?;
        let (id, description) = header
            .trim()
            .split_once(char::is_whitespace)
            .ok_or(FormatError::MissingDescription)?;
        let sequence = sequence.ok_or(FormatError::TruncatedBlock)?;
        let quality = quality.ok_or(FormatError::TruncatedBlock)?;
        Ok(Self {
            id: id.to_string(),
            description: description.to_string(),
            sequence: sequence.trim().to_string(),
            quality: quality.trim().to_string(),
        })
    }

    /// Render one quoted CSV row. Fields pass through verbatim: embedded
    /// double quotes are NOT escaped, so a field containing `"` produces
    /// a row that strict CSV dialects reject.
    pub fn to_csv(&self) -> String {
        format!(
            "\"{}\",\"{}\",\"{}\",\"{}\"\n",
            self.id, self.description, self.sequence, self.quality
        )
    }
}
