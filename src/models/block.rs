//! Song blocks: named sections of lyric/chord text

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::TransposeError;

/// Layout of a block's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum BlockFormat {
    /// Even-indexed lines (0-based) are chords, odd-indexed lines are lyrics
    ChordsOverLyrics = 1,
    LyricsOnly = 2,
    ChordsOnly = 3,
}

impl BlockFormat {
    /// Whether the line at `index` carries chord symbols
    pub fn is_chord_line(&self, index: usize) -> bool {
        match self {
            BlockFormat::ChordsOverLyrics => index % 2 == 0,
            BlockFormat::LyricsOnly => false,
            BlockFormat::ChordsOnly => true,
        }
    }
}

impl TryFrom<u8> for BlockFormat {
    type Error = TransposeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BlockFormat::ChordsOverLyrics),
            2 => Ok(BlockFormat::LyricsOnly),
            3 => Ok(BlockFormat::ChordsOnly),
            other => Err(TransposeError::UnknownBlockFormat(other)),
        }
    }
}

/// One named section of a song ("Verse 1", "Chorus", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub ind: u32,
    pub text: String,
    pub format: BlockFormat,
}

impl Block {
    pub fn new(name: impl Into<String>, ind: u32, text: impl Into<String>, format: BlockFormat) -> Self {
        Self {
            name: name.into(),
            ind,
            text: text.into(),
            format,
        }
    }

    /// Same block with replaced text
    pub fn with_text(&self, text: String) -> Self {
        Self {
            name: self.name.clone(),
            ind: self.ind,
            text,
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_line_classification() {
        let f = BlockFormat::ChordsOverLyrics;
        assert!(f.is_chord_line(0));
        assert!(!f.is_chord_line(1));
        assert!(f.is_chord_line(2));
        assert!(!BlockFormat::LyricsOnly.is_chord_line(0));
        assert!(BlockFormat::ChordsOnly.is_chord_line(7));
    }

    #[test]
    fn test_format_from_u8() {
        assert_eq!(BlockFormat::try_from(3).unwrap(), BlockFormat::ChordsOnly);
        assert_eq!(
            BlockFormat::try_from(4).unwrap_err(),
            TransposeError::UnknownBlockFormat(4)
        );
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block::new("Chorus", 2, "C G\nla la", BlockFormat::ChordsOverLyrics);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["format"], 1);
        assert_eq!(json["ind"], 2);

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_unknown_format_rejected_on_deserialize() {
        let json = r#"{"name":"V1","ind":0,"text":"","format":9}"#;
        assert!(serde_json::from_str::<Block>(json).is_err());
    }
}
