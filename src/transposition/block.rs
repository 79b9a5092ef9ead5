//! Block transposition
//!
//! Chord lines are rewritten token by token: transpose, clean, respell for
//! the destination key. Lyric lines are copied verbatim. Within a chord line
//! whitespace runs collapse to single spaces. Brackets and bar lines glued
//! to a chord stay where they were, and a trailing `\r` is kept so CRLF
//! text keeps its line endings.

use crate::models::{Block, BlockFormat, Interval, Key};
use crate::transposition::chord::rewrite_token;
use crate::transposition::enharmonic::clean_chord_token;
use crate::transposition::interval::transpose;
use crate::transposition::key_convention::respell_chord_token;

/// Full pipeline for one token; non-chord tokens come back unchanged
pub fn transpose_token(token: &str, interval: Interval, target: &Key) -> String {
    rewrite_token(token, |chord| {
        let moved = chord.map_pitches(|p| transpose(p, interval));
        let cleaned = clean_chord_token(&moved);
        respell_chord_token(target, &cleaned)
    })
}

pub fn transpose_chord_line(line: &str, interval: Interval, target: &Key) -> String {
    line.split_whitespace()
        .map(|token| transpose_token(token, interval, target))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn transpose_block(block: &Block, interval: Interval, target: &Key) -> Block {
    if block.format == BlockFormat::LyricsOnly {
        return block.clone();
    }

    let text = block
        .text
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if block.format.is_chord_line(i) {
                let (body, ending) = match line.strip_suffix('\r') {
                    Some(body) => (body, "\r"),
                    None => (line, ""),
                };
                transpose_chord_line(body, interval, target) + ending
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    log::debug!("transposed block '{}' (#{}) by {} into {}", block.name, block.ind, interval, target);
    block.with_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        s.parse().unwrap()
    }

    #[test]
    fn test_chords_over_lyrics() {
        let block = Block::new("Verse 1", 0, "C G Am F\nlyrics here", BlockFormat::ChordsOverLyrics);
        let out = transpose_block(&block, Interval::Maj2, &key("D"));
        assert_eq!(out.text, "D A Bm G\nlyrics here");
        assert_eq!(out.name, "Verse 1");
        assert_eq!(out.format, BlockFormat::ChordsOverLyrics);
    }

    #[test]
    fn test_lyric_lines_that_look_like_chords_are_untouched() {
        let block = Block::new("V", 0, "C\nA  B  C\nG\nE", BlockFormat::ChordsOverLyrics);
        let out = transpose_block(&block, Interval::P5, &key("G"));
        assert_eq!(out.text, "G\nA  B  C\nD\nE");
    }

    #[test]
    fn test_chords_only() {
        let block = Block::new("Intro", 1, "C F\nG C", BlockFormat::ChordsOnly);
        let out = transpose_block(&block, Interval::P4, &key("F"));
        assert_eq!(out.text, "F Bb\nC F");
    }

    #[test]
    fn test_lyrics_only_unchanged() {
        let block = Block::new("Tag", 2, "C D E\nAmazing grace", BlockFormat::LyricsOnly);
        assert_eq!(transpose_block(&block, Interval::Min3, &key("Eb")), block);
    }

    #[test]
    fn test_empty_block() {
        let block = Block::new("Empty", 0, "", BlockFormat::ChordsOverLyrics);
        assert_eq!(transpose_block(&block, Interval::Maj2, &key("D")).text, "");
    }

    #[test]
    fn test_whitespace_collapses_on_chord_lines() {
        let block = Block::new("V", 0, "C     G\n  keep   spacing  ", BlockFormat::ChordsOverLyrics);
        let out = transpose_block(&block, Interval::P1, &key("C"));
        assert_eq!(out.text, "C G\n  keep   spacing  ");
    }

    #[test]
    fn test_annotations_pass_through() {
        assert_eq!(
            transpose_chord_line("| C / G | (x2) Chorus", Interval::Maj2, &key("D")),
            "| D / A | (x2) Chorus"
        );
    }

    #[test]
    fn test_token_pipeline_respells_for_target() {
        // C#m + m3 = Em; F + m2 = F# in E, Gb in Db
        assert_eq!(transpose_token("C#m7", Interval::Min3, &key("E")), "Em7");
        assert_eq!(transpose_token("F", Interval::Min2, &key("E")), "F#");
        assert_eq!(transpose_token("F", Interval::Min2, &key("Db")), "Gb");
        assert_eq!(transpose_token("Bb/D", Interval::Maj2, &key("D")), "C/E");
        assert_eq!(transpose_token("A#sus4", Interval::Maj3, &key("F#")), "Dsus4");
    }

    #[test]
    fn test_lower_case_chord_line() {
        assert_eq!(transpose_chord_line("c g am f", Interval::Maj2, &key("D")), "D A Bm G");
        assert_eq!(transpose_chord_line("a", Interval::Maj2, &key("D")), "a");
    }

    #[test]
    fn test_marks_around_chords_are_kept() {
        assert_eq!(
            transpose_chord_line("(C) [G] Am| F, C*", Interval::Maj2, &key("D")),
            "(D) [A] Bm| G, D*"
        );
        assert_eq!(transpose_chord_line("|C |G/B", Interval::Maj2, &key("D")), "|D |A/C#");
        assert_eq!(transpose_chord_line("{Em}", Interval::Maj2, &key("D")), "{F#m}");
        assert_eq!(transpose_chord_line("C7(b9)", Interval::Maj2, &key("D")), "D7(b9)");
    }

    #[test]
    fn test_crlf_line_endings_survive() {
        let block = Block::new("V", 0, "C G\r\nlyrics\r\nAm F\r\n", BlockFormat::ChordsOverLyrics);
        let out = transpose_block(&block, Interval::Maj2, &key("D"));
        assert_eq!(out.text, "D A\r\nlyrics\r\nBm G\r\n");

        let block = Block::new("I", 0, "C F\r\nG C", BlockFormat::ChordsOnly);
        assert_eq!(transpose_block(&block, Interval::P4, &key("F")).text, "F Bb\r\nC F");
    }
}
