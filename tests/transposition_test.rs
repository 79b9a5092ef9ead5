// Transposition engine behavior across the public API

use chordshift_wasm::models::{Block, BlockFormat, Interval, Key, SpelledPitch, Tonic};
use chordshift_wasm::transposition::enharmonic::clean_chord_token;
use chordshift_wasm::transposition::key_convention::{FLAT_KEYS, SHARP_KEYS};
use chordshift_wasm::transposition::{
    build_progression, clean_chord, distance, respell, transpose, transpose_block,
    transpose_chord_line, transpose_token, ChordToken, CURRENT_KEY_SLOT,
};

fn key(s: &str) -> Key {
    s.parse().expect("valid key")
}

fn pitch(s: &str) -> SpelledPitch {
    s.parse().expect("valid pitch")
}

/// True when a line still holds a spelling the chord table would rewrite
fn has_unclean_spelling(line: &str) -> bool {
    line.split_whitespace()
        .filter_map(ChordToken::parse)
        .any(|chord| clean_chord_token(&chord) != chord)
}

const CHORD_LINE: &str = "C C#m7 Db/F D Ebmaj7 E Fsus4 F#m G/B Ab A7 Bbadd9 Bdim Chorus |";

#[test]
fn test_scenario_distance_and_transpose() {
    assert_eq!(distance(&pitch("C"), &pitch("E")).to_string(), "M3");
    assert_eq!(transpose(&pitch("C"), Interval::Maj3).to_string(), "E");
}

#[test]
fn test_scenario_block_to_d() {
    let block = Block::new("Verse", 0, "C G Am F\nlyrics here", BlockFormat::ChordsOverLyrics);
    let interval: Interval = "M2".parse().unwrap();
    let out = transpose_block(&block, interval, &key("D"));
    assert_eq!(out.text, "D A Bm G\nlyrics here");
}

#[test]
fn test_scenario_clean_and_respell() {
    assert_eq!(clean_chord("E#"), "F");
    assert_eq!(clean_chord("Fb"), "E");
    assert_eq!(respell(&key("G"), &["Db".to_string()]), vec!["C#".to_string()]);
    assert_eq!(respell(&key("F"), &["C#".to_string()]), vec!["Db".to_string()]);
}

#[test]
fn test_scenario_progression_slot() {
    let keys = build_progression(&key("C")).unwrap();
    assert_eq!(keys[CURRENT_KEY_SLOT].to_string(), "C");
    assert_eq!(keys, build_progression(&key("C")).unwrap());
}

#[test]
fn test_round_trip_interval_for_every_pitch() {
    let odd_spellings = ["E#", "B#", "Cb", "Fb", "C##", "Bbb"].map(pitch);
    let starts = Tonic::ALL.iter().map(|t| t.spelled()).chain(odd_spellings);

    for start in starts {
        for interval in Interval::ALL {
            let moved = transpose(&start, interval);
            assert_eq!(distance(&start, &moved).semitones(), interval.semitones());
        }
    }
}

#[test]
fn test_identity_keeps_pitch_classes() {
    for target in Tonic::ALL {
        let out = transpose_chord_line(CHORD_LINE, Interval::P1, &Key::major(target));
        for (before, after) in CHORD_LINE.split_whitespace().zip(out.split_whitespace()) {
            match (ChordToken::parse(before), ChordToken::parse(after)) {
                (Some(a), Some(b)) => {
                    assert!(a.root.is_enharmonic(&b.root), "{} -> {}", before, after);
                    assert_eq!(a.bass.map(|p| p.semitone()), b.bass.map(|p| p.semitone()));
                }
                (None, None) => assert_eq!(before, after),
                _ => panic!("token kind changed: {} -> {}", before, after),
            }
        }
    }
}

#[test]
fn test_suffix_preserved_for_every_interval() {
    for interval in Interval::ALL {
        for token in CHORD_LINE.split_whitespace() {
            let out = transpose_token(token, interval, &key("A"));
            match (ChordToken::parse(token), ChordToken::parse(&out)) {
                (Some(a), Some(b)) => assert_eq!(a.suffix, b.suffix, "{} + {}", token, interval),
                (None, _) => assert_eq!(out, token),
                (Some(_), None) => panic!("{} became non-chord {}", token, out),
            }
        }
    }
}

#[test]
fn test_token_count_preserved() {
    let out = transpose_chord_line(CHORD_LINE, Interval::Min3, &key("Eb"));
    assert_eq!(out.split_whitespace().count(), CHORD_LINE.split_whitespace().count());
}

#[test]
fn test_no_double_accidentals_in_output() {
    for target in SHARP_KEYS.iter().chain(FLAT_KEYS.iter()).chain(["C", "Am"].iter()) {
        for interval in Interval::ALL {
            let out = transpose_chord_line(CHORD_LINE, interval, &key(target));
            assert!(!out.contains("##") && !out.contains("bb"), "{} in {}: {}", interval, target, out);
            assert!(!has_unclean_spelling(&out), "{} in {}: {}", interval, target, out);
        }
    }
}

#[test]
fn test_key_bias_consistency() {
    let flats = ["Db", "Eb", "Gb", "Ab", "Bb"];
    let sharps = ["C#", "D#", "F#", "G#", "A#"];

    for interval in Interval::ALL {
        for target in SHARP_KEYS {
            let out = transpose_chord_line(CHORD_LINE, interval, &key(target));
            for chord in out.split_whitespace().filter_map(ChordToken::parse) {
                assert!(!flats.contains(&chord.root.to_string().as_str()), "{} in {}", chord, target);
            }
        }
        for target in FLAT_KEYS {
            let out = transpose_chord_line(CHORD_LINE, interval, &key(target));
            for chord in out.split_whitespace().filter_map(ChordToken::parse) {
                assert!(!sharps.contains(&chord.root.to_string().as_str()), "{} in {}", chord, target);
            }
        }
    }
}

#[test]
fn test_progression_has_twelve_distinct_pitch_classes() {
    for tonic in Tonic::ALL {
        let keys = build_progression(&Key::major(tonic)).unwrap();
        let mut classes: Vec<u8> = keys.iter().map(|k| k.semitone()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), 12, "{}", tonic);
    }
}

#[test]
fn test_unknown_target_key_is_an_error() {
    assert!("H".parse::<Key>().is_err());
    assert!("Fb".parse::<Key>().is_err());
}

#[test]
fn test_lower_case_and_marked_chords_in_a_block() {
    let block = Block::new(
        "Verse",
        0,
        "(c) [g] am| f, c*\r\nsing a new song\r\n",
        BlockFormat::ChordsOverLyrics,
    );
    let out = transpose_block(&block, "M2".parse().unwrap(), &key("D"));
    assert_eq!(out.text, "(D) [A] Bm| G, D*\r\nsing a new song\r\n");
    assert_eq!(clean_chord("e# fb"), "F E");
}
