/// Interval arithmetic on spelled pitches
///
/// Instead of pure semitone arithmetic, a transposition moves the letter name
/// by the interval's letter steps and then picks whatever accidental reaches
/// the right pitch class. The result is diatonically spelled but may be
/// non-idiomatic (`E#`, `Fb`, `C##`); the enharmonic normalizer fixes that.
///
/// Example: F# + M3 = A#, C# + M3 = E#, A# + M3 = C##

use crate::models::{Interval, SpelledPitch};

/// Ascending interval from `from` up to `to`
///
/// Defined for every ordered pair; only pitch classes matter, so
/// distance(C#, E) == distance(Db, E) == m3.
pub fn distance(from: &SpelledPitch, to: &SpelledPitch) -> Interval {
    Interval::from_semitones(to.semitone() as i32 - from.semitone() as i32)
}

/// Move `pitch` up by `by`
///
/// Flat roots take a detour through the sharp spelling: respell as sharp,
/// step up a whole tone, apply the interval, then step up a minor seventh
/// to land back in the original octave position (M2 + m7 = P8).
pub fn transpose(pitch: &SpelledPitch, by: Interval) -> SpelledPitch {
    let result = if pitch.has_flat() {
        let sharp = pitch.to_sharp_spelling();
        let raised = step_up(&sharp, Interval::Maj2);
        let moved = step_up(&raised, by);
        step_up(&moved, Interval::Min7)
    } else {
        step_up(pitch, by)
    };

    log::trace!("transpose {} + {} = {}", pitch, by, result);
    result
}

/// One letter-based step. Accidentals never exceed a double sharp/flat:
/// anything further is respelled from the pitch class.
fn step_up(pitch: &SpelledPitch, by: Interval) -> SpelledPitch {
    let letter = pitch.letter.up(by.letter_steps());
    let target = (pitch.semitone() + by.semitones()) % 12;

    // Signed distance from the natural letter, normalized to [-6, 5]
    let mut accidental = target as i8 - letter.natural_semitone() as i8;
    if accidental > 5 {
        accidental -= 12;
    } else if accidental < -6 {
        accidental += 12;
    }

    if accidental.abs() > 2 {
        SpelledPitch::from_semitone_sharp(target)
    } else {
        SpelledPitch::new(letter, accidental)
    }
}
