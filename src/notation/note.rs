use serde::{Deserialize, Serialize};

/// Frequency of A4, the tuning reference.
pub const A4_HZ: f64 = 440.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Percussion {
    /// Low thump, `k` in notation
    Kick,
    /// Noise burst, `s` in notation
    Snare,
}

/// What a single event sounds: a pitched tone or one of the two drum classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Voice {
    /// Hz
    Tone(f64),
    Percussion(Percussion),
}

impl Voice {
    pub fn frequency(&self) -> Option<f64> {
        match self {
            Voice::Tone(freq) => Some(*freq),
            Voice::Percussion(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub voice: Voice,
    /// Seconds
    pub duration: f64,
    /// Seconds from the start of the loop cycle
    pub start: f64,
    /// Relative level, scaled by the mix at dispatch time
    pub volume: f32,
}

impl NoteEvent {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Semitone offset of a note letter above C within its octave.
pub fn semitone_offset(letter: char) -> Option<i32> {
    match letter {
        'c' => Some(0),
        'd' => Some(2),
        'e' => Some(4),
        'f' => Some(5),
        'g' => Some(7),
        'a' => Some(9),
        'b' => Some(11),
        _ => None,
    }
}

/// Equal-tempered frequency of `letter` raised by `accidental` semitones in
/// `octave`, where octave 4 holds middle C.
pub fn note_frequency(letter: char, accidental: i32, octave: i32) -> Option<f64> {
    let semitone = (semitone_offset(letter)? + accidental) as f64 + (octave as f64 - 4.0) * 12.0;
    Some(A4_HZ * 2.0_f64.powf((semitone - 9.0) / 12.0))
}
