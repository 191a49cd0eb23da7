use super::note::{NoteEvent, Percussion, Voice, note_frequency};

const DEFAULT_TEMPO: f64 = 120.0;
const DEFAULT_OCTAVE: i32 = 4;
const DEFAULT_LENGTH: f64 = 4.0;

/// Settings that persist from one token to the next while scanning a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserState {
    /// Beats per minute
    pub tempo: f64,
    pub octave: i32,
    /// Default note length as a whole-note denominator (4 = quarter)
    pub length: f64,
    /// Running position in seconds
    pub time: f64,
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            octave: DEFAULT_OCTAVE,
            length: DEFAULT_LENGTH,
            time: 0.0,
        }
    }
}

/// Compiles one track of notation into its events, starting from the default
/// state. Unrecognised characters are skipped; this never fails.
pub fn compile(text: &str) -> Vec<NoteEvent> {
    ParserState::default().scan(text)
}

impl ParserState {
    /// Seconds taken by a note of the given length, or of the default length.
    pub fn duration(&self, length: Option<f64>) -> f64 {
        let length = length.unwrap_or(self.length);
        let seconds = (60.0 / self.tempo) * (4.0 / length);
        // t<huge> with l0 is the only way to get here
        if seconds.is_nan() { 0.0 } else { seconds }
    }

    /// Scans `text` from the current state, leaving the state as the text
    /// left it.
    pub fn scan(&mut self, text: &str) -> Vec<NoteEvent> {
        let mut scanner = Scanner::new(text);
        let mut events = Vec::new();

        while let Some(token) = scanner.next() {
            self.step(token, &mut scanner, &mut events);
        }

        events
    }

    fn step(&mut self, token: char, scanner: &mut Scanner, events: &mut Vec<NoteEvent>) {
        match token {
            't' => {
                if let Some(tempo) = scanner.number() {
                    self.tempo = tempo;
                }
            }
            'o' => {
                if let Some(octave) = scanner.number() {
                    self.octave = octave as i32;
                }
            }
            'l' => {
                if let Some(length) = scanner.number() {
                    self.length = length;
                }
            }
            '>' => self.octave = self.octave.saturating_add(1),
            '<' => self.octave = self.octave.saturating_sub(1),
            'a'..='g' => {
                let accidental = scanner.accidental();
                let length = scanner.number();
                let voice = note_frequency(token, accidental, self.octave).map(Voice::Tone);
                self.advance(voice, length, events);
            }
            'k' | 's' => {
                let class = if token == 'k' {
                    Percussion::Kick
                } else {
                    Percussion::Snare
                };
                let length = scanner.number();
                self.advance(Some(Voice::Percussion(class)), length, events);
            }
            'r' => {
                let length = scanner.number();
                self.advance(None, length, events);
            }
            _ => {}
        }
    }

    fn advance(&mut self, voice: Option<Voice>, length: Option<f64>, events: &mut Vec<NoteEvent>) {
        let duration = self.duration(length);
        if let Some(voice) = voice {
            events.push(NoteEvent {
                voice,
                duration,
                start: self.time,
                volume: 1.0,
            });
        }
        self.time += duration;
    }
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(text: &str) -> Self {
        let chars = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self { chars, pos: 0 }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn accidental(&mut self) -> i32 {
        match self.peek() {
            Some('#') | Some('+') => {
                self.pos += 1;
                1
            }
            Some('-') => {
                self.pos += 1;
                -1
            }
            _ => 0,
        }
    }

    /// Unsigned decimal run at the cursor. Oversized runs saturate to
    /// infinity rather than failing.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    fn freq(event: &NoteEvent) -> f64 {
        event.voice.frequency().unwrap()
    }

    #[test]
    fn single_quarter_note() {
        let events = compile("t120 l4 c");
        assert_eq!(events.len(), 1);
        assert!(close(freq(&events[0]), 261.63));
        assert_eq!(events[0].duration, 0.5);
        assert_eq!(events[0].start, 0.0);
    }

    #[test]
    fn consecutive_eighths() {
        let events = compile("t120 l8 c d");
        assert_eq!(events.len(), 2);
        assert!(close(freq(&events[0]), 261.63));
        assert_eq!(events[0].duration, 0.25);
        assert_eq!(events[0].start, 0.0);
        assert!(close(freq(&events[1]), 293.66));
        assert_eq!(events[1].duration, 0.25);
        assert_eq!(events[1].start, 0.25);
    }

    #[test]
    fn rest_consumes_time_without_an_event() {
        let events = compile("t120 l4 r c");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].start, 0.5);
    }

    #[test]
    fn inline_length_does_not_persist() {
        let events = compile("t120 l4 c8 d");
        assert_eq!(events[0].duration, 0.25);
        assert_eq!(events[1].duration, 0.5);
        assert_eq!(events[1].start, 0.25);
    }

    #[test]
    fn accidentals() {
        let events = compile("c# c+ d- e");
        assert!(close(freq(&events[0]), 277.18));
        assert!(close(freq(&events[1]), 277.18));
        assert!(close(freq(&events[2]), 277.18));
        assert!(close(freq(&events[3]), 329.63));
    }

    #[test]
    fn octave_commands_persist() {
        let events = compile("o3 a > a > a < < < a");
        let freqs: Vec<f64> = events.iter().map(freq).collect();
        assert!(close(freqs[0], 220.0));
        assert!(close(freqs[1], 440.0));
        assert!(close(freqs[2], 880.0));
        assert!(close(freqs[3], 110.0));
    }

    #[test]
    fn percussion_uses_inline_lengths() {
        let events = compile("t120 l4 k s k8 k8 s");
        let voices: Vec<Voice> = events.iter().map(|e| e.voice).collect();
        assert_eq!(
            voices,
            vec![
                Voice::Percussion(Percussion::Kick),
                Voice::Percussion(Percussion::Snare),
                Voice::Percussion(Percussion::Kick),
                Voice::Percussion(Percussion::Kick),
                Voice::Percussion(Percussion::Snare),
            ]
        );
        assert_eq!(events[2].duration, 0.25);
        assert_eq!(events[4].start, 1.5);
    }

    #[test]
    fn case_and_whitespace_insensitive() {
        assert_eq!(compile("T120 L8 C D"), compile("t120l8cd"));
        assert_eq!(compile("t120 l8\n\tc   d"), compile("t120l8cd"));
    }

    #[test]
    fn unknown_characters_are_skipped_without_time() {
        let events = compile("t120 l4 c . | x ! d");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].start, 0.5);
    }

    #[test]
    fn missing_number_keeps_setting() {
        let mut state = ParserState::default();
        state.scan("t90 tl o");
        assert_eq!(state.tempo, 90.0);
        assert_eq!(state.length, 4.0);
        assert_eq!(state.octave, 4);
    }

    #[test]
    fn state_carries_between_scans() {
        let mut state = ParserState::default();
        state.scan("t60 o2 l2");
        let events = state.scan("a");
        assert_eq!(events[0].duration, 2.0);
        assert!(close(freq(&events[0]), 110.0));
        assert_eq!(state.time, 2.0);
    }

    #[test]
    fn extreme_values_are_accepted() {
        let events = compile("t0 c");
        assert!(events[0].duration.is_infinite());

        let events = compile("l0 c d");
        assert!(events[0].duration.is_infinite());
        assert!(events[1].start.is_infinite());

        let events = compile("o99999999999 c");
        assert!(events[0].voice.frequency().unwrap().is_infinite());
    }

    #[test]
    fn compilation_is_deterministic() {
        let text = "t140 o3 l8 a a > c c < b b a g f f a a g4 e4 k s r16 c#";
        assert_eq!(compile(text), compile(text));
    }

    #[test]
    fn starts_never_decrease() {
        let events = compile("t200 l32 c d e r f g8 a4 b2 > c1 k s l64 c c c");
        assert!(events.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
