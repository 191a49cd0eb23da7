//! Chiptune notation compiler.
//!
//! A track is written as a compact MML-like string, e.g. `t140 o4 l8 a a > c c`.
//! Compiling one string yields the timed events of a single loop cycle.

mod compiler;
mod note;

pub use compiler::{ParserState, compile};
pub use note::{NoteEvent, Percussion, Voice, note_frequency, semitone_offset};
