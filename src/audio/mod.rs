mod channel;
mod instrument;
mod output;
mod voice;

pub use channel::Channel;
pub use instrument::{Instrument, Wave};
pub use output::{AudioOutput, AudioSink, open_output};
pub use voice::{ADSRConfig, Envelope, EnvelopeState};
