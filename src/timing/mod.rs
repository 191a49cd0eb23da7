mod clock;
mod scheduler;
mod transport;

pub use clock::{Clock, ManualClock, SampleClock, SystemClock};
pub use scheduler::{Scheduler, SchedulerConfig, TickReport};
pub use transport::{Transport, TransportState};
