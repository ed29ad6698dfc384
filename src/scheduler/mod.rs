pub mod error;
pub mod fifo;
pub mod mlfq;
pub mod policy;
pub mod round_robin;
pub mod stcf;
mod timeline;
mod validate;

pub use error::ScheduleError;
pub use fifo::{fifo, sjf};
pub use mlfq::{mlfq, mlfq_with_mode, MlfqMode};
pub use policy::{simulate, SchedulingPolicy};
pub use round_robin::round_robin;
pub use stcf::stcf;
