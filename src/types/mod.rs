pub mod report;

pub use report::{ContainerKind, HarnessError, ProbePosition, TimingSample};
