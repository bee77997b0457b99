// Application layer: composes the domain into the answers the CLI prints.

pub mod report;

pub use report::{build_report, clock_for, Report};
