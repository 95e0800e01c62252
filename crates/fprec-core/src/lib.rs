#![deny(missing_docs)]
#![doc = "IEEE-754 bit introspection and compensated summation for the fprec lab."]

pub mod bitview;
pub mod diagnostics;
pub mod errors;
pub mod precision;
pub mod summer;

pub use bitview::{classify, decompose, describe, render, Classification, FieldView};
pub use diagnostics::{sum_with_checkpoints, Checkpoints, RenderedSnapshot, TraceRecord};
pub use errors::{ErrorInfo, FprecError};
pub use precision::{FloatValue, IeeeFloat, PrecisionClass};
pub use summer::{
    Accumulator, CompensatedSummer, NaiveSummer, Snapshot, StepTrace, SummationState,
    SummerPhase,
};
