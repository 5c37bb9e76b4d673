pub mod operation;

pub use operation::{OperationKind, OperationOutcome, OperationStatus, Seq};
