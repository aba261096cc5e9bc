#![allow(clippy::needless_return)]

mod artifact;
mod cell;
mod emitter;
mod row;
pub mod utils;
mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use artifact::{Artifact, GenerationReport};
pub use cell::{CellValue, escape_single_quotes};
pub use emitter::{
    ArtifactKind, Emission, RowDiagnostic, emit, emit_constants, emit_enums,
    emit_string_constants,
};
pub use row::{ConstantRow, EnumRow, RowError, RowRecord, SourceRow, StringConstRow};
pub use workbook::{WorkbookError, read_rows};

pub const ERRORS_LOG_FILE: &str = "errors.log";
