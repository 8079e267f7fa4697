//! Code generators driven by the Chromium API table.
//!
//! The C generator here emits `unpack_extend.h`, the forward declarations
//! for every special unpacker function.

pub mod cmds;
pub mod codegen;
pub mod errors;

pub use codegen::banner::CopyrightBanner;
pub use codegen::c::{UnpackExtendGenerator, UnpackExtendGeneratorOptions};
pub use codegen::c_gen::declaration_for;
pub use errors::{GenError, GenResult};
