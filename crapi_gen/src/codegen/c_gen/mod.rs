pub mod dcls;

// Re-export main public functions
pub use dcls::{
    declaration_for, emit_autogen_warning, emit_include_guard_close, emit_include_guard_open,
};
