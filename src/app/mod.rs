//! Process-level helpers used by the binary.

pub mod shutdown;

pub use shutdown::cancel_on_ctrl_c;
