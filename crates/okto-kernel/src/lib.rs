//! okto-kernel: the core of the Oktolang interpreter.
//!
//! Oktolang runs one statement per line against a persistent variable
//! store. This crate provides:
//!
//! - **Lexer**: splits a line into raw tokens, honoring quoted spans
//! - **Classifier**: assigns each token a [`TokenKind`]
//! - **Interpolation / preprocessing**: `${name}` in strings, `$name` sigils
//! - **Kernel**: dispatches to builtins or numeric variable arithmetic
//! - **Host**: the seam for output, input, external commands and diagnostics
//!
//! ```
//! use okto_kernel::{Kernel, MemoryHost};
//!
//! let mut kernel = Kernel::default();
//! let mut host = MemoryHost::new();
//! kernel.execute("int n = 5", &mut host);
//! kernel.execute("n ++", &mut host);
//! kernel.execute("log $n", &mut host);
//! assert_eq!(host.output, vec!["6"]);
//! ```

pub mod builtins;
pub mod classify;
pub mod host;
pub mod interpolate;
pub mod interpreter;
pub mod kernel;
pub mod lexer;
pub mod preprocess;
pub mod token;
pub mod value;

pub use host::{Host, MemoryHost, Severity};
pub use interpreter::{EvalError, ExecResult, StoreError, VariableStore};
pub use kernel::{Kernel, KernelConfig};
pub use token::{Token, TokenKind};
pub use value::{Value, ValueKind};
