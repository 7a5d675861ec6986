//! Source text support for code generators.
//!
//! This crate provides the two pieces a generator needs while emitting
//! target-language source:
//!
//! 1. **Line buffering** - [`LineBuffer`] records formatted lines together with
//!    the indentation level active when each line was appended, and writes
//!    them all to an [`io::Write`](std::io::Write) sink in a single flush.
//! 2. **SSA naming** - [`SimpleVar`], [`SsaVar`] and [`DynamicSsaVar`] produce
//!    variable names. The SSA variants hand out a fresh `base_N` name each time
//!    a logical variable is redefined.
//!
//! # Architecture
//!
//! ```text
//!   generator
//!    │    │
//!    │    └── next() / next_typed() ──▶ SsaVar / DynamicSsaVar ──▶ "t_3"
//!    │                                                              │
//!    └── append_line(format_args!("{t} = ...")) ◀──────────────────┘
//!              │
//!          LineBuffer  (indent, unindent, ...)
//!              │
//!           flush()  ──▶  io::Write sink
//! ```
//!
//! The buffer and the variables never reference each other; the generator
//! composes them.
//!
//! # Example
//!
//! ```
//! use simprog_text::{LineBuffer, Named, SsaVar, Versioned};
//!
//! let mut cond = SsaVar::new("cond");
//! let mut buf = LineBuffer::new(Vec::new());
//! buf.append_line_then_indent(format_args!("if {}:", cond.name()));
//! let old = cond.name();
//! buf.append_line(format_args!("{} = not {old}", cond.next()));
//! buf.unindent_then_append_line("pass");
//! buf.flush().unwrap();
//!
//! let text = String::from_utf8(buf.into_sink()).unwrap();
//! assert_eq!(text, "if cond_0:\n    cond_1 = not cond_0\npass\n");
//! ```

mod buffer;
mod error;
mod indent;
mod tracing_setup;
mod var;

pub use buffer::{LineBuffer, SourceLine};
pub use error::FlushError;
pub use indent::{indent_unit, reset_indent_unit, set_indent_unit, DEFAULT_INDENT_UNIT};
pub use tracing_setup::init_tracing;
pub use var::{DynamicSsaVar, Named, SimpleVar, SsaVar, Typed, Versioned};
