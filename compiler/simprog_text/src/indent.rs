//! Process-wide indent unit.
//!
//! Every indent level expands to one copy of the unit when a buffer is
//! flushed. Expansion happens at flush time, so changing the unit affects
//! only buffers flushed afterwards. A buffer created with
//! [`LineBuffer::with_indent_unit`](crate::LineBuffer::with_indent_unit)
//! ignores the process-wide value.

use std::borrow::Cow;

use parking_lot::RwLock;

/// Indent unit used until [`set_indent_unit`] is called: four spaces.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

static INDENT_UNIT: RwLock<Cow<'static, str>> =
    parking_lot::const_rwlock(Cow::Borrowed(DEFAULT_INDENT_UNIT));

/// The current process-wide indent unit.
pub fn indent_unit() -> Cow<'static, str> {
    INDENT_UNIT.read().clone()
}

/// Replace the process-wide indent unit.
///
/// Embedding applications call this once before any flush, e.g. to emit tabs.
pub fn set_indent_unit(unit: impl Into<Cow<'static, str>>) {
    let unit = unit.into();
    tracing::debug!(unit = ?unit, "indent unit changed");
    *INDENT_UNIT.write() = unit;
}

/// Restore [`DEFAULT_INDENT_UNIT`].
pub fn reset_indent_unit() {
    set_indent_unit(DEFAULT_INDENT_UNIT);
}
