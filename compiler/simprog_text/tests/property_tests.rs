//! Property-based tests for the line buffer and SSA variables.
//!
//! Random sequences of buffer operations are replayed against a simple
//! model (a list of `(level, text)` pairs plus a level counter) and the
//! buffer must agree with it.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use simprog_text::{DynamicSsaVar, LineBuffer, Named, SsaVar, Typed, Versioned};

#[derive(Clone, Debug)]
enum Op {
    Append(String),
    Indent,
    Unindent,
    AppendThenIndent(String),
    UnindentThenAppend(String),
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 =:()]{0,12}").unwrap()
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        text_strategy().prop_map(Op::Append),
        Just(Op::Indent),
        Just(Op::Unindent),
        text_strategy().prop_map(Op::AppendThenIndent),
        text_strategy().prop_map(Op::UnindentThenAppend),
    ]
}

/// Replay `ops` on both a buffer and the reference model.
fn replay(ops: &[Op]) -> (LineBuffer<Vec<u8>>, Vec<(usize, String)>) {
    let mut buf = LineBuffer::with_indent_unit(Vec::new(), "    ");
    let mut model = Vec::new();
    let mut level = 0usize;

    for op in ops {
        match op {
            Op::Append(text) => {
                buf.append_line(text);
                model.push((level, text.clone()));
            }
            Op::Indent => {
                buf.indent();
                level += 1;
            }
            Op::Unindent => {
                buf.unindent();
                level = level.saturating_sub(1);
            }
            Op::AppendThenIndent(text) => {
                buf.append_line_then_indent(text);
                model.push((level, text.clone()));
                level += 1;
            }
            Op::UnindentThenAppend(text) => {
                buf.unindent_then_append_line(text);
                level = level.saturating_sub(1);
                model.push((level, text.clone()));
            }
        }
        assert_eq!(buf.indent_level(), level);
    }
    (buf, model)
}

proptest! {
    #[test]
    fn lines_follow_call_order(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let (buf, model) = replay(&ops);
        let appends = ops
            .iter()
            .filter(|op| !matches!(op, Op::Indent | Op::Unindent))
            .count();

        prop_assert_eq!(buf.len(), appends);
        let recorded: Vec<_> = buf
            .lines()
            .map(|l| (l.indent(), l.text().to_owned()))
            .collect();
        prop_assert_eq!(recorded, model);
    }

    #[test]
    fn flush_expands_every_line(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let (mut buf, model) = replay(&ops);
        buf.flush().unwrap();
        let text = String::from_utf8(buf.into_sink()).unwrap();

        let expected: String = model
            .iter()
            .map(|(level, line)| format!("{}{line}\n", "    ".repeat(*level)))
            .collect();
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn unindent_never_goes_negative(unindents in 0usize..16, indents in 0usize..8) {
        let mut buf = LineBuffer::new(Vec::new());
        for _ in 0..indents {
            buf.indent();
        }
        for _ in 0..unindents {
            buf.unindent();
        }
        prop_assert_eq!(buf.indent_level(), indents.saturating_sub(unindents));
    }

    #[test]
    fn ssa_next_counts_up(base in "[a-z][a-z0-9_]{0,8}", n in 1u64..200) {
        let mut v = SsaVar::new(base.clone());
        prop_assert_eq!(v.name(), format!("{base}_0"));
        for i in 1..=n {
            prop_assert_eq!(v.next(), format!("{base}_{i}"));
        }
        prop_assert_eq!(v.name(), v.name());
        prop_assert_eq!(v.version(), n);
    }

    #[test]
    fn next_typed_bumps_once(bumps in 0u64..20, ty in "[a-z]{0,6}") {
        let mut v = DynamicSsaVar::untyped("v");
        for _ in 0..bumps {
            v.next();
        }
        let before = v.version();
        let name = v.next_typed(&ty);

        prop_assert_eq!(v.ty(), ty.as_str());
        prop_assert_eq!(v.version(), before + 1);
        prop_assert_eq!(name, v.name());
    }
}
