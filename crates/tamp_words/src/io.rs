//! Printing and debugging words.
//!
//! Output goes to the stack's print handler, never straight to stdout.

use tamp_core::errors::{empty_stack, integer_overflow, type_mismatch};
use tamp_core::{Cell, Stack, StackResult};

/// `a ->`: print the top cell and a newline.
pub fn dot(s: &mut Stack) -> StackResult<'_> {
    let cell = s.pop().map_err(|_| empty_stack("dot"))?;
    s.print_handler().println(&cell.to_string());
    Ok(s)
}

/// `->`: print an empty line.
pub fn cr(s: &mut Stack) -> StackResult<'_> {
    s.print_handler().println("");
    Ok(s)
}

/// `code ->`: print the character with that Unicode scalar value.
pub fn emit(s: &mut Stack) -> StackResult<'_> {
    let code: i64 = s.pop_as()?;
    let ch = u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| type_mismatch("unicode scalar", "out-of-range integer"))?;
    s.print_handler().print(ch.encode_utf8(&mut [0; 4]));
    Ok(s)
}

/// `-> n`: push the depth the stack had before the push.
pub fn depth(s: &mut Stack) -> StackResult<'_> {
    let depth = i64::try_from(s.depth()).map_err(|_| integer_overflow("depth"))?;
    s.push(Cell::int(depth));
    Ok(s)
}

/// `->`: print the whole stack, tail to head.
pub fn print_stack(s: &mut Stack) -> StackResult<'_> {
    s.print_handler().println(&s.to_string());
    Ok(s)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
