//! Stack shuffling words.
//!
//! Thin word-shaped wrappers over the `Stack` methods, so they can be handed
//! to `apply` and composed like any other word.

use tamp_core::{Stack, StackResult};

/// `a ->`
pub fn drop(s: &mut Stack) -> StackResult<'_> {
    s.drop_top()
}

/// `a b ->`
pub fn drop2(s: &mut Stack) -> StackResult<'_> {
    s.drop2()
}

/// `... ->`
pub fn drop_all(s: &mut Stack) -> StackResult<'_> {
    Ok(s.remove_all())
}

/// `a -> a a`
pub fn dup(s: &mut Stack) -> StackResult<'_> {
    s.dup()
}

/// `a b -> a b a b`
pub fn dup2(s: &mut Stack) -> StackResult<'_> {
    s.dup2()
}

/// `a b -> b a`
pub fn swap(s: &mut Stack) -> StackResult<'_> {
    s.swap()
}

/// `a b -> a b a`
pub fn over(s: &mut Stack) -> StackResult<'_> {
    s.over()
}

/// `a b c -> b c a`
pub fn rot(s: &mut Stack) -> StackResult<'_> {
    s.rot()
}

/// `a b c -> c a b`
pub fn right_rot(s: &mut Stack) -> StackResult<'_> {
    s.right_rot()
}

/// `a b -> b`, i.e. `swap drop`.
pub fn nip(s: &mut Stack) -> StackResult<'_> {
    s.nip()
}

/// `a b -> b a b`, i.e. `swap over`.
pub fn tuck(s: &mut Stack) -> StackResult<'_> {
    s.tuck()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests unwrap chains that must succeed"
)]
