//! Arity adaptation.
//!
//! Three combinators turn functions of several parameters into shapes that
//! can be fed one argument at a time:
//!
//! - [`slurry`]: fix the *first* argument, `(a, b, c) -> r` becomes
//!   `a -> (b, c) -> r`;
//! - [`rslurry`]: fix the *last* argument, `(a, b, c) -> r` becomes
//!   `c -> (a, b) -> r`;
//! - [`uncurry`]: `a -> b -> r` becomes `(a, b) -> r`.
//!
//! The partially applied value ([`Slurried`] / [`RightSlurried`]) is finished
//! with [`Remaining::call`], passing the remaining arguments as a tuple in
//! parameter order. Adaptation is implemented for up to [`MAX_ARITY`]
//! parameters. None of it touches a stack.

/// Largest parameter count the adapters (and `apply`) support.
pub const MAX_ARITY: usize = 6;

/// A function with its first argument fixed.
pub struct Slurried<F, A> {
    f: F,
    first: A,
}

/// A function with its last argument fixed.
pub struct RightSlurried<F, X> {
    f: F,
    last: X,
}

/// Completion of a partially applied function with the remaining arguments.
pub trait Remaining<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

macro_rules! remaining_impls {
    ($($arg:ident $var:ident),*) => {
        impl<F, A, $($arg,)* R> Remaining<($($arg,)*)> for Slurried<F, A>
        where
            F: FnOnce(A, $($arg),*) -> R,
        {
            type Output = R;

            #[inline]
            fn call(self, ($($var,)*): ($($arg,)*)) -> R {
                (self.f)(self.first, $($var),*)
            }
        }

        impl<F, X, $($arg,)* R> Remaining<($($arg,)*)> for RightSlurried<F, X>
        where
            F: FnOnce($($arg,)* X) -> R,
        {
            type Output = R;

            #[inline]
            fn call(self, ($($var,)*): ($($arg,)*)) -> R {
                (self.f)($($var,)* self.last)
            }
        }
    };
}

remaining_impls!();
remaining_impls!(B b);
remaining_impls!(B b, C c);
remaining_impls!(B b, C c, D d);
remaining_impls!(B b, C c, D d, E e);
remaining_impls!(B b, C c, D d, E e, G g);

/// Fix the first argument of `f`.
///
/// ```text
/// let sub = |a: i64, b: i64| a - b;
/// assert_eq!(slurry(sub)(10).call((3,)), 7);
/// ```
pub fn slurry<F, A>(f: F) -> impl FnOnce(A) -> Slurried<F, A> {
    move |first| Slurried { f, first }
}

/// Fix the last argument of `f`.
///
/// ```text
/// let sub = |a: i64, b: i64| a - b;
/// assert_eq!(rslurry(sub)(3).call((10,)), 7);
/// ```
pub fn rslurry<F, X>(f: F) -> impl FnOnce(X) -> RightSlurried<F, X> {
    move |last| RightSlurried { f, last }
}

/// Turn a curried `a -> b -> r` into a two-parameter function.
pub fn uncurry<F, G, A, B, R>(f: F) -> impl FnOnce(A, B) -> R
where
    F: FnOnce(A) -> G,
    G: FnOnce(B) -> R,
{
    move |a, b| f(a)(b)
}
