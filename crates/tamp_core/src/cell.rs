//! Stack cells.
//!
//! A [`Cell`] is one of three things:
//!
//! - `Int`: a 64-bit integer, stored inline;
//! - `Ref`: a shared-owned text, word, or nested stack;
//! - `Boxed`: any host value that opts in through [`Opaque`].
//!
//! Conversions go through two traits. [`IntoCell`] picks the variant when a
//! value is pushed (integer before reference before boxed), and [`FromCell`]
//! recovers a concrete type when a value is popped, failing with a
//! `TypeMismatch` error instead of guessing.

use std::any::{type_name, Any};
use std::fmt;
use std::rc::Rc;

use crate::errors::{type_mismatch, StackError};
use crate::heap::Heap;
use crate::stack::Stack;
use crate::word::Word;

/// A single tagged, stack-storable value.
#[derive(Clone)]
pub enum Cell {
    /// Integer value (unboxed).
    Int(i64),
    /// Shared-owned value of a kind the engine knows about.
    Ref(Reference),
    /// Host value the engine only knows through [`Opaque`].
    Boxed(Boxed),
}

/// Shared-owned cell contents.
#[derive(Clone)]
pub enum Reference {
    Text(Heap<str>),
    Word(Word),
    /// A stack stored as a value, e.g. a saved snapshot.
    Stack(Heap<Stack>),
}

// Factory Methods

impl Cell {
    pub fn int(value: i64) -> Self {
        Cell::Int(value)
    }

    pub fn text(value: impl Into<Rc<str>>) -> Self {
        Cell::Ref(Reference::Text(Heap::from_rc(value.into())))
    }

    pub fn word(word: Word) -> Self {
        Cell::Ref(Reference::Word(word))
    }

    pub fn stack(stack: Stack) -> Self {
        Cell::Ref(Reference::Stack(Heap::new(stack)))
    }

    pub fn boxed<T: Opaque>(value: T) -> Self {
        Cell::Boxed(Boxed(Rc::new(value)))
    }

    /// Short name of the cell's kind, used in error reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Cell::Int(_) => "integer",
            Cell::Ref(Reference::Text(_)) => "text",
            Cell::Ref(Reference::Word(_)) => "word",
            Cell::Ref(Reference::Stack(_)) => "stack",
            Cell::Boxed(boxed) => boxed.type_name(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Ref(Reference::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Cell::Ref(Reference::Word(word)) => Some(word),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        match self {
            Cell::Boxed(boxed) => boxed.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => a == b,
            (Cell::Ref(Reference::Text(a)), Cell::Ref(Reference::Text(b))) => a == b,
            (Cell::Ref(Reference::Word(a)), Cell::Ref(Reference::Word(b))) => Word::ptr_eq(a, b),
            (Cell::Ref(Reference::Stack(a)), Cell::Ref(Reference::Stack(b))) => a == b,
            (Cell::Boxed(a), Cell::Boxed(b)) => a.0.eq_erased(b.0.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Ref(Reference::Text(text)) => f.write_str(text),
            Cell::Ref(Reference::Word(word)) => write!(f, "<word {}>", word.name()),
            Cell::Ref(Reference::Stack(stack)) => write!(f, "{}", **stack),
            Cell::Boxed(boxed) => fmt::Display::fmt(&*boxed.0, f),
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(i) => write!(f, "Int({i})"),
            Cell::Ref(Reference::Text(text)) => write!(f, "Text({:?})", &**text),
            Cell::Ref(Reference::Word(word)) => write!(f, "Word({})", word.name()),
            Cell::Ref(Reference::Stack(stack)) => write!(f, "Stack({:?})", **stack),
            Cell::Boxed(boxed) => write!(f, "Boxed({:?})", &*boxed.0),
        }
    }
}

// Boxed Values

/// Capability a host type needs to travel on the stack as a boxed cell.
///
/// Boxed cells can be printed, compared and recovered by type; nothing else.
/// `bool`, `f32`, `f64` and `char` are opaque out of the box.
///
/// ```text
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Critter { Alive, Dead }
/// impl fmt::Display for Critter { ... }
/// impl Opaque for Critter {}
/// ```
pub trait Opaque: Any + Clone + PartialEq + fmt::Debug + fmt::Display {}

impl Opaque for bool {}
impl Opaque for f32 {}
impl Opaque for f64 {}
impl Opaque for char {}

/// Object-safe view of an [`Opaque`] value.
trait ErasedOpaque: fmt::Debug + fmt::Display {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
    fn eq_erased(&self, other: &dyn ErasedOpaque) -> bool;
}

impl<T: Opaque> ErasedOpaque for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn eq_erased(&self, other: &dyn ErasedOpaque) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Type-erased host value.
#[derive(Clone)]
pub struct Boxed(Rc<dyn ErasedOpaque>);

impl Boxed {
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

// Pushing

/// Conversion of a host value into a cell.
///
/// Implemented for integers, texts, stacks, cells themselves, and every
/// [`Opaque`] type. Words are pushed with [`Cell::word`] instead, so that a
/// word handed to `apply` is always run rather than stored.
pub trait IntoCell {
    fn into_cell(self) -> Cell;
}

impl IntoCell for Cell {
    fn into_cell(self) -> Cell {
        self
    }
}

impl IntoCell for i64 {
    fn into_cell(self) -> Cell {
        Cell::Int(self)
    }
}

macro_rules! small_int_into_cell {
    ($($ty:ty),*) => {
        $(impl IntoCell for $ty {
            fn into_cell(self) -> Cell {
                Cell::Int(i64::from(self))
            }
        })*
    };
}

small_int_into_cell!(i8, i16, i32, u8, u16, u32);

impl IntoCell for String {
    fn into_cell(self) -> Cell {
        Cell::text(self)
    }
}

impl IntoCell for &str {
    fn into_cell(self) -> Cell {
        Cell::text(self)
    }
}

impl IntoCell for Stack {
    fn into_cell(self) -> Cell {
        Cell::stack(self)
    }
}

impl<T: Opaque> IntoCell for T {
    fn into_cell(self) -> Cell {
        Cell::boxed(self)
    }
}

// Popping

/// Recovery of a concrete type from a popped cell.
pub trait FromCell: Sized {
    /// Name of the recovered type, used in mismatch reports.
    fn expected() -> &'static str;

    fn from_cell(cell: Cell) -> Result<Self, StackError>;
}

impl FromCell for Cell {
    fn expected() -> &'static str {
        "cell"
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        Ok(cell)
    }
}

impl FromCell for i64 {
    fn expected() -> &'static str {
        "integer"
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        match cell {
            Cell::Int(i) => Ok(i),
            other => Err(type_mismatch(Self::expected(), other.kind_name())),
        }
    }
}

macro_rules! narrow_int_from_cell {
    ($($ty:ty),*) => {
        $(impl FromCell for $ty {
            fn expected() -> &'static str {
                stringify!($ty)
            }

            fn from_cell(cell: Cell) -> Result<Self, StackError> {
                let wide = match cell {
                    Cell::Int(i) => i,
                    other => return Err(type_mismatch(Self::expected(), other.kind_name())),
                };
                <$ty>::try_from(wide)
                    .map_err(|_| type_mismatch(Self::expected(), "out-of-range integer"))
            }
        })*
    };
}

narrow_int_from_cell!(i8, i16, i32, u8, u16, u32, u64, usize, isize, i128, u128);

impl FromCell for String {
    fn expected() -> &'static str {
        "text"
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        match cell {
            Cell::Ref(Reference::Text(text)) => Ok(text.to_string()),
            other => Err(type_mismatch(Self::expected(), other.kind_name())),
        }
    }
}

impl FromCell for Word {
    fn expected() -> &'static str {
        "word"
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        match cell {
            Cell::Ref(Reference::Word(word)) => Ok(word),
            other => Err(type_mismatch(Self::expected(), other.kind_name())),
        }
    }
}

impl FromCell for Stack {
    fn expected() -> &'static str {
        "stack"
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        match cell {
            Cell::Ref(Reference::Stack(stack)) => Ok(stack.into_inner()),
            other => Err(type_mismatch(Self::expected(), other.kind_name())),
        }
    }
}

impl<T: Opaque> FromCell for T {
    fn expected() -> &'static str {
        type_name::<T>()
    }

    fn from_cell(cell: Cell) -> Result<Self, StackError> {
        cell.downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| type_mismatch(Self::expected(), cell.kind_name()))
    }
}
