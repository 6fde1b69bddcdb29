//! Comparison values and the conversions that produce them.
//!
//! Every operand handed to an assertion is converted exactly once into a
//! [`Value`] through the [`Comparable`] trait. The resulting tagged variant is
//! what the comparison logic dispatches on; nothing downstream inspects the
//! original Rust type.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug, Display};

/// Coarse classification of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A boolean.
    Bool,
    /// A signed integer of any width.
    Int,
    /// An unsigned integer of any width.
    Uint,
    /// A floating-point number of any width.
    Float,
    /// A complex number.
    Complex,
    /// A single character.
    Char,
    /// A string.
    String,
    /// An ordered sequence (slice, array, vector).
    Sequence,
    /// A key-value mapping.
    Map,
    /// An unordered set.
    Set,
    /// A tuple.
    Tuple,
    /// The unit type.
    Unit,
    /// Any other structured type.
    Struct,
}

impl Kind {
    /// Returns whether values of this kind can take part in a comparison.
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::Map | Self::Set | Self::Tuple | Self::Unit | Self::Struct
        )
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Char => "char",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Set => "set",
            Self::Tuple => "tuple",
            Self::Unit => "unit",
            Self::Struct => "struct",
        };

        f.write_str(name)
    }
}

/// A complex number with real and imaginary parts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a complex number from its parts.
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Display> Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = self.im.to_string();
        if im.starts_with('-') {
            write!(f, "({}{im}i)", self.re)
        } else {
            write!(f, "({}+{im}i)", self.re)
        }
    }
}

/// A value prepared for comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An `i8`.
    I8(i8),
    /// An `i16`.
    I16(i16),
    /// An `i32`.
    I32(i32),
    /// An `i64`.
    I64(i64),
    /// An `i128`.
    I128(i128),
    /// An `isize`.
    Isize(isize),
    /// A `u8`.
    U8(u8),
    /// A `u16`.
    U16(u16),
    /// A `u32`.
    U32(u32),
    /// A `u64`.
    U64(u64),
    /// A `u128`.
    U128(u128),
    /// A `usize`.
    Usize(usize),
    /// An `f32`.
    F32(f32),
    /// An `f64`.
    F64(f64),
    /// A complex number with `f32` parts.
    Complex32(Complex<f32>),
    /// A complex number with `f64` parts.
    Complex64(Complex<f64>),
    /// A `char`.
    Char(char),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Seq {
        /// Type label of the sequence's elements.
        elem: String,
        /// The elements, in order; `None` marks an absent element.
        items: Vec<Option<Value>>,
    },
    /// A value whose kind cannot be compared.
    Unsupported {
        /// Kind of the value.
        kind: Kind,
        /// Rust type name of the value.
        type_name: String,
        /// Debug rendering of the value.
        repr: String,
    },
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::I8(_)
            | Self::I16(_)
            | Self::I32(_)
            | Self::I64(_)
            | Self::I128(_)
            | Self::Isize(_) => Kind::Int,
            Self::U8(_)
            | Self::U16(_)
            | Self::U32(_)
            | Self::U64(_)
            | Self::U128(_)
            | Self::Usize(_) => Kind::Uint,
            Self::F32(_) | Self::F64(_) => Kind::Float,
            Self::Complex32(_) | Self::Complex64(_) => Kind::Complex,
            Self::Char(_) => Kind::Char,
            Self::Str(_) => Kind::String,
            Self::Seq { .. } => Kind::Sequence,
            Self::Unsupported { kind, .. } => *kind,
        }
    }

    /// Returns the concrete type label of this value.
    ///
    /// Two values are only ever compared when their labels are identical.
    pub fn type_label(&self) -> Cow<'_, str> {
        match self {
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::I8(_) => Cow::Borrowed("i8"),
            Self::I16(_) => Cow::Borrowed("i16"),
            Self::I32(_) => Cow::Borrowed("i32"),
            Self::I64(_) => Cow::Borrowed("i64"),
            Self::I128(_) => Cow::Borrowed("i128"),
            Self::Isize(_) => Cow::Borrowed("isize"),
            Self::U8(_) => Cow::Borrowed("u8"),
            Self::U16(_) => Cow::Borrowed("u16"),
            Self::U32(_) => Cow::Borrowed("u32"),
            Self::U64(_) => Cow::Borrowed("u64"),
            Self::U128(_) => Cow::Borrowed("u128"),
            Self::Usize(_) => Cow::Borrowed("usize"),
            Self::F32(_) => Cow::Borrowed("f32"),
            Self::F64(_) => Cow::Borrowed("f64"),
            Self::Complex32(_) => Cow::Borrowed("Complex<f32>"),
            Self::Complex64(_) => Cow::Borrowed("Complex<f64>"),
            Self::Char(_) => Cow::Borrowed("char"),
            Self::Str(_) => Cow::Borrowed("String"),
            Self::Seq { elem, .. } => Cow::Owned(seq_label(elem)),
            Self::Unsupported { type_name, .. } => Cow::Borrowed(type_name.as_str()),
        }
    }

    /// Constructs an unsupported value of the given kind from anything debuggable.
    pub fn unsupported<T: Debug + ?Sized>(kind: Kind, value: &T) -> Self {
        Self::Unsupported {
            kind,
            type_name: std::any::type_name::<T>().to_owned(),
            repr: format!("{value:?}"),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::I128(v) => write!(f, "{v}"),
            Self::Isize(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::U128(v) => write!(f, "{v}"),
            Self::Usize(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::Complex32(v) => write!(f, "{v}"),
            Self::Complex64(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Seq { items, .. } => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match item {
                        Some(item) => write!(f, "{item}")?,
                        None => f.write_str("<nil>")?,
                    }
                }
                f.write_str("]")
            }
            Self::Unsupported { repr, .. } => f.write_str(repr),
        }
    }
}

fn seq_label(elem: &str) -> String {
    format!("[{elem}]")
}

/// Conversion of a Rust value into a [`Value`] for comparison.
///
/// Returning `None` from [`Comparable::to_value`] marks the operand as absent.
pub trait Comparable {
    /// Returns the type label shared by every value of this type.
    ///
    /// Sequences use this to label themselves even when empty.
    fn type_label() -> String;

    /// Converts this operand, or returns `None` if it is absent.
    fn to_value(&self) -> Option<Value>;
}

macro_rules! scalar_comparable {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Comparable for $ty {
                fn type_label() -> String {
                    String::from(stringify!($ty))
                }

                fn to_value(&self) -> Option<Value> {
                    Some(Value::$variant(*self))
                }
            }
        )*
    };
}

scalar_comparable! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    char => Char,
}

impl Comparable for Complex<f32> {
    fn type_label() -> String {
        String::from("Complex<f32>")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Complex32(*self))
    }
}

impl Comparable for Complex<f64> {
    fn type_label() -> String {
        String::from("Complex<f64>")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Complex64(*self))
    }
}

impl Comparable for str {
    fn type_label() -> String {
        String::from("String")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Str(self.to_owned()))
    }
}

impl Comparable for String {
    fn type_label() -> String {
        String::from("String")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Str(self.clone()))
    }
}

impl Comparable for Cow<'_, str> {
    fn type_label() -> String {
        String::from("String")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Str(self.to_string()))
    }
}

fn seq_value<'a, T, I>(items: I) -> Value
where
    T: Comparable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Seq {
        elem: T::type_label(),
        items: items.into_iter().map(|item| item.to_value()).collect(),
    }
}

impl<T: Comparable> Comparable for [T] {
    fn type_label() -> String {
        seq_label(&T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        Some(seq_value(self))
    }
}

impl<T: Comparable, const N: usize> Comparable for [T; N] {
    fn type_label() -> String {
        seq_label(&T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        Some(seq_value(self))
    }
}

impl<T: Comparable> Comparable for Vec<T> {
    fn type_label() -> String {
        seq_label(&T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        Some(seq_value(self))
    }
}

impl<T: Comparable> Comparable for VecDeque<T> {
    fn type_label() -> String {
        seq_label(&T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        Some(seq_value(self))
    }
}

impl<T: Comparable> Comparable for Option<T> {
    fn type_label() -> String {
        format!("Option<{}>", T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(Comparable::to_value)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn type_label() -> String {
        T::type_label()
    }

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    fn type_label() -> String {
        format!("Box<{}>", T::type_label())
    }

    fn to_value(&self) -> Option<Value> {
        (**self).to_value()
    }
}

/// The absent operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Nil;

impl Comparable for Nil {
    fn type_label() -> String {
        String::from("nil")
    }

    fn to_value(&self) -> Option<Value> {
        None
    }
}

/// Wraps an arbitrary value so it can be handed to an assertion.
///
/// The wrapped value is always classified as [`Kind::Struct`] and therefore
/// never compares equal to anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Opaque<T>(pub T);

impl<T: Debug> Comparable for Opaque<T> {
    fn type_label() -> String {
        std::any::type_name::<T>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Struct, &self.0))
    }
}

impl Comparable for () {
    fn type_label() -> String {
        String::from("()")
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Unit, self))
    }
}

impl<A: Debug, B: Debug> Comparable for (A, B) {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Tuple, self))
    }
}

impl<A: Debug, B: Debug, C: Debug> Comparable for (A, B, C) {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Tuple, self))
    }
}

impl<K: Debug, V: Debug, S> Comparable for HashMap<K, V, S> {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Map, self))
    }
}

impl<K: Debug, V: Debug> Comparable for BTreeMap<K, V> {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Map, self))
    }
}

impl<T: Debug, S> Comparable for HashSet<T, S> {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Set, self))
    }
}

impl<T: Debug> Comparable for BTreeSet<T> {
    fn type_label() -> String {
        std::any::type_name::<Self>().to_owned()
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::unsupported(Kind::Set, self))
    }
}
