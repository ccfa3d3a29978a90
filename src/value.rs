use std::fmt;

/// One element of a key/value argument list.
///
/// Keys and values share this type; both are rendered through [`fmt::Display`]
/// when an embed is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Captures anything printable, rendering it right away.
    pub fn display(value: &impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Str(c.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Self::$variant(<$target>::from(n))
                }
            }
        )+
    };
}

impl_from_number!(Int(i64): i8, i16, i32, i64);
impl_from_number!(UInt(u64): u8, u16, u32, u64);
impl_from_number!(Float(f64): f32, f64);

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        // isize is at most 64 bits wide on every supported target
        Self::Int(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::UInt(n as u64)
    }
}

/// Builds a `Vec<Value>` from a mixed list of keys and values.
///
/// ```
/// use discord_log::{Value, kv};
///
/// let args = kv!["user", "alice", "attempts", 3, "locked", true];
/// assert_eq!(args.len(), 6);
/// assert_eq!(args[3], Value::Int(3));
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}
