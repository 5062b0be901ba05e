//! Cache Key Module
//!
//! Turns the argument list of a memoized call into a hashable key.
//!
//! Equality depends on the `typed` flag the cache was built with:
//! - untyped: numbers compare by value, so `1`, `1.0` and `true` share a key
//! - typed: every part also records its kind, so those three are distinct
//!
//! Text never compares equal to a number in either mode. Keyword arguments
//! are matched by name, independent of the order they were supplied in.

// == Argument Value ==
/// A single argument as seen by the key builder.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Kind tag recorded in typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ArgValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::Float(_) => ArgKind::Float,
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Text(_) => ArgKind::Text,
        }
    }

    // == Normalize ==
    /// Reduces the value to its comparable form.
    ///
    /// Integral floats and booleans collapse onto integers. Other floats keep
    /// their bit pattern, with `-0.0` folded onto `0.0`.
    fn atom(&self) -> KeyAtom {
        match self {
            ArgValue::Int(i) => KeyAtom::Int(*i),
            ArgValue::Bool(b) => KeyAtom::Int(i64::from(*b)),
            ArgValue::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    KeyAtom::Int(*f as i64)
                } else {
                    KeyAtom::Float(f.to_bits())
                }
            }
            ArgValue::Text(s) => KeyAtom::Text(s.clone()),
        }
    }

    fn to_part(&self, typed: bool) -> KeyPart {
        KeyPart {
            kind: typed.then(|| self.kind()),
            atom: self.atom(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyAtom {
    Int(i64),
    Float(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct KeyPart {
    kind: Option<ArgKind>,
    atom: KeyAtom,
}

// == Cache Key ==
/// Hashable identity of one call's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    positional: Vec<KeyPart>,
    named: Vec<(String, KeyPart)>,
}

impl CacheKey {
    /// Builds a key from positional and keyword arguments.
    pub fn new(positional: &[ArgValue], named: &[(String, ArgValue)], typed: bool) -> Self {
        let mut named: Vec<(String, KeyPart)> = named
            .iter()
            .map(|(name, value)| (name.clone(), value.to_part(typed)))
            .collect();
        named.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            positional: positional.iter().map(|v| v.to_part(typed)).collect(),
            named,
        }
    }

    /// Number of arguments (positional and named) in the key.
    pub fn arity(&self) -> usize {
        self.positional.len() + self.named.len()
    }
}

// == Conversion Traits ==
/// Converts a single argument into an [`ArgValue`].
pub trait ToArg {
    fn to_arg(&self) -> ArgValue;
}

/// Converts a whole argument list into a [`CacheKey`].
pub trait Keyable {
    fn cache_key(&self, typed: bool) -> CacheKey;
}

impl ToArg for ArgValue {
    fn to_arg(&self) -> ArgValue {
        self.clone()
    }
}

impl ToArg for str {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

impl ToArg for String {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Text(self.clone())
    }
}

impl ToArg for bool {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Bool(*self)
    }
}

impl ToArg for f64 {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Float(*self)
    }
}

impl ToArg for f32 {
    fn to_arg(&self) -> ArgValue {
        ArgValue::Float(f64::from(*self))
    }
}

macro_rules! int_to_arg {
    ($($t:ty),*) => {
        $(
            impl ToArg for $t {
                fn to_arg(&self) -> ArgValue {
                    ArgValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_to_arg!(i8, i16, i32, i64, u8, u16, u32);

impl<T: ToArg + ?Sized> ToArg for &T {
    fn to_arg(&self) -> ArgValue {
        (**self).to_arg()
    }
}

impl Keyable for () {
    fn cache_key(&self, typed: bool) -> CacheKey {
        CacheKey::new(&[], &[], typed)
    }
}

macro_rules! tuple_keyable {
    ($($name:ident),+) => {
        impl<$($name: ToArg),+> Keyable for ($($name,)+) {
            #[allow(non_snake_case)]
            fn cache_key(&self, typed: bool) -> CacheKey {
                let ($($name,)+) = self;
                CacheKey::new(&[$($name.to_arg()),+], &[], typed)
            }
        }
    };
}

tuple_keyable!(A);
tuple_keyable!(A, B);
tuple_keyable!(A, B, C);
tuple_keyable!(A, B, C, D);

// == Args Builder ==
/// Argument list with keyword arguments, for calls a tuple can't express.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<ArgValue>,
    pub named: Vec<(String, ArgValue)>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl ToArg) -> Self {
        self.positional.push(value.to_arg());
        self
    }

    /// Appends a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl ToArg) -> Self {
        self.named.push((name.into(), value.to_arg()));
        self
    }
}

impl Keyable for Args {
    fn cache_key(&self, typed: bool) -> CacheKey {
        CacheKey::new(&self.positional, &self.named, typed)
    }
}
