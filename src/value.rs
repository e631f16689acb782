use alloc::string::String;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

use crate::Error;

#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub enum Type {
    Bool,
    Int,
    Long,
    Double,
    String,
}

impl Default for Type {
    fn default() -> Self {
        Type::String
    }
}

#[derive(Debug, PartialEq, Clone)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub enum Value {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
}

macro_rules! converters {
    ($x:ty, $into:ident) => {
        impl core::convert::From<$x> for Value {
            fn from(val: $x) -> Self {
                Value::$into(val)
            }
        }

        impl core::convert::TryInto<$x> for Value {
            type Error = Error;

            fn try_into(self) -> Result<$x, Error> {
                match self {
                    Value::$into(b) => Ok(b),
                    e => Err(Error::WrongValueType(e)),
                }
            }
        }

        impl<'a> core::convert::TryInto<&'a $x> for &'a Value {
            type Error = Error;

            fn try_into(self) -> Result<&'a $x, Error> {
                match self {
                    Value::$into(b) => Ok(b),
                    e => Err(Error::WrongValueType(e.clone())),
                }
            }
        }
    };
}

converters!(bool, Bool);
converters!(i32, Int);
converters!(i64, Long);
converters!(f64, Double);
converters!(String, String);

impl<'a> core::convert::TryInto<&'a str> for &'a Value {
    type Error = Error;

    fn try_into(self) -> Result<&'a str, Error> {
        match self {
            Value::String(b) => Ok(b),
            e => Err(Error::WrongValueType(e.clone())),
        }
    }
}

impl core::convert::From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(String::from(val))
    }
}

/// Lenient boolean reading of a flag value: only a literal `0` is false, so a bare `-flag`
/// (empty value) counts as set.
pub(crate) fn interpret_bool(val: &str) -> bool {
    val != "0"
}

/// Reads a value the way C's `atoi` does: optional leading whitespace and sign, then as many
/// decimal digits as are present. Anything unreadable is `0`, overflow saturates.
pub(crate) fn atoi64(val: &str) -> i64 {
    let val = val.trim_start();
    let (negative, digits) = match val.as_bytes().first() {
        Some(b'-') => (true, &val[1..]),
        Some(b'+') => (false, &val[1..]),
        _ => (false, val),
    };
    digits.bytes().take_while(u8::is_ascii_digit).fold(0i64, |acc, b| {
        let d = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    })
}

fn cast_bool(val: &str) -> Result<bool, Error> {
    match val {
        "" | "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::WrongCastType(String::from(val))),
    }
}

macro_rules! cast {
    ($val:ident, $x:ty) => {
        Value::from($val.trim().parse::<$x>().map_err(|_| Error::WrongCastType(String::from($val)))?)
    };
}

pub(crate) fn cast_type(t: &Type, val: &str) -> Result<Value, Error> {
    Ok(match t {
        Type::Bool => Value::from(cast_bool(val)?),
        Type::Int => cast!(val, i32),
        Type::Long => cast!(val, i64),
        Type::Double => cast!(val, f64),
        Type::String => Value::from(val),
    })
}
