#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(not(feature = "std"))]
mod std;

#[cfg(feature = "derive")]
use serde::{Deserialize, Serialize};

mod value;

use std::collections::{hash_map::Entry::Vacant, HashMap};
use std::iter::FromIterator;
use std::string::String;
use std::vec::Vec;

pub use crate::value::{Type, Value};
use crate::value::{atoi64, cast_type, interpret_bool};

#[cfg(feature = "debug")]
use log::debug;

#[cfg(not(feature = "debug"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

#[derive(PartialEq, Debug)]
pub enum Error {
    MissingArg(String),
    WrongValueType(Value),
    WrongCastType(String),
}

pub trait IntoStr {
    fn into_str(&self) -> &str;
}

impl IntoStr for &str {
    fn into_str(&self) -> &str {
        self
    }
}

impl IntoStr for String {
    fn into_str(&self) -> &str {
        self.as_str()
    }
}

impl IntoStr for &String {
    fn into_str(&self) -> &str {
        self.as_str()
    }
}

/// Table of start-up flags, keyed by canonical name (`-name`).
///
/// Built once from the raw argument tokens and then only read. Every lookup accepts `name`,
/// `-name` or `--name` for the same key.
#[derive(Debug, PartialEq, Clone, Default)]
#[cfg_attr(feature = "derive", derive(Serialize, Deserialize))]
pub struct ArgMap {
    args: HashMap<String, String>,
    // every literal value given for a flag, in order
    multi_args: HashMap<String, Vec<String>>,
    positional: Vec<String>,
}

#[derive(Default, Debug)]
struct Builder {
    args: HashMap<String, String>,
    multi_args: HashMap<String, Vec<String>>,
    positional: Vec<String>,
}

/// strips one or two leading dashes, `None` if there were none
fn strip_dashes(token: &str) -> Option<&str> {
    let rest = token.strip_prefix('-')?;
    Some(rest.strip_prefix('-').unwrap_or(rest))
}

fn canonical(bare: &str) -> String {
    let mut key = String::with_capacity(bare.len() + 1);
    key.push('-');
    key.push_str(bare);
    key
}

fn key_for(name: &str) -> String {
    canonical(strip_dashes(name).unwrap_or(name))
}

/// Splits `-name=value` into its bare name and value. Tokens without a dash aren't flags;
/// `-`, `--` and `-=x` all name the empty flag `-`.
fn split_flag(token: &str) -> Option<(&str, &str)> {
    let bare = strip_dashes(token)?;
    Some(match bare.find('=') {
        Some(i) => (&bare[..i], &bare[i + 1..]),
        None => (bare, ""),
    })
}

impl Builder {
    fn insert(&mut self, name: &str, value: &str) {
        let key = canonical(name);
        debug!("found flag {} = {:?}", key, value);
        self.multi_args.entry(key.clone()).or_insert_with(Vec::new).push(String::from(value));
        self.args.insert(key, String::from(value));
    }

    // -nofoo becomes -foo=0 (and -nofoo=0 becomes -foo=1), unless -foo was given directly.
    // Runs after every literal flag is in, so the outcome doesn't depend on token order.
    fn resolve_negations(&mut self) {
        let negations: Vec<(String, bool)> = self
            .args
            .iter()
            .filter_map(|(key, value)| {
                let positive = key.strip_prefix("-no").filter(|p| !p.is_empty())?;
                Some((canonical(positive), !interpret_bool(value)))
            })
            .collect();
        for (positive, enabled) in negations {
            if self.args.contains_key(&positive) {
                debug!("{} given directly, ignoring its negation", positive);
                continue;
            }
            debug!("negation sets {} = {}", positive, enabled);
            self.args.insert(positive, String::from(if enabled { "1" } else { "0" }));
        }
    }

    fn finish(mut self) -> ArgMap {
        self.resolve_negations();
        ArgMap {
            args: self.args,
            multi_args: self.multi_args,
            positional: self.positional,
        }
    }
}

impl ArgMap {
    /// Builds the table from tokens that don't include the program name.
    pub fn build<S: IntoStr, T: IntoIterator<Item = S>>(args: T) -> Self {
        debug!("building argument table");
        let mut builder = Builder::default();
        for arg in args {
            let arg = arg.into_str();
            match split_flag(arg) {
                Some((name, value)) => builder.insert(name, value),
                None => {
                    debug!("found positional arg {}", arg);
                    builder.positional.push(String::from(arg));
                }
            }
        }
        builder.finish()
    }

    /// Builds the table from a full argument vector, skipping the program name.
    pub fn parse<S: IntoStr, T: IntoIterator<Item = S>>(args: T) -> Self {
        Self::build(args.into_iter().skip(1))
    }

    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        Self::parse(std::env::args())
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.args.get(key_for(name).as_str()).map(String::as_str)
    }

    /// `false` only for a literal `0`; any other value, including none at all (`-flag`), is
    /// `true`. Falls back to `default` when the flag is absent.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.lookup(name).map_or(default, interpret_bool)
    }

    /// The value as given, `""` for a bare `-flag`, or `default` when absent.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.lookup(name).unwrap_or(default)
    }

    /// Reads the value as a decimal integer. A present but unreadable value is `0`, not
    /// `default`.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.lookup(name).map_or(default, atoi64)
    }

    /// Strict lookup for callers that want malformed values rejected. Absent flags are
    /// `Error::MissingArg`.
    pub fn get_typed(&self, name: &str, value_type: &Type) -> Result<Value, Error> {
        let val = self.lookup(name).ok_or_else(|| Error::MissingArg(key_for(name)))?;
        cast_type(value_type, val)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        match self.multi_args.get(key_for(name).as_str()) {
            Some(values) => values.as_slice(),
            None => &[],
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Sets `name` only if it wasn't given. Returns whether the value was set.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        match self.args.entry(key_for(name)) {
            Vacant(e) => {
                debug!("soft setting {} = {:?}", e.key(), value);
                e.insert(String::from(value));
                true
            }
            _ => false,
        }
    }

    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { "1" } else { "0" })
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.args.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<S: IntoStr> FromIterator<S> for ArgMap {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        ArgMap::build(iter)
    }
}
