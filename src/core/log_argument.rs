//! Typed log arguments and printf-style message formatting
//!
//! A log call takes a slice of [`LogArgument`]s. When the first argument is
//! text and more arguments follow, the text is a template: `%s`, `%d`, `%i`,
//! `%f`, `%j`, `%o`, `%O` and `%c` each consume one argument and `%%` is a
//! literal percent sign. Placeholders without a matching argument stay as
//! written, and leftover arguments are appended separated by spaces.
//!
//! ```
//! use console_enhancer::core::log_argument::{format_message, LogArgument};
//!
//! let msg = format_message(&["%s listening on %d".into(), "api".into(), 8080.into()]);
//! assert_eq!(msg, "api listening on 8080");
//! ```

use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;

/// Rendered form of an error passed as a log argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTrace {
    message: String,
    trace: String,
}

impl ErrorTrace {
    /// Render `err` and its chain of sources.
    pub fn capture<E: StdError + ?Sized>(err: &E) -> Self {
        let message = err.to_string();
        let mut trace = message.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push_str("\n    caused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        Self { message, trace }
    }

    pub fn new(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
        }
    }

    /// Top-level error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message followed by every cause, one per line.
    pub fn trace(&self) -> &str {
        &self.trace
    }
}

impl fmt::Display for ErrorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.trace)
    }
}

/// A single positional argument of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArgument {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Structured value, rendered as JSON
    Json(serde_json::Value),
    /// Value already rendered through its `Debug` impl
    Inspected(String),
    Error(ErrorTrace),
}

impl LogArgument {
    /// Wrap an error so it is rendered with its cause chain.
    pub fn error<E: StdError + ?Sized>(err: &E) -> Self {
        LogArgument::Error(ErrorTrace::capture(err))
    }

    /// Capture a value through its `Debug` representation.
    pub fn inspect<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        LogArgument::Inspected(format!("{:?}", value))
    }

    /// Capture a serializable value as JSON.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => LogArgument::Json(v),
            Err(e) => LogArgument::Text(format!("[Unserializable: {}]", e)),
        }
    }

    pub fn as_error(&self) -> Option<&ErrorTrace> {
        match self {
            LogArgument::Error(trace) => Some(trace),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.as_error().is_some()
    }

    /// Plain string conversion, used by `%s` and string concatenation.
    pub fn to_display_string(&self) -> String {
        match self {
            LogArgument::Text(s) | LogArgument::Inspected(s) => s.clone(),
            LogArgument::Integer(n) => n.to_string(),
            LogArgument::Float(n) => format_number(*n),
            LogArgument::Bool(b) => b.to_string(),
            LogArgument::Json(serde_json::Value::String(s)) => s.clone(),
            LogArgument::Json(v) => v.to_string(),
            LogArgument::Error(e) => e.message().to_string(),
        }
    }

    /// Inspection form, used by `%o`/`%O` and for non-text leftovers.
    pub fn to_inspect_string(&self) -> String {
        match self {
            LogArgument::Text(s) => format!("'{}'", s),
            LogArgument::Error(e) => e.trace().to_string(),
            other => other.to_display_string(),
        }
    }

    /// JSON form, used by `%j`.
    pub fn to_json_string(&self) -> String {
        let value = match self {
            LogArgument::Text(s) | LogArgument::Inspected(s) => serde_json::Value::from(s.as_str()),
            LogArgument::Integer(n) => serde_json::Value::from(*n),
            LogArgument::Float(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            LogArgument::Bool(b) => serde_json::Value::Bool(*b),
            LogArgument::Json(v) => v.clone(),
            LogArgument::Error(_) => serde_json::Value::Object(serde_json::Map::new()),
        };
        value.to_string()
    }

    /// Numeric coercion, used by `%d`, `%i` and `%f`. Non-numeric values
    /// become NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            LogArgument::Integer(n) => *n as f64,
            LogArgument::Float(n) => *n,
            LogArgument::Bool(b) => f64::from(u8::from(*b)),
            LogArgument::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            LogArgument::Json(v) => v.as_f64().unwrap_or(f64::NAN),
            LogArgument::Inspected(_) | LogArgument::Error(_) => f64::NAN,
        }
    }
}

impl From<&str> for LogArgument {
    fn from(s: &str) -> Self {
        LogArgument::Text(s.to_string())
    }
}

impl From<String> for LogArgument {
    fn from(s: String) -> Self {
        LogArgument::Text(s)
    }
}

impl From<&String> for LogArgument {
    fn from(s: &String) -> Self {
        LogArgument::Text(s.clone())
    }
}

impl From<char> for LogArgument {
    fn from(c: char) -> Self {
        LogArgument::Text(c.to_string())
    }
}

impl From<bool> for LogArgument {
    fn from(b: bool) -> Self {
        LogArgument::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogArgument {
                fn from(n: $t) -> Self {
                    LogArgument::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogArgument {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(v) => LogArgument::Integer(v),
                        Err(_) => LogArgument::Float(n as f64),
                    }
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize, isize, i128, u128);

impl From<f32> for LogArgument {
    fn from(n: f32) -> Self {
        LogArgument::Float(f64::from(n))
    }
}

impl From<f64> for LogArgument {
    fn from(n: f64) -> Self {
        LogArgument::Float(n)
    }
}

impl From<serde_json::Value> for LogArgument {
    fn from(v: serde_json::Value) -> Self {
        LogArgument::Json(v)
    }
}

impl From<ErrorTrace> for LogArgument {
    fn from(trace: ErrorTrace) -> Self {
        LogArgument::Error(trace)
    }
}

impl From<std::io::Error> for LogArgument {
    fn from(err: std::io::Error) -> Self {
        LogArgument::error(&err)
    }
}

/// Number rendering: integral values without a fractional part, IEEE
/// specials spelled out.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n.fract() == 0.0 && n.abs() < 9.0e15 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Build the message text of a log call.
pub fn format_message(args: &[LogArgument]) -> String {
    let Some((first, rest)) = args.split_first() else {
        return String::new();
    };

    let mut remaining = rest.iter().peekable();
    let mut out = match first {
        // A lone string is returned untouched, placeholders and all.
        LogArgument::Text(template) if rest.is_empty() => return template.clone(),
        LogArgument::Text(template) => interpolate(template, &mut remaining),
        other => other.to_inspect_string(),
    };

    append_leftovers(&mut out, remaining);
    out
}

/// Build the message text of an error-level call.
///
/// An error in first position is replaced by its trace, which then serves as
/// the template for the remaining arguments. An error in second
/// position collapses the call into `"<first>:\n<trace>"`; anything after
/// the error is dropped. Otherwise this is [`format_message`].
pub fn format_error_message(args: &[LogArgument]) -> String {
    match args {
        [LogArgument::Error(err), rest @ ..] => {
            if rest.is_empty() {
                return err.trace().to_string();
            }
            let mut remaining = rest.iter().peekable();
            let mut out = interpolate(err.trace(), &mut remaining);
            append_leftovers(&mut out, remaining);
            out
        }
        [first, LogArgument::Error(err), ..] => {
            format!("{}:\n{}", first.to_display_string(), err.trace())
        }
        _ => format_message(args),
    }
}

fn append_leftovers<'a>(out: &mut String, leftovers: impl Iterator<Item = &'a LogArgument>) {
    for arg in leftovers {
        out.push(' ');
        match arg {
            LogArgument::Text(s) => out.push_str(s),
            other => out.push_str(&other.to_inspect_string()),
        }
    }
}

fn interpolate<'a, I>(template: &str, args: &mut std::iter::Peekable<I>) -> String
where
    I: Iterator<Item = &'a LogArgument>,
{
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(conversion @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c')) => {
                match args.next() {
                    Some(arg) => {
                        chars.next();
                        render_placeholder(conversion, arg, &mut out);
                    }
                    // No argument left: keep the placeholder as written.
                    None => out.push('%'),
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn render_placeholder(conversion: char, arg: &LogArgument, out: &mut String) {
    match conversion {
        's' => out.push_str(&arg.to_display_string()),
        'd' | 'f' => out.push_str(&format_number(arg.to_number())),
        'i' => out.push_str(&format_number(arg.to_number().trunc())),
        'j' => out.push_str(&arg.to_json_string()),
        'o' | 'O' => out.push_str(&arg.to_inspect_string()),
        // %c consumes its argument and prints nothing
        _ => {}
    }
}
