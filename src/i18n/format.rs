// SPDX-License-Identifier: PMPL-1.0-or-later

//! printf-style substitution of positional arguments into templates.
//!
//! Supported verbs are `%s`, `%v` and `%d`, each consuming the next argument
//! and rendering it with `Display`, plus `%%` for a literal percent sign.
//!
//! A mismatch between template and arguments is a caller bug. It is written
//! into the output rather than hidden:
//!
//! | Situation              | Output                 |
//! |------------------------|------------------------|
//! | too few arguments      | `%!s(MISSING)`         |
//! | too many arguments     | `%!(EXTRA a, b)`       |
//! | unknown verb `x`       | `%!x(value)`           |
//! | `%` at end of template | `%!(NOVERB)`           |

use std::fmt::{self, Display, Write};

/// Substitute `args` into `template`.
///
/// # Examples
///
/// ```
/// use terem::i18n::format_template;
///
/// assert_eq!(format_template("Hello, %s!", &[&"World"]), "Hello, World!");
/// assert_eq!(format_template("%d%%", &[&42]), "42%");
/// assert_eq!(format_template("%s and %s", &[&"one"]), "one and %!s(MISSING)");
/// ```
pub fn format_template(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = args.iter();
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        match (verb, next.next()) {
            ('s' | 'v' | 'd', Some(arg)) => push_display(&mut out, *arg),
            (other, Some(arg)) => {
                push_marker_open(&mut out, other);
                push_display(&mut out, *arg);
                out.push(')');
            }
            (other, None) => {
                push_marker_open(&mut out, other);
                out.push_str("MISSING)");
            }
        }
    }

    let extra: Vec<&&dyn Display> = next.collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        for (idx, arg) in extra.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            push_display(&mut out, **arg);
        }
        out.push(')');
    }

    out
}

fn push_marker_open(out: &mut String, verb: char) {
    out.push_str("%!");
    out.push(verb);
    out.push('(');
}

fn push_display(out: &mut String, arg: &dyn Display) {
    // Writing into a String cannot fail unless the Display impl itself errors.
    if write!(out, "{}", arg).is_err() {
        out.push_str("%!(BADDISPLAY)");
    }
}

/// Wrapper rendering a pre-formatted argument list, for logging call sites.
pub struct Args<'a>(pub &'a [&'a dyn Display]);

impl fmt::Debug for Args<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for arg in self.0 {
            list.entry(&format_args!("{}", arg));
        }
        list.finish()
    }
}

/// Translate a key through a [`Localization`](crate::i18n::Localization),
/// substituting any trailing arguments.
///
/// ```
/// use terem::i18n::{Localization, MemoryResources};
/// use terem::tr;
///
/// let l10n = Localization::new(MemoryResources::new().with("ru.txt", "hi = Привет, %s!"));
/// assert_eq!(tr!(l10n, "hi", "мир"), "Привет, мир!");
/// assert_eq!(tr!(l10n, "absent"), "absent");
/// ```
#[macro_export]
macro_rules! tr {
    ($l10n:expr, $key:expr) => {
        $l10n.translate($key)
    };
    ($l10n:expr, $key:expr, $($arg:expr),+ $(,)?) => {
        $l10n.translate_with($key, &[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
