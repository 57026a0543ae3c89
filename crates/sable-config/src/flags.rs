//! Compile-command argument edits.
//!
//! A fragment's compile-flags block declares flags to append and flags to
//! strip. Compilation turns the block into a [`FlagsEdit`]: one immutable,
//! reusable operation that rewrites the argument vector of a single compile
//! command. The same edit is applied to every file the fragment matched.
//!
//! Stripping is by flag name, not by literal token. Users write whichever
//! spelling they remember (`-I`, `--include-directory`,
//! `--include-directory=`), and the command being rewritten may use another
//! spelling again, with the value glued on or in the next argument. A small
//! built-in table maps the common driver flags to all of their spellings and
//! value shapes so that, for example, removing `--include-directory=` also
//! deletes a separate `-I bar/` pair. Flags outside the table are stripped
//! literally.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::trace;

/// How a driver flag carries its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgStyle {
    /// No value (`-fsyntax-only`).
    Flag,
    /// Value glued to the spelling (`-Ifoo`, `--include-directory=foo`).
    Joined,
    /// Value in the following argument (`--include-directory foo`).
    Separate,
    /// Either glued or in the following argument (`-I`).
    JoinedOrSeparate,
}

/// All spellings of one driver flag, each with its value shape.
struct FlagSpellings {
    spellings: &'static [(&'static str, ArgStyle)],
}

/// The driver flags stripping understands beyond literal matching.
///
/// Include paths, macros, language/standard selection, output, and warning
/// selection cover what users actually remove in configuration; a full
/// driver-option database is out of scope.
static DRIVER_FLAGS: &[FlagSpellings] = &[
    FlagSpellings {
        spellings: &[
            ("-I", ArgStyle::JoinedOrSeparate),
            ("--include-directory=", ArgStyle::Joined),
            ("--include-directory", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[("-isystem", ArgStyle::JoinedOrSeparate)],
    },
    FlagSpellings {
        spellings: &[("-iquote", ArgStyle::JoinedOrSeparate)],
    },
    FlagSpellings {
        spellings: &[
            ("-D", ArgStyle::JoinedOrSeparate),
            ("--define-macro=", ArgStyle::Joined),
            ("--define-macro", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[
            ("-U", ArgStyle::JoinedOrSeparate),
            ("--undefine-macro=", ArgStyle::Joined),
            ("--undefine-macro", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[
            ("-include", ArgStyle::Separate),
            ("--include=", ArgStyle::Joined),
            ("--include", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[
            ("-std=", ArgStyle::Joined),
            ("--std=", ArgStyle::Joined),
            ("--std", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[
            ("-x", ArgStyle::JoinedOrSeparate),
            ("--language=", ArgStyle::Joined),
            ("--language", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[
            ("-o", ArgStyle::JoinedOrSeparate),
            ("--output=", ArgStyle::Joined),
            ("--output", ArgStyle::Separate),
        ],
    },
    FlagSpellings {
        spellings: &[("-c", ArgStyle::Flag), ("--compile", ArgStyle::Flag)],
    },
    // -W selects whole warning families; removing it strips every -W<...>.
    FlagSpellings {
        spellings: &[("-W", ArgStyle::Joined)],
    },
];

/// Spelling (modulo one trailing `=`) to table entry.
static SPELLING_INDEX: Lazy<HashMap<&'static str, &'static FlagSpellings>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for flag in DRIVER_FLAGS {
        for &(spelling, _) in flag.spellings {
            index.insert(spelling.strip_suffix('=').unwrap_or(spelling), flag);
        }
    }
    index
});

/// One compiled remove matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StripRule {
    /// A known driver-flag spelling.
    Spelling {
        text: &'static str,
        style: ArgStyle,
    },
    /// A verbatim token from the remove list.
    Exact(String),
    /// A verbatim `=`-joined form: matches `<text><anything>`.
    Prefix(String),
}

impl StripRule {
    /// How many argv slots this rule consumes starting at `arg`.
    fn matched_len(&self, arg: &str) -> Option<usize> {
        match self {
            StripRule::Spelling { text, style } => match style {
                ArgStyle::Flag => (arg == *text).then_some(1),
                ArgStyle::Joined => arg.starts_with(text).then_some(1),
                ArgStyle::Separate => (arg == *text).then_some(2),
                ArgStyle::JoinedOrSeparate => {
                    if arg == *text {
                        Some(2)
                    } else {
                        arg.starts_with(text).then_some(1)
                    }
                }
            },
            StripRule::Exact(text) => (arg == text).then_some(1),
            StripRule::Prefix(text) => arg.starts_with(text.as_str()).then_some(1),
        }
    }
}

/// Expand one remove string into strip rules.
///
/// A string naming any spelling of a table entry installs rules for all of
/// that entry's spellings. Anything else strips literally: the exact token,
/// plus its `=`-joined form.
fn rules_for(remove: &str) -> Vec<StripRule> {
    let canonical = remove.strip_suffix('=').unwrap_or(remove);
    if let Some(flag) = SPELLING_INDEX.get(canonical) {
        return flag
            .spellings
            .iter()
            .map(|&(text, style)| StripRule::Spelling { text, style })
            .collect();
    }

    trace!(remove, "flag not in driver table, stripping literally");
    if remove.ends_with('=') {
        vec![StripRule::Prefix(remove.to_string())]
    } else {
        vec![
            StripRule::Exact(remove.to_string()),
            StripRule::Prefix(format!("{remove}=")),
        ]
    }
}

/// One reusable rewrite of a compile command's argument vector.
///
/// Captures a fragment's add and remove lists at build time; immutable
/// afterwards. Applying runs the remove phase first and then appends, so a
/// fragment can replace a flag with its own setting in a single edit.
#[derive(Debug, Clone)]
pub struct FlagsEdit {
    strip_rules: Vec<StripRule>,
    add: Vec<String>,
}

impl FlagsEdit {
    /// Build an edit from a fragment's add and remove lists.
    ///
    /// Any strings are acceptable; nothing is validated here.
    pub fn new(add: Vec<String>, remove: Vec<String>) -> Self {
        let strip_rules = remove.iter().flat_map(|r| rules_for(r)).collect();
        Self { strip_rules, add }
    }

    /// True when applying would leave every argument vector unchanged.
    pub fn is_noop(&self) -> bool {
        self.strip_rules.is_empty() && self.add.is_empty()
    }

    /// Rewrite one compile command's arguments in place.
    ///
    /// Matched arguments (and their separate values) are deleted with the
    /// relative order of survivors preserved; added flags land at the tail in
    /// declared order. An edit that matches nothing is a no-op.
    pub fn apply(&self, argv: &mut Vec<String>) {
        if !self.strip_rules.is_empty() {
            let mut kept = Vec::with_capacity(argv.len());
            let mut args = std::mem::take(argv).into_iter();
            while let Some(arg) = args.next() {
                match self.matched_len(&arg) {
                    Some(len) => {
                        // Also consume the flag's separate value, if any.
                        for _ in 1..len {
                            args.next();
                        }
                    }
                    None => kept.push(arg),
                }
            }
            *argv = kept;
        }
        argv.extend(self.add.iter().cloned());
    }

    fn matched_len(&self, arg: &str) -> Option<usize> {
        self.strip_rules
            .iter()
            .find_map(|rule| rule.matched_len(arg))
    }
}
