use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};
use logging::VerbosityConfig;
use walk::{ParseWalkOrderError, WalkBuilder, WalkError, WalkOptions, WalkOrder};

/// Name used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "oc-walk";

const EXIT_OK: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_PARTIAL: i32 = 23;

const HELP_TEXT: &str = "\
oc-walk - list the contents of a directory tree

Usage: oc-walk [OPTIONS] ROOT

Options:
      --order ORDER       Traversal order: flat, sorted, pre-order or
                          siblings-first (default: pre-order).
      --max-depth N       Deepest level to list; 0 lists every level.
  -L, --follow-symlinks   Descend into symbolic links to directories.
      --detect-cycles     Never descend into the same directory twice.
      --relative          Print paths relative to ROOT.
  -v, --verbose           Increase diagnostic verbosity; may be repeated.
      --help              Show this help message and exit.
";

#[derive(Debug)]
struct ParsedArgs {
    show_help: bool,
    root: Option<PathBuf>,
    order: WalkOrder,
    options: WalkOptions,
    relative: bool,
    verbosity: u8,
}

fn parse_order(value: &str) -> Result<WalkOrder, ParseWalkOrderError> {
    value.parse()
}

fn clap_command() -> ClapCommand {
    ClapCommand::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("order")
                .long("order")
                .value_name("ORDER")
                .help("Traversal order.")
                .value_parser(parse_order)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .help("Deepest level to list; 0 lists every level.")
                .value_parser(value_parser!(usize))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("follow-symlinks")
                .short('L')
                .long("follow-symlinks")
                .help("Descend into symbolic links to directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("detect-cycles")
                .long("detect-cycles")
                .help("Never descend into the same directory twice.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("relative")
                .long("relative")
                .help("Print paths relative to ROOT.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase diagnostic verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let options = WalkOptions::new()
        .max_depth(matches.remove_one::<usize>("max-depth").unwrap_or(0))
        .follow_symlinks(matches.get_flag("follow-symlinks"))
        .detect_cycles(matches.get_flag("detect-cycles"));

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        root: matches.remove_one::<PathBuf>("root"),
        order: matches.remove_one::<WalkOrder>("order").unwrap_or_default(),
        options,
        relative: matches.get_flag("relative"),
        verbosity: matches.get_count("verbose"),
    })
}

/// Returns the usage text printed by `--help`.
#[must_use]
pub fn render_help() -> &'static str {
    HELP_TEXT
}

/// Parses `arguments`, lists the requested tree to `stdout` and returns the
/// process exit code.
///
/// Diagnostics are written to `stderr`. The first argument is the program
/// name, as with [`std::env::args_os`].
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => {
            let _ = writeln!(stderr, "{}", error.to_string().trim_end());
            let _ = writeln!(stderr, "Try '{PROGRAM_NAME} --help' for more information.");
            return EXIT_USAGE;
        }
    };

    if parsed.show_help {
        return match stdout.write_all(render_help().as_bytes()) {
            Ok(()) => EXIT_OK,
            Err(_) => EXIT_USAGE,
        };
    }

    let Some(root) = parsed.root.as_deref() else {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: missing ROOT operand");
        let _ = writeln!(stderr, "Try '{PROGRAM_NAME} --help' for more information.");
        return EXIT_USAGE;
    };

    // A subscriber may already be installed when `run` is called repeatedly
    // in one process; the existing one keeps serving.
    let _ = logging::init_tracing(VerbosityConfig::from_verbose_level(parsed.verbosity));

    list(root, &parsed, stdout, stderr)
}

fn list<Out, Err>(root: &Path, parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let walker = match WalkBuilder::new(root)
        .order(parsed.order)
        .options(parsed.options)
        .build()
    {
        Ok(walker) => walker,
        Err(error) => return report(stderr, &error),
    };

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let _ = stdout.flush();
                return report(stderr, &error);
            }
        };
        let shown = if parsed.relative {
            entry.path().strip_prefix(root).unwrap_or(entry.path())
        } else {
            entry.path()
        };
        if writeln!(stdout, "{}", shown.display()).is_err() {
            return EXIT_USAGE;
        }
    }

    match stdout.flush() {
        Ok(()) => EXIT_OK,
        Err(_) => EXIT_USAGE,
    }
}

fn report<Err: Write>(stderr: &mut Err, error: &WalkError) -> i32 {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
    EXIT_PARTIAL
}
