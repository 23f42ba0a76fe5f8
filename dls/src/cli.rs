use std::ffi::OsString;
use std::path::PathBuf;

use dirlist::{ListOptions, OutputMode, SortOrder};

use crate::error::{Error, Result};

/// Short flags that may be bundled behind a single `-`, as in `-laR`.
pub const BUNDLED_FLAGS: [char; 5] = ['l', 'R', 'a', 'h', 't'];

/// Rewrites the raw argument vector into something clap understands.
///
/// `-size` becomes `--size`, a bare `-` is dropped, and every other short
/// bundle is checked against `BUNDLED_FLAGS` so that an unknown letter is
/// reported as `Unknown option: <c>`. Anything after `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut options_ended = false;

    for arg in args {
        if options_ended {
            normalized.push(arg);
            continue;
        }
        let text = arg.to_string_lossy().into_owned();
        match text.as_str() {
            "--" => {
                options_ended = true;
                normalized.push(arg);
            }
            "-size" => normalized.push(OsString::from("--size")),
            "-" => {}
            long if long.starts_with("--") => normalized.push(arg),
            bundle if bundle.starts_with('-') => {
                if let Some(unknown) = bundle.chars().skip(1).find(|c| !BUNDLED_FLAGS.contains(c)) {
                    return Err(Error::UnknownOption(unknown));
                }
                normalized.push(arg);
            }
            _ => normalized.push(arg),
        }
    }
    Ok(normalized)
}

pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("dls")
        .version(clap::crate_version!())
        .about("List directory contents")
        .arg(
            clap::Arg::with_name("long")
                .short("l")
                .multiple(true)
                .help("Use the long listing format"),
        )
        .arg(
            clap::Arg::with_name("recursive")
                .short("R")
                .multiple(true)
                .help("List subdirectories recursively (hidden entries are shown at the top level only)"),
        )
        .arg(
            clap::Arg::with_name("all")
                .short("a")
                .multiple(true)
                .help("Do not ignore entries starting with '.'"),
        )
        .arg(
            clap::Arg::with_name("human-readable")
                .short("h")
                .multiple(true)
                .help("With -l, print sizes like 1.0K, 2.5M, 1.0G"),
        )
        .arg(
            clap::Arg::with_name("time")
                .short("t")
                .multiple(true)
                .help("Sort by modification time, newest first"),
        )
        .arg(
            clap::Arg::from_usage("--size 'Print each entry name with its size in bytes (may be spelled -size)'")
                .multiple(true),
        )
        .arg(clap::Arg::from_usage("--debug 'Enable debug output'"))
        .arg(clap::Arg::from_usage("[path]... 'Directory to list (default: current directory)'"))
}

pub fn parse_flags<'a>() -> Result<clap::ArgMatches<'a>> {
    parse_flags_from(std::env::args_os())
}

pub fn parse_flags_from<'a, I, T>(args: I) -> Result<clap::ArgMatches<'a>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = normalize_args(args)?;
    app().get_matches_from_safe(args).map_err(|err| match err.kind {
        clap::ErrorKind::HelpDisplayed | clap::ErrorKind::VersionDisplayed => err.exit(),
        _ => Error::CliInputError(err.message),
    })
}

/// What to list and how, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub options: ListOptions,
}

impl Invocation {
    pub fn from_matches(matches: &clap::ArgMatches) -> Invocation {
        let recursive = matches.is_present("recursive");
        let options = ListOptions {
            mode: OutputMode::resolve(matches.is_present("long"), matches.is_present("size")),
            sort: if matches.is_present("time") {
                SortOrder::Time
            } else {
                SortOrder::Name
            },
            show_hidden: recursive || matches.is_present("all"),
            recursive,
            human_readable: matches.is_present("human-readable"),
        };
        // The last positional wins.
        let path = matches
            .values_of_os("path")
            .and_then(|values| values.last())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        Invocation { path, options }
    }
}
