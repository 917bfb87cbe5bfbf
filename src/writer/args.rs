use clap::Parser;
use std::ffi::OsString;

pub const USAGE: &str =
    "Please provide two cmd line arguments as shown below\n ./writer <path/to/filename> <string>\n\n";

#[derive(Parser, Debug)]
#[command(name = "writer")]
#[command(about = "Write a line of text to a file", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    // Collected without limits so the count check, usage text and exit status stay ours
    // rather than clap's.
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parses a full argument vector, program name first.
    ///
    /// Every user argument is taken verbatim. An escape is placed ahead of them, so a
    /// literal `--` or `-x` counts as a value like any other.
    pub fn from_argv<I>(argv: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut argv = argv.into_iter();
        let program = argv.next().unwrap_or_else(|| OsString::from("writer"));

        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::parse_from(escaped)
    }
}
