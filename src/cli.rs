use std::path::PathBuf;

use clap::{arg, command, value_parser, ArgAction, Command};

pub(super) fn make_command() -> Command {
    command!()
        .max_term_width(120)
        .args([
            arg!(-t --template <PATH> "Path to the template file")
                .long_help(
                    "Path to the template file in MiniJinja syntax.\n\n\
                    \
                    The file is read and parsed once before any data is loaded.  Its base \
                    name is used as the template name in error messages.",
                )
                .required(true)
                .value_parser(value_parser!(PathBuf)),
            arg!(-d --data <PATH> "Path to a JSON data file")
                .long_help(
                    "Path to a JSON data file.\n\n\
                    \
                    The file must contain a JSON object.  Its top-level keys become \
                    template variables.  Values from --json and --set take precedence \
                    over keys from this file.",
                )
                .value_parser(value_parser!(PathBuf)),
            arg!(-i --json <JSON> "Inline JSON object with template variables")
                .long_help(
                    "Inline JSON object with template variables.\n\n\
                    \
                    The string must parse as a JSON object.  Its keys overwrite keys of \
                    the same name from the data file, and are in turn overwritten by \
                    --set.\n\n\
                    \
                    Example: tmpl -t greeting.txt -i '{\"name\": \"World\"}'",
                ),
            arg!(-s --set <KEYVAL> "Set a template variable (key=value)")
                .long_help(
                    "Sets a single template variable.  Can be supplied multiple times; \
                    later entries win over earlier ones and over both JSON sources.\n\n\
                    \
                    The value is interpreted as JSON when it parses as such, and as a \
                    plain string otherwise.\n\n\
                    \
                    Examples:\n\
                    -s name=Peter      a string\n\
                    -s count=42        a number\n\
                    -s active=true     a boolean\n\
                    -s tags='[1, 2]'   an array",
                )
                .action(ArgAction::Append),
            arg!(-o --output <PATH> "Path to the output file")
                .long_help(
                    "Path to the output file instead of stdout.\n\n\
                    \
                    The file is created or truncated and the rendered output is written \
                    to it directly.",
                )
                .value_parser(value_parser!(PathBuf)),
        ])
        .about("tmpl renders a MiniJinja template with data from JSON files, inline JSON and key=value overrides.")
        .after_help("For more information see the README.")
}
