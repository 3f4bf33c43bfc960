// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "mention")]
#[command(about = "🔎 Find the mention that is being typed at the caret")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide the text as an argument, or use --stdin. The caret defaults to the end of the text.\nUSAGE 📓:\n  mention [\x1b[32mtext\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "text", help = "Text to scan for a mention.")]
    pub text: Option<String>,

    #[arg(
        long,
        conflicts_with = "text",
        help = "Read the text to scan from stdin, instead of an argument."
    )]
    pub stdin: bool,

    #[arg(
        long,
        value_name = "UTF16_OFFSET",
        help = "Caret position in UTF-16 code units. Defaults to the end of the text."
    )]
    pub caret: Option<usize>,

    #[command(flatten)]
    pub mention_options: MentionOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

/// These are layered on top of the config file, if one is given.
#[derive(Debug, Args)]
pub struct MentionOption {
    #[arg(
        long,
        short = 'c',
        value_name = "PATH",
        help = "JSON file w/ a mention config. The other options are applied on top of it."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "prefix",
        short = 'p',
        value_name = "PREFIX",
        help = "Trigger prefix, eg: @ or #. Repeat for more than one. Defaults to @."
    )]
    pub prefixes: Vec<String>,

    #[arg(
        long,
        short = 'd',
        value_name = "CHARS",
        help = "Global delimiter characters. Defaults to whitespace and newlines."
    )]
    pub delimiters: Option<String>,

    #[arg(
        long = "prefix-delimiters",
        value_name = "PREFIX=CHARS",
        value_parser = parse_prefix_delimiters,
        help = "Delimiter characters for one prefix, eg: '#= .'. Repeat for more than one."
    )]
    pub prefix_delimiters: Vec<(String, String)>,

    #[arg(
        long = "max-spaces",
        short = 's',
        value_name = "N",
        help = "Longest run of whitespace that is tolerated after the prefix."
    )]
    pub max_space_count_allowed: Option<usize>,

    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

/// Parse `PREFIX=CHARS`. Only the first `=` separates the two, so `==` means the
/// prefix `=` has no delimiters, and `#==` means the prefix `#` has the delimiter `=`.
///
/// # Errors
///
/// Returns an error if there is no `=`, or if the prefix is empty.
pub fn parse_prefix_delimiters(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some(("", _)) => Err(format!("Empty prefix in {arg:?}, expected PREFIX=CHARS")),
        Some((prefix, chars)) => Ok((prefix.to_string(), chars.to_string())),
        None => Err(format!("Missing '=' in {arg:?}, expected PREFIX=CHARS")),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("#= .", Some(("#", " .")); "prefix and chars")]
    #[test_case("@=", Some(("@", "")); "no chars")]
    #[test_case("#==", Some(("#", "=")); "equals as a delimiter")]
    #[test_case("=x", None; "empty prefix")]
    #[test_case("#", None; "missing equals")]
    fn test_parse_prefix_delimiters(arg: &str, expected: Option<(&str, &str)>) {
        let actual = parse_prefix_delimiters(arg).ok();
        let expected = expected.map(|(p, c)| (p.to_string(), c.to_string()));
        pretty_assertions::assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_cli_arg() {
        let cli_arg = CLIArg::try_parse_from([
            "mention",
            "hi @bo",
            "--caret",
            "4",
            "-p",
            "@",
            "-p",
            "#",
            "--prefix-delimiters",
            "#= .",
            "-s",
            "2",
            "--json",
            "-l",
        ])
        .unwrap();

        assert_eq!(cli_arg.text.as_deref(), Some("hi @bo"));
        assert_eq!(cli_arg.caret, Some(4));
        assert_eq!(cli_arg.mention_options.prefixes, vec!["@", "#"]);
        assert_eq!(
            cli_arg.mention_options.prefix_delimiters,
            vec![("#".to_string(), " .".to_string())]
        );
        assert_eq!(cli_arg.mention_options.max_space_count_allowed, Some(2));
        assert!(cli_arg.mention_options.json);
        assert!(cli_arg.global_options.enable_logging);
        assert!(!cli_arg.stdin);
    }

    #[test]
    fn test_stdin_conflicts_with_text() {
        assert!(CLIArg::try_parse_from(["mention", "hi", "--stdin"]).is_err());
    }
}
