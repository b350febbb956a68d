use clapper::{Matches, ParseError, Registry};

fn registry(with_root: bool) -> Registry {
    let mut registry = Registry::new();

    if with_root {
        let (root, _) = registry.register("");
        root.add_arg("output", "");
        root.add_flag("force", "f", true, "");
        root.add_flag("verbose", "v", true, "");
        root.add_flag("version", "V", false, "");
        root.add_flag("dir", "", false, "/var/users");
    }

    let (info, _) = registry.register("info");
    info.add_arg("category", "manager");
    info.add_arg("username", "");
    info.add_arg("subjects...", "");
    info.add_flag("verbose", "v", true, "");
    info.add_flag("version", "V", false, "1.0.1");
    info.add_flag("output", "o", false, "./");
    info.add_flag("no-clean", "", true, "");

    registry.register("ghost");
    registry
}

fn assert_info(matches: &Matches, expected: &[(&str, &str)]) {
    assert_eq!(matches.name(), "info");
    for (name, value) in expected {
        let actual = matches.arg(name).or_else(|| matches.flag(name));
        assert_eq!(actual, Some(*value), "value of '{}'", name);
    }
}

#[test]
fn empty_root_command() {
    let registry = registry(true);
    let matches = registry.parse::<&str>(&[]).unwrap();

    assert_eq!(matches.name(), "");
    assert_eq!(matches.arg("output"), Some(""));
    for flag in ["force", "verbose", "version", "dir"] {
        assert_eq!(matches.flag(flag), Some(""), "flag '{}'", flag);
    }

    let root = matches.command();
    assert_eq!(root.flag("force").unwrap().default, "false");
    assert_eq!(root.flag("dir").unwrap().default, "/var/users");
}

#[test]
fn unregistered_root_command() {
    let registry = registry(false);
    let result = registry.parse::<&str>(&[]);
    assert_eq!(result.unwrap_err(), ParseError::UnknownCommand(String::new()));
}

#[test]
fn unknown_command_when_root_takes_no_args() {
    let mut registry = registry(false);
    registry.register("");
    let result = registry.parse(&["userinfo", "-v"]);
    assert_eq!(
        result.unwrap_err(),
        ParseError::UnknownCommand("userinfo".to_string())
    );
}

#[test]
fn unsupported_flags() {
    let registry = registry(true);
    let cases = [
        ("---version", vec!["---version"]),
        ("---v", vec!["---v=1.0.0"]),
        ("-version", vec!["-version"]),
    ];

    for (flag, tokens) in cases {
        let result = registry.parse(&tokens[..]);
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnsupportedFlag(flag.to_string()),
            "tokens {:?}",
            tokens
        );
    }
}

#[test]
fn unregistered_flags() {
    let registry = registry(true);
    let cases = [
        ("-d", ["-V", "1.0.1", "-v", "--force", "-d", "./sub/dir"]),
        ("--m", ["-V", "1.0.1", "-v", "--force", "--m", "./sub/dir"]),
        (
            "--directory",
            ["-V", "1.0.1", "-v", "--force", "--directory", "./sub/dir"],
        ),
    ];

    for (flag, tokens) in cases {
        let result = registry.parse(&tokens);
        assert_eq!(result.unwrap_err(), ParseError::UnknownFlag(flag.to_string()));
    }
}

#[test]
fn root_command_with_options() {
    let registry = registry(true);
    let cases: [&[&str]; 4] = [
        &["userinfo", "-V", "1.0.1", "-v", "--force", "--dir", "./sub/dir"],
        &["-V", "1.0.1", "--verbose", "--force", "userinfo", "--dir", "./sub/dir"],
        &["-V", "1.0.1", "-v", "--force", "--dir", "./sub/dir", "userinfo"],
        &["--version", "1.0.1", "--verbose", "--force", "--dir", "./sub/dir", "userinfo"],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_eq!(matches.name(), "");
        assert_eq!(matches.arg("output"), Some("userinfo"));
        assert_eq!(matches.flag("force"), Some("true"));
        assert_eq!(matches.flag("verbose"), Some("true"));
        assert_eq!(matches.flag("version"), Some("1.0.1"));
        assert_eq!(matches.flag("dir"), Some("./sub/dir"));
    }
}

#[test]
fn sub_command_with_options() {
    let registry = registry(true);
    let cases: [&[&str]; 2] = [
        &["info", "student", "-V", "-v", "--output", "./opt/dir"],
        &["info", "student", "--version", "--output", "./opt/dir", "--verbose"],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_info(
            &matches,
            &[
                ("category", "student"),
                ("username", ""),
                ("subjects", ""),
                ("version", ""),
                ("output", "./opt/dir"),
                ("verbose", "true"),
                ("clean", ""),
            ],
        );
    }
}

#[test]
fn sub_command_with_arguments() {
    let registry = registry(true);
    let cases: [&[&str]; 2] = [
        &["info", "-v", "student", "-V", "2.0.0", "thatisuday"],
        &["info", "student", "-v", "thatisuday", "--version", "2.0.0"],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_info(
            &matches,
            &[
                ("category", "student"),
                ("username", "thatisuday"),
                ("subjects", ""),
                ("version", "2.0.0"),
                ("output", ""),
                ("verbose", "true"),
            ],
        );
    }
}

#[test]
fn inverted_flag_values() {
    let registry = registry(true);
    let cases: [&[&str]; 2] = [
        &["info", "student", "-V", "-v", "--output", "./opt/dir", "--no-clean"],
        &["info", "student", "--version", "--no-clean", "--output", "./opt/dir", "--verbose"],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_info(
            &matches,
            &[
                ("category", "student"),
                ("username", ""),
                ("subjects", ""),
                ("version", ""),
                ("output", "./opt/dir"),
                ("verbose", "true"),
                ("clean", "false"),
            ],
        );
        assert_eq!(matches.command().flag("clean").unwrap().default, "true");
    }
}

#[test]
fn inverted_flag_without_prefix_is_unknown() {
    let registry = registry(true);
    let cases: [(&str, &[&str]); 2] = [
        ("--clean", &["info", "student", "-V", "-v", "--output", "./opt/dir", "--clean"]),
        (
            "--no-dump",
            &["info", "student", "--version", "--no-dump", "--output", "./opt/dir", "--verbose"],
        ),
    ];

    for (flag, tokens) in cases {
        let result = registry.parse(tokens);
        assert_eq!(result.unwrap_err(), ParseError::UnknownFlag(flag.to_string()));
    }
}

#[test]
fn flag_assignment_syntax() {
    let registry = registry(true);
    let cases: [&[&str]; 2] = [
        &["info", "student", "-v", "--version=2.0.0", "thatisuday"],
        &["info", "student", "thatisuday", "-v", "-V=2.0.0"],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_info(
            &matches,
            &[
                ("category", "student"),
                ("username", "thatisuday"),
                ("subjects", ""),
                ("version", "2.0.0"),
                ("output", ""),
                ("verbose", "true"),
            ],
        );
    }
}

#[test]
fn variadic_argument_values() {
    let registry = registry(true);
    let cases: [&[&str]; 2] = [
        &[
            "info", "student", "thatisuday", "-V", "-v", "--output", "./opt/dir", "--no-clean",
            "math", "science", "physics",
        ],
        &[
            "info", "student", "--version", "--no-clean", "thatisuday", "--output", "./opt/dir",
            "math", "science", "--verbose", "physics",
        ],
    ];

    for tokens in cases {
        let matches = registry.parse(tokens).unwrap();
        assert_info(
            &matches,
            &[
                ("category", "student"),
                ("username", "thatisuday"),
                ("subjects", "math,science,physics"),
                ("version", ""),
                ("output", "./opt/dir"),
                ("verbose", "true"),
                ("clean", "false"),
            ],
        );
        assert_eq!(
            matches.variadic_values("subjects"),
            vec!["math", "science", "physics"]
        );
    }
}

#[test]
fn repeated_parses_are_independent() {
    let registry = registry(true);
    let first = registry
        .parse(&["info", "student", "thatisuday", "math"])
        .unwrap();
    let second = registry.parse(&["info", "manager", "-v"]).unwrap();

    assert_eq!(first.arg("subjects"), Some("math"));
    assert_eq!(second.arg("category"), Some("manager"));
    assert_eq!(second.arg("username"), Some(""));
    assert_eq!(second.arg("subjects"), Some(""));
    assert_eq!(first.flag("verbose"), Some(""));
}

#[test]
fn ghost_command_has_no_schema() {
    let registry = registry(true);
    let matches = registry.parse(&["ghost", "anything"]).unwrap();
    assert_eq!(matches.name(), "ghost");
    assert_eq!(matches.args().count(), 0);

    let result = registry.parse(&["ghost", "-v"]);
    assert_eq!(result.unwrap_err(), ParseError::UnknownFlag("-v".to_string()));
}
