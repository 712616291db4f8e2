use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn qualifier_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qualifier").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_one_shot_normal_quote() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .args(["--command", "quote \"hello there\""])
        .assert()
        .success()
        .stdout("Quote { quote: hello there, mode: normal }\n");
}

#[test]
fn test_one_shot_piglatin_quote() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .args(["--command", "quote piglatin \"the cat sat\""])
        .assert()
        .success()
        .stdout("Quote { quote: \"Ethay atcay atsay\", mode: piglatin }\n");
}

#[test]
fn test_one_shot_error_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .args(["--command", "quote uwu \"hi chef\""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not modified"));
}

#[test]
fn test_prompt_adds_and_lists_in_order() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin("quote \"hello there\"\nquote uwu \"look at you\"\nquote list\nquit\n")
        .assert()
        .success()
        .stdout(
            "Quote { quote: hello there, mode: normal }\n\
             Quote { quote: wook at you, mode: uwu }\n\
             Quote { quote: hello there, mode: normal }\n\
             Quote { quote: wook at you, mode: uwu }\n",
        );
}

#[test]
fn test_prompt_stops_at_exit_command() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin("q\nquote \"never stored\"\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_exit_commands_are_case_sensitive() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin("QUIT\nquote \"still here\"\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("still here"))
        .stderr(predicate::str::contains("Missing arguments"));
}

#[test]
fn test_prompt_survives_errors() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin("remember \"this\"\nquote \"ok\" extra\nquote \"fine\"\n")
        .assert()
        .success()
        .stdout("Quote { quote: fine, mode: normal }\n")
        .stderr(
            predicate::str::contains("Invalid command")
                .and(predicate::str::contains("Invalid arguments")),
        );
}

#[test]
fn test_prompt_survives_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin(b"quote \"caf\xff\xfe\"\nquote \"after\"\nquote list\n".to_vec())
        .assert()
        .success()
        .stdout(
            "Quote { quote: caf\u{FFFD}\u{FFFD}, mode: normal }\n\
             Quote { quote: after, mode: normal }\n\
             Quote { quote: caf\u{FFFD}\u{FFFD}, mode: normal }\n\
             Quote { quote: after, mode: normal }\n",
        );
}

#[test]
fn test_duplicate_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .write_stdin("quote \"same\"\nquote \"same\"\nquote list\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Quote already exists")
                .and(predicate::str::ends_with("Quote { quote: same, mode: normal }\n")),
        );
}

#[test]
fn test_empty_list() {
    let temp = TempDir::new().unwrap();
    qualifier_cmd(&temp)
        .args(["--command", "quote list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes yet."));
}

#[test]
fn test_config_file_is_honored() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.json"),
        r#"{ "max_quote_length": 8, "list_format": "markdown", "exit_commands": ["bye"] }"#,
    )
    .unwrap();

    qualifier_cmd(&temp)
        .write_stdin("quote \"short\"\nquote \"far too long\"\nquote list\nbye\nquote \"later\"\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. `Quote { quote: short, mode: normal }`",
        ))
        .stdout(predicate::str::contains("later").not())
        .stderr(predicate::str::contains("too long"));
}

#[test]
fn test_invalid_config_fails_fast() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), "{ not json").unwrap();

    qualifier_cmd(&temp)
        .args(["--command", "quote list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
