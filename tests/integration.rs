// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use std::fs;

use predicates::prelude::*;

fn files_under(dir: &std::path::Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn scaffold_in_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("botscaffold").unwrap();

    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("folder and file structure created"));

    let bot = dir.path().join("bot");
    for sub in ["handlers", "services", "models", "utils"] {
        assert!(bot.join(sub).is_dir());
    }
    assert_eq!(files_under(&bot), 13);
    assert_eq!(
        fs::read_to_string(bot.join("app.js")).unwrap(),
        "// app.js — main entry point\n"
    );
    assert_eq!(
        fs::read_to_string(bot.join("handlers/formHandler.js")).unwrap(),
        "// formHandler.js — created automatically\n"
    );
}

#[test]
fn rerun_preserves_edited_entry_point() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path().join("bot/app.js");

    assert_cmd::Command::cargo_bin("botscaffold")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success();

    fs::write(&app, "require('./handlers/messageHandler');\n").unwrap();

    assert_cmd::Command::cargo_bin("botscaffold")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("skip"));

    assert_eq!(
        fs::read_to_string(&app).unwrap(),
        "require('./handlers/messageHandler');\n"
    );
    assert_eq!(files_under(&dir.path().join("bot")), 13);
}

#[test]
fn blocked_top_level_folder_fails_without_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bot"), "not a directory").unwrap();

    assert_cmd::Command::cargo_bin("botscaffold")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("structure created").not())
        .stderr(predicates::str::contains("I/O error"));
}

#[test]
fn verbose_flag_is_accepted() {
    let dir = tempfile::tempdir().unwrap();

    assert_cmd::Command::cargo_bin("botscaffold")
        .unwrap()
        .current_dir(dir.path())
        .arg("--verbose")
        .assert()
        .success();
}
