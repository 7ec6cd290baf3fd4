use crate::helpers::prelude::*;
use crate::helpers::project_builder::CONFIG_FILE;

#[test]
fn it_uses_the_configured_ide_name() {
    let dir = tempdir()
        .file(
            CONFIG_FILE,
            indoc! {r#"
                [ide]
                name = "CLion"
                candidates = ["/nonexistent/ccpg/clion"]
            "#},
        )
        .build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("demo\nn\nn\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Do you want to open the project in CLion? (y/n)",
        ));
}

#[test]
fn it_rejects_a_broken_config_before_generating() {
    let dir = tempdir().file(CONFIG_FILE, "[ide\ncandidates = ").build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("demo\nn\nn\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid configuration file"));

    assert!(!dir.exists("demo"));
}

#[test]
fn it_accepts_a_missing_config_file() {
    let dir = tempdir().build();

    binary()
        .arg_config(dir.join("missing.toml"))
        .current_dir(dir.path())
        .write_stdin("demo\nn\nn\n")
        .assert()
        .success();

    assert!(dir.exists("demo/src/main.cpp"));
}
