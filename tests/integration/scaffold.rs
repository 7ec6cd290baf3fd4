use crate::helpers::prelude::*;
use crate::helpers::project_builder::CONFIG_FILE;

#[test]
fn it_scaffolds_with_readme_by_default() {
    let dir = tempdir().without_ide().build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("demo\n\nn\n")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("README.md created.")
                .and(predicates::str::contains("Project 'demo' created successfully!")),
        );

    assert_eq!(
        dir.files("demo"),
        vec![".gitignore", "CMakeLists.txt", "README.md", "src/main.cpp"]
    );
    for empty in ["demo/include", "demo/vendor", "demo/docs", "demo/res"] {
        assert!(dir.is_empty_dir(empty), "{empty} should be an empty directory");
    }
    assert!(dir.read("demo/src/main.cpp").contains("Hello from demo!"));
    assert!(dir.read("demo/CMakeLists.txt").contains("project(demo)"));
    assert!(dir.read("demo/README.md").starts_with("# demo"));
}

#[test]
fn it_skips_readme_when_declined() {
    let dir = tempdir().without_ide().build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("x\nn\nn\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("README.md created.").not());

    assert!(!dir.exists("x/README.md"));
    assert_eq!(
        dir.files("x"),
        vec![".gitignore", "CMakeLists.txt", "src/main.cpp"]
    );
    for sub_dir in ["x/src", "x/include", "x/vendor", "x/docs", "x/res"] {
        assert!(dir.join(sub_dir).is_dir());
    }
}

#[test]
fn it_reprompts_on_invalid_readme_answer() {
    let dir = tempdir().without_ide().build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("demo\nperhaps\nYES\nno\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Invalid input. Please enter 'y' for yes or 'n' for no.",
        ));

    assert!(dir.exists("demo/README.md"));
}

#[test]
fn it_writes_the_same_gitignore_for_every_project() {
    let dir = tempdir().without_ide().build();

    for name in ["first", "second project"] {
        binary()
            .arg_config(dir.join(CONFIG_FILE))
            .current_dir(dir.path())
            .write_stdin(format!("{name}\nn\nn\n"))
            .assert()
            .success();
    }

    assert_eq!(
        dir.read("first/.gitignore"),
        dir.read("second project/.gitignore")
    );
    assert!(dir.read("first/.gitignore").contains("CMakeFiles/"));
}

#[test]
fn it_creates_the_project_in_the_destination() {
    let dir = tempdir().without_ide().dir("workspace").build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .arg_destination("workspace")
        .current_dir(dir.path())
        .write_stdin("demo\nn\nn\n")
        .assert()
        .success();

    assert!(dir.exists("workspace/demo/CMakeLists.txt"));
    assert!(!dir.exists("demo"));
}

#[test]
fn it_fails_when_input_ends_early() {
    let dir = tempdir().without_ide().build();

    binary()
        .arg_config(dir.join(CONFIG_FILE))
        .current_dir(dir.path())
        .write_stdin("demo\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("input ended"));

    // generation does not roll back what was already written
    assert!(dir.exists("demo/src/main.cpp"));
    assert!(!dir.exists("demo/README.md"));
}
