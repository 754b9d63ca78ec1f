use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use pretty_assertions::assert_eq;
use stack_defs::ConfigError;
use stack_generator::run_generation;
use stackgen::load_parameters;

fn fixture(name: &str) -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("stack.yml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

#[test]
fn test_generate_without_variables_file() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = write_config(
        temp_dir.path(),
        &format!(
            "execgroup: eg1\nresource_type: vpc\nstack_name: vpc_stack\ndest_dir: {}\n",
            temp_dir.path().display()
        ),
    );

    let params = load_parameters(Some(&config)).unwrap();
    let stack_dir = run_generation(&params).unwrap();
    assert_eq!(stack_dir, temp_dir.path().join("vpc_stack"));

    let script = fs::read_to_string(stack_dir.join("_main").join("run.py")).unwrap();
    assert!(!script.contains("add_required"));
    assert!(!script.contains("add_optional"));
    assert!(script.contains("resource_name=\"FIX ME\""));
    assert!(script.contains("# FIX ME: set resource_name before running this stack"));
    assert!(script.contains("resource_type=\"vpc\""));

    let readme = fs::read_to_string(stack_dir.join("_documentation").join("README.md")).unwrap();
    assert!(readme.starts_with("# vpc_stack\n"));
    assert!(!readme.contains("## Variables"));

    let metadata = fs::read_to_string(stack_dir.join("config0.yml")).unwrap();
    assert!(metadata.contains("Stack for creating vpc resources"));
}

#[test]
fn test_generate_with_variables_file() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let variables = fixture("vpc").join("variables.tf");
    let config = write_config(
        temp_dir.path(),
        &format!(
            r#"
tf_variables_file: {}
execgroup: config0-publish:::aws_networking::vpc
resource_type: vpc
resource_name: main-vpc
timeout: "1200"
stack_name: vpc_stack
dest_dir: {}
author: platform-team
stack_tags: "networking , aws"
"#,
            variables.display(),
            temp_dir.path().display()
        ),
    );

    let params = load_parameters(Some(&config)).unwrap();
    let stack_dir = run_generation(&params).unwrap();

    let script = fs::read_to_string(stack_dir.join("_main").join("run.py")).unwrap();
    let order: Vec<usize> = [
        "key=\"vpc_name\"",
        "key=\"aws_default_region\"",
        "key=\"cidr\"",
        "key=\"enable_nat\"",
        "key=\"azs\"",
        "key=\"tags\"",
        "add_execgroup(",
    ]
    .iter()
    .map(|needle| script.find(needle).expect(needle))
    .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    assert_eq!(script.matches("add_required(").count(), 2);
    assert_eq!(script.matches("add_optional(").count(), 4);
    assert!(script.contains("tags=\"tfvar,db,resource\""));
    assert!(script.contains("default=\"null\""));
    assert!(script.contains("default=False"));
    assert!(script.contains("default=['eu-west-1a', 'eu-west-1b']"));
    assert!(script.contains("self.stack.set_variable(\"timeout\", 1200)"));
    assert!(script.contains("resource_name=\"main-vpc\""));

    let readme = fs::read_to_string(stack_dir.join("_documentation").join("README.md")).unwrap();
    assert!(readme.contains("| vpc_name | str | Yes | Required | Name of the VPC |"));
    assert!(readme.contains("| cidr | str | No | \"\" |  |"));
    assert!(readme.contains("| tags | dict | Yes | Required |  |"));

    let metadata: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(stack_dir.join("config0.yml")).unwrap()).unwrap();
    assert_eq!(metadata["author"], serde_yaml::Value::from("platform-team"));
    assert_eq!(metadata["tags"], metadata["categories"]);
    assert_eq!(
        metadata["tags"],
        serde_yaml::Value::Sequence(vec!["networking".into(), "aws".into()])
    );
}

#[test]
fn test_missing_required_field() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = write_config(temp_dir.path(), "execgroup: eg1\nresource_type: vpc\n");
    assert!(matches!(
        load_parameters(Some(&config)),
        Err(ConfigError::MissingRequiredField("stack_name"))
    ));
}

#[test]
fn test_binary_exit_codes() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");

    let output = Command::new(env!("CARGO_BIN_EXE_stackgen"))
        .args(["--config", "does-not-exist.yml"])
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run stackgen");
    assert_eq!(output.status.code(), Some(1));

    let config = write_config(
        temp_dir.path(),
        "execgroup: eg1\nresource_type: vpc\nstack_name: vpc_stack\n",
    );
    let output = Command::new(env!("CARGO_BIN_EXE_stackgen"))
        .arg("--config")
        .arg(&config)
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run stackgen");
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Stack package written to"));
    assert!(temp_dir
        .path()
        .join("vpc_stack")
        .join("_main")
        .join("run.py")
        .exists());

    let variables = temp_dir.path().join("broken.tf");
    fs::write(&variables, "variable \"broken\" {\n").unwrap();
    let config = write_config(
        temp_dir.path(),
        &format!(
            "tf_variables_file: {}\nexecgroup: eg1\nresource_type: vpc\nstack_name: broken_stack\n",
            variables.display()
        ),
    );
    let output = Command::new(env!("CARGO_BIN_EXE_stackgen"))
        .arg("--config")
        .arg(&config)
        .current_dir(temp_dir.path())
        .output()
        .expect("failed to run stackgen");
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("broken_stack").exists());
}
