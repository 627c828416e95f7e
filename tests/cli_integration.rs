use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn shelf(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("SHELF_DATA")
        .env_remove("RUST_LOG")
        .env("SHELF_CONFIG_DIR", config_dir)
        .arg("--no-color");
    cmd
}

fn write_milk_and_bread(dir: &Path) {
    fs::write(
        dir.join("users.json"),
        r#"[{"id":1,"name":"Max","sex":"m"},{"id":2,"name":"Anna","sex":"f"}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("categories.json"),
        r#"[{"id":1,"title":"Dairy","icon":"🍺","ownerId":1},{"id":2,"title":"Bakery","icon":"🍞","ownerId":2}]"#,
    )
    .unwrap();
    fs::write(
        dir.join("products.json"),
        r#"[{"id":1,"name":"Milk","categoryId":1},{"id":2,"name":"Bread","categoryId":2}]"#,
    )
    .unwrap();
}

#[test]
fn test_default_lists_sample_catalog() {
    let cfg = tempfile::tempdir().unwrap();
    shelf(cfg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Categories"))
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Laptop"));
}

#[test]
fn test_list_by_owner_from_data_dir() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_milk_and_bread(data.path());

    shelf(cfg.path())
        .arg("--data-dir")
        .arg(data.path())
        .args(["list", "--owner", "Max"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("[Max]"))
        .stdout(predicate::str::contains("Bread").not());
}

#[test]
fn test_query_is_case_insensitive() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_milk_and_bread(data.path());

    shelf(cfg.path())
        .env("SHELF_DATA", data.path())
        .args(["list", "--query", "BR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bread"))
        .stdout(predicate::str::contains("Milk").not());
}

#[test]
fn test_unknown_owner_prints_no_match_message() {
    let cfg = tempfile::tempdir().unwrap();
    shelf(cfg.path())
        .args(["list", "--owner", "NonexistentUser"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No products matching selected criteria",
        ))
        .stdout(predicate::str::contains("No owner named 'NonexistentUser'"));
}

#[test]
fn test_owners_and_categories() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_milk_and_bread(data.path());

    shelf(cfg.path())
        .arg("--data-dir")
        .arg(data.path())
        .arg("owners")
        .assert()
        .success()
        .stdout("* All\n  Max\n  Anna\n");

    shelf(cfg.path())
        .arg("--data-dir")
        .arg(data.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("🍺 Dairy\n🍞 Bakery\n");
}

#[test]
fn test_browse_reads_events_from_stdin() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    write_milk_and_bread(data.path());

    let output = shelf(cfg.path())
        .arg("--data-dir")
        .arg(data.path())
        .arg("browse")
        .write_stdin("owner Max\nall\nquery br\nreset\nquit\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let pages: Vec<&str> = stdout.split("Product Categories").skip(1).collect();
    assert_eq!(pages.len(), 5);
    assert!(pages[1].contains("Milk") && !pages[1].contains("Bread"));
    assert!(pages[3].contains("Bread") && !pages[3].contains("Milk"));
    assert!(pages[4].contains("Bread") && pages[4].contains("Milk"));
}

#[test]
fn test_missing_data_dir_fails() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    shelf(cfg.path())
        .arg("--data-dir")
        .arg(data.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("users.json"));
}

#[test]
fn test_config_file_supplies_data_dir() {
    let cfg = tempfile::tempdir().unwrap();
    let data = cfg.path().join("records");
    fs::create_dir_all(&data).unwrap();
    write_milk_and_bread(&data);
    fs::write(cfg.path().join("config.json"), r#"{"data_dir":"records"}"#).unwrap();

    shelf(cfg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Milk"))
        .stdout(predicate::str::contains("Laptop").not());
}

#[test]
fn test_init_writes_catalog_used_by_later_runs() {
    let cfg = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();
    let target = data.path().join("catalog");

    shelf(cfg.path())
        .arg("init")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote sample catalog"));
    assert!(target.join("products.json").exists());
    assert!(cfg.path().join("config.json").exists());

    // Later runs read the written directory, so edits there show up.
    fs::write(
        target.join("products.json"),
        r#"[{"id":1,"name":"Kefir","categoryId":2}]"#,
    )
    .unwrap();
    shelf(cfg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Kefir"))
        .stdout(predicate::str::contains("Laptop").not());

    shelf(cfg.path())
        .arg("init")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
