use std::process::Command;

use tempfile::tempdir;

fn make_dataset() -> Command {
    Command::new(env!("CARGO_BIN_EXE_make-dataset"))
}

#[test]
fn no_source_flag_exits_cleanly_without_output() {
    let dir = tempdir().unwrap();
    let out = make_dataset()
        .current_dir(dir.path())
        .args(["-o", "never.bin"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Set the source option!"), "stderr: {stderr}");
    assert!(!dir.path().join("never.bin").exists());
}

#[test]
fn converts_and_prints_summary() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), "1,2\n3,4\n").unwrap();

    let out = make_dataset()
        .current_dir(dir.path())
        .args(["--source=data.csv", "--json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["bytes"], 32);
    assert_eq!(std::fs::read(dir.path().join("data.bin")).unwrap().len(), 32);
}

#[test]
fn bad_token_fails_the_process() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("data.csv"), "1,x\n").unwrap();

    let out = make_dataset()
        .current_dir(dir.path())
        .args(["-s", "data.csv"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("'x' is not a number"));
    assert!(!dir.path().join("data.bin").exists());
}

#[test]
fn dump_prints_values() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("v.bin");
    let bytes: Vec<u8> = [1.5f64, -2.0].iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(&bin, bytes).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_dump-dataset"))
        .arg(&bin)
        .args(["--byte-order", "little"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("0x00 0x00 0x00 0x00 0x00 0x00 0xF8 0x3F"), "{stdout}");
    assert!(stdout.contains("-2"));
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn dump_groups_rows_by_columns_and_header() {
    let dir = tempdir().unwrap();
    let bin = dir.path().join("xor.bin");
    let mut bytes: Vec<u8> = [2u32, 1].iter().flat_map(|c| c.to_le_bytes()).collect();
    bytes.extend([0.0f64, 1.0, 1.0, 1.0, 1.0, 0.0].iter().flat_map(|v| v.to_le_bytes()));
    std::fs::write(&bin, &bytes).unwrap();

    let dump = |extra: &[&str]| {
        let out = Command::new(env!("CARGO_BIN_EXE_dump-dataset"))
            .arg(&bin)
            .args(["--byte-order", "little"])
            .args(extra)
            .output()
            .unwrap();
        assert!(out.status.success());
        String::from_utf8(out.stdout).unwrap()
    };

    // header says 3 values per row
    let stdout = dump(&["--counts-header"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "inputs: 2  outputs: 1");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1].matches(" | (").count(), 3);

    let stdout = dump(&["--counts-header", "--columns", "2"]);
    let lines: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| l.matches(" | (").count() == 2));

    // without the header flag the 8 header bytes decode as one value
    let stdout = dump(&["--columns", "7"]);
    assert_eq!(stdout.lines().count(), 1);
    assert_eq!(stdout.matches(" | (").count(), 7);
}
