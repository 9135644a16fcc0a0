use std::path::PathBuf;
use std::process::Command;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vistula"))
}

#[test]
fn cli_svg_writes_the_builtin_scene() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("dawn.svg");
    let _ = std::fs::remove_file(&out);

    let status = Command::new(bin())
        .args(["svg", "--out"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("class=\"flag\""));
}

#[test]
fn cli_validate_accepts_fixture_scene() {
    let status = Command::new(bin())
        .args(["validate", "--in", "tests/data/procession.json"])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn cli_validate_rejects_garbage() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{\"version\": \"1\"}").unwrap();

    let status = Command::new(bin())
        .args(["validate", "--in"])
        .arg(&bad)
        .status()
        .unwrap();
    assert!(!status.success());
}
