use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_dmg-helper");

#[test]
fn test_default_run_writes_fixed_path() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(BIN).current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "DMG background image created: native/resources/dmg_background.png\n"
    );

    let image = image::open(dir.path().join("native/resources/dmg_background.png")).unwrap();
    assert_eq!((image.width(), image.height()), (500, 300));
    assert_eq!(image.color(), image::ColorType::Rgb8);
}

#[test]
fn test_output_flag() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("bg.png");

    let output = Command::new(BIN).arg("--output").arg(&target).output().unwrap();
    assert!(output.status.success());
    assert!(target.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let output = Command::new(BIN)
        .arg("-o")
        .arg(blocker.join("bg.png"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
