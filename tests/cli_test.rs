use iconmeta::default_icon_path;
use image::{ImageBuffer, Rgb};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn iconmeta(cwd: &Path, args: &[&str]) -> anyhow::Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_iconmeta"))
        .args(args)
        .current_dir(cwd)
        .output()?)
}

#[test]
fn test_path_argument_prints_template() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("other.png");
    ImageBuffer::<Rgb<u8>, Vec<u8>>::new(7, 9).save(&path)?;

    let output = iconmeta(temp_dir.path(), &[path.to_str().unwrap()])?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Icon Metadata: 7x9, format: png, depth: uchar, channels: 3\n"
    );
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_exits_zero() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("server-icon.png");

    let output = iconmeta(temp_dir.path(), &[missing.to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error reading icon metadata: "));
    assert_eq!(stderr.lines().count(), 1);
    Ok(())
}

#[test]
fn test_empty_path_argument_exits_zero() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let output = iconmeta(temp_dir.path(), &[""])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error reading icon metadata: "));
    assert_eq!(stderr.lines().count(), 1);
    Ok(())
}

#[test]
fn test_no_arguments_ignores_working_directory() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let decoy = temp_dir.path().join("other.png");
    ImageBuffer::<Rgb<u8>, Vec<u8>>::new(7, 9).save(&decoy)?;
    fs::write(
        temp_dir.path().join("iconmeta.toml"),
        format!("path = {:?}\n", decoy.to_string_lossy()),
    )?;

    let output = iconmeta(temp_dir.path(), &[])?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("7x9"));
    if default_icon_path().exists() {
        assert!(stdout.starts_with("Icon Metadata: "));
        assert!(stderr.is_empty());
    } else {
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("Error reading icon metadata: "));
        assert!(stderr.contains(&default_icon_path().display().to_string()));
    }
    Ok(())
}

#[test]
fn test_explicit_config_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let icon = temp_dir.path().join("icon.png");
    ImageBuffer::<Rgb<u8>, Vec<u8>>::new(4, 6).save(&icon)?;
    let config = temp_dir.path().join("settings.toml");
    fs::write(&config, format!("path = {:?}\n", icon.to_string_lossy()))?;

    let output = iconmeta(temp_dir.path(), &["--config", config.to_str().unwrap()])?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)?.starts_with("Icon Metadata: 4x6,"));
    Ok(())
}
