use assert_cmd::{crate_name, Command};
use assertables::assert_contains;
use std::io::Write;
use svgpix::cli::Config;
use tempfile::NamedTempFile;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

fn svg_file(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("could not create tmpfile");
    write!(tmpfile, "{content}").expect("tmpfile write failed");
    tmpfile
}

#[test]
fn test_cmdline_no_args() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.assert().failure().code(2);
}

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = String::from_utf8(cmd.arg("-h").assert().success().get_output().stdout.clone())
        .expect("non-UTF8");
    assert_contains!(output, "Usage");
    assert_contains!(output, "--background");
}

#[test]
fn test_cmdline_file() {
    let infile = svg_file(r#"<svg width="8" height="6"><rect width="4" height="4" fill="red"/></svg>"#);
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .assert()
        .success();

    let png = std::fs::read(outfile.path()).expect("output should be readable");
    assert!(png.starts_with(PNG_MAGIC));
    let pm = tiny_skia::Pixmap::decode_png(&png).expect("valid PNG");
    assert_eq!((pm.width(), pm.height()), (8, 6));
}

#[test]
fn test_cmdline_stdio() {
    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let output = cmd
        .args(["-", "-o", "-", "--width", "5", "--height", "5"])
        .write_stdin(r#"<svg><circle cx="2" cy="2" r="2" fill="navy"/></svg>"#)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(output.starts_with(PNG_MAGIC));
}

#[test]
fn test_cmdline_strict() {
    let infile = svg_file(r#"<svg><path d="M0 0 L5" stroke="red"/></svg>"#);
    let outfile = NamedTempFile::new().expect("could not create outfile");

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    cmd.arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .arg("--strict")
        .assert()
        .failure();
}

#[test]
fn test_cmdline_same_file() {
    let infile = svg_file("<svg/>");
    let path = infile.path().to_str().unwrap();
    let config = Config::from_cmdline(&format!("{} {path} -o {path}", crate_name!()));
    assert!(config.is_err());

    let mut cmd = Command::cargo_bin(crate_name!()).unwrap();
    let stderr = cmd
        .args([path, "-o", path])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    assert_contains!(String::from_utf8_lossy(&stderr), "same file");
}

#[test]
fn test_cmdline_config() {
    let config = Config::from_cmdline(&format!("{} --help", crate_name!()));
    assert!(config.is_err());

    let infile = svg_file(r#"<svg width="3" height="3"/>"#);
    let outfile = NamedTempFile::new().expect("could not create outfile");
    let config = Config::from_cmdline(&format!(
        "{} {} -o {} --background '#abc'",
        crate_name!(),
        infile.path().to_str().unwrap(),
        outfile.path().to_str().unwrap()
    ))
    .expect("cmdline should be valid");
    svgpix::cli::run(config).expect("run failed");

    let png = std::fs::read(outfile.path()).expect("output should be readable");
    let pm = tiny_skia::Pixmap::decode_png(&png).expect("valid PNG");
    let c = pm.pixel(1, 1).unwrap().demultiply();
    assert_eq!((c.red(), c.green(), c.blue()), (0xaa, 0xbb, 0xcc));
}
