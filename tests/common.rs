#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch dir so a real
/// user configuration never leaks into the tests.
pub fn rwm() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rworkoutmap_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rworkoutmap");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkoutmap.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two workouts in the browser app's localStorage format, fixed ids.
pub const BROWSER_DUMP: &str = r#"[
  {"date":"2023-04-14T10:20:30.123Z","id":"1681467630","distance":5,"duration":25,
   "coords":[35.71,51.35],"type":"running","cadance":170,"pace":"5.0",
   "discription":"Running on April 14"},
  {"date":"2023-04-15T08:00:00.000Z","id":"1681545600","distance":20,"duration":60,
   "coords":[35.75,51.40],"type":"cycling","elevationGain":300,"speed":"20.0",
   "discription":"Cycling on April 15"}
]"#;

/// Write [`BROWSER_DUMP`] to a temp file and return its path.
pub fn browser_dump_file(name: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, BROWSER_DUMP).expect("write dump");
    p
}

/// Initialize DB and import the two fixture workouts.
pub fn init_db_with_data(db_path: &str, name: &str) {
    rwm()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let dump = browser_dump_file(name);
    rwm()
        .args(["--db", db_path, "import", "--file", &dump])
        .assert()
        .success();
}
