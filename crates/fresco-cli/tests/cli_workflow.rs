use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const PROTON_LEAD: &str = "\
p + 208Pb elastic
NAMELIST
 &FRESCO hcm=0.1 rmatch=60 jtmax=50 absend=0.01
     thmin=0 thmax=180 thinc=1 elab=30 cutr=-20 /
 &PARTITION namep='p' massp=1 zp=1 namet='208Pb' masst=208 zt=82 nex=1 /
 &STATES jp=0.5 bandp=1 ep=0 cpot=1 jt=0 bandt=1 et=0 /
 &PARTITION /
 &POT kp=1 type=0 p(1:3)=1 208 1.3 /
 &POT kp=1 type=1 shape=0 p(1:6)=50 1.17 0.75 10 1.32 0.6 /
 &POT /
 &OVERLAP /
 &COUPLING /
";

#[test]
fn parse_command_prints_namelists_as_json() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("p208pb.in");
    write_file(&input_path, PROTON_LEAD);

    let output = run_cli(&["parse", "--json", path_arg(&input_path)]);
    assert!(
        output.status.success(),
        "parse should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(parsed["header"], "p + 208Pb elastic");
    assert_eq!(parsed["profile"], "fresco");
    assert_eq!(parsed["namelists"]["fresco"]["rmatch"].as_f64(), Some(60.0));
    assert_eq!(parsed["namelists"]["partition"]["namep"], "p");
    assert!(parsed["namelists"].get("pot").is_none());
    assert!(parsed["namelists"].get("pot1").is_some());
    assert_eq!(parsed["skipped"].as_array().map(Vec::len), Some(0));
}

#[test]
fn generate_layers_input_config_and_overrides() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("p208pb.in");
    let config_path = temp.path().join("session.json");
    let output_path = temp.path().join("out/generated.in");
    write_file(&input_path, PROTON_LEAD);
    write_file(
        &config_path,
        r#"
        {
          "reaction": "elastic",
          "header": "p + 208Pb at 30 MeV",
          "values": { "rmatch": 80, "iter": 1 }
        }
        "#,
    );

    let output = run_cli(&[
        "generate",
        "--input",
        path_arg(&input_path),
        "--config",
        path_arg(&config_path),
        "--set",
        "elab=35",
        "--output",
        path_arg(&output_path),
    ]);
    assert!(
        output.status.success(),
        "generate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Successfully populated"), "stderr: {stderr}");

    let deck = fs::read_to_string(&output_path).expect("generated deck should be written");
    assert!(deck.starts_with("p + 208Pb at 30 MeV\nNAMELIST\n &FRESCO"), "{deck}");
    assert!(deck.contains("rmatch=80"));
    assert!(deck.contains("elab=35"));
    assert!(deck.contains("iter=1"));
    assert!(deck.contains(" &STATES jp=0.5"));
    assert!(deck.contains(" &POT kp=1 type=0 shape=0 p(1:3)=1 208 1.3  /"));
    assert!(deck.contains(" &POT /"));
    assert!(deck.trim_end().ends_with(" &COUPLING /"));
}

#[test]
fn generate_without_input_uses_reaction_defaults() {
    let output = run_cli(&["generate", "--reaction", "transfer", "--set", "hcm=0.05"]);
    assert!(
        output.status.success(),
        "generate should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let deck = String::from_utf8_lossy(&output.stdout);
    assert!(deck.contains("hcm=0.05"));
    assert!(deck.contains(" &PARTITION /"));
    assert!(deck.contains(" &POT kp=1 type=0 at=12 ap=3 rc=1.2"));
    assert!(deck.contains(" &POT /"));
}

#[test]
fn unknown_override_is_an_input_error() {
    let output = run_cli(&["generate", "--set", "nonsense=1"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INPUT.UNKNOWN_PARAMETER"), "stderr: {stderr}");
}

#[test]
fn broken_config_is_reported_as_parse_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let config_path = temp.path().join("session.json");
    write_file(&config_path, "{ \"reaction\": ");

    let output = run_cli(&["generate", "--config", path_arg(&config_path)]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("INPUT.CONFIG_PARSE"), "stderr: {stderr}");
    assert!(stderr.contains("session.json"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_is_an_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let missing = temp.path().join("missing.in");
    let output = run_cli(&["parse", path_arg(&missing)]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.in"), "stderr: {stderr}");
}

#[test]
fn categorize_surfaces_uploaded_names() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("p208pb.in");
    write_file(&input_path, PROTON_LEAD);

    let output = run_cli(&[
        "categorize",
        "--input",
        path_arg(&input_path),
        "--move",
        "nk:general",
        "--json",
    ]);
    assert!(
        output.status.success(),
        "categorize should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let split: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let general = split["general"].as_array().expect("general should be a list");
    let advanced = split["advanced"].as_array().expect("advanced should be a list");
    for name in ["cutr", "thmin", "nk", "hcm"] {
        assert!(general.iter().any(|entry| entry == name), "{name} should be general");
        assert!(!advanced.iter().any(|entry| entry == name), "{name} should not be advanced");
    }
}

#[test]
fn protected_move_is_rejected() {
    let output = run_cli(&["categorize", "--move", "hcm:advanced"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CATEGORIZE.PROTECTED_PARAMETER"), "stderr: {stderr}");
}

#[test]
fn potentials_command_prints_closed_default_sequence() {
    let output = run_cli(&["potentials", "elastic"]);
    assert!(
        output.status.success(),
        "potentials should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with(" &POT kp=1 type=0 at=12 ap=4 rc=1.2"), "{stdout}");
    assert_eq!(lines.last().copied(), Some(" &POT /"));

    let array = run_cli(&["potentials", "capture", "--array-syntax"]);
    let stdout = String::from_utf8_lossy(&array.stdout);
    assert!(stdout.starts_with(" &POT kp=1 type=0 shape=0 p(1:3)=12 1 1.2"), "{stdout}");
}

#[test]
fn shapes_command_lists_surface_options() {
    let output = run_cli(&["shapes", "2"]);
    assert!(
        output.status.success(),
        "shapes should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("type 2:"), "{stdout}");
    assert!(stdout.lines().count() > 1);

    let unknown = run_cli(&["shapes", "99"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("INPUT.POTENTIAL_TYPE"));
}

#[test]
fn params_command_filters_by_category() {
    let output = run_cli(&["params", "--category", "radialCoordinates", "--json"]);
    assert!(
        output.status.success(),
        "params should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let categories: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let categories = categories.as_array().expect("categories should be a list");
    assert_eq!(categories.len(), 1);
    let parameters = categories[0]["parameters"]
        .as_array()
        .expect("parameters should be a list");
    assert!(parameters.iter().any(|parameter| parameter["name"] == "hcm"));

    let unknown = run_cli(&["params", "--category", "nowhere"]);
    assert_eq!(unknown.status.code(), Some(2));
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fresco-input"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("fresco-input should run")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(path, content).expect("file should be written");
}
