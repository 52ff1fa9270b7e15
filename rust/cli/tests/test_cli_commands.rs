use concentration_cli::run;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn help_lists_subcommands() {
    let (code, stdout, _) = run_cli(&["concentration", "--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "sim", "deal", "cfg"] {
        assert!(stdout.contains(cmd), "help is missing {}", cmd);
    }
}

#[test]
fn version_exits_zero() {
    let (code, stdout, _) = run_cli(&["concentration", "--version"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("concentration"));
}

#[test]
fn missing_subcommand_is_an_error() {
    let (code, _, stderr) = run_cli(&["concentration"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Usage: concentration <command> [options]"));
}

#[test]
fn deal_is_deterministic_per_seed() {
    let (code, a, _) = run_cli(&["concentration", "deal", "--seed", "99"]);
    let (_, b, _) = run_cli(&["concentration", "deal", "--seed", "99"]);
    let (_, c, _) = run_cli(&["concentration", "deal", "--seed", "100"]);
    assert_eq!(code, 0);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.contains("First player:"));
}

#[test]
fn cfg_prints_json() {
    let (code, stdout, stderr) = run_cli(&["concentration", "cfg"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(v.get("seed").is_some());
    assert!(v["ai"]["source"].is_string());
}
