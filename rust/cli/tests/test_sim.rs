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
fn sim_reports_standings() {
    let (code, stdout, stderr) = run_cli(&["concentration", "sim", "--games", "4", "--seed", "1"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("sim: games=4 seed=1 ai=memory opponent=random"));
    assert!(stdout.contains("Computer (memory) wins:"));
    assert!(stdout.contains("Opponent (random) wins:"));
    assert!(stdout.contains("Average turns per game:"));
}

#[test]
fn sim_json_is_reproducible() {
    let args = [
        "concentration",
        "sim",
        "--games",
        "3",
        "--seed",
        "11",
        "--opponent",
        "memory",
        "--json",
    ];
    let (code_a, a, _) = run_cli(&args);
    let (code_b, b, _) = run_cli(&args);
    assert_eq!((code_a, code_b), (0, 0));
    assert_eq!(a, b);

    let v: serde_json::Value = serde_json::from_str(&a).unwrap();
    let s = &v["summary"];
    let games = s["computer_wins"].as_u64().unwrap()
        + s["opponent_wins"].as_u64().unwrap()
        + s["ties"].as_u64().unwrap();
    assert_eq!(games, 3);
    assert_eq!(v["opponent"], "memory");
}

#[test]
fn memory_beats_random_over_many_games() {
    let (code, stdout, _) = run_cli(&[
        "concentration",
        "sim",
        "--games",
        "30",
        "--seed",
        "500",
        "--json",
    ]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let s = &v["summary"];
    assert!(s["computer_cards"].as_u64().unwrap() > s["opponent_cards"].as_u64().unwrap());
}

#[test]
fn sim_rejects_zero_games() {
    let (code, _, stderr) = run_cli(&["concentration", "sim", "--games", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--games"));
}
