use std::io::Cursor;

use blackjack_cli::run_with_input;
use blackjack_engine::logger::RoundRecord;
use serial_test::serial;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut argv = vec!["blackjack", "play"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(argv, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn single_round_prints_hands_and_tallies() {
    let (code, out, _) = play(&["--seed", "42", "--rounds", "1"], "s\n");
    assert_eq!(code, 0);
    assert!(out.contains("B L A C K J A C K"), "{out}");
    assert!(out.contains("seed=42"), "{out}");
    assert!(out.contains("Dealer:"), "{out}");
    assert!(out.contains("You:"), "{out}");
    assert!(out.contains("Rounds played: 1"), "{out}");
    assert!(
        out.contains("You win!") || out.contains("You lose.") || out.contains("Draw"),
        "{out}"
    );
}

#[test]
#[serial]
fn same_seed_same_game() {
    let (_, a, _) = play(&["--seed", "9", "--rounds", "3"], "h\nh\nh\n\n\n\n\n\n\n\n");
    let (_, b, _) = play(&["--seed", "9", "--rounds", "3"], "h\nh\nh\n\n\n\n\n\n\n\n");
    assert_eq!(a, b);
}

#[test]
#[serial]
fn quit_ends_after_current_round() {
    let (code, out, _) = play(&["--seed", "5"], "q\nq\n");
    assert_eq!(code, 0);
    assert!(out.contains("Rounds played: 1"), "{out}");
}

#[test]
#[serial]
fn long_names_are_truncated() {
    let (code, out, _) = play(
        &["--seed", "1", "--rounds", "1", "--name", "Bartholomew"],
        "\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("Barthol:"), "{out}");
    assert!(!out.contains("Bartholomew"), "{out}");
}

#[test]
#[serial]
fn invalid_decks_flag_is_usage_error() {
    let (code, _, err) = play(&["--decks", "0"], "");
    assert_eq!(code, 2);
    assert!(err.contains("Usage: blackjack"), "{err}");
}

#[test]
#[serial]
fn log_file_holds_one_record_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("rounds.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, _, _) = play(
        &["--seed", "21", "--rounds", "2", "--log", path_str],
        "\n\n\n\n\n\n",
    );
    assert_eq!(code, 0);

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].seed, Some(21));
    assert!(records[0].round_id.ends_with("-000001"));
    assert!(records[1].round_id.ends_with("-000002"));
    assert!(records.iter().all(|r| r.ts.is_some()));
    assert_eq!(records[0].dealer.hidden_cards, 0);
}

#[test]
#[serial]
fn second_session_appends_to_the_same_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, _, _) = play(&["--seed", "1", "--rounds", "2", "--log", path_str], "\n\n\n\n\n\n");
    assert_eq!(code, 0);
    let (code, _, _) = play(&["--seed", "2", "--rounds", "1", "--log", path_str], "\n\n\n");
    assert_eq!(code, 0);

    let records: Vec<RoundRecord> = std::fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].seed, Some(1));
    assert_eq!(records[2].seed, Some(2));
    let mut ids: Vec<&str> = records.iter().map(|r| r.round_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "round ids must stay unique");
}
