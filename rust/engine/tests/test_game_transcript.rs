mod common;

use std::fs;

use roach_engine::engine::Engine;
use roach_engine::logger::{GameLogger, GameRecord};

use common::{names, ChaosAgent};

fn finished_record(id: String) -> GameRecord {
    let mut engine = Engine::new(names(&["ann", "bo", "cy"]), Some(11)).unwrap();
    let mut agents: Vec<ChaosAgent> = (0..3).map(ChaosAgent::new).collect();
    engine.play_game(&mut agents).unwrap();
    engine.record(id)
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games").join("log.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");
    let rec = finished_record(logger.next_id());
    logger.write(&rec).expect("write");
    logger.write(&rec).expect("write again");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = GameLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn record_round_trips_and_gets_a_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = GameLogger::create(&path).unwrap();
    let rec = finished_record("20250102-000001".into());
    assert!(rec.ts.is_none());
    logger.write(&rec).unwrap();

    let line = fs::read_to_string(&path).unwrap();
    let back: GameRecord = serde_json::from_str(line.trim()).unwrap();
    assert!(back.ts.is_some());
    assert_eq!(back.seats, rec.seats);
    assert_eq!(back.rounds, rec.rounds);
    assert_eq!(back.result, rec.result);
    assert_eq!(back.seat_name(1), "bo");
    assert_eq!(back.seat_name(9), "?");
}

#[test]
fn moves_serialize_with_upper_case_kinds() {
    let rec = finished_record("x".into());
    let json = serde_json::to_value(&rec).unwrap();
    let first = &json["rounds"][0]["moves"][0];
    let action = first["action"].as_str().unwrap();
    assert!(action == "PLAY" || action == "FORFEIT");
}

#[test]
fn reopened_transcript_continues_the_days_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let mut first = GameLogger::create_for_date(&path, "20251231").unwrap();
    for _ in 0..2 {
        let rec = finished_record(first.next_id());
        first.write(&rec).unwrap();
    }
    drop(first);
    let mut file = fs::OpenOptions::new().append(true).open(&path).unwrap();
    std::io::Write::write_all(&mut file, b"not json\n{\"game_id\": \"20251230-000050\"}\n").unwrap();

    let mut second = GameLogger::create_for_date(&path, "20251231").unwrap();
    assert_eq!(second.next_id(), "20251231-000003");

    let mut other_day = GameLogger::create_for_date(&path, "20260101").unwrap();
    assert_eq!(other_day.next_id(), "20260101-000001");
}
