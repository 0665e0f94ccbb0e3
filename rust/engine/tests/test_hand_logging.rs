use std::fs;

use greenfelt_engine::cards::{Card, Rank, Suit};
use greenfelt_engine::logger::{ActionRecord, HandLogger, HandRecord};
use greenfelt_engine::table::{AppliedAction, Street};

fn sample_record() -> HandRecord {
    HandRecord {
        hand_no: 7,
        seed: Some(42),
        actions: vec![
            ActionRecord {
                seat: 3,
                street: Street::Preflop,
                action: AppliedAction::Call {
                    amount: 50,
                    all_in: false,
                },
            },
            ActionRecord {
                seat: 0,
                street: Street::Flop,
                action: AppliedAction::Raise {
                    to: 200,
                    all_in: false,
                },
            },
        ],
        board: vec![
            Card { suit: Suit::Spades, rank: Rank::Ace },
            Card { suit: Suit::Hearts, rank: Rank::King },
            Card { suit: Suit::Diamonds, rank: Rank::Nine },
        ],
        pot: 450,
        winners: vec![0],
        showdown: true,
        ts: None,
    }
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: HandRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

#[test]
fn sink_logger_accepts_records_without_writing() {
    let mut logger = HandLogger::sink();
    logger.write(&sample_record()).unwrap();
}

#[test]
fn jsonl_file_gets_one_line_per_hand_with_a_timestamp() {
    let path = std::env::temp_dir().join(format!(
        "greenfelt_log_test_{}.jsonl",
        std::process::id()
    ));
    let mut logger = HandLogger::create(&path).unwrap();
    logger.write(&sample_record()).unwrap();
    let mut second = sample_record();
    second.hand_no = 8;
    logger.write(&second).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first.hand_no, 7);
    assert!(first.ts.is_some(), "timestamp injected when missing");
    let second: HandRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.hand_no, 8);

    let _ = fs::remove_file(&path);
}
