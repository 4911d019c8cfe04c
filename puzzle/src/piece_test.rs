use super::*;

fn pid(n: u8) -> PieceId {
    PieceId::new(n).unwrap()
}

fn order(ids: &[u8]) -> Vec<PieceId> {
    ids.iter().map(|&n| pid(n)).collect()
}

// =============================================================
// PieceId / SlotId
// =============================================================

#[test]
fn piece_id_accepts_full_range() {
    for n in 1..=PIECE_COUNT {
        assert_eq!(PieceId::new(n).unwrap().get(), n);
    }
}

#[test]
fn piece_id_rejects_zero_and_overflow() {
    assert_eq!(PieceId::new(0), Err(PuzzleError::PieceOutOfRange(0)));
    assert_eq!(PieceId::new(PIECE_COUNT + 1), Err(PuzzleError::PieceOutOfRange(PIECE_COUNT + 1)));
}

#[test]
fn slot_id_rejects_out_of_range() {
    assert_eq!(SlotId::new(0), Err(PuzzleError::SlotOutOfRange(0)));
    assert_eq!(SlotId::new(200), Err(PuzzleError::SlotOutOfRange(200)));
}

#[test]
fn slot_index_is_zero_based() {
    assert_eq!(SlotId::new(1).unwrap().index(), 0);
    assert_eq!(SlotId::new(8).unwrap().index(), 7);
}

#[test]
fn piece_home_matches_number() {
    assert_eq!(pid(5).home(), SlotId::new(5).unwrap());
}

#[test]
fn all_ids_ascending() {
    let pieces: Vec<u8> = PieceId::all().map(PieceId::get).collect();
    let slots: Vec<u8> = SlotId::all().map(SlotId::get).collect();
    assert_eq!(pieces, (1..=PIECE_COUNT).collect::<Vec<_>>());
    assert_eq!(slots, pieces);
}

#[test]
fn all_ids_know_their_count() {
    assert_eq!(PieceId::all().len(), usize::from(PIECE_COUNT));
    assert_eq!(SlotId::all().len(), usize::from(PIECE_COUNT));
}

#[test]
fn ids_display_as_number() {
    assert_eq!(pid(3).to_string(), "3");
    assert_eq!(SlotId::new(7).unwrap().to_string(), "7");
}

#[test]
fn piece_id_serializes_as_number() {
    assert_eq!(serde_json::to_string(&pid(4)).unwrap(), "4");
}

#[test]
fn ids_deserialize_in_range() {
    assert_eq!(serde_json::from_str::<PieceId>("8").unwrap(), pid(8));
    assert_eq!(serde_json::from_str::<SlotId>("1").unwrap(), SlotId::new(1).unwrap());
}

#[test]
fn ids_out_of_range_fail_to_deserialize() {
    for raw in ["0", "9"] {
        let err = serde_json::from_str::<PieceId>(raw).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
        assert!(serde_json::from_str::<SlotId>(raw).is_err());
    }
}

#[test]
fn location_with_bad_slot_fails_to_deserialize() {
    assert!(serde_json::from_str::<Location>(r#"{"at":"slot","slot":0}"#).is_err());
    assert!(serde_json::from_str::<Location>(r#"{"at":"slot","slot":9}"#).is_err());
    assert_eq!(
        serde_json::from_str::<Location>(r#"{"at":"slot","slot":3}"#).unwrap(),
        Location::Slot(SlotId::new(3).unwrap())
    );
}

#[test]
fn location_serializes_tagged() {
    let json = serde_json::to_value(Location::Slot(SlotId::new(2).unwrap())).unwrap();
    assert_eq!(json, serde_json::json!({ "at": "slot", "slot": 2 }));
    let json = serde_json::to_value(Location::Staging).unwrap();
    assert_eq!(json, serde_json::json!({ "at": "staging" }));
}

// =============================================================
// PieceRegistry
// =============================================================

#[test]
fn new_registry_is_empty() {
    let reg = PieceRegistry::new();
    assert!(reg.is_empty());
    assert_eq!(reg.staged().count(), 0);
}

#[test]
fn dealt_puts_everything_in_staging() {
    let reg = PieceRegistry::dealt(order(&[3, 1, 2]));
    assert_eq!(reg.len(), 3);
    assert_eq!(reg.staged().collect::<Vec<_>>(), order(&[3, 1, 2]));
    assert_eq!(reg.location(pid(1)), Some(Location::Staging));
}

#[test]
fn location_of_undealt_piece_is_none() {
    let reg = PieceRegistry::dealt(order(&[1, 2]));
    assert_eq!(reg.location(pid(8)), None);
}

#[test]
fn lift_moves_piece_in_flight() {
    let mut reg = PieceRegistry::dealt(order(&[2, 1]));
    assert_eq!(reg.lift(pid(1)), Ok(Location::Staging));
    assert_eq!(reg.location(pid(1)), Some(Location::InFlight));
    assert_eq!(reg.in_flight(), Some(pid(1)));
    assert_eq!(reg.staged().collect::<Vec<_>>(), order(&[2]));
}

#[test]
fn lift_twice_is_not_draggable() {
    let mut reg = PieceRegistry::dealt(order(&[1]));
    reg.lift(pid(1)).unwrap();
    assert_eq!(reg.lift(pid(1)), Err(PuzzleError::NotDraggable(pid(1))));
}

#[test]
fn lift_unknown_piece_errors() {
    let mut reg = PieceRegistry::dealt(order(&[1]));
    assert_eq!(reg.lift(pid(6)), Err(PuzzleError::UnknownPiece(pid(6))));
}

#[test]
fn lift_bound_piece_is_not_draggable() {
    let mut reg = PieceRegistry::dealt(order(&[4]));
    reg.lift(pid(4)).unwrap();
    reg.bind(pid(4), SlotId::new(4).unwrap()).unwrap();
    assert_eq!(reg.lift(pid(4)), Err(PuzzleError::NotDraggable(pid(4))));
}

#[test]
fn lift_then_restore_leaves_registry_unchanged() {
    let before = PieceRegistry::dealt(order(&[5, 3, 8, 1]));
    let mut reg = before.clone();
    let origin = reg.lift(pid(8)).unwrap();
    reg.restore(pid(8), origin);
    assert_eq!(reg, before);
    assert_eq!(reg.staged().collect::<Vec<_>>(), order(&[5, 3, 8, 1]));
}

#[test]
fn bind_records_slot() {
    let mut reg = PieceRegistry::dealt(order(&[2]));
    reg.lift(pid(2)).unwrap();
    reg.bind(pid(2), SlotId::new(2).unwrap()).unwrap();
    assert_eq!(reg.location(pid(2)), Some(Location::Slot(SlotId::new(2).unwrap())));
    assert_eq!(reg.in_flight(), None);
}
