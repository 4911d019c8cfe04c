use super::*;

#[test]
fn accepts_iff_free_and_matching_over_all_pairs() {
    for piece in PieceId::all() {
        for slot in SlotId::all() {
            for occupied in [false, true] {
                let verdict = validate(piece, slot, occupied);
                let expected = piece.get() == slot.get() && !occupied;
                assert_eq!(verdict.is_accept(), expected, "piece {piece} slot {slot} occupied {occupied}");
            }
        }
    }
}

#[test]
fn occupied_reported_before_mismatch() {
    let piece = PieceId::new(5).unwrap();
    let slot = SlotId::new(3).unwrap();
    assert_eq!(validate(piece, slot, true), Verdict::Reject(Rejection::Occupied));
}

#[test]
fn mismatch_on_free_slot_is_wrong_slot() {
    let piece = PieceId::new(5).unwrap();
    let slot = SlotId::new(3).unwrap();
    assert_eq!(validate(piece, slot, false), Verdict::Reject(Rejection::WrongSlot));
}

#[test]
fn matching_occupied_slot_is_rejected() {
    let piece = PieceId::new(3).unwrap();
    let slot = SlotId::new(3).unwrap();
    assert_eq!(validate(piece, slot, true), Verdict::Reject(Rejection::Occupied));
}

#[test]
fn rejection_display() {
    assert_eq!(Rejection::NoSlot.to_string(), "no slot under drop point");
    assert_eq!(Rejection::WrongSlot.to_string(), "wrong slot");
}
