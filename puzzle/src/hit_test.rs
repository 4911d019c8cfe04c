use super::*;

fn sid(n: u8) -> SlotId {
    SlotId::new(n).unwrap()
}

// =============================================================
// GridLayout geometry
// =============================================================

#[test]
fn default_layout_places_slots_row_major() {
    let layout = GridLayout::default();
    assert_eq!(layout.slot_rect(sid(1)), Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(layout.slot_rect(sid(4)), Rect::new(300.0, 0.0, 100.0, 100.0));
    assert_eq!(layout.slot_rect(sid(5)), Rect::new(0.0, 100.0, 100.0, 100.0));
    assert_eq!(layout.slot_rect(sid(8)), Rect::new(300.0, 100.0, 100.0, 100.0));
}

#[test]
fn staging_strip_sits_below_grid() {
    let layout = GridLayout::default();
    let strip = layout.staging_rect();
    assert_eq!(strip.y, 240.0);
    assert_eq!(strip.width, 800.0);
}

#[test]
fn staging_points_are_inside_strip_and_distinct() {
    let layout = GridLayout::default();
    let strip = layout.staging_rect();
    let points: Vec<Point> = (0..8).map(|i| layout.staging_point(i)).collect();
    for p in &points {
        assert!(strip.contains(*p));
    }
    assert_ne!(points[0], points[1]);
}

#[test]
fn offset_origin_shifts_everything() {
    let layout = GridLayout::new(Point::new(50.0, 20.0), 60.0, 5.0, 4);
    assert_eq!(layout.slot_rect(sid(1)), Rect::new(50.0, 20.0, 60.0, 60.0));
    assert_eq!(layout.slot_center(sid(6)), Point::new(140.0, 110.0));
}

#[test]
fn zero_columns_clamped() {
    let layout = GridLayout::new(Point::default(), 10.0, 1.0, 0);
    assert_eq!(layout.slot_rect(sid(3)), Rect::new(0.0, 20.0, 10.0, 10.0));
}

// =============================================================
// HitTester for GridLayout
// =============================================================

#[test]
fn center_of_cell_hits_content() {
    let layout = GridLayout::default();
    let hit = layout.topmost_element_at(layout.slot_center(sid(6)));
    assert_eq!(hit, Some(Element::CellContent(sid(6))));
}

#[test]
fn cell_border_hits_cell() {
    let layout = GridLayout::default();
    let hit = layout.topmost_element_at(Point::new(102.0, 50.0));
    assert_eq!(hit, Some(Element::Cell(sid(2))));
}

#[test]
fn content_walks_up_to_slot() {
    let layout = GridLayout::default();
    assert_eq!(layout.nearest_enclosing_slot(&Element::CellContent(sid(7))), Some(sid(7)));
    assert_eq!(layout.nearest_enclosing_slot(&Element::Cell(sid(7))), Some(sid(7)));
}

#[test]
fn staging_has_no_enclosing_slot() {
    let layout = GridLayout::default();
    let at = layout.staging_point(2);
    assert_eq!(layout.topmost_element_at(at), Some(Element::Staging));
    assert_eq!(layout.slot_at(at), None);
}

#[test]
fn off_board_hits_nothing() {
    let layout = GridLayout::default();
    assert_eq!(layout.topmost_element_at(layout.off_board_point()), None);
    assert_eq!(layout.slot_at(Point::new(1000.0, 1000.0)), None);
}

#[test]
fn slot_at_resolves_every_home_point() {
    let layout = GridLayout::default();
    for piece in PieceId::all() {
        assert_eq!(layout.slot_at(layout.home_point(piece)), Some(piece.home()));
    }
}

#[test]
fn gap_between_grid_and_staging_hits_nothing() {
    let layout = GridLayout::default();
    assert_eq!(layout.topmost_element_at(Point::new(50.0, 220.0)), None);
}

#[test]
fn reference_delegates() {
    let layout = GridLayout::default();
    let by_ref = &layout;
    assert_eq!(by_ref.slot_at(layout.slot_center(sid(1))), Some(sid(1)));
}
