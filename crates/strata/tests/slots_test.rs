use strata::{Direction, Error, SlotTracker};

#[test]
fn slots_reject_inverted_ranges() {
    let mut t = SlotTracker::new(50.0, 0);
    assert_eq!(t.occupy(3, 1), Err(Error::InvalidRange { from: 3, to: 1 }));
    assert_eq!(t.clear(0, -1), Err(Error::InvalidRange { from: 0, to: -1 }));
    assert!(t.occupy(2, 2).is_ok());
}

#[test]
fn slots_occupy_position_ranges() {
    let mut t = SlotTracker::new(50.0, 0);
    t.occupy_positions(0.0, 100.0).unwrap();
    assert!(t.is_occupied(0));
    assert!(t.is_occupied(1));
    assert!(!t.is_occupied(2));

    t.clear_positions(50.0, 100.0).unwrap();
    assert!(t.is_occupied(0));
    assert!(!t.is_occupied(1));
}

#[test]
fn slots_reserve_one_slot_under_each_edge() {
    let mut t = SlotTracker::new(50.0, 0);
    t.occupy_under_edges([75.0, -25.0]).unwrap();
    assert!(t.is_occupied(1));
    assert!(t.is_occupied(-1));
    assert!(!t.is_occupied(0));
    assert!(!t.is_occupied(2));

    t.clear_under_edges([75.0]).unwrap();
    assert!(!t.is_occupied(1));
    assert!(t.is_occupied(-1));
}

#[test]
fn find_space_centers_on_an_empty_row() {
    let t = SlotTracker::new(50.0, 0);
    assert_eq!(t.find_space(0.0, 100.0, Direction::Center), Ok((0, 2)));
}

#[test]
fn find_space_grows_in_the_requested_direction() {
    let t = SlotTracker::new(50.0, 0);
    assert_eq!(t.find_space(0.0, 100.0, Direction::Left), Ok((-1, 2)));
    assert_eq!(t.find_space(0.0, 100.0, Direction::Right), Ok((1, 2)));
}

#[test]
fn find_space_skips_occupied_slots() {
    let mut t = SlotTracker::new(50.0, 0);
    t.occupy(0, 0).unwrap();
    let (first, count) = t.find_space(0.0, 100.0, Direction::Center).unwrap();
    assert_eq!((first, count), (1, 2));

    t.occupy(-5, 5).unwrap();
    let (first, count) = t.find_space(0.0, 50.0, Direction::Center).unwrap();
    assert_eq!((first, count), (-6, 1));
    assert!(!t.is_occupied(first));
}

#[test]
fn find_space_rounds_partial_slots_up() {
    let t = SlotTracker::new(50.0, 0);
    let (_, count) = t.find_space(0.0, 101.0, Direction::Center).unwrap();
    assert_eq!(count, 3);
    let (_, count) = t.find_space(0.0, 0.0, Direction::Center).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn find_space_gives_up_after_its_probe_budget() {
    let mut t = SlotTracker::new(50.0, 0).with_probe_limit(4);
    t.occupy(-10, 10).unwrap();
    assert_eq!(
        t.find_space(0.0, 50.0, Direction::Center),
        Err(Error::UnresolvedPlacement {
            start_slot: 0,
            width_slots: 1,
            probes: 4,
        })
    );
}

#[test]
fn slots_refuse_runs_too_wide_to_scan() {
    let t = SlotTracker::new(50.0, 10);
    for width in [f64::INFINITY, f64::NAN, 1e300] {
        let err = t.find_space(0.0, width, Direction::Center).unwrap_err();
        assert!(
            matches!(err, Error::UnresolvedPlacement { probes: 0, .. }),
            "{err}"
        );
    }
    // Far from the origin the scan saturates instead of overflowing.
    assert!(t.find_space(1e300, 50.0, Direction::Right).is_ok());
}
