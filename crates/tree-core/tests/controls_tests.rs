use tree_core::{key_action, KeyAction, ThemeId, HELP_LINES};

#[test]
fn space_toggles_mode() {
    assert_eq!(key_action(" "), Some(KeyAction::ToggleMode));
}

#[test]
fn theme_keys() {
    assert_eq!(key_action("t"), Some(KeyAction::CycleTheme));
    assert_eq!(key_action("T"), Some(KeyAction::CycleTheme));
    assert_eq!(key_action("1"), Some(KeyAction::SelectTheme(ThemeId::AuroraGreen)));
    assert_eq!(key_action("2"), Some(KeyAction::SelectTheme(ThemeId::LuxuryGold)));
}

#[test]
fn arrows_orbit_and_zoom_in_opposite_directions() {
    match (key_action("ArrowLeft"), key_action("ArrowRight")) {
        (Some(KeyAction::Orbit(l)), Some(KeyAction::Orbit(r))) => assert!(l < 0.0 && r > 0.0),
        other => panic!("unexpected {other:?}"),
    }
    match (key_action("ArrowUp"), key_action("ArrowDown")) {
        (Some(KeyAction::Zoom(i)), Some(KeyAction::Zoom(o))) => assert!(i < 0.0 && o > 0.0),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn unbound_keys_do_nothing() {
    assert_eq!(key_action("q"), None);
    assert_eq!(key_action(""), None);
}

#[test]
fn theme_cycle_visits_every_theme() {
    let mut id = ThemeId::AuroraGreen;
    let mut seen = vec![id];
    for _ in 1..ThemeId::ALL.len() {
        id = id.next();
        seen.push(id);
    }
    assert_eq!(id.next(), ThemeId::AuroraGreen);
    for t in ThemeId::ALL {
        assert!(seen.contains(&t));
    }
    assert!(!HELP_LINES.is_empty());
}
