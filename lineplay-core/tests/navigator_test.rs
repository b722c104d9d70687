use lineplay_core::{CursorState, Navigator, Position};
use linescript_core::{parse, Script};

fn sample() -> Script {
    parse(&[
        "Alice: Hello there (ch001)",
        "Still talking (ch002)",
        "Bob: Hi! (ch010)",
        "stage direction with no id",
    ])
    .unwrap()
}

fn bigger() -> Script {
    parse(&[
        "Alice: a1 (ch1)",
        "a2 (ch2)",
        "a3 (ch3)",
        "Bob: b1 (ch4)",
        "b2 (ch5)",
        "Alice: a4 (ch6)",
        "Carol: c1 (ch7)",
        "Alice: a5 (ch8)",
        "a6 (ch9)",
    ])
    .unwrap()
}

fn ids(nav: &Navigator) -> Option<&str> {
    nav.current().map(|i| i.resource_id())
}

#[test]
fn walkthrough() {
    let mut nav = Navigator::new(sample());
    let cur = nav.current().unwrap();
    assert_eq!((cur.text(), cur.resource_id()), ("Hello there", "ch001"));

    assert_eq!(nav.advance().unwrap().text(), "Still talking");
    assert_eq!(nav.advance().unwrap().text(), "Hi!");
    assert!(!nav.has_next());

    // crossing back into Alice's block lands on its first line (ch001), not on the
    // last one heard ("Still talking", ch002) as a per-entry cursor would
    assert_eq!(nav.retreat().unwrap().resource_id(), "ch001");
    assert_eq!(nav.position(), Some(Position::new(0, 0)));
    assert!(!nav.has_prev());
    assert_eq!(nav.retreat().unwrap().resource_id(), "ch001");
}

#[test]
fn same_entry_round_trip() {
    let mut nav = Navigator::new(bigger());
    nav.advance();
    let before = nav.position();
    assert_eq!(before, Some(Position::new(0, 1)));
    nav.advance();
    nav.retreat();
    assert_eq!(nav.position(), before);
}

#[test]
fn cross_entry_retreat_lands_on_first_item() {
    let mut nav = Navigator::new(bigger());
    nav.advance();
    nav.advance();
    assert_eq!(nav.position(), Some(Position::new(0, 2)));

    nav.advance();
    assert_eq!(nav.position(), Some(Position::new(1, 0)));
    nav.retreat();
    assert_eq!(nav.position(), Some(Position::new(0, 0)));
    assert_eq!(ids(&nav), Some("ch1"));
}

#[test]
fn retreat_inside_entry_walks_items_back() {
    let mut nav = Navigator::new(bigger());
    for _ in 0..4 {
        nav.advance();
    }
    assert_eq!(ids(&nav), Some("ch5"));
    nav.retreat();
    assert_eq!(ids(&nav), Some("ch4"));
    nav.retreat();
    assert_eq!(ids(&nav), Some("ch1"));
}

#[test]
fn has_next_false_only_at_last_item() {
    let script = bigger();
    let total = script.item_count();
    let mut nav = Navigator::new(script);
    for _ in 1..total {
        assert!(nav.has_next());
        nav.advance();
    }
    assert!(!nav.has_next());
    assert_eq!(ids(&nav), Some("ch9"));

    // stays put at the end
    assert_eq!(nav.advance().unwrap().resource_id(), "ch9");
    assert_eq!(nav.position(), Some(Position::new(4, 1)));
}

#[test]
fn has_prev_false_only_at_start() {
    let mut nav = Navigator::new(bigger());
    assert!(!nav.has_prev());
    nav.advance();
    assert!(nav.has_prev());
    nav.retreat();
    assert!(!nav.has_prev());
    nav.advance();
    nav.advance();
    nav.advance();
    assert_eq!(nav.position(), Some(Position::new(1, 0)));
    assert!(nav.has_prev());
}

#[test]
fn empty_script_is_inert() {
    let mut nav = Navigator::new(Script::default());
    assert_eq!(nav.state(), CursorState::Empty);
    for _ in 0..3 {
        assert!(nav.current().is_none());
        assert!(nav.advance().is_none());
        assert!(nav.retreat().is_none());
        assert!(!nav.has_next());
        assert!(!nav.has_prev());
    }
    assert!(nav.peek().is_none());
    assert_eq!(nav.position(), None);
    assert!(nav.available_speakers().is_empty());
}

#[test]
fn filter_narrows_and_restores() {
    let mut nav = Navigator::new(bigger());
    let full: Vec<String> = nav.entries().map(|e| e.speaker().to_string()).collect();

    nav.set_filter(Some("Alice"));
    assert_eq!(nav.len(), 3);
    assert!(nav.entries().all(|e| e.speaker() == "Alice"));
    assert_eq!(nav.filter(), Some("Alice"));

    nav.set_filter(None);
    let restored: Vec<String> = nav.entries().map(|e| e.speaker().to_string()).collect();
    assert_eq!(restored, full);
    assert_eq!(nav.len(), 5);
    assert_eq!(nav.filter(), None);
}

#[test]
fn filtered_walk_skips_other_speakers() {
    let mut nav = Navigator::with_filter(bigger(), Some("Alice"));
    let mut seen = vec![ids(&nav).unwrap().to_string()];
    while nav.has_next() {
        seen.push(nav.advance().unwrap().resource_id().to_string());
    }
    assert_eq!(seen, vec!["ch1", "ch2", "ch3", "ch6", "ch8", "ch9"]);
}

#[test]
fn filter_keeps_current_entry_and_item() {
    let mut nav = Navigator::new(bigger());
    // last Alice block, second item
    for _ in 0..8 {
        nav.advance();
    }
    assert_eq!(ids(&nav), Some("ch9"));
    assert_eq!(nav.position(), Some(Position::new(4, 1)));

    nav.set_filter(Some("Alice"));
    assert_eq!(nav.position(), Some(Position::new(2, 1)));
    assert_eq!(ids(&nav), Some("ch9"));

    nav.set_filter(None);
    assert_eq!(nav.position(), Some(Position::new(4, 1)));
}

#[test]
fn filter_resets_when_current_entry_drops_out() {
    let mut nav = Navigator::new(bigger());
    for _ in 0..4 {
        nav.advance();
    }
    assert_eq!(nav.current_entry().unwrap().speaker(), "Bob");

    nav.set_filter(Some("Carol"));
    assert_eq!(nav.position(), Some(Position::START));
    assert_eq!(ids(&nav), Some("ch7"));
}

#[test]
fn filter_to_unknown_speaker_is_empty() {
    let mut nav = Navigator::new(bigger());
    nav.advance();
    nav.set_filter(Some("Nobody"));
    assert_eq!(nav.state(), CursorState::Empty);
    assert!(nav.current().is_none());
    assert!(nav.advance().is_none());
    assert!(nav.retreat().is_none());

    nav.set_filter(None);
    assert_eq!(nav.state(), CursorState::Positioned);
    assert_eq!(nav.position(), Some(Position::START));
}

#[test]
fn reset_returns_to_start() {
    let mut nav = Navigator::new(bigger());
    nav.advance();
    nav.advance();
    nav.advance();
    nav.reset();
    assert_eq!(nav.position(), Some(Position::START));
    assert_eq!(ids(&nav), Some("ch1"));
}

#[test]
fn peek_reports_speaker() {
    let mut nav = Navigator::new(sample());
    nav.advance();
    nav.advance();
    let cue = nav.peek().unwrap();
    assert_eq!(cue.speaker, "Bob");
    assert_eq!(cue.item.text(), "Hi!");
    assert_eq!(cue.position, Position::new(1, 0));
}

#[test]
fn speakers_ignore_filter() {
    let mut nav = Navigator::new(bigger());
    nav.set_filter(Some("Bob"));
    assert_eq!(nav.available_speakers(), vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn filter_never_mutates_script() {
    let script = std::sync::Arc::new(bigger());
    let mut nav = Navigator::new(script.clone());
    nav.set_filter(Some("Bob"));
    nav.advance();
    nav.set_filter(None);
    assert_eq!(**nav.script(), *script);
    assert_eq!(script.len(), 5);
}
