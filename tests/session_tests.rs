//! Round scenarios and state machine properties.

use std::time::{Duration, Instant};

use zip_trainer::core::{GameSession, GameState, Status};
use zip_trainer::types::GameConfig;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A session already in `Timing`, round started at `t0`.
fn started_at(t0: Instant) -> GameSession {
    let mut session = GameSession::new(GameConfig::default());
    session.on_tick(t0, Some('w'));
    assert_eq!(session.state(), GameState::Timing { started: t0 });
    session
}

#[test]
fn scenario_standby_trigger_starts_round() {
    let now = Instant::now();
    let mut session = GameSession::new(GameConfig::default());
    session.on_tick(now, Some('w'));
    assert_eq!(session.state(), GameState::Timing { started: now });
    assert_eq!(session.round_start(), Some(now));
}

#[test]
fn scenario_countdown_shows_time_left() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(1000), None);
    assert_eq!(frame.len(), 1);
    assert_eq!(frame[0].to_string(), "2.00");
    assert_eq!(session.state(), GameState::Timing { started: t0 });
}

#[test]
fn scenario_press_in_window_is_perfect() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(3500), Some('W'));
    assert_eq!(frame.last(), Some(&Status::Perfect));
    assert_eq!(frame.last().unwrap().to_string(), "Perfect!");
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn scenario_press_during_countdown_is_too_early() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(1000), Some('w'));
    assert_eq!(frame.last().unwrap().to_string(), "Too early!");
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn scenario_no_press_is_too_slow() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(4500), None);
    assert_eq!(frame.as_slice(), &[Status::TooSlow]);
    assert_eq!(frame[0].to_string(), "You were too slow!");
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn scenario_game_over_trigger_starts_fresh_round() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    session.on_tick(t0 + ms(4500), None);
    assert_eq!(session.state(), GameState::GameOver);

    let t1 = t0 + ms(6000);
    session.on_tick(t1, Some('w'));
    assert_eq!(session.state(), GameState::Timing { started: t1 });
    assert_eq!(session.round_start(), Some(t1));
}

#[test]
fn idle_states_only_leave_on_trigger() {
    let keys = [None, Some('q'), Some('e'), Some(' '), Some('\n'), Some('ш')];
    let t0 = Instant::now();

    let mut standby = GameSession::new(GameConfig::default());
    let mut game_over = started_at(t0);
    game_over.on_tick(t0 + ms(5000), None);

    for (i, key) in keys.iter().enumerate() {
        let now = t0 + ms(5000 + i as u64 * 16);
        standby.on_tick(now, *key);
        game_over.on_tick(now, *key);
        assert_eq!(standby.state(), GameState::Standby);
        assert_eq!(game_over.state(), GameState::GameOver);
    }
}

#[test]
fn new_round_starts_at_zero_elapsed() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let frame = session.on_tick(t0, None);
    assert_eq!(frame.as_slice(), &[Status::Countdown(ms(3000))]);
}

#[test]
fn countdown_strictly_decreases_every_tick() {
    let t0 = Instant::now();
    let mut session = started_at(t0);
    let tick = GameConfig::default().tick_interval();

    let mut previous: Option<f64> = None;
    let mut now = t0 + tick;
    while now < t0 + ms(3000) {
        let frame = session.on_tick(now, None);
        let shown: f64 = frame[0].to_string().parse().unwrap();
        if let Some(prev) = previous {
            assert!(shown < prev, "{shown} should be below {prev}");
        }
        previous = Some(shown);
        now += tick;
    }
    assert_eq!(session.state(), GameState::Timing { started: t0 });
}

#[test]
fn window_opens_exactly_at_delay() {
    let t0 = Instant::now();

    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(3000), None);
    assert_eq!(frame.as_slice(), &[Status::Now]);

    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(3000), Some('w'));
    assert_eq!(frame.as_slice(), &[Status::Now, Status::Perfect]);

    let mut session = started_at(t0);
    let frame = session.on_tick(t0 + ms(3000) - Duration::from_nanos(1), Some('w'));
    assert_eq!(frame.last(), Some(&Status::TooEarly));
}

#[test]
fn too_slow_fires_without_input_at_window_end() {
    let t0 = Instant::now();
    let mut session = started_at(t0);

    let frame = session.on_tick(t0 + ms(3999), None);
    assert_eq!(frame.as_slice(), &[Status::Now]);

    let frame = session.on_tick(t0 + ms(4000), None);
    assert_eq!(frame.as_slice(), &[Status::TooSlow]);
    assert_eq!(session.state(), GameState::GameOver);
}

#[test]
fn custom_timings_are_respected() {
    let config = GameConfig {
        input_delay: ms(500),
        input_window: ms(200),
        ..GameConfig::default()
    };
    let t0 = Instant::now();
    let mut session = GameSession::new(config);
    session.on_tick(t0, Some('w'));

    let frame = session.on_tick(t0 + ms(250), None);
    assert_eq!(frame[0].to_string(), "0.25");

    let frame = session.on_tick(t0 + ms(650), Some('w'));
    assert_eq!(frame.as_slice(), &[Status::Now, Status::Perfect]);
}
