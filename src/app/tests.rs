use super::transport::{self, Position};
use super::*;
use crate::catalog::{Track, sample_tracks};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn t(id: u32, duration: u32) -> Track {
    Track {
        id,
        title: format!("Track {id}"),
        artist: "Artist".into(),
        album: "Album".into(),
        duration,
        cover: String::new(),
    }
}

fn app_with(tracks: Vec<Track>) -> App {
    App::with_rng(tracks, StdRng::seed_from_u64(7)).unwrap()
}

fn sample_app() -> App {
    app_with(sample_tracks())
}

#[test]
fn new_app_starts_paused_at_the_first_track() {
    let app = sample_app();
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.playback, PlaybackState::Paused);
    assert_eq!(app.elapsed(), 0);
    assert_eq!(app.volume(), 75);
    assert!(!app.muted);
    assert!(!app.liked);
    assert!(!app.shuffle);
    assert_eq!(app.repeat, RepeatMode::Off);
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(
        App::with_rng(Vec::new(), StdRng::seed_from_u64(1)),
        Err(crate::error::Error::EmptyCatalog)
    ));
}

#[test]
fn format_time_pads_seconds_only() {
    assert_eq!(transport::format_time(0), "0:00");
    assert_eq!(transport::format_time(9), "0:09");
    assert_eq!(transport::format_time(65), "1:05");
    assert_eq!(transport::format_time(245), "4:05");
    assert_eq!(transport::format_time(3600), "60:00");

    for secs in 0..=267u32 {
        let (m, s) = transport::format_time(secs)
            .split_once(':')
            .map(|(m, s)| (m.to_string(), s.to_string()))
            .unwrap();
        assert_eq!(m, (secs / 60).to_string());
        assert_eq!(s, format!("{:02}", secs % 60));
    }
}

#[test]
fn ticking_a_full_track_advances_exactly_once() {
    let mut app = app_with(vec![t(1, 5), t(2, 7), t(3, 9)]);
    app.toggle_playback();

    for _ in 0..4 {
        app.tick();
        assert_eq!(app.current_index(), 0);
    }
    assert_eq!(app.elapsed(), 4);

    app.tick();
    assert_eq!(app.current_index(), 1);
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn ticking_wraps_from_the_last_track() {
    let mut app = app_with(vec![t(1, 3), t(2, 3)]);
    app.select(1);
    app.toggle_playback();
    for _ in 0..3 {
        app.tick();
    }
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn ticking_while_paused_does_nothing() {
    let mut app = sample_app();
    app.tick();
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn previous_near_the_start_steps_back_one_track() {
    let mut app = sample_app();
    app.select(1);
    app.toggle_playback();
    app.tick();
    app.tick();
    assert_eq!(app.elapsed(), 2);
    app.previous();
    assert_eq!(app.current_index(), 0);
    assert_eq!(app.elapsed(), 0);

    app.previous();
    assert_eq!(app.current_index(), 2);
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn previous_past_the_threshold_restarts_the_track() {
    let mut app = sample_app();
    app.select(1);
    app.toggle_playback();
    for _ in 0..10 {
        app.tick();
    }
    app.previous();
    assert_eq!(app.current_index(), 1);
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn previous_transport_rule_uses_a_strict_threshold() {
    let pos = Position { index: 1, elapsed: 2 };
    assert_eq!(transport::previous(pos, 3), Position::start_of(0));

    let pos = Position { index: 1, elapsed: 10 };
    assert_eq!(transport::previous(pos, 3), Position::start_of(1));

    let pos = Position { index: 0, elapsed: 3 };
    assert_eq!(transport::previous(pos, 3), Position::start_of(2));
}

#[test]
fn previous_ignores_shuffle() {
    let mut app = sample_app();
    app.toggle_shuffle();
    app.select(2);
    for _ in 0..20 {
        let before = app.current_index();
        app.previous();
        assert_eq!(app.current_index(), (before + 2) % 3);
    }
}

#[test]
fn repeat_one_restarts_the_track_regardless_of_shuffle() {
    for shuffle in [false, true] {
        let mut app = app_with(vec![t(1, 4), t(2, 4), t(3, 4)]);
        app.select(1);
        app.shuffle = shuffle;
        app.repeat = RepeatMode::One;
        app.toggle_playback();

        for _ in 0..4 {
            app.tick();
        }
        assert_eq!(app.current_index(), 1);
        assert_eq!(app.elapsed(), 0);

        app.next();
        assert_eq!(app.current_index(), 1);
    }
}

#[test]
fn repeat_all_and_off_advance_identically() {
    let mut off = sample_app();
    let mut all = sample_app();
    all.repeat = RepeatMode::All;
    for _ in 0..5 {
        off.next();
        all.next();
        assert_eq!(off.current_index(), all.current_index());
    }
}

#[test]
fn shuffle_picks_any_index_including_the_current_one() {
    let mut app = sample_app();
    app.toggle_shuffle();
    let mut seen = [false; 3];
    let mut stayed = false;
    for _ in 0..200 {
        let before = app.current_index();
        app.next();
        let after = app.current_index();
        assert!(after < 3);
        assert_eq!(app.elapsed(), 0);
        seen[after] = true;
        stayed |= before == after;
    }
    assert!(seen.iter().all(|&s| s));
    assert!(stayed);
}

#[test]
fn volume_change_always_unmutes() {
    let mut app = sample_app();
    app.toggle_mute();
    assert!(app.muted);
    app.set_volume(40);
    assert!(!app.muted);
    assert_eq!(app.volume(), 40);

    app.toggle_mute();
    app.apply(Action::VolumeBy(-100));
    assert!(!app.muted);
    assert_eq!(app.volume(), 0);

    app.set_volume(250);
    assert_eq!(app.volume(), 100);
}

#[test]
fn mute_keeps_stored_volume() {
    let mut app = sample_app();
    app.toggle_mute();
    assert_eq!(app.volume(), 75);
    assert_eq!(app.effective_volume(), 0);
    assert!(app.is_silent());

    app.toggle_mute();
    assert_eq!(app.effective_volume(), 75);
    assert!(!app.is_silent());

    app.set_volume(0);
    assert!(app.is_silent());
}

#[test]
fn scrub_floors_the_percentage_of_duration() {
    let mut app = sample_app();
    assert_eq!(app.current_track().duration, 245);
    app.scrub(50);
    assert_eq!(app.elapsed(), 122);

    app.scrub(100);
    assert_eq!(app.elapsed(), 245);
    app.scrub(255);
    assert_eq!(app.elapsed(), 245);
    app.scrub(0);
    assert_eq!(app.elapsed(), 0);
}

#[test]
fn scrub_by_steps_from_the_current_percentage() {
    let mut app = sample_app();
    app.scrub(50);
    // 122/245 is 49.8%, so a 5% step lands on 55% rather than 54%.
    app.apply(Action::ScrubBy(5));
    assert_eq!(app.elapsed(), transport::scrub_elapsed(55, 245));

    app.apply(Action::ScrubBy(-100));
    assert_eq!(app.elapsed(), 0);
    app.apply(Action::ScrubBy(200));
    assert_eq!(app.elapsed(), 245);
}

#[test]
fn step_progress_rounds_then_clamps() {
    assert_eq!(transport::step_progress(49.8, 5), 55);
    assert_eq!(transport::step_progress(49.2, 5), 54);
    assert_eq!(transport::step_progress(2.0, -5), 0);
    assert_eq!(transport::step_progress(99.0, 5), 100);
}

#[test]
fn repeat_cycle_returns_to_off_after_three_steps() {
    let mut app = sample_app();
    app.cycle_repeat();
    assert_eq!(app.repeat, RepeatMode::All);
    app.cycle_repeat();
    assert_eq!(app.repeat, RepeatMode::One);
    app.cycle_repeat();
    assert_eq!(app.repeat, RepeatMode::Off);
}

#[test]
fn like_is_session_wide() {
    let mut app = sample_app();
    app.toggle_like();
    app.next();
    assert!(app.liked);
    app.apply(Action::ToggleLike);
    assert!(!app.liked);
}

#[test]
fn select_resets_elapsed_and_keeps_playback() {
    let mut app = sample_app();
    app.toggle_playback();
    app.scrub(30);
    assert!(app.select(2));
    assert_eq!(app.current_index(), 2);
    assert_eq!(app.elapsed(), 0);
    assert!(app.is_playing());

    assert!(!app.select(3));
    assert_eq!(app.current_index(), 2);
}

#[test]
fn play_pause_keeps_elapsed() {
    let mut app = sample_app();
    app.scrub(10);
    let elapsed = app.elapsed();
    app.apply(Action::PlayPause);
    assert!(app.is_playing());
    app.apply(Action::PlayPause);
    assert!(!app.is_playing());
    assert_eq!(app.elapsed(), elapsed);
}

#[test]
fn progress_and_labels_follow_the_current_track() {
    let mut app = sample_app();
    app.scrub(50);
    assert_eq!(app.elapsed_label(), "2:02");
    assert_eq!(app.total_label(), "4:05");
    assert!((app.progress_percent() - 122.0 / 245.0 * 100.0).abs() < 1e-9);

    app.select(1);
    assert_eq!(app.progress_percent(), 0.0);
    assert_eq!(app.total_label(), "3:18");
}

#[test]
fn step_percent_clamps_both_ends() {
    assert_eq!(transport::step_percent(98, 5), 100);
    assert_eq!(transport::step_percent(3, -5), 0);
    assert_eq!(transport::step_percent(40, 5), 45);
}

#[test]
fn repeat_one_holds_the_track_for_ten_minutes() {
    let mut app = sample_app();
    app.select(1);
    app.repeat = RepeatMode::One;
    app.toggle_playback();

    let duration = app.current_track().duration;
    for _ in 0..600 {
        app.tick();
        assert_eq!(app.current_index(), 1);
        assert!(app.elapsed() < duration);
    }
    assert_eq!(app.elapsed(), 600 % duration);
}

#[test]
fn zero_duration_reports_no_progress() {
    assert_eq!(transport::progress_percent(0, 0), 0.0);
    assert_eq!(transport::progress_percent(10, 0), 0.0);
    assert_eq!(transport::progress_percent(300, 200), 100.0);
}
