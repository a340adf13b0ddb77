use super::*;
use crate::foundation::core::FrameGrid;

fn unit_policy() -> PlaybackPolicy {
    PlaybackPolicy {
        looping: true,
        skip_first_frame_on_loop: false,
        base_speed: 1.0,
    }
}

fn seq(frames: u32, rows: u32, cols: u32, policy: PlaybackPolicy) -> FrameSequencer {
    FrameSequencer::new(FrameGrid::new(frames, rows, cols).unwrap(), policy)
}

#[test]
fn replaying_deltas_reproduces_frames_and_rects() {
    let grid = FrameGrid::new(5, 2, 3).unwrap();
    let speeds = FrameSpeeds::from_multipliers(vec![1.0, 0.5, 2.0, 1.0, 0.75]).unwrap();
    let deltas = [0.0, 0.3, 1.7, 0.016, 2.4, 0.0, 5.0, 0.2, 0.2, 0.9];

    let mut replay = || {
        let mut s = FrameSequencer::with_speeds(grid, unit_policy(), speeds.clone());
        deltas
            .iter()
            .map(|d| {
                s.advance(*d);
                (s.frame_time(), s.current_frame(), s.current_rect())
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(replay(), replay());
}

#[test]
fn rects_stay_bounded_for_all_ticks() {
    let mut s = seq(5, 2, 3, unit_policy());
    for delta in [0.0, 0.4, 1.0, 3.7, 100.0, 0.01, 2.5] {
        s.advance(delta);
        assert!(s.current_frame() < 5);
        assert!(s.current_rect().is_unit_bounded());
        assert!(s.frame_time() >= 0.0);
    }
}

#[test]
fn full_cycle_returns_to_frame_zero() {
    let mut s = seq(4, 2, 2, unit_policy());
    for _ in 0..4 {
        s.advance(1.0);
    }
    assert_eq!(s.frame_time(), 0.0);

    let mut s = seq(4, 2, 2, unit_policy());
    s.advance(4.0);
    assert_eq!(s.frame_time(), 0.0);
}

#[test]
fn non_looping_freezes_on_last_frame() {
    let policy = PlaybackPolicy {
        looping: false,
        ..unit_policy()
    };
    let mut s = seq(3, 1, 3, policy);
    s.advance(100.0);
    assert_eq!(s.frame_time(), 2.0);
    for _ in 0..5 {
        s.advance(3.0);
        assert_eq!(s.current_frame(), 2);
        assert_eq!(s.frame_time(), 2.0);
    }
    assert_eq!(s.frame_key(7), FrameKey { texture: 7, frame: 2 });
}

#[test]
fn skip_first_frame_only_after_first_wrap() {
    let policy = PlaybackPolicy {
        skip_first_frame_on_loop: true,
        ..unit_policy()
    };
    let mut s = seq(5, 1, 5, policy);
    assert_eq!(s.current_frame(), 0);

    let mut seen = Vec::new();
    for _ in 0..20 {
        s.advance(1.0);
        seen.push(s.current_frame());
    }
    // First pass runs 1..=4, then every wrap restarts at 1.
    assert!(!seen.contains(&0));
    assert_eq!(seen.iter().min(), Some(&1));
    assert_eq!(seen.iter().max(), Some(&4));
}

#[test]
fn scenario_rects_match_grid_unwrap() {
    let s = seq(5, 2, 3, unit_policy());

    let top_left = s.rect_for_frame(0);
    assert_eq!(top_left.x, 0.0);
    assert_eq!(top_left.y, 0.5);
    assert!((top_left.width - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(top_left.height, 0.5);

    let second_row = s.rect_for_frame(4);
    assert!((second_row.x - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(second_row.y, 0.0);
    assert_eq!(second_row.height, 0.5);
}

#[test]
fn rect_for_frame_clamps_out_of_range() {
    let mut s = seq(5, 2, 3, unit_policy());
    s.advance(3.0);

    // Negative indices follow the live frame.
    assert_eq!(s.rect_for_frame(-1), s.current_rect());
    // Past-the-end indices map to frame 0.
    assert_eq!(s.rect_for_frame(7), s.rect_for_frame(0));
    assert_eq!(s.rect_for_frame(i64::MAX), s.rect_for_frame(0));
}

#[test]
fn negative_base_speed_never_reverses() {
    let policy = PlaybackPolicy {
        base_speed: -2.0,
        ..unit_policy()
    };
    let mut s = seq(4, 2, 2, policy);
    s.advance(1.0);
    assert_eq!(s.frame_time(), 0.0);
}

#[test]
fn zero_and_negative_deltas_advance_nothing() {
    let mut s = seq(4, 2, 2, unit_policy());
    s.advance(0.0);
    s.advance(-5.0);
    s.advance(f64::NAN);
    assert_eq!(s.frame_time(), 0.0);
    assert_eq!(s.current_frame(), 0);
}

#[test]
fn single_frame_never_advances() {
    for (looping, skip) in [(true, true), (true, false), (false, true), (false, false)] {
        let policy = PlaybackPolicy {
            looping,
            skip_first_frame_on_loop: skip,
            base_speed: 1.0,
        };
        let mut s = seq(1, 1, 1, policy);
        for _ in 0..3 {
            s.advance(10.0);
        }
        assert_eq!(s.current_frame(), 0);
        assert_eq!(s.current_rect(), NormalizedRect::FULL);
    }
}

#[test]
fn per_frame_multiplier_scales_advance_rate() {
    let speeds = FrameSpeeds::from_multipliers(vec![0.5, 1.0]).unwrap();
    let mut s = FrameSequencer::with_speeds(
        FrameGrid::new(2, 1, 2).unwrap(),
        unit_policy(),
        speeds,
    );

    // Frame 0 advances at half rate, so one second covers half a frame.
    s.advance(1.0);
    assert_eq!(s.frame_time(), 0.5);
    assert_eq!(s.current_frame(), 0);

    s.advance(1.0);
    assert_eq!(s.frame_time(), 1.0);
    assert_eq!(s.current_frame(), 1);
}

#[test]
fn grid_change_resyncs_speeds_and_restarts() {
    let speeds = FrameSpeeds::from_multipliers(vec![1.0, 0.5, 2.0]).unwrap();
    let mut s = FrameSequencer::with_speeds(
        FrameGrid::new(3, 1, 3).unwrap(),
        unit_policy(),
        speeds,
    );
    s.advance(2.2);
    assert_eq!(s.current_frame(), 2);

    s.set_grid(FrameGrid::new(5, 1, 5).unwrap());
    assert_eq!(s.frame_time(), 0.0);
    assert_eq!(s.speeds().as_slice(), &[1.0, 0.5, 2.0, 1.0, 1.0]);

    s.set_grid(FrameGrid::new(2, 1, 2).unwrap());
    assert_eq!(s.speeds().as_slice(), &[1.0, 0.5]);
}

#[test]
fn invalid_grid_degrades_to_first_frame() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let bad = FrameGrid {
        frames: 0,
        rows: 1,
        cols: 1,
    };
    let mut s = FrameSequencer::new(bad, unit_policy());
    assert!(!s.is_enabled());

    s.advance(5.0);
    assert_eq!(s.frame_time(), 0.0);
    assert_eq!(s.current_frame(), 0);
    assert_eq!(s.current_rect(), NormalizedRect::FULL);
    assert_eq!(s.rect_for_frame(3), NormalizedRect::FULL);

    // An undersized layout is just as invalid as a zero frame count.
    s.set_grid(FrameGrid {
        frames: 9,
        rows: 2,
        cols: 2,
    });
    assert!(!s.is_enabled());

    s.set_grid(FrameGrid::new(4, 2, 2).unwrap());
    assert!(s.is_enabled());
    s.advance(1.0);
    assert_eq!(s.current_frame(), 1);
}

#[test]
fn skip_first_with_freeze_is_a_valid_degenerate_config() {
    let policy = PlaybackPolicy {
        looping: false,
        skip_first_frame_on_loop: true,
        base_speed: 1.0,
    };
    let mut s = seq(2, 1, 2, policy);
    s.advance(10.0);
    assert_eq!(s.current_frame(), 1);
    s.advance(10.0);
    assert_eq!(s.current_frame(), 1);
}

#[test]
fn reset_rewinds_to_the_first_frame() {
    let mut s = seq(4, 2, 2, unit_policy());
    s.advance(2.5);
    assert_eq!(s.current_frame(), 2);

    s.reset();
    assert_eq!(s.frame_time(), 0.0);
    assert_eq!(s.current_rect(), s.first_frame_rect());
}
