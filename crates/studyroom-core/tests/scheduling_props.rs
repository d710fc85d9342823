//! Property tests for the scheduling engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use studyroom_core::srs::{
    calculate_next_interval, complete_review, process_daily_updates, Difficulty, IntervalPolicy,
    Subtheme, SubthemeStatus, Theme,
};
use studyroom_core::{Clock, FixedClock};

fn base_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

/// `counts[i]` queued subthemes in theme `i`.
fn build_themes(counts: &[usize]) -> Vec<Theme> {
    counts
        .iter()
        .enumerate()
        .map(|(t, &n)| {
            (0..n).fold(Theme::new(format!("t{t}"), format!("Theme {t}")), |theme, s| {
                theme.with_subtheme(Subtheme::new(format!("t{t}-s{s}"), format!("Sub {s}")))
            })
        })
        .collect()
}

fn active_count(themes: &[Theme]) -> usize {
    themes
        .iter()
        .flat_map(|t| &t.subthemes)
        .filter(|s| s.status == SubthemeStatus::Active)
        .count()
}

proptest! {
    #[test]
    fn one_activation_per_call_regardless_of_theme_count(
        counts in prop::collection::vec(1usize..4, 1..8),
        offset in 0i64..400,
    ) {
        let today = base_day() + chrono::Duration::days(offset);
        let themes = build_themes(&counts);

        let update = process_daily_updates(&themes, None, today, &IntervalPolicy::default()).unwrap();
        prop_assert_eq!(active_count(&update.themes), 1);
        prop_assert_eq!(update.activated.as_deref(), Some("t0-s0"));

        // Same day, stamp persisted: nothing more happens
        prop_assert!(process_daily_updates(
            &update.themes,
            Some(update.processed_date),
            today,
            &IntervalPolicy::default()
        )
        .is_none());
    }

    #[test]
    fn medium_chain_lands_on_canonical_offsets(offset in 0i64..3000) {
        let today = base_day() + chrono::Duration::days(offset);
        let update = process_daily_updates(&build_themes(&[1]), None, today, &IntervalPolicy::default())
            .unwrap();
        let offsets: Vec<i64> = update.themes[0].subthemes[0]
            .reviews
            .iter()
            .map(|r| (r.date - today).num_days())
            .collect();
        prop_assert_eq!(offsets, vec![1, 3, 7, 15, 30]);
    }

    #[test]
    fn scaled_intervals_stay_in_bounds(step in 0usize..20, d in difficulty()) {
        let medium = calculate_next_interval(step, Difficulty::Medium);
        let scaled = calculate_next_interval(step, d);
        prop_assert!(scaled >= 1);
        match d {
            Difficulty::Easy => prop_assert!(scaled >= medium),
            Difficulty::Hard => prop_assert!(scaled <= medium),
            Difficulty::Medium => prop_assert_eq!(scaled, medium),
        }
    }

    #[test]
    fn completion_is_gated_on_due_date(
        number in 1u32..=5,
        days_after_activation in 0i64..60,
        d in difficulty(),
    ) {
        let themes = process_daily_updates(&build_themes(&[1]), None, base_day(), &IntervalPolicy::default())
            .unwrap()
            .themes;
        let due = themes[0].subthemes[0].reviews[number as usize - 1].date;

        let mut clock = FixedClock::on(base_day());
        clock.advance_days(days_after_activation);

        let outcome = complete_review(&themes, "t0-s0", number, d, clock.now(), &IntervalPolicy::default());
        prop_assert_eq!(outcome.awarded, due <= clock.today());
        if !outcome.awarded {
            prop_assert_eq!(outcome.themes, themes);
        }
    }

    #[test]
    fn only_next_review_is_difficulty_scaled(number in 1u32..=3, d in difficulty()) {
        let themes = process_daily_updates(&build_themes(&[1]), None, base_day(), &IntervalPolicy::default())
            .unwrap()
            .themes;
        let mut clock = FixedClock::on(base_day());
        clock.advance_days(100);

        let outcome = complete_review(&themes, "t0-s0", number, d, clock.now(), &IntervalPolicy::default());
        prop_assert!(outcome.awarded);

        let reviews = &outcome.themes[0].subthemes[0].reviews;
        let k = number as usize;
        let gaps: Vec<i64> = (k..reviews.len())
            .map(|i| {
                let previous = if i == k { clock.today() } else { reviews[i - 1].date };
                (reviews[i].date - previous).num_days()
            })
            .collect();

        prop_assert_eq!(gaps[0], i64::from(calculate_next_interval(k, d)));
        for (j, gap) in gaps.iter().enumerate().skip(1) {
            prop_assert_eq!(*gap, i64::from(calculate_next_interval(k + j, Difficulty::Medium)));
        }
    }
}

#[test]
fn documented_example_schedule() {
    let day = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap();
    let themes = process_daily_updates(&build_themes(&[1]), None, day(1, 1), &IntervalPolicy::default())
        .unwrap()
        .themes;

    let outcome = complete_review(
        &themes,
        "t0-s0",
        1,
        Difficulty::Hard,
        FixedClock::on(day(1, 15)).now(),
        &IntervalPolicy::default(),
    );
    let dates: Vec<NaiveDate> = outcome.themes[0].subthemes[0]
        .reviews
        .iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(
        dates,
        vec![day(1, 2), day(1, 16), day(1, 20), day(1, 28), day(2, 12)]
    );
}
