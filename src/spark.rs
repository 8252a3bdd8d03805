use crate::models::{FlameLevel, SparkState, UserKey, UserMark};
use chrono::{DateTime, Local, NaiveDate};

/// Clears both daily flags when the calendar date has advanced past
/// `last_checked_date`. Called with the same date twice, the second call is
/// a no-op. Every request entry point runs this before touching the state,
/// so a session resumed days later starts with fresh flags.
///
/// A day that passes without both users clicking does not break the streak;
/// only `reset_keeping_record` clears it. That matches the reference page.
pub fn rollover_if_new_day(state: &mut SparkState, today: NaiveDate) {
    if state.last_checked_date == today {
        return;
    }
    for user in &mut state.users {
        user.clicked_today = false;
    }
    state.last_checked_date = today;
}

/// Marks one user's daily click. A repeat click on the same day is ignored.
/// When the click completes the pair, the spark counter and the streak both
/// advance and the longest-streak record is folded in.
pub fn record_click(state: &mut SparkState, key: UserKey, now: DateTime<Local>) {
    let user = &mut state.users[key.index()];
    if user.clicked_today {
        return;
    }
    user.clicked_today = true;
    user.last_click = Some(now);

    if state.both_clicked_today() {
        state.spark_count += 1;
        state.current_streak += 1;
        state.longest_streak = state.longest_streak.max(state.current_streak);
    }
}

/// Fresh state carrying over only the longest-streak record and the user
/// names.
pub fn reset_keeping_record(state: &SparkState, now: DateTime<Local>) -> SparkState {
    SparkState {
        users: state.users.clone().map(|user| UserMark::new(user.name)),
        spark_count: 0,
        current_streak: 0,
        longest_streak: state.longest_streak,
        last_checked_date: now.date_naive(),
        started_at: now,
    }
}

pub fn flame_level(streak: u32) -> FlameLevel {
    match streak {
        0..=2 => FlameLevel::Level1,
        3..=6 => FlameLevel::Level2,
        7..=13 => FlameLevel::Level3,
        _ => FlameLevel::Level4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(year: i32, month: u32, day: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn fresh() -> (SparkState, DateTime<Local>) {
        let now = at(2026, 3, 9);
        (SparkState::new("Alice", "Bob", now), now)
    }

    #[test]
    fn single_click_does_not_spark() {
        let (mut state, now) = fresh();

        record_click(&mut state, UserKey::User1, now);

        assert!(state.user(UserKey::User1).clicked_today);
        assert!(!state.user(UserKey::User2).clicked_today);
        assert_eq!(state.user(UserKey::User1).last_click, Some(now));
        assert_eq!(state.spark_count, 0);
        assert_eq!(state.current_streak, 0);
    }

    #[test]
    fn second_click_of_the_day_sparks() {
        let (mut state, now) = fresh();

        record_click(&mut state, UserKey::User1, now);
        record_click(&mut state, UserKey::User2, now);

        assert!(state.both_clicked_today());
        assert_eq!(state.spark_count, 1);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.longest_streak, 1);
    }

    #[test]
    fn repeat_click_is_ignored() {
        let (mut state, now) = fresh();

        record_click(&mut state, UserKey::User1, now);
        let once = state.clone();
        record_click(&mut state, UserKey::User1, now + Duration::hours(1));

        assert_eq!(state, once);

        record_click(&mut state, UserKey::User2, now);
        record_click(&mut state, UserKey::User2, now);
        assert_eq!(state.spark_count, 1);
        assert_eq!(state.current_streak, 1);
    }

    #[test]
    fn rollover_clears_flags_and_keeps_counters() {
        let (mut state, now) = fresh();
        record_click(&mut state, UserKey::User1, now);
        record_click(&mut state, UserKey::User2, now);

        let tomorrow = now.date_naive() + Duration::days(1);
        rollover_if_new_day(&mut state, tomorrow);

        assert!(!state.user(UserKey::User1).clicked_today);
        assert!(!state.user(UserKey::User2).clicked_today);
        assert_eq!(state.spark_count, 1);
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.last_checked_date, tomorrow);
    }

    #[test]
    fn rollover_same_day_is_noop() {
        let (mut state, now) = fresh();
        record_click(&mut state, UserKey::User1, now);

        let before = state.clone();
        rollover_if_new_day(&mut state, now.date_naive());

        assert_eq!(state, before);
    }

    #[test]
    fn streak_grows_across_days() {
        let (mut state, start) = fresh();

        for day in 0..3 {
            let now = start + Duration::days(day);
            rollover_if_new_day(&mut state, now.date_naive());
            record_click(&mut state, UserKey::User1, now);
            record_click(&mut state, UserKey::User2, now);
        }

        assert_eq!(state.spark_count, 3);
        assert_eq!(state.current_streak, 3);
        assert_eq!(state.longest_streak, 3);
    }

    #[test]
    fn missed_day_does_not_break_streak() {
        let (mut state, start) = fresh();
        record_click(&mut state, UserKey::User1, start);
        record_click(&mut state, UserKey::User2, start);

        // skip a day entirely, then spark again
        let later = start + Duration::days(2);
        rollover_if_new_day(&mut state, later.date_naive());
        record_click(&mut state, UserKey::User1, later);
        record_click(&mut state, UserKey::User2, later);

        assert_eq!(state.current_streak, 2);
        assert_eq!(state.spark_count, 2);
    }

    #[test]
    fn one_sided_day_adds_nothing() {
        let (mut state, start) = fresh();
        record_click(&mut state, UserKey::User1, start);
        record_click(&mut state, UserKey::User2, start);

        let next = start + Duration::days(1);
        rollover_if_new_day(&mut state, next.date_naive());
        record_click(&mut state, UserKey::User1, next);

        assert_eq!(state.spark_count, 1);
        assert_eq!(state.current_streak, 1);
    }

    #[test]
    fn longest_streak_never_below_current() {
        let (mut state, start) = fresh();

        for day in 0..5 {
            let now = start + Duration::days(day);
            rollover_if_new_day(&mut state, now.date_naive());
            record_click(&mut state, UserKey::User1, now);
            assert!(state.longest_streak >= state.current_streak);
            record_click(&mut state, UserKey::User2, now);
            assert!(state.longest_streak >= state.current_streak);
        }
    }

    #[test]
    fn reset_keeps_longest_streak_only() {
        let (mut state, start) = fresh();
        state.spark_count = 9;
        state.current_streak = 3;
        state.longest_streak = 5;
        record_click(&mut state, UserKey::User1, start);

        let later = start + Duration::days(10);
        let reset = reset_keeping_record(&state, later);

        assert_eq!(reset.longest_streak, 5);
        assert_eq!(reset.spark_count, 0);
        assert_eq!(reset.current_streak, 0);
        assert!(!reset.user(UserKey::User1).clicked_today);
        assert_eq!(reset.user(UserKey::User1).last_click, None);
        assert_eq!(reset.user(UserKey::User1).name, "Alice");
        assert_eq!(reset.user(UserKey::User2).name, "Bob");
        assert_eq!(reset.last_checked_date, later.date_naive());
        assert_eq!(reset.started_at, later);
    }

    #[test]
    fn flame_level_boundaries() {
        assert_eq!(flame_level(0), FlameLevel::Level1);
        assert_eq!(flame_level(2), FlameLevel::Level1);
        assert_eq!(flame_level(3), FlameLevel::Level2);
        assert_eq!(flame_level(6), FlameLevel::Level2);
        assert_eq!(flame_level(7), FlameLevel::Level3);
        assert_eq!(flame_level(13), FlameLevel::Level3);
        assert_eq!(flame_level(14), FlameLevel::Level4);
        assert_eq!(flame_level(100), FlameLevel::Level4);
    }

    #[test]
    fn user_key_parse() {
        assert_eq!(UserKey::parse("user1"), Some(UserKey::User1));
        assert_eq!(UserKey::parse("user2"), Some(UserKey::User2));
        assert_eq!(UserKey::parse("user3"), None);
        assert_eq!(UserKey::parse(""), None);
    }
}
