//! Pure badge eligibility evaluation.
//!
//! Maps a domain counter to at most one badge descriptor via static,
//! exact-match threshold tables. The tables are sparse on purpose: the gaps
//! pace the gamification, they are not missing entries. No I/O happens here;
//! everything is deterministic and table-testable.

use crate::domain::models::BadgeSpec;

/// Which counter a value was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterKind {
    GoalsCompleted,
    WorkoutsLogged,
    PlansCreated,
}

/// Awarded once, on the very first goal a user sets (completed or not).
pub const GOAL_SETTER: BadgeSpec = BadgeSpec {
    name: "Goal Setter",
    icon_url: "/images/GoalSetter.png",
};

const GOALS_COMPLETED: &[(u64, BadgeSpec)] = &[
    (1, BadgeSpec { name: "First Goal Completed", icon_url: "/images/FirstGoalCompleted.png" }),
    (5, BadgeSpec { name: "Goal Master", icon_url: "/images/GoalMaster.png" }),
    (10, BadgeSpec { name: "Goal Champion", icon_url: "/images/GoalChampion.png" }),
    (25, BadgeSpec { name: "Goal Legend", icon_url: "/images/GoalLegend.png" }),
    (50, BadgeSpec { name: "Goal Hero", icon_url: "/images/GoalHero.png" }),
    (100, BadgeSpec { name: "Goal God", icon_url: "/images/GoalGod.png" }),
];

const WORKOUTS_LOGGED: &[(u64, BadgeSpec)] = &[
    (1, BadgeSpec { name: "First Workout", icon_url: "/images/FirstWorkout.png" }),
    (10, BadgeSpec { name: "Workout Beginner", icon_url: "/images/WorkoutBeginner.png" }),
    (50, BadgeSpec { name: "Workout Warrior", icon_url: "/images/WorkoutWarrior.png" }),
    (100, BadgeSpec { name: "Workout Champion", icon_url: "/images/WorkoutChampion.png" }),
    (500, BadgeSpec { name: "Workout Legend", icon_url: "/images/WorkoutLegend.png" }),
];

const PLANS_CREATED: &[(u64, BadgeSpec)] =
    &[(1, BadgeSpec { name: "Plan Creator", icon_url: "/images/PlanCreator.png" })];

const fn table_for(kind: CounterKind) -> &'static [(u64, BadgeSpec)] {
    match kind {
        CounterKind::GoalsCompleted => GOALS_COMPLETED,
        CounterKind::WorkoutsLogged => WORKOUTS_LOGGED,
        CounterKind::PlansCreated => PLANS_CREATED,
    }
}

/// Exact-match lookup: returns a descriptor only when `value` is a table key.
pub fn evaluate(kind: CounterKind, value: u64) -> Option<BadgeSpec> {
    table_for(kind)
        .iter()
        .find(|(threshold, _)| *threshold == value)
        .map(|(_, spec)| *spec)
}

/// Evaluate both goal counters for one user action.
///
/// "Goal Setter" fires on the total goal count (a goal merely set, not
/// completed) and takes priority over the completion table, so at most one
/// descriptor surfaces per action even when both tables match.
pub fn evaluate_goal_progress(total_goals: u64, completed_goals: u64) -> Option<BadgeSpec> {
    if total_goals == 1 {
        return Some(GOAL_SETTER);
    }
    evaluate(CounterKind::GoalsCompleted, completed_goals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_completion_thresholds_match_exactly() {
        let cases = [
            (1, Some("First Goal Completed")),
            (5, Some("Goal Master")),
            (10, Some("Goal Champion")),
            (25, Some("Goal Legend")),
            (50, Some("Goal Hero")),
            (100, Some("Goal God")),
            (0, None),
            (6, None),
            (11, None),
            (101, None),
            (1000, None),
        ];
        for (value, expected) in cases {
            let got = evaluate(CounterKind::GoalsCompleted, value).map(|s| s.name);
            assert_eq!(got, expected, "goals_completed={value}");
        }
    }

    #[test]
    fn workout_thresholds_match_exactly() {
        let cases = [
            (1, Some("First Workout")),
            (10, Some("Workout Beginner")),
            (50, Some("Workout Warrior")),
            (100, Some("Workout Champion")),
            (500, Some("Workout Legend")),
            (0, None),
            (2, None),
            (99, None),
            (501, None),
        ];
        for (value, expected) in cases {
            let got = evaluate(CounterKind::WorkoutsLogged, value).map(|s| s.name);
            assert_eq!(got, expected, "workouts_logged={value}");
        }
    }

    #[test]
    fn plan_threshold_fires_only_on_first_plan() {
        assert_eq!(
            evaluate(CounterKind::PlansCreated, 1).map(|s| s.name),
            Some("Plan Creator")
        );
        assert_eq!(evaluate(CounterKind::PlansCreated, 0), None);
        assert_eq!(evaluate(CounterKind::PlansCreated, 2), None);
    }

    #[test]
    fn goal_setter_takes_priority_over_completion_table() {
        // First goal ever set and completed in the same action: the setter
        // badge wins, only one descriptor surfaces.
        let spec = evaluate_goal_progress(1, 1).unwrap();
        assert_eq!(spec.name, "Goal Setter");
    }

    #[test]
    fn completion_table_applies_once_past_the_first_goal() {
        assert_eq!(
            evaluate_goal_progress(7, 5).map(|s| s.name),
            Some("Goal Master")
        );
        assert_eq!(evaluate_goal_progress(7, 6), None);
        assert_eq!(evaluate_goal_progress(2, 0), None);
    }

    #[test]
    fn icons_follow_the_static_image_paths() {
        let spec = evaluate(CounterKind::GoalsCompleted, 10).unwrap();
        assert_eq!(spec.icon_url, "/images/GoalChampion.png");
        assert_eq!(GOAL_SETTER.icon_url, "/images/GoalSetter.png");
    }
}
