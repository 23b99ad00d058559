use crate::model::{Activity, EXERCISE, FOOD};

/// Calorie totals over a list of activities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalorieSummary {
    /// Sum of food calories.
    pub consumed: f64,
    /// Sum of exercise calories.
    pub burned: f64,
    /// `consumed - burned`.
    pub net: f64,
}

impl CalorieSummary {
    /// Totals food and exercise calories. Other categories are not counted.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total = |category: u32| -> f64 {
            activities
                .iter()
                .filter(|a| a.category == category)
                .map(|a| a.calories)
                .sum()
        };
        let consumed = total(FOOD);
        let burned = total(EXERCISE);
        Self {
            consumed,
            burned,
            net: consumed - burned,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn make(category: u32, calories: f64) -> Activity {
        Activity {
            id: crate::model::fresh_id(),
            category,
            name: "x".into(),
            calories,
        }
    }

    #[test]
    fn empty_list_is_zero() {
        assert_eq!(
            CalorieSummary::from_activities(&[]),
            CalorieSummary::default()
        );
    }

    #[test]
    fn totals_by_category() {
        let activities = vec![make(FOOD, 450.0), make(FOOD, 150.0), make(EXERCISE, 200.0)];
        let summary = CalorieSummary::from_activities(&activities);
        assert_eq!(summary.consumed, 600.0);
        assert_eq!(summary.burned, 200.0);
        assert_eq!(summary.net, 400.0);
    }

    #[test]
    fn net_can_go_negative() {
        let summary = CalorieSummary::from_activities(&[make(EXERCISE, 300.0)]);
        assert_eq!(summary.net, -300.0);
    }

    #[test]
    fn unknown_categories_ignored() {
        let summary = CalorieSummary::from_activities(&[make(9, 1000.0), make(FOOD, 10.0)]);
        assert_eq!(summary.consumed, 10.0);
        assert_eq!(summary.burned, 0.0);
    }

    #[quickcheck]
    fn net_is_consumed_minus_burned(entries: Vec<(bool, u16)>) -> bool {
        let activities: Vec<Activity> = entries
            .iter()
            .map(|&(food, cal)| make(if food { FOOD } else { EXERCISE }, f64::from(cal)))
            .collect();
        let summary = CalorieSummary::from_activities(&activities);
        summary.net == summary.consumed - summary.burned
    }
}
