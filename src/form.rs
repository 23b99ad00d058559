//! The activity form: a local draft kept in step with the activity list.
//!
//! [`ActivityForm`] owns one draft [`Activity`]. It reads the external
//! [`ActivityState`] through [`ActivityForm::sync`], which reloads the draft
//! only when the active id changes, and writes back only by dispatching
//! [`ActivityAction::SaveActivity`] from [`ActivityForm::submit`].

use tracing::{debug, warn};

use crate::model::{
    Activity, ActivityField, CategoryTable, FieldError, FieldValue, ValidationError,
    is_valid_activity, submit_label, validate_activity, with_field,
};
use crate::state::{ActivityAction, ActivityState};

/// Receiver for actions emitted by the form.
pub trait Dispatch {
    fn dispatch(&mut self, action: ActivityAction);
}

impl<F: FnMut(ActivityAction)> Dispatch for F {
    fn dispatch(&mut self, action: ActivityAction) {
        self(action)
    }
}

impl Dispatch for ActivityState {
    fn dispatch(&mut self, action: ActivityAction) {
        self.apply(action);
    }
}

/// Whether the form is creating a new entry or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the activity with this id.
    Edit(String),
}

/// Result of a [`ActivityForm::sync`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The active id did not change; the draft was left alone.
    Unchanged,
    /// The draft was replaced with the newly active activity.
    Loaded,
    /// The active id names no activity in the list; the draft was left alone.
    Missing,
    /// The active id was cleared; the draft was left alone.
    Cleared,
}

/// Form state for creating or editing one activity.
#[derive(Debug, Clone)]
pub struct ActivityForm {
    draft: Activity,
    categories: CategoryTable,
    synced_id: Option<String>,
}

impl ActivityForm {
    /// Creates a form with a fresh empty draft.
    pub fn new(categories: CategoryTable) -> Self {
        Self::with_draft(Activity::empty(), categories)
    }

    /// Creates a form starting from a specific draft.
    pub fn with_draft(draft: Activity, categories: CategoryTable) -> Self {
        Self {
            draft,
            categories,
            synced_id: None,
        }
    }

    /// The current draft.
    pub fn draft(&self) -> &Activity {
        &self.draft
    }

    /// The category options offered by the selector.
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Reloads the draft if the external active id changed since the last call.
    pub fn sync(&mut self, state: &ActivityState) -> SyncOutcome {
        let active = state.active_id();
        if active == self.synced_id.as_deref() {
            return SyncOutcome::Unchanged;
        }
        self.synced_id = active.map(str::to_string);

        let Some(id) = active else {
            debug!("active activity cleared");
            return SyncOutcome::Cleared;
        };
        match state.find(id) {
            Some(activity) => {
                debug!(id, "loaded activity for editing");
                self.draft = activity.clone();
                SyncOutcome::Loaded
            }
            None => {
                warn!(id, "active id does not match any activity");
                SyncOutcome::Missing
            }
        }
    }

    /// Applies a raw input value to one field of the draft.
    ///
    /// Numeric fields are coerced with [`ActivityField::parser`]. A category
    /// missing from the table is ignored.
    pub fn handle_change(&mut self, field: ActivityField, raw: &str) {
        let value = field.parser().parse(raw);
        if field == ActivityField::Category
            && let FieldValue::Number(n) = value
            && !self.is_known_category(n)
        {
            debug!(raw, "ignoring unknown category");
            return;
        }
        self.draft = with_field(&self.draft, field, value);
    }

    /// Like [`handle_change`](Self::handle_change), but resolves the field from
    /// its input identifier (`category`, `name`, `calories`).
    pub fn handle_change_by_name(&mut self, field: &str, raw: &str) -> Result<(), FieldError> {
        let field = field.parse::<ActivityField>()?;
        self.handle_change(field, raw);
        Ok(())
    }

    /// Selects the category after (or before) the current one.
    pub fn cycle_category(&mut self, forward: bool) {
        self.draft.category = self.categories.cycle(self.draft.category, forward);
    }

    /// Returns `true` if the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        is_valid_activity(&self.draft)
    }

    /// Returns the first reason the draft cannot be submitted, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_activity(&self.draft)
    }

    /// Label for the submit control, e.g. `Save Food`.
    pub fn submit_label(&self) -> String {
        submit_label(self.draft.category, &self.categories)
    }

    /// Whether the draft is the activity currently selected in `state`.
    pub fn mode(&self, state: &ActivityState) -> FormMode {
        match state.active_id() {
            Some(id) if id == self.draft.id => FormMode::Edit(id.to_string()),
            _ => FormMode::Create,
        }
    }

    /// Dispatches the draft and resets to a fresh draft.
    ///
    /// An invalid draft is neither dispatched nor reset. Returns the
    /// submitted snapshot on success.
    pub fn submit<D: Dispatch + ?Sized>(&mut self, dispatch: &mut D) -> Option<Activity> {
        if let Err(e) = self.validate() {
            debug!(error = %e, "submit rejected");
            return None;
        }
        let activity = std::mem::take(&mut self.draft);
        dispatch.dispatch(ActivityAction::SaveActivity {
            activity: activity.clone(),
        });
        Some(activity)
    }

    fn is_known_category(&self, n: f64) -> bool {
        self.categories.iter().any(|c| f64::from(c.id) == n)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_debug_snapshot;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::{EXERCISE, FOOD};

    fn make(id: &str, category: u32, name: &str, calories: f64) -> Activity {
        Activity {
            id: id.into(),
            category,
            name: name.into(),
            calories,
        }
    }

    fn form_with(draft: Activity) -> ActivityForm {
        ActivityForm::with_draft(draft, CategoryTable::default())
    }

    fn filled() -> ActivityForm {
        form_with(make("a", FOOD, "Salad", 450.0))
    }

    fn seeded() -> ActivityState {
        ActivityState::with_activities(vec![
            make("x", FOOD, "Toast", 120.0),
            make("y", EXERCISE, "Swim", 500.0),
        ])
    }

    fn select(state: &mut ActivityState, id: &str) {
        state.apply(ActivityAction::SetActiveId { id: id.into() });
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_with_empty_food_draft() {
            let form = ActivityForm::new(CategoryTable::default());
            assert_eq!(form.draft().category, FOOD);
            assert_eq!(form.draft().name, "");
            assert_eq!(form.draft().calories, 0.0);
            assert!(!form.draft().id.is_empty());
        }

        #[test]
        fn new_forms_get_distinct_ids() {
            let a = ActivityForm::new(CategoryTable::default());
            let b = ActivityForm::new(CategoryTable::default());
            assert_ne!(a.draft().id, b.draft().id);
        }

        #[test]
        fn starts_invalid() {
            assert!(!ActivityForm::new(CategoryTable::default()).is_valid());
        }
    }

    mod changes {
        use super::*;

        #[test]
        fn name_stored_verbatim() {
            let mut form = filled();
            form.handle_change(ActivityField::Name, "  Green salad ");
            assert_eq!(form.draft().name, "  Green salad ");
        }

        #[test]
        fn calories_coerced() {
            let mut form = filled();
            form.handle_change(ActivityField::Calories, "320");
            assert_eq!(form.draft().calories, 320.0);
        }

        #[test]
        fn blank_calories_become_zero() {
            let mut form = filled();
            form.handle_change(ActivityField::Calories, "");
            assert_eq!(form.draft().calories, 0.0);
            assert!(!form.is_valid());
        }

        #[test]
        fn category_coerced() {
            let mut form = filled();
            form.handle_change(ActivityField::Category, "2");
            assert_eq!(form.draft().category, EXERCISE);
        }

        #[test]
        fn unknown_category_ignored() {
            let mut form = filled();
            form.handle_change(ActivityField::Category, "9");
            assert_eq!(form.draft(), &make("a", FOOD, "Salad", 450.0));
        }

        #[test]
        fn blank_category_ignored() {
            let mut form = filled();
            form.handle_change(ActivityField::Category, "");
            assert_eq!(form.draft().category, FOOD);
        }

        #[test]
        fn by_name_resolves_field() {
            let mut form = filled();
            form.handle_change_by_name("calories", "99").unwrap();
            assert_eq!(form.draft().calories, 99.0);
        }

        #[test]
        fn by_name_rejects_unknown_field() {
            let mut form = filled();
            assert_eq!(
                form.handle_change_by_name("id", "b"),
                Err(FieldError::UnknownField("id".into()))
            );
            assert_eq!(form.draft().id, "a");
        }

        #[test]
        fn cycle_category_wraps() {
            let mut form = filled();
            form.cycle_category(true);
            assert_eq!(form.draft().category, EXERCISE);
            form.cycle_category(true);
            assert_eq!(form.draft().category, FOOD);
            form.cycle_category(false);
            assert_eq!(form.draft().category, EXERCISE);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn valid_submit_dispatches_snapshot() {
            let mut form = filled();
            let mut dispatched = Vec::new();
            let submitted = form.submit(&mut |a: ActivityAction| dispatched.push(a));
            assert_eq!(submitted, Some(make("a", FOOD, "Salad", 450.0)));
            assert_eq!(
                dispatched,
                vec![ActivityAction::SaveActivity {
                    activity: make("a", FOOD, "Salad", 450.0)
                }]
            );
        }

        #[test]
        fn valid_submit_resets_draft() {
            let mut form = form_with(make("a", EXERCISE, "Run", 300.0));
            form.submit(&mut |_: ActivityAction| {});
            let draft = form.draft();
            assert_eq!(draft.category, FOOD);
            assert_eq!(draft.name, "");
            assert_eq!(draft.calories, 0.0);
            assert_ne!(draft.id, "a");
        }

        #[test]
        fn invalid_submit_dispatches_nothing() {
            let mut form = form_with(make("a", FOOD, "   ", 450.0));
            let mut count = 0;
            assert_eq!(form.submit(&mut |_: ActivityAction| count += 1), None);
            assert_eq!(count, 0);
            assert_eq!(form.draft(), &make("a", FOOD, "   ", 450.0));
        }

        #[test]
        fn zero_calories_blocks_submit() {
            let mut form = form_with(make("a", FOOD, "Salad", 0.0));
            let mut count = 0;
            form.submit(&mut |_: ActivityAction| count += 1);
            assert_eq!(count, 0);
            assert_eq!(form.validate(), Err(ValidationError::NonPositiveCalories));
        }

        #[test]
        fn submit_into_state_appends() {
            let mut state = seeded();
            let mut form = filled();
            form.submit(&mut state);
            assert_eq!(state.activities().len(), 3);
            assert_eq!(state.find("a"), Some(&make("a", FOOD, "Salad", 450.0)));
        }

        #[test]
        fn dispatched_payload_shape() {
            let mut form = filled();
            let mut dispatched = None;
            form.submit(&mut |a: ActivityAction| dispatched = Some(a));
            assert_debug_snapshot!(dispatched.unwrap(), @r#"
            SaveActivity {
                activity: Activity {
                    id: "a",
                    category: 1,
                    name: "Salad",
                    calories: 450.0,
                },
            }
            "#);
        }
    }

    mod sync {
        use super::*;

        #[test]
        fn no_active_id_is_unchanged() {
            let mut form = filled();
            assert_eq!(form.sync(&seeded()), SyncOutcome::Unchanged);
            assert_eq!(form.draft().id, "a");
        }

        #[test]
        fn loads_active_activity() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "y");
            assert_eq!(form.sync(&state), SyncOutcome::Loaded);
            assert_eq!(form.draft(), &make("y", EXERCISE, "Swim", 500.0));
        }

        #[test]
        fn edits_survive_repeated_sync() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "y");
            form.sync(&state);
            form.handle_change(ActivityField::Name, "Swim laps");
            assert_eq!(form.sync(&state), SyncOutcome::Unchanged);
            assert_eq!(form.sync(&state), SyncOutcome::Unchanged);
            assert_eq!(form.draft().name, "Swim laps");
            assert_eq!(form.draft().id, "y");
        }

        #[test]
        fn switching_active_reloads() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "x");
            form.sync(&state);
            select(&mut state, "y");
            assert_eq!(form.sync(&state), SyncOutcome::Loaded);
            assert_eq!(form.draft().id, "y");
        }

        #[test]
        fn missing_id_keeps_draft_and_does_not_retry() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "nope");
            assert_eq!(form.sync(&state), SyncOutcome::Missing);
            assert_eq!(form.draft(), &make("a", FOOD, "Salad", 450.0));
            assert_eq!(form.sync(&state), SyncOutcome::Unchanged);
        }

        #[test]
        fn clearing_active_keeps_draft() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "x");
            form.sync(&state);
            form.handle_change(ActivityField::Calories, "130");
            state.apply(ActivityAction::DeleteActivity { id: "x".into() });
            assert_eq!(form.sync(&state), SyncOutcome::Cleared);
            assert_eq!(form.draft().calories, 130.0);
        }

        #[test]
        fn reselecting_after_save_reloads() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "x");
            form.sync(&state);
            form.handle_change(ActivityField::Name, "Toast with jam");
            form.submit(&mut state);
            assert_eq!(form.sync(&state), SyncOutcome::Cleared);
            select(&mut state, "x");
            assert_eq!(form.sync(&state), SyncOutcome::Loaded);
            assert_eq!(form.draft().name, "Toast with jam");
        }
    }

    mod mode {
        use super::*;

        #[test]
        fn create_without_selection() {
            assert_eq!(filled().mode(&seeded()), FormMode::Create);
        }

        #[test]
        fn edit_after_loading() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "x");
            form.sync(&state);
            assert_eq!(form.mode(&state), FormMode::Edit("x".into()));
        }

        #[test]
        fn create_when_selection_missing() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "nope");
            form.sync(&state);
            assert_eq!(form.mode(&state), FormMode::Create);
        }

        #[test]
        fn edit_save_replaces_in_place() {
            let mut state = seeded();
            let mut form = filled();
            select(&mut state, "y");
            form.sync(&state);
            form.handle_change(ActivityField::Calories, "650");
            form.submit(&mut state);
            assert_eq!(state.activities().len(), 2);
            assert_eq!(state.activities()[1], make("y", EXERCISE, "Swim", 650.0));
            assert_eq!(state.active_id(), None);
            assert_eq!(form.mode(&state), FormMode::Create);
        }
    }

    #[test]
    fn submit_label_follows_category() {
        let mut form = filled();
        assert_eq!(form.submit_label(), "Save Food");
        form.handle_change(ActivityField::Category, "2");
        assert_eq!(form.submit_label(), "Save Exercise");
    }

    #[test]
    fn salad_scenario() {
        let mut form = form_with(Activity::empty_with_id("a"));
        form.handle_change(ActivityField::Name, "Salad");
        form.handle_change(ActivityField::Calories, "450");
        assert_eq!(form.draft(), &make("a", FOOD, "Salad", 450.0));
        assert!(form.is_valid());

        let mut dispatched = Vec::new();
        form.submit(&mut |a: ActivityAction| dispatched.push(a));
        assert_eq!(
            dispatched,
            vec![ActivityAction::SaveActivity {
                activity: make("a", FOOD, "Salad", 450.0)
            }]
        );
        assert_eq!(form.draft().category, FOOD);
        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().calories, 0.0);
        assert_ne!(form.draft().id, "a");
    }

    #[quickcheck]
    fn single_field_edit_preserves_others(which: u8, raw: String) -> bool {
        let field = ActivityField::all()[usize::from(which) % ActivityField::all().len()];
        let mut form = filled();
        let before = form.draft().clone();
        form.handle_change(field, &raw);
        let after = form.draft();
        after.id == before.id
            && (field == ActivityField::Category || after.category == before.category)
            && (field == ActivityField::Name || after.name == before.name)
            && (field == ActivityField::Calories || after.calories == before.calories)
    }
}
