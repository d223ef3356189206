use anyhow::Result;
use calorie_tracker_backend::{ActivityAction, Backend, BackendConfig, JsonFileStore, KeyValueStore};
use shared::{Activity, ActivityCategory, ActivityFormConfig, CalorieSummary};
use tempfile::TempDir;

fn config_in(temp_dir: &TempDir) -> BackendConfig {
    BackendConfig {
        data_directory: temp_dir.path().join("data"),
        activities_key: "activities".to_string(),
        form: ActivityFormConfig::default(),
    }
}

fn summary(consumed: i64, burned: i64, net: i64) -> CalorieSummary {
    CalorieSummary {
        calories_consumed: consumed,
        calories_burned: burned,
        net_calories: net,
    }
}

#[test]
fn test_track_edit_delete_and_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut backend = Backend::with_config(config_in(&temp_dir))?;
    assert!(backend.activity_store.is_empty());

    let salad = Activity {
        id: "a".to_string(),
        category: ActivityCategory::Food,
        name: "Salad".to_string(),
        calories: 300,
    };
    let running = Activity {
        id: "b".to_string(),
        category: ActivityCategory::Exercise,
        name: "Running".to_string(),
        calories: 200,
    };

    backend.activity_store.dispatch(ActivityAction::save(salad))?;
    assert_eq!(backend.activity_store.summary(), summary(300, 0, 300));

    backend.activity_store.dispatch(ActivityAction::save(running))?;
    assert_eq!(backend.activity_store.summary(), summary(300, 200, 100));

    backend.activity_store.dispatch(ActivityAction::delete("a"))?;
    assert_eq!(backend.activity_store.summary(), summary(0, 200, -200));

    backend.activity_store.dispatch(ActivityAction::Restart)?;
    assert_eq!(backend.activity_store.summary(), summary(0, 0, 0));
    assert!(backend.activity_store.is_empty());
    assert_eq!(backend.activity_store.active_id(), None);
    Ok(())
}

#[test]
fn test_form_driven_edit_survives_restart_of_process() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let edited_id = {
        let mut backend = Backend::with_config(config_in(&temp_dir))?;
        let form = backend.activity_form_service.clone();

        // Add a meal through the form
        let mut draft = form.new_draft();
        form.change_name(&mut draft, "Orange Juice");
        form.change_calories(&mut draft, "120").expect("valid calories");
        let command = form.submit(&draft, backend.activity_store.is_editing()).expect("valid draft");
        assert_eq!(command.message, "Activity added successfully");
        backend.activity_store.dispatch(command.action)?;

        // Add a workout
        let mut workout = form.new_draft();
        form.change_category(&mut workout, ActivityCategory::Exercise);
        form.change_name(&mut workout, "Biking");
        form.change_calories(&mut workout, "400").expect("valid calories");
        let command = form.submit(&workout, false).expect("valid draft");
        backend.activity_store.dispatch(command.action)?;

        // Edit the meal in place
        backend.activity_store.dispatch(ActivityAction::select(draft.id.clone()))?;
        let mut editing = form.draft_for_edit(backend.activity_store.state());
        assert_eq!(editing.name, "Orange Juice");
        form.change_calories(&mut editing, "180").expect("valid calories");
        let command = form.submit(&editing, backend.activity_store.is_editing()).expect("valid draft");
        assert_eq!(command.message, "Activity edited successfully");
        backend.activity_store.dispatch(command.action)?;
        backend.activity_store.dispatch(form.cancel_edit().action)?;

        assert_eq!(backend.activity_store.activities().len(), 2);
        assert_eq!(backend.activity_store.activities()[0].calories, 180);
        assert_eq!(backend.activity_store.summary(), summary(180, 400, -220));
        draft.id
    };

    // A new backend over the same directory sees the persisted list
    let backend = Backend::with_config(config_in(&temp_dir))?;
    let activities = backend.activity_store.activities();
    assert_eq!(activities.len(), 2);
    assert_eq!(activities[0].id, edited_id);
    assert_eq!(activities[0].calories, 180);
    assert_eq!(activities[1].name, "Biking");
    assert_eq!(backend.activity_store.active_id(), None);
    assert_eq!(backend.activity_store.summary(), summary(180, 400, -220));
    Ok(())
}

#[test]
fn test_corrupted_file_starts_empty_and_is_replaced() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);

    let file_store = JsonFileStore::new(&config.data_directory)?;
    file_store.set("activities", "[{\"id\": 12")?;

    let mut backend = Backend::with_config(config)?;
    assert!(backend.activity_store.is_empty());

    let outcome = backend
        .activity_store
        .dispatch(ActivityAction::save(Activity::new(ActivityCategory::Food, "Toast", 90)))?;
    assert!(outcome.is_persisted());

    let raw = file_store.get("activities")?.expect("activities written");
    let stored: Vec<Activity> = serde_json::from_str(&raw)?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Toast");
    Ok(())
}
