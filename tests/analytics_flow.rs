//! End-to-end flow: build a workspace the way the quoting application does,
//! then check that the derived figures agree with each other.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use gantt_analytics::{
    io, DependencyError, GanttProject, NewTask, ProjectWorkspace, TaskPatch, Weighting,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn workspace() -> ProjectWorkspace {
    let project = GanttProject::new(Uuid::new_v4(), Uuid::new_v4(), "Ampliación Bodega");
    ProjectWorkspace::new(project)
}

#[test]
fn empty_project_renders_a_no_data_state() {
    let ws = workspace();
    assert_eq!(ws.progress(Weighting::Duration), 0.0);
    assert!(ws.daily_series(date(2024, 1, 1)).is_empty());
    assert!(ws.weekly_series(date(2024, 1, 1)).is_empty());
}

#[test]
fn progress_and_curve_agree_on_a_real_schedule() {
    let mut ws = workspace();
    let a = ws.add_task(NewTask::planned(
        "Movimiento de tierras",
        date(2024, 1, 1),
        date(2024, 1, 10),
    ));
    ws.patch_task(
        a,
        TaskPatch {
            progress: Some(100.0),
            ..TaskPatch::default()
        },
    );
    let b = ws.add_task(NewTask::planned(
        "Fundaciones",
        date(2024, 1, 5),
        date(2024, 1, 20),
    ));

    // Durations 9 and 15 days; only the finished task carries progress.
    assert_eq!(ws.progress(Weighting::Duration), 37.5);

    // Past the project end, the curve's last actual point must land on the
    // same figure.
    let series = ws.daily_series(date(2024, 2, 1));
    let last = series.last().unwrap();
    assert_eq!(last.date, date(2024, 1, 20));
    assert!((last.actual_pct - 37.5).abs() < 1e-9);
    assert_eq!(last.planned_pct, 100.0);

    // The dependency between the two is metadata; it changes no figure.
    ws.link(a, b, 2).unwrap();
    assert_eq!(ws.progress(Weighting::Duration), 37.5);
}

#[test]
fn unscheduled_tasks_report_progress_without_entering_the_curve() {
    let mut ws = workspace();
    let started = ws.add_task(NewTask {
        start_plan: Some(date(2024, 1, 1)),
        progress: 80.0,
        ..NewTask::named("Sin fecha de término")
    });

    // With only a start date the task has weight zero: the aggregate falls
    // back to the plain mean and the curve has nothing to place.
    assert_eq!(ws.progress(Weighting::Duration), 80.0);
    assert!(ws.daily_series(date(2024, 6, 1)).is_empty());

    // Once the end date arrives the same task drives both figures.
    ws.patch_task(
        started,
        TaskPatch {
            end_plan: Some(Some(date(2024, 1, 11))),
            ..TaskPatch::default()
        },
    );
    assert_eq!(ws.progress(Weighting::Duration), 80.0);
    assert_eq!(ws.daily_series(date(2024, 6, 1)).len(), 11);
}

#[test]
fn dependency_rejections_leave_the_workspace_untouched() {
    let mut ws = workspace();
    let a = ws.add_task(NewTask::named("a"));
    let b = ws.add_task(NewTask::named("b"));
    let c = ws.add_task(NewTask::named("c"));

    ws.link(a, b, 0).unwrap();
    ws.link(b, c, 0).unwrap();

    assert_eq!(ws.link(c, a, 0), Err(DependencyError::WouldCycle));
    assert_eq!(ws.link(a, a, 0), Err(DependencyError::SelfReference));
    assert_eq!(ws.dependencies().len(), 2);
}

#[test]
fn workspace_json_round_trip_preserves_everything() {
    let mut ws = workspace();
    let a = ws.add_task(NewTask::planned("a", date(2024, 1, 1), date(2024, 1, 10)));
    let b = ws.add_task(NewTask::named("b"));
    ws.link(a, b, -2).unwrap();

    let path = std::env::temp_dir().join(format!("gantt-{}.json", Uuid::new_v4()));
    io::save_workspace(&ws, &path).unwrap();
    let loaded = io::load_workspace(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.project, ws.project);
    assert_eq!(loaded.tasks(), ws.tasks());
    assert_eq!(loaded.dependencies(), ws.dependencies());
}

#[test]
fn schedule_csv_round_trips_through_import() {
    let mut ws = workspace();
    ws.add_task(NewTask {
        resource: Some("Cuadrilla 1".into()),
        progress: 45.0,
        ..NewTask::planned("Excavación", date(2024, 1, 1), date(2024, 1, 10))
    });
    ws.add_task(NewTask::named("Pendiente"));

    let path = std::env::temp_dir().join(format!("gantt-{}.csv", Uuid::new_v4()));
    io::export_schedule(ws.tasks(), &path).unwrap();
    let (imported, skipped) = io::import_tasks(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(skipped, 0);
    assert_eq!(imported.len(), 2);
    assert_eq!(imported[0].name, "Excavación");
    assert_eq!(imported[0].start_plan, Some(date(2024, 1, 1)));
    assert_eq!(imported[0].end_plan, Some(date(2024, 1, 10)));
    assert_eq!(imported[0].progress, 45.0);
    assert_eq!(imported[0].resource.as_deref(), Some("Cuadrilla 1"));
    assert_eq!(imported[1].start_plan, None);
}

#[test]
fn series_export_writes_one_row_per_point() {
    let mut ws = workspace();
    ws.add_task(NewTask::planned("t", date(2024, 1, 1), date(2024, 1, 8)));

    let series = ws.daily_series(date(2024, 1, 4));
    let path = std::env::temp_dir().join(format!("curve-{}.csv", Uuid::new_v4()));
    let written = io::export_series(&series, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written, series.len());
    // Header plus one line per day of the window.
    assert_eq!(content.lines().count(), series.len() + 1);
    assert!(content.lines().next().unwrap().starts_with("Date;"));
}
