use camp_core::db::open_db_in_memory;
use camp_core::{
    ActivityService, CamperService, EntityKind, ServiceError, SignupService,
    SqliteActivityRepository, SqliteCamperRepository, SqliteSignupRepository, ValidationError,
};
use rusqlite::Connection;
use serde_json::json;

fn camper_service(
    conn: &Connection,
) -> CamperService<SqliteCamperRepository<'_>, SqliteSignupRepository<'_>> {
    CamperService::new(
        SqliteCamperRepository::new(conn),
        SqliteSignupRepository::new(conn),
    )
}

fn activity_service(
    conn: &Connection,
) -> ActivityService<SqliteActivityRepository<'_>, SqliteSignupRepository<'_>> {
    ActivityService::new(
        SqliteActivityRepository::new(conn),
        SqliteSignupRepository::new(conn),
    )
}

fn signup_service(conn: &Connection) -> SignupService<SqliteSignupRepository<'_>> {
    SignupService::new(SqliteSignupRepository::new(conn))
}

#[test]
fn camper_detail_includes_owned_signups() {
    let conn = open_db_in_memory().unwrap();
    let campers = camper_service(&conn);

    let created = campers
        .create_camper(&json!({"name": "Al", "age": 10}))
        .unwrap();
    assert!(created.signups.is_empty());

    let activity = activity_service(&conn)
        .create_activity(&json!({"name": "Archery", "difficulty": 2}))
        .unwrap();
    signup_service(&conn)
        .create_signup(&json!({
            "time": 9,
            "camper_id": created.camper.id,
            "activity_id": activity.activity.id,
        }))
        .unwrap();

    let detail = campers.get_camper(created.camper.id).unwrap();
    assert_eq!(detail.signups.len(), 1);
    assert_eq!(detail.signups[0].activity.name, "Archery");
}

#[test]
fn patch_on_missing_camper_reports_not_found_before_validation() {
    let conn = open_db_in_memory().unwrap();

    let err = camper_service(&conn)
        .patch_camper(3, &json!({"age": 99}))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            kind: EntityKind::Camper,
            id: 3
        }
    ));
}

#[test]
fn invalid_patch_is_atomic() {
    let conn = open_db_in_memory().unwrap();
    let campers = camper_service(&conn);
    let created = campers
        .create_camper(&json!({"name": "Al", "age": 10}))
        .unwrap();

    let err = campers
        .patch_camper(created.camper.id, &json!({"name": "", "age": 12}))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let reloaded = campers.get_camper(created.camper.id).unwrap();
    assert_eq!(reloaded.camper.name, "Al");
    assert_eq!(reloaded.camper.age, 10);
}

#[test]
fn unknown_patch_field_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let campers = camper_service(&conn);
    let created = campers
        .create_camper(&json!({"name": "Al", "age": 10}))
        .unwrap();

    let err = campers
        .patch_camper(created.camper.id, &json!({"age": 11, "cabin": "B"}))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::UnknownField(_))
    ));
    assert_eq!(campers.get_camper(created.camper.id).unwrap().camper.age, 10);
}

#[test]
fn signup_with_unknown_camper_is_a_validation_error() {
    let conn = open_db_in_memory().unwrap();
    let activity = activity_service(&conn)
        .create_activity(&json!({"name": "Archery", "difficulty": 2}))
        .unwrap();

    let err = signup_service(&conn)
        .create_signup(&json!({
            "time": 9,
            "camper_id": 77,
            "activity_id": activity.activity.id,
        }))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::Constraint(_))
    ));
}

#[test]
fn deleting_activity_removes_its_signups() {
    let conn = open_db_in_memory().unwrap();
    let camper = camper_service(&conn)
        .create_camper(&json!({"name": "Al", "age": 10}))
        .unwrap();
    let activities = activity_service(&conn);
    let activity = activities
        .create_activity(&json!({"name": "Archery", "difficulty": 2}))
        .unwrap();
    let signups = signup_service(&conn);
    for time in [9, 10] {
        signups
            .create_signup(&json!({
                "time": time,
                "camper_id": camper.camper.id,
                "activity_id": activity.activity.id,
            }))
            .unwrap();
    }

    activities.delete_activity(activity.activity.id).unwrap();

    let err = activities.get_activity(activity.activity.id).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            kind: EntityKind::Activity,
            ..
        }
    ));
    assert!(camper_service(&conn)
        .get_camper(camper.camper.id)
        .unwrap()
        .signups
        .is_empty());
}
