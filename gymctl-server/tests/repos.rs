//! Repository behavior against a real store

mod common;

use chrono::NaiveDate;
use common::{TestStore, MEMBERS_ONLY_SQL};
use gymctl_server::db::{MemberDeletion, MemberRepo, WorkoutRepo};
use gymctl_server::models::{NewMember, NewWorkout};
use gymctl_server::DbError;

fn ana() -> NewMember {
    NewMember {
        name: "Ana".into(),
        email: "a@x.com".into(),
        phone: "555-0100".into(),
    }
}

fn jan_5(member_id: i64) -> NewWorkout {
    NewWorkout {
        member_id,
        date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_then_list_includes_member() {
    let store = TestStore::new().await;
    let repo = MemberRepo::new(&store.connections);

    let id = repo.create(&ana()).await.unwrap();
    let members = repo.list_all().await.unwrap();

    let found = members.iter().find(|m| m.member_id == id).expect("created member listed");
    assert_eq!(found.name, "Ana");
    assert_eq!(found.email, "a@x.com");
    assert_eq!(found.phone, "555-0100");

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_replaces_fields() {
    let store = TestStore::new().await;
    let repo = MemberRepo::new(&store.connections);

    let id = repo.create(&ana()).await.unwrap();
    let changed = NewMember {
        name: "Ana Lima".into(),
        email: "ana@lima.dev".into(),
        phone: "555-0199".into(),
    };
    assert_eq!(repo.update(id, &changed).await.unwrap(), 1);

    let members = repo.list_all().await.unwrap();
    let found = members.iter().find(|m| m.member_id == id).unwrap();
    assert_eq!(found.name, "Ana Lima");
    assert_eq!(found.email, "ana@lima.dev");
    assert_eq!(found.phone, "555-0199");

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_of_unknown_member_still_succeeds() {
    let store = TestStore::new().await;
    let repo = MemberRepo::new(&store.connections);

    assert_eq!(repo.update(999, &ana()).await.unwrap(), 0);
    assert!(repo.list_all().await.unwrap().is_empty());

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_member_without_workouts() {
    let store = TestStore::new().await;
    let repo = MemberRepo::new(&store.connections);

    let id = repo.create(&ana()).await.unwrap();
    assert_eq!(repo.delete(id).await.unwrap(), MemberDeletion::Deleted);
    assert!(repo.get(id).await.unwrap().is_none());

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_member_with_workouts_is_blocked() {
    let store = TestStore::new().await;
    let members = MemberRepo::new(&store.connections);
    let workouts = WorkoutRepo::new(&store.connections);

    let id = members.create(&ana()).await.unwrap();
    workouts.create(&jan_5(id)).await.unwrap();

    assert_eq!(
        members.delete(id).await.unwrap(),
        MemberDeletion::Blocked { workouts: 1 }
    );
    assert!(members.get(id).await.unwrap().is_some());
    assert_eq!(store.workout_count(id).await, 1);

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_unknown_member_is_not_found() {
    let store = TestStore::new().await;
    let repo = MemberRepo::new(&store.connections);

    assert_eq!(repo.delete(999).await.unwrap(), MemberDeletion::NotFound);

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn existence_is_checked_before_dependents() {
    // No Workouts table: any dependency query would fail
    let store = TestStore::with_ddl(MEMBERS_ONLY_SQL).await;
    let repo = MemberRepo::new(&store.connections);

    assert_eq!(repo.delete(999).await.unwrap(), MemberDeletion::NotFound);

    let id = repo.create(&ana()).await.unwrap();
    let err = repo.delete(id).await.unwrap_err();
    assert!(matches!(err, DbError::Sqlx(_)));
    assert!(repo.get(id).await.unwrap().is_some());

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn workout_lifecycle() {
    let store = TestStore::new().await;
    let members = MemberRepo::new(&store.connections);
    let workouts = WorkoutRepo::new(&store.connections);

    let member_id = members.create(&ana()).await.unwrap();
    let workout_id = workouts.create(&jan_5(member_id)).await.unwrap();

    let listed = workouts.list_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].workout_id, workout_id);
    assert_eq!(listed[0].member_id, member_id);

    let moved = NewWorkout {
        member_id,
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    };
    assert_eq!(workouts.update(workout_id, &moved).await.unwrap(), 1);
    assert_eq!(
        workouts.get(workout_id).await.unwrap().unwrap().date,
        moved.date
    );

    assert_eq!(workouts.delete(workout_id).await.unwrap(), 1);
    assert_eq!(workouts.delete(workout_id).await.unwrap(), 0);
    assert_eq!(members.delete(member_id).await.unwrap(), MemberDeletion::Deleted);

    store.teardown().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn workout_for_unknown_member_hits_store_constraint() {
    let store = TestStore::new().await;
    let workouts = WorkoutRepo::new(&store.connections);

    // The fixture schema has the foreign key; the application does not check
    let err = workouts.create(&jan_5(424242)).await.unwrap_err();
    assert!(matches!(err, DbError::Sqlx(_)));

    store.teardown().await;
}
