use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use ace_core::DayStatus;
use ace_core::model::{
    Exercise, ExerciseId, ExerciseType, LearningPlan, PlanId, PlanStatus, UserId,
};
use ace_core::time::fixed_now;
use async_trait::async_trait;
use chrono::Duration;
use reqwest::StatusCode;
use services::{ApiError, LoadError, RoadmapService, RoadmapSource};

#[derive(Default)]
struct FakeSource {
    plans: Vec<LearningPlan>,
    fail_plans: bool,
    missing: HashSet<u64>,
    fail_once: Mutex<HashSet<u64>>,
    plan_calls: AtomicUsize,
    exercise_calls: AtomicUsize,
}

#[async_trait]
impl RoadmapSource for FakeSource {
    async fn learning_plans(&self, _user_id: UserId) -> Result<Vec<LearningPlan>, ApiError> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_plans {
            return Err(ApiError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(self.plans.clone())
    }

    async fn exercise(&self, exercise_id: ExerciseId) -> Result<Exercise, ApiError> {
        self.exercise_calls.fetch_add(1, Ordering::SeqCst);
        if self.missing.contains(&exercise_id.value()) {
            return Err(ApiError::HttpStatus(StatusCode::NOT_FOUND));
        }
        if self.fail_once.lock().unwrap().remove(&exercise_id.value()) {
            return Err(ApiError::HttpStatus(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(Exercise {
            id: exercise_id,
            title: format!("Exercise {exercise_id}"),
            description: None,
            exercise_type: ExerciseType::Listening,
            topic: "Travel".into(),
            status: None,
            materials: None,
            questions: None,
        })
    }
}

fn plans(n: u64) -> Vec<LearningPlan> {
    (1..=n)
        .map(|i| {
            let start = fixed_now() + Duration::days(i as i64);
            LearningPlan {
                plan_id: PlanId::new(i),
                exercise_id: ExerciseId::new(100 + i),
                status: if i == 1 {
                    PlanStatus::Completed
                } else {
                    PlanStatus::Pending
                },
                start_time: start,
                end_time: start + Duration::hours(2),
            }
        })
        .collect()
}

#[tokio::test]
async fn missing_identity_short_circuits_without_requests() {
    let source = Arc::new(FakeSource {
        plans: plans(3),
        ..FakeSource::default()
    });
    let service = RoadmapService::new(source.clone());

    let err = service.load(None).await.unwrap_err();
    assert!(matches!(err, LoadError::NotSignedIn));
    assert!(!err.is_retryable());
    assert_eq!(source.plan_calls.load(Ordering::SeqCst), 0);
    assert_eq!(source.exercise_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn plan_fetch_failure_is_retryable_load_error() {
    let source = Arc::new(FakeSource {
        fail_plans: true,
        ..FakeSource::default()
    });
    let service = RoadmapService::new(source.clone());

    let err = service.load(Some(UserId::new(1))).await.unwrap_err();
    assert!(matches!(err, LoadError::Api(ApiError::HttpStatus(_))));
    assert!(err.is_retryable());
    assert_eq!(source.exercise_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn one_failed_exercise_lookup_does_not_abort() {
    let source = Arc::new(FakeSource {
        plans: plans(10),
        missing: HashSet::from([104]),
        ..FakeSource::default()
    });
    let service = RoadmapService::new(source.clone());

    let roadmap = service.load(Some(UserId::new(1))).await.unwrap();
    assert_eq!(roadmap.total_days(), 10);
    assert_eq!(roadmap.days().filter(|d| d.exercise.is_some()).count(), 9);

    let day_four = roadmap.days().nth(3).unwrap();
    assert!(day_four.exercise.is_none());
    assert_eq!(day_four.topic, "Bài 4");
    assert_eq!(source.exercise_calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn nine_plans_make_two_weeks() {
    let service = RoadmapService::new(Arc::new(FakeSource {
        plans: plans(9),
        ..FakeSource::default()
    }));

    let roadmap = service.load(Some(UserId::new(1))).await.unwrap();
    let sizes: Vec<usize> = roadmap.weeks().iter().map(|w| w.days.len()).collect();
    assert_eq!(sizes, vec![7, 2]);
    assert_eq!(roadmap.completed_days(), 1);
    assert_eq!(roadmap.progress_percentage(), 11);
    assert_eq!(roadmap.days().next().unwrap().status, DayStatus::Completed);
}

#[tokio::test]
async fn no_plans_is_an_empty_roadmap_not_an_error() {
    let service = RoadmapService::new(Arc::new(FakeSource::default()));
    let roadmap = service.load(Some(UserId::new(1))).await.unwrap();
    assert!(roadmap.is_empty());
    assert_eq!(roadmap.progress_percentage(), 0);
}

#[tokio::test]
async fn repeated_exercise_ids_are_fetched_once() {
    let mut shared = plans(3);
    for plan in &mut shared {
        plan.exercise_id = ExerciseId::new(7);
    }
    let source = Arc::new(FakeSource {
        plans: shared,
        ..FakeSource::default()
    });
    let roadmap = RoadmapService::new(source.clone())
        .load(Some(UserId::new(1)))
        .await
        .unwrap();
    assert_eq!(source.exercise_calls.load(Ordering::SeqCst), 1);
    assert!(roadmap.days().all(|d| d.exercise.is_some()));
}

#[tokio::test]
async fn failed_shared_exercise_is_retried_for_later_plans() {
    let mut shared = plans(3);
    for plan in &mut shared {
        plan.exercise_id = ExerciseId::new(7);
    }
    let source = Arc::new(FakeSource {
        plans: shared,
        fail_once: Mutex::new(HashSet::from([7])),
        ..FakeSource::default()
    });
    let roadmap = RoadmapService::new(source.clone())
        .load(Some(UserId::new(1)))
        .await
        .unwrap();

    assert_eq!(source.exercise_calls.load(Ordering::SeqCst), 2);
    let resolved: Vec<bool> = roadmap.days().map(|d| d.exercise.is_some()).collect();
    assert_eq!(resolved, vec![false, true, true]);
}
