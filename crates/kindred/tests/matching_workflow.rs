//! Integration specifications for the comparison and match-ranking
//! workflow delivered through the public service facade and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use kindred::matching::{
        BigFiveProfile, FunQuestions, Interests, MatchService, MatchStore, MbtiDimension,
        MbtiProfile, PersonalSocial, PublicProfile, QuestionnaireRecord, SetupRecord, StoreError,
        UserId,
    };

    fn dimension(letter: char, percentage: u8) -> Option<MbtiDimension> {
        Some(MbtiDimension { letter, percentage })
    }

    fn spread(entries: &[(&str, u32)]) -> std::collections::BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    fn trait_group(value: u8) -> Option<std::collections::BTreeMap<String, u8>> {
        Some(
            ["warmth", "assertiveness", "cheerfulness"]
                .iter()
                .map(|name| (name.to_string(), value))
                .collect(),
        )
    }

    fn big_five(value: u8) -> BigFiveProfile {
        BigFiveProfile {
            neuroticism: trait_group(value),
            extraversion: trait_group(value),
            openness: trait_group(value),
            agreeableness: trait_group(value),
            conscientiousness: trait_group(value),
        }
    }

    pub(super) fn viewer_record() -> QuestionnaireRecord {
        QuestionnaireRecord {
            mbti: Some(MbtiProfile {
                energy: dimension('E', 61),
                mind: dimension('N', 70),
                nature: dimension('F', 58),
                tactics: dimension('P', 52),
                identity: dimension('A', 66),
            }),
            big_five: Some(big_five(11)),
            lifestyle_personal_social: Some(PersonalSocial {
                sleep_hours: Some(7.0),
                sleep_schedule: Some(2),
                screen_hours_weekly: Some(25),
                new_people_weekly: Some(3),
                close_friends: Some(2),
                friends_met: spread(&[("school", 50), ("work", 50)]),
                interaction_method: spread(&[("in_person", 80), ("texting", 20)]),
                social_time: spread(&[("groups", 60), ("one_on_one", 40)]),
            }),
            lifestyle_interests: Some(Interests {
                hobbies_categories: spread(&[("outdoors", 60), ("music", 40)]),
                music_genres: spread(&[("indie", 70), ("folk", 30)]),
                hobbies_list: None,
                music_subgenres: None,
            }),
            lifestyle_fun_questions: Some(FunQuestions {
                time_or_money: Some(1),
                travel_or_friends: Some(0),
                know_future: Some(1),
                reborn_gender: Some(1),
                fictional_world: Some(0),
                lose_sense: Some(2),
                afterlife: Some(1),
                lifespan: Some(3),
                lucky_number: Some(11),
                favorite_color: Some("#22AA55".to_string()),
            }),
        }
    }

    pub(super) fn distant_record() -> QuestionnaireRecord {
        QuestionnaireRecord {
            mbti: Some(MbtiProfile {
                energy: dimension('I', 85),
                mind: dimension('S', 77),
                nature: dimension('T', 69),
                tactics: dimension('J', 73),
                identity: dimension('T', 81),
            }),
            big_five: Some(big_five(2)),
            lifestyle_personal_social: Some(PersonalSocial {
                sleep_hours: Some(4.5),
                sleep_schedule: Some(0),
                screen_hours_weekly: Some(65),
                new_people_weekly: Some(0),
                close_friends: Some(0),
                friends_met: spread(&[("online", 100)]),
                interaction_method: spread(&[("calls", 100)]),
                social_time: spread(&[("one_on_one", 100)]),
            }),
            lifestyle_interests: Some(Interests {
                hobbies_categories: spread(&[("gaming", 100)]),
                music_genres: spread(&[("metal", 100)]),
                hobbies_list: None,
                music_subgenres: None,
            }),
            lifestyle_fun_questions: Some(FunQuestions {
                time_or_money: Some(0),
                travel_or_friends: Some(1),
                know_future: Some(0),
                reborn_gender: Some(0),
                fictional_world: Some(2),
                lose_sense: Some(0),
                afterlife: Some(0),
                lifespan: Some(0),
                lucky_number: Some(4444),
                favorite_color: Some("#AA2222".to_string()),
            }),
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryStore {
        setups: Arc<Mutex<HashMap<UserId, SetupRecord>>>,
        profiles: Arc<Mutex<HashMap<UserId, PublicProfile>>>,
    }

    impl MemoryStore {
        pub(super) fn insert(&self, id: &str, record: QuestionnaireRecord) {
            self.setups.lock().expect("lock").insert(
                UserId::new(id),
                SetupRecord {
                    user_id: UserId::new(id),
                    questionnaire: record,
                    is_complete: true,
                    completed_at: None,
                },
            );
        }

        pub(super) fn insert_profile(&self, id: &str, name: &str) {
            self.profiles.lock().expect("lock").insert(
                UserId::new(id),
                PublicProfile {
                    user_id: UserId::new(id),
                    display_name: Some(name.to_string()),
                    avatar_url: None,
                    bio: None,
                },
            );
        }
    }

    impl MatchStore for MemoryStore {
        fn fetch_setup(&self, id: &UserId) -> Result<Option<SetupRecord>, StoreError> {
            Ok(self.setups.lock().expect("lock").get(id).cloned())
        }

        fn fetch_profile(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError> {
            Ok(self.profiles.lock().expect("lock").get(id).cloned())
        }

        fn completed_setups_except(&self, id: &UserId) -> Result<Vec<SetupRecord>, StoreError> {
            Ok(self
                .setups
                .lock()
                .expect("lock")
                .values()
                .filter(|record| record.is_complete && &record.user_id != id)
                .cloned()
                .collect())
        }
    }

    pub(super) fn build_service() -> (MatchService<MemoryStore>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let service = MatchService::new(store.clone());
        (service, store)
    }
}

mod matching {
    use super::common::*;
    use kindred::matching::{MatchQuery, MatchServiceError, SortOrder, UserId};

    #[test]
    fn compare_returns_scores_and_profile() {
        let (service, store) = build_service();
        store.insert("viewer", viewer_record());
        store.insert("twin", viewer_record());
        store.insert_profile("twin", "Twin");

        let view = service
            .compare(&UserId::new("viewer"), &UserId::new("twin"))
            .expect("comparison succeeds");

        assert_eq!(view.scores.total_score, 200);
        assert_eq!(
            view.profile.and_then(|profile| profile.display_name),
            Some("Twin".to_string())
        );
    }

    #[test]
    fn find_matches_orders_candidates_by_similarity() {
        let (service, store) = build_service();
        store.insert("viewer", viewer_record());
        store.insert("twin", viewer_record());
        store.insert("stranger", distant_record());

        let matches = service
            .find_matches(&UserId::new("viewer"), MatchQuery::default())
            .expect("ranked matches");
        let ids: Vec<&str> = matches.iter().map(|view| view.user_id.0.as_str()).collect();
        assert_eq!(ids, vec!["twin", "stranger"]);
        assert!(matches[0].scores.total_score > matches[1].scores.total_score);

        let reversed = service
            .find_matches(
                &UserId::new("viewer"),
                MatchQuery {
                    order: SortOrder::Ascending,
                    ..MatchQuery::default()
                },
            )
            .expect("ranked matches");
        assert_eq!(reversed[0].user_id, UserId::new("stranger"));
    }

    #[test]
    fn viewer_must_finish_before_searching() {
        let (service, store) = build_service();
        store.insert("other", viewer_record());

        assert!(matches!(
            service.find_matches(&UserId::new("viewer"), MatchQuery::default()),
            Err(MatchServiceError::ViewerSetupIncomplete { .. })
        ));
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use kindred::matching::matching_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let (service, store) = build_service();
        store.insert("viewer", viewer_record());
        store.insert("twin", viewer_record());
        store.insert("stranger", distant_record());
        store.insert_profile("twin", "Twin");
        matching_router(Arc::new(service))
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn comparison_endpoint_returns_the_breakdown() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/matching/comparisons/viewer/twin")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload.get("user_id"), Some(&json!("twin")));
        assert_eq!(payload["scores"]["totalScore"], json!(200));
        assert!(payload["scores"]["breakdown"]["funQuestions"].is_number());
    }

    #[tokio::test]
    async fn matches_endpoint_ranks_and_counts() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/matching/viewer/matches")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({ "sort_by": "total", "limit": 5 }))
                            .expect("serialize query"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload.get("count"), Some(&json!(2)));
        assert_eq!(payload["matches"][0]["user_id"], json!("twin"));
    }

    #[tokio::test]
    async fn unknown_target_maps_to_not_found() {
        let router = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/matching/comparisons/viewer/ghost")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
