use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::matching::questionnaire::{
    BigFiveProfile, Distribution, FunQuestions, Interests, MbtiDimension, MbtiProfile,
    PersonalSocial, QuestionnaireRecord, TraitGroup, UserId,
};
use crate::matching::service::MatchService;
use crate::matching::store::{MatchStore, PublicProfile, SetupRecord, StoreError};

pub(super) fn dimension(letter: char, percentage: u8) -> Option<MbtiDimension> {
    Some(MbtiDimension { letter, percentage })
}

pub(super) fn mbti_intj() -> MbtiProfile {
    MbtiProfile {
        energy: dimension('I', 70),
        mind: dimension('N', 62),
        nature: dimension('T', 55),
        tactics: dimension('J', 81),
        identity: dimension('A', 64),
    }
}

pub(super) fn trait_group(values: [u8; 6]) -> TraitGroup {
    [
        "anxiety",
        "anger",
        "depression",
        "self_consciousness",
        "immoderation",
        "vulnerability",
    ]
    .iter()
    .map(|name| name.to_string())
    .zip(values)
    .collect()
}

pub(super) fn big_five_uniform(value: u8) -> BigFiveProfile {
    let group = || Some(trait_group([value; 6]));
    BigFiveProfile {
        neuroticism: group(),
        extraversion: group(),
        openness: group(),
        agreeableness: group(),
        conscientiousness: group(),
    }
}

pub(super) fn distribution(entries: &[(&str, u32)]) -> Distribution {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

pub(super) fn personal_social() -> PersonalSocial {
    PersonalSocial {
        sleep_hours: Some(7.5),
        sleep_schedule: Some(1),
        screen_hours_weekly: Some(30),
        new_people_weekly: Some(2),
        close_friends: Some(1),
        friends_met: distribution(&[("school", 50), ("work", 30), ("online", 20)]),
        interaction_method: distribution(&[("in_person", 60), ("texting", 40)]),
        social_time: distribution(&[("one_on_one", 70), ("groups", 30)]),
    }
}

pub(super) fn interests() -> Interests {
    Interests {
        hobbies_categories: distribution(&[("creative", 40), ("outdoors", 35), ("gaming", 25)]),
        music_genres: distribution(&[("rock", 50), ("electronic", 30), ("jazz", 20)]),
        hobbies_list: Some("painting, climbing".to_string()),
        music_subgenres: Some("post-rock".to_string()),
    }
}

pub(super) fn fun_questions() -> FunQuestions {
    FunQuestions {
        time_or_money: Some(0),
        travel_or_friends: Some(1),
        know_future: Some(0),
        reborn_gender: Some(2),
        fictional_world: Some(3),
        lose_sense: Some(1),
        afterlife: Some(0),
        lifespan: Some(2),
        lucky_number: Some(100),
        favorite_color: Some("#3366CC".to_string()),
    }
}

/// A record with every section answered; compared to itself it earns
/// the maximum in every section.
pub(super) fn full_record() -> QuestionnaireRecord {
    QuestionnaireRecord {
        mbti: Some(mbti_intj()),
        big_five: Some(big_five_uniform(12)),
        lifestyle_personal_social: Some(personal_social()),
        lifestyle_interests: Some(interests()),
        lifestyle_fun_questions: Some(fun_questions()),
    }
}

/// A deliberately dissimilar but still fully answered record.
pub(super) fn contrasting_record() -> QuestionnaireRecord {
    QuestionnaireRecord {
        mbti: Some(MbtiProfile {
            energy: dimension('E', 88),
            mind: dimension('S', 71),
            nature: dimension('F', 60),
            tactics: dimension('P', 66),
            identity: dimension('T', 90),
        }),
        big_five: Some(big_five_uniform(4)),
        lifestyle_personal_social: Some(PersonalSocial {
            sleep_hours: Some(5.0),
            sleep_schedule: Some(3),
            screen_hours_weekly: Some(70),
            new_people_weekly: Some(0),
            close_friends: Some(3),
            friends_met: distribution(&[("work", 80), ("online", 20)]),
            interaction_method: distribution(&[("calls", 90), ("texting", 10)]),
            social_time: distribution(&[("groups", 100)]),
        }),
        lifestyle_interests: Some(Interests {
            hobbies_categories: distribution(&[("sports", 70), ("gaming", 30)]),
            music_genres: distribution(&[("pop", 100)]),
            hobbies_list: None,
            music_subgenres: None,
        }),
        lifestyle_fun_questions: Some(FunQuestions {
            time_or_money: Some(1),
            travel_or_friends: Some(0),
            know_future: Some(1),
            reborn_gender: Some(0),
            fictional_world: Some(1),
            lose_sense: Some(0),
            afterlife: Some(1),
            lifespan: Some(0),
            lucky_number: Some(2100),
            favorite_color: Some("#CC2211".to_string()),
        }),
    }
}

pub(super) fn user(id: &str) -> UserId {
    UserId::new(id)
}

pub(super) fn complete_setup(id: &str, questionnaire: QuestionnaireRecord) -> SetupRecord {
    SetupRecord {
        user_id: user(id),
        questionnaire,
        is_complete: true,
        completed_at: None,
    }
}

pub(super) fn profile(id: &str, name: &str) -> PublicProfile {
    PublicProfile {
        user_id: user(id),
        display_name: Some(name.to_string()),
        avatar_url: None,
        bio: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    setups: Arc<Mutex<HashMap<UserId, SetupRecord>>>,
    profiles: Arc<Mutex<HashMap<UserId, PublicProfile>>>,
}

impl MemoryStore {
    pub(super) fn insert_setup(&self, record: SetupRecord) {
        self.setups
            .lock()
            .expect("setup mutex poisoned")
            .insert(record.user_id.clone(), record);
    }

    pub(super) fn insert_profile(&self, profile: PublicProfile) {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.user_id.clone(), profile);
    }
}

impl MatchStore for MemoryStore {
    fn fetch_setup(&self, id: &UserId) -> Result<Option<SetupRecord>, StoreError> {
        Ok(self
            .setups
            .lock()
            .expect("setup mutex poisoned")
            .get(id)
            .cloned())
    }

    fn fetch_profile(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError> {
        Ok(self
            .profiles
            .lock()
            .expect("profile mutex poisoned")
            .get(id)
            .cloned())
    }

    fn completed_setups_except(&self, id: &UserId) -> Result<Vec<SetupRecord>, StoreError> {
        Ok(self
            .setups
            .lock()
            .expect("setup mutex poisoned")
            .values()
            .filter(|record| record.is_complete && &record.user_id != id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableStore;

impl MatchStore for UnavailableStore {
    fn fetch_setup(&self, _id: &UserId) -> Result<Option<SetupRecord>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn fetch_profile(&self, _id: &UserId) -> Result<Option<PublicProfile>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    fn completed_setups_except(&self, _id: &UserId) -> Result<Vec<SetupRecord>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn build_service() -> (MatchService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = MatchService::new(store.clone());
    (service, store)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
