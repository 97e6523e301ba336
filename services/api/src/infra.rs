use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use kindred::matching::{
    BigFiveProfile, FunQuestions, Interests, LegacySetupResponse, MatchStore, MbtiDimension,
    MbtiProfile, PersonalSocial, PublicProfile, QuestionnaireRecord, SetupRecord, StoreError,
    UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store backing the demo deployment.
#[derive(Default, Clone)]
pub(crate) struct InMemoryMatchStore {
    setups: Arc<Mutex<HashMap<UserId, SetupRecord>>>,
    profiles: Arc<Mutex<HashMap<UserId, PublicProfile>>>,
}

impl InMemoryMatchStore {
    pub(crate) fn insert_setup(&self, record: SetupRecord) {
        self.setups
            .lock()
            .expect("setup mutex poisoned")
            .insert(record.user_id.clone(), record);
    }

    pub(crate) fn insert_profile(&self, profile: PublicProfile) {
        self.profiles
            .lock()
            .expect("profile mutex poisoned")
            .insert(profile.user_id.clone(), profile);
    }
}

impl MatchStore for InMemoryMatchStore {
    fn fetch_setup(&self, id: &UserId) -> Result<Option<SetupRecord>, StoreError> {
        let guard = self.setups.lock().expect("setup mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn fetch_profile(&self, id: &UserId) -> Result<Option<PublicProfile>, StoreError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn completed_setups_except(&self, id: &UserId) -> Result<Vec<SetupRecord>, StoreError> {
        let guard = self.setups.lock().expect("setup mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.is_complete && &record.user_id != id)
            .cloned()
            .collect())
    }
}

/// Populate the store with a handful of finished questionnaires so the
/// demo deployment has something to rank. One row intentionally uses
/// the first-generation flat shape and goes through the legacy adapter.
pub(crate) fn seeded_store() -> InMemoryMatchStore {
    let store = InMemoryMatchStore::default();

    for (id, name, record) in [
        ("maya", "Maya", sample_record_maya()),
        ("jonas", "Jonas", sample_record_jonas()),
        ("priya", "Priya", sample_record_priya()),
        ("sam", "Sam", legacy_sample_record()),
    ] {
        store.insert_setup(SetupRecord {
            user_id: UserId::new(id),
            questionnaire: record,
            is_complete: true,
            completed_at: Some(Utc::now()),
        });
        store.insert_profile(PublicProfile {
            user_id: UserId::new(id),
            display_name: Some(name.to_string()),
            avatar_url: None,
            bio: None,
        });
    }

    store
}

fn dimension(letter: char, percentage: u8) -> Option<MbtiDimension> {
    Some(MbtiDimension { letter, percentage })
}

fn spread(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

fn trait_group(values: &[(&str, u8)]) -> Option<BTreeMap<String, u8>> {
    Some(
        values
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect(),
    )
}

fn sample_record_maya() -> QuestionnaireRecord {
    QuestionnaireRecord {
        mbti: Some(MbtiProfile {
            energy: dimension('E', 64),
            mind: dimension('N', 72),
            nature: dimension('F', 59),
            tactics: dimension('P', 55),
            identity: dimension('A', 61),
        }),
        big_five: Some(BigFiveProfile {
            neuroticism: trait_group(&[("anxiety", 8), ("anger", 5), ("vulnerability", 7)]),
            extraversion: trait_group(&[("warmth", 16), ("cheerfulness", 15)]),
            openness: trait_group(&[("imagination", 17), ("artistic_interests", 18)]),
            agreeableness: trait_group(&[("trust", 14), ("altruism", 15)]),
            conscientiousness: trait_group(&[("orderliness", 9), ("self_discipline", 11)]),
        }),
        lifestyle_personal_social: Some(PersonalSocial {
            sleep_hours: Some(7.5),
            sleep_schedule: Some(1),
            screen_hours_weekly: Some(24),
            new_people_weekly: Some(2),
            close_friends: Some(2),
            friends_met: spread(&[("school", 45), ("work", 30), ("online", 25)]),
            interaction_method: spread(&[("in_person", 55), ("texting", 45)]),
            social_time: spread(&[("one_on_one", 60), ("groups", 40)]),
        }),
        lifestyle_interests: Some(Interests {
            hobbies_categories: spread(&[("creative", 50), ("outdoors", 30), ("music", 20)]),
            music_genres: spread(&[("indie", 45), ("electronic", 35), ("jazz", 20)]),
            hobbies_list: Some("watercolor, bouldering".to_string()),
            music_subgenres: Some("dream pop".to_string()),
        }),
        lifestyle_fun_questions: Some(FunQuestions {
            time_or_money: Some(0),
            travel_or_friends: Some(1),
            know_future: Some(0),
            reborn_gender: Some(2),
            fictional_world: Some(1),
            lose_sense: Some(3),
            afterlife: Some(0),
            lifespan: Some(2),
            lucky_number: Some(13),
            favorite_color: Some("#4A90D9".to_string()),
        }),
    }
}

fn sample_record_jonas() -> QuestionnaireRecord {
    QuestionnaireRecord {
        mbti: Some(MbtiProfile {
            energy: dimension('E', 58),
            mind: dimension('N', 66),
            nature: dimension('F', 52),
            tactics: dimension('J', 60),
            identity: dimension('A', 55),
        }),
        big_five: Some(BigFiveProfile {
            neuroticism: trait_group(&[("anxiety", 10), ("anger", 6), ("vulnerability", 9)]),
            extraversion: trait_group(&[("warmth", 14), ("cheerfulness", 13)]),
            openness: trait_group(&[("imagination", 15), ("artistic_interests", 12)]),
            agreeableness: trait_group(&[("trust", 13), ("altruism", 16)]),
            conscientiousness: trait_group(&[("orderliness", 12), ("self_discipline", 14)]),
        }),
        lifestyle_personal_social: Some(PersonalSocial {
            sleep_hours: Some(7.0),
            sleep_schedule: Some(1),
            screen_hours_weekly: Some(30),
            new_people_weekly: Some(1),
            close_friends: Some(2),
            friends_met: spread(&[("school", 40), ("work", 40), ("online", 20)]),
            interaction_method: spread(&[("in_person", 50), ("texting", 50)]),
            social_time: spread(&[("one_on_one", 70), ("groups", 30)]),
        }),
        lifestyle_interests: Some(Interests {
            hobbies_categories: spread(&[("creative", 35), ("outdoors", 40), ("games", 25)]),
            music_genres: spread(&[("indie", 50), ("rock", 30), ("jazz", 20)]),
            hobbies_list: Some("film photography, trail running".to_string()),
            music_subgenres: None,
        }),
        lifestyle_fun_questions: Some(FunQuestions {
            time_or_money: Some(0),
            travel_or_friends: Some(1),
            know_future: Some(1),
            reborn_gender: Some(2),
            fictional_world: Some(1),
            lose_sense: Some(2),
            afterlife: Some(0),
            lifespan: Some(2),
            lucky_number: Some(21),
            favorite_color: Some("#3C7DC4".to_string()),
        }),
    }
}

fn sample_record_priya() -> QuestionnaireRecord {
    QuestionnaireRecord {
        mbti: Some(MbtiProfile {
            energy: dimension('I', 81),
            mind: dimension('S', 69),
            nature: dimension('T', 74),
            tactics: dimension('J', 77),
            identity: dimension('T', 63),
        }),
        big_five: Some(BigFiveProfile {
            neuroticism: trait_group(&[("anxiety", 15), ("anger", 11), ("vulnerability", 13)]),
            extraversion: trait_group(&[("warmth", 6), ("cheerfulness", 7)]),
            openness: trait_group(&[("imagination", 8), ("artistic_interests", 5)]),
            agreeableness: trait_group(&[("trust", 9), ("altruism", 10)]),
            conscientiousness: trait_group(&[("orderliness", 18), ("self_discipline", 19)]),
        }),
        lifestyle_personal_social: Some(PersonalSocial {
            sleep_hours: Some(6.0),
            sleep_schedule: Some(3),
            screen_hours_weekly: Some(55),
            new_people_weekly: Some(0),
            close_friends: Some(1),
            friends_met: spread(&[("online", 70), ("work", 30)]),
            interaction_method: spread(&[("texting", 80), ("calls", 20)]),
            social_time: spread(&[("one_on_one", 90), ("groups", 10)]),
        }),
        lifestyle_interests: Some(Interests {
            hobbies_categories: spread(&[("games", 60), ("creative", 40)]),
            music_genres: spread(&[("metal", 60), ("electronic", 40)]),
            hobbies_list: Some("strategy games, mechanical keyboards".to_string()),
            music_subgenres: Some("synthwave".to_string()),
        }),
        lifestyle_fun_questions: Some(FunQuestions {
            time_or_money: Some(1),
            travel_or_friends: Some(0),
            know_future: Some(0),
            reborn_gender: Some(0),
            fictional_world: Some(3),
            lose_sense: Some(1),
            afterlife: Some(1),
            lifespan: Some(0),
            lucky_number: Some(2048),
            favorite_color: Some("#8833AA".to_string()),
        }),
    }
}

fn legacy_sample_record() -> QuestionnaireRecord {
    LegacySetupResponse {
        mbti_type: Some("ENFP-A Campaigner".to_string()),
        big_five: None,
        sleep_hours: Some(8.0),
        pets: vec!["dogs".to_string()],
        sports: vec!["climbing".to_string(), "cycling".to_string()],
        hobbies: vec!["cooking".to_string(), "climbing".to_string()],
    }
    .into()
}
