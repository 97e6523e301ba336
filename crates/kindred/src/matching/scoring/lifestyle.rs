use super::super::questionnaire::{FunQuestions, Interests, PersonalSocial};
use super::kernels::{
    self, LUCKY_NUMBER_DECAY, SCREEN_HOURS_DECAY, SLEEP_HOURS_DECAY,
};
use super::weights::{FunQuestionWeights, InterestsWeights, PersonalSocialWeights};

/// Highest valid value for the 0-3 lifestyle enums; anything above is
/// junk data and treated as unanswered.
const LIFESTYLE_ENUM_MAX: u8 = 3;

fn valid_enum(value: Option<u8>) -> Option<u8> {
    value.filter(|v| *v <= LIFESTYLE_ENUM_MAX)
}

/// Personal & social section (40 points by default). Returns 0 when the
/// section is missing on either side.
pub(crate) fn personal_social_score(
    a: Option<&PersonalSocial>,
    b: Option<&PersonalSocial>,
    weights: &PersonalSocialWeights,
) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let mut score = 0.0;

    let sleep_diff = (a.sleep_hours.unwrap_or(0.0) - b.sleep_hours.unwrap_or(0.0)).abs();
    score += kernels::decay(weights.sleep_hours, SLEEP_HOURS_DECAY, sleep_diff);

    score += kernels::exact_match(
        valid_enum(a.sleep_schedule),
        valid_enum(b.sleep_schedule),
        weights.sleep_schedule,
    );

    let screen_diff = (a.screen_hours_weekly.unwrap_or(0) as f64
        - b.screen_hours_weekly.unwrap_or(0) as f64)
        .abs();
    score += kernels::decay(weights.screen_hours, SCREEN_HOURS_DECAY, screen_diff);

    score += kernels::exact_match(
        valid_enum(a.new_people_weekly),
        valid_enum(b.new_people_weekly),
        weights.new_people,
    );
    score += kernels::exact_match(
        valid_enum(a.close_friends),
        valid_enum(b.close_friends),
        weights.close_friends,
    );

    score += kernels::distribution_similarity(&a.friends_met, &b.friends_met, weights.friends_met);
    score += kernels::distribution_similarity(
        &a.interaction_method,
        &b.interaction_method,
        weights.interaction_method,
    );
    score += kernels::distribution_similarity(&a.social_time, &b.social_time, weights.social_time);

    score
}

/// Interests & recreation section (40 points by default). Free-text
/// fields are never scored.
pub(crate) fn interests_score(
    a: Option<&Interests>,
    b: Option<&Interests>,
    weights: &InterestsWeights,
) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    kernels::distribution_similarity(
        &a.hobbies_categories,
        &b.hobbies_categories,
        weights.hobbies_categories,
    ) + kernels::distribution_similarity(&a.music_genres, &b.music_genres, weights.music_genres)
}

/// Fun questions section (20 points by default): eight exact-match
/// answers, the lucky number, and the favorite color, each one slot.
pub(crate) fn fun_questions_score(
    a: Option<&FunQuestions>,
    b: Option<&FunQuestions>,
    weights: &FunQuestionWeights,
) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };

    let per_question = weights.per_question();
    let mut score = 0.0;

    for (answer_a, answer_b) in a
        .exact_match_answers()
        .into_iter()
        .zip(b.exact_match_answers())
    {
        score += kernels::exact_match(answer_a, answer_b, per_question);
    }

    let number_diff =
        (a.lucky_number.unwrap_or(0) as f64 - b.lucky_number.unwrap_or(0) as f64).abs();
    score += kernels::decay(per_question, LUCKY_NUMBER_DECAY, number_diff);

    score += kernels::color_similarity(
        a.favorite_color.as_deref(),
        b.favorite_color.as_deref(),
        per_question,
    );

    score
}
