use crate::infra::seeded_store;
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use kindred::error::AppError;
use kindred::matching::{
    calculate_similarity, LegacySetupResponse, MatchQuery, MatchService, QuestionnaireRecord,
    SortKey, SortOrder, UserId,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// User whose perspective drives the demo.
    #[arg(long, default_value = "maya")]
    pub(crate) viewer: String,
    /// How many ranked matches to show.
    #[arg(long, default_value_t = 5)]
    pub(crate) limit: usize,
    /// Rank least similar first instead of most similar.
    #[arg(long)]
    pub(crate) reversed: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to the first questionnaire record (JSON)
    pub(crate) left: PathBuf,
    /// Path to the second questionnaire record (JSON)
    pub(crate) right: PathBuf,
    /// Parse both files as first-generation flat setup rows
    #[arg(long)]
    pub(crate) legacy: bool,
}

/// Score two on-disk records and print the breakdown as JSON.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let left = load_record(&args.left, args.legacy)?;
    let right = load_record(&args.right, args.legacy)?;

    let scores = calculate_similarity(&left, &right);
    println!("{}", serde_json::to_string_pretty(&scores)?);
    Ok(())
}

fn load_record(path: &Path, legacy: bool) -> Result<QuestionnaireRecord, AppError> {
    let raw = std::fs::read_to_string(path)?;
    if legacy {
        let row: LegacySetupResponse = serde_json::from_str(&raw)?;
        Ok(row.into())
    } else {
        Ok(serde_json::from_str(&raw)?)
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        viewer,
        limit,
        reversed,
    } = args;

    let store = Arc::new(seeded_store());
    let service = MatchService::new(store);
    let viewer = UserId::new(viewer);

    println!("Kindred matching demo");
    println!("Viewer: {}", viewer.0);

    println!("\nDirect comparison against 'jonas'");
    match service.compare(&viewer, &UserId::new("jonas")) {
        Ok(view) => {
            let scores = &view.scores;
            println!(
                "- total {} (personality {}, lifestyle {})",
                scores.total_score, scores.personality_score, scores.lifestyle_score
            );
            println!(
                "  sections: mbti {:.1} | big five {:.1} | personal/social {:.1} | interests {:.1} | fun {:.1}",
                scores.breakdown.mbti,
                scores.breakdown.big_five,
                scores.breakdown.personal_social,
                scores.breakdown.interests,
                scores.breakdown.fun_questions
            );
        }
        Err(err) => println!("- comparison unavailable: {err}"),
    }

    let query = MatchQuery {
        sort_by: SortKey::Total,
        order: if reversed {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        },
        limit,
    };

    println!("\nRanked matches");
    let matches = match service.find_matches(&viewer, query) {
        Ok(matches) => matches,
        Err(err) => {
            println!("- search unavailable: {err}");
            return Ok(());
        }
    };

    if matches.is_empty() {
        println!("- no completed questionnaires to rank");
        return Ok(());
    }

    for (position, view) in matches.iter().enumerate() {
        let name = view
            .profile
            .as_ref()
            .and_then(|profile| profile.display_name.as_deref())
            .unwrap_or(view.user_id.0.as_str());
        println!(
            "{:>2}. {} - total {} (personality {}, lifestyle {})",
            position + 1,
            name,
            view.scores.total_score,
            view.scores.personality_score,
            view.scores.lifestyle_score
        );
    }

    println!("\nTop match payload:");
    match serde_json::to_string_pretty(&matches[0]) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("payload unavailable: {err}"),
    }

    Ok(())
}
