//! Discovery-track profile resolution.
//!
//! Pure functions over the static question bank. Accepts the short
//! three-answer "why" pass (Q1–Q3) or the full eight-answer pass and
//! produces an immutable [`Profile`].
//!
//! Algorithm:
//! 1. Accumulate one point per group-tagged answer; count
//!    synthesizer-flagged answers separately (a flagged choice without a
//!    group tag feeds the counter alone).
//! 2. Rank groups by score descending (stable on ties), taking the top
//!    two as primary/secondary.
//! 3. On a primary/secondary tie, re-count dominance over the Q1–Q3
//!    "why" answers and swap iff the runner-up strictly wins there.
//! 4. Synthesizer activates iff the counter reaches 3 and the top two
//!    scores differ by at most 1.

use thiserror::Error;

use super::models::{
    AnswerMap, GroupScores, PersonalityGroup, Profile, Question, QuestionBank, SYNTHESIZER_SUFFIX,
};

/// Valid discovery answer-set sizes: the "why" pass and the full pass.
pub const SHORT_ANSWER_COUNT: usize = 3;
pub const FULL_ANSWER_COUNT: usize = 8;

/// Synthesizer activation thresholds.
pub const SYNTHESIZER_MIN_SCORE: u32 = 3;
pub const SYNTHESIZER_MAX_GAP: u32 = 1;

/// Question ids whose answers drive the tie-break ("why" questions).
const WHY_QUESTIONS: [&str; 3] = ["Q1", "Q2", "Q3"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("expected {SHORT_ANSWER_COUNT} or {FULL_ANSWER_COUNT} discovery answers, got {0}")]
    InvalidAnswerCount(usize),
    #[error("expected exactly 4 professional answers (Q1-Q4), got {0}")]
    InvalidProfessionalAnswerCount(usize),
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("invalid choice '{letter}' for question {question}")]
    InvalidChoice { question: String, letter: String },
}

/// Resolves a discovery answer set into a [`Profile`].
pub fn resolve_discovery(bank: &QuestionBank, answers: &AnswerMap) -> Result<Profile, QuizError> {
    if answers.len() != SHORT_ANSWER_COUNT && answers.len() != FULL_ANSWER_COUNT {
        return Err(QuizError::InvalidAnswerCount(answers.len()));
    }

    let mut scores = GroupScores::new();
    let mut synthesizer_score = 0u32;
    let mut why_groups: Vec<PersonalityGroup> = Vec::new();

    for (question_id, letter) in answers {
        let question = bank
            .discovery_question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.clone()))?;
        let choice = lookup_choice(question, letter)?;

        if let Some(group) = choice.group {
            scores.add(group);
            if WHY_QUESTIONS.contains(&question_id.as_str()) {
                why_groups.push(group);
            }
        }
        if choice.synthesizer {
            synthesizer_score += 1;
        }
    }

    Ok(determine_profile(scores, synthesizer_score, &why_groups))
}

pub(super) fn lookup_choice<'a, C>(
    question: &'a Question<C>,
    letter: &str,
) -> Result<&'a C, QuizError> {
    let normalized = letter.trim().to_ascii_uppercase();
    let mut chars = normalized.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(QuizError::InvalidChoice {
                question: question.id.to_string(),
                letter: letter.to_string(),
            })
        }
    };
    question.choice(key).ok_or_else(|| QuizError::InvalidChoice {
        question: question.id.to_string(),
        letter: letter.to_string(),
    })
}

fn determine_profile(
    scores: GroupScores,
    synthesizer_score: u32,
    why_groups: &[PersonalityGroup],
) -> Profile {
    let ranked = scores.ranked();
    let (mut primary_group, mut primary_score) = ranked[0];
    let (mut secondary_group, mut secondary_score) = ranked[1];

    // Tie-break between the current top two only: whoever dominates the
    // "why" answers leads. A strict win is required to swap.
    if secondary_score == primary_score {
        let why_count =
            |group: PersonalityGroup| why_groups.iter().filter(|g| **g == group).count();
        if why_count(secondary_group) > why_count(primary_group) {
            std::mem::swap(&mut primary_group, &mut secondary_group);
            std::mem::swap(&mut primary_score, &mut secondary_score);
        }
    }

    let gap = primary_score.abs_diff(secondary_score);
    let is_synthesizer = synthesizer_score >= SYNTHESIZER_MIN_SCORE && gap <= SYNTHESIZER_MAX_GAP;
    let suffix = if is_synthesizer { SYNTHESIZER_SUFFIX } else { "" };

    Profile {
        primary_group,
        // A runner-up that never scored is reported as absent.
        secondary_group: (secondary_score > 0).then_some(secondary_group),
        primary_score,
        secondary_score,
        synthesizer_score,
        is_synthesizer,
        profile_name: format!("{}{}", primary_group.label(), suffix),
        english_name: format!("{}{}", primary_group.english_name(), suffix),
        all_scores: scores,
        is_multi_motivated: gap <= 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(q, l)| (q.to_string(), l.to_string()))
            .collect::<BTreeMap<_, _>>()
    }

    fn bank() -> QuestionBank {
        QuestionBank::standard()
    }

    #[test]
    fn test_documented_example_resolves_to_thinker_synthesizer() {
        let answers = answers(&[
            ("Q1", "C"),
            ("Q2", "D"),
            ("Q3", "E"),
            ("Q4", "C"),
            ("Q5", "B"),
            ("Q6", "E"),
            ("Q7", "C"),
            ("Q8", "C"),
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_group, PersonalityGroup::Thinker);
        assert_eq!(profile.synthesizer_score, 4);
        assert!(profile.is_synthesizer);
        assert!(profile.profile_name.contains("Tri thức"));
        assert!(profile.profile_name.contains("Synthesizer"));
        assert!(profile.english_name.contains("The Thinkers"));
    }

    #[test]
    fn test_uniform_a_answers_resolve_to_connector() {
        let pairs: Vec<(String, String)> = (1..=8)
            .map(|i| (format!("Q{i}"), "A".to_string()))
            .collect();
        let answers: AnswerMap = pairs.into_iter().collect();
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_group, PersonalityGroup::Connector);
        assert_eq!(profile.primary_score, 7);
        assert_eq!(profile.synthesizer_score, 0);
        assert!(!profile.is_synthesizer);
        assert_eq!(profile.profile_name, "Kết nối");
    }

    #[test]
    fn test_all_scores_sum_accounts_for_groupless_choices() {
        // Q3:E, Q4:C, Q8:C carry no group tag; 8 answers minus 3 of them.
        let answers = answers(&[
            ("Q1", "A"),
            ("Q2", "A"),
            ("Q3", "E"),
            ("Q4", "C"),
            ("Q5", "A"),
            ("Q6", "A"),
            ("Q7", "A"),
            ("Q8", "C"),
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.all_scores.total(), 5);
        assert_eq!(profile.synthesizer_score, 3);
    }

    #[test]
    fn test_synthesizer_boundary_score_three_gap_one_activates() {
        // Thinker 3 (Q1 C, Q7 C, Q8 B), Individual 2 (Q2 B, Q4 B),
        // synthesizer 3 (Q3 E, Q5 C, Q6 E).
        let answers = answers(&[
            ("Q1", "C"),
            ("Q2", "B"),
            ("Q3", "E"),
            ("Q4", "B"),
            ("Q5", "C"),
            ("Q6", "E"),
            ("Q7", "C"),
            ("Q8", "B"),
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.synthesizer_score, 3);
        assert_eq!(profile.primary_score - profile.secondary_score, 1);
        assert!(profile.is_synthesizer);
    }

    #[test]
    fn test_synthesizer_boundary_score_two_does_not_activate() {
        // Thinker 3, Individual 2, synthesizer only 2 (Q3 E, Q5 C).
        let answers = answers(&[
            ("Q1", "C"),
            ("Q2", "B"),
            ("Q3", "E"),
            ("Q4", "B"),
            ("Q5", "C"),
            ("Q6", "C"),
            ("Q7", "C"),
            ("Q8", "A"),
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.synthesizer_score, 2);
        assert!(profile.is_multi_motivated);
        assert!(!profile.is_synthesizer);
    }

    #[test]
    fn test_synthesizer_boundary_gap_two_does_not_activate() {
        // Thinker 4 (Q1 C, Q4 A, Q7 C, Q8 B), Connector 1 (Q2 A),
        // synthesizer 3 (Q3 E, Q5 C, Q6 E). Gap 3 > 1.
        let answers = answers(&[
            ("Q1", "C"),
            ("Q2", "A"),
            ("Q3", "E"),
            ("Q4", "A"),
            ("Q5", "C"),
            ("Q6", "E"),
            ("Q7", "C"),
            ("Q8", "B"),
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.synthesizer_score, 3);
        assert!(profile.primary_score.abs_diff(profile.secondary_score) > 1);
        assert!(!profile.is_synthesizer);
        assert!(!profile.is_multi_motivated);
    }

    #[test]
    fn test_tie_break_swaps_when_runner_up_dominates_why_answers() {
        // Connector and Thinker both score 3. Thinker is declared later,
        // so the stable sort leaves Connector on top, but the why
        // answers (Q1-Q3) tag Thinker twice vs Connector once.
        let answers = answers(&[
            ("Q1", "C"), // Thinker (why)
            ("Q2", "C"), // Thinker (why)
            ("Q3", "A"), // Connector (why)
            ("Q4", "C"), // synthesizer only
            ("Q5", "A"), // Connector
            ("Q6", "A"), // Connector
            ("Q7", "C"), // Thinker
            ("Q8", "C"), // synthesizer only
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_score, 3);
        assert_eq!(profile.secondary_score, 3);
        assert_eq!(profile.primary_group, PersonalityGroup::Thinker);
        assert_eq!(profile.secondary_group, Some(PersonalityGroup::Connector));
    }

    #[test]
    fn test_tie_without_why_dominance_keeps_declaration_order() {
        // Connector and Thinker tie overall and tie 1-1 in the why set;
        // no strict win, no swap.
        let answers = answers(&[
            ("Q1", "A"), // Connector (why)
            ("Q2", "C"), // Thinker (why)
            ("Q3", "E"), // synthesizer only
            ("Q4", "A"), // Thinker
            ("Q5", "A"), // Connector
            ("Q6", "E"), // synthesizer only
            ("Q7", "E"), // synthesizer only
            ("Q8", "C"), // synthesizer only
        ]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_group, PersonalityGroup::Connector);
        assert_eq!(profile.secondary_group, Some(PersonalityGroup::Thinker));
    }

    #[test]
    fn test_short_why_pass_resolves() {
        let answers = answers(&[("Q1", "B"), ("Q2", "B"), ("Q3", "B")]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_group, PersonalityGroup::Individual);
        assert_eq!(profile.primary_score, 3);
        assert_eq!(profile.secondary_group, None);
        assert_eq!(profile.secondary_score, 0);
    }

    #[test]
    fn test_invalid_answer_counts_rejected() {
        for n in [0usize, 1, 2, 4, 5, 6, 7, 9] {
            let pairs: Vec<(String, String)> = (1..=n.min(8))
                .map(|i| (format!("Q{i}"), "A".to_string()))
                .collect();
            let mut map: AnswerMap = pairs.into_iter().collect();
            if n == 9 {
                map.insert("Q9".to_string(), "A".to_string());
            }
            if map.len() == SHORT_ANSWER_COUNT || map.len() == FULL_ANSWER_COUNT {
                continue;
            }
            let err = resolve_discovery(&bank(), &map).unwrap_err();
            assert_eq!(err, QuizError::InvalidAnswerCount(map.len()));
        }
    }

    #[test]
    fn test_unknown_question_rejected() {
        let answers = answers(&[("Q1", "A"), ("Q2", "A"), ("QX", "A")]);
        let err = resolve_discovery(&bank(), &answers).unwrap_err();
        assert_eq!(err, QuizError::UnknownQuestion("QX".to_string()));
    }

    #[test]
    fn test_invalid_letter_rejected() {
        let answers = answers(&[("Q1", "Z"), ("Q2", "A"), ("Q3", "A")]);
        let err = resolve_discovery(&bank(), &answers).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidChoice {
                question: "Q1".to_string(),
                letter: "Z".to_string(),
            }
        );
    }

    #[test]
    fn test_lowercase_letters_accepted() {
        let answers = answers(&[("Q1", "a"), ("Q2", "a"), ("Q3", "a")]);
        let profile = resolve_discovery(&bank(), &answers).unwrap();
        assert_eq!(profile.primary_group, PersonalityGroup::Connector);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let answers = answers(&[
            ("Q1", "C"),
            ("Q2", "D"),
            ("Q3", "E"),
            ("Q4", "C"),
            ("Q5", "B"),
            ("Q6", "E"),
            ("Q7", "C"),
            ("Q8", "C"),
        ]);
        let bank = bank();
        let first = resolve_discovery(&bank, &answers).unwrap();
        let second = resolve_discovery(&bank, &answers).unwrap();
        assert_eq!(first, second);
    }
}
