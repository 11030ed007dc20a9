//! Professional-track resolution.
//!
//! Four answers map to a field/motivation/style/presentation tuple rather
//! than scores. Two diagnostic choices (self-directed association on Q3,
//! cross-disciplinary connection on Q4) each raise a synthesizer
//! indicator; both firing activates the professional-synthesizer state.

use serde::Serialize;

use super::models::{
    AnswerMap, Field, LearningStyle, Motivation, PersonalityGroup, Presentation,
    ProfessionalAttribute, QuestionBank,
};
use super::resolver::{lookup_choice, QuizError};

pub const PROFESSIONAL_ANSWER_COUNT: usize = 4;

/// Indicators required for the professional-synthesizer state.
pub const SYNTHESIZER_INDICATOR_THRESHOLD: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessionalProfile {
    pub field: Field,
    pub motivation: Motivation,
    pub learning_style: LearningStyle,
    pub presentation_preference: Presentation,
    pub synthesizer_indicator_count: u32,
    pub is_professional_synthesizer: bool,
}

/// Resolves the four professional answers into an attribute tuple.
pub fn resolve_professional(
    bank: &QuestionBank,
    answers: &AnswerMap,
) -> Result<ProfessionalProfile, QuizError> {
    if answers.len() != PROFESSIONAL_ANSWER_COUNT {
        return Err(QuizError::InvalidProfessionalAnswerCount(answers.len()));
    }

    let mut field = None;
    let mut motivation = None;
    let mut learning_style = None;
    let mut presentation = None;
    let mut indicators = 0u32;

    for (question_id, letter) in answers {
        let question = bank
            .professional_question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.clone()))?;
        let choice = lookup_choice(question, letter)?;

        match choice.attribute {
            ProfessionalAttribute::Field(f) => field = Some(f),
            ProfessionalAttribute::Motivation(m) => motivation = Some(m),
            ProfessionalAttribute::Style(s) => learning_style = Some(s),
            ProfessionalAttribute::Presentation(p) => presentation = Some(p),
        }
        if choice.synthesizer_potential {
            indicators += 1;
        }
    }

    // Four answers over four distinct known questions fill every slot; a
    // repeated or missing question id cannot reach here with len == 4.
    let (field, motivation, learning_style, presentation) =
        match (field, motivation, learning_style, presentation) {
            (Some(f), Some(m), Some(s), Some(p)) => (f, m, s, p),
            _ => return Err(QuizError::InvalidProfessionalAnswerCount(answers.len())),
        };

    Ok(ProfessionalProfile {
        field,
        motivation,
        learning_style,
        presentation_preference: presentation,
        synthesizer_indicator_count: indicators,
        is_professional_synthesizer: indicators >= SYNTHESIZER_INDICATOR_THRESHOLD,
    })
}

/// Deterministic bridge from the professional attribute tuple onto one of
/// the five canonical groups, so the professional track can drive the
/// book matcher. Keyed on field, refined by motivation where a field
/// genuinely splits (hands-on technology reading lives with career/skill
/// titles; foundational education reading lives with textbooks).
pub fn interop_group(profile: &ProfessionalProfile) -> PersonalityGroup {
    match (profile.field, profile.motivation) {
        (Field::Business, _) => PersonalityGroup::Achiever,
        (Field::Humanities, _) => PersonalityGroup::Connector,
        (Field::Science, _) => PersonalityGroup::Thinker,
        (Field::Technology, Motivation::Practical) => PersonalityGroup::Achiever,
        (Field::Technology, _) => PersonalityGroup::Thinker,
        (Field::Medical, _) => PersonalityGroup::Thinker,
        (Field::Education, Motivation::Foundational) => PersonalityGroup::Thinker,
        (Field::Education, _) => PersonalityGroup::Connector,
        (Field::Arts, _) => PersonalityGroup::Builder,
        (Field::Agriculture, _) => PersonalityGroup::Individual,
    }
}
