#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// The five reader personality groups. Declaration order is load-bearing:
/// score accumulation, stable ranking, and `all_scores` serialization all
/// iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityGroup {
    #[serde(rename = "Kết nối")]
    Connector,
    #[serde(rename = "Tự do")]
    Individual,
    #[serde(rename = "Tri thức")]
    Thinker,
    #[serde(rename = "Chinh phục")]
    Achiever,
    #[serde(rename = "Kiến tạo")]
    Builder,
}

impl PersonalityGroup {
    pub const ALL: [PersonalityGroup; 5] = [
        PersonalityGroup::Connector,
        PersonalityGroup::Individual,
        PersonalityGroup::Thinker,
        PersonalityGroup::Achiever,
        PersonalityGroup::Builder,
    ];

    /// Vietnamese wire label, identical to the serde rename.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityGroup::Connector => "Kết nối",
            PersonalityGroup::Individual => "Tự do",
            PersonalityGroup::Thinker => "Tri thức",
            PersonalityGroup::Achiever => "Chinh phục",
            PersonalityGroup::Builder => "Kiến tạo",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            PersonalityGroup::Connector => "The Connectors",
            PersonalityGroup::Individual => "The Individuals",
            PersonalityGroup::Thinker => "The Thinkers",
            PersonalityGroup::Achiever => "The Achievers",
            PersonalityGroup::Builder => "The Builders",
        }
    }
}

impl fmt::Display for PersonalityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-group score accumulator. Every group is always present, even at 0.
///
/// Serializes as a JSON object whose keys appear in group declaration
/// order, which a derived map type would not guarantee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupScores([u32; 5]);

impl GroupScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, group: PersonalityGroup) {
        self.0[group as usize] += 1;
    }

    pub fn get(&self, group: PersonalityGroup) -> u32 {
        self.0[group as usize]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// All five groups ordered by score descending; equal scores keep
    /// declaration order (stable sort).
    pub fn ranked(&self) -> Vec<(PersonalityGroup, u32)> {
        let mut ranked: Vec<(PersonalityGroup, u32)> = PersonalityGroup::ALL
            .iter()
            .map(|g| (*g, self.get(*g)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for GroupScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PersonalityGroup::ALL.len()))?;
        for group in PersonalityGroup::ALL {
            map.serialize_entry(group.label(), &self.get(group))?;
        }
        map.end()
    }
}

/// Resolved reader profile. A pure value: built once per request, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub primary_group: PersonalityGroup,
    pub secondary_group: Option<PersonalityGroup>,
    pub primary_score: u32,
    pub secondary_score: u32,
    pub synthesizer_score: u32,
    pub is_synthesizer: bool,
    pub profile_name: String,
    pub english_name: String,
    pub all_scores: GroupScores,
    pub is_multi_motivated: bool,
}

pub const SYNTHESIZER_SUFFIX: &str = "–Synthesizer";

impl Profile {
    /// Minimal stand-in profile for flows that arrive at a canonical group
    /// without discovery answers (the professional track).
    pub fn for_group(group: PersonalityGroup, is_synthesizer: bool) -> Self {
        let mut all_scores = GroupScores::new();
        all_scores.add(group);
        let suffix = if is_synthesizer { SYNTHESIZER_SUFFIX } else { "" };
        Profile {
            primary_group: group,
            secondary_group: None,
            primary_score: 1,
            secondary_score: 0,
            synthesizer_score: 0,
            is_synthesizer,
            profile_name: format!("{}{}", group.label(), suffix),
            english_name: format!("{}{}", group.english_name(), suffix),
            all_scores,
            is_multi_motivated: true,
        }
    }
}

/// A single discovery-track choice. A synthesizer-flagged choice may carry
/// no group tag at all; it then feeds only the synthesizer counter.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryChoice {
    pub text: &'static str,
    pub group: Option<PersonalityGroup>,
    pub synthesizer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Business,
    Humanities,
    Science,
    Technology,
    Medical,
    Education,
    Arts,
    Agriculture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    Foundational,
    Practical,
    Exploratory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Structured,
    Integrative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    Analytical,
    Narrative,
    Integrative,
}

/// The one attribute a professional-track choice contributes. Each
/// question of the track covers exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalAttribute {
    Field(Field),
    Motivation(Motivation),
    Style(LearningStyle),
    Presentation(Presentation),
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfessionalChoice {
    pub text: &'static str,
    #[serde(flatten)]
    pub attribute: ProfessionalAttribute,
    pub synthesizer_potential: bool,
}

/// An ordered quiz question generic over its choice shape.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "C: Serialize"))]
pub struct Question<C> {
    pub id: &'static str,
    pub prompt: &'static str,
    #[serde(serialize_with = "serialize_choices")]
    pub choices: Vec<(char, C)>,
}

impl<C> Question<C> {
    pub fn choice(&self, letter: char) -> Option<&C> {
        self.choices
            .iter()
            .find(|(key, _)| *key == letter)
            .map(|(_, choice)| choice)
    }
}

fn serialize_choices<C: Serialize, S: Serializer>(
    choices: &[(char, C)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(choices.len()))?;
    for (letter, choice) in choices {
        map.serialize_entry(letter, choice)?;
    }
    map.end()
}

/// Both static question catalogs, built once at startup and shared
/// read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub discovery: Vec<Question<DiscoveryChoice>>,
    pub professional: Vec<Question<ProfessionalChoice>>,
}

impl QuestionBank {
    pub fn discovery_question(&self, id: &str) -> Option<&Question<DiscoveryChoice>> {
        self.discovery.iter().find(|q| q.id == id)
    }

    pub fn professional_question(&self, id: &str) -> Option<&Question<ProfessionalChoice>> {
        self.professional.iter().find(|q| q.id == id)
    }
}

/// Raw answers as they arrive at the boundary: question id → chosen
/// letter. BTreeMap keeps iteration deterministic.
pub type AnswerMap = BTreeMap<String, String>;
