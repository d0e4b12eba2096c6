use super::engine::Percentages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable keys of the four classification outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeId {
    VisionaryArchitect,
    TenXAchiever,
    AgileExplorer,
    HumanistStrategist,
}

impl ArchetypeId {
    pub const ALL: [ArchetypeId; 4] = [
        ArchetypeId::VisionaryArchitect,
        ArchetypeId::TenXAchiever,
        ArchetypeId::AgileExplorer,
        ArchetypeId::HumanistStrategist,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ArchetypeId::VisionaryArchitect => "visionary_architect",
            ArchetypeId::TenXAchiever => "ten_x_achiever",
            ArchetypeId::AgileExplorer => "agile_explorer",
            ArchetypeId::HumanistStrategist => "humanist_strategist",
        }
    }

    pub fn template(&self) -> &'static ArchetypeTemplate {
        match self {
            ArchetypeId::VisionaryArchitect => &VISIONARY_ARCHITECT,
            ArchetypeId::TenXAchiever => &TEN_X_ACHIEVER,
            ArchetypeId::AgileExplorer => &AGILE_EXPLORER,
            ArchetypeId::HumanistStrategist => &HUMANIST_STRATEGIST,
        }
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Static, process-wide archetype record. Results are produced from it with
/// [`ArchetypeTemplate::instantiate`]; the template itself is never written.
#[derive(Debug, PartialEq, Eq)]
pub struct ArchetypeTemplate {
    pub id: ArchetypeId,
    pub title: &'static str,
    pub definition: &'static str,
    pub tags: &'static [&'static str],
    pub description: &'static str,
}

impl ArchetypeTemplate {
    /// Owned copy that can be personalized.
    pub fn instantiate(&self) -> Archetype {
        Archetype {
            id: self.id,
            title: self.title.to_string(),
            definition: self.definition.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            description: self.description.to_string(),
            percentages: Percentages::default(),
            dimension_scores: Vec::new(),
        }
    }
}

static VISIONARY_ARCHITECT: ArchetypeTemplate = ArchetypeTemplate {
    id: ArchetypeId::VisionaryArchitect,
    title: "The Visionary Architect",
    definition: "High Tech + High Adaptability",
    tags: &["Top 1% Talent", "Future Leader", "AI Native"],
    description: "You are the CTO material of the AI era in India. You not only master tools like RAG and Agentic workflows but also lead through cultural shifts. You're ready to build the next unicorn.",
};

static TEN_X_ACHIEVER: ArchetypeTemplate = ArchetypeTemplate {
    id: ArchetypeId::TenXAchiever,
    title: "The 10x Achiever",
    definition: "High Tech + Low/Mid Adaptability",
    tags: &["Productivity Ninja", "Execution Master", "Tech Savvy"],
    description: "You are a super executor. You use AI to automate the \"boring stuff\" (like GST filing and Jira logs), making you indispensable to any MNC or high-growth startup.",
};

static AGILE_EXPLORER: ArchetypeTemplate = ArchetypeTemplate {
    id: ArchetypeId::AgileExplorer,
    title: "The Agile Explorer",
    definition: "Low Tech + High Adaptability",
    tags: &["High Potential", "Fast Learner", "Growth Mindset"],
    description: "Your mindset is your greatest asset. While you're still building your AI tool stack, your willingness to pivot and experiment means you'll quickly outpace those stuck in old ways.",
};

static HUMANIST_STRATEGIST: ArchetypeTemplate = ArchetypeTemplate {
    id: ArchetypeId::HumanistStrategist,
    title: "The Humanist Strategist",
    definition: "Low Tech + Low Adaptability",
    tags: &["People Leader", "EQ Master", "Value Driven"],
    description: "You excel at the \"human\" side\u{2014}empathy and ethics. However, to stay relevant in India's competitive market, you need to augment your EQ with AI efficiency.",
};

/// One labeled radar-chart value, 0-100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub label: &'static str,
    pub value: f64,
}

/// A personalized classification result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Archetype {
    pub id: ArchetypeId,
    pub title: String,
    pub definition: String,
    pub tags: Vec<String>,
    pub description: String,
    pub percentages: Percentages,
    /// Fixed order: Prompting, Tool Stack, Automation, Critical Thinking, Risk Awareness.
    pub dimension_scores: Vec<DimensionScore>,
}

impl Archetype {
    pub fn template(&self) -> &'static ArchetypeTemplate {
        self.id.template()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The two dimensions quoted in share texts (positions 0 and 4).
    pub fn highlighted_dimensions(&self) -> Option<(&DimensionScore, &DimensionScore)> {
        Some((self.dimension_scores.first()?, self.dimension_scores.get(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_ids_match() {
        for id in ArchetypeId::ALL {
            assert_eq!(id.template().id, id);
        }
    }

    #[test]
    fn test_keys_match_serde() {
        for id in ArchetypeId::ALL {
            assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id.key()));
        }
    }

    #[test]
    fn test_instantiate_copies_template() {
        let template = ArchetypeId::AgileExplorer.template();
        let archetype = template.instantiate();
        assert_eq!(archetype.title, "The Agile Explorer");
        assert_eq!(archetype.tags, vec!["High Potential", "Fast Learner", "Growth Mindset"]);
        assert_eq!(archetype.description, template.description);
        assert!(archetype.dimension_scores.is_empty());
    }

    #[test]
    fn test_mutating_instance_leaves_template_alone() {
        let mut first = ArchetypeId::VisionaryArchitect.template().instantiate();
        first.tags.push("Safety Champion".to_string());
        first.description.insert_str(0, "Prefix. ");

        let second = ArchetypeId::VisionaryArchitect.template().instantiate();
        assert_eq!(second.tags.len(), 3);
        assert!(!second.has_tag("Safety Champion"));
        assert!(!second.description.starts_with("Prefix."));
    }

    #[test]
    fn test_highlighted_dimensions_requires_five() {
        let archetype = ArchetypeId::TenXAchiever.template().instantiate();
        assert!(archetype.highlighted_dimensions().is_none());
    }
}
