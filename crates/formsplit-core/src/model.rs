use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a template, from a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Consent,
    Consultation,
    TreatmentRecord,
    MedicalHistory,
    Aftercare,
    Policy,
    Waiver,
    Checklist,
    LessonPlan,
    Assessment,
    Rubric,
    Certificate,
    Pricing,
    RiskAssessment,
    /// Fallback when no keyword matches.
    Document,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Consent => "consent",
            Category::Consultation => "consultation",
            Category::TreatmentRecord => "treatment_record",
            Category::MedicalHistory => "medical_history",
            Category::Aftercare => "aftercare",
            Category::Policy => "policy",
            Category::Waiver => "waiver",
            Category::Checklist => "checklist",
            Category::LessonPlan => "lesson_plan",
            Category::Assessment => "assessment",
            Category::Rubric => "rubric",
            Category::Certificate => "certificate",
            Category::Pricing => "pricing",
            Category::RiskAssessment => "risk_assessment",
            Category::Document => "document",
        }
    }

    /// Parse a category tag; unknown tags are `None`.
    pub fn from_tag(s: &str) -> Option<Category> {
        let category = match s.trim() {
            "consent" => Category::Consent,
            "consultation" => Category::Consultation,
            "treatment_record" => Category::TreatmentRecord,
            "medical_history" => Category::MedicalHistory,
            "aftercare" => Category::Aftercare,
            "policy" => Category::Policy,
            "waiver" => Category::Waiver,
            "checklist" => Category::Checklist,
            "lesson_plan" => Category::LessonPlan,
            "assessment" => Category::Assessment,
            "rubric" => Category::Rubric,
            "certificate" => Category::Certificate,
            "pricing" => Category::Pricing,
            "risk_assessment" => Category::RiskAssessment,
            "document" => Category::Document,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted template unit, finalized by the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Header text as matched in the source line.
    pub raw_title: String,
    /// Normalized display title.
    pub title: String,
    pub slug: String,
    /// Trimmed body lines joined with `\n`.
    pub content: String,
}

impl Segment {
    /// Content length in characters (not bytes).
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// A finalized segment with the category assigned at emission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    pub category: Category,
}
