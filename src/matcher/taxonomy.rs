// The fixed job-field taxonomy.
//
// Order matters twice: skills are reported in taxonomy order, and a tie in
// field scores goes to the field listed first.

/// Label returned when no field keyword matches.
pub const GENERAL_FIELD: &str = "General";

/// One job field and the keywords that signal it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    /// Single words or space-separated phrases, all lowercase
    pub keywords: &'static [&'static str],
}

pub static SKILL_TAXONOMY: &[Field] = &[
    Field {
        name: "data science",
        keywords: &[
            "python",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "keras",
            "pytorch",
            "machine learning",
            "deep learning",
            "nlp",
            "statistics",
            "sql",
            "modeling",
        ],
    },
    Field {
        name: "web development",
        keywords: &[
            "html",
            "css",
            "javascript",
            "react",
            "vue",
            "angular",
            "node",
            "express",
            "django",
            "flask",
            "typescript",
        ],
    },
    Field {
        name: "marketing",
        keywords: &["marketing", "seo", "branding", "advertising", "content", "campaign"],
    },
    Field {
        name: "sales",
        keywords: &["sales", "crm", "negotiation", "lead generation", "b2b", "b2c"],
    },
    Field {
        name: "graphic design",
        keywords: &["photoshop", "illustrator", "figma", "ui", "ux", "adobe"],
    },
    Field {
        name: "medicine",
        keywords: &["medical", "clinical", "patient", "diagnosis", "surgery", "nurse"],
    },
    Field {
        name: "finance",
        keywords: &["accounting", "finance", "budgeting", "excel", "audit", "tax"],
    },
    Field {
        name: "education",
        keywords: &["teacher", "curriculum", "lesson", "training", "student"],
    },
    Field {
        name: "engineering",
        keywords: &["cad", "mechanical", "electrical", "civil", "autocad"],
    },
    Field {
        name: "law",
        keywords: &["law", "legal", "contract", "compliance", "litigation"],
    },
];

/// Every label `detect_job_field` can return, taxonomy fields first.
pub fn field_labels() -> impl Iterator<Item = &'static str> {
    SKILL_TAXONOMY
        .iter()
        .map(|field| field.name)
        .chain(std::iter::once(GENERAL_FIELD))
}

/// True if `word` is one of the words making up any taxonomy keyword.
pub fn is_keyword_term(word: &str) -> bool {
    SKILL_TAXONOMY
        .iter()
        .flat_map(|field| field.keywords.iter())
        .flat_map(|kw| kw.split_whitespace())
        .any(|part| part == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique() {
        let names: HashSet<&str> = SKILL_TAXONOMY.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), SKILL_TAXONOMY.len());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for field in SKILL_TAXONOMY {
            for kw in field.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword {kw:?} in {}", field.name);
            }
        }
    }

    #[test]
    fn test_eleven_labels_with_general_last() {
        let labels: Vec<&str> = field_labels().collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels[0], "data science");
        assert_eq!(labels[10], GENERAL_FIELD);
    }

    #[test]
    fn test_keyword_terms_include_phrase_parts() {
        assert!(is_keyword_term("lead"));
        assert!(is_keyword_term("generation"));
        assert!(is_keyword_term("python"));
        assert!(!is_keyword_term("the"));
        assert!(!is_keyword_term("lead generation"));
    }
}
