//! Canned response synthesis.
//!
//! There is no retrieval, ranking, or generation behind this module. A
//! query is matched case-insensitively against an ordered rule table and
//! the first matching template wins; a generic template is the fallback.

use crate::models::{QueryOptions, SourceCitation};

/// The synthesized portion of a query response.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub answer: String,
    pub confidence: f64,
    pub sources: Vec<SourceCitation>,
    pub reasoning: String,
}

/// One dispatch rule: a keyword the query must contain and the template
/// produced when it does.
struct Rule {
    keyword: &'static str,
    template: fn() -> Synthesis,
}

/// Evaluated top to bottom, first match wins.
const RULES: &[Rule] = &[
    Rule {
        keyword: "knee surgery",
        template: knee_surgery_template,
    },
    Rule {
        keyword: "pre-authorization",
        template: pre_authorization_template,
    },
];

/// Maps a query to its canned response fields.
///
/// `options` is part of the signature for wire compatibility but is not
/// applied: templates return their full source list regardless of
/// `max_sources`, and `confidence_threshold` filters nothing.
pub fn synthesize(query: &str, _options: &QueryOptions) -> Synthesis {
    let normalized = query.to_lowercase();

    RULES
        .iter()
        .find(|rule| normalized.contains(rule.keyword))
        .map(|rule| (rule.template)())
        .unwrap_or_else(generic_template)
}

fn knee_surgery_template() -> Synthesis {
    Synthesis {
        answer: "Based on the analyzed policy documents, knee surgery is covered under the \
                 medical benefits section with specific conditions. The policy requires \
                 pre-authorization for elective procedures and covers up to 80% of the cost \
                 after the deductible is met. Coverage includes both emergency and planned \
                 surgeries, with a maximum benefit limit of $50,000 per incident."
            .to_string(),
        confidence: 0.87,
        sources: vec![
            SourceCitation {
                document: "Health_Insurance_Policy_2024.pdf".to_string(),
                clause: "Section 4.2.1 - Orthopedic Surgery Coverage".to_string(),
                relevance: 0.94,
                page: 15,
            },
            SourceCitation {
                document: "Medical_Benefits_Guide.docx".to_string(),
                clause: "Chapter 3 - Surgical Procedures".to_string(),
                relevance: 0.87,
                page: 8,
            },
            SourceCitation {
                document: "Policy_Terms_Conditions.pdf".to_string(),
                clause: "Article 7.1 - Pre-authorization Requirements".to_string(),
                relevance: 0.82,
                page: 23,
            },
        ],
        reasoning: "The system analyzed multiple policy documents and identified relevant \
                    clauses using semantic similarity matching. Key factors considered \
                    include: surgical procedure classification, medical necessity criteria, \
                    benefit limits, and pre-authorization requirements. The confidence score \
                    reflects the alignment between query intent and document content."
            .to_string(),
    }
}

fn pre_authorization_template() -> Synthesis {
    Synthesis {
        answer: "Pre-authorization is required for all elective medical procedures, \
                 including surgeries, specialized treatments, and diagnostic procedures \
                 exceeding $1,000. The process must be initiated at least 48 hours before \
                 the procedure through the online portal or by calling the pre-auth \
                 helpline. Emergency procedures are exempt from pre-authorization \
                 requirements."
            .to_string(),
        confidence: 0.92,
        sources: vec![
            SourceCitation {
                document: "Policy_Terms_Conditions.pdf".to_string(),
                clause: "Article 7.1 - Pre-authorization Requirements".to_string(),
                relevance: 0.96,
                page: 23,
            },
            SourceCitation {
                document: "Claims_Processing_Guide.pdf".to_string(),
                clause: "Section 2.3 - Authorization Procedures".to_string(),
                relevance: 0.89,
                page: 12,
            },
        ],
        reasoning: "The query directly matches pre-authorization clauses in multiple policy \
                    documents. The system identified specific requirements, timelines, and \
                    exceptions with high confidence based on exact keyword matching and \
                    contextual analysis."
            .to_string(),
    }
}

fn generic_template() -> Synthesis {
    Synthesis {
        answer: "Based on the available policy documents, I found relevant information \
                 addressing your query. The policy contains specific provisions and \
                 conditions that apply to your situation. Please refer to the source \
                 documents for detailed terms and conditions."
            .to_string(),
        confidence: 0.75,
        sources: vec![SourceCitation {
            document: "General_Policy_Terms.pdf".to_string(),
            clause: "Section 1.1 - General Provisions".to_string(),
            relevance: 0.78,
            page: 5,
        }],
        reasoning: "The system performed semantic search across all available documents and \
                    identified potentially relevant clauses. The confidence score is \
                    moderate due to the general nature of the query and limited specific \
                    matches."
            .to_string(),
    }
}
