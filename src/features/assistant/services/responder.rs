//! Canned text responses for the assistant chat.
//!
//! Templates carry `{text}` (the user's message) and `{page}` (a manual page)
//! placeholders. The page is substituted first so user text is never rescanned.

use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

use crate::shared::constants::MANUAL_PAGE_COUNT;

pub struct ResponseCategory {
    pub name: &'static str,
    pub pattern: Regex,
    pub templates: [&'static str; 3],
}

fn category(name: &'static str, pattern: &str, templates: [&'static str; 3]) -> ResponseCategory {
    ResponseCategory {
        name,
        pattern: Regex::new(pattern).unwrap(),
        templates,
    }
}

lazy_static! {
    /// Checked in order; the first matching category wins
    pub static ref CATEGORIES: Vec<ResponseCategory> = vec![
        category(
            "troubleshoot",
            r"(?i)troubleshoot|problem|issue|error|fault",
            [
                "For the issue you've described (\"{text}\"), I recommend starting with basic diagnostics. First, check power connections and status indicators.\n\n📋 **Reference Documentation:**\n[Equipment Diagnostics Manual](/pdfs/manual.pdf#page={page}) - Section 3.1: Initial Diagnostic Procedures",
                "Based on \"{text}\", this appears to be a common troubleshooting scenario. Let me guide you through the standard diagnostic procedure.\n\n📋 **Reference Documentation:**\n[Troubleshooting Guide](/pdfs/manual.pdf#page={page}) - Chapter 4: Common Issues Resolution",
                "I understand you're experiencing \"{text}\". Let's begin with systematic troubleshooting to identify the root cause.\n\n📋 **Reference Documentation:**\n[System Diagnostic Procedures](/pdfs/manual.pdf#page={page}) - Section 7.2: Root Cause Analysis",
            ],
        ),
        category(
            "repair",
            r"(?i)repair|fix|replace|maintenance",
            [
                "For the repair you mentioned (\"{text}\"), I'll provide step-by-step guidance. Please ensure you have proper safety equipment before proceeding.\n\n📋 **Reference Documentation:**\n[Repair Procedures Manual](/pdfs/manual.pdf#page={page}) - Section 8.3: Component Replacement Guidelines",
                "Regarding the repair of \"{text}\", here's the recommended procedure from our technical documentation.\n\n📋 **Reference Documentation:**\n[Technical Service Manual](/pdfs/manual.pdf#page={page}) - Chapter 12: Maintenance Procedures",
                "The repair process for \"{text}\" typically involves several steps. Let me walk you through the proper sequence.\n\n📋 **Reference Documentation:**\n[Step-by-Step Repair Guide](/pdfs/manual.pdf#page={page}) - Section 10.1: Sequential Repair Process",
            ],
        ),
        category(
            "parts",
            r"(?i)parts|component|spare|inventory",
            [
                "For the parts inquiry about \"{text}\", I can help you identify the correct components and part numbers.\n\n📋 **Reference Documentation:**\n[Parts Catalog](/pdfs/manual.pdf#page={page}) - Section 15.2: Component Specifications and Part Numbers",
                "Regarding parts for \"{text}\", let me check our inventory database for availability and specifications.\n\n📋 **Reference Documentation:**\n[Inventory Management Guide](/pdfs/manual.pdf#page={page}) - Chapter 6: Parts Availability and Ordering",
                "The components you mentioned in \"{text}\" are available. Here are the part details and ordering information.\n\n📋 **Reference Documentation:**\n[Component Specifications](/pdfs/manual.pdf#page={page}) - Section 11.4: Detailed Part Information",
            ],
        ),
        category(
            "safety",
            r"(?i)safety|precaution|warning|hazard",
            [
                "Safety is paramount when dealing with \"{text}\". Please review all safety protocols before proceeding.\n\n📋 **Reference Documentation:**\n[Safety Procedures Handbook](/pdfs/manual.pdf#page={page}) - Chapter 2: Equipment Safety Protocols",
                "For the safety concern about \"{text}\", here are the essential precautions and protective measures.\n\n📋 **Reference Documentation:**\n[Workplace Safety Manual](/pdfs/manual.pdf#page={page}) - Section 4.1: Hazard Prevention and PPE Requirements",
                "Regarding the safety aspects of \"{text}\", always follow lockout/tagout procedures and wear appropriate PPE.\n\n📋 **Reference Documentation:**\n[LOTO Procedures Guide](/pdfs/manual.pdf#page={page}) - Section 1.3: Lockout/Tagout Implementation",
            ],
        ),
        category(
            "manual",
            r"(?i)manual|documentation|guide|instruction",
            [
                "I can provide detailed documentation for \"{text}\". Let me reference the latest technical manuals.\n\n📋 **Reference Documentation:**\n[Technical Documentation Index](/pdfs/manual.pdf#page={page}) - Section 1.1: Manual Reference Guide",
                "For the procedure you asked about (\"{text}\"), here's the step-by-step guide from our documentation.\n\n📋 **Reference Documentation:**\n[Operating Procedures Manual](/pdfs/manual.pdf#page={page}) - Chapter 8: Standard Operating Procedures",
                "The manual for \"{text}\" contains specific instructions. I'll extract the relevant sections for you.\n\n📋 **Reference Documentation:**\n[Equipment Manual Library](/pdfs/manual.pdf#page={page}) - Section 13.2: Equipment-Specific Instructions",
            ],
        ),
    ];
}

pub const DEFAULT_TEMPLATES: [&str; 4] = [
    "I understand you're asking about: \"{text}\". Let me help you with that.\n\n📋 **Reference Documentation:**\n[General Maintenance Guide](/pdfs/manual.pdf#page={page}) - Introduction to Equipment Maintenance",
    "Based on your question about \"{text}\", here are some recommendations...\n\n📋 **Reference Documentation:**\n[Technical Reference Manual](/pdfs/manual.pdf#page={page}) - Section 2.5: General Technical Guidelines",
    "Regarding \"{text}\" - I can provide technical guidance and assistance.\n\n📋 **Reference Documentation:**\n[Technical Support Handbook](/pdfs/manual.pdf#page={page}) - Chapter 1: Getting Started with Technical Support",
    "Thank you for your question about \"{text}\". Here's what I can help you with...\n\n📋 **Reference Documentation:**\n[User Support Guide](/pdfs/manual.pdf#page={page}) - Section 1.4: Common Questions and Answers",
];

/// Optional trailing reference; one entry is intentionally empty
pub const REFERENCE_SUFFIXES: [&str; 6] = [
    "\n📄 **Additional References:**\n[Quick Reference Guide](/pdfs/manual.pdf#page={page}) - Essential Information",
    "\n📖 **See Also:**\n[Technical Appendix](/pdfs/manual.pdf#page={page}) - Detailed Specifications",
    "\n🔧 **Related Information:**\n[Best Practices Guide](/pdfs/manual.pdf#page={page}) - Professional Tips",
    "\n⚡ **Quick Access:**\n[Emergency Procedures](/pdfs/manual.pdf#page={page}) - Critical Information",
    "\n📋 **Cross-Reference:**\n[Index and Glossary](/pdfs/manual.pdf#page={page}) - Terms and Definitions",
    "",
];

pub fn random_page<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=MANUAL_PAGE_COUNT)
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Fill `{page}` with a fresh random page, then `{text}`
pub fn render<R: Rng + ?Sized>(rng: &mut R, template: &str, text: &str) -> String {
    template
        .replace("{page}", &random_page(rng).to_string())
        .replace("{text}", text)
}

/// A random reference suffix, possibly empty
pub fn reference_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix = pick(rng, &REFERENCE_SUFFIXES);
    render(rng, suffix, "")
}

pub fn match_category(text: &str) -> Option<&'static ResponseCategory> {
    CATEGORIES.iter().find(|c| c.pattern.is_match(text))
}

/// Build the assistant's reply to a chat message
pub fn generate_response<R: Rng + ?Sized>(rng: &mut R, text: &str, ticket_id: Option<i32>) -> String {
    let template = match match_category(text) {
        Some(category) => pick(rng, &category.templates),
        None => pick(rng, &DEFAULT_TEMPLATES),
    };

    let mut response = render(rng, template, text);
    response.push_str(&reference_suffix(rng));

    if let Some(id) = ticket_id {
        response.push_str(&format!(
            "\n\nThis guidance is specifically for ticket #{}. I can provide more detailed, \
             context-specific assistance based on the ticket information.",
            id
        ));
    }

    response
}
