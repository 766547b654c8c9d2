//! Summary styles and their instruction templates.
//!
//! Each style maps to one fixed natural-language instruction that embeds the
//! raw article body. The set is closed; unknown tags fall back to `Concise`.

use serde::{Deserialize, Serialize};

/// The closed set of supported summary styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    Concise,
    Bullet,
    Eli5,
    Executive,
    Detailed,
    ProsCons,
    Facts,
}

impl SummaryStyle {
    /// All styles, in presentation order.
    pub const ALL: [SummaryStyle; 7] = [
        SummaryStyle::Concise,
        SummaryStyle::Bullet,
        SummaryStyle::Eli5,
        SummaryStyle::Executive,
        SummaryStyle::Detailed,
        SummaryStyle::ProsCons,
        SummaryStyle::Facts,
    ];

    /// Resolve a style tag, falling back to `Concise` for anything unrecognised.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "concise" => SummaryStyle::Concise,
            "bullet" => SummaryStyle::Bullet,
            "eli5" => SummaryStyle::Eli5,
            "executive" => SummaryStyle::Executive,
            "detailed" => SummaryStyle::Detailed,
            "proscons" => SummaryStyle::ProsCons,
            "facts" => SummaryStyle::Facts,
            _ => SummaryStyle::Concise,
        }
    }

    /// The wire tag for this style.
    pub fn tag(&self) -> &'static str {
        match self {
            SummaryStyle::Concise => "concise",
            SummaryStyle::Bullet => "bullet",
            SummaryStyle::Eli5 => "eli5",
            SummaryStyle::Executive => "executive",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::ProsCons => "proscons",
            SummaryStyle::Facts => "facts",
        }
    }

    /// Human-readable label, used in exports and listings.
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Concise => "Concise Paragraph",
            SummaryStyle::Bullet => "Bullet Points",
            SummaryStyle::Eli5 => "Explain Like I'm 5 (ELI5)",
            SummaryStyle::Executive => "Executive Summary",
            SummaryStyle::Detailed => "Detailed Breakdown",
            SummaryStyle::ProsCons => "Pros & Cons",
            SummaryStyle::Facts => "Key Facts & Statistics",
        }
    }

    /// Short description shown in CLI help output.
    pub fn description(&self) -> &'static str {
        match self {
            SummaryStyle::Concise => "A single, clear summary paragraph of the article.",
            SummaryStyle::Bullet => "A list of 5-7 key takeaways.",
            SummaryStyle::Eli5 => "Simplified, beginner-friendly version, good for all audiences.",
            SummaryStyle::Executive => "High-level insights for busy professionals.",
            SummaryStyle::Detailed => {
                "A multi-paragraph structured summary: introduction, body, conclusion."
            }
            SummaryStyle::ProsCons => {
                "For reviews or opinion articles, show advantages/disadvantages."
            }
            SummaryStyle::Facts => "Only extract factual data or stats.",
        }
    }

    /// Build the user-turn instruction for this style, embedding the raw
    /// article body verbatim. No truncation happens here; oversized bodies are
    /// the provider's problem.
    pub fn instruction(&self, body: &str) -> String {
        match self {
            SummaryStyle::Concise => format!(
                "You are given html content as article. Please provide a single, clear summary \
                 paragraph of this article. Focus on the main points and keep it concise and in \
                 your output dont mention that you were given html content: {body}"
            ),
            SummaryStyle::Bullet => format!(
                "You are given html content as article. Please provide 5-7 key bullet points \
                 summarizing the main takeaways from this article and in your output dont \
                 mention that you were given html content: {body}"
            ),
            SummaryStyle::Eli5 => format!(
                "You are given html content as article. Please explain this article in simple \
                 terms, as if explaining it to a 5-year-old. Use basic language and avoid \
                 complex terms and in your output dont mention that you were given html \
                 content: {body}"
            ),
            SummaryStyle::Executive => format!(
                "You are given html content as article. Please provide an executive summary of \
                 this article. Focus on high-level insights, key findings, and business \
                 implications and in your output dont mention that you were given html \
                 content: {body}"
            ),
            SummaryStyle::Detailed => format!(
                "You are given html content as article. Please provide a detailed breakdown of \
                 this article with the following structure:\n\
                 1. Introduction: Main topic and context\n\
                 2. Body: Key points and supporting details\n\
                 3. Conclusion: Main takeaways and implications\n\
                 In your output dont mention that you were given html content\n\
                 Article: {body}"
            ),
            SummaryStyle::ProsCons => format!(
                "You are given html content as article. Please analyze this article and provide \
                 a list of pros and cons, advantages and disadvantages, or positive and \
                 negative aspects and in your output dont mention that you were given html \
                 content: {body}"
            ),
            SummaryStyle::Facts => format!(
                "You are given html content as article. Please extract only the key facts, \
                 statistics, and numerical data that is related to this article. Focus on \
                 verifiable information and in your output dont mention that you were given \
                 html content: {body}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_embeds_the_body_verbatim() {
        let body = "<html><p>unique-marker-8841</p></html>";
        for style in SummaryStyle::ALL {
            let instruction = style.instruction(body);
            assert!(
                instruction.contains(body),
                "style {:?} dropped the body",
                style
            );
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_concise() {
        assert_eq!(SummaryStyle::from_tag("haiku"), SummaryStyle::Concise);
        assert_eq!(SummaryStyle::from_tag(""), SummaryStyle::Concise);
        let fallback = SummaryStyle::from_tag("haiku").instruction("x");
        assert_eq!(fallback, SummaryStyle::Concise.instruction("x"));
    }

    #[test]
    fn tags_round_trip() {
        for style in SummaryStyle::ALL {
            assert_eq!(SummaryStyle::from_tag(style.tag()), style);
        }
    }

    #[test]
    fn detailed_requests_three_part_structure() {
        let instruction = SummaryStyle::Detailed.instruction("body");
        assert!(instruction.contains("1. Introduction"));
        assert!(instruction.contains("2. Body"));
        assert!(instruction.contains("3. Conclusion"));
    }

    #[test]
    fn serde_tags_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&SummaryStyle::ProsCons).unwrap(),
            "\"proscons\""
        );
        assert_eq!(
            serde_json::from_str::<SummaryStyle>("\"eli5\"").unwrap(),
            SummaryStyle::Eli5
        );
    }
}
