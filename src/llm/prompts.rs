//! Summary instruction building.

use crate::config::SummarySettings;

/// Word budget for the generated summary, clamped to the configured range and
/// snapped to the configured step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLimit(u32);

impl WordLimit {
    pub fn new(requested: u32, settings: &SummarySettings) -> Self {
        let clamped = requested.clamp(settings.min_words, settings.max_words);
        let step = settings.word_step.max(1);
        let snapped = settings.min_words + ((clamped - settings.min_words) / step) * step;
        Self(snapped)
    }

    pub fn default_for(settings: &SummarySettings) -> Self {
        Self::new(settings.default_words, settings)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// The fixed summary instruction, parameterized by the word budget.
pub fn summary_instruction(limit: WordLimit) -> String {
    format!(
        "You are a YouTube video summarizer. You will be taking the transcript text \
and summarizing the entire video, providing the important summary in points within {} words. \
Please provide the summary of the given YouTube caption here: ",
        limit.get()
    )
}

/// The instruction actually sent: the fixed template, unless the caller
/// supplied a free-text instruction, which replaces it entirely.
pub fn resolve_instruction(custom: Option<&str>, limit: WordLimit) -> String {
    match custom.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => summary_instruction(limit),
    }
}

/// One well-defined model payload: instruction first, transcript after.
pub fn build_payload(instruction: &str, transcript: &str) -> String {
    format!("{instruction}{transcript}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummarySettings;

    fn settings() -> SummarySettings {
        SummarySettings::default()
    }

    #[test]
    fn defaults_to_midpoint() {
        assert_eq!(WordLimit::default_for(&settings()).get(), 250);
    }

    #[test]
    fn clamps_to_configured_range() {
        assert_eq!(WordLimit::new(10, &settings()).get(), 50);
        assert_eq!(WordLimit::new(9000, &settings()).get(), 500);
    }

    #[test]
    fn snaps_to_step() {
        assert_eq!(WordLimit::new(123, &settings()).get(), 120);
        assert_eq!(WordLimit::new(250, &settings()).get(), 250);
    }

    #[test]
    fn instruction_embeds_exact_word_count() {
        let instruction = summary_instruction(WordLimit::new(300, &settings()));
        assert!(instruction.contains("within 300 words"));
    }

    #[test]
    fn custom_instruction_replaces_template() {
        let limit = WordLimit::default_for(&settings());

        let custom = resolve_instruction(Some("Summarize as a haiku."), limit);
        assert_eq!(custom, "Summarize as a haiku.");

        let blank = resolve_instruction(Some("   "), limit);
        assert!(blank.contains("within 250 words"));

        let template = resolve_instruction(None, limit);
        assert!(template.contains("within 250 words"));
    }

    #[test]
    fn payload_prepends_instruction_to_transcript() {
        let payload = build_payload("Summarize: ", "Hello world");
        assert_eq!(payload, "Summarize: Hello world");
    }
}
