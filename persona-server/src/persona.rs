//! The persona answering on the site owner's behalf.
//!
//! A [`Persona`] is two immutable strings built once at startup: the profile
//! document read from disk and the system prompt derived from it by filling
//! the instruction template. Request handling only ever reads them.

use std::path::Path;

use anyhow::Context;
use tracing::warn;

/// Instruction template wrapped around the profile document.
pub const PROMPT_TEMPLATE: &str = include_str!("prompt.txt");

/// Placeholder in [`PROMPT_TEMPLATE`] replaced by the profile text.
const PROFILE_SLOT: &str = "{profile}";

const QUESTION_DELIMITER: &str = "\n\nUser question:\n";

#[derive(Clone, Debug)]
pub struct Persona {
    profile: String,
    system_prompt: String,
}

impl Persona {
    /// Read the profile document at `path` and build the system prompt.
    ///
    /// A missing or unreadable document is fatal to startup. There is no
    /// degraded mode: the persona has no content without its profile.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let profile = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile document {}", path.display()))?;
        if profile.trim().is_empty() {
            warn!(path = %path.display(), "profile document is blank");
        }
        Ok(Self::from_profile(profile))
    }

    /// Build a persona from in-memory profile text.
    pub fn from_profile(profile: impl Into<String>) -> Self {
        let profile = profile.into();
        let system_prompt = PROMPT_TEMPLATE.replace(PROFILE_SLOT, &profile);
        Self {
            profile,
            system_prompt,
        }
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// The fixed instruction preamble with the profile interpolated.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Append one user question to the system prompt.
    ///
    /// The result is the complete payload for a single completion call;
    /// the profile always precedes the question.
    pub fn full_prompt(&self, message: &str) -> String {
        format!("{}{}{}", self.system_prompt, QUESTION_DELIMITER, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn system_prompt_embeds_the_profile() {
        let persona = Persona::from_profile("Ten years of herding llamas.");
        assert!(persona.system_prompt().contains("Ten years of herding llamas."));
        assert!(!persona.system_prompt().contains(PROFILE_SLOT));
    }

    #[test]
    fn full_prompt_puts_profile_before_question() {
        let persona = Persona::from_profile("PROFILE MARKER");
        let prompt = persona.full_prompt("What do you do?");
        let profile_at = prompt.find("PROFILE MARKER").unwrap();
        let question_at = prompt.find("What do you do?").unwrap();
        assert!(profile_at < question_at);
        assert!(prompt.contains("User question:"));
    }

    #[test]
    fn load_fails_for_missing_document() {
        let err = Persona::load(Path::new("/no/such/profile.txt")).unwrap_err();
        assert!(err.to_string().contains("profile"));
    }

    #[test]
    fn load_reads_the_document() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "Llama wrangler since 2015.").unwrap();

        let persona = Persona::load(tmp.path()).unwrap();
        assert_eq!(persona.profile(), "Llama wrangler since 2015.");
        assert!(persona.system_prompt().contains("Llama wrangler since 2015."));
    }

    #[test]
    fn blank_profile_is_not_fatal() {
        let tmp = NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "  \n\n").unwrap();

        let persona = Persona::load(tmp.path()).unwrap();
        assert!(persona.profile().trim().is_empty());
        assert!(persona.system_prompt().contains("source of truth"));
    }
}
