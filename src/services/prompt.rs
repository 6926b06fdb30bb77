//! Prompt assembly for generation requests.

/// Instruction preamble prepended for structured-document generation.
///
/// Biases the model toward template-faithful output; plain generation
/// endpoints send the user prompt verbatim instead.
pub const DOC_PREAMBLE: &str = "\
You are an expert requirements engineer generating a structured document.
Follow the template section order and section titles exactly; do not add, remove, or rename sections.
If a section has no content, write \"Not specified\" under that section heading.
Keep all tables and diagrams inside fenced code blocks.";

/// Label under which extracted attachment text is appended.
const EXTRACTED_LABEL: &str = "Extracted content:";

/// Assemble the final prompt: optional preamble, user prompt, optional
/// extracted text, in that order, separated by blank lines.
pub fn assemble(preamble: Option<&str>, prompt: &str, extracted: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(preamble) = preamble {
        parts.push(preamble.to_string());
    }

    parts.push(prompt.to_string());

    if let Some(extracted) = extracted {
        parts.push(format!("{}\n{}", EXTRACTED_LABEL, extracted));
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prompt_passes_through_verbatim() {
        assert_eq!(
            assemble(None, "Generate an SRS for a todo app", None),
            "Generate an SRS for a todo app"
        );
    }

    #[test]
    fn preamble_comes_first_separated_by_a_blank_line() {
        let assembled = assemble(Some(DOC_PREAMBLE), "Build a BRD", None);
        assert!(assembled.starts_with(DOC_PREAMBLE));
        assert!(assembled.ends_with("\n\nBuild a BRD"));
    }

    #[test]
    fn extracted_text_is_appended_under_its_label() {
        let assembled = assemble(None, "Summarize", Some("Page one text"));
        assert_eq!(assembled, "Summarize\n\nExtracted content:\nPage one text");
    }

    #[test]
    fn full_assembly_keeps_fixed_order() {
        let assembled = assemble(Some(DOC_PREAMBLE), "prompt", Some("doc text"));
        let preamble_pos = assembled.find(DOC_PREAMBLE).unwrap();
        let prompt_pos = assembled.find("\n\nprompt\n\n").unwrap();
        let extracted_pos = assembled.find("Extracted content:\ndoc text").unwrap();
        assert!(preamble_pos < prompt_pos && prompt_pos < extracted_pos);
    }
}
