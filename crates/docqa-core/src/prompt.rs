//! Prompt assembly for the generation step.
//!
//! The prompt always has three parts in this order: an instruction line, the
//! retrieved context (chunks separated by a blank line, best match first) and a
//! question line followed by an answer cue. Only the wording is configurable.
use serde::{Deserialize, Serialize};

pub const CONTEXT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplate {
    pub instruction: String,
    pub question_label: String,
    pub answer_cue: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            instruction: "Use only the following document excerpts to answer:".to_string(),
            question_label: "Question:".to_string(),
            answer_cue: "Answer:".to_string(),
        }
    }
}

impl PromptTemplate {
    pub fn russian() -> Self {
        Self {
            instruction: "Используй только следующие фрагменты документов для ответа:".to_string(),
            question_label: "Вопрос:".to_string(),
            answer_cue: "Ответ:".to_string(),
        }
    }

    pub fn render<S: AsRef<str>>(&self, query: &str, chunks: &[S]) -> String {
        let parts: Vec<&str> = chunks.iter().map(|c| c.as_ref()).collect();
        let context = parts.join(CONTEXT_SEPARATOR);
        format!(
            "{}\n{}\n\n{} {}\n{}",
            self.instruction, context, self.question_label, query, self.answer_cue
        )
    }
}

pub fn build_prompt<S: AsRef<str>>(query: &str, chunks: &[S], template: &PromptTemplate) -> String {
    template.render(query, chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_instruction_context_question() {
        let prompt = build_prompt("what?", &["first", "second"], &PromptTemplate::default());
        assert_eq!(
            prompt,
            "Use only the following document excerpts to answer:\nfirst\n\nsecond\n\nQuestion: what?\nAnswer:"
        );
    }

    #[test]
    fn russian_preset_keeps_layout() {
        let prompt = PromptTemplate::russian().render("О чем?", &["фрагмент"]);
        assert!(prompt.starts_with("Используй только"));
        assert!(prompt.ends_with("Вопрос: О чем?\nОтвет:"));
    }
}
