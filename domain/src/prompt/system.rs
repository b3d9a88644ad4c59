//! System instruction sent with every model request.

/// Templates for the system instruction
pub struct SystemPrompt;

impl SystemPrompt {
    /// System instruction for question answering with the article tool.
    pub fn question_answering(tool_name: &str) -> String {
        format!(
            r#"You will be asked a question by the user.
If you can answer the question from your own knowledge, answer it directly.
If answering the question requires data you were not trained on, such as events after your training cutoff, you must use the {tool_name} tool to get the contents of a recent Wikipedia article about the topic.
Only call the tool when it is needed. Never call it speculatively."#
        )
    }
}
