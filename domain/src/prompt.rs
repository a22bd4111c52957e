use crate::message::Message;
use crate::models::Question;

pub const SYSTEM_PROMPT: &str = "You are a professional assistant who analyzes member messages.\n\
Use ONLY the given context.\n\
Infer logical answers if clues exist.\n\
If no information is available, say: 'I don't know based on the available info.'\n\
Answer clearly and concisely.";

pub const ANSWER_TEMPERATURE: f32 = 0.2;

/// The single system/user exchange sent to the completion service.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: Message,
    pub user: Message,
    pub temperature: f32,
}

impl Prompt {
    pub fn build(context: &str, question: &Question) -> Self {
        Self {
            system: Message::system(SYSTEM_PROMPT),
            user: Message::user(format!(
                "Messages:\n{}\n\nQuestion: {}\n\nAnswer:",
                context, question
            )),
            temperature: ANSWER_TEMPERATURE,
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        vec![self.system.clone(), self.user.clone()]
    }
}
