pub mod aq10;
pub mod qchat10;

use crate::Question;

pub(crate) fn question_list(items: &[(&str, &str)]) -> Vec<Question> {
    items
        .iter()
        .map(|(key, text)| Question {
            key: key.to_string(),
            text: text.to_string(),
        })
        .collect()
}
