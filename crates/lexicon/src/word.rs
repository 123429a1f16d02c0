#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMeaning {
    pub word: String,
    pub definition: String,
    pub part_of_speech: Option<String>,
    pub sentence: Option<String>,
    pub synonyms: Option<Vec<String>>,
}

impl WordMeaning {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            part_of_speech: None,
            sentence: None,
            synonyms: None,
        }
    }

    pub fn with_part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    pub fn with_sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }
}
