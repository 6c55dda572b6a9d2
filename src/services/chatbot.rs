// src/services/chatbot.rs
use rand::{Rng, seq::SliceRandom};

use super::knowledge::{
    DEFAULT_CATEGORY, FALLBACK_REPLY, QA_CORPUS, QaEntry, RESPONSE_CATEGORIES, ResponseCategory,
};

/// Which branch of the matcher produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Category(&'static str),
    ExactQuestion,
    QuestionOverlap,
    Fallback,
}

impl MatchSource {
    pub fn label(&self) -> &'static str {
        match self {
            MatchSource::Category(_) => "category",
            MatchSource::ExactQuestion => "exact_question",
            MatchSource::QuestionOverlap => "question_overlap",
            MatchSource::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub source: MatchSource,
}

impl Reply {
    fn new(content: &str, source: MatchSource) -> Self {
        Self { content: content.to_string(), source }
    }
}

/// Maps a visitor message to a canned reply.
#[derive(Debug, Clone, Copy)]
pub struct QueryMatcher<'a> {
    qa: &'a [QaEntry],
    categories: &'a [ResponseCategory],
}

impl QueryMatcher<'static> {
    /// Matcher over the site's built-in knowledge base.
    pub fn builtin() -> Self {
        Self::new(QA_CORPUS, RESPONSE_CATEGORIES)
    }
}

impl Default for QueryMatcher<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> QueryMatcher<'a> {
    pub fn new(qa: &'a [QaEntry], categories: &'a [ResponseCategory]) -> Self {
        Self { qa, categories }
    }

    pub fn respond(&self, message: &str) -> String {
        self.resolve(message).content
    }

    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> String {
        self.resolve_with(message, rng).content
    }

    pub fn resolve(&self, message: &str) -> Reply {
        self.resolve_with(message, &mut rand::thread_rng())
    }

    pub fn resolve_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> Reply {
        let msg_lower = message.to_lowercase();

        if let Some(reply) = self.match_category(&msg_lower, rng) {
            return reply;
        }
        if let Some(reply) = self.match_question(&msg_lower) {
            return reply;
        }
        self.fallback(rng)
    }

    // First category in declaration order wins, not the one with most hits.
    fn match_category<R: Rng + ?Sized>(&self, msg_lower: &str, rng: &mut R) -> Option<Reply> {
        let category = self
            .categories
            .iter()
            .filter(|c| c.name != DEFAULT_CATEGORY)
            .find(|c| c.patterns.iter().any(|p| msg_lower.contains(p)))?;

        let content = category.responses.choose(rng)?;
        Some(Reply::new(content, MatchSource::Category(category.name)))
    }

    fn match_question(&self, msg_lower: &str) -> Option<Reply> {
        // The empty string is a substring of every question.
        if msg_lower.is_empty() {
            return None;
        }

        let questions: Vec<(&QaEntry, String)> = self
            .qa
            .iter()
            .map(|entry| (entry, entry.question.to_lowercase()))
            .collect();

        if let Some((entry, _)) = questions.iter().find(|(_, q)| q == msg_lower) {
            return Some(Reply::new(entry.answer, MatchSource::ExactQuestion));
        }

        let msg_words: Vec<&str> = msg_lower.split(' ').collect();

        let (best, _) = questions
            .iter()
            .filter(|(_, q)| msg_lower.contains(q.as_str()) || q.contains(msg_lower))
            .map(|(entry, q)| (*entry, overlap_score(q, &msg_words)))
            .fold(None, |best: Option<(&QaEntry, usize)>, (entry, score)| match best {
                Some((_, top)) if score <= top => best,
                _ => Some((entry, score)),
            })?;

        Some(Reply::new(best.answer, MatchSource::QuestionOverlap))
    }

    fn fallback<R: Rng + ?Sized>(&self, rng: &mut R) -> Reply {
        let content = self
            .categories
            .iter()
            .find(|c| c.name == DEFAULT_CATEGORY)
            .and_then(|c| c.responses.choose(rng))
            .copied()
            .unwrap_or(FALLBACK_REPLY);

        Reply::new(content, MatchSource::Fallback)
    }
}

/// Number of question words that also occur in the message.
fn overlap_score(question: &str, msg_words: &[&str]) -> usize {
    question
        .split(' ')
        .filter(|word| msg_words.contains(word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_counts_question_words() {
        let words = ["do", "you", "build", "mobile", "apps"];
        assert_eq!(overlap_score("mobile apps", &words), 2);
        assert_eq!(overlap_score("web apps", &words), 1);
        assert_eq!(overlap_score("pricing", &words), 0);
    }

    #[test]
    fn empty_tables_still_answer() {
        let matcher = QueryMatcher::new(&[], &[]);
        let reply = matcher.resolve("anything at all");
        assert_eq!(reply.content, FALLBACK_REPLY);
        assert_eq!(reply.source, MatchSource::Fallback);
    }
}
