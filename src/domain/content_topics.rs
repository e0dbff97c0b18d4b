use crate::constant::MAX_TOPICS;
use crate::error::ValidationError;
use serde::Serialize;

/// Splits a comma-separated input into trimmed, non-empty topics.
pub fn split_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentTopics(Vec<String>);

impl ContentTopics {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::try_from(split_topics(raw))
    }

    /// Same clean-up as `try_from`, without the upper bound. Topics echoed
    /// back by the service for an email may exceed what a brief allows.
    pub fn at_least_one(topics: Vec<String>) -> Result<Self, ValidationError> {
        Self::collect(topics, None)
    }

    fn collect(topics: Vec<String>, max_topics: Option<usize>) -> Result<Self, ValidationError> {
        let topics: Vec<String> = topics
            .into_iter()
            .map(|topic| topic.trim().to_string())
            .filter(|topic| !topic.is_empty())
            .collect();
        if topics.is_empty() {
            return Err(ValidationError::ContentTopicsAreEmpty);
        }
        match max_topics {
            Some(max) if topics.len() > max => Err(ValidationError::TooManyContentTopics(max)),
            _ => Ok(Self(topics)),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for ContentTopics {
    type Error = ValidationError;

    fn try_from(topics: Vec<String>) -> Result<Self, Self::Error> {
        Self::collect(topics, Some(MAX_TOPICS))
    }
}
