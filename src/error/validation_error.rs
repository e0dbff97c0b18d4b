/// Reasons a request is rejected before it leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    // VALIDATE CONTENT TOPICS
    #[error("At least one content topic is required.")]
    ContentTopicsAreEmpty,

    #[error("At most {0} content topics are allowed.")]
    TooManyContentTopics(usize),

    // VALIDATE TEXT FIELDS
    #[error("{0} cannot be empty.")]
    FieldIsEmpty(&'static str),

    #[error("{0} is too long, the limit is {1} characters.")]
    FieldIsTooLong(&'static str, usize),

    // VALIDATE RECIPIENT EMAIL
    #[error("Recipient email is required when sending email.")]
    RecipientEmailIsMissing,

    #[error("Recipient email is missing @ symbol.")]
    EmailMissingAtSymbol,

    #[error("Recipient email is missing the part before @.")]
    EmailMissingLocalPart,

    #[error("Recipient email is missing domain.")]
    EmailMissingDomain,

    #[error("Recipient email's format is not correct.")]
    EmailFormatWrong,
}
