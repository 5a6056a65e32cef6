// Moderation — trait-based abstraction for swappable scorers.
//
// The ModerationScorer trait defines the interface. WordListScorer implements
// it locally against a fixed disallowed-word list; ModerationClient implements
// it by calling a running moderation service over HTTP. Callers such as
// censor_payload don't care which one they hold.

pub mod censor;
pub mod client;
pub mod traits;
pub mod wordlist;
