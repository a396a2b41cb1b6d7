//! The recommendation assembler: a single-pass pipeline run once per form
//! submission.
//!
//! ```text
//! StyleProfile -> serializer -> prompt -> [text service] -> sectioner
//!              -> visual prompt -> [image service] -> Recommendation
//! ```
//!
//! Every stage except the two service calls is a pure function. The
//! sectioner and visual prompt builder never fail: a text response that
//! ignores the requested layout degrades to absent sections and a locally
//! synthesized image prompt.

pub mod pipeline;
pub mod prompt;
pub mod sectioner;
pub mod serializer;
pub mod visual;
