/// Search engine indexation capability.
pub mod indexation;
/// PageSpeed Insights API client.
pub mod pagespeed;
