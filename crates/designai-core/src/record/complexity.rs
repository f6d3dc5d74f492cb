use super::model::Complexity;

/// Scores a prompt by its whitespace-separated word count.
///
/// 40 words or more is `High`, 20 or more is `Medium`, anything shorter is
/// `Low`.
pub fn compute_complexity(prompt: &str) -> Complexity {
    match prompt.split_whitespace().count() {
        n if n >= 40 => Complexity::High,
        n if n >= 20 => Complexity::Medium,
        _ => Complexity::Low,
    }
}
