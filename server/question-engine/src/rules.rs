//! Fixed skill → question rules.

/// One static association between a skill keyword and an interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRule {
  pub skill: &'static str,
  pub question: &'static str,
}

/// Evaluation order is output order.
pub const RULES: [QuestionRule; 3] = [
  QuestionRule {
    skill: "Java",
    question: "How do you handle multi-threading in Java?",
  },
  QuestionRule {
    skill: "Python",
    question: "What is the difference between deep copy and shallow copy in Python?",
  },
  QuestionRule {
    skill: "Web Development",
    question: "Can you explain the difference between a GET and POST request?",
  },
];

/// Questions for every rule whose skill appears verbatim (case-sensitive) in `skills`.
pub fn questions_for(skills: &[String]) -> Vec<String> {
  RULES
    .iter()
    .filter(|rule| skills.iter().any(|s| s == rule.skill))
    .map(|rule| rule.question.to_string())
    .collect()
}
