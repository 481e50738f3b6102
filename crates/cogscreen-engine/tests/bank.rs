use std::collections::HashSet;

use cogscreen_core::models::domain::{Applicability, DomainTag, RespondentRole};
use cogscreen_engine::scoring::AnswerEntry;
use cogscreen_engine::{BankError, Question, QuestionBank};

fn question(id: &str, category: DomainTag, weight: f64, applicability: Applicability) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {id}"),
        category,
        weight,
        applicability,
    }
}

fn entry(question_id: &str, value: u8) -> AnswerEntry {
    AnswerEntry {
        question_id: question_id.to_string(),
        value,
    }
}

#[test]
fn standard_bank_is_valid() {
    let standard = QuestionBank::standard();
    let rebuilt = QuestionBank::new(standard.questions().to_vec()).unwrap();
    assert_eq!(&rebuilt, standard);
    assert_eq!(standard.len(), 40);
}

#[test]
fn standard_bank_covers_every_domain() {
    let domains: HashSet<_> = QuestionBank::standard()
        .questions()
        .iter()
        .map(|q| q.category)
        .collect();
    assert_eq!(domains.len(), DomainTag::ALL.len());
}

#[test]
fn standard_bank_is_clustered_by_domain() {
    let questions = QuestionBank::standard().questions();
    let mut seen = Vec::new();
    for q in questions {
        if seen.last() != Some(&q.category) {
            assert!(!seen.contains(&q.category), "{} appears in two runs", q.category);
            seen.push(q.category);
        }
    }
    assert_eq!(seen, DomainTag::ALL);
}

#[test]
fn applicable_questions_only_include_matching_roles() {
    let bank = QuestionBank::standard();
    for role in [RespondentRole::Parent, RespondentRole::Teacher] {
        let applicable = bank.applicable_questions(role);
        assert!(!applicable.is_empty());
        assert!(applicable.iter().all(|q| matches!(
            (q.applicability, role),
            (Applicability::Both, _)
                | (Applicability::ParentOnly, RespondentRole::Parent)
                | (Applicability::TeacherOnly, RespondentRole::Teacher)
        )));
    }
}

#[test]
fn applicable_questions_preserve_bank_order() {
    let bank = QuestionBank::standard();
    let applicable = bank.applicable_questions(RespondentRole::Teacher);
    let positions: Vec<usize> = applicable
        .iter()
        .map(|q| bank.questions().iter().position(|b| b.id == q.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn roles_see_different_question_sets() {
    let bank = QuestionBank::standard();
    let parent: HashSet<_> = bank
        .applicable_questions(RespondentRole::Parent)
        .iter()
        .map(|q| q.id.clone())
        .collect();
    let teacher: HashSet<_> = bank
        .applicable_questions(RespondentRole::Teacher)
        .iter()
        .map(|q| q.id.clone())
        .collect();
    assert!(parent.difference(&teacher).count() > 0);
    assert!(teacher.difference(&parent).count() > 0);
}

#[test]
fn new_rejects_empty_bank() {
    assert!(matches!(QuestionBank::new(vec![]), Err(BankError::Empty)));
}

#[test]
fn new_rejects_duplicate_ids() {
    let result = QuestionBank::new(vec![
        question("a", DomainTag::Math, 1.0, Applicability::Both),
        question("a", DomainTag::Reading, 1.0, Applicability::Both),
    ]);
    assert!(matches!(result, Err(BankError::DuplicateQuestionId(id)) if id == "a"));
}

#[test]
fn new_rejects_non_positive_or_non_finite_weights() {
    for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = QuestionBank::new(vec![question("a", DomainTag::Math, weight, Applicability::Both)]);
        assert!(matches!(result, Err(BankError::InvalidWeight { .. })), "weight {weight}");
    }
}

#[test]
fn new_rejects_blank_text() {
    let mut q = question("a", DomainTag::Math, 1.0, Applicability::Both);
    q.text = "   ".to_string();
    assert!(matches!(QuestionBank::new(vec![q]), Err(BankError::EmptyText(_))));
}

#[test]
fn validate_answers_reports_each_problem() {
    let bank = QuestionBank::new(vec![
        question("rd", DomainTag::Reading, 1.5, Applicability::Both),
        question("ma", DomainTag::Math, 1.0, Applicability::TeacherOnly),
    ])
    .unwrap();

    let errors = bank.validate_answers(
        RespondentRole::Parent,
        &[entry("rd", 3), entry("rd", 9), entry("ma", 2), entry("zz", 1)],
    );

    let ids: Vec<_> = errors.iter().map(|e| e.question_id.as_str()).collect();
    assert_eq!(ids, ["rd", "ma", "zz"]);
    assert!(errors[0].message.contains("outside range"));
    assert!(errors[1].message.contains("not asked of parent"));
    assert!(errors[2].message.contains("unknown question"));
}

#[test]
fn validate_answers_accepts_a_clean_set() {
    let bank = QuestionBank::standard();
    let entries: Vec<_> = bank
        .applicable_questions(RespondentRole::Teacher)
        .iter()
        .map(|q| entry(&q.id, 4))
        .collect();
    assert!(bank.validate_answers(RespondentRole::Teacher, &entries).is_empty());
}
