use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secrecy::SecretString;

use fluentwave_client::api::QuizApi;
use fluentwave_client::auth::SessionContext;
use fluentwave_client::config::Config;
use fluentwave_client::errors::AppResult;
use fluentwave_client::models::domain::quiz::LessonRef;
use fluentwave_client::models::domain::{
    ChoiceOption, Question, QuestionOptions, QuestionType, Quiz, UserProfile, WordPair,
};
use fluentwave_client::models::dto::request::CompleteQuizRequest;
use fluentwave_client::models::dto::response::CompletionResponse;
use fluentwave_client::services::evaluator::{LearnerAction, Verdict};
use fluentwave_client::services::matching::MatchSide;
use fluentwave_client::services::{Advance, QuizService, SessionPhase};

/// In-memory backend double that serves one quiz and counts submissions.
struct StubQuizApi {
    quiz: Quiz,
    submissions: AtomicU32,
}

#[async_trait]
impl QuizApi for StubQuizApi {
    async fn fetch_quiz(&self, _quiz_id: &str) -> AppResult<Quiz> {
        Ok(self.quiz.clone())
    }

    async fn submit_completion(
        &self,
        _quiz_id: &str,
        request: &CompleteQuizRequest,
    ) -> AppResult<CompletionResponse> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(CompletionResponse {
            xp_gained: (request.score * 10) as i64,
            level: 2,
            total_xp: None,
        })
    }
}

fn word_pairs(count: usize) -> Vec<WordPair> {
    (0..count)
        .map(|i| WordPair {
            amharic: format!("amharic-{}", i),
            english: format!("english-{}", i),
            pronunciation: None,
            example_sentence: None,
        })
        .collect()
}

fn full_quiz() -> Quiz {
    let questions = vec![
        Question {
            id: "q-mc".to_string(),
            question_type: QuestionType::MultipleChoice,
            question_text: "What does selam mean?".to_string(),
            options: Some(QuestionOptions::Choices(vec![
                ChoiceOption::Text("hello".to_string()),
                ChoiceOption::Text("goodbye".to_string()),
                ChoiceOption::Text("thanks".to_string()),
            ])),
            correct_answer: Some(ChoiceOption::Text("hello".to_string())),
            sentence: None,
        },
        Question {
            id: "q-intro".to_string(),
            question_type: QuestionType::WordIntroduction,
            question_text: "A new word".to_string(),
            options: Some(QuestionOptions::Pairs(word_pairs(1))),
            correct_answer: None,
            sentence: None,
        },
        Question {
            id: "q-match".to_string(),
            question_type: QuestionType::Matching,
            question_text: "Match the words".to_string(),
            options: Some(QuestionOptions::Pairs(word_pairs(3))),
            correct_answer: None,
            sentence: None,
        },
        Question {
            id: "q-learn".to_string(),
            question_type: QuestionType::WordLearning,
            question_text: "Remember this word".to_string(),
            options: Some(QuestionOptions::Pairs(word_pairs(1))),
            correct_answer: None,
            sentence: None,
        },
        Question {
            id: "q-sentence".to_string(),
            question_type: QuestionType::SentenceUse,
            question_text: "Fill the blank".to_string(),
            options: Some(QuestionOptions::Choices(vec![
                ChoiceOption::Text("hello".to_string()),
                ChoiceOption::Text("goodbye".to_string()),
            ])),
            correct_answer: Some(ChoiceOption::Text("hello".to_string())),
            sentence: Some("____, my friend!".to_string()),
        },
    ];

    Quiz {
        lesson_id: LessonRef::Id("lesson-1".to_string()),
        lesson_title: Some("Basic Greetings".to_string()),
        questions,
    }
}

fn test_ctx() -> SessionContext {
    let user = UserProfile {
        id: "u-1".to_string(),
        name: "Abel".to_string(),
        email: "abel@example.com".to_string(),
        avatar: None,
        total_xp: 0,
    };
    SessionContext::new(&user, SecretString::from("tok".to_string()))
}

#[tokio::test]
async fn full_quiz_flow_submits_exactly_once() {
    let api = Arc::new(StubQuizApi {
        quiz: full_quiz(),
        submissions: AtomicU32::new(0),
    });
    let service = QuizService::new(api.clone(), &Config::test_config());
    let mut rng = StdRng::seed_from_u64(42);

    let mut session = service.load_session("quiz-1", &mut rng).await.unwrap();

    // Vocabulary exposure always leads the sequence.
    assert_eq!(session.current_question().id, "q-intro");
    assert_eq!(
        session.quiz().questions[1].question_type,
        QuestionType::WordLearning
    );

    loop {
        let question = session.current_question().clone();
        let mut active = session.activate_current(&mut rng).unwrap();

        let verdict = if let Some(verdict) = active.on_present() {
            verdict
        } else {
            match question.question_type {
                QuestionType::WordIntroduction => {
                    active.evaluate(&LearnerAction::Acknowledge).unwrap()
                }
                QuestionType::MultipleChoice | QuestionType::SentenceUse => active
                    .evaluate(&LearnerAction::SelectOption("hello".to_string()))
                    .unwrap(),
                QuestionType::Matching => {
                    let pairs = question.pairs().unwrap();
                    let mut last = Verdict::Pending;
                    for pair in pairs {
                        active
                            .evaluate(&LearnerAction::SelectMatchItem {
                                side: MatchSide::Amharic,
                                token: pair.amharic.clone(),
                            })
                            .unwrap();
                        last = active
                            .evaluate(&LearnerAction::SelectMatchItem {
                                side: MatchSide::English,
                                token: pair.english.clone(),
                            })
                            .unwrap();
                    }
                    last
                }
                _ => panic!("unexpected question type in quiz"),
            }
        };

        let correct = match verdict {
            Verdict::Resolved { correct } => correct,
            other => panic!("question did not resolve: {:?}", other),
        };
        session.submit_answer(correct).unwrap();

        match session.advance().unwrap() {
            Advance::Next(_) => continue,
            Advance::Finished(record) => {
                assert_eq!(record.lesson_id, "lesson-1");
                assert_eq!(record.score, 5);
                assert_eq!(record.total_questions, 5);
                break;
            }
            Advance::AlreadyCompleted => panic!("completed twice"),
        }
    }

    assert_eq!(session.phase(), SessionPhase::Completed);
    assert_eq!(session.percentage(), 100);

    // A duplicate advance after completion stays a no-op.
    assert_eq!(session.advance().unwrap(), Advance::AlreadyCompleted);

    let ctx = test_ctx();
    let award = service.submit_completion(&mut session, &ctx).await.unwrap();
    assert_eq!(award.xp_gained, 50);

    // Retrying the submission must not reach the backend again.
    let again = service.submit_completion(&mut session, &ctx).await.unwrap();
    assert_eq!(again, award);
    assert_eq!(api.submissions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unrecognized_question_type_halts_the_session_recoverably() {
    let quiz_json = r#"{
        "lessonId": "lesson-1",
        "questions": [
            {
                "_id": "q-essay",
                "questionType": "essay",
                "questionText": "Write an essay"
            }
        ]
    }"#;
    let quiz: Quiz = serde_json::from_str(quiz_json).expect("quiz payload should deserialize");

    let api = Arc::new(StubQuizApi {
        quiz,
        submissions: AtomicU32::new(0),
    });
    let service = QuizService::new(api, &Config::test_config());
    let mut rng = StdRng::seed_from_u64(7);

    // Sequencing tolerates the unknown type; activation surfaces it.
    let mut session = service.load_session("quiz-1", &mut rng).await.unwrap();
    let err = session.activate_current(&mut rng).unwrap_err();
    assert_eq!(err.error_code(), "UNRECOGNIZED_TYPE");
    assert_eq!(session.phase(), SessionPhase::Faulted);

    session.recover().unwrap();
    assert_eq!(session.phase(), SessionPhase::InProgress);
}
