use services::{QuizWorkflow, StaticSource};

#[tokio::test]
async fn sample_round_activity_plays_to_report() {
    let mut workflow = QuizWorkflow::new();
    let state = workflow.load(&StaticSource::sample()).await;
    assert!(state.quiz().is_some());

    let play = workflow.play_mut().unwrap();
    play.set_activity(2).unwrap();

    let mut outcomes = Vec::new();
    while !play.is_current_activity_complete() {
        outcomes.push(play.answer_current(false).unwrap());
    }

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.last().unwrap().activity_complete);
    assert_eq!(
        outcomes.iter().map(|o| o.was_correct).collect::<Vec<_>>(),
        vec![true, true, false, true]
    );

    let report = play.report(2).unwrap();
    assert_eq!(report.correct, 3);
    assert_eq!(report.answered, 4);
    assert_eq!(report.lines[2].round_title.as_deref(), Some("Round 2"));
    assert_eq!(
        report.lines[2].feedback.as_deref(),
        Some("I can't go out because I *haven't finished* my homework yet.")
    );

    play.restart();
    assert!(play.cursor().is_unset());
    assert!(play.activity_results(2).question_results().next().is_none());
}

#[tokio::test]
async fn plain_activity_wraps_after_last_question() {
    let mut workflow = QuizWorkflow::new();
    workflow.load(&StaticSource::sample()).await;

    let play = workflow.play_mut().unwrap();
    play.set_activity(1).unwrap();
    for _ in 0..5 {
        play.answer_current(true).unwrap();
    }

    assert!(play.is_current_activity_complete());
    assert_eq!(play.cursor().entry(), 1);
    assert_eq!(play.overview().activities[0].answered, 5);
    assert_eq!(play.progress(2).unwrap().remaining, 4);
}
