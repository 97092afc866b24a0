use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_dashboard() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Your Subjects"), "missing heading in {html}");
    assert!(html.contains("Average Progress"), "missing stat in {html}");
    assert!(html.contains("AP Chemistry"), "missing subject card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subjects_view_smoke_lists_every_subject() {
    let mut harness = setup_view_harness(ViewKind::Subjects);
    harness.settle().await;
    let html = harness.render();
    assert_eq!(html.matches("subject-card-inner").count(), 8, "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn subject_detail_smoke_offers_both_modes() {
    let mut harness = setup_view_harness(ViewKind::SubjectDetail("ap-chemistry"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Atomic Structure and Properties"), "missing unit in {html}");
    assert!(html.contains("Exam Mode"), "missing exam link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_subject_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::SubjectDetail("ap-latin"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("find that page"), "missing not-found text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_question_and_navigator() {
    let mut harness = setup_view_harness(ViewKind::Exam("chem-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(html.contains("nav-grid"), "missing navigator in {html}");
    assert!(html.contains("Eliminator: Off"), "missing eliminator toggle in {html}");
    assert!(
        html.contains("AP Chemistry · Multiple Choice Questions"),
        "missing directions in {html}"
    );
    assert!(html.contains("Got it"), "missing directions close in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_has_no_navigator_or_eliminator() {
    let mut harness = setup_view_harness(ViewKind::Practice("chem-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(!html.contains("nav-grid"), "unexpected navigator in {html}");
    assert!(!html.contains("Eliminator"), "unexpected eliminator in {html}");
    assert!(!html.contains("Directions"), "unexpected directions in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unit_without_questions_renders_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Exam("chem-9"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No questions available"), "missing empty text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn streak_and_planner_views_render_seed() {
    let mut harness = setup_view_harness(ViewKind::Streak);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("7 day streak"), "missing streak in {html}");

    let mut harness = setup_view_harness(ViewKind::Planner);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("1 of 3 tasks done"), "missing progress in {html}");
    assert!(harness.services.planner().progress().await.unwrap().total == 3);
}

#[tokio::test(flavor = "current_thread")]
async fn chat_view_smoke_offers_prompts_and_subjects() {
    let mut harness = setup_view_harness(ViewKind::Chat);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("How can I help you today?"), "missing empty state in {html}");
    assert_eq!(html.matches("quick-prompt\"").count(), 4, "{html}");
    assert!(html.contains("Give me a practice problem"), "missing prompt in {html}");
    assert!(html.contains("Chemistry"), "missing subject option in {html}");
    assert!(html.contains("may not always be accurate"), "missing disclaimer in {html}");
}
