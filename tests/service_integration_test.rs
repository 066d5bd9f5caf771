// Integration tests for the service layer: registration and
// authentication, concern lifecycle, voting, comments, and the chat
// feedback flow.

use concern_tracker::db::Database;
use concern_tracker::models::chat_session::RecordExchangeRequest;
use concern_tracker::models::comment::CreateCommentRequest;
use concern_tracker::models::concern::{CreateConcernRequest, UpdateConcernRequest};
use concern_tracker::models::feedback::SubmitFeedbackRequest;
use concern_tracker::models::user::CreateUserRequest;
use concern_tracker::models::vote::CastVoteRequest;
use concern_tracker::models::{ConcernStatus, Priority, Sentiment, VoteType};
use concern_tracker::{AppConfig, AppError, AppState};

async fn setup() -> AppState {
    let _ = tracing_subscriber::fmt().try_init();
    let db = Database::connect_in_memory()
        .await
        .expect("in-memory database");
    let config = AppConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    AppState::with_database(config, db)
}

fn register_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        full_name: "Pat Example".to_string(),
        email: email.to_string(),
        password: "hunter2hunter2".to_string(),
    }
}

fn concern_request(title: &str) -> CreateConcernRequest {
    CreateConcernRequest {
        title: title.to_string(),
        description: "Something is wrong".to_string(),
        location: Some("Riverside Park".to_string()),
        priority: None,
    }
}

#[tokio::test]
async fn register_and_authenticate() -> anyhow::Result<()> {
    let state = setup().await;

    let user = state
        .user_service
        .register(register_request("pat@example.com"))
        .await?;
    assert!(user.id > 0);

    let authed = state
        .user_service
        .authenticate("pat@example.com", "hunter2hunter2")
        .await?;
    assert_eq!(authed.id, user.id);

    // Wrong password and unknown account fail the same way.
    let err = state
        .user_service
        .authenticate("pat@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthError(_)));

    let err = state
        .user_service
        .authenticate("nobody@example.com", "hunter2hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AuthError(_)));

    Ok(())
}

#[tokio::test]
async fn register_rejects_bad_input_and_duplicates() -> anyhow::Result<()> {
    let state = setup().await;

    let mut missing_name = register_request("a@example.com");
    missing_name.full_name = "  ".to_string();
    assert!(matches!(
        state.user_service.register(missing_name).await.unwrap_err(),
        AppError::ValidationError(_)
    ));

    let bad_email = register_request("not-an-email");
    assert!(matches!(
        state.user_service.register(bad_email).await.unwrap_err(),
        AppError::ValidationError(_)
    ));

    state
        .user_service
        .register(register_request("dup@example.com"))
        .await?;
    let err = state
        .user_service
        .register(register_request("dup@example.com"))
        .await
        .unwrap_err();
    assert!(err.is_conflict(), "expected Conflict, got {err}");

    Ok(())
}

#[tokio::test]
async fn user_responses_never_expose_the_password_hash() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("safe@example.com"))
        .await?;

    let json = serde_json::to_value(&user)?;
    let object = json.as_object().expect("response serializes to an object");
    assert!(
        object.keys().all(|k| !k.contains("password")),
        "serialized response leaked a password field: {object:?}"
    );

    Ok(())
}

#[tokio::test]
async fn change_password_takes_effect() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("rotate@example.com"))
        .await?;

    state
        .user_service
        .change_password(user.id, "a brand new secret")
        .await?;

    assert!(state
        .user_service
        .authenticate("rotate@example.com", "hunter2hunter2")
        .await
        .is_err());
    assert!(state
        .user_service
        .authenticate("rotate@example.com", "a brand new secret")
        .await
        .is_ok());

    Ok(())
}

#[tokio::test]
async fn concern_lifecycle() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("civic@example.com"))
        .await?;

    let concern = state
        .concern_service
        .create_concern(user.id, concern_request("Leaning tree"))
        .await?;
    assert_eq!(concern.priority, Priority::Medium);
    assert_eq!(concern.status, ConcernStatus::Open);
    assert_eq!(concern.vote_score, 0);

    // Any documented status can be set in any order.
    for status in [
        ConcernStatus::InProgress,
        ConcernStatus::Resolved,
        ConcernStatus::Closed,
        ConcernStatus::Open,
    ] {
        state.concern_service.update_status(concern.id, status).await?;
        let fetched = state.concern_service.get_concern(concern.id).await?;
        assert_eq!(fetched.status, status);
    }

    let bumped = state
        .concern_service
        .set_priority(concern.id, Priority::Urgent)
        .await?;
    assert_eq!(bumped.priority, Priority::Urgent);

    // Partial update touches only the supplied fields.
    let edited = state
        .concern_service
        .update_concern(
            concern.id,
            UpdateConcernRequest {
                title: Some("Fallen tree".to_string()),
                location: Some("Elm Street".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(edited.title, "Fallen tree");
    assert_eq!(edited.location.as_deref(), Some("Elm Street"));
    assert_eq!(edited.description, "Something is wrong");
    assert_eq!(edited.priority, Priority::Urgent);

    let open = state
        .concern_service
        .list_concerns_by_status(ConcernStatus::Open)
        .await?;
    assert_eq!(open.len(), 1);
    let mine = state.concern_service.list_concerns_by_user(user.id).await?;
    assert_eq!(mine.len(), 1);

    state.concern_service.delete_concern(concern.id).await?;
    assert!(matches!(
        state.concern_service.get_concern(concern.id).await.unwrap_err(),
        AppError::NotFound(_)
    ));

    Ok(())
}

#[tokio::test]
async fn empty_title_is_rejected() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("strict@example.com"))
        .await?;

    let mut request = concern_request("x");
    request.title = "".to_string();
    assert!(matches!(
        state
            .concern_service
            .create_concern(user.id, request)
            .await
            .unwrap_err(),
        AppError::ValidationError(_)
    ));

    Ok(())
}

#[tokio::test]
async fn voting_through_the_service() -> anyhow::Result<()> {
    let state = setup().await;
    let author = state
        .user_service
        .register(register_request("author@example.com"))
        .await?;
    let voter = state
        .user_service
        .register(register_request("voter@example.com"))
        .await?;
    let concern = state
        .concern_service
        .create_concern(author.id, concern_request("Flooded underpass"))
        .await?;

    // Voting on a missing concern is NotFound, not a constraint error.
    let err = state
        .vote_service
        .cast_vote(
            voter.id,
            CastVoteRequest {
                concern_id: concern.id + 100,
                vote_type: VoteType::Upvote,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    state
        .vote_service
        .cast_vote(
            voter.id,
            CastVoteRequest {
                concern_id: concern.id,
                vote_type: VoteType::Upvote,
            },
        )
        .await?;
    state
        .vote_service
        .cast_vote(
            author.id,
            CastVoteRequest {
                concern_id: concern.id,
                vote_type: VoteType::Downvote,
            },
        )
        .await?;

    let tally = state.vote_service.tally(concern.id).await?;
    assert_eq!((tally.upvotes, tally.downvotes), (1, 1));
    assert_eq!(tally.score(), 0);

    let fetched = state.concern_service.get_concern(concern.id).await?;
    assert_eq!(fetched.vote_score, 0);

    let mine = state
        .vote_service
        .get_user_vote(voter.id, concern.id)
        .await?
        .expect("vote exists");
    assert_eq!(mine.vote_type, VoteType::Upvote);

    let reconciled = state.vote_service.reconcile(concern.id).await?;
    assert_eq!((reconciled.upvotes, reconciled.downvotes), (1, 1));

    Ok(())
}

#[tokio::test]
async fn comment_flow() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("talker@example.com"))
        .await?;
    let concern = state
        .concern_service
        .create_concern(user.id, concern_request("Graffiti"))
        .await?;

    let err = state
        .comment_service
        .add_comment(
            user.id,
            concern.id + 100,
            CreateCommentRequest {
                content: "orphan".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let first = state
        .comment_service
        .add_comment(
            user.id,
            concern.id,
            CreateCommentRequest {
                content: "Saw this yesterday".to_string(),
            },
        )
        .await?;
    state
        .comment_service
        .add_comment(
            user.id,
            concern.id,
            CreateCommentRequest {
                content: "Still there".to_string(),
            },
        )
        .await?;

    let listed = state.comment_service.list_for_concern(concern.id).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].content, "Saw this yesterday");

    let edited = state
        .comment_service
        .edit_comment(first.id, "Saw this last week".to_string())
        .await?;
    assert_eq!(edited.content, "Saw this last week");
    assert!(edited.updated_at >= edited.created_at);

    state.comment_service.delete_comment(first.id).await?;
    let listed = state.comment_service.list_for_concern(concern.id).await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}

#[tokio::test]
async fn chat_and_feedback_flow() -> anyhow::Result<()> {
    let state = setup().await;
    let user = state
        .user_service
        .register(register_request("asker@example.com"))
        .await?;

    let session = state
        .chat_service
        .record_exchange(
            user.id,
            RecordExchangeRequest {
                question: "When is bulk pickup?".to_string(),
                response: "First Monday of the month.".to_string(),
            },
        )
        .await?;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    state
        .chat_service
        .record_exchange(
            user.id,
            RecordExchangeRequest {
                question: "Where do I pay fines?".to_string(),
                response: "At city hall.".to_string(),
            },
        )
        .await?;

    let history = state.chat_service.history(user.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].question, "Where do I pay fines?");

    let feedback = state
        .chat_service
        .submit_feedback(
            user.id,
            SubmitFeedbackRequest {
                chat_session_id: Some(session.id),
                question: session.question.clone(),
                feedback_text: "exactly what I needed".to_string(),
                sentiment: Sentiment::Positive,
            },
        )
        .await?;
    assert_eq!(feedback.chat_session_id, Some(session.id));

    let for_session = state.chat_service.feedback_for_session(session.id).await?;
    assert_eq!(for_session.len(), 1);

    // Feedback referencing a session that never existed is a validation
    // failure at submit time.
    let err = state
        .chat_service
        .submit_feedback(
            user.id,
            SubmitFeedbackRequest {
                chat_session_id: Some(session.id + 999),
                question: "Q".to_string(),
                feedback_text: "text".to_string(),
                sentiment: Sentiment::Neutral,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    // Detached feedback (no session reference) is allowed.
    let detached = state
        .chat_service
        .submit_feedback(
            user.id,
            SubmitFeedbackRequest {
                chat_session_id: None,
                question: "general".to_string(),
                feedback_text: "the assistant is slow".to_string(),
                sentiment: Sentiment::Negative,
            },
        )
        .await?;
    assert_eq!(detached.chat_session_id, None);

    // Deleting the session detaches its feedback but keeps it readable.
    state.chat_service.delete_session(session.id).await?;
    let remaining = state.chat_service.feedback_for_user(user.id).await?;
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|f| f.chat_session_id.is_none()));

    Ok(())
}
