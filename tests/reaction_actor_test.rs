use actor_framework::mock::MockClient;
use actor_framework::ActorClient;
use chrono::Utc;
use restaurant_orders::clients::{CommentClient, CustomerClient};
use restaurant_orders::model::*;
use restaurant_orders::reaction_actor::{self, ReactionError, ReactionPolicy};

fn comment(id: u32, is_active: bool) -> Comment {
    let now = Utc::now();
    Comment {
        id: CommentId(id),
        customer: CustomerId(1),
        restaurant: RestaurantId(1),
        text: "Crispy".into(),
        rating: None,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

fn customer(id: u32) -> Customer {
    let now = Utc::now();
    Customer {
        id: CustomerId(id),
        first_name: "Dung".into(),
        last_name: None,
        phone: None,
        email: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

/// Real Reaction actor with mocked Comment and Customer dependencies.
///
/// Pattern 2: Actor + Mocks. The ledger's target checks run inside the actor, so each
/// react consults both dependencies.
#[tokio::test]
async fn test_reaction_actor_with_mocked_dependencies() {
    let mut comment_mock = MockClient::<Comment>::new();
    let mut customer_mock = MockClient::<Customer>::new();

    comment_mock.expect_get(CommentId(3)).return_ok(Some(comment(3, true)));
    customer_mock.expect_get(CustomerId(7)).return_ok(Some(customer(7)));
    comment_mock.expect_get(CommentId(3)).return_ok(Some(comment(3, true)));
    customer_mock.expect_get(CustomerId(7)).return_ok(Some(customer(7)));

    let (actor, reactions) = reaction_actor::new(8, ReactionPolicy::ToggleOrFlip);
    let handle = tokio::spawn(actor.run(
        CommentClient::new(comment_mock.client()),
        CustomerClient::new(customer_mock.client()),
    ));

    let created = reactions.react(CustomerId(7), CommentId(3), true).await.unwrap();
    assert_eq!(created.status, ReactionStatus::Created);
    let removed = reactions.react(CustomerId(7), CommentId(3), true).await.unwrap();
    assert_eq!(removed.status, ReactionStatus::Removed);

    assert!(reactions
        .list(ReactionQuery::default())
        .await
        .unwrap()
        .is_empty());

    comment_mock.verify();
    customer_mock.verify();

    drop(reactions);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_inactive_comment_stops_before_customer_lookup() {
    let mut comment_mock = MockClient::<Comment>::new();
    let customer_mock = MockClient::<Customer>::new();
    comment_mock.expect_get(CommentId(3)).return_ok(Some(comment(3, false)));

    let (actor, reactions) = reaction_actor::new(8, ReactionPolicy::ToggleOrFlip);
    let handle = tokio::spawn(actor.run(
        CommentClient::new(comment_mock.client()),
        CustomerClient::new(customer_mock.client()),
    ));

    let err = reactions
        .react(CustomerId(7), CommentId(3), false)
        .await
        .unwrap_err();
    assert!(matches!(err, ReactionError::NotFound(_)), "{err:?}");
    assert_eq!(reactions.tally(CommentId(3)).await.unwrap().dislikes, 0);

    comment_mock.verify();
    customer_mock.verify();

    drop(reactions);
    handle.await.unwrap();
}

/// The outcome a client reports follows the policy the actor decided under.
#[tokio::test]
async fn test_toggle_only_outcomes_are_labelled_by_the_actor_policy() {
    let mut comment_mock = MockClient::<Comment>::new();
    let mut customer_mock = MockClient::<Customer>::new();
    for _ in 0..3 {
        comment_mock.expect_get(CommentId(3)).return_ok(Some(comment(3, true)));
        customer_mock.expect_get(CustomerId(7)).return_ok(Some(customer(7)));
    }

    let (actor, reactions) = reaction_actor::new(8, ReactionPolicy::ToggleOnly);
    assert_eq!(actor.policy(), reactions.policy());
    let handle = tokio::spawn(actor.run(
        CommentClient::new(comment_mock.client()),
        CustomerClient::new(customer_mock.client()),
    ));

    let first = reactions.react(CustomerId(7), CommentId(3), true).await.unwrap();
    assert_eq!(first.status, ReactionStatus::Liked);
    // A repeat with the opposite polarity removes under this policy, it does not flip.
    let second = reactions.react(CustomerId(7), CommentId(3), false).await.unwrap();
    assert_eq!(second.status, ReactionStatus::Removed);
    let third = reactions.react(CustomerId(7), CommentId(3), false).await.unwrap();
    assert_eq!(third.status, ReactionStatus::Disliked);

    comment_mock.verify();
    customer_mock.verify();

    drop(reactions);
    handle.await.unwrap();
}
