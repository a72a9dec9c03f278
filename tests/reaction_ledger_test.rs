mod common;

use actor_framework::ActorClient;
use common::{add_customer, config, fixture, fixture_with};
use restaurant_orders::model::{CommentId, CustomerId, ReactionQuery, ReactionStatus};
use restaurant_orders::reaction_actor::{ReactionError, ReactionPolicy};

#[tokio::test]
async fn same_polarity_twice_nets_zero() {
    let f = fixture().await;
    let reactions = &f.system.clients.reactions;

    let first = reactions.react(f.customer, f.comment, true).await.unwrap();
    assert_eq!(first.status, ReactionStatus::Created);
    assert_eq!(first.is_like, Some(true));
    let tally = reactions.tally(f.comment).await.unwrap();
    assert_eq!((tally.likes, tally.dislikes), (1, 0));

    let second = reactions.react(f.customer, f.comment, true).await.unwrap();
    assert_eq!(second.status, ReactionStatus::Removed);
    assert_eq!(second.is_like, None);
    let tally = reactions.tally(f.comment).await.unwrap();
    assert_eq!((tally.likes, tally.dislikes), (0, 0));
}

#[tokio::test]
async fn opposite_polarity_flips_in_place() {
    let f = fixture().await;
    let reactions = &f.system.clients.reactions;

    reactions.react(f.customer, f.comment, true).await.unwrap();
    let before = reactions
        .list(ReactionQuery::on_comment(f.comment))
        .await
        .unwrap();

    let flipped = reactions.react(f.customer, f.comment, false).await.unwrap();
    assert_eq!(flipped.status, ReactionStatus::Updated);
    assert_eq!(flipped.is_like, Some(false));

    let after = reactions
        .list(ReactionQuery::on_comment(f.comment))
        .await
        .unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, before[0].id);
    assert!(!after[0].is_like);

    let tally = reactions.tally(f.comment).await.unwrap();
    assert_eq!((tally.likes, tally.dislikes), (0, 1));
}

#[tokio::test]
async fn toggle_only_removes_on_any_repeat() {
    let f = fixture_with(config(ReactionPolicy::ToggleOnly)).await;
    let reactions = &f.system.clients.reactions;

    let liked = reactions.react(f.customer, f.comment, true).await.unwrap();
    assert_eq!(liked.status, ReactionStatus::Liked);

    let removed = reactions.react(f.customer, f.comment, false).await.unwrap();
    assert_eq!(removed.status, ReactionStatus::Removed);

    let disliked = reactions.react(f.customer, f.comment, false).await.unwrap();
    assert_eq!(disliked.status, ReactionStatus::Disliked);
    assert_eq!(disliked.is_like, Some(false));
}

#[tokio::test]
async fn tally_counts_each_customer_once() {
    let f = fixture().await;
    let c = &f.system.clients;
    let bao = add_customer(&f.system, "Bao", "bao@example.com").await;
    let chi = add_customer(&f.system, "Chi", "chi@example.com").await;

    c.reactions.react(f.customer, f.comment, true).await.unwrap();
    c.reactions.react(bao, f.comment, true).await.unwrap();
    c.reactions.react(chi, f.comment, false).await.unwrap();
    c.reactions.react(chi, f.comment, true).await.unwrap();
    c.reactions.react(bao, f.comment, true).await.unwrap();

    let tally = c.reactions.tally(f.comment).await.unwrap();
    assert_eq!((tally.likes, tally.dislikes), (2, 0));
    let rows = c
        .reactions
        .list(ReactionQuery::on_comment(f.comment))
        .await
        .unwrap();
    assert_eq!(tally.likes + tally.dislikes, rows.len());
}

#[tokio::test]
async fn concurrent_reacts_on_one_pair_keep_at_most_one_row() {
    let f = fixture().await;
    let reactions = f.system.clients.reactions.clone();

    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let reactions = reactions.clone();
            let (customer, comment) = (f.customer, f.comment);
            tokio::spawn(async move { reactions.react(customer, comment, i % 2 == 0).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let rows = reactions
        .list(ReactionQuery {
            customer: Some(f.customer),
            comment: Some(f.comment),
        })
        .await
        .unwrap();
    assert!(rows.len() <= 1, "found {} reactions for one pair", rows.len());
    let tally = reactions.tally(f.comment).await.unwrap();
    assert_eq!(tally.likes + tally.dislikes, rows.len());
}

#[tokio::test]
async fn missing_or_inactive_targets_are_not_found() {
    let f = fixture().await;
    let c = &f.system.clients;

    let err = c.reactions.react(f.customer, CommentId(99), true).await.unwrap_err();
    assert!(matches!(err, ReactionError::NotFound(_)), "{err:?}");

    let err = c.reactions.react(CustomerId(99), f.comment, true).await.unwrap_err();
    assert!(matches!(err, ReactionError::NotFound(_)), "{err:?}");

    c.reactions.react(f.customer, f.comment, true).await.unwrap();
    c.comments.deactivate(f.comment).await.unwrap();
    let err = c.reactions.react(f.customer, f.comment, true).await.unwrap_err();
    assert!(matches!(err, ReactionError::NotFound(_)), "{err:?}");

    // The refused toggle left the earlier like in place.
    let tally = c.reactions.tally(f.comment).await.unwrap();
    assert_eq!(tally.likes, 1);
}
