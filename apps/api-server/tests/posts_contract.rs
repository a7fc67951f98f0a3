//! The `/posts` API checked end to end by the contract verifier.

mod common;

use blog_core::ports::BlogPostRepository;
use blog_shared::dto::BLOG_POST_FIELDS;
use blog_verifier::Case;
use common::TestApp;

#[actix_web::test]
async fn test_get_returns_all_existing_posts() {
    let app = TestApp::spawn().await;

    app.verifier
        .run_case(Case::ListMatchesStoreCount)
        .await
        .expect("list count case");

    app.stop().await;
}

#[actix_web::test]
async fn test_get_returns_posts_with_required_fields() {
    let app = TestApp::spawn().await;

    app.verifier
        .run_case(Case::ListItemsHaveRequiredFields)
        .await
        .expect("list fields case");

    app.stop().await;
}

#[actix_web::test]
async fn test_post_creates_a_post() {
    let app = TestApp::spawn().await;

    app.verifier
        .run_case(Case::CreateAssignsId)
        .await
        .expect("create case");

    app.stop().await;
}

#[actix_web::test]
async fn test_put_updates_title_and_content() {
    let app = TestApp::spawn().await;

    app.verifier
        .run_case(Case::UpdateChangesFields)
        .await
        .expect("update case");

    app.stop().await;
}

#[actix_web::test]
async fn test_delete_removes_a_post() {
    let app = TestApp::spawn().await;

    app.verifier
        .run_case(Case::DeleteRemovesRecord)
        .await
        .expect("delete case");

    app.stop().await;
}

#[actix_web::test]
async fn test_full_suite_passes_and_leaves_store_empty() {
    let app = TestApp::spawn().await;

    let report = app.verifier.run_all().await;

    let failures: Vec<_> = report.failures().collect();
    assert!(report.is_success(), "failures: {failures:?}");
    assert_eq!(report.passed_count(), Case::ALL.len());
    assert_eq!(app.store.count().await.unwrap(), 0);

    app.stop().await;
}

#[actix_web::test]
async fn test_seed_ten_then_list_ten() {
    let app = TestApp::spawn().await;
    app.verifier.seed(10).await.unwrap();

    let res = reqwest::get(app.url("/posts")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let items = body.as_array().expect("array body");

    assert_eq!(items.len(), 10);
    for item in items {
        for key in BLOG_POST_FIELDS {
            assert!(item.get(key).is_some(), "missing {key} in {item}");
        }
    }

    app.verifier.teardown().await.unwrap();
    app.stop().await;
}

#[actix_web::test]
async fn test_teardown_twice_leaves_store_empty() {
    let app = TestApp::spawn().await;
    app.verifier.seed(10).await.unwrap();

    app.verifier.teardown().await.unwrap();
    assert_eq!(app.store.count().await.unwrap(), 0);
    app.verifier.teardown().await.unwrap();
    assert_eq!(app.store.count().await.unwrap(), 0);

    let body: serde_json::Value = reqwest::get(app.url("/posts"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!([]));

    app.stop().await;
}
