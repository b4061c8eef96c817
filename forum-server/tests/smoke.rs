use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};

fn base_url() -> String {
    std::env::var("FORUM_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn post_comment_vote_flow() {
    let base = base_url();
    let client = reqwest::Client::new();
    let title = format!("smoke title {}", unique_suffix());

    // create
    let created: Value = client
        .post(format!("{base}/posts"))
        .json(&json!({"title": title, "body": "smoke body", "userId": 3}))
        .send()
        .await
        .expect("create must send")
        .error_for_status()
        .expect("create must succeed")
        .json()
        .await
        .expect("create must return json");
    assert_eq!(created["data"]["commentsTotal"], 0);
    assert_eq!(created["data"]["upVotesTotal"], 0);
    let post_id = created["data"]["id"].as_i64().expect("post id");

    // comment bumps the counter on the returned parent post
    let commented: Value = client
        .post(format!("{base}/posts/{post_id}/comments"))
        .json(&json!({"body": "nice", "userId": 4}))
        .send()
        .await
        .expect("comment must send")
        .error_for_status()
        .expect("comment must succeed")
        .json()
        .await
        .expect("comment must return json");
    assert_eq!(commented["data"]["commentsTotal"], 1);

    // first vote creates a row
    client
        .post(format!("{base}/posts/{post_id}/vote"))
        .json(&json!({"userId": 4, "userVote": 1}))
        .send()
        .await
        .expect("vote must send")
        .error_for_status()
        .expect("vote must succeed");
    let fetched: Value = client
        .get(format!("{base}/posts/{post_id}"))
        .send()
        .await
        .expect("get must send")
        .json()
        .await
        .expect("get must return json");
    assert_eq!(fetched["data"]["upVotesTotal"], 1);
    assert_eq!(fetched["data"]["downVotesTotal"], 0);

    // same user flips the sign in place
    client
        .post(format!("{base}/posts/{post_id}/vote"))
        .json(&json!({"userId": 4, "userVote": -1}))
        .send()
        .await
        .expect("flip must send")
        .error_for_status()
        .expect("flip must succeed");
    let fetched: Value = client
        .get(format!("{base}/posts/{post_id}"))
        .send()
        .await
        .expect("get must send")
        .json()
        .await
        .expect("get must return json");
    assert_eq!(fetched["data"]["upVotesTotal"], 0);
    assert_eq!(fetched["data"]["downVotesTotal"], 1);
    assert_eq!(fetched["data"]["votes"].as_array().map(Vec::len), Some(1));

    // delete cascades and the post is gone
    client
        .delete(format!("{base}/posts/{post_id}"))
        .send()
        .await
        .expect("delete must send")
        .error_for_status()
        .expect("delete must succeed");
    let status = client
        .get(format!("{base}/posts/{post_id}"))
        .send()
        .await
        .expect("get must send")
        .status();
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires running HTTP server and reachable user directory"]
async fn users_are_proxied_with_image_urls() {
    let base = base_url();
    let client = reqwest::Client::new();

    let users: Value = client
        .get(format!("{base}/users"))
        .send()
        .await
        .expect("list must send")
        .error_for_status()
        .expect("list must succeed")
        .json()
        .await
        .expect("list must return json");
    let records = users["data"].as_array().expect("data must be an array");
    assert!(!records.is_empty());
    for record in records {
        let id = record["id"].as_i64().expect("user id");
        let bucket = if id % 2 != 0 { "men" } else { "women" };
        assert_eq!(
            record["imageUrl"],
            format!("https://randomuser.me/api/portraits/{bucket}/{id}.jpg")
        );
    }

    let user: Value = client
        .get(format!("{base}/users/1"))
        .send()
        .await
        .expect("get must send")
        .error_for_status()
        .expect("get must succeed")
        .json()
        .await
        .expect("get must return json");
    assert_eq!(
        user["data"]["imageUrl"],
        "https://randomuser.me/api/portraits/men/1.jpg"
    );
}
