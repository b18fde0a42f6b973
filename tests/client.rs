use std::{io::Read, thread};

use migrator_client::{model::CredentialsFile, prelude::*, Error, MigratorClient, MigratorClientBuilder};
use serde_json::json;

#[derive(Debug)]
struct RecordedRequest {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Starts a local server that answers the given responses in order, one per request, and returns the requests it got
/// once they've all been answered.
fn serve(responses: Vec<(u16, &'static str)>) -> (MigratorClient, thread::JoinHandle<Vec<RecordedRequest>>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();

    let handle = thread::spawn(move || {
        responses
            .into_iter()
            .map(|(status, body)| {
                let mut request = server.recv().unwrap();

                let mut request_body = String::new();
                request.as_reader().read_to_string(&mut request_body).unwrap();

                let recorded = RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_owned(),
                    content_type: request
                        .headers()
                        .iter()
                        .find(|header| header.field.equiv("Content-Type"))
                        .map(|header| header.value.as_str().to_owned()),
                    body: request_body,
                };

                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap());
                request.respond(response).unwrap();

                recorded
            })
            .collect()
    });

    let client = MigratorClientBuilder::new(format!("http://{addr}")).build().unwrap();
    (client, handle)
}

#[tokio::test]
async fn health() {
    let (client, server) = serve(vec![(200, r#"{"message":"API is running"}"#)]);

    let message = client.health().await.unwrap();
    let requests = server.join().unwrap();

    assert_eq!(message.message, "API is running");
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/");
}

#[tokio::test]
async fn playlists() {
    let (client, server) = serve(vec![(
        200,
        r#"{"items":[{"id":"p1","name":"Road Trip","tracks":{"total":12}}],"total":1}"#,
    )]);

    let page = client.playlists().await.unwrap();
    let requests = server.join().unwrap();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/spotify/playlists");

    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].id(), "p1");
    assert_eq!(page.options()[0].label, "Road Trip (12)");
}

#[tokio::test]
async fn playlists_unauthenticated() {
    let (client, server) = serve(vec![(
        401,
        r#"{"detail":"User not authenticated. Please login at /auth/spotify/login"}"#,
    )]);

    let err = client.playlists().await.unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, Error::UnsuccessfulResponse { status: 401, .. }));
    assert_eq!(
        err.detail().as_deref(),
        Some("User not authenticated. Please login at /auth/spotify/login")
    );
}

#[tokio::test]
async fn upload_credentials_as_multipart() {
    let (client, server) = serve(vec![(200, r#"{"message":"YouTube headers uploaded successfully."}"#)]);

    client
        .upload_credentials(CredentialsFile::new("browser.json", br#"{"cookie":"abc"}"#.to_vec()))
        .await
        .unwrap();
    let requests = server.join().unwrap();

    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/youtube/auth/upload");
    assert!(request
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
    assert!(request.body.contains(r#"name="file""#));
    assert!(request.body.contains(r#"filename="browser.json""#));
    assert!(request.body.contains(r#"{"cookie":"abc"}"#));
}

#[tokio::test]
async fn upload_credentials_failure() {
    let (client, server) = serve(vec![(500, r#"{"detail":"Permission denied"}"#)]);

    let err = client
        .upload_credentials(CredentialsFile::new("browser.json", b"{}".to_vec()))
        .await
        .unwrap_err();
    server.join().unwrap();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn transfer() {
    let (client, server) = serve(vec![(200, r#"{"matched":5,"unmatched":1}"#)]);

    let report = client.transfer("p1").await.unwrap();
    let requests = server.join().unwrap();

    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/transfer?spotify_playlist_id=p1");
    assert_eq!(report, json!({"matched": 5, "unmatched": 1}));
}

#[tokio::test]
async fn transfer_with_malformed_body() {
    let (client, server) = serve(vec![(200, "not json")]);

    let err = client.transfer("p1").await.unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, Error::JsonError(_)));
}

#[tokio::test]
async fn spotify_routes() {
    let (client, server) = serve(vec![
        (200, r#"{"id":"wizzler","display_name":"Wizzler"}"#),
        (
            200,
            r#"{"items":[{"track":{"name":"Song A","artists":[{"name":"Artist A"}],"duration_ms":1000}},{"track":null}]}"#,
        ),
    ]);

    let profile = client.profile().await.unwrap();
    let tracks = client.playlist_tracks("p1").await.unwrap();
    let requests = server.join().unwrap();

    assert_eq!(profile.display_name(), "Wizzler");
    assert_eq!(tracks.tracks().count(), 1);
    assert_eq!(requests[0].url, "/spotify/me");
    assert_eq!(requests[1].url, "/spotify/playlist/p1/tracks");
}

#[tokio::test]
async fn youtube_routes() {
    let (client, server) = serve(vec![
        (200, r#"[{"videoId":"vid1","title":"Song A"}]"#),
        (200, r#"{"playlist_id":"PLabc"}"#),
        (200, r#"{"status":"STATUS_SUCCEEDED"}"#),
    ]);

    let results = client.youtube_search("song a artist").await.unwrap();
    let created = client.create_youtube_playlist("Road Trip", "").await.unwrap();
    client.add_to_youtube_playlist("PLabc", "vid1").await.unwrap();
    let requests = server.join().unwrap();

    assert_eq!(results[0]["videoId"], "vid1");
    assert_eq!(created.playlist_id(), "PLabc");

    assert_eq!(requests[0].url, "/youtube/search?q=song+a+artist");
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].url, "/youtube/create_playlist?title=Road+Trip&description=");
    assert_eq!(requests[2].url, "/youtube/add?playlist_id=PLabc&video_id=vid1");
}
