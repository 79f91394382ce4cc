use httpmock::Method::GET;
use tradier_rs::{Backend, ConfigNode, Tradier, fetch};

use crate::common;

#[test]
fn access_token_is_read_from_config_tree() {
    let mut backend = Tradier::builder().build().unwrap();
    assert_eq!(backend.access_token(), "");

    backend.set_config(&[
        ConfigNode::entry("refresh_period", "30"),
        ConfigNode::new("access_token")
            .child(ConfigNode::new("first"))
            .child(ConfigNode::new("second")),
    ]);
    assert_eq!(backend.access_token(), "first");
}

#[test]
fn missing_or_empty_node_keeps_the_current_token() {
    let mut backend = Tradier::builder().access_token("keep").build().unwrap();

    backend.set_config(&[ConfigNode::entry("other", "x")]);
    assert_eq!(backend.access_token(), "keep");

    backend.set_config(&[ConfigNode::new("access_token")]);
    assert_eq!(backend.access_token(), "keep");
}

#[test]
fn config_tree_deserializes_from_json() {
    let forest: Vec<ConfigNode> = serde_json::from_str(
        r#"[{"value": "access_token", "children": [{"value": "from-json"}]}]"#,
    )
    .unwrap();

    let mut backend = Tradier::builder().build().unwrap();
    backend.set_config(&forest);
    assert_eq!(backend.access_token(), "from-json");
}

#[tokio::test]
async fn configured_token_is_sent_as_bearer() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/search")
            .header("authorization", "Bearer configured");
        then.status(200).body(common::fixture("search_apple"));
    });

    let mut backend = common::backend(&server);
    backend.set_config(&[ConfigNode::entry("access_token", "configured")]);
    assert_eq!(backend.id(), "tradier");

    let tickers = fetch::find_ticker(&backend, "apple").await.unwrap();
    mock.assert();
    assert_eq!(tickers.len(), 3);
}
