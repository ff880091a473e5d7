use maplit::hashmap;
use serde_json::{json, Value};

use couchbase_n1ql::consistency::ScanConsistency;
use couchbase_n1ql::query::{QueryRequest, QueryValues};
use couchbase_n1ql::query_args;
use couchbase_n1ql::statement::StatementParamsBuilder;

fn decode(request: &QueryRequest) -> Value {
    serde_json::from_str(&request.encoded().expect("request should encode"))
        .expect("body should be valid json")
}

#[test]
fn encode_named_args() {
    let statement = "SELECT * FROM default WHERE field1=$arg1 AND field2=$arg2";
    let mut request = QueryRequest::new(statement);
    request.params.values =
        hashmap! {"arg1" => json!("foo"), "arg2" => json!("bar")}.into();

    assert_eq!(statement, request.statement);

    let body = decode(&request);
    assert_eq!(statement, body["statement"]);
    assert_eq!("foo", body["$arg1"]);
    assert_eq!("bar", body["$arg2"]);
}

#[test]
fn encode_positional_args() {
    let statement = "SELECT * FROM default WHERE field1=$1 AND field2=$arg2";
    let mut request = QueryRequest::new(statement);
    request.params.values = query_args!("foo", "bar");

    let body = decode(&request);
    assert_eq!(statement, body["statement"]);
    assert_eq!("foo", body["args"][0]);
    assert_eq!("bar", body["args"][1]);
}

#[test]
fn encode_mixed_args() {
    let statement = "SELECT * FROM default WHERE field1=$1 AND field2=$arg2";
    let mut values = QueryValues::new();
    values.push_positional("foo");
    values.insert_named("arg2", "bar");

    let mut request = QueryRequest::new(statement);
    request.params.values = values;

    let body = decode(&request);
    assert_eq!("bar", body["$arg2"]);
    assert_eq!("foo", body["args"][0]);
    assert_eq!(Some(1), body["args"].as_array().map(Vec::len));
}

#[test]
fn encode_consistency() {
    let statement = "SELECT * FROM default";
    let params = StatementParamsBuilder::new()
        .with_consistency(ScanConsistency::RequestPlus)
        .build();
    let mut request = QueryRequest::with_params(statement, params.query_params);

    let body = decode(&request);
    assert_eq!("request_plus", body["scan_consistency"]);

    request.params.consistency = Some(ScanConsistency::NotBounded);
    let body = decode(&request);
    assert_eq!("none", body["scan_consistency"]);
}

#[test]
fn encode_scan_vector() {
    // The value is a vbucket's sequence number, the guard its UUID.
    let mut request = QueryRequest::new("SELECT * FROM default");

    request.add_scan_vector_entry(42, 3004, 3);
    let body = decode(&request);
    assert_eq!("at_plus", body["scan_consistency"]);
    assert_eq!(json!({"42": {"value": 3, "guard": "3004"}}), body["scan_vector"]);

    // Same vbucket again: the entry is updated, not duplicated.
    request.add_scan_vector_entry(42, 3004, 4);
    let body = decode(&request);
    assert_eq!(json!({"42": {"value": 4, "guard": "3004"}}), body["scan_vector"]);

    request.add_scan_vector_entry(91, 7779, 23);
    let body = decode(&request);
    assert_eq!(
        json!({
            "42": {"value": 4, "guard": "3004"},
            "91": {"value": 23, "guard": "7779"}
        }),
        body["scan_vector"]
    );
}

#[test]
fn encode_statement_only() {
    let statement = "SELECT * FROM default";
    let request = QueryRequest::new(statement);

    let body = decode(&request);
    assert_eq!(statement, body["statement"]);
    assert!(body.get("args").is_none());
    assert!(body.get("scan_consistency").is_none());
}
