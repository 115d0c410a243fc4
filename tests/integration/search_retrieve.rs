//! Search, Retrieve and the composite, over HTTP and over a scripted
//! transport.

use super::common::*;
use chrono::{TimeZone, Utc};
use cvent_api::soap::ErrorKind;
use cvent_api::{Filter, Predicate, RetrieveOptions, SearchType};
use serde_json::json;
use wiremock::matchers::body_string_contains;
use wiremock::MockServer;

fn event_fixture() -> ScriptedTransport {
    ScriptedTransport::new()
        .reply("Search", json!({"SearchResult": {"Id": ["E-1", "E-2"]}}))
        .reply(
            "Retrieve",
            json!({"RetrieveResult": {"CvObject": [
                {"Id": "E-1", "EventCode": "SUMMIT", "EventTitle": "Summit"},
                {"Id": "E-2", "EventCode": "EXPO", "EventTitle": ""}
            ]}}),
        )
}

fn filters() -> Vec<Predicate> {
    vec![
        Filter::new("EventStartDate", ">", Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()).into(),
        Filter::new("EventStatus", "in", vec!["Active", "Pending"]).into(),
    ]
}

#[tokio::test]
async fn test_search_and_retrieve_equals_retrieve_of_search() {
    let fields = ["EventCode", "EventTitle"];

    let composite_client = scripted_client(event_fixture());
    let composite = composite_client
        .search_and_retrieve("Event", filters(), &fields, SearchType::AndSearch)
        .await
        .unwrap();

    let manual_client = scripted_client(event_fixture());
    let ids = manual_client
        .search("Event", filters(), SearchType::AndSearch)
        .await
        .unwrap();
    let manual = manual_client.retrieve("Event", ids, &fields).await.unwrap();

    assert_eq!(composite, manual);
    assert_eq!(
        composite_client.connection().transport().calls(),
        manual_client.connection().transport().calls()
    );

    let record = &composite["E-2"];
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["EventCode", "EventTitle", "Id"]);
    assert_eq!(record["EventTitle"], json!(""));
}

#[tokio::test]
async fn test_filters_are_serialized_into_the_search_call() {
    let client = scripted_client(event_fixture());
    client.search("Event", filters(), SearchType::OrSearch).await.unwrap();

    let calls = client.connection().transport().calls();
    assert_eq!(
        calls[0].params["CvSearchObject"],
        json!({
            "@SearchType": "OrSearch",
            "Filter": [
                {"Field": "EventStartDate", "Operator": "Greater than", "Value": "2025-01-01 00:00:00"},
                {"Field": "EventStatus", "Operator": "Includes", "ValueArray": {"Value": ["Active", "Pending"]}}
            ]
        })
    );
}

#[tokio::test]
async fn test_search_and_retrieve_over_http() {
    let server = MockServer::start().await;

    soap_call("Search")
        .and(body_string_contains(r#"<CvSearchObject SearchType="AndSearch">"#))
        .and(body_string_contains("<Operator>Equals</Operator>"))
        .respond_with(xml(
            200,
            envelope("<SearchResponse><SearchResult><Id>R-1</Id></SearchResult></SearchResponse>"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let retrieve = r#"<RetrieveResponse xmlns="http://api.cvent.com/2006-11"><RetrieveResult>
        <CvObject xsi:type="Registration" Id="R-1" FirstName="Ada" Email="">
          <CustomFieldDetail FieldName="Shirt Size" FieldValue="M" FieldId="CF-1"/>
          <EventSurveyDetail QuestionText="Color?" QuestionId="Q-1">
            <Answer AnswerText="Blue"/>
          </EventSurveyDetail>
          <EventSurveyDetail QuestionText="Sessions?" QuestionId="Q-2">
            <Answer AnswerText="Keynote"/>
            <Answer AnswerText="Workshop"/>
            <Answer AnswerPart="Other" AnswerOther="Hiking"/>
          </EventSurveyDetail>
        </CvObject>
      </RetrieveResult></RetrieveResponse>"#;

    soap_call("Retrieve")
        .and(body_string_contains("<Ids><Id>R-1</Id></Ids>"))
        .respond_with(xml(200, envelope(retrieve)))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server);
    let records = client
        .search_and_retrieve_with(
            "Registration",
            [Filter::equals("EventCode", "SUMMIT")],
            &["FirstName", "Email", "Shirt Size", "Answer", "Missing"],
            SearchType::AndSearch,
            RetrieveOptions::default().with_always_flat(false),
        )
        .await
        .unwrap();

    let record = &records["R-1"];
    assert_eq!(record["FirstName"], json!("Ada"));
    assert_eq!(record["Email"], json!(""));
    assert_eq!(record["Shirt Size"], json!("M"));
    assert_eq!(record["Missing"], json!(""));
    assert_eq!(record["Id"], json!("R-1"));
    assert_eq!(
        record["Answer"],
        json!("Question:\nColor?\nResponse:\nBlue\n\nQuestion:\nSessions?\nResponse:\nKeynote, Workshop, Other: Hiking")
    );
    assert_eq!(
        record["Answer Array"],
        json!({"Color?": "Blue", "Sessions?": "Keynote, Workshop, Other: Hiking"})
    );
}

#[tokio::test]
async fn test_invalid_search_filter_over_http() {
    let server = MockServer::start().await;
    soap_call("Search")
        .respond_with(xml(500, fault("soap:Client", "INVALID_SEARCH_FILTER")))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client
        .search("Event", [Filter::equals("NotAField", "x")], SearchType::AndSearch)
        .await
        .unwrap_err();

    assert!(err.is_invalid_search_filter());
    let fault = err.fault().unwrap();
    assert_eq!(fault.code, "soap:Client");
    assert!(fault.diagnostics.as_ref().unwrap().request.contains("NotAField"));
}

#[tokio::test]
async fn test_unclassified_fault_carries_report() {
    let server = MockServer::start().await;
    soap_call("Retrieve")
        .respond_with(xml(500, fault("soap:Server", "Server was unable to process request.")))
        .mount(&server)
        .await;

    let client = http_client(&server);
    let err = client.retrieve("Event", "E-1", &["Id"]).await.unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Fault(_)));
    let text = err.to_string();
    assert!(text.starts_with("Error with Cvent API. Exception occurred.\n"));
    assert!(text.contains("faultcode: soap:Server\n"));
    assert!(text.contains("Sent Request: \n"));
}

#[tokio::test]
async fn test_invalid_object_name_makes_no_request() {
    let server = MockServer::start().await;
    let client = http_client(&server);

    let err = client
        .search("Widget", Vec::<Predicate>::new(), SearchType::AndSearch)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidObjectName(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
