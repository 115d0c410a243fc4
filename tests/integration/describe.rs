//! DescribeCvObject over HTTP.

use super::common::*;
use wiremock::matchers::body_string_contains;
use wiremock::MockServer;

const CONTACT_DESCRIPTION: &str = r#"<DescribeCvObjectResponse xmlns="http://api.cvent.com/2006-11">
  <DescribeCvObjectResult>
    <DescribeCvObjectResult Name="Contact" Searchable="true" Retrievable="true">
      <Field Name="Id" DataType="Id" Searchable="true" Required="true"/>
      <Field Name="FirstName" DataType="String" Searchable="true" Required="false"/>
      <Field Name="EmailAddress" DataType="String" Searchable="true" Required="true"/>
      <CustomField Id="CF-9" Name="Dietary Needs" FieldType="Choice"/>
    </DescribeCvObjectResult>
  </DescribeCvObjectResult>
</DescribeCvObjectResponse>"#;

#[tokio::test]
async fn test_describe_fields_over_http() {
    let server = MockServer::start().await;
    soap_call("DescribeCvObject")
        .and(body_string_contains("<ObjectTypes><CvObjectType>Contact</CvObjectType></ObjectTypes>"))
        .respond_with(xml(200, envelope(CONTACT_DESCRIPTION)))
        .mount(&server)
        .await;

    let client = http_client(&server);

    let description = client.describe("Contact").await.unwrap();
    assert_eq!(description.name, "Contact");
    assert_eq!(description.fields[2].required, Some(true));
    assert_eq!(description.custom_fields[0].id.as_deref(), Some("CF-9"));

    assert_eq!(
        client.describe_fields("Contact", true).await.unwrap(),
        vec!["Id", "FirstName", "EmailAddress", "Dietary Needs"]
    );
    assert_eq!(
        client.describe_fields("Contact", false).await.unwrap(),
        vec!["Id", "FirstName", "EmailAddress"]
    );
}

#[tokio::test]
async fn test_describe_unknown_type_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = http_client(&server);

    assert!(client.describe("Widget").await.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}
