//! End-to-end pickup flow against a mock Canada Post endpoint.

mod common;

use freightgate_sdk::client::{Address, Parcel, PickupRequest, ShippingClient};

fn pickup_payload() -> PickupRequest {
    PickupRequest {
        address: Address {
            person_name: Some("Jane Akwagyiram".to_string()),
            company_name: Some("ABC Corp.".to_string()),
            address_line1: Some("1098 St. Avenue".to_string()),
            city: Some("Toronto".to_string()),
            postal_code: Some("M6K 3C3".to_string()),
            country_code: Some("CA".to_string()),
            email: Some("jane@abc.corp".to_string()),
            phone_number: Some("416 555 8888".to_string()),
            residential: false,
        },
        date: "2015-01-28".to_string(),
        ready_time: "15:00".to_string(),
        closing_time: "17:00".to_string(),
        instruction: Some("Door at Back".to_string()),
        parcels: vec![Parcel {
            weight: Some("2".to_string()),
            weight_unit: Some("KG".to_string()),
        }],
        options: Default::default(),
    }
}

#[tokio::test]
async fn test_schedule_list_and_cancel_pickup() {
    let carrier_addr = common::start_mock_carrier(common::PICKUP_SUCCESS_XML).await;
    let base_url = common::start_gateway(common::test_config(carrier_addr)).await;
    let client = ShippingClient::new(&base_url);

    assert!(client.health().await.unwrap());
    assert_eq!(client.carriers().await.unwrap(), vec!["canadapost"]);

    let pickup = client
        .schedule_pickup("canadapost", &pickup_payload())
        .await
        .unwrap();
    assert_eq!(pickup.carrier_id, "canadapost");
    assert_eq!(pickup.confirmation_number, "0074698052");
    assert_eq!(pickup.pickup_date.as_deref(), Some("2015-01-28"));
    let charge = pickup.pickup_charge.unwrap();
    assert_eq!(charge["name"], "Pickup fees");
    assert_eq!(charge["currency"], "CAD");
    // 2.50 hst + 10.00 due, missing gst counts as zero.
    assert_eq!(charge["amount"], "12.50");

    let pickups = client.list_pickups().await.unwrap();
    assert_eq!(pickups.len(), 1);
    assert_eq!(pickups[0].id, pickup.id);

    let mut changed = pickup_payload();
    changed.instruction = Some("Ring the bell".to_string());
    let updated = client.update_pickup(&pickup.id, &changed).await.unwrap();
    assert_eq!(updated.id, pickup.id);
    assert_eq!(updated.confirmation_number, "0074698052");

    // The mock answers cancellation with a non-fault document, which the
    // mapper treats as success.
    let confirmation = client.cancel_pickup(&pickup.id).await.unwrap();
    assert_eq!(confirmation["success"], true);
    assert_eq!(confirmation["operation"], "Cancel Pickup");

    assert!(client.list_pickups().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_carrier_is_rejected() {
    let carrier_addr = common::start_mock_carrier(common::PICKUP_SUCCESS_XML).await;
    let base_url = common::start_gateway(common::test_config(carrier_addr)).await;
    let client = ShippingClient::new(&base_url);

    let err = client
        .schedule_pickup("warp_logistics", &pickup_payload())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_carrier_fault_document_yields_rejection() {
    const FAULT_XML: &str = r#"<messages xmlns="http://www.canadapost.ca/ws/messages">
        <message><code>AA004</code><description>Invalid pickup date.</description></message>
    </messages>"#;

    let carrier_addr = common::start_mock_carrier(FAULT_XML).await;
    let base_url = common::start_gateway(common::test_config(carrier_addr)).await;
    let client = ShippingClient::new(&base_url);

    let err = client
        .schedule_pickup("canadapost", &pickup_payload())
        .await
        .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("AA004"));
}
