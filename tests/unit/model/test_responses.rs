use serde_json::json;
use tradeit_client::error::AppError;
use tradeit_client::model::responses::{
    FxOrderResponse, GetPositionsResponse, ResponseStatus, TradeItResponse, parse_response,
};
use tradeit_client::presentation::order::OrderStatus;

#[test]
fn positions_response_is_parsed() {
    let raw = json!({
        "status": "SUCCESS",
        "token": "refreshed-token",
        "shortMessage": "Position successfully fetched",
        "longMessages": null,
        "accountBaseCurrency": "USD",
        "currentPage": 1,
        "totalPages": 2,
        "positions": [
            {
                "symbol": "EUR/USD",
                "symbolClass": "FX",
                "holdingType": "LONG",
                "costbasis": 1080.5,
                "lastPrice": 1.09,
                "quantity": 1000.0,
                "totalGainLossAbsolute": 9.5
            },
            {
                "symbol": "USD/JPY",
                "holdingType": "SHORT",
                "quantity": 10.0,
                "lastPrice": 150.0
            }
        ]
    });

    let response: GetPositionsResponse = parse_response(raw).unwrap();
    assert!(response.is_success());
    assert_eq!(response.envelope.token.as_ref().unwrap().as_str(), "refreshed-token");
    assert!(response.envelope.long_messages.is_empty());
    assert_eq!(response.positions.len(), 2);
    assert_eq!(response.positions[0].cost_basis, Some(1080.5));
    assert!(response.positions[1].is_short());
    assert!(response.has_more_pages());
    assert_eq!(response.account_base_currency.as_deref(), Some("USD"));
    assert!((response.total_market_value() - 2590.0).abs() < 1e-9);
}

#[test]
fn error_status_becomes_broker_error() {
    let raw = json!({
        "status": "ERROR",
        "code": 300,
        "shortMessage": "Could Not Fetch Positions",
        "longMessages": ["Account ACC123 is not linked."]
    });

    let result: Result<GetPositionsResponse, AppError> = parse_response(raw);
    match result {
        Err(AppError::Broker {
            code,
            short_message,
            long_messages,
        }) => {
            assert_eq!(code, Some(300));
            assert_eq!(short_message, "Could Not Fetch Positions");
            assert_eq!(long_messages, vec!["Account ACC123 is not linked.".to_string()]);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn non_error_statuses_are_returned_to_the_caller() {
    let raw = json!({"status": "REVIEW_ORDER", "orderNumber": null});
    let response: FxOrderResponse = parse_response(raw).unwrap();
    assert_eq!(response.envelope.status, ResponseStatus::ReviewOrder);
    assert!(!response.is_success());
}

#[test]
fn unknown_status_does_not_fail_parsing() {
    let raw = json!({"status": "SOMETHING_NEW"});
    let response: GetPositionsResponse = parse_response(raw).unwrap();
    assert_eq!(response.envelope.status, ResponseStatus::Unknown);
    assert!(response.positions.is_empty());
    assert!(!response.has_more_pages());
}

#[test]
fn malformed_body_is_a_deserialization_error() {
    let raw = json!({"status": "SUCCESS", "positions": "not-a-list"});
    let result: Result<GetPositionsResponse, AppError> = parse_response(raw);
    assert!(matches!(result, Err(AppError::Deserialization(_))));
}

#[test]
fn fx_order_response_exposes_group_status() {
    let raw = json!({
        "status": "SUCCESS",
        "orderNumber": "ORD-1",
        "orderStatusDetails": {
            "orderNumber": "ORD-1",
            "orderType": "market",
            "orderExpiration": "day",
            "orderStatus": "FILLED",
            "orderLegs": [
                {"priceType": "market", "symbol": "EUR/USD", "action": "buy",
                 "orderedQuantity": 1000.0, "filledQuantity": 1000.0}
            ],
            "groupOrderId": "G-1",
            "groupOrderType": "OCO",
            "groupOrders": [
                {"orderNumber": "ORD-2", "orderStatus": "CANCELED"},
                {"orderNumber": "ORD-3", "orderStatus": "OPEN", "groupOrders": null}
            ]
        }
    });

    let response: FxOrderResponse = parse_response(raw).unwrap();
    assert_eq!(response.order_number.as_deref(), Some("ORD-1"));
    assert_eq!(response.order_status(), Some(OrderStatus::Filled));

    let details = response.order_status_details.unwrap();
    let numbers: Vec<_> = details
        .all_orders()
        .iter()
        .map(|order| order.order_number.clone().unwrap())
        .collect();
    assert_eq!(numbers, vec!["ORD-1", "ORD-2", "ORD-3"]);
    assert!(!details.is_settled());
    assert_eq!(details.order_legs[0].remaining_quantity(), Some(0.0));
}

#[test]
fn blank_echoed_token_reads_as_absent() {
    let raw = json!({"status": "SUCCESS", "token": "   ", "positions": []});
    let response: GetPositionsResponse = parse_response(raw).unwrap();
    assert!(response.envelope.token.is_none());
}
