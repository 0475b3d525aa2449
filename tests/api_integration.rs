//! Integration tests for the Sendrefunds REST API client.
//!
//! These tests verify serialization/deserialization of the wire types against
//! payload shapes observed from the API.

use sendrefunds::api::*;

// =============================================================================
// Type Serialization/Deserialization Tests
// =============================================================================

mod business_types {
    use super::*;

    #[test]
    fn test_business_check_with_session_token() {
        let json = r#"{"Result":{"SessionToken":"abc"}}"#;
        let result: BusinessCheckResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.session_token.as_deref(), Some("abc"));
        assert!(result.result.invitation.is_none());
    }

    #[test]
    fn test_business_check_with_invitation() {
        let json = r#"{
            "Result": {
                "Invitation": { "Url": "https://app-staging.sendrefunds.com/register/xyz" }
            }
        }"#;
        let result: BusinessCheckResult = serde_json::from_str(json).unwrap();
        assert!(result.result.session_token.is_none());
        assert_eq!(
            result.result.invitation.unwrap().url,
            "https://app-staging.sendrefunds.com/register/xyz"
        );
    }

    #[test]
    fn test_business_check_empty_result() {
        let json = r#"{"Result":{}}"#;
        let result: BusinessCheckResult = serde_json::from_str(json).unwrap();
        assert!(result.result.session_token.is_none());
        assert!(result.result.invitation.is_none());
    }
}

mod token_types {
    use super::*;

    #[test]
    fn test_create_access_token_input_serialize() {
        let input = CreateAccessTokenInput {
            session_token: "sess".to_string(),
            ttl: 60,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"session_token": "sess", "ttl": 60}));
    }

    #[test]
    fn test_create_access_token_result_deserialize() {
        let json = r#"{"Result":{"AccessToken":"tok"}}"#;
        let result: CreateAccessTokenResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.access_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_create_access_token_result_missing_token() {
        let json = r#"{"Result":{}}"#;
        let result: CreateAccessTokenResult = serde_json::from_str(json).unwrap();
        assert!(result.result.access_token.is_none());
    }
}

mod invitation_types {
    use super::*;

    #[test]
    fn test_send_invitation_input_skips_absent_business_id() {
        let input = SendInvitationInput {
            email: "test@muf.fr".to_string(),
            country: "fr".to_string(),
            language: "fr".to_string(),
            business_id: None,
            ext_id: "ext001".to_string(),
            return_url: "https://fake.muf".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("business_id").is_none());
        assert_eq!(json["email"], "test@muf.fr");
        assert_eq!(json["ext_id"], "ext001");
    }

    #[test]
    fn test_send_invitation_result_deserialize() {
        let json = r#"{
            "Result": {
                "Invitation": { "Url": "https://app-staging.sendrefunds.com/register/xyz" }
            }
        }"#;
        let result: SendInvitationResult = serde_json::from_str(json).unwrap();
        assert!(result.result.invitation.is_some());
    }
}

mod order_types {
    use super::*;

    #[test]
    fn test_order_status_roundtrip() {
        let status: OrderStatus = serde_json::from_str(r#""SRO1""#).unwrap();
        assert_eq!(status, OrderStatus::Open);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""SRO1""#);

        let status: OrderStatus = serde_json::from_str(r#""SRO2""#).unwrap();
        assert_eq!(status, OrderStatus::Settled);
    }

    #[test]
    fn test_order_deserialize_partial_payload() {
        // A freshly created order: no payments yet, monetary fields absent.
        let json = r#"{
            "Result": {
                "Order": {
                    "CreatedOn": "2021-11-29 13:56:42",
                    "Date": "2021-10-02 00:00:00",
                    "InvoiceLink": "https://staging.sendrefunds.io/v1/invoices/abc.pdf",
                    "Payments": [],
                    "Status": "SRO1"
                }
            }
        }"#;
        let result: GetOrderResult = serde_json::from_str(json).unwrap();
        let order = result.result.order;
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.date, "2021-10-02 00:00:00");
        assert!(order.payments.is_empty());
        assert!(order.amount.is_none());
        assert!(order.incoming_payment_status.is_none());
    }

    #[test]
    fn test_order_deserialize_full_payload() {
        let json = r#"{
            "Result": {
                "Order": {
                    "Status": "SRO2",
                    "IncomingPaymentStatus": "SROP3",
                    "OutgoingPaymentStatus": "SROP4",
                    "InvoiceLink": "https://sendrefunds.io/v1/invoices/abc.pdf",
                    "Currency": "eur",
                    "Amount": 8426,
                    "DueAmount": 0,
                    "Date": "2021-10-02 00:00:00",
                    "CreatedOn": "2021-11-29 13:56:42",
                    "Payments": [
                        {
                            "Result": {
                                "Reference": "ipi_1JId3445ZvKYlo2Cfr8US8uB",
                                "Status": "SRP2",
                                "Provider": "stripe",
                                "Date": "2021-11-01",
                                "CreatedOn": "2021-11-01 09:12:00",
                                "PaymentGatewayResult": {
                                    "Amount": 8426,
                                    "Fee": 120,
                                    "NetAmount": 8306,
                                    "Description": "settled",
                                    "Status": "succeeded"
                                }
                            }
                        }
                    ]
                }
            }
        }"#;
        let result: GetOrderResult = serde_json::from_str(json).unwrap();
        let order = result.result.order;
        assert_eq!(order.status, OrderStatus::Settled);
        assert_eq!(order.incoming_payment_status, Some(IncomingPaymentStatus::Paid));
        assert_eq!(order.outgoing_payment_status, Some(OutgoingPaymentStatus::Cancelled));
        assert_eq!(order.amount, Some(8426));
        assert_eq!(order.due_amount, Some(0));
        assert_eq!(order.payments.len(), 1);
        let payment = &order.payments[0].result;
        assert_eq!(payment.status, PaymentStatus::Confirmed);
        assert_eq!(payment.payment_gateway_result.as_ref().unwrap().net_amount, 8306);
    }

    #[test]
    fn test_create_order_result_deserialize() {
        let json = r#"{"Result":{"Order":{"OrderGuid":"ceda5069-2ebf-4313-86f6-a996b6f855c2"}}}"#;
        let result: CreateOrderResult = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.result.order.order_guid,
            "ceda5069-2ebf-4313-86f6-a996b6f855c2"
        );
    }

    #[test]
    fn test_create_order_input_serialize() {
        let input = CreateOrderInput {
            access_token: "tok".to_string(),
            order_date: "2021-10-02".to_string(),
            order_number: "O22334645".to_string(),
            currency: "eur".to_string(),
            total_sale_amount_net: 8018,
            total_tax_amount: 400,
            total_sale_amount_gross: 8426,
            line_items: vec![CreateOrderLineItemInput {
                supplier: Some("TEST002".to_string()),
                sku_reference: "SKU998".to_string(),
                gitin_reference: "GITIN-REF".to_string(),
                sku_description: Some("test description".to_string()),
                number_of_items: 2,
                sale_price_net: 4543,
                purchase_price_net: 4543,
                line_discount_percentage: 1000,
                line_total_discount_amount: 8018,
                sale_tax_percentage: 500,
                sale_price_gross: 4543,
                line_total_tax_amount: 8426,
                line_total_sale_amount_net: 8018,
                line_total_sale_amount_gross: 8426,
            }],
            client_name: "Test Client".to_string(),
            client_address: "1 rue de Test".to_string(),
            client_street_number: "1".to_string(),
            client_postal_code: "75001".to_string(),
            client_city: "Paris".to_string(),
            client_country: "fr".to_string(),
            client_email: "client@test.fr".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["order_number"], "O22334645");
        assert_eq!(json["total_sale_amount_gross"], 8426);
        assert_eq!(json["line_items"][0]["sku_reference"], "SKU998");
        assert_eq!(json["line_items"][0]["line_discount_percentage"], 1000);
    }

    #[test]
    fn test_get_orders_result_deserialize() {
        let json = r#"{
            "Result": {
                "Orders": [
                    {
                        "Status": "SRO1",
                        "Date": "2021-10-02 00:00:00",
                        "CreatedOn": "2021-11-29 13:56:42",
                        "Payments": []
                    }
                ]
            }
        }"#;
        let result: GetOrdersResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.orders.len(), 1);
        assert_eq!(result.result.orders[0].status, OrderStatus::Open);
    }
}

mod payment_types {
    use super::*;

    #[test]
    fn test_payment_status_deserialize() {
        let status: PaymentStatus = serde_json::from_str(r#""SRP1""#).unwrap();
        assert_eq!(status, PaymentStatus::Pending);
        let status: PaymentStatus = serde_json::from_str(r#""SRP3""#).unwrap();
        assert_eq!(status, PaymentStatus::Rejected);
    }

    #[test]
    fn test_create_payment_result_deserialize() {
        let json = r#"{"Result":{"Payment":{"PaymentGuid":"pay-123"}}}"#;
        let result: CreatePaymentResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.payment.payment_guid, "pay-123");
    }

    #[test]
    fn test_create_payment_input_skips_absent_provider() {
        let input = CreatePaymentInput {
            access_token: "tok".to_string(),
            payment_date: "2021-11-01".to_string(),
            provider: None,
            order_guid: "ord-1".to_string(),
            reference: "ref-1".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("provider").is_none());
        assert_eq!(json["order_guid"], "ord-1");
    }

    #[test]
    fn test_get_order_payments_result_deserialize() {
        let json = r#"{
            "Result": {
                "Payments": [
                    {
                        "Result": {
                            "Reference": "ref-1",
                            "Status": "SRP1",
                            "Date": "2021-11-01",
                            "CreatedOn": "2021-11-01 09:12:00"
                        }
                    }
                ]
            }
        }"#;
        let result: GetOrderPaymentsResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.payments.len(), 1);
        let payment = &result.result.payments[0].result;
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert!(payment.provider.is_none());
        assert!(payment.payment_gateway_result.is_none());
    }
}

mod document_types {
    use super::*;

    #[test]
    fn test_get_documents_result_deserialize() {
        let json = r#"{
            "Result": {
                "Documents": [
                    {
                        "DocumentGuid": "doc-1",
                        "Type": "Invoice",
                        "Url": "https://sendrefunds.io/v1/documents/doc-1.pdf",
                        "CreatedOn": "2021-11-29 13:56:42"
                    }
                ]
            }
        }"#;
        let result: GetDocumentsResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result.documents.len(), 1);
        assert_eq!(result.result.documents[0].kind, "Invoice");
    }
}

mod error_types {
    use super::*;

    #[test]
    fn test_problem_details_deserialize() {
        let json = r#"{
            "error": "Not a registered business",
            "title": "Not Found",
            "type": "https://httpstatus.es/404",
            "status": 404,
            "detail": "Business does not exist"
        }"#;
        let problem: ProblemDetails = serde_json::from_str(json).unwrap();
        assert_eq!(problem.title.as_deref(), Some("Not Found"));
        assert_eq!(problem.status, Some(404));
        assert_eq!(problem.error.as_deref(), Some("Not a registered business"));
        assert_eq!(
            problem.branded_message().as_deref(),
            Some("Sendrefunds error: Not Found Business does not exist")
        );
    }

    #[test]
    fn test_problem_details_branded_message_requires_both_fields() {
        let problem: ProblemDetails =
            serde_json::from_str(r#"{"title": "Bad Request"}"#).unwrap();
        assert!(problem.branded_message().is_none());

        let problem: ProblemDetails =
            serde_json::from_str(r#"{"detail": "Session token is invalid"}"#).unwrap();
        assert!(problem.branded_message().is_none());
    }
}
