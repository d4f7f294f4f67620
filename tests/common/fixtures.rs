use super::doc;
use dotwalk::Document;
use serde_json::json;

/// A patient record with nested names, addresses and contact points.
pub fn patient() -> Document {
    doc(json!({
        "resourceType": "Patient",
        "id": "p-001",
        "active": true,
        "name": [
            { "family": "Smith", "given": ["Ann", "Marie"] },
            { "family": "Jones", "given": ["Annie"] },
            { "use": "nickname" }
        ],
        "address": [
            { "line": ["1 Main St"], "city": "Springfield" },
            { "city": "Shelbyville" }
        ],
        "telecom": [],
        "managingOrganization": null
    }))
}

/// An order with line items, some of which carry nested discounts.
pub fn order() -> Document {
    doc(json!({
        "order": {
            "id": 42,
            "lines": [
                { "sku": "A-1", "qty": 2, "discounts": [{ "code": "SPRING" }] },
                { "sku": "B-7", "qty": 0 },
                { "sku": "C-3", "qty": 1, "discounts": [{ "code": "VIP" }, { "code": "BULK" }] }
            ]
        }
    }))
}
