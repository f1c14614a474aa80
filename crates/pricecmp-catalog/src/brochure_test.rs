use serde_json::json;

use super::*;

fn sample_items() -> Value {
    json!([
        {
            "name": "  Large Eggs ",
            "description": null,
            "sale_story": "Save $1 with card",
            "price_text": "2.99",
            "post_price_text": "/doz",
            "categories": ["Dairy", "Eggs"]
        },
        {
            "name": "Store Coupon",
            "price_text": "",
            "categories": []
        },
        {
            "name": "Bananas",
            "description": "Fresh from Ecuador",
            "price_text": "0.59",
            "post_price_text": "/lb",
            "categories": ["Produce"]
        }
    ])
}

// -----------------------------------------------------------------------
// path resolution
// -----------------------------------------------------------------------

#[test]
fn plain_key_is_trimmed() {
    let item = json!({"name": "  Milk  "});
    assert_eq!(resolve_path(&item, "name").as_deref(), Some("Milk"));
}

#[test]
fn dotted_path_descends_objects() {
    let item = json!({"pricing": {"sale": {"text": "$3.00"}}});
    assert_eq!(resolve_path(&item, "pricing.sale.text").as_deref(), Some("$3.00"));
}

#[test]
fn array_on_the_way_takes_first_element() {
    let item = json!({"offers": [{"price": "1.99"}, {"price": "2.49"}]});
    assert_eq!(resolve_path(&item, "offers.price").as_deref(), Some("1.99"));
}

#[test]
fn empty_array_on_the_way_resolves_nothing() {
    let item = json!({"offers": []});
    assert_eq!(resolve_path(&item, "offers.price"), None);
}

#[test]
fn array_at_end_is_joined() {
    let item = json!({"categories": ["Dairy", "Eggs", 3]});
    assert_eq!(
        resolve_path(&item, "categories").as_deref(),
        Some("Dairy, Eggs, 3")
    );
}

#[test]
fn numbers_and_bools_stringify() {
    let item = json!({"price": 4.5, "on_sale": true});
    assert_eq!(resolve_path(&item, "price").as_deref(), Some("4.5"));
    assert_eq!(resolve_path(&item, "on_sale").as_deref(), Some("true"));
}

#[test]
fn null_and_missing_resolve_nothing() {
    let item = json!({"description": null});
    assert_eq!(resolve_path(&item, "description"), None);
    assert_eq!(resolve_path(&item, "missing"), None);
    assert_eq!(resolve_path(&item, "description.deeper"), None);
}

#[test]
fn extract_field_falls_through_to_next_path() {
    let item = json!({"description": null, "sale_story": "Save $1"});
    let paths = vec!["description".to_string(), "sale_story".to_string()];
    assert_eq!(extract_field(&item, &paths), "Save $1");
}

#[test]
fn extract_field_without_paths_is_empty() {
    assert_eq!(extract_field(&json!({"name": "Milk"}), &[]), "");
}

// -----------------------------------------------------------------------
// price labels
// -----------------------------------------------------------------------

#[test]
fn compose_price_joins_label_parts() {
    assert_eq!(compose_price("2 for", "5.00", ""), "2 for $5.00");
    assert_eq!(compose_price("", "2.99", "/lb."), "$2.99 /lb.");
    assert_eq!(compose_price("", "$4.49", ""), "$4.49");
    assert_eq!(compose_price("2 for", "", "/lb."), "");
}

#[test]
fn unit_price_divides_multi_buy_amount() {
    assert_eq!(unit_price_text("2 for", "5.00"), "$2.50");
    assert_eq!(unit_price_text("3 FOR", "$10"), "$3.33");
}

#[test]
fn unit_price_without_multi_buy_is_the_amount() {
    assert_eq!(unit_price_text("", "2.99"), "$2.99");
    assert_eq!(unit_price_text("Save", "$1.99"), "$1.99");
    assert_eq!(unit_price_text("", ""), "");
}

#[test]
fn unreadable_multi_buy_has_no_unit_price() {
    assert_eq!(unit_price_text("Buy 2 for", "5.00"), "");
    assert_eq!(unit_price_text("0 for", "5.00"), "");
    assert_eq!(unit_price_text("2 for", "five"), "");
}

// -----------------------------------------------------------------------
// brochure_rows
// -----------------------------------------------------------------------

#[test]
fn multi_buy_keeps_quantity_and_unit_price() {
    let document = json!([{"name": "Yogurt", "pre_price_text": "2 for", "price_text": "5.00"}]);
    let rows = brochure_rows(&document, &FieldMapping::default(), 10).expect("items");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].price, "2 for $5.00");
    assert_eq!(rows[0].price_per_unit, "$2.50");
}

#[test]
fn mapped_unit_price_is_used_when_present() {
    let document = json!([
        {"name": "Steak", "price_text": "9.99", "unit": "$9.99/lb"},
        {"name": "Rice", "price_text": "3.49"}
    ]);
    let mapping = FieldMapping {
        price_per_unit: vec!["unit".to_string()],
        ..FieldMapping::default()
    };

    let rows = brochure_rows(&document, &mapping, DEFAULT_MAX_ROWS).expect("items");
    assert_eq!(rows[0].price_per_unit, "$9.99/lb");
    assert_eq!(rows[1].price_per_unit, "$3.49");
}

#[test]
fn converts_items_and_drops_unpriced() {
    let rows = brochure_rows(&sample_items(), &FieldMapping::default(), DEFAULT_MAX_ROWS)
        .expect("item list present");

    assert_eq!(
        rows,
        vec![
            BrochureRow {
                name: "Large Eggs".to_string(),
                description: "Save $1 with card".to_string(),
                price: "$2.99 /doz".to_string(),
                price_per_unit: "$2.99".to_string(),
                category: "Dairy, Eggs".to_string(),
            },
            BrochureRow {
                name: "Bananas".to_string(),
                description: "Fresh from Ecuador".to_string(),
                price: "$0.59 /lb".to_string(),
                price_per_unit: "$0.59".to_string(),
                category: "Produce".to_string(),
            },
        ]
    );
}

#[test]
fn max_rows_counts_items_before_filtering() {
    // The second item is unpriced, so two items yield one row.
    let rows = brochure_rows(&sample_items(), &FieldMapping::default(), 2).expect("items");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Large Eggs");
}

#[test]
fn wrapped_list_is_unwrapped() {
    let document = json!({
        "meta": {"count": 1},
        "items": [{"name": "Rice", "price_text": "3.49"}],
        "other": [{"name": "Ignored", "price_text": "1.00"}]
    });
    let rows =
        brochure_rows(&document, &FieldMapping::default(), DEFAULT_MAX_ROWS).expect("items");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Rice");
}

#[test]
fn document_without_list_is_an_error() {
    let err = brochure_rows(&json!({"count": 0}), &FieldMapping::default(), 10).unwrap_err();
    assert!(matches!(err, CatalogError::NoItems));

    let err = brochure_rows(&json!("text"), &FieldMapping::default(), 10).unwrap_err();
    assert!(matches!(err, CatalogError::NoItems));
}

#[test]
fn custom_mapping_reads_nested_fields() {
    let document = json!([
        {"title": "Yogurt", "pricing": [{"display": "$1.25"}], "dept": {"name": "Dairy"}}
    ]);
    let mapping: FieldMapping = serde_json::from_value(json!({
        "name": ["title"],
        "price": ["pricing.display"],
        "category": ["dept.name"]
    }))
    .expect("valid mapping");

    let rows = brochure_rows(&document, &mapping, DEFAULT_MAX_ROWS).expect("items");
    assert_eq!(
        rows,
        vec![BrochureRow {
            name: "Yogurt".to_string(),
            price: "$1.25".to_string(),
            price_per_unit: "$1.25".to_string(),
            category: "Dairy".to_string(),
            ..BrochureRow::default()
        }]
    );
}

// -----------------------------------------------------------------------
// files
// -----------------------------------------------------------------------

#[test]
fn csv_output_has_catalog_headers() {
    let rows = brochure_rows(&sample_items(), &FieldMapping::default(), DEFAULT_MAX_ROWS)
        .expect("items");
    let mut out = Vec::new();
    write_brochure_csv(&mut out, &rows).expect("write csv");

    let text = String::from_utf8(out).expect("utf-8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "name,description,price,price_per_unit,category");
    assert_eq!(lines[1], "Large Eggs,Save $1 with card,$2.99 /doz,$2.99,\"Dairy, Eggs\"");
    assert_eq!(lines.len(), 3);
}

#[test]
fn csv_output_without_rows_is_header_only() {
    let mut out = Vec::new();
    write_brochure_csv(&mut out, &[]).expect("write csv");
    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        "name,description,price,price_per_unit,category\n"
    );
}

#[test]
fn mapping_file_leaves_missing_columns_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mapping.json");
    std::fs::write(&path, r#"{"name": ["title"], "price": ["cost"]}"#).expect("write mapping");

    let mapping = load_field_mapping(&path).expect("mapping loads");
    assert_eq!(mapping.name, vec!["title".to_string()]);
    assert_eq!(mapping.price, vec!["cost".to_string()]);
    assert!(mapping.description.is_empty());
    assert!(mapping.category.is_empty());
}

#[test]
fn invalid_mapping_file_is_deserialize_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mapping.json");
    std::fs::write(&path, r#"{"name": "title"}"#).expect("write mapping");

    let err = load_field_mapping(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Deserialize { .. }), "got {err:?}");
}
