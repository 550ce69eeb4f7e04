use alltrails_lib::{ParkSlug, TrailScraper, TrailSlug};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("alltrails_cli/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_html(name: &str) -> String {
    let path = workspace_root()
        .join("alltrails_lib/tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read page {}: {}", path.display(), e))
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn assert_valid(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    if let Err(e) = validator.validate(data) {
        panic!("data failed validation against {schema_name}: {e}");
    }
}

fn assert_invalid(schema_name: &str, data: &Value, why: &str) {
    let schema = load_schema(schema_name);
    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(validator.validate(data).is_err(), "schema should reject {why}");
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures and pipeline output conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_search_fixture_conforms_to_schema() {
    assert_valid("trail_summary.schema.json", &load_fixture("search_results.json"));
}

#[test]
fn test_detail_fixture_conforms_to_schema() {
    assert_valid("trail_detail.schema.json", &load_fixture("trail_detail.json"));
}

#[test]
fn test_scraped_search_results_conform_to_schema() {
    let scraper = TrailScraper::with_base_url("https://www.alltrails.com").unwrap();
    let park = ParkSlug::new("us/tennessee/great-smoky-mountains-national-park").unwrap();
    let trails = scraper
        .parse_search_page(&load_html("park_page.html"), &park)
        .unwrap();
    assert_eq!(trails.len(), 3);

    let data = serde_json::to_value(&trails).unwrap();
    assert_valid("trail_summary.schema.json", &data);
}

#[test]
fn test_scraped_details_conform_to_schema() {
    let scraper = TrailScraper::with_base_url("https://www.alltrails.com").unwrap();
    for (page, slug) in [
        ("trail_page.html", "us/tennessee/alum-cave-trail-to-mount-leconte"),
        ("trail_page_partial.html", "us/tennessee/laurel-falls-trail"),
    ] {
        let slug = TrailSlug::new(slug).unwrap();
        let detail = scraper.parse_trail_page(&load_html(page), &slug).unwrap();
        let data = serde_json::to_value(&detail).unwrap();
        assert_valid("trail_detail.schema.json", &data);
    }
}

#[test]
fn test_empty_search_conforms_to_schema() {
    assert_valid("trail_summary.schema.json", &serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_summary_schema_rejects_missing_required_field() {
    let mut data = load_fixture("search_results.json");
    data[0]
        .as_object_mut()
        .expect("trail is an object")
        .remove("difficulty");
    assert_invalid("trail_summary.schema.json", &data, "trail missing difficulty");
}

#[test]
fn test_summary_schema_rejects_invalid_enum() {
    let mut data = load_fixture("search_results.json");
    data[0]["route_type"] = Value::String("lollipop".into());
    assert_invalid("trail_summary.schema.json", &data, "unknown route type value");
}

#[test]
fn test_summary_schema_rejects_unit_mismatch() {
    let mut data = load_fixture("search_results.json");
    data[0]["length"]["unit"] = Value::String("ft".into());
    assert_invalid("trail_summary.schema.json", &data, "length measured in feet");
}

#[test]
fn test_summary_schema_rejects_out_of_range_rating() {
    let mut data = load_fixture("search_results.json");
    data[0]["rating"] = serde_json::json!(5.5);
    assert_invalid("trail_summary.schema.json", &data, "rating above 5");
}

#[test]
fn test_detail_schema_rejects_two_segment_park() {
    let mut data = load_fixture("trail_detail.json");
    data["park"] = Value::String("us/tennessee".into());
    assert_invalid("trail_detail.schema.json", &data, "park slug with two segments");
}

#[test]
fn test_detail_schema_rejects_duplicate_tags() {
    let mut data = load_fixture("trail_detail.json");
    data["tags"] = serde_json::json!(["Views", "Views"]);
    assert_invalid("trail_detail.schema.json", &data, "duplicate tags");
}
