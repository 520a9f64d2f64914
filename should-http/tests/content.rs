//! Content assertion behavior: raw text, typed JSON, and predicates.

use serde::{Deserialize, Serialize};
use should_http::prelude::*;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Model {
    string_property: String,
    int_property: i32,
}

impl Model {
    fn sample() -> Self {
        Self {
            string_property: "string".to_string(),
            int_property: 1,
        }
    }
}

fn response_with_model() -> HttpResponse {
    HttpResponse::builder().json_body(&Model::sample()).build()
}

#[test]
fn have_content_passes_on_exact_text() {
    HttpResponse::builder()
        .text_body("content")
        .build()
        .should()
        .have_content("content");
}

#[test]
#[should_panic(expected = "Expected response content to be \"ont\", but found \"content\".")]
fn have_content_fails_on_partial_match() {
    HttpResponse::builder()
        .text_body("content")
        .build()
        .should()
        .have_content("ont");
}

#[test]
#[should_panic(expected = "Expected response content to be \"\", but found \"content\".")]
fn have_content_fails_on_empty_expectation() {
    HttpResponse::builder()
        .text_body("content")
        .build()
        .should()
        .have_content("");
}

#[test]
#[should_panic(expected = "Expected response content, but the response was <none>.")]
fn have_content_fails_on_absent_response() {
    None::<HttpResponse>.should().have_content("ont");
}

#[test]
#[should_panic(expected = "Expected response content to be \"content\", but the response has no content.")]
fn have_content_fails_without_content() {
    HttpResponse::builder().build().should().have_content("content");
}

#[test]
fn single_character_mutation_fails() {
    let response = HttpResponse::builder().text_body("content").build();
    response.should().have_content("content");

    let failed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        response.should().have_content("contenu");
    }));
    assert!(failed.is_err());
}

#[test]
fn have_json_content_passes_on_equivalent_body() {
    response_with_model().should().have_json_content(&Model::sample());
}

#[test]
fn have_json_content_folds_key_case_by_default() {
    HttpResponse::builder()
        .body(r#"{"stringProperty":"string","intProperty":1}"#)
        .build()
        .should()
        .have_json_content(&Model::sample());
}

#[test]
#[should_panic(expected = "but found a difference at \"IntProperty\": expected 2, found 1.")]
fn have_json_content_fails_on_field_mismatch() {
    response_with_model().should().have_json_content(&Model {
        string_property: "string".to_string(),
        int_property: 2,
    });
}

#[test]
#[should_panic(expected = "Expected response content to be equivalent to")]
fn have_json_content_respects_case_sensitive_codec() {
    HttpResponse::builder()
        .body(r#"{"stringProperty":"string","intProperty":1}"#)
        .build()
        .should()
        .with_codec(JsonCodec::new().case_sensitive())
        .have_json_content(&Model::sample());
}

#[test]
#[should_panic(expected = "Expected response content, but the response was <none>.")]
fn have_json_content_fails_on_absent_response() {
    None::<HttpResponse>.should().have_json_content(&Model::sample());
}

#[test]
fn have_json_content_with_including_ignores_other_fields() {
    let expected = Model {
        string_property: "otherstring".to_string(),
        int_property: 1,
    };

    response_with_model()
        .should()
        .have_json_content_with(&expected, EquivalencyOptions::new().including("IntProperty"));
}

#[test]
fn have_json_content_with_excluding_skips_the_field() {
    let expected = Model {
        string_property: "otherstring".to_string(),
        int_property: 1,
    };

    response_with_model()
        .should()
        .have_json_content_with(&expected, EquivalencyOptions::new().excluding("StringProperty"));
}

#[test]
#[should_panic(expected = "but found a difference at \"StringProperty\"")]
fn have_json_content_with_including_still_compares_the_named_field() {
    let expected = Model {
        string_property: "otherstring".to_string(),
        int_property: 1,
    };

    response_with_model()
        .should()
        .have_json_content_with(&expected, EquivalencyOptions::new().including("StringProperty"));
}

#[test]
fn have_content_matching_passes_on_satisfied_predicate() {
    HttpResponse::builder()
        .text_body("hello world")
        .build()
        .should()
        .have_content_matching(|text| text.len() > 7 && text.starts_with("hello"));
}

#[test]
#[should_panic(expected = "Expected response content to match the given predicate, but it did not.")]
fn have_content_matching_fails_on_unsatisfied_predicate() {
    HttpResponse::builder()
        .text_body("hello world")
        .build()
        .should()
        .have_content_matching(|text| text.len() > 20);
}

#[test]
#[should_panic(expected = "Expected response content, but the response was <none>.")]
fn have_content_matching_fails_on_absent_response() {
    None::<HttpResponse>
        .should()
        .have_content_matching(|text| text.starts_with("hello"));
}

#[test]
fn have_json_content_matching_passes_on_satisfied_predicate() {
    response_with_model()
        .should()
        .have_json_content_matching::<Model, _>(|model| {
            model.int_property == 1 && model.string_property == "string"
        });
}

#[test]
#[should_panic(expected = "Expected response content to match the given predicate, but it did not.")]
fn have_json_content_matching_fails_on_unsatisfied_predicate() {
    response_with_model()
        .should()
        .have_json_content_matching::<Model, _>(|model| model.int_property == 2);
}

#[test]
#[should_panic(expected = "Failed to deserialize response content as")]
fn have_json_content_matching_surfaces_deserialization_errors() {
    HttpResponse::builder()
        .text_body("not json")
        .build()
        .should()
        .have_json_content_matching::<Model, _>(|model| model.int_property == 1);
}

#[test]
#[should_panic(expected = "Failed to deserialize response content as")]
fn have_json_content_surfaces_malformed_bodies() {
    HttpResponse::builder()
        .text_body("{not json")
        .build()
        .should()
        .have_json_content(&Model::sample());
}

#[test]
fn content_checks_chain_with_and() {
    HttpResponse::builder()
        .status(StatusCode::CREATED)
        .json_body(&Model::sample())
        .build()
        .should()
        .have_status_code(StatusCode::CREATED)
        .and()
        .have_json_content(&Model::sample())
        .and()
        .have_content_header_value("content-type", "application/json");
}
