//! Status-code assertion behavior.

use http::StatusCode;
use should_http::prelude::*;

fn response_with_status(status: StatusCode) -> HttpResponse {
    HttpResponse::builder().status(status).build()
}

#[test]
fn have_status_code_passes_on_exact_match() {
    response_with_status(StatusCode::ACCEPTED)
        .should()
        .have_status_code(StatusCode::ACCEPTED);
}

#[test]
#[should_panic(expected = "Expected status code to be 502 Bad Gateway, but found 202 Accepted.")]
fn have_status_code_fails_on_mismatch() {
    response_with_status(StatusCode::ACCEPTED)
        .should()
        .have_status_code(StatusCode::BAD_GATEWAY);
}

#[test]
#[should_panic(expected = "Expected status code to be 502 Bad Gateway, but the response was <none>.")]
fn have_status_code_fails_on_absent_response() {
    None::<HttpResponse>
        .should()
        .have_status_code(StatusCode::BAD_GATEWAY);
}

#[test]
fn have_informational_status_code_passes() {
    response_with_status(StatusCode::CONTINUE)
        .should()
        .have_informational_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 100 and 199, but found 202 Accepted.")]
fn have_informational_status_code_fails() {
    response_with_status(StatusCode::ACCEPTED)
        .should()
        .have_informational_status_code();
}

#[test]
fn have_success_status_code_passes() {
    response_with_status(StatusCode::NO_CONTENT)
        .should()
        .have_success_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 200 and 299, but found 404 Not Found.")]
fn have_success_status_code_fails() {
    response_with_status(StatusCode::NOT_FOUND)
        .should()
        .have_success_status_code();
}

#[test]
fn have_redirection_status_code_passes() {
    response_with_status(StatusCode::FOUND)
        .should()
        .have_redirection_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 300 and 399, but found 201 Created.")]
fn have_redirection_status_code_fails() {
    response_with_status(StatusCode::CREATED)
        .should()
        .have_redirection_status_code();
}

#[test]
fn have_client_error_status_code_passes() {
    response_with_status(StatusCode::CONFLICT)
        .should()
        .have_client_error_status_code();
}

#[test]
#[should_panic(
    expected = "Expected status code to be between 400 and 499, but found 503 Service Unavailable."
)]
fn have_client_error_status_code_fails() {
    response_with_status(StatusCode::SERVICE_UNAVAILABLE)
        .should()
        .have_client_error_status_code();
}

#[test]
fn have_server_error_status_code_passes() {
    response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
        .should()
        .have_server_error_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 500 and 599, but found 403 Forbidden.")]
fn have_server_error_status_code_fails() {
    response_with_status(StatusCode::FORBIDDEN)
        .should()
        .have_server_error_status_code();
}

#[test]
fn range_checks_include_both_bounds() {
    response_with_status(StatusCode::OK).should().have_success_status_code();
    response_with_status(StatusCode::from_u16(299).unwrap())
        .should()
        .have_success_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 200 and 299, but found")]
fn success_check_rejects_the_code_below_its_lower_bound() {
    response_with_status(StatusCode::from_u16(199).unwrap())
        .should()
        .have_success_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 200 and 299, but found")]
fn success_check_rejects_the_code_above_its_upper_bound() {
    response_with_status(StatusCode::from_u16(300).unwrap())
        .should()
        .have_success_status_code();
}

#[test]
#[should_panic(expected = "Expected status code to be between 100 and 199, but the response was <none>.")]
fn range_check_fails_on_absent_response() {
    None::<HttpResponse>.should().have_informational_status_code();
}

#[test]
fn status_checks_chain_with_other_checks() {
    let response = HttpResponse::builder()
        .status(StatusCode::ACCEPTED)
        .header("x-request-id", "7")
        .build();

    response
        .should()
        .have_status_code(StatusCode::ACCEPTED)
        .and()
        .have_success_status_code()
        .and()
        .have_response_header("x-request-id");
}
